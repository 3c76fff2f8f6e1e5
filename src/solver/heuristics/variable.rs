//! Heuristics for choosing which unassigned slot to branch on next.

use std::cmp::Reverse;

use crate::{
    puzzle::{Puzzle, VariableId},
    solver::{assignment::Assignment, domains::DomainStore},
};

/// A strategy for picking the next variable to assign.
///
/// Implementations see the pruned domains and the partial assignment; a good
/// choice here dramatically narrows the search tree.
pub trait VariableSelectionHeuristic {
    /// Picks an unassigned variable, or `None` when every variable is
    /// already assigned.
    fn select_variable(
        &self,
        puzzle: &Puzzle,
        domains: &DomainStore,
        assignment: &Assignment,
    ) -> Option<VariableId>;
}

/// Picks the unassigned variable with the smallest id. Deterministic
/// baseline, useful in tests.
pub struct SelectFirstHeuristic;

impl VariableSelectionHeuristic for SelectFirstHeuristic {
    fn select_variable(
        &self,
        puzzle: &Puzzle,
        _domains: &DomainStore,
        assignment: &Assignment,
    ) -> Option<VariableId> {
        puzzle.variable_ids().find(|&id| !assignment.contains(id))
    }
}

/// Picks an unassigned variable at random.
pub struct RandomVariableHeuristic;

impl VariableSelectionHeuristic for RandomVariableHeuristic {
    fn select_variable(
        &self,
        puzzle: &Puzzle,
        _domains: &DomainStore,
        assignment: &Assignment,
    ) -> Option<VariableId> {
        use rand::seq::IteratorRandom;

        puzzle
            .variable_ids()
            .filter(|&id| !assignment.contains(id))
            .choose(&mut rand::thread_rng())
    }
}

/// Minimum-remaining-values: the unassigned variable with the smallest
/// current domain, the "fail-first" strategy.
///
/// Ties break to the variable with the most neighbors (maximum degree);
/// remaining ties go to the smallest id for determinism.
pub struct MinimumRemainingValuesHeuristic;

impl VariableSelectionHeuristic for MinimumRemainingValuesHeuristic {
    fn select_variable(
        &self,
        puzzle: &Puzzle,
        domains: &DomainStore,
        assignment: &Assignment,
    ) -> Option<VariableId> {
        puzzle
            .variable_ids()
            .filter(|&id| !assignment.contains(id))
            .min_by_key(|&id| (domains.len(id), Reverse(puzzle.neighbors(id).len()), id))
    }
}
