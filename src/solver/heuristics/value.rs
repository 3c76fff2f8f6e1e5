//! Heuristics for ordering the candidate words tried for a chosen slot.

use crate::{
    puzzle::{Puzzle, VariableId, Word},
    solver::{assignment::Assignment, domains::DomainStore, letter_at},
};

/// A strategy for ordering a variable's candidate words before the search
/// tries them.
pub trait ValueOrderingHeuristic {
    fn order_values(
        &self,
        puzzle: &Puzzle,
        domains: &DomainStore,
        assignment: &Assignment,
        var: VariableId,
    ) -> Vec<Word>;
}

/// Returns candidates in domain iteration order. Cheap, but blind.
pub struct IdentityValueHeuristic;

impl ValueOrderingHeuristic for IdentityValueHeuristic {
    fn order_values(
        &self,
        _puzzle: &Puzzle,
        domains: &DomainStore,
        _assignment: &Assignment,
        var: VariableId,
    ) -> Vec<Word> {
        domains.get(var).iter().cloned().collect()
    }
}

/// Least-constraining-value ordering: candidates that eliminate fewer
/// options from unassigned neighbors' domains come first.
///
/// A neighbor's candidate counts as eliminated when it disagrees with the
/// tentative word at the recorded overlap position. Already-assigned
/// neighbors contribute nothing. Ties order alphabetically so the result is
/// deterministic.
pub struct LeastConstrainingValueHeuristic;

impl LeastConstrainingValueHeuristic {
    fn eliminations(
        puzzle: &Puzzle,
        domains: &DomainStore,
        assignment: &Assignment,
        var: VariableId,
        word: &Word,
    ) -> usize {
        let mut eliminated = 0;
        for &neighbor in puzzle.neighbors(var) {
            if assignment.contains(neighbor) {
                continue;
            }
            let (i, j) = puzzle.overlap(var, neighbor).unwrap();
            let shared = letter_at(word, i);
            eliminated += domains
                .get(neighbor)
                .iter()
                .filter(|candidate| letter_at(candidate, j) != shared)
                .count();
        }
        eliminated
    }
}

impl ValueOrderingHeuristic for LeastConstrainingValueHeuristic {
    fn order_values(
        &self,
        puzzle: &Puzzle,
        domains: &DomainStore,
        assignment: &Assignment,
        var: VariableId,
    ) -> Vec<Word> {
        let mut scored: Vec<(usize, Word)> = domains
            .get(var)
            .iter()
            .map(|word| {
                (
                    Self::eliminations(puzzle, domains, assignment, var, word),
                    word.clone(),
                )
            })
            .collect();
        scored.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
        scored.into_iter().map(|(_, word)| word).collect()
    }
}
