use tracing::trace;

use crate::{
    error::Result,
    puzzle::Puzzle,
    solver::{
        assignment::Assignment,
        consistency::pruned_domains,
        domains::DomainStore,
        heuristics::{
            value::{LeastConstrainingValueHeuristic, ValueOrderingHeuristic},
            variable::{MinimumRemainingValuesHeuristic, VariableSelectionHeuristic},
        },
        stats::{SearchStats, UnsatReason},
        strategy::SearchStrategy,
    },
};

/// Depth-first search over assignments, driven by pluggable variable and
/// value ordering heuristics.
///
/// Each recursion extends a persistent [`Assignment`] and recurses only when
/// the extension is consistent; a failed subtree is abandoned by dropping the
/// extension, so there is no undo bookkeeping. Recursion depth is bounded by
/// the variable count.
pub struct BacktrackingSearch {
    variable_heuristic: Box<dyn VariableSelectionHeuristic>,
    value_heuristic: Box<dyn ValueOrderingHeuristic>,
}

impl BacktrackingSearch {
    pub fn new(
        variable_heuristic: Box<dyn VariableSelectionHeuristic>,
        value_heuristic: Box<dyn ValueOrderingHeuristic>,
    ) -> Self {
        Self {
            variable_heuristic,
            value_heuristic,
        }
    }

    /// The standard pairing: minimum-remaining-values with degree tie-break
    /// for variables, least-constraining-value for words.
    pub fn with_default_heuristics() -> Self {
        Self::new(
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(LeastConstrainingValueHeuristic),
        )
    }

    fn search(
        &self,
        puzzle: &Puzzle,
        domains: &DomainStore,
        assignment: Assignment,
        stats: &mut SearchStats,
    ) -> Option<Assignment> {
        stats.nodes_visited += 1;

        if assignment.is_complete(puzzle) {
            return Some(assignment);
        }

        let var = self
            .variable_heuristic
            .select_variable(puzzle, domains, &assignment)?;

        for word in self
            .value_heuristic
            .order_values(puzzle, domains, &assignment, var)
        {
            trace!(var, %word, "trying candidate");
            let candidate = assignment.assign(var, word);
            if candidate.is_consistent(puzzle) {
                if let Some(found) = self.search(puzzle, domains, candidate, stats) {
                    return Some(found);
                }
            }
            stats.backtracks += 1;
        }

        None
    }
}

impl Default for BacktrackingSearch {
    fn default() -> Self {
        Self::with_default_heuristics()
    }
}

impl SearchStrategy for BacktrackingSearch {
    fn solve(&self, puzzle: &Puzzle) -> Result<(Option<Assignment>, SearchStats)> {
        let mut stats = SearchStats::default();
        let Some(domains) = pruned_domains(puzzle, &mut stats) else {
            return Ok((None, stats));
        };

        let result = self.search(puzzle, &domains, Assignment::new(), &mut stats);
        if result.is_none() {
            stats.unsat_reason = Some(UnsatReason::SearchExhausted);
        }
        Ok((result, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{Direction, Variable, Word};
    use pretty_assertions::assert_eq;

    fn crossing_pair(words: &[&str]) -> Puzzle {
        Puzzle::new(
            2,
            2,
            vec![
                Variable::new(0, 0, Direction::Across, 2),
                Variable::new(0, 1, Direction::Down, 2),
            ],
            words.iter().map(|w| w.to_string()),
            &[((0, 1), (1, 0))],
        )
        .unwrap()
    }

    #[test]
    fn solves_the_crossing_pair_with_one_of_the_two_valid_fills() {
        let _ = tracing_subscriber::fmt::try_init();

        let puzzle = crossing_pair(&["IT", "TO", "OK"]);
        let solver = BacktrackingSearch::with_default_heuristics();
        let (assignment, stats) = solver.solve(&puzzle).unwrap();
        let assignment = assignment.expect("solvable puzzle");

        assert!(assignment.is_complete(&puzzle));
        assert!(assignment.is_consistent(&puzzle));
        assert_eq!(stats.unsat_reason, None);

        let fill = (
            assignment.get(0).unwrap().as_ref(),
            assignment.get(1).unwrap().as_ref(),
        );
        assert!(
            fill == ("IT", "TO") || fill == ("TO", "OK"),
            "unexpected fill {fill:?}"
        );
    }

    #[test]
    fn counting_infeasibility_short_circuits_before_any_work() {
        // Two length-2 slots, one length-2 word.
        let puzzle = crossing_pair(&["IT", "WORDS"]);
        let solver = BacktrackingSearch::with_default_heuristics();
        let (assignment, stats) = solver.solve(&puzzle).unwrap();

        assert!(assignment.is_none());
        assert_eq!(stats.unsat_reason, Some(UnsatReason::InfeasibleByCount));
        assert_eq!(stats.revise_calls, 0);
        assert_eq!(stats.prunings, 0);
        assert_eq!(stats.nodes_visited, 0);
    }

    #[test]
    fn propagation_wipeout_is_reported_without_search() {
        // Second letters {B}, first letters {A, C}: the crossing can never
        // agree.
        let puzzle = crossing_pair(&["AB", "CB"]);
        let solver = BacktrackingSearch::with_default_heuristics();
        let (assignment, stats) = solver.solve(&puzzle).unwrap();

        assert!(assignment.is_none());
        assert_eq!(stats.unsat_reason, Some(UnsatReason::DomainExhausted));
        assert_eq!(stats.nodes_visited, 0);
    }

    #[test]
    fn word_reuse_forces_search_exhaustion() {
        // AA and BB each support only themselves at the crossing, so every
        // complete fill would have to reuse a word. The counting check and
        // propagation both pass; only the search discovers the dead end.
        let puzzle = crossing_pair(&["AA", "BB"]);
        let solver = BacktrackingSearch::with_default_heuristics();
        let (assignment, stats) = solver.solve(&puzzle).unwrap();

        assert!(assignment.is_none());
        assert_eq!(stats.unsat_reason, Some(UnsatReason::SearchExhausted));
        assert!(stats.nodes_visited > 0);
    }

    #[test]
    fn solves_a_three_slot_grid() {
        let puzzle = Puzzle::new(
            3,
            3,
            vec![
                Variable::new(0, 0, Direction::Across, 3),
                Variable::new(0, 0, Direction::Down, 3),
                Variable::new(2, 0, Direction::Across, 3),
            ],
            ["CAT", "COW", "TIP", "WET", "PEA"].map(String::from),
            &[((0, 1), (0, 0)), ((1, 2), (2, 0))],
        )
        .unwrap();

        let solver = BacktrackingSearch::with_default_heuristics();
        let (assignment, _) = solver.solve(&puzzle).unwrap();
        let assignment = assignment.expect("solvable grid");
        assert!(assignment.is_complete(&puzzle));
        assert!(assignment.is_consistent(&puzzle));
    }

    #[test]
    fn identity_value_ordering_also_finds_a_solution() {
        use crate::solver::heuristics::{
            value::IdentityValueHeuristic, variable::SelectFirstHeuristic,
        };

        let puzzle = crossing_pair(&["IT", "TO", "OK"]);
        let solver = BacktrackingSearch::new(
            Box::new(SelectFirstHeuristic),
            Box::new(IdentityValueHeuristic),
        );
        let (assignment, _) = solver.solve(&puzzle).unwrap();
        let assignment = assignment.expect("solvable puzzle");
        assert!(assignment.is_consistent(&puzzle));
    }

    #[test]
    fn returned_words_are_pairwise_distinct() {
        let puzzle = Puzzle::new(
            3,
            2,
            vec![
                Variable::new(0, 0, Direction::Across, 2),
                Variable::new(1, 0, Direction::Across, 2),
                Variable::new(2, 0, Direction::Across, 2),
            ],
            ["AT", "ON", "UP"].map(String::from),
            &[],
        )
        .unwrap();

        let solver = BacktrackingSearch::with_default_heuristics();
        let (assignment, _) = solver.solve(&puzzle).unwrap();
        let assignment = assignment.expect("three free slots, three words");

        let words: std::collections::HashSet<Word> =
            assignment.iter().map(|(_, w)| w.clone()).collect();
        assert_eq!(words.len(), 3);
    }
}
