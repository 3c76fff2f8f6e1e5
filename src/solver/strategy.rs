use crate::{
    error::Result,
    puzzle::Puzzle,
    solver::{assignment::Assignment, stats::SearchStats},
};

/// A complete solving strategy: pruning plus search, producing either a
/// complete consistent [`Assignment`] or `None` for an unsatisfiable puzzle.
///
/// The two families, [`BacktrackingSearch`] and [`BestFirstSearch`], solve
/// the identical problem and are interchangeable behind this trait; callers
/// pick one. Every call owns its own domain store, so concurrent or repeated
/// solves over one [`Puzzle`] never share mutable state.
///
/// [`BacktrackingSearch`]: crate::solver::backtracking::BacktrackingSearch
/// [`BestFirstSearch`]: crate::solver::best_first::BestFirstSearch
pub trait SearchStrategy {
    /// Solves the puzzle.
    ///
    /// `Ok((None, stats))` means the puzzle is unsatisfiable, an ordinary
    /// outcome, with the reason recorded in `stats.unsat_reason`. `Err` is
    /// reserved for faults, never for unsatisfiability.
    fn solve(&self, puzzle: &Puzzle) -> Result<(Option<Assignment>, SearchStats)>;
}
