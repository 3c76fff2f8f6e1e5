//! Crossfill assigns words from a vocabulary to the slots of a crossword
//! grid so that crossing slots agree on their shared letter and no word is
//! used twice.
//!
//! The crate is the constraint-solving core only: domain pruning (node and
//! arc consistency) and two interchangeable search strategies over the
//! pruned problem. Grid parsing, word-list loading and rendering live with
//! the caller; the hand-off points are [`Puzzle::new`] on the way in and
//! [`Puzzle::letter_grid`] on the way out.
//!
//! # Core Concepts
//!
//! - **[`Puzzle`]**: the immutable facts: slots ([`Variable`]s), the
//!   vocabulary, and the overlap map saying where slots cross.
//! - **[`SearchStrategy`]**: the solving capability. [`BacktrackingSearch`]
//!   (depth-first with MRV/degree and least-constraining-value ordering) is
//!   the primary strategy; [`BestFirstSearch`] (informed search over partial
//!   states) solves the identical problem by another route.
//! - **[`SearchStats`]**: counters from one solve call, including why an
//!   unsatisfiable puzzle was rejected.
//!
//! # Example: Two Crossing Slots
//!
//! An across slot and a down slot share one cell; the solver must pick two
//! distinct words agreeing on the shared letter.
//!
//! ```
//! use crossfill::puzzle::{Direction, Puzzle, Variable};
//! use crossfill::solver::backtracking::BacktrackingSearch;
//! use crossfill::solver::strategy::SearchStrategy;
//!
//! # fn main() -> crossfill::error::Result<()> {
//! // X runs across from (0,0); Y runs down from (0,1). X's second letter
//! // shares a cell with Y's first.
//! let puzzle = Puzzle::new(
//!     2,
//!     2,
//!     vec![
//!         Variable::new(0, 0, Direction::Across, 2),
//!         Variable::new(0, 1, Direction::Down, 2),
//!     ],
//!     ["IT", "TO", "OK"].map(String::from),
//!     &[((0, 1), (1, 0))],
//! )?;
//!
//! let solver = BacktrackingSearch::with_default_heuristics();
//! let (assignment, stats) = solver.solve(&puzzle)?;
//!
//! let assignment = assignment.expect("this puzzle is solvable");
//! assert!(assignment.is_complete(&puzzle));
//! assert!(assignment.is_consistent(&puzzle));
//! assert!(stats.unsat_reason.is_none());
//!
//! // Hand the result to a renderer as a letter grid.
//! let grid = puzzle.letter_grid(&assignment);
//! assert!(grid[0][1].is_some());
//! # Ok(())
//! # }
//! ```
//!
//! [`Puzzle`]: puzzle::Puzzle
//! [`Puzzle::new`]: puzzle::Puzzle::new
//! [`Puzzle::letter_grid`]: puzzle::Puzzle::letter_grid
//! [`Variable`]: puzzle::Variable
//! [`SearchStrategy`]: solver::strategy::SearchStrategy
//! [`BacktrackingSearch`]: solver::backtracking::BacktrackingSearch
//! [`BestFirstSearch`]: solver::best_first::BestFirstSearch
//! [`SearchStats`]: solver::stats::SearchStats

pub mod error;
pub mod puzzle;
pub mod solver;
