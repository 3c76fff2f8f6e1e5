pub mod crossword;
pub mod variable;

use std::sync::Arc;

pub use crossword::Puzzle;
pub use variable::{Direction, Variable};

/// Index of a variable within its puzzle's variable list.
pub type VariableId = u32;

/// A vocabulary entry. `Arc<str>` keeps assignment and domain clones cheap.
pub type Word = Arc<str>;

/// Character positions `(index_in_first, index_in_second)` at which an
/// ordered pair of crossing variables must agree.
pub type Overlap = (usize, usize);
