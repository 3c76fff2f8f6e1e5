use std::backtrace::Backtrace;

use crate::puzzle::VariableId;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised while building a [`Puzzle`](crate::puzzle::Puzzle).
///
/// A well-formed but unsatisfiable puzzle is *not* an error; solvers report
/// that outcome as `Ok((None, stats))`.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("variable {0} has zero length")]
    ZeroLengthVariable(VariableId),
    #[error("crossing references unknown variable {0}")]
    UnknownVariable(VariableId),
    #[error("crossing ({a}, {b}) index {index} is outside variable {var} (length {length})")]
    OverlapOutOfRange {
        a: VariableId,
        b: VariableId,
        var: VariableId,
        index: usize,
        length: usize,
    },
    #[error("variable {0} cannot cross itself")]
    SelfCrossing(VariableId),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<PuzzleError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<PuzzleError> for Error {
    fn from(inner: PuzzleError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}
