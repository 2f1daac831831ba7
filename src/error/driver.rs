use std::io;

use thiserror::Error;

use super::ParseError;

pub type DriverResult<T> = Result<T, DriverError>;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("IO error")]
    Io(#[from] io::Error),

    #[error("Input is empty: expected the number of operations")]
    MissingCount,

    #[error("Invalid number of operations: '{0}'")]
    InvalidCount(String),

    #[error("Command #{index}")]
    Command {
        index: usize,
        #[source]
        source: ParseError,
    },

    #[error("Input ended after {executed} of {expected} commands")]
    Truncated { expected: usize, executed: usize },
}
