use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("{command}: missing argument <{argument}>")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("{argument}: expected a 64-bit integer, got '{value}'")]
    InvalidInteger {
        argument: &'static str,
        value: String,
    },

    #[error("Unexpected trailing input: '{0}'")]
    TrailingInput(String),
}
