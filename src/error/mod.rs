pub mod driver;
pub mod parser;

pub use driver::{DriverError, DriverResult};
pub use parser::ParseError;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DictError {
    #[error("Bucket count must be greater than zero")]
    ZeroBuckets,
}
