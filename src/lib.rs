/// Command parsing and execution (`put`, `get`, `delete`).
pub mod command;
/// Settings loading.
pub mod config;
/// Built-in data structures: the fixed-size chained dict.
pub mod database;
/// Count-prefixed script runner.
pub mod driver;
/// Storage abstraction and the integer key-value store.
pub mod engine;
/// Error types: dict construction, command parsing, driver.
pub mod error;
/// Logging initialisation.
pub mod logging;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// Commands and their replies.
pub use command::{
    parse_command, parse_line, Command, CommandExecute, DeleteCommand, GetCommand, PutCommand,
    Reply,
};
/// config
pub use config::Settings;
/// Data types.
pub use database::{bucket_index, DictStats, FixedDict, DEFAULT_BUCKETS};
/// Script runner.
pub use driver::{run, RunSummary};
/// Storage.
pub use engine::{KeyValueStore, Storage};
/// Operation errors and result types.
pub use error::{DictError, DriverError, DriverResult, ParseError};
