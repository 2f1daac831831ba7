pub mod memory;
pub mod storage;

pub use memory::*;
pub use storage::*;
