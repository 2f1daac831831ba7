pub mod dict_base;

// Publicly re-export the dict types and functions from the submodule to
// simplify access from external code.
pub use dict_base::*;
