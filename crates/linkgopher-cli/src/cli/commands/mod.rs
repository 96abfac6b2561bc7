//! CLI command handlers.

mod convert;

pub use convert::run_convert;
