pub mod clipboard;
pub mod config;
pub mod link;
pub mod logging;
