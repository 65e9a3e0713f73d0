//! CLI command implementations.

pub mod analyse;
pub mod server_logs;
pub mod wait;
