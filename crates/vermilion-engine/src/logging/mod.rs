//! Logging utilities.
//!
//! This module centralizes logger initialization and keeps the rest of the
//! crate on the standard `log` facade. The backend is `env_logger`, which is
//! enough for a program whose only user-facing output is console diagnostics.

mod init;

pub use init::{LoggingConfig, init_logging};
