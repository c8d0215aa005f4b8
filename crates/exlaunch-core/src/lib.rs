//! # exlaunch-core
//!
//! Shared types for the exlaunch tooling:
//! - Console connection configuration
//! - Response frame decoding
//! - Error types

pub mod config;
pub mod error;
pub mod frame;

pub use config::{CONSOLE_PORT, ConsoleConfig, IP_VAR};
pub use error::{ExlaunchError, Result};
pub use frame::{RESPONSE_BUFFER_SIZE, ResponseFrame};
