//! # Steam Stats Common
//!
//! Shared types, utilities, and common functionality for Steam Stats.
//!
//! This crate provides the player-record data model, the workspace error type,
//! logging initialisation and small formatting helpers used by every other
//! crate in the workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{Result, StatsError};
pub use logging::{init_default_logging, init_logging, LogFormat, LoggingConfig, LoggingGuard};
pub use types::*;
pub use utils::*;
