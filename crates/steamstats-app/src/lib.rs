//! # Steam Stats App
//!
//! The `steamstats` command-line front end: argument parsing, startup, the
//! one-shot dataset load and the dashboard session that turns selections into
//! chart images, JSON or a text summary.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod error;
pub mod session;

pub use cli::*;
pub use error::*;
pub use session::*;
