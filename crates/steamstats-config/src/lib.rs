//! # Steam Stats Config
//!
//! Type-safe configuration management for Steam Stats.
//!
//! This crate provides the YAML schema, its defaults, discovery and loading
//! with environment variable overrides, and validation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::*;
pub use schema::*;
pub use validation::*;
