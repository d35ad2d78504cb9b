//! # Steam Stats Graphs
//!
//! The CSV-to-chart data pipeline behind the Steam player statistics dashboard,
//! and the `plotters` renderers that draw its output.
//!
//! Data flows leaf-first:
//!
//! 1. [`parser`] turns delimited text into [`PlayerRecord`](steamstats_common::PlayerRecord)s,
//!    degrading bad numbers to `0` and bad dates to the invalid marker.
//! 2. [`store`] holds the immutable dataset and derives selector options.
//! 3. [`series`] builds the single-game line chart series.
//! 4. [`aggregation`] pivots the whitelisted games into per-month bar chart rows.
//!
//! [`loader`] performs the one asynchronous step (reading the file), and
//! [`manager::Dashboard`] is the read-only facade handed to the presentation side.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregation;
pub mod loader;
pub mod manager;
pub mod parser;
pub mod renderer;
pub mod series;
pub mod store;
pub mod traits;
pub mod utils;

pub use aggregation::*;
pub use loader::*;
pub use manager::*;
pub use parser::*;
pub use renderer::*;
pub use series::*;
pub use store::*;
pub use traits::*;
pub use utils::*;
