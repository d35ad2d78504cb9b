//! # Steam Stats I18n
//!
//! Display strings for the dashboard in English, Simplified Chinese and French.
//!
//! Every language is one static [`LocaleTable`]; there is no message catalogue
//! or formatting engine. Adding a language means adding a [`Locale`] variant
//! and its table, nothing in the data pipeline changes.
//!
//! # Example
//!
//! ```rust
//! use steamstats_i18n::locale_table;
//!
//! let table = locale_table("fr");
//! assert_eq!(table.year_select, "Année:");
//! assert_eq!(table.month_tick("March 2020"), "Mar");
//!
//! // Unknown codes fall back to English.
//! assert_eq!(locale_table("xx").page_title, "Steam Player Statistics");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod locale;
pub mod messages;

pub use error::{I18nError, I18nResult};
pub use locale::Locale;
pub use messages::{locale_table, LocaleTable, ENGLISH_MONTHS};
