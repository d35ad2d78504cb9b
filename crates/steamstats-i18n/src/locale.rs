//! Supported locales and code lookup

use crate::error::{I18nError, I18nResult};
use crate::messages::{LocaleTable, CHINESE, ENGLISH, FRENCH};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported locales
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Locale {
    /// English, the fallback locale.
    #[default]
    English,
    /// Simplified Chinese.
    Chinese,
    /// French.
    French,
}

impl Locale {
    /// Get the language code for this locale
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Chinese => "cn",
            Self::French => "fr",
        }
    }

    /// Parse a locale from a language code, case-insensitively.
    ///
    /// Region-qualified codes (`en-US`, `zh-CN`, `fr_FR`) resolve by their
    /// language part.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        let language = code.split(['-', '_']).next().unwrap_or_default();
        match language {
            "en" => Some(Self::English),
            "cn" | "zh" => Some(Self::Chinese),
            "fr" => Some(Self::French),
            _ => None,
        }
    }

    /// Get all supported locales, in selector order
    pub const fn all() -> [Self; 3] {
        [Self::English, Self::Chinese, Self::French]
    }

    /// Get the display name for this locale, in its own language
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Chinese => "简体中文",
            Self::French => "Francais",
        }
    }

    /// The display strings of this locale
    pub const fn table(self) -> &'static LocaleTable {
        match self {
            Self::English => &ENGLISH,
            Self::Chinese => &CHINESE,
            Self::French => &FRENCH,
        }
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> I18nResult<Self> {
        Self::from_code(s).ok_or_else(|| I18nError::UnsupportedLocale(s.to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
