//! Field validators and cross-field configuration checks.

use crate::schema::Config;
use std::collections::HashSet;
use validator::{Validate, ValidationError, ValidationErrors};

/// Validate a `#RRGGBB` colour.
pub fn validate_hex_color(color: &str) -> Result<(), ValidationError> {
    let valid = color
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()));

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_hex_color"))
    }
}

impl Config {
    /// Runs the derived field validation plus checks spanning several fields.
    pub fn validate_all(&self) -> Result<(), ValidationErrors> {
        self.validate()?;

        let mut errors = ValidationErrors::new();

        let mut names = HashSet::new();
        let mut aliases = HashSet::new();
        for game in &self.comparison.games {
            if !names.insert(game.name.as_str()) {
                let mut error = ValidationError::new("duplicate_comparison_game");
                error.message = Some(format!("Game '{}' is listed twice", game.name).into());
                errors.add("comparison", error);
            }

            let alias = game.alias.as_deref().unwrap_or(&game.name);
            if !aliases.insert(alias) {
                let mut error = ValidationError::new("duplicate_comparison_alias");
                error.message = Some(format!("Alias '{alias}' is used twice").into());
                errors.add("comparison", error);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
