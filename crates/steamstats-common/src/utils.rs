//! Shared formatting helpers.

/// Formats a player count for axis ticks and summaries: `950`, `12.5K`, `1.25M`.
pub fn format_player_count(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        trim_decimals(value / 1_000_000.0, "M")
    } else if abs >= 1_000.0 {
        trim_decimals(value / 1_000.0, "K")
    } else {
        format!("{value:.0}")
    }
}

fn trim_decimals(scaled: f64, suffix: &str) -> String {
    let text = format!("{scaled:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{text}{suffix}")
}

/// Truncates a string to a maximum number of characters with ellipsis.
pub fn truncate_string(input: &str, max_length: usize) -> String {
    if input.chars().count() <= max_length {
        input.to_string()
    } else {
        let kept: String = input.chars().take(max_length.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Turns a free-form label (game names contain `:` and spaces) into a file name stem.
pub fn sanitize_file_stem(input: &str) -> String {
    let mut stem = String::with_capacity(input.len());
    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            stem.push(c.to_ascii_lowercase());
        } else if !stem.is_empty() && !stem.ends_with('_') {
            stem.push('_');
        }
    }
    let stem = stem.trim_end_matches('_');
    if stem.is_empty() {
        "chart".to_string()
    } else {
        stem.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_player_count() {
        assert_eq!(format_player_count(950.0), "950");
        assert_eq!(format_player_count(12_500.0), "12.5K");
        assert_eq!(format_player_count(1_000_000.0), "1M");
        assert_eq!(format_player_count(1_254_000.0), "1.25M");
        assert_eq!(format_player_count(0.0), "0");
    }

    #[test]
    fn test_truncate_string() {
        let input = "Counter Strike: Global Offensive";
        assert_eq!(truncate_string(input, 12), "Counter S...");
        assert_eq!(truncate_string("Dota 2", 12), "Dota 2");
    }

    #[test]
    fn test_truncate_string_multibyte() {
        assert_eq!(truncate_string("平均玩家平均玩家", 5), "平均...");
    }

    #[test]
    fn test_sanitize_file_stem() {
        assert_eq!(sanitize_file_stem("PUBG: Battlegrounds"), "pubg_battlegrounds");
        assert_eq!(sanitize_file_stem("Dota 2"), "dota_2");
        assert_eq!(sanitize_file_stem("::"), "chart");
    }
}
