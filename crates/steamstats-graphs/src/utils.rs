//! Graph utility functions and helpers.

/// Utility functions for graph generation.
pub struct GraphUtils;

impl GraphUtils {
    /// Upper bound of the value axis: `max_value` plus 5% headroom, rounded up
    /// to a whole multiple of its leading power of ten.
    #[allow(clippy::cast_possible_truncation)]
    pub fn axis_ceiling(max_value: f64) -> f64 {
        if !max_value.is_finite() || max_value <= 0.0 {
            return 1.0;
        }
        let padded = max_value * 1.05;
        let magnitude = 10f64.powi(padded.log10().floor() as i32);
        (padded / magnitude).ceil() * magnitude
    }

    /// Largest finite value, or `0.0`.
    pub fn max_value(values: impl IntoIterator<Item = f64>) -> f64 {
        values
            .into_iter()
            .filter(|value| value.is_finite())
            .fold(0.0, f64::max)
    }

    /// Image file name for a chart.
    pub fn chart_file_name(kind: &str, subject: &str, year_text: &str) -> String {
        let stem = steamstats_common::sanitize_file_stem(&format!("{kind} {subject} {year_text}"));
        format!("{stem}.png")
    }
}
