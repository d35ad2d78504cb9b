//! Record parser: delimited text to typed [`PlayerRecord`]s.
//!
//! Parsing never fails. Numeric fields that cannot be read become `0`, dates
//! that do not match the configured format become [`RecordDate::Invalid`], and
//! rows the CSV reader cannot decode are skipped with a warning.

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use std::io::Read;
use steamstats_common::{PlayerRecord, RecordDate};
use steamstats_config::DatasetConfig;
use tracing::{debug, warn};

/// Characters removed from numeric fields before parsing.
pub const THOUSANDS_SEPARATORS: [char; 4] = [',', ' ', '\u{00a0}', '\u{202f}'];

/// Header names and date format of the input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvSchema {
    /// Month-year label column.
    pub period_label: String,
    /// Date column.
    pub date: String,
    /// Game name column.
    pub game_name: String,
    /// Average players column.
    pub avg_players: String,
    /// Peak players column.
    pub peak_players: String,
    /// `chrono` format of the date column.
    pub date_format: String,
}

impl Default for CsvSchema {
    fn default() -> Self {
        Self::from(&DatasetConfig::default())
    }
}

impl From<&DatasetConfig> for CsvSchema {
    fn from(config: &DatasetConfig) -> Self {
        Self {
            period_label: config.columns.period_label.clone(),
            date: config.columns.date.clone(),
            game_name: config.columns.game_name.clone(),
            avg_players: config.columns.avg_players.clone(),
            peak_players: config.columns.peak_players.clone(),
            date_format: config.date_format.clone(),
        }
    }
}

/// What happened while parsing one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    /// Records produced.
    pub rows_read: usize,
    /// Rows the reader could not decode.
    pub rows_skipped: usize,
    /// Non-empty numeric fields that were replaced by `0`.
    pub degraded_numbers: usize,
    /// Records whose date did not parse.
    pub invalid_dates: usize,
    /// Schema columns absent from the header.
    pub missing_columns: Vec<String>,
}

/// Header positions of the schema columns.
#[derive(Debug, Default)]
struct ColumnIndex {
    period_label: Option<usize>,
    date: Option<usize>,
    game_name: Option<usize>,
    avg_players: Option<usize>,
    peak_players: Option<usize>,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, schema: &CsvSchema, missing: &mut Vec<String>) -> Self {
        let mut find = |name: &str| {
            let position = headers.iter().position(|header| header.trim() == name);
            if position.is_none() {
                missing.push(name.to_string());
            }
            position
        };

        Self {
            period_label: find(&schema.period_label),
            date: find(&schema.date),
            game_name: find(&schema.game_name),
            avg_players: find(&schema.avg_players),
            peak_players: find(&schema.peak_players),
        }
    }
}

fn field(record: &StringRecord, index: Option<usize>) -> &str {
    index
        .and_then(|position| record.get(position))
        .map_or("", str::trim)
}

/// Removes thousands separators from a numeric field.
pub fn strip_thousands_separators(text: &str) -> String {
    text.chars()
        .filter(|c| !THOUSANDS_SEPARATORS.contains(c))
        .collect()
}

/// `None` when non-empty text is not a finite, non-negative number.
fn parse_count(text: &str) -> Option<f64> {
    let cleaned = strip_thousands_separators(text);
    if cleaned.is_empty() {
        return Some(0.0);
    }
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

/// Parses an average player count, `0.0` when the text is empty or unreadable.
pub fn parse_avg_players(text: &str) -> f64 {
    parse_count(text).unwrap_or(0.0)
}

/// Parses a peak player count, truncating any fractional part.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_peak_players(text: &str) -> u64 {
    let cleaned = strip_thousands_separators(text);
    cleaned
        .parse::<u64>()
        .unwrap_or_else(|_| parse_count(&cleaned).map_or(0, |value| value.trunc() as u64))
}

/// Parses the date column with `format`.
pub fn parse_record_date(text: &str, format: &str) -> RecordDate {
    RecordDate::from(NaiveDate::parse_from_str(text, format).ok())
}

/// Parses CSV text into records.
pub fn parse_records(text: &str, schema: &CsvSchema) -> Vec<PlayerRecord> {
    parse_records_from_reader(text.as_bytes(), schema)
}

/// Parses CSV from any reader into records.
pub fn parse_records_from_reader<R: Read>(reader: R, schema: &CsvSchema) -> Vec<PlayerRecord> {
    parse_with_report(reader, schema).0
}

/// Parses CSV from a reader, also returning what was degraded or skipped.
pub fn parse_with_report<R: Read>(
    reader: R,
    schema: &CsvSchema,
) -> (Vec<PlayerRecord>, ParseReport) {
    let mut report = ParseReport::default();
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(e) => {
            warn!("Unreadable CSV header, no records parsed: {}", e);
            return (Vec::new(), report);
        }
    };
    let columns = ColumnIndex::resolve(&headers, schema, &mut report.missing_columns);
    if !report.missing_columns.is_empty() {
        warn!(
            "CSV header lacks columns {:?}, their values default",
            report.missing_columns
        );
    }

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                warn!("Skipping CSV row {}: {}", index + 1, e);
                report.rows_skipped += 1;
                continue;
            }
        };

        let avg_text = field(&row, columns.avg_players);
        let peak_text = field(&row, columns.peak_players);
        report.degraded_numbers += [avg_text, peak_text]
            .iter()
            .filter(|text| parse_count(text).is_none())
            .count();

        let date = parse_record_date(field(&row, columns.date), &schema.date_format);
        if !date.is_valid() {
            report.invalid_dates += 1;
        }

        records.push(PlayerRecord {
            period_label: field(&row, columns.period_label).to_string(),
            date,
            game_name: field(&row, columns.game_name).to_string(),
            avg_players: parse_avg_players(avg_text),
            peak_players: parse_peak_players(peak_text),
        });
    }

    report.rows_read = records.len();
    debug!(
        "Parsed {} records ({} skipped, {} degraded numbers, {} invalid dates)",
        report.rows_read, report.rows_skipped, report.degraded_numbers, report.invalid_dates
    );
    (records, report)
}
