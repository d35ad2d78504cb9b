//! One-shot asynchronous dataset load.

use crate::parser::{parse_with_report, CsvSchema, ParseReport};
use crate::store::RecordStore;
use serde::Serialize;
use std::path::{Path, PathBuf};
use steamstats_common::{Result, StatsError};
use steamstats_config::DatasetConfig;
use tracing::{error, info, instrument, warn};

/// Outcome of a load, surfaced to the presentation side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadStatus {
    /// The file was read and parsed.
    Loaded {
        /// Records parsed.
        rows: usize,
    },
    /// The file could not be read; the store is empty.
    Failed {
        /// Human-readable cause.
        reason: String,
    },
}

impl LoadStatus {
    /// Returns `true` for a successful load.
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}

/// A store together with how it was obtained.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    /// Parsed records; empty on failure.
    pub store: RecordStore,
    /// Load outcome.
    pub status: LoadStatus,
    /// Parse statistics when the file was read.
    pub report: Option<ParseReport>,
}

/// Reads and parses the dataset file.
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    path: PathBuf,
    schema: CsvSchema,
}

impl DatasetLoader {
    /// Creates a loader for `path` with the given schema.
    pub fn new(path: impl Into<PathBuf>, schema: CsvSchema) -> Self {
        Self {
            path: path.into(),
            schema,
        }
    }

    /// Creates a loader from the dataset configuration section.
    pub fn from_config(config: &DatasetConfig) -> Self {
        Self::new(&config.path, CsvSchema::from(config))
    }

    /// File this loader reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the file, propagating read failures.
    pub async fn try_load(&self) -> Result<(RecordStore, ParseReport)> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            StatsError::load_with_source(
                self.path.display().to_string(),
                "Failed to read dataset",
                e,
            )
        })?;

        let (records, report) = parse_with_report(bytes.as_slice(), &self.schema);
        Ok((RecordStore::new(records), report))
    }

    /// Loads the dataset, reporting a failure once and falling back to an empty store.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn load(&self) -> LoadedDataset {
        match self.try_load().await {
            Ok((store, report)) => {
                info!("Loaded {} player records", store.len());
                if report.rows_skipped > 0 || report.degraded_numbers > 0 {
                    warn!(
                        "{} rows skipped, {} numeric fields defaulted to 0",
                        report.rows_skipped, report.degraded_numbers
                    );
                }
                LoadedDataset {
                    status: LoadStatus::Loaded { rows: store.len() },
                    store,
                    report: Some(report),
                }
            }
            Err(e) => {
                error!("Dataset load failed: {}", e);
                LoadedDataset {
                    store: RecordStore::empty(),
                    status: LoadStatus::Failed {
                        reason: e.to_string(),
                    },
                    report: None,
                }
            }
        }
    }
}
