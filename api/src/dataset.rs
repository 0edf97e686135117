//! Launch records and the immutable in-memory table built from the CSV.
//!
//! The CSV carries human-oriented headers (`Launch Site`, `Payload Mass (kg)`,
//! ...). They are mapped onto typed fields exactly once, here, so nothing
//! downstream ever renames or annotates the table.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;
use crate::resolve::ALL_SITES;

pub const COLUMN_LAUNCH_SITE: &str = "Launch Site";
pub const COLUMN_PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const COLUMN_CLASS: &str = "class";
pub const COLUMN_BOOSTER_CATEGORY: &str = "Booster Version Category";

const REQUIRED_COLUMNS: [&str; 4] = [
    COLUMN_LAUNCH_SITE,
    COLUMN_PAYLOAD_MASS,
    COLUMN_CLASS,
    COLUMN_BOOSTER_CATEGORY,
];

/// Landing outcome of a single launch (`class` column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Numeric class as stored in the CSV (0 = failed, 1 = succeeded).
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        let value: f64 = raw.trim().parse().ok()?;
        if value == 0.0 {
            Some(Outcome::Failure)
        } else if value == 1.0 {
            Some(Outcome::Success)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub launch_site: String,
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version_category: String,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        outcome: Outcome,
        booster_version_category: impl Into<String>,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            outcome,
            booster_version_category: booster_version_category.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }
}

/// Smallest and largest payload present in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

/// Row shape as it appears on disk; extra columns are ignored by serde.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass: String,
    #[serde(rename = "class")]
    class: String,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
}

/// Immutable launch table. Cloning is cheap (shared records).
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[LaunchRecord]>,
    sites: Arc<[String]>,
}

impl Dataset {
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut seen = HashSet::new();
        let sites: Vec<String> = records
            .iter()
            .filter(|record| seen.insert(record.launch_site.as_str()))
            .map(|record| record.launch_site.clone())
            .collect();

        Self {
            records: records.into(),
            sites: sites.into(),
        }
    }

    /// Load the dataset from a CSV file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Parse CSV text from any reader. Required headers must match exactly.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv = csv::ReaderBuilder::new().trim(csv::Trim::Fields).from_reader(reader);

        let headers = csv.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|header| header == column) {
                return Err(DatasetError::MissingColumn { column });
            }
        }

        let mut records = Vec::new();
        for (idx, row) in csv.deserialize::<CsvRow>().enumerate() {
            let row = row?;
            let line = idx + 1;

            if row.launch_site == ALL_SITES {
                return Err(DatasetError::ReservedSite {
                    row: line,
                    site: row.launch_site,
                });
            }
            let payload_mass_kg = row
                .payload_mass
                .parse::<f64>()
                .ok()
                .filter(|mass| mass.is_finite())
                .ok_or_else(|| DatasetError::InvalidPayload {
                    row: line,
                    value: row.payload_mass.clone(),
                })?;
            let outcome = Outcome::parse(&row.class).ok_or_else(|| DatasetError::InvalidOutcome {
                row: line,
                value: row.class.clone(),
            })?;

            records.push(LaunchRecord {
                launch_site: row.launch_site,
                payload_mass_kg,
                outcome,
                booster_version_category: row.booster_version_category,
            });
        }

        Ok(Self::from_records(records))
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct launch sites in first-seen order.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn filter<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a LaunchRecord> + 'a
    where
        P: Fn(&LaunchRecord) -> bool + 'a,
    {
        self.records.iter().filter(move |record| predicate(record))
    }

    pub fn success_count(&self) -> usize {
        self.records.iter().filter(|record| record.is_success()).count()
    }

    pub fn payload_bounds(&self) -> Option<PayloadBounds> {
        let mut payloads = self.records.iter().map(|record| record.payload_mass_kg);
        let first = payloads.next()?;
        let (min, max) = payloads.fold((first, first), |(min, max), value| {
            (min.min(value), max.max(value))
        });
        Some(PayloadBounds { min, max })
    }
}
