//! Reliability reference tables.
//!
//! Each table maps a categorical code (carrier, origin, or destination) to
//! a precomputed historical reliability score. Tables are loaded once from
//! CSV reference data and are immutable afterwards; a lookup of an unknown
//! code is a hard error, never a silent default.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{PredictError, Result};

/// Canonical reference file names, as shipped with the trained artifacts.
const CARRIER_FILE: &str = "carrier_reliability_encoding.csv";
const ORIGIN_FILE: &str = "origin_reliability_encoding.csv";
const DEST_FILE: &str = "dest_reliability_encoding.csv";

/// Immutable mapping from a categorical code to a reliability score.
#[derive(Debug, Clone, PartialEq)]
pub struct ReliabilityTable {
    name: &'static str,
    scores: HashMap<String, f64>,
}

impl ReliabilityTable {
    /// Build a table from in-memory pairs. Mainly for tests and synthetic
    /// configurations.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            name: "reliability",
            scores: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Read a table from CSV with a header row.
    ///
    /// `key_column` and `value_column` must both appear in the header,
    /// e.g. `UniqueCarrier` / `CarrierReliability`. Rows with a
    /// non-numeric score fail the load.
    pub fn from_csv<R: Read>(
        reader: R,
        name: &'static str,
        key_column: &str,
        value_column: &str,
    ) -> Result<Self> {
        let mut rdr = csv::Reader::from_reader(reader);

        let headers = rdr
            .headers()
            .map_err(|e| PredictError::TableLoad(format!("{name}: {e}")))?
            .clone();
        let key_idx = headers.iter().position(|h| h == key_column).ok_or_else(|| {
            PredictError::TableLoad(format!("{name}: missing column '{key_column}'"))
        })?;
        let value_idx = headers
            .iter()
            .position(|h| h == value_column)
            .ok_or_else(|| {
                PredictError::TableLoad(format!("{name}: missing column '{value_column}'"))
            })?;

        let mut scores = HashMap::new();
        for record in rdr.records() {
            let record = record.map_err(|e| PredictError::TableLoad(format!("{name}: {e}")))?;
            let code = record
                .get(key_idx)
                .ok_or_else(|| PredictError::TableLoad(format!("{name}: short row")))?;
            let raw = record
                .get(value_idx)
                .ok_or_else(|| PredictError::TableLoad(format!("{name}: short row")))?;
            let score: f64 = raw.parse().map_err(|_| {
                PredictError::TableLoad(format!(
                    "{name}: non-numeric {value_column} '{raw}' for code '{code}'"
                ))
            })?;
            scores.insert(code.to_string(), score);
        }

        Ok(Self { name, scores })
    }

    /// Reliability score for `code`.
    pub fn get(&self, code: &str) -> Result<f64> {
        self.scores
            .get(code)
            .copied()
            .ok_or_else(|| PredictError::UnknownCode {
                table: self.name,
                code: code.to_string(),
            })
    }

    /// All known codes, sorted. Presentation layers use this to build
    /// their option lists.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.scores.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Number of codes in the table.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether the table holds no codes.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
}

/// The three reliability tables, constructed once at startup and passed
/// explicitly wherever encoding happens.
///
/// Immutable after load, so it can be shared read-only across concurrent
/// requests without locking.
#[derive(Debug, Clone, PartialEq)]
pub struct ReliabilityTables {
    carrier: ReliabilityTable,
    origin: ReliabilityTable,
    dest: ReliabilityTable,
}

impl ReliabilityTables {
    /// Assemble from three prebuilt tables.
    pub fn new(
        carrier: ReliabilityTable,
        origin: ReliabilityTable,
        dest: ReliabilityTable,
    ) -> Self {
        Self {
            carrier: carrier.with_name("carrier"),
            origin: origin.with_name("origin"),
            dest: dest.with_name("dest"),
        }
    }

    /// Load the three canonical CSV files from a directory.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let open = |file: &str| -> Result<File> {
            File::open(dir.join(file))
                .map_err(|e| PredictError::TableLoad(format!("{}: {e}", dir.join(file).display())))
        };

        let carrier = ReliabilityTable::from_csv(
            open(CARRIER_FILE)?,
            "carrier",
            "UniqueCarrier",
            "CarrierReliability",
        )?;
        let origin = ReliabilityTable::from_csv(
            open(ORIGIN_FILE)?,
            "origin",
            "Origin",
            "OriginReliability",
        )?;
        let dest =
            ReliabilityTable::from_csv(open(DEST_FILE)?, "dest", "Dest", "DestReliability")?;

        Ok(Self {
            carrier,
            origin,
            dest,
        })
    }

    /// Carrier reliability table.
    pub fn carrier(&self) -> &ReliabilityTable {
        &self.carrier
    }

    /// Origin airport reliability table.
    pub fn origin(&self) -> &ReliabilityTable {
        &self.origin
    }

    /// Destination airport reliability table.
    pub fn dest(&self) -> &ReliabilityTable {
        &self.dest
    }
}
