//! Public prediction surface.

use serde::Serialize;
use tracing::warn;

use crate::backend::BackendProvider;
use crate::core::{ClassLabel, FlightDetails, ProbabilityDistribution};
use crate::encoding::{encode, ReliabilityTables};
use crate::ensemble::StrategyKind;
use crate::error::Result;
use crate::summary::{summarize, RiskBand};

/// Tolerance for the final distribution's mass before the calibration
/// warning fires.
const MASS_TOLERANCE: f64 = 1e-3;

/// Result of one prediction request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    /// Class with the highest probability.
    pub class: ClassLabel,
    /// Per-class probabilities in canonical order.
    pub distribution: ProbabilityDistribution,
    /// `1 - P(On Time)`.
    pub risk_score: f64,
    /// Band the risk score falls into.
    pub band: RiskBand,
}

/// Scores flight itineraries against a set of classifier artifacts.
///
/// Holds the immutable reliability tables and the backend provider;
/// everything else is per-request. Predictions are independent and carry
/// no state across calls, so a `Predictor` can be shared read-only.
pub struct Predictor<P> {
    tables: ReliabilityTables,
    provider: P,
}

impl<P: BackendProvider> Predictor<P> {
    /// Create a predictor over loaded reference tables and a provider of
    /// classifier artifacts.
    pub fn new(tables: ReliabilityTables, provider: P) -> Self {
        Self { tables, provider }
    }

    /// The reliability tables this predictor encodes against.
    pub fn tables(&self) -> &ReliabilityTables {
        &self.tables
    }

    /// Score one flight with the chosen ensemble strategy.
    ///
    /// Validation, encoding, scoring, and summarization run in sequence;
    /// the first failure aborts the request with no partial result. A
    /// final distribution whose mass drifts from 1.0 beyond tolerance is
    /// logged and passed through unchanged.
    pub fn predict(&self, flight: &FlightDetails, kind: StrategyKind) -> Result<Prediction> {
        let features = encode(flight, &self.tables)?;

        let strategy = kind.strategy();
        let distribution = strategy.combine(&features, &self.provider)?;

        if !distribution.is_normalized(MASS_TOLERANCE) {
            warn!(
                strategy = strategy.name(),
                mass = distribution.sum(),
                "final distribution mass drifts from 1.0; trusting the strategy's calibration"
            );
        }

        let summary = summarize(&distribution);
        Ok(Prediction {
            class: summary.predicted,
            distribution,
            risk_score: summary.risk_score,
            band: summary.band,
        })
    }
}
