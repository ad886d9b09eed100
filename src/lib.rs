//! # aerorisk
//!
//! Flight disruption prediction and risk scoring.
//!
//! Scores a single flight itinerary against pre-trained classifier
//! artifacts and combines their outputs into a 4-class probability
//! distribution over {Cancelled, Delayed, Diverted, On Time}, a predicted
//! class, and a scalar risk score.
//!
//! Two ensemble strategies are provided: a staged-binary pipeline whose
//! sub-decisions feed a trained meta-classifier, and a one-vs-rest
//! ensemble reconciled with a softmax. Classifier artifacts stay opaque
//! behind the [`backend::ScoringBackend`] seam; this crate only defines
//! the feature encoding they were trained on and the combination logic.
//!
//! # Example
//!
//! ```
//! use aerorisk::backend::StaticProvider;
//! use aerorisk::core::FlightDetails;
//! use aerorisk::encoding::{ReliabilityTable, ReliabilityTables};
//! use aerorisk::ensemble::StrategyKind;
//! use aerorisk::predictor::Predictor;
//!
//! let tables = ReliabilityTables::new(
//!     ReliabilityTable::from_pairs([("AA", 0.9)]),
//!     ReliabilityTable::from_pairs([("JFK", 0.85)]),
//!     ReliabilityTable::from_pairs([("LAX", 0.8)]),
//! );
//! let provider = StaticProvider::uniform(0.5);
//! let predictor = Predictor::new(tables, provider);
//!
//! let flight = FlightDetails {
//!     day_of_week: 3,
//!     day_of_month: 15,
//!     month: 6,
//!     distance: 900,
//!     dep_hour: 9,
//!     arr_hour: 12,
//!     carrier: "AA".into(),
//!     origin: "JFK".into(),
//!     dest: "LAX".into(),
//! };
//!
//! let prediction = predictor.predict(&flight, StrategyKind::OvrSoftmax).unwrap();
//! assert!((prediction.distribution.sum() - 1.0).abs() < 1e-9);
//! ```

pub mod backend;
pub mod core;
pub mod encoding;
pub mod ensemble;
pub mod error;
pub mod predictor;
pub mod summary;

pub use error::{PredictError, Result};

pub mod prelude {
    pub use crate::backend::{BackendId, BackendProvider, ScoringBackend};
    pub use crate::core::{ClassLabel, FeatureVector, FlightDetails, ProbabilityDistribution};
    pub use crate::encoding::{encode, ReliabilityTable, ReliabilityTables};
    pub use crate::ensemble::{EnsembleStrategy, StrategyKind};
    pub use crate::error::{PredictError, Result};
    pub use crate::predictor::{Prediction, Predictor};
    pub use crate::summary::{summarize, RiskBand, RiskSummary};
}
