//! Core data structures for flight disruption scoring.

mod distribution;
mod features;
mod flight;

pub use distribution::{ClassLabel, ProbabilityDistribution, CLASS_COUNT};
pub use features::{FeatureVector, MetaFeatureVector, FEATURE_COUNT, FEATURE_NAMES};
pub use flight::FlightDetails;
