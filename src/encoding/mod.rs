//! Reference-data lookup and feature encoding.
//!
//! Maps raw flight details to the numeric [`FeatureVector`] the classifier
//! artifacts were trained on, using three immutable reliability tables
//! (carrier, origin, destination) loaded once at startup.
//!
//! [`FeatureVector`]: crate::core::FeatureVector

mod encoder;
mod reliability;

pub use encoder::{encode, time_of_day};
pub use reliability::{ReliabilityTable, ReliabilityTables};
