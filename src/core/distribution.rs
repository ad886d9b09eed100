//! Outcome classes and the 4-class probability distribution.

use std::fmt;

use serde::Serialize;

use crate::error::{PredictError, Result};

/// Number of outcome classes.
pub const CLASS_COUNT: usize = 4;

/// Flight outcome class.
///
/// The order of [`ClassLabel::ALL`] is load-bearing: it defines the index
/// mapping for probability arrays, and every one-vs-rest artifact is keyed
/// to it. Ties in argmax resolve to the earliest class in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassLabel {
    Cancelled,
    Delayed,
    Diverted,
    OnTime,
}

impl ClassLabel {
    /// All classes in canonical order.
    pub const ALL: [ClassLabel; CLASS_COUNT] = [
        ClassLabel::Cancelled,
        ClassLabel::Delayed,
        ClassLabel::Diverted,
        ClassLabel::OnTime,
    ];

    /// Position of this class in the canonical order.
    pub fn index(self) -> usize {
        match self {
            ClassLabel::Cancelled => 0,
            ClassLabel::Delayed => 1,
            ClassLabel::Diverted => 2,
            ClassLabel::OnTime => 3,
        }
    }

    /// Human-readable label as used in the reference datasets.
    pub fn label(self) -> &'static str {
        match self {
            ClassLabel::Cancelled => "Cancelled",
            ClassLabel::Delayed => "Delayed",
            ClassLabel::Diverted => "Diverted",
            ClassLabel::OnTime => "On Time",
        }
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Serialized as the dataset label ("On Time", not "OnTime") so downstream
// renderers match the reference data.
impl Serialize for ClassLabel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Probability mass over the four outcome classes, aligned to
/// [`ClassLabel::ALL`].
///
/// Construction rejects negative or non-finite mass. The total is *not*
/// forced to 1.0: the staged-meta strategy passes its meta-classifier's
/// output through untouched, so callers check [`is_normalized`] where the
/// simplex matters.
///
/// [`is_normalized`]: ProbabilityDistribution::is_normalized
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbabilityDistribution([f64; CLASS_COUNT]);

impl ProbabilityDistribution {
    /// Create a distribution from per-class probabilities in canonical order.
    pub fn new(probs: [f64; CLASS_COUNT]) -> Result<Self> {
        for (label, &p) in ClassLabel::ALL.iter().zip(probs.iter()) {
            if !p.is_finite() || p < 0.0 {
                return Err(PredictError::InvalidDistribution(format!(
                    "probability for {label} is {p}"
                )));
            }
        }
        Ok(Self(probs))
    }

    /// Probability assigned to a class.
    pub fn probability(&self, label: ClassLabel) -> f64 {
        self.0[label.index()]
    }

    /// Probabilities in canonical class order.
    pub fn as_slice(&self) -> &[f64; CLASS_COUNT] {
        &self.0
    }

    /// Total probability mass.
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Whether the mass sums to 1.0 within `tol`.
    pub fn is_normalized(&self, tol: f64) -> bool {
        (self.sum() - 1.0).abs() <= tol
    }

    /// Class with the highest probability.
    ///
    /// Exact ties resolve to the first maximum in canonical order.
    pub fn argmax(&self) -> ClassLabel {
        let mut best = ClassLabel::Cancelled;
        let mut best_p = self.0[0];
        for &label in &ClassLabel::ALL[1..] {
            let p = self.0[label.index()];
            if p > best_p {
                best = label;
                best_p = p;
            }
        }
        best
    }
}
