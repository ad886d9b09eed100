//! Risk summarization of a class distribution.

use serde::Serialize;

use crate::core::{ClassLabel, ProbabilityDistribution};

/// Qualitative risk band attached to a risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    Low,
    Mid,
    High,
}

impl RiskBand {
    /// Band for a risk score: low below 0.3, mid below 0.6, high above.
    pub fn from_score(risk: f64) -> Self {
        if risk < 0.3 {
            RiskBand::Low
        } else if risk < 0.6 {
            RiskBand::Mid
        } else {
            RiskBand::High
        }
    }
}

/// Predicted class and scalar risk derived from a distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskSummary {
    /// Class with the highest probability.
    pub predicted: ClassLabel,
    /// `1 - P(On Time)`.
    pub risk_score: f64,
    /// Band the risk score falls into.
    pub band: RiskBand,
}

/// Derive the predicted class and risk score from a distribution.
///
/// The predicted class is the argmax, ties resolving to the first class
/// in canonical order. The risk score is the complement of the on-time
/// probability.
pub fn summarize(distribution: &ProbabilityDistribution) -> RiskSummary {
    let risk_score = 1.0 - distribution.probability(ClassLabel::OnTime);
    RiskSummary {
        predicted: distribution.argmax(),
        risk_score,
        band: RiskBand::from_score(risk_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn summarizes_reference_distribution() {
        let dist = ProbabilityDistribution::new([0.1, 0.2, 0.05, 0.65]).unwrap();
        let summary = summarize(&dist);
        assert_eq!(summary.predicted, ClassLabel::OnTime);
        assert_relative_eq!(summary.risk_score, 0.35);
        assert_eq!(summary.band, RiskBand::Mid);
    }

    #[test]
    fn risk_bands_cover_the_score_range() {
        assert_eq!(RiskBand::from_score(0.0), RiskBand::Low);
        assert_eq!(RiskBand::from_score(0.29), RiskBand::Low);
        assert_eq!(RiskBand::from_score(0.3), RiskBand::Mid);
        assert_eq!(RiskBand::from_score(0.59), RiskBand::Mid);
        assert_eq!(RiskBand::from_score(0.6), RiskBand::High);
        assert_eq!(RiskBand::from_score(1.0), RiskBand::High);
    }

    #[test]
    fn high_on_time_probability_means_low_risk() {
        let dist = ProbabilityDistribution::new([0.02, 0.05, 0.01, 0.92]).unwrap();
        let summary = summarize(&dist);
        assert_eq!(summary.predicted, ClassLabel::OnTime);
        assert_relative_eq!(summary.risk_score, 0.08, epsilon = 1e-12);
        assert_eq!(summary.band, RiskBand::Low);
    }

    #[test]
    fn predicted_class_can_differ_from_risk_driver() {
        // Delayed wins the argmax while risk stays tied to P(On Time).
        let dist = ProbabilityDistribution::new([0.1, 0.5, 0.05, 0.35]).unwrap();
        let summary = summarize(&dist);
        assert_eq!(summary.predicted, ClassLabel::Delayed);
        assert_relative_eq!(summary.risk_score, 0.65, epsilon = 1e-12);
        assert_eq!(summary.band, RiskBand::High);
    }
}
