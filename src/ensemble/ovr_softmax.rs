//! One-vs-rest + softmax ensemble.

use crate::backend::{score_with, BackendId, BackendProvider};
use crate::core::{ClassLabel, FeatureVector, ProbabilityDistribution, CLASS_COUNT};
use crate::ensemble::EnsembleStrategy;
use crate::error::Result;

/// Numerically stable softmax over raw scores.
///
/// Shifts by the maximum before exponentiating so large scores cannot
/// overflow. The result sums to 1 and preserves the ordering of the
/// inputs.
pub fn softmax(scores: &[f64; CLASS_COUNT]) -> [f64; CLASS_COUNT] {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mut exps = [0.0; CLASS_COUNT];
    let mut sum = 0.0;
    for (e, &s) in exps.iter_mut().zip(scores.iter()) {
        *e = (s - max).exp();
        sum += *e;
    }
    for e in &mut exps {
        *e /= sum;
    }
    exps
}

/// Four one-vs-rest classifiers reconciled with a softmax.
///
/// OvR scores are not mutually calibrated and need not sum to 1; the
/// softmax forces a valid probability simplex as a lightweight
/// reconciliation, trading calibration accuracy for simplicity against
/// the meta-classifier approach.
#[derive(Debug, Clone, Copy, Default)]
pub struct OvrSoftmax;

impl OvrSoftmax {
    pub fn new() -> Self {
        Self
    }
}

impl EnsembleStrategy for OvrSoftmax {
    fn combine(
        &self,
        features: &FeatureVector,
        provider: &dyn BackendProvider,
    ) -> Result<ProbabilityDistribution> {
        let mut raw = [0.0; CLASS_COUNT];
        for (slot, &label) in raw.iter_mut().zip(ClassLabel::ALL.iter()) {
            *slot = score_with(provider, BackendId::OneVsRest(label), features)?;
        }
        ProbabilityDistribution::new(softmax(&raw))
    }

    fn name(&self) -> &str {
        "OvrSoftmax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::StaticProvider;
    use approx::assert_relative_eq;

    fn features() -> FeatureVector {
        FeatureVector {
            day_of_week: 3.0,
            day_of_month: 15.0,
            month: 6.0,
            distance: 900.0,
            crs_dep_min: 540.0,
            crs_arr_min: 720.0,
            scheduled_elapsed_time: 180.0,
            origin_reliability: 0.85,
            dest_reliability: 0.8,
            carrier_reliability: 0.9,
            dep_time_of_day: 0.0,
            arr_time_of_day: 1.0,
        }
    }

    #[test]
    fn softmax_sums_to_one() {
        let probs = softmax(&[0.1, 0.4, 0.2, 0.9]);
        assert_relative_eq!(probs.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn softmax_of_equal_scores_is_uniform() {
        let probs = softmax(&[0.5, 0.5, 0.5, 0.5]);
        for p in probs {
            assert_relative_eq!(p, 0.25, epsilon = 1e-12);
        }
    }

    #[test]
    fn softmax_preserves_score_ordering() {
        let probs = softmax(&[0.1, 0.9, 0.4, 0.2]);
        assert!(probs[1] > probs[2]);
        assert!(probs[2] > probs[3]);
        assert!(probs[3] > probs[0]);
    }

    #[test]
    fn softmax_is_stable_for_large_scores() {
        let probs = softmax(&[1000.0, 1000.0, 1000.0, 1000.0]);
        for p in probs {
            assert_relative_eq!(p, 0.25, epsilon = 1e-12);
        }
    }

    #[test]
    fn combine_scores_every_class_in_order() {
        let provider = StaticProvider::uniform(0.2)
            .with_score(BackendId::OneVsRest(ClassLabel::OnTime), 0.9);
        let dist = OvrSoftmax::new().combine(&features(), &provider).unwrap();
        assert!(dist.is_normalized(1e-9));
        assert_eq!(dist.argmax(), ClassLabel::OnTime);
        // Four OvR backends, no meta-classifier.
        assert_eq!(provider.acquisitions(), 4);
    }

    #[test]
    fn equal_raw_scores_give_uniform_distribution() {
        let provider = StaticProvider::uniform(0.5);
        let dist = OvrSoftmax::new().combine(&features(), &provider).unwrap();
        for &label in &ClassLabel::ALL {
            assert_relative_eq!(dist.probability(label), 0.25, epsilon = 1e-12);
        }
    }
}
