//! Ensemble strategies.
//!
//! Combines several independently-trained classifier outputs into one
//! coherent 4-class probability distribution. Two strategies are
//! available, interchangeable behind [`EnsembleStrategy`]:
//!
//! - [`StagedBinaryMeta`]: four staged binary classifiers feed a trained
//!   meta-classifier that reconciles their possibly inconsistent outputs.
//! - [`OvrSoftmax`]: four one-vs-rest classifiers reconciled with a
//!   softmax over their raw scores.

mod ovr_softmax;
mod staged_meta;

pub use ovr_softmax::{softmax, OvrSoftmax};
pub use staged_meta::StagedBinaryMeta;

use crate::backend::BackendProvider;
use crate::core::{FeatureVector, ProbabilityDistribution};
use crate::error::Result;

/// Algorithm combining backend outputs into a class distribution.
///
/// Object-safe; strategies hold no per-request state, so one instance can
/// serve any number of predictions.
pub trait EnsembleStrategy {
    /// Score `features` with the backends this strategy needs and combine
    /// the results.
    ///
    /// Backends are acquired from `provider` one at a time and released
    /// after their single score, so at most one artifact is live during
    /// the call.
    fn combine(
        &self,
        features: &FeatureVector,
        provider: &dyn BackendProvider,
    ) -> Result<ProbabilityDistribution>;

    /// Strategy name for diagnostics.
    fn name(&self) -> &str;
}

/// Type alias for boxed strategy trait objects.
pub type BoxedStrategy = Box<dyn EnsembleStrategy>;

/// Caller-facing strategy selector, mapped to a concrete strategy at the
/// edge so no string tag reaches the scoring logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// Staged binary classifiers plus a trained meta-classifier.
    StagedBinaryMeta,
    /// One-vs-rest classifiers plus softmax reconciliation.
    OvrSoftmax,
}

impl StrategyKind {
    /// Instantiate the concrete strategy.
    pub fn strategy(self) -> BoxedStrategy {
        match self {
            StrategyKind::StagedBinaryMeta => Box::new(StagedBinaryMeta::new()),
            StrategyKind::OvrSoftmax => Box::new(OvrSoftmax::new()),
        }
    }
}
