//! Staged binary + meta-classifier ensemble.

use crate::backend::{score_with, BackendId, BackendProvider};
use crate::core::{FeatureVector, MetaFeatureVector, ProbabilityDistribution};
use crate::ensemble::EnsembleStrategy;
use crate::error::Result;

/// Four staged binary classifiers whose scores feed a trained 4-class
/// meta-classifier.
///
/// Each binary classifier is simpler and individually more accurate at
/// its sub-decision than a single 4-class model; the meta-classifier
/// learns to reconcile their possibly inconsistent outputs instead of a
/// hand-built formula doing so. Its calibrated distribution is returned
/// untouched: no renormalization happens here, the caller checks the
/// mass.
#[derive(Debug, Clone, Copy, Default)]
pub struct StagedBinaryMeta;

impl StagedBinaryMeta {
    pub fn new() -> Self {
        Self
    }
}

impl EnsembleStrategy for StagedBinaryMeta {
    fn combine(
        &self,
        features: &FeatureVector,
        provider: &dyn BackendProvider,
    ) -> Result<ProbabilityDistribution> {
        // One backend live at a time; each is released before the next loads.
        let p_div = score_with(provider, BackendId::DivertedVsRest, features)?;
        let p_ot_del = score_with(provider, BackendId::OnTimeVsDelayed, features)?;
        let p_del_can = score_with(provider, BackendId::DelayedVsCancelled, features)?;
        let p_ot_can = score_with(provider, BackendId::OnTimeVsCancelled, features)?;

        let meta_features =
            MetaFeatureVector::from_stage_scores(p_div, p_ot_del, p_del_can, p_ot_can);

        let meta = provider.acquire_meta()?;
        meta.score(&meta_features)
    }

    fn name(&self) -> &str {
        "StagedBinaryMeta"
    }
}
