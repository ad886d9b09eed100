//! Scoring backend seam.
//!
//! A backend wraps one pre-trained classifier artifact. Artifacts are
//! opaque to this crate: how they are stored and deserialized is the
//! provider's business, the crate only needs `score` on the exact feature
//! order from [`crate::core::FEATURE_NAMES`].
//!
//! Backends are acquired per prediction and released as soon as their one
//! score has been taken, so at most one artifact's resources are live at a
//! time. Acquisition returns an owning handle; dropping the handle is the
//! release. [`with_backend`] scopes the acquire/score/release cycle on
//! every exit path.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::core::{ClassLabel, FeatureVector, MetaFeatureVector, ProbabilityDistribution};
use crate::error::{PredictError, Result};

/// One pre-trained binary or one-vs-rest classifier.
///
/// Object-safe so providers can hand out `Box<dyn ScoringBackend>`.
pub trait ScoringBackend {
    /// Positive-class probability for the given features, in [0, 1].
    fn score(&self, features: &FeatureVector) -> Result<f64>;

    /// Artifact name, used in error reporting.
    fn name(&self) -> &str;
}

/// The second-stage 4-class model of the staged ensemble.
pub trait MetaClassifier {
    /// Calibrated class distribution for the given meta features.
    fn score(&self, meta: &MetaFeatureVector) -> Result<ProbabilityDistribution>;

    /// Artifact name, used in error reporting.
    fn name(&self) -> &str;
}

/// Identifies a first-stage classifier artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendId {
    /// Diverted-vs-rest binary classifier.
    DivertedVsRest,
    /// On-time-vs-delayed binary classifier; scores the on-time side.
    OnTimeVsDelayed,
    /// Delayed-vs-cancelled binary classifier; scores the not-cancelled side.
    DelayedVsCancelled,
    /// On-time-vs-cancelled binary classifier; scores the not-cancelled side.
    OnTimeVsCancelled,
    /// One-vs-rest classifier for a single outcome class.
    OneVsRest(ClassLabel),
}

impl fmt::Display for BackendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendId::DivertedVsRest => f.write_str("clf_diverted"),
            BackendId::OnTimeVsDelayed => f.write_str("clf_ot_delayed"),
            BackendId::DelayedVsCancelled => f.write_str("clf_del_cancelled"),
            BackendId::OnTimeVsCancelled => f.write_str("clf_ot_cancelled"),
            BackendId::OneVsRest(label) => write!(f, "ovr_{}", label.label().replace(' ', "_")),
        }
    }
}

/// Source of classifier artifacts.
///
/// `acquire` loads the artifact behind `id` and returns an owning handle;
/// dropping the handle releases whatever resources the artifact holds.
pub trait BackendProvider {
    /// Load the first-stage backend identified by `id`.
    fn acquire(&self, id: BackendId) -> Result<Box<dyn ScoringBackend>>;

    /// Load the meta-classifier.
    fn acquire_meta(&self) -> Result<Box<dyn MetaClassifier>>;
}

/// Acquire the backend for `id`, apply `f`, and release the backend.
///
/// The handle is dropped when this function returns, whether `f`
/// succeeded or not, so a prediction never holds two artifacts at once.
pub fn with_backend<T, F>(provider: &dyn BackendProvider, id: BackendId, f: F) -> Result<T>
where
    F: FnOnce(&dyn ScoringBackend) -> Result<T>,
{
    let backend = provider.acquire(id)?;
    f(backend.as_ref())
}

/// Acquire, score, validate, release. The probability must be finite and
/// within [0, 1].
pub fn score_with(
    provider: &dyn BackendProvider,
    id: BackendId,
    features: &FeatureVector,
) -> Result<f64> {
    with_backend(provider, id, |backend| {
        let p = backend.score(features)?;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(PredictError::InvalidProbability {
                backend: backend.name().to_string(),
                value: p,
            });
        }
        Ok(p)
    })
}

/// Backend that always returns one fixed score.
struct FixedScore {
    name: String,
    score: f64,
}

impl ScoringBackend for FixedScore {
    fn score(&self, _features: &FeatureVector) -> Result<f64> {
        Ok(self.score)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Meta-classifier that always returns one fixed distribution.
struct FixedMeta {
    probs: [f64; 4],
}

impl MetaClassifier for FixedMeta {
    fn score(&self, _meta: &MetaFeatureVector) -> Result<ProbabilityDistribution> {
        ProbabilityDistribution::new(self.probs)
    }

    fn name(&self) -> &str {
        "meta_fixed"
    }
}

/// In-memory provider returning fixed scores per backend.
///
/// The reference implementation of the provider contract, and the test
/// double for exercising the ensemble strategies without real artifacts.
/// Counts acquisitions so tests can assert that a failed encode never
/// touches a backend.
pub struct StaticProvider {
    scores: HashMap<BackendId, f64>,
    default_score: f64,
    meta: [f64; 4],
    acquisitions: AtomicUsize,
}

impl StaticProvider {
    /// Provider where every backend scores `p` and the meta-classifier
    /// returns the uniform distribution.
    pub fn uniform(p: f64) -> Self {
        Self {
            scores: HashMap::new(),
            default_score: p,
            meta: [0.25; 4],
            acquisitions: AtomicUsize::new(0),
        }
    }

    /// Pin the score returned by one backend.
    pub fn with_score(mut self, id: BackendId, p: f64) -> Self {
        self.scores.insert(id, p);
        self
    }

    /// Pin the distribution returned by the meta-classifier.
    pub fn with_meta(mut self, probs: [f64; 4]) -> Self {
        self.meta = probs;
        self
    }

    /// Number of backend acquisitions so far (meta included).
    pub fn acquisitions(&self) -> usize {
        self.acquisitions.load(Ordering::Relaxed)
    }
}

impl BackendProvider for StaticProvider {
    fn acquire(&self, id: BackendId) -> Result<Box<dyn ScoringBackend>> {
        self.acquisitions.fetch_add(1, Ordering::Relaxed);
        let score = self.scores.get(&id).copied().unwrap_or(self.default_score);
        Ok(Box::new(FixedScore {
            name: id.to_string(),
            score,
        }))
    }

    fn acquire_meta(&self) -> Result<Box<dyn MetaClassifier>> {
        self.acquisitions.fetch_add(1, Ordering::Relaxed);
        Ok(Box::new(FixedMeta { probs: self.meta }))
    }
}
