//! Collaborator boundaries for the dashboard's external services.
//!
//! Model inference and dataset access are integrations, not part of this
//! repository's logic. The shell reaches them only through these traits; the
//! stub implementations let it run end-to-end until real ones are wired in.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Customer attributes keyed by feature name, as submitted by the
/// prediction form.
pub type FeatureMap = BTreeMap<String, serde_json::Value>;

/// A single model decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Human-readable class label
    pub label: String,
    /// Churn probability in `[0, 1]`
    pub probability: f64,
}

/// Pre-trained churn model boundary: feature dictionary in, labeled
/// probability out.
pub trait ChurnPredictor: Send + Sync {
    /// Score one customer.
    fn predict(&self, features: &FeatureMap) -> Result<Prediction>;
}

/// Source of the dashboard's dataset rows.
pub trait DatasetProvider: Send + Sync {
    /// All rows, in source order.
    fn rows(&self) -> Result<Vec<FeatureMap>>;
}

/// Placeholder predictor used until a real model service is integrated.
pub struct StubPredictor;

impl ChurnPredictor for StubPredictor {
    fn predict(&self, _features: &FeatureMap) -> Result<Prediction> {
        Ok(Prediction {
            label: "No churn".to_string(),
            probability: 0.5,
        })
    }
}

/// Placeholder dataset provider used until a database is integrated.
pub struct StubDatasetProvider;

impl DatasetProvider for StubDatasetProvider {
    fn rows(&self) -> Result<Vec<FeatureMap>> {
        Ok(Vec::new())
    }
}
