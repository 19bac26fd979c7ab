//! Lazy, shared access to the loaded classifier.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::classifier::{Classifier, Prediction};
use crate::error::AppResult;
use crate::features::FeatureVector;

/// Process-wide classifier cache.
///
/// The artifact is immutable for the process lifetime, so it is loaded at
/// most once; concurrent first requests are serialized by the cell. A failed
/// load leaves the cell empty and is retried on the next request, so a
/// missing artifact degrades into per-request errors instead of taking the
/// server down.
#[derive(Clone)]
pub struct ModelStore {
    path: PathBuf,
    cell: Arc<OnceCell<Classifier>>,
}

impl ModelStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            cell: Arc::new(OnceCell::new()),
        }
    }

    async fn classifier(&self) -> AppResult<&Classifier> {
        self.cell
            .get_or_try_init(|| async {
                tracing::info!("loading classifier artifact from {}", self.path.display());
                Classifier::load(&self.path)
            })
            .await
    }

    /// Run one prediction against the cached classifier.
    pub async fn predict(&self, features: &FeatureVector) -> AppResult<Prediction> {
        let classifier = self.classifier().await?;
        classifier.predict(features)
    }
}
