//! Pre-trained classifier artifact and its predict operation.
//!
//! The artifact is a JSON document produced by an external training
//! toolchain: a multinomial linear model with one weight row and intercept
//! per class. Prediction reshapes the input into a single-row matrix,
//! scores every class, and returns the argmax label. Handlers treat the
//! classifier as opaque; only `predict` is called.

use std::path::Path;

use ndarray::{Array1, Array2, ArrayView1};
use serde::Deserialize;

use crate::error::AppError;
use crate::features::FeatureVector;

/// On-disk layout of the classifier artifact.
#[derive(Debug, Deserialize)]
struct ArtifactData {
    n_features: usize,
    classes: Vec<String>,
    weights: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

/// A pre-trained linear classifier loaded from disk.
#[derive(Debug, Clone)]
pub struct Classifier {
    n_features: usize,
    classes: Vec<String>,
    /// classes x features
    weights: Array2<f64>,
    intercepts: Array1<f64>,
}

/// Single prediction for one feature vector. Request-scoped.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub score: f64,
}

impl Classifier {
    /// Load and validate an artifact from disk.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AppError::ModelUnavailable(format!("{}: {}", path.display(), e)))?;
        let data: ArtifactData = serde_json::from_str(&raw)
            .map_err(|e| AppError::ModelUnavailable(format!("{}: {}", path.display(), e)))?;
        Self::from_artifact(data)
    }

    fn from_artifact(data: ArtifactData) -> Result<Self, AppError> {
        let n_classes = data.classes.len();
        if n_classes == 0 || data.n_features == 0 {
            return Err(AppError::ModelUnavailable(
                "artifact declares no classes or no features".to_string(),
            ));
        }
        if data.weights.len() != n_classes || data.intercepts.len() != n_classes {
            return Err(AppError::ModelUnavailable(
                "artifact class, weight and intercept counts disagree".to_string(),
            ));
        }
        if data.weights.iter().any(|row| row.len() != data.n_features) {
            return Err(AppError::ModelUnavailable(
                "artifact weight rows do not match the declared feature count".to_string(),
            ));
        }

        let flat: Vec<f64> = data.weights.into_iter().flatten().collect();
        let weights = Array2::from_shape_vec((n_classes, data.n_features), flat)
            .map_err(|e| AppError::ModelUnavailable(e.to_string()))?;

        Ok(Self {
            n_features: data.n_features,
            classes: data.classes,
            weights,
            intercepts: Array1::from(data.intercepts),
        })
    }

    /// Predict the class label for one feature vector.
    ///
    /// Deterministic and stateless: the same vector always yields the same
    /// prediction.
    pub fn predict(&self, features: &FeatureVector) -> Result<Prediction, AppError> {
        if features.len() != self.n_features {
            return Err(AppError::ShapeMismatch {
                got: features.len(),
                expected: self.n_features,
            });
        }

        // One sample, N features
        let row = Array2::from_shape_vec((1, self.n_features), features.values().to_vec())
            .map_err(|e| AppError::Inference(e.to_string()))?;
        let sample: ArrayView1<f64> = row.row(0);

        let scores = self.weights.dot(&sample) + &self.intercepts;

        let mut best = 0;
        for (idx, score) in scores.iter().enumerate() {
            if !score.is_finite() {
                return Err(AppError::Inference(format!(
                    "non-finite score for class {:?}",
                    self.classes[idx]
                )));
            }
            if *score > scores[best] {
                best = idx;
            }
        }

        Ok(Prediction {
            label: self.classes[best].clone(),
            score: scores[best],
        })
    }
}
