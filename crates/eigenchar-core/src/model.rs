use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::types::{BoxSize, Label};

/// The trained artifact: everything inference needs, frozen.
///
/// A model only exists in the trained state: the basis is non-empty by
/// construction and is never refit. Inference code takes `&TrainedModel`
/// and cannot mutate it, so basis reuse is guaranteed by the type rather
/// than by an empty-matrix sentinel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainedModel {
    /// Bounding box used to vectorize every image, training and test alike.
    pub bbox: BoxSize,
    /// Principal-component basis, one eigenvector per column, columns in
    /// descending-eigenvalue order. Shape `(feature_len, final_dim)`.
    pub basis: DMatrix<f64>,
    /// Intermediate PCA target used by the denoising pass.
    pub noise_dim: usize,
    /// Final reduced dimensionality of all stored and classified vectors.
    pub final_dim: usize,
    /// Reduced training vectors, one row per training image.
    pub train_vectors: DMatrix<f64>,
    /// Labels parallel to `train_vectors` rows.
    pub train_labels: Vec<Label>,
}

impl TrainedModel {
    /// Full (pre-reduction) feature vector length implied by the box.
    pub fn feature_len(&self) -> usize {
        self.bbox.feature_len()
    }

    pub fn train_count(&self) -> usize {
        self.train_labels.len()
    }
}
