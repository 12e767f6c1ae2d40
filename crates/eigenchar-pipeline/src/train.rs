//! Training orchestration: labelled corpus in, frozen model out.

use eigenchar_core::{CharImage, ClassifyError, Label, Result, TrainedModel};
use eigenchar_dataset::{load_corpus, PagePaths};
use eigenchar_features::{bounding_box_size, feature_matrix};
use eigenchar_recognize::PcaReducer;

use crate::config::TrainConfig;

/// Train a model from already-loaded character images and their labels.
///
/// Computes the corpus bounding box, vectorizes, runs the two-pass PCA
/// reduction (fitting and freezing the basis), and assembles the model.
pub fn train(
    images: &[CharImage],
    labels: Vec<Label>,
    config: &TrainConfig,
) -> Result<TrainedModel> {
    if images.is_empty() {
        return Err(ClassifyError::EmptyCorpus);
    }
    if images.len() != labels.len() {
        return Err(ClassifyError::LabelMismatch {
            images: images.len(),
            labels: labels.len(),
        });
    }

    let bbox = bounding_box_size(images)?;
    let full = feature_matrix(images, bbox);

    tracing::info!(
        images = images.len(),
        box_height = bbox.height,
        box_width = bbox.width,
        features = full.ncols(),
        "extracted training features"
    );

    let reducer = PcaReducer::new(config.noise_dim, config.final_dim);
    let (train_vectors, basis) = reducer.fit(&full)?;

    tracing::info!(
        final_dim = config.final_dim,
        noise_dim = config.noise_dim,
        "training complete"
    );

    Ok(TrainedModel {
        bbox,
        basis,
        noise_dim: config.noise_dim,
        final_dim: config.final_dim,
        train_vectors,
        train_labels: labels,
    })
}

/// Train from a multi-page corpus on disk.
pub fn train_pages(pages: &[PagePaths], config: &TrainConfig) -> Result<TrainedModel> {
    let (images, labels) = load_corpus(pages)?;
    train(&images, labels, config)
}
