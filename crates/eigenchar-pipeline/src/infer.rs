//! Inference orchestration over trained models.

use eigenchar_core::{CharBox, CharImage, Label, Result, TrainedModel};
use eigenchar_dataset::{load_char_images, PagePaths};
use eigenchar_features::feature_matrix;
use eigenchar_recognize::{classify, correct_labels, PcaReducer};
use nalgebra::DMatrix;

/// Reduce one page of character images to the model's final
/// dimensionality.
///
/// Vectorization uses the model's stored bounding box (never recomputed
/// from the page, so test images larger than the trained box are cropped)
/// and both reduction passes reuse the frozen basis.
pub fn reduce_page(images: &[CharImage], model: &TrainedModel) -> Result<DMatrix<f64>> {
    let full = feature_matrix(images, model.bbox);
    let reducer = PcaReducer::new(model.noise_dim, model.final_dim);
    reducer.apply(&full, &model.basis)
}

/// Classify one page of character images against a trained model.
///
/// Returns predicted labels in page order, passed through the
/// error-correction hook. `boxes` may be empty when page geometry is
/// unavailable; the hook receives whatever is known.
pub fn classify_page(
    images: &[CharImage],
    boxes: &[CharBox],
    model: &TrainedModel,
) -> Result<Vec<Label>> {
    let reduced = reduce_page(images, model)?;
    let labels = classify(&model.train_vectors, &model.train_labels, &reduced)?;

    tracing::info!(chars = labels.len(), "classified page");

    Ok(correct_labels(&reduced, labels, boxes, model))
}

/// Load a page trio from disk and classify it.
pub fn classify_page_files(page: &PagePaths, model: &TrainedModel) -> Result<Vec<Label>> {
    let mut images = Vec::new();
    let boxes = load_char_images(page, &mut images)?;
    classify_page(&images, &boxes, model)
}
