//! Error-correction hook.
//!
//! Extension point only: a real implementation could re-score low-margin
//! characters using lexical context and the page geometry. The current
//! hook passes labels through unchanged.

use eigenchar_core::{CharBox, Label, TrainedModel};
use nalgebra::DMatrix;

/// Post-classification correction over one page. Returns the labels
/// unchanged.
pub fn correct_labels(
    _page: &DMatrix<f64>,
    labels: Vec<Label>,
    _boxes: &[CharBox],
    _model: &TrainedModel,
) -> Vec<Label> {
    labels
}
