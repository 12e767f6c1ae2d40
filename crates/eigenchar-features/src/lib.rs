//! Feature extraction: variable-sized character images become fixed-length
//! numeric vectors by pasting each image into a common bounding box.
//!
//! 1. The box is the max height / max width over the batch.
//! 2. Each image lands at the top-left origin of a 255-filled canvas.
//! 3. The canvas flattens row-major into one matrix row.
//!
//! Images larger than the box are cropped to its top-left region, not
//! rejected. All rows of one batch share the same length.

use eigenchar_core::{BoxSize, CharImage, ClassifyError, Result};
use nalgebra::DMatrix;

/// Canvas fill for cells no image pixel covers (white background).
pub const BACKGROUND: f64 = 255.0;

/// Compute the common bounding box for a set of images: max height and
/// max width over the batch. Errors on an empty batch.
pub fn bounding_box_size(images: &[CharImage]) -> Result<BoxSize> {
    if images.is_empty() {
        return Err(ClassifyError::EmptyCorpus);
    }
    let mut height = 0;
    let mut width = 0;
    for image in images {
        height = height.max(image.height);
        width = width.max(image.width);
    }
    Ok(BoxSize::new(height, width))
}

/// Vectorize a batch of images against a fixed box size.
///
/// Output has one row per image, in input order, each of length
/// `box_size.feature_len()`. Pixels outside an image stay at
/// [`BACKGROUND`]; pixels outside the box are cropped.
pub fn feature_matrix(images: &[CharImage], box_size: BoxSize) -> DMatrix<f64> {
    let box_w = box_size.width as usize;
    let nfeatures = box_size.feature_len();

    let mut vectors = DMatrix::from_element(images.len(), nfeatures, BACKGROUND);
    for (i, image) in images.iter().enumerate() {
        let copy_h = image.height.min(box_size.height) as usize;
        let copy_w = image.width.min(box_size.width) as usize;
        let img_w = image.width as usize;

        for row in 0..copy_h {
            for col in 0..copy_w {
                vectors[(i, row * box_w + col)] = image.pixels[row * img_w + col] as f64;
            }
        }
    }

    tracing::debug!(
        images = images.len(),
        features = nfeatures,
        "vectorized batch"
    );

    vectors
}

/// Vectorize a batch, computing the bounding box from the batch itself.
pub fn feature_matrix_auto(images: &[CharImage]) -> Result<DMatrix<f64>> {
    let box_size = bounding_box_size(images)?;
    Ok(feature_matrix(images, box_size))
}
