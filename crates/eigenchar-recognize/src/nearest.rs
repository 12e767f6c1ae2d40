//! Batched nearest-neighbour classification under cosine similarity.
//!
//! The full pairwise similarity matrix comes from a single dense multiply
//! (`test x train^T`) divided elementwise by the outer product of the row
//! norms. This is the performance-critical path and stays expressed as
//! batched linear algebra, never per-pair iteration.

use eigenchar_core::{ClassifyError, Label, Result, VectorSet};
use nalgebra::{DMatrix, DVector, RowDVector};

/// Full cosine-similarity matrix between two row batches: one row per
/// test vector, one column per training vector.
///
/// Zero-norm rows make the similarity undefined and are rejected with
/// [`ClassifyError::DegenerateVector`] instead of letting NaN flow into
/// the argmax.
pub fn cosine_similarities(
    test_vectors: &DMatrix<f64>,
    train_vectors: &DMatrix<f64>,
) -> Result<DMatrix<f64>> {
    if test_vectors.ncols() != train_vectors.ncols() {
        return Err(ClassifyError::InvalidInput(format!(
            "test vectors have {} dimensions, training vectors {}",
            test_vectors.ncols(),
            train_vectors.ncols()
        )));
    }

    let test_norms = row_norms(test_vectors, VectorSet::Test)?;
    let train_norms = row_norms(train_vectors, VectorSet::Train)?;

    let dots = test_vectors * train_vectors.transpose();
    let denom = DVector::from_vec(test_norms) * RowDVector::from_vec(train_norms);

    Ok(dots.component_div(&denom))
}

/// Assign each test vector the label of its most cosine-similar training
/// vector. Ties break to the lowest training index.
pub fn classify(
    train_vectors: &DMatrix<f64>,
    train_labels: &[Label],
    test_vectors: &DMatrix<f64>,
) -> Result<Vec<Label>> {
    if train_vectors.nrows() == 0 {
        return Err(ClassifyError::EmptyCorpus);
    }
    if train_vectors.nrows() != train_labels.len() {
        return Err(ClassifyError::LabelMismatch {
            images: train_vectors.nrows(),
            labels: train_labels.len(),
        });
    }
    if test_vectors.nrows() == 0 {
        return Ok(Vec::new());
    }

    let similarities = cosine_similarities(test_vectors, train_vectors)?;

    let labels = (0..similarities.nrows())
        .map(|i| {
            let row = similarities.row(i);
            let mut best = 0;
            for j in 1..row.ncols() {
                if row[j] > row[best] {
                    best = j;
                }
            }
            train_labels[best].clone()
        })
        .collect();

    tracing::debug!(
        test = test_vectors.nrows(),
        train = train_vectors.nrows(),
        dim = test_vectors.ncols(),
        "nearest-neighbour classification"
    );

    Ok(labels)
}

fn row_norms(vectors: &DMatrix<f64>, set: VectorSet) -> Result<Vec<f64>> {
    (0..vectors.nrows())
        .map(|i| {
            let norm = vectors.row(i).norm();
            if norm == 0.0 {
                Err(ClassifyError::DegenerateVector { set, index: i })
            } else {
                Ok(norm)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn labels(tags: &[&str]) -> Vec<Label> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn training_vector_matches_itself_with_similarity_one() {
        let train = DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, -1.0, 0.5, 2.0]);
        let sims = cosine_similarities(&train, &train).unwrap();
        assert_relative_eq!(sims[(0, 0)], 1.0, epsilon = 1e-12);
        assert_relative_eq!(sims[(1, 1)], 1.0, epsilon = 1e-12);

        let out = classify(&train, &labels(&["a", "b"]), &train).unwrap();
        assert_eq!(out, labels(&["a", "b"]));
    }

    #[test]
    fn cosine_ignores_vector_scale() {
        let train = DMatrix::from_row_slice(2, 2, &[1.0, 0.0, 0.0, 1.0]);
        // 100x-scaled copy of the first training vector.
        let test = DMatrix::from_row_slice(1, 2, &[100.0, 0.0]);
        let out = classify(&train, &labels(&["x", "y"]), &test).unwrap();
        assert_eq!(out, labels(&["x"]));
    }

    #[test]
    fn ties_break_to_lowest_training_index() {
        // Two identical training vectors with different labels.
        let train = DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 1.0, 1.0]);
        let test = DMatrix::from_row_slice(1, 2, &[2.0, 2.0]);
        let out = classify(&train, &labels(&["first", "second"]), &test).unwrap();
        assert_eq!(out, labels(&["first"]));
    }

    #[test]
    fn zero_norm_test_vector_is_rejected() {
        let train = DMatrix::from_row_slice(1, 2, &[1.0, 0.0]);
        let test = DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 0.0, 0.0]);
        match classify(&train, &labels(&["a"]), &test) {
            Err(ClassifyError::DegenerateVector { set, index }) => {
                assert_eq!(set, VectorSet::Test);
                assert_eq!(index, 1);
            }
            other => panic!("expected DegenerateVector, got {other:?}"),
        }
    }

    #[test]
    fn zero_norm_training_vector_is_rejected() {
        let train = DMatrix::from_row_slice(2, 2, &[0.0, 0.0, 1.0, 0.0]);
        let test = DMatrix::from_row_slice(1, 2, &[1.0, 1.0]);
        match classify(&train, &labels(&["a", "b"]), &test) {
            Err(ClassifyError::DegenerateVector { set, index }) => {
                assert_eq!(set, VectorSet::Train);
                assert_eq!(index, 0);
            }
            other => panic!("expected DegenerateVector, got {other:?}"),
        }
    }

    #[test]
    fn label_count_must_match_training_rows() {
        let train = DMatrix::from_row_slice(2, 2, &[1.0, 0.0, 0.0, 1.0]);
        let test = DMatrix::from_row_slice(1, 2, &[1.0, 0.0]);
        assert!(matches!(
            classify(&train, &labels(&["only-one"]), &test),
            Err(ClassifyError::LabelMismatch {
                images: 2,
                labels: 1
            })
        ));
    }

    #[test]
    fn empty_test_page_yields_no_labels() {
        let train = DMatrix::from_row_slice(1, 2, &[1.0, 0.0]);
        let test = DMatrix::<f64>::zeros(0, 2);
        let out = classify(&train, &labels(&["a"]), &test).unwrap();
        assert!(out.is_empty());
    }
}
