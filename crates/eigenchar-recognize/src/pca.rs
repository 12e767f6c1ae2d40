//! Two-pass PCA dimensionality reduction.
//!
//! Algorithm:
//! 1. Denoising pass: project the batch onto an intermediate
//!    `noise_dim`-dimensional basis, then reconstruct back to full length.
//!    Smooths per-pixel noise before the aggressive final reduction.
//! 2. Reduction pass: project the reconstruction down to `final_dim`.
//!
//! During training each pass fits its own basis from the batch covariance;
//! only the final-dimension basis is kept, and it is frozen into the model.
//! During inference both passes reuse the frozen basis: pass 1 projects
//! through it and reconstructs, pass 2 projects the reconstruction. No fit
//! ever happens against test data.

use eigenchar_core::{ClassifyError, Result};
use nalgebra::{DMatrix, SymmetricEigen};

/// Reduces full-length feature vectors to their final low-dimensional
/// representation, fitting bases during training and reusing the frozen
/// basis during inference.
#[derive(Debug, Clone, Copy)]
pub struct PcaReducer {
    /// Intermediate target for the denoising reconstruction pass.
    pub noise_dim: usize,
    /// Final reduced dimensionality.
    pub final_dim: usize,
}

impl PcaReducer {
    pub fn new(noise_dim: usize, final_dim: usize) -> Self {
        Self {
            noise_dim,
            final_dim,
        }
    }

    /// Training path: denoise with a throwaway `noise_dim` basis, fit the
    /// `final_dim` basis on the denoised batch, project.
    ///
    /// Returns `(reduced, basis)`. The basis has one eigenvector per
    /// column in descending-eigenvalue order; the noise-pass basis is
    /// never retained.
    pub fn fit(&self, full: &DMatrix<f64>) -> Result<(DMatrix<f64>, DMatrix<f64>)> {
        let noise_basis = fit_basis(full, self.noise_dim)?;
        let denoised = denoise(full, &noise_basis);

        let basis = fit_basis(&denoised, self.final_dim)?;
        let reduced = project(&denoised, &basis);

        tracing::debug!(
            observations = full.nrows(),
            features = full.ncols(),
            noise_dim = self.noise_dim,
            final_dim = self.final_dim,
            "fitted two-pass PCA reduction"
        );

        Ok((reduced, basis))
    }

    /// Inference path: both passes reuse the frozen basis.
    pub fn apply(&self, full: &DMatrix<f64>, basis: &DMatrix<f64>) -> Result<DMatrix<f64>> {
        if full.ncols() != basis.nrows() {
            return Err(ClassifyError::InvalidInput(format!(
                "feature length {} does not match basis rows {}",
                full.ncols(),
                basis.nrows()
            )));
        }

        let denoised = denoise(full, basis);
        Ok(project(&denoised, basis))
    }
}

/// Fit the top `d` principal components of a batch.
///
/// Covariance treats rows as observations (per-feature centering, N-1
/// normalization); the symmetric eigendecomposition's top `d`
/// eigenvectors are returned as columns in descending-eigenvalue order.
fn fit_basis(batch: &DMatrix<f64>, d: usize) -> Result<DMatrix<f64>> {
    let n = batch.nrows();
    let p = batch.ncols();

    if n < 2 {
        return Err(ClassifyError::InvalidInput(format!(
            "PCA fit requires at least 2 observations, got {n}"
        )));
    }
    if d == 0 || d > p {
        return Err(ClassifyError::InvalidInput(format!(
            "cannot extract {d} principal components from {p} features"
        )));
    }

    let cov = covariance(batch);
    let eig = SymmetricEigen::new(cov);

    // Descending eigenvalue order; stable sort keeps index order among ties.
    let mut order: Vec<usize> = (0..p).collect();
    order.sort_by(|&a, &b| eig.eigenvalues[b].partial_cmp(&eig.eigenvalues[a]).unwrap());
    order.truncate(d);

    Ok(eig.eigenvectors.select_columns(order.iter()))
}

/// Batch covariance, rows as observations.
fn covariance(batch: &DMatrix<f64>) -> DMatrix<f64> {
    let n = batch.nrows();
    let p = batch.ncols();
    let means = batch.row_mean();

    let centered = DMatrix::from_fn(n, p, |i, j| batch[(i, j)] - means[j]);
    (centered.transpose() * centered) / (n as f64 - 1.0)
}

/// Center by the batch's scalar mean and project onto the basis.
///
/// The mean is taken over the whole matrix, not per feature, matching
/// the behavior every persisted model was trained under.
fn project(batch: &DMatrix<f64>, basis: &DMatrix<f64>) -> DMatrix<f64> {
    let mean = batch.mean();
    batch.add_scalar(-mean) * basis
}

/// Project and reconstruct back to full dimensionality.
fn denoise(batch: &DMatrix<f64>, basis: &DMatrix<f64>) -> DMatrix<f64> {
    let mean = batch.mean();
    let projected = batch.add_scalar(-mean) * basis;
    (projected * basis.transpose()).add_scalar(mean)
}
