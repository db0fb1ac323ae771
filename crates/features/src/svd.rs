//! Truncated singular value decomposition.
//!
//! Projects the sparse TF-IDF weight matrix into a small dense embedding
//! space while preserving dominant variance. The decomposition is exact
//! (Golub-Kahan), so identical input always produces identical output.

use nalgebra::{DMatrix, SVD};
use tracing::debug;

/// Linear dimensionality reduction onto the top singular components.
#[derive(Debug, Clone)]
pub struct TruncatedSvd {
    n_components: usize,
}

impl TruncatedSvd {
    /// Create a reducer targeting `n_components` output dimensions.
    pub fn new(n_components: usize) -> Self {
        Self { n_components }
    }

    /// Project each row of `matrix` into the reduced space.
    ///
    /// The effective rank is clamped to `min(n_components, nrows, ncols)`
    /// so a small corpus embeds at full rank instead of failing. Output
    /// rows are `U_k * sigma_k`, one per input row.
    pub fn fit_transform(&self, matrix: &DMatrix<f64>) -> DMatrix<f64> {
        let rows = matrix.nrows();
        let k = self.n_components.min(rows).min(matrix.ncols());
        if k == 0 {
            return DMatrix::zeros(rows, 0);
        }

        // Singular values come back sorted in descending order
        let svd = SVD::new(matrix.clone(), true, false);
        let u = svd.u.expect("left singular vectors were requested");

        let mut reduced = DMatrix::zeros(rows, k);
        for col in 0..k {
            let sigma = svd.singular_values[col];
            for row in 0..rows {
                reduced[(row, col)] = u[(row, col)] * sigma;
            }
        }
        debug!("reduced {}x{} matrix to {} components", rows, matrix.ncols(), k);

        reduced
    }
}
