use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::errors::CrystnetError;
use crate::Result;

/// The translation lattice of a periodic net.
///
/// Edge shift vectors are integer coordinates with respect to this basis; the
/// basis itself only matters when fractional node positions are converted to
/// cartesian coordinates for reporting. The lattice must act freely, which
/// for a rank-3 basis simply means the basis matrix is invertible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationLattice {
    /// Real-space basis vectors (columns).
    basis: Matrix3<f64>,
    /// Metric tensor G = A^T * A.
    metric: Matrix3<f64>,
    /// Unit cell volume = |det(basis)|.
    cell_volume: f64,
    /// Tolerance for float comparisons.
    tol: f64,
}

impl TranslationLattice {
    /// Construct a lattice from a real-space basis.
    pub fn new(basis: Matrix3<f64>, tol: f64) -> Result<Self> {
        let det = basis.determinant();
        if det.abs() < tol {
            return Err(CrystnetError::Degenerate(
                "translation lattice basis is singular".to_string(),
            ));
        }
        let metric = basis.transpose() * basis;
        Ok(TranslationLattice {
            basis,
            metric,
            cell_volume: det.abs(),
            tol,
        })
    }

    /// The standard cubic lattice with unit cell edges of length one.
    pub fn standard() -> Self {
        TranslationLattice {
            basis: Matrix3::identity(),
            metric: Matrix3::identity(),
            cell_volume: 1.0,
            tol: crate::config::BASIS_TOLERANCE,
        }
    }

    /// Convert fractional (u,v,w) coords to cartesian.
    pub fn frac_to_cart(&self, v_frac: Vector3<f64>) -> Vector3<f64> {
        self.basis * v_frac
    }

    /// Convert cartesian coords to fractional (u,v,w).
    pub fn cart_to_frac(&self, v_cart: Vector3<f64>) -> Result<Vector3<f64>> {
        let inv = self
            .basis
            .try_inverse()
            .ok_or_else(|| CrystnetError::Internal("lattice basis is singular".to_string()))?;
        Ok(inv * v_cart)
    }

    /// Get lattice parameters: a, b, c (lengths)
    pub fn lattice_parameters(&self) -> (f64, f64, f64) {
        let a = self.metric[(0, 0)].sqrt();
        let b = self.metric[(1, 1)].sqrt();
        let c = self.metric[(2, 2)].sqrt();
        (a, b, c)
    }

    /// Get lattice angles: alpha, beta, gamma (in radians)
    pub fn lattice_angles(&self) -> (f64, f64, f64) {
        let (a, b, c) = self.lattice_parameters();
        let alpha = (self.metric[(1, 2)] / (b * c)).acos();
        let beta = (self.metric[(0, 2)] / (a * c)).acos();
        let gamma = (self.metric[(0, 1)] / (a * b)).acos();
        (alpha, beta, gamma)
    }

    pub fn basis(&self) -> &Matrix3<f64> {
        &self.basis
    }

    pub fn metric_tensor(&self) -> &Matrix3<f64> {
        &self.metric
    }

    pub fn cell_volume(&self) -> f64 {
        self.cell_volume
    }

    pub fn tolerance(&self) -> f64 {
        self.tol
    }
}

impl Default for TranslationLattice {
    fn default() -> Self {
        TranslationLattice::standard()
    }
}
