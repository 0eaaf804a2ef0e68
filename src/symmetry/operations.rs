use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::config::PLACEMENT_TOLERANCE;

/// A single symmetry operation: rotation (integer matrix) + translation.
///
/// The rotation acts on fractional coordinates in the column convention and
/// has determinant plus or minus one; the translation is fractional and kept
/// in the half-open unit cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymOp {
    /// Unimodular rotation part in lattice coordinates
    pub rotation: Matrix3<i32>,
    /// Fractional translation shift
    pub translation: Vector3<f64>,
}

impl SymOp {
    /// Create a new symmetry operation
    pub fn new(rotation: Matrix3<i32>, translation: Vector3<f64>) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Create identity operation
    pub fn identity() -> Self {
        Self {
            rotation: Matrix3::identity(),
            translation: Vector3::zeros(),
        }
    }

    /// Apply symmetry operation to a fractional point
    pub fn apply(&self, point: Vector3<f64>) -> Vector3<f64> {
        let rotation_f64 = self.rotation.map(|x| x as f64);
        rotation_f64 * point + self.translation
    }

    /// Check if this is the identity operation
    pub fn is_identity(&self) -> bool {
        self.rotation == Matrix3::identity() && self.translation.norm() < PLACEMENT_TOLERANCE
    }

    pub fn determinant(&self) -> i32 {
        let m = &self.rotation;
        m[(0, 0)] * (m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)])
            - m[(0, 1)] * (m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)])
            + m[(0, 2)] * (m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)])
    }

    pub fn trace(&self) -> i32 {
        self.rotation[(0, 0)] + self.rotation[(1, 1)] + self.rotation[(2, 2)]
    }
}
