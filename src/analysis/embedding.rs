use log::debug;
use nalgebra::{Cholesky, Matrix3, Vector3};

use crate::arithmetic::rat_to_f64;
use crate::config::{BASIS_TOLERANCE, PLACEMENT_TOLERANCE};
use crate::errors::CrystnetError;
use crate::net::{barycentric_placement, NetModel, TranslationLattice};
use crate::symmetry::SymmetryGroup;
use crate::Result;

/// A geometric realization of a net: fractional node positions inside the
/// unit cell together with a cartesian lattice basis.
#[derive(Debug, Clone)]
pub struct Embedding {
    pub positions: Vec<Vector3<f64>>,
    pub lattice: TranslationLattice,
}

impl Embedding {
    /// Cartesian edge lengths, one per undirected edge.
    pub fn edge_lengths(&self, net: &NetModel) -> Vec<f64> {
        net.edges()
            .iter()
            .map(|e| {
                let shift = e.shift.map(|x| x as f64);
                let d = self.positions[e.target] + shift - self.positions[e.source];
                self.lattice.frac_to_cart(d).norm()
            })
            .collect()
    }
}

/// Computes the maximum-symmetry barycentric embedding of a net.
///
/// Node positions are the barycentric placement reduced into the unit cell.
/// The metric tensor is obtained by averaging the rotation parts of the
/// symmetry group, which makes every operation an isometry, and the cell is
/// scaled to unit average edge length.
pub fn barycentric_embedding(net: &NetModel, group: &SymmetryGroup) -> Result<Embedding> {
    let exact = barycentric_placement(net)?;
    let positions: Vec<Vector3<f64>> = exact
        .iter()
        .map(|p| {
            let q = p.mod1();
            Vector3::new(
                rat_to_f64(&q.0[0]),
                rat_to_f64(&q.0[1]),
                rat_to_f64(&q.0[2]),
            )
        })
        .collect();

    // The reduced positions must still satisfy the barycenter condition, up
    // to whole lattice translations absorbed by the unit-cell wrap.
    for v in net.nodes() {
        let mut avg = Vector3::zeros();
        for &de in net.incidences(v) {
            avg += positions[net.target(de)] + net.shift(de).map(|x| x as f64);
        }
        avg /= net.degree(v) as f64;
        let drift = (avg - positions[v]).map(|x| x - x.round());
        if drift.norm() > PLACEMENT_TOLERANCE {
            return Err(CrystnetError::Internal(format!(
                "node {} is off its neighbor barycenter",
                v
            )));
        }
    }

    // Group-averaged metric tensor in fractional coordinates.
    let mut gram = Matrix3::zeros();
    for op in group.operators() {
        let r = op.rotation.map(|x| x as f64);
        gram += r.transpose() * r;
    }
    gram /= group.order() as f64;

    let chol = Cholesky::new(gram).ok_or(CrystnetError::SingularEmbedding)?;
    let mut basis = chol.l().transpose();

    // Normalize to unit average edge length.
    let provisional = TranslationLattice::new(basis, BASIS_TOLERANCE)?;
    let lengths = Embedding {
        positions: positions.clone(),
        lattice: provisional,
    }
    .edge_lengths(net);
    let mean: f64 = lengths.iter().sum::<f64>() / lengths.len() as f64;
    if mean < PLACEMENT_TOLERANCE {
        return Err(CrystnetError::SingularEmbedding);
    }
    basis /= mean;
    let lattice = TranslationLattice::new(basis, BASIS_TOLERANCE)?;

    let embedding = Embedding { positions, lattice };
    debug!(
        "embedding with cell volume {:.6}",
        embedding.lattice.cell_volume()
    );
    Ok(embedding)
}
