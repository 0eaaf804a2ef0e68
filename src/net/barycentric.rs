use std::collections::HashSet;

use crate::arithmetic::{rat, QMatrix, QVec3};
use crate::errors::CrystnetError;
use crate::net::connectivity::is_connected;
use crate::net::net_model::NetModel;
use crate::Result;

/// Computes the exact barycentric placement of the node representatives.
///
/// Each node sits at the translation-adjusted average of its neighbors; the
/// placement is unique up to affine changes once node 0 is pinned at the
/// origin. Positions are fractional coordinates with respect to the edge
/// shift basis, computed over exact rationals so that downstream
/// canonicalization is reproducible bit for bit.
pub fn barycentric_placement(net: &NetModel) -> Result<Vec<QVec3>> {
    if !is_connected(net) {
        return Err(CrystnetError::Disconnected);
    }
    let n = net.node_count();
    if n == 0 {
        return Ok(Vec::new());
    }

    // One balance equation per node plus a pinning row for node 0. Loops
    // contribute symmetrically in both directions and cancel, so they are
    // skipped outright.
    let mut m = QMatrix::zeros(n + 1, n);
    let mut t = QMatrix::zeros(n + 1, 3);
    for v in net.nodes() {
        for &de in net.incidences(v) {
            let w = net.target(de);
            if v == w {
                continue;
            }
            m.add_to(v, w, rat(-1));
            m.add_to(v, v, rat(1));
            let s = net.shift(de);
            for k in 0..3 {
                t.add_to(v, k, rat(s[k] as i64));
            }
        }
    }
    m.set(n, 0, rat(1));

    let p = QMatrix::solve(&m, &t).ok_or(CrystnetError::SingularEmbedding)?;

    let mut positions = Vec::with_capacity(n);
    for i in 0..n {
        positions.push(QVec3([
            p.get(i, 0).clone(),
            p.get(i, 1).clone(),
            p.get(i, 2).clone(),
        ]));
    }
    Ok(positions)
}

/// A net is stable if no two node representatives share a position modulo
/// lattice translations.
pub fn is_stable(net: &NetModel, positions: &[QVec3]) -> bool {
    let mut seen = HashSet::new();
    for v in net.nodes() {
        if !seen.insert(positions[v].mod1()) {
            return false;
        }
    }
    true
}

/// A net is locally stable if no two neighbors of any node coincide in the
/// barycentric placement. Local stability is what makes morphism extension
/// deterministic, so reduction and symmetry search require it.
pub fn is_locally_stable(net: &NetModel, positions: &[QVec3]) -> bool {
    for v in net.nodes() {
        let mut seen = HashSet::new();
        for &de in net.incidences(v) {
            let w = net.target(de);
            let p = positions[w].clone() + QVec3::from_ints(net.shift(de));
            if !seen.insert(p) {
                return false;
            }
        }
    }
    true
}

/// The barycentric difference vector along a directed edge: position of the
/// target image minus position of the source.
pub fn difference_vector(
    net: &NetModel,
    positions: &[QVec3],
    de: crate::net::net_model::DirEdge,
) -> QVec3 {
    let v = net.source(de);
    let w = net.target(de);
    positions[w].clone() - positions[v].clone() + QVec3::from_ints(net.shift(de))
}
