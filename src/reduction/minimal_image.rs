use log::debug;

use crate::arithmetic::{hermite_triangulate, QMat3, QVec3};
use crate::errors::CrystnetError;
use crate::net::{barycentric_placement, is_locally_stable, NetModel, NodeId, TranslationLattice};
use crate::reduction::morphism::Morphism;
use crate::symmetry::partition::Partition;
use crate::Result;

/// Finds the equivalence classes of nodes under additional topological
/// translations: automorphisms with identity linear part that commute with
/// the given translations and leave no node fixed.
///
/// Returns an empty list when the net carries no extra translations, i.e. is
/// already minimal.
pub fn translational_equivalence_classes(
    net: &NetModel,
    positions: &[QVec3],
) -> Result<Vec<Vec<NodeId>>> {
    if !is_locally_stable(net, positions) {
        return Err(CrystnetError::Degenerate(
            "barycentric positions of neighbors collide".to_string(),
        ));
    }

    let n = net.node_count();
    let mut partition = Partition::new(n);
    let mut any = false;
    let start: NodeId = 0;

    for v in 1..n {
        if partition.connected(start, v) {
            continue;
        }
        let Some(iso) = Morphism::find(
            net,
            positions,
            net,
            positions,
            start,
            v,
            QMat3::identity(),
        ) else {
            continue;
        };
        any = true;
        for w in net.nodes() {
            partition.unite(w, iso.node_image(w));
        }
    }

    if !any {
        return Ok(Vec::new());
    }
    Ok(partition.classes())
}

/// Collapses a net onto its smallest translational unit.
///
/// The translation group is extended by every fractional translation that
/// maps the net onto itself; node classes under these translations become the
/// nodes of the quotient, and edge shifts are re-expressed in the extended
/// lattice basis. Nets without extra translations are returned unchanged.
pub fn minimal_image(net: &NetModel) -> Result<NetModel> {
    let positions = barycentric_placement(net)?;
    let classes = translational_equivalence_classes(net, &positions)?;
    if classes.is_empty() {
        debug!("net is already minimal ({} nodes)", net.node_count());
        return Ok(net.clone());
    }

    // Fractional translation vectors relating the members of one class.
    let mut vectors: Vec<QVec3> = Vec::new();
    {
        let class = &classes[0];
        let pv = &positions[class[0]];
        for &w in &class[1..] {
            let t = (positions[w].clone() - pv.clone()).mod1();
            if t.is_zero() {
                return Err(CrystnetError::Degenerate(
                    "found a translation of finite order".to_string(),
                ));
            }
            vectors.push(t);
        }
    }

    // Basis of the extended translation group: the fractional vectors stacked
    // on top of the old (identity) basis, triangulated.
    let mut rows = vectors.clone();
    rows.extend([
        QVec3::from_ints(nalgebra::Vector3::new(1, 0, 0)),
        QVec3::from_ints(nalgebra::Vector3::new(0, 1, 0)),
        QVec3::from_ints(nalgebra::Vector3::new(0, 0, 1)),
    ]);
    let tri = hermite_triangulate(&rows);
    if tri.len() != 3 {
        return Err(CrystnetError::Internal(
            "extended translation group has deficient rank".to_string(),
        ));
    }
    let a = QMat3::from_rows(tri[0].clone(), tri[1].clone(), tri[2].clone());
    let basis_change = a
        .try_inverse()
        .ok_or_else(|| CrystnetError::Internal("singular lattice basis".to_string()))?;

    // The rows of `a` are the extended lattice vectors in old fractional
    // coordinates, so the geometric basis shrinks accordingly.
    let geo = net.lattice().basis() * a.to_f64().transpose();
    let lattice = TranslationLattice::new(geo, net.lattice().tolerance())?;

    // One node per class; the first member acts as the class representative.
    let mut quotient = NetModel::with_lattice(lattice);
    let mut old_to_new: Vec<usize> = vec![usize::MAX; net.node_count()];
    let mut representative: Vec<NodeId> = Vec::with_capacity(classes.len());
    for class in &classes {
        let id = quotient.add_node();
        representative.push(class[0]);
        for &v in class {
            old_to_new[v] = id;
        }
    }

    for edge in net.edges() {
        let v_new = old_to_new[edge.source];
        let w_new = old_to_new[edge.target];
        let v_shift = positions[edge.source].clone() - positions[representative[v_new]].clone();
        let w_shift = positions[edge.target].clone() - positions[representative[w_new]].clone();
        let s_new = &(w_shift - v_shift + QVec3::from_ints(edge.shift)) * &basis_change;
        let s_int = s_new.to_int_vector().ok_or_else(|| {
            CrystnetError::Internal("quotient edge shift is not integral".to_string())
        })?;
        if quotient.find_edge(v_new, w_new, s_int).is_none() {
            quotient.add_edge(v_new, w_new, s_int)?;
        }
    }

    debug!(
        "reduced {} nodes / {} edges to {} nodes / {} edges",
        net.node_count(),
        net.edge_count(),
        quotient.node_count(),
        quotient.edge_count()
    );
    Ok(quotient)
}
