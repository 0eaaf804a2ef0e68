use std::collections::{HashSet, VecDeque};

use log::debug;
use nalgebra::Vector3;

use crate::arithmetic::{rat_to_f64, QMat3, QVec3};
use crate::config::SYMMETRY_SEARCH_BUDGET;
use crate::errors::CrystnetError;
use crate::net::{barycentric_placement, difference_vector, is_locally_stable, NetModel, NodeId};
use crate::reduction::Morphism;
use crate::symmetry::characteristic_bases::{characteristic_bases, EdgeBasis};
use crate::symmetry::operations::SymOp;
use crate::symmetry::partition::Partition;
use crate::Result;

/// The full automorphism group of a periodic graph modulo translations.
#[derive(Debug, Clone)]
pub struct SymmetryGroup {
    elements: Vec<Morphism>,
    operators: Vec<SymOp>,
    node_orbits: Vec<Vec<NodeId>>,
}

impl SymmetryGroup {
    pub fn order(&self) -> usize {
        self.elements.len()
    }

    pub fn elements(&self) -> &[Morphism] {
        &self.elements
    }

    /// Affine operators in fractional coordinates, one per group element.
    pub fn operators(&self) -> &[SymOp] {
        &self.operators
    }

    pub fn node_orbits(&self) -> &[Vec<NodeId>] {
        &self.node_orbits
    }
}

fn difference_matrix(net: &NetModel, positions: &[QVec3], basis: &EdgeBasis) -> QMat3 {
    QMat3::from_rows(
        difference_vector(net, positions, basis[0]),
        difference_vector(net, positions, basis[1]),
        difference_vector(net, positions, basis[2]),
    )
}

/// Computes the symmetry group of a connected, locally stable net.
///
/// Candidate automorphisms are read off the characteristic bases: a basis
/// pair determines a linear part, which extends to at most one automorphism.
/// A partition of the directed edges prunes bases already known to be
/// equivalent to an earlier one. The budget bounds the number of extension
/// attempts and the group size.
pub fn symmetries(net: &NetModel) -> Result<SymmetryGroup> {
    symmetries_with_budget(net, SYMMETRY_SEARCH_BUDGET)
}

/// Same as [`symmetries`] but with an explicit attempt budget.
pub fn symmetries_with_budget(net: &NetModel, budget: usize) -> Result<SymmetryGroup> {
    let positions = barycentric_placement(net)?;
    if !is_locally_stable(net, &positions) {
        return Err(CrystnetError::Degenerate(
            "barycentric positions of neighbors collide".to_string(),
        ));
    }

    let bases = characteristic_bases(net, &positions);
    if bases.is_empty() {
        return Err(CrystnetError::Internal(
            "no characteristic basis found".to_string(),
        ));
    }
    debug!("examining {} characteristic bases", bases.len());

    let b0 = &bases[0];
    let v0 = net.source(b0[0]);
    let b0_mat = difference_matrix(net, &positions, b0);
    let b0_inv = b0_mat
        .try_inverse()
        .ok_or_else(|| CrystnetError::Internal("characteristic basis is singular".to_string()))?;

    let mut edge_classes = Partition::new(2 * net.edge_count());
    let mut generators: Vec<Morphism> = Vec::new();
    let mut attempts = 0usize;

    for basis in &bases {
        let known = basis
            .iter()
            .zip(b0.iter())
            .all(|(&e, &e0)| edge_classes.connected(e.id(), e0.id()));
        if known {
            continue;
        }
        attempts += 1;
        if attempts > budget {
            return Err(CrystnetError::SymmetryOverflow { budget });
        }
        let matrix = &b0_inv * &difference_matrix(net, &positions, basis);
        if !matrix.is_unimodular() {
            continue;
        }
        let Some(iso) = Morphism::find(
            net,
            &positions,
            net,
            &positions,
            v0,
            net.source(basis[0]),
            matrix,
        ) else {
            continue;
        };
        for de in net.directed_edges() {
            edge_classes.unite(de.id(), iso.dir_edge_image(de).id());
        }
        generators.push(iso);
    }

    // Close the generators into the full group.
    let mut elements = vec![Morphism::identity(net)];
    let mut seen: HashSet<Morphism> = elements.iter().cloned().collect();
    let mut queue: VecDeque<Morphism> = elements.clone().into();
    while let Some(g) = queue.pop_front() {
        for h in &generators {
            let gh = g.compose(h);
            if seen.insert(gh.clone()) {
                if elements.len() >= budget {
                    return Err(CrystnetError::SymmetryOverflow { budget });
                }
                elements.push(gh.clone());
                queue.push_back(gh);
            }
        }
    }
    debug!(
        "symmetry group of order {} from {} generators",
        elements.len(),
        generators.len()
    );

    let operators = elements
        .iter()
        .map(|g| operator_of(&positions, g))
        .collect::<Result<Vec<_>>>()?;

    let mut orbits = Partition::new(net.node_count());
    for g in &elements {
        for v in net.nodes() {
            orbits.unite(v, g.node_image(v));
        }
    }

    Ok(SymmetryGroup {
        elements,
        operators,
        node_orbits: orbits.classes(),
    })
}

/// Derives the affine operator of an automorphism: the transposed linear
/// part in the column convention, plus the fractional translation that moves
/// the placement of node 0 onto the placement of its image.
fn operator_of(positions: &[QVec3], g: &Morphism) -> Result<SymOp> {
    let m = g.matrix().to_int_matrix().ok_or_else(|| {
        CrystnetError::Internal("automorphism with non-integral matrix".to_string())
    })?;
    let moved = &positions[0] * g.matrix();
    let shift = (positions[g.node_image(0)].clone() - moved).mod1();
    let t = Vector3::new(
        rat_to_f64(&shift.0[0]),
        rat_to_f64(&shift.0[1]),
        rat_to_f64(&shift.0[2]),
    );
    Ok(SymOp::new(m.transpose(), t))
}
