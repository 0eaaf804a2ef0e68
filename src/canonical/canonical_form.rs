use std::cmp::Ordering;
use std::collections::VecDeque;

use log::debug;
use num_traits::{One, Signed};

use crate::arithmetic::{hermite_triangulate, rank_of_rows, QMat3, QVec3, Rat};
use crate::canonical::invariant_key::InvariantKey;
use crate::errors::CrystnetError;
use crate::net::{
    barycentric_placement, difference_vector, is_locally_stable, DirEdge, NetModel, NodeId,
    TranslationLattice,
};
use crate::reduction::Morphism;
use crate::symmetry::{characteristic_bases, EdgeBasis};
use crate::Result;

/// The canonical form of a periodic net: a renumbered, rebased copy of the
/// net together with its invariant key.
#[derive(Debug, Clone)]
pub struct CanonicalForm {
    pub graph: NetModel,
    pub key: InvariantKey,
}

/// One edge of a traversal script, in new numbering with rational shift.
#[derive(Debug, Clone)]
struct EdgeCmd {
    source: usize,
    target: usize,
    shift: QVec3,
}

impl EdgeCmd {
    fn cmp_to(&self, other: &EdgeCmd) -> Ordering {
        self.source
            .cmp(&other.source)
            .then_with(|| self.target.cmp(&other.target))
            .then_with(|| self.shift.lex_cmp(&other.shift))
    }
}

fn difference_matrix(net: &NetModel, positions: &[QVec3], basis: &EdgeBasis) -> QMat3 {
    QMat3::from_rows(
        difference_vector(net, positions, basis[0]),
        difference_vector(net, positions, basis[1]),
        difference_vector(net, positions, basis[2]),
    )
}

/// Computes the canonical form of a connected, locally stable net.
///
/// Every characteristic basis induces a breadth-first relabeling of the net
/// with neighbors visited in the lexicographic order of their difference
/// vectors, written in that basis. The traversal emits one command per edge;
/// the lexicographically smallest script over all bases is the canonical
/// script. Isomorphic nets enumerate the same set of scripts, so the winner
/// does not depend on the input presentation.
pub fn canonical_form(net: &NetModel) -> Result<CanonicalForm> {
    let positions = barycentric_placement(net)?;
    if !is_locally_stable(net, &positions) {
        return Err(CrystnetError::Degenerate(
            "barycentric positions of neighbors collide".to_string(),
        ));
    }

    let n = net.node_count();
    let m = net.edge_count();
    let bases = characteristic_bases(net, &positions);
    debug!("minimizing traversal script over {} bases", bases.len());

    let mut best_script: Vec<EdgeCmd> = Vec::new();
    let mut best_basis: Option<&EdgeBasis> = None;

    'bases: for basis in &bases {
        let v0 = net.source(basis[0]);
        let b_inv = difference_matrix(net, &positions, basis)
            .try_inverse()
            .ok_or_else(|| CrystnetError::Internal("singular edge basis".to_string()))?;

        let mut old2new: Vec<usize> = vec![0; n];
        let mut new_pos: Vec<QVec3> = vec![QVec3::zeros(); n];
        let mut queue: VecDeque<(NodeId, QVec3)> = VecDeque::new();
        old2new[v0] = 1;
        queue.push_back((v0, QVec3::zeros()));
        let mut next_vertex = 2;
        let mut edges_so_far = 0usize;
        let mut equal = best_basis.is_some();

        while let Some((v, p)) = queue.pop_front() {
            let vn = old2new[v];

            // Neighbors in lexicographic order of their rebased difference
            // vectors.
            let mut incident: Vec<(QVec3, DirEdge)> = net
                .incidences(v)
                .iter()
                .map(|&de| (&difference_vector(net, &positions, de) * &b_inv, de))
                .collect();
            incident.sort_by(|a, b| a.0.lex_cmp(&b.0));

            for (row, de) in incident {
                let w = net.target(de);
                let s = p.clone() + row;
                let wn;
                let shift;
                if old2new[w] == 0 {
                    wn = next_vertex;
                    next_vertex += 1;
                    old2new[w] = wn;
                    new_pos[w] = s.clone();
                    queue.push_back((w, s));
                    shift = QVec3::zeros();
                } else {
                    wn = old2new[w];
                    if wn < vn {
                        continue;
                    }
                    shift = s - new_pos[w].clone();
                }
                if vn < wn || (vn == wn && shift.leading_sign() < 0) {
                    let cmd = EdgeCmd {
                        source: vn,
                        target: wn,
                        shift,
                    };
                    if equal {
                        match cmd.cmp_to(&best_script[edges_so_far]) {
                            Ordering::Less => {
                                equal = false;
                                best_script.truncate(edges_so_far);
                            }
                            Ordering::Greater => continue 'bases,
                            Ordering::Equal => {}
                        }
                    }
                    if !equal {
                        best_script.push(cmd);
                    }
                    edges_so_far += 1;
                }
            }
        }
        best_basis = Some(basis);
    }

    let best_basis =
        best_basis.ok_or_else(|| CrystnetError::Internal("no traversal basis".to_string()))?;
    if best_script.len() != m {
        return Err(CrystnetError::Internal(
            "traversal script does not cover all edges".to_string(),
        ));
    }

    // A lattice basis for the new numbering, taken from the script shifts.
    let b_mat = difference_matrix(net, &positions, best_basis);
    let mut a_rows: Vec<QVec3> = Vec::new();
    for cmd in &best_script {
        a_rows.push(cmd.shift.clone());
        if rank_of_rows(&a_rows) == a_rows.len() {
            if a_rows.len() == 3 {
                break;
            }
        } else {
            a_rows.pop();
        }
    }
    let mut a = match <[QVec3; 3]>::try_from(a_rows) {
        Ok([r0, r1, r2]) => QMat3::from_rows(r0, r1, r2),
        Err(_) => QMat3::zeros(),
    };
    if (&a * &b_mat).determinant().abs() != Rat::one() {
        // The greedy rows span a proper sublattice; triangulate all shifts.
        let all: Vec<QVec3> = best_script.iter().map(|cmd| cmd.shift.clone()).collect();
        let tri = hermite_triangulate(&all);
        if tri.len() != 3 {
            return Err(CrystnetError::Internal(
                "script shifts have deficient rank".to_string(),
            ));
        }
        a = QMat3::from_rows(tri[0].clone(), tri[1].clone(), tri[2].clone());
    }
    if (&a * &b_mat).determinant().abs() != Rat::one() {
        return Err(CrystnetError::Internal(
            "extracted lattice basis is not unimodular".to_string(),
        ));
    }
    let basis_change = a
        .try_inverse()
        .ok_or_else(|| CrystnetError::Internal("singular lattice basis".to_string()))?;

    // Rebase the script shifts, normalize loop directions and sort.
    let mut cmds: Vec<EdgeCmd> = Vec::with_capacity(m);
    for cmd in &best_script {
        let mut shift = &cmd.shift * &basis_change;
        if !shift.is_integral() {
            return Err(CrystnetError::Internal(
                "rebased script shift is not integral".to_string(),
            ));
        }
        if cmd.source == cmd.target && shift.leading_sign() > 0 {
            shift = -shift;
        }
        cmds.push(EdgeCmd {
            source: cmd.source,
            target: cmd.target,
            shift,
        });
    }
    cmds.sort_by(|a, b| a.cmp_to(b));

    // The combined fractional basis change from the input description to the
    // canonical one. Its inverse rows, a * b_mat, are the canonical lattice
    // vectors in input coordinates.
    let matrix = &b_mat
        .try_inverse()
        .ok_or_else(|| CrystnetError::Internal("singular edge basis".to_string()))?
        * &basis_change;
    let geo = net.lattice().basis() * (&a * &b_mat).to_f64().transpose();
    let lattice = TranslationLattice::new(geo, net.lattice().tolerance())?;

    // Build the canonical graph and the flat key.
    let mut graph = NetModel::with_lattice(lattice);
    for _ in 0..n {
        graph.add_node();
    }
    let mut values: Vec<i32> = Vec::with_capacity(1 + 5 * m);
    values.push(3);
    for cmd in &cmds {
        let s = cmd.shift.to_int_vector().ok_or_else(|| {
            CrystnetError::Internal("canonical shift out of integer range".to_string())
        })?;
        graph.add_edge(cmd.source - 1, cmd.target - 1, s)?;
        values.push(cmd.source as i32);
        values.push(cmd.target as i32);
        values.push(s.x);
        values.push(s.y);
        values.push(s.z);
    }

    // The relabeling must itself be an isomorphism onto the result.
    let canon_pos = barycentric_placement(&graph)?;
    let v0_best = net.source(best_basis[0]);
    if Morphism::find(net, &positions, &graph, &canon_pos, v0_best, 0, matrix).is_none() {
        return Err(CrystnetError::Internal(
            "canonical relabeling is not an isomorphism".to_string(),
        ));
    }

    Ok(CanonicalForm {
        graph,
        key: InvariantKey::new(values),
    })
}

/// The invariant key of a net, without the canonical graph.
pub fn invariant_key(net: &NetModel) -> Result<InvariantKey> {
    Ok(canonical_form(net)?.key)
}
