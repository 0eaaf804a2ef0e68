use crate::arithmetic::{rank_of_rows, QVec3};
use crate::net::{difference_vector, DirEdge, NetModel};

/// An ordered triple of directed edges whose difference vectors span space.
pub type EdgeBasis = [DirEdge; 3];

/// Enumerates the characteristic bases of a net: ordered triples of directed
/// edges with linearly independent difference vectors, picked by a scheme
/// that depends only on the abstract structure of the net.
///
/// Node stars are tried first, then directed edge chains, then arbitrary
/// edge triples. Whichever stage produces results first is used, so every
/// automorphism permutes the returned list.
pub fn characteristic_bases(net: &NetModel, positions: &[QVec3]) -> Vec<EdgeBasis> {
    let mut result = Vec::new();

    // Stage one: triples taken from the incidence star of a single node.
    for v in net.nodes() {
        independent_triples(net, positions, net.incidences(v), &mut result);
    }
    if !result.is_empty() {
        return result;
    }

    // Stage two: directed chains, each edge starting where the last ended.
    for v in net.nodes() {
        for &de in net.incidences(v) {
            let d = difference_vector(net, positions, de);
            extend_chain(net, positions, &mut vec![de], &mut vec![d], &mut result);
        }
    }
    if !result.is_empty() {
        return result;
    }

    // Stage three: arbitrary triples of directed edges.
    let all: Vec<DirEdge> = net.directed_edges().collect();
    independent_triples(net, positions, &all, &mut result);
    result
}

fn independent_triples(
    net: &NetModel,
    positions: &[QVec3],
    edges: &[DirEdge],
    result: &mut Vec<EdgeBasis>,
) {
    let diffs: Vec<QVec3> = edges
        .iter()
        .map(|&de| difference_vector(net, positions, de))
        .collect();
    for i in 0..edges.len() {
        for j in 0..edges.len() {
            if j == i {
                continue;
            }
            for k in 0..edges.len() {
                if k == i || k == j {
                    continue;
                }
                let rows = [diffs[i].clone(), diffs[j].clone(), diffs[k].clone()];
                if rank_of_rows(&rows) == 3 {
                    result.push([edges[i], edges[j], edges[k]]);
                }
            }
        }
    }
}

fn extend_chain(
    net: &NetModel,
    positions: &[QVec3],
    chain: &mut Vec<DirEdge>,
    diffs: &mut Vec<QVec3>,
    result: &mut Vec<EdgeBasis>,
) {
    if chain.len() == 3 {
        result.push([chain[0], chain[1], chain[2]]);
        return;
    }
    let tail = net.target(*chain.last().expect("chain is nonempty"));
    for &de in net.incidences(tail) {
        let d = difference_vector(net, positions, de);
        diffs.push(d);
        if rank_of_rows(diffs) == diffs.len() {
            chain.push(de);
            extend_chain(net, positions, chain, diffs, result);
            chain.pop();
        }
        diffs.pop();
    }
}
