use std::collections::VecDeque;

use nalgebra::Vector3;
use num_traits::{One, Signed};

use crate::arithmetic::{hermite_triangulate, QVec3, Rat};
use crate::net::net_model::{NetModel, NodeId};

/// Tests whether the infinite periodic graph (not just its finite quotient)
/// is connected.
///
/// A breadth-first traversal of the quotient collects, for every node class,
/// the translation under which it was first reached, and for every re-visit
/// the difference translation. The infinite graph is connected exactly when
/// all node classes are reached and the collected difference translations
/// generate the full rank-3 translation lattice.
pub fn is_connected(net: &NetModel) -> bool {
    if net.node_count() == 0 {
        return true;
    }

    let start: NodeId = 0;
    let mut seen_shift: Vec<Option<Vector3<i32>>> = vec![None; net.node_count()];
    let mut queue = VecDeque::new();
    let mut differences: Vec<Vector3<i32>> = Vec::new();

    seen_shift[start] = Some(Vector3::zeros());
    queue.push_back(start);

    while let Some(v) = queue.pop_front() {
        let s = seen_shift[v].expect("queued node has a shift");
        for &de in net.incidences(v) {
            let w = net.target(de);
            let t = s + net.shift(de);
            match seen_shift[w] {
                Some(prev) => {
                    let d = t - prev;
                    if d != Vector3::zeros() {
                        differences.push(d);
                    }
                }
                None => {
                    seen_shift[w] = Some(t);
                    queue.push_back(w);
                }
            }
        }
    }

    if seen_shift.iter().any(|s| s.is_none()) {
        return false;
    }

    // The reachable translations must generate all of Z^3; otherwise the
    // infinite graph splits into parallel copies (e.g. ladder structures).
    let rows: Vec<QVec3> = differences.iter().map(|d| QVec3::from_ints(*d)).collect();
    let tri = hermite_triangulate(&rows);
    if tri.len() < 3 {
        return false;
    }
    let det: Rat = tri[0].0[0].clone() * tri[1].0[1].clone() * tri[2].0[2].clone();
    det.abs().is_one()
}
