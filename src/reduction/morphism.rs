use std::collections::VecDeque;

use crate::arithmetic::{QMat3, QVec3};
use crate::net::{difference_vector, DirEdge, NetModel, NodeId};

/// A morphism between two periodic graphs: a node bijection together with a
/// unimodular matrix acting on the translation lattice, such that adjacency
/// and edge difference vectors are preserved.
///
/// With both graphs equal this is a periodic automorphism. Construction
/// requires locally stable barycentric placements, which make the extension
/// from a single seed pair deterministic: at every node the images of the
/// incident edges are forced by their transformed difference vectors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Morphism {
    node_map: Vec<NodeId>,
    /// Image of every directed edge, indexed by `DirEdge::id()`.
    dir_edge_map: Vec<DirEdge>,
    matrix: QMat3,
}

impl Morphism {
    /// Attempts to extend the seed `v0 -> w0` with linear part `matrix` to a
    /// full morphism from `src` onto `dst`. Returns `None` when no such
    /// morphism exists.
    pub fn find(
        src: &NetModel,
        src_pos: &[QVec3],
        dst: &NetModel,
        dst_pos: &[QVec3],
        v0: NodeId,
        w0: NodeId,
        matrix: QMat3,
    ) -> Option<Morphism> {
        if src.node_count() != dst.node_count() || src.edge_count() != dst.edge_count() {
            return None;
        }
        let n = src.node_count();
        let mut node_map: Vec<Option<NodeId>> = vec![None; n];
        let mut dir_edge_map: Vec<Option<DirEdge>> = vec![None; 2 * src.edge_count()];
        let mut queue = VecDeque::new();

        node_map[v0] = Some(w0);
        queue.push_back(v0);

        while let Some(v) = queue.pop_front() {
            let w = node_map[v].expect("queued node is mapped");
            if src.degree(v) != dst.degree(w) {
                return None;
            }
            for &de in src.incidences(v) {
                let d = &difference_vector(src, src_pos, de) * &matrix;
                // The image edge is the unique edge at w with the transformed
                // difference vector.
                let image = dst
                    .incidences(w)
                    .iter()
                    .copied()
                    .find(|&fe| difference_vector(dst, dst_pos, fe) == d)?;
                match dir_edge_map[de.id()] {
                    Some(prev) if prev != image => return None,
                    Some(_) => {}
                    None => dir_edge_map[de.id()] = Some(image),
                }
                let t_src = src.target(de);
                let t_dst = dst.target(image);
                match node_map[t_src] {
                    Some(prev) if prev != t_dst => return None,
                    Some(_) => {}
                    None => {
                        node_map[t_src] = Some(t_dst);
                        queue.push_back(t_src);
                    }
                }
            }
        }

        // Connected graphs are fully traversed; anything unmapped means the
        // source was not connected and the morphism is meaningless.
        let node_map: Option<Vec<NodeId>> = node_map.into_iter().collect();
        let dir_edge_map: Option<Vec<DirEdge>> = dir_edge_map.into_iter().collect();
        Some(Morphism {
            node_map: node_map?,
            dir_edge_map: dir_edge_map?,
            matrix,
        })
    }

    /// The identity automorphism of `net`.
    pub fn identity(net: &NetModel) -> Morphism {
        Morphism {
            node_map: net.nodes().collect(),
            dir_edge_map: net.directed_edges().collect(),
            matrix: QMat3::identity(),
        }
    }

    pub fn node_image(&self, v: NodeId) -> NodeId {
        self.node_map[v]
    }

    pub fn dir_edge_image(&self, de: DirEdge) -> DirEdge {
        self.dir_edge_map[de.id()]
    }

    pub fn matrix(&self) -> &QMat3 {
        &self.matrix
    }

    pub fn node_map(&self) -> &[NodeId] {
        &self.node_map
    }

    /// Composition: apply `self` first, then `other`.
    pub fn compose(&self, other: &Morphism) -> Morphism {
        let node_map = self
            .node_map
            .iter()
            .map(|&v| other.node_map[v])
            .collect();
        let dir_edge_map = self
            .dir_edge_map
            .iter()
            .map(|&de| other.dir_edge_map[de.id()])
            .collect();
        let matrix = &self.matrix * &other.matrix;
        Morphism {
            node_map,
            dir_edge_map,
            matrix,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.matrix == QMat3::identity() && self.node_map.iter().enumerate().all(|(i, &v)| i == v)
    }
}
