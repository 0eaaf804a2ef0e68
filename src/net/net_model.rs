use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::errors::CrystnetError;
use crate::net::lattice::TranslationLattice;
use crate::Result;

/// Stable integer handle for a node within one net.
pub type NodeId = usize;

/// Sign of the first nonzero component of an integer shift vector.
pub fn sign_of_shift(s: &Vector3<i32>) -> i32 {
    for i in 0..3 {
        if s[i] < 0 {
            return -1;
        } else if s[i] > 0 {
            return 1;
        }
    }
    0
}

/// An undirected edge of the quotient graph, stored in normalized form:
/// `source <= target`, and for loops the shift's first nonzero component is
/// negative. The shift vector counts how many unit cells the edge crosses
/// along each lattice direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub shift: Vector3<i32>,
}

impl Edge {
    /// Builds the normalized representative of an edge given in either
    /// direction.
    pub fn normalized(source: NodeId, target: NodeId, shift: Vector3<i32>) -> Edge {
        if source > target || (source == target && sign_of_shift(&shift) > 0) {
            Edge {
                source: target,
                target: source,
                shift: -shift,
            }
        } else {
            Edge {
                source,
                target,
                shift,
            }
        }
    }

    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }
}

/// A directed view onto a stored edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirEdge {
    pub index: usize,
    pub reversed: bool,
}

impl DirEdge {
    pub fn forward(index: usize) -> DirEdge {
        DirEdge {
            index,
            reversed: false,
        }
    }

    pub fn reverse(self) -> DirEdge {
        DirEdge {
            index: self.index,
            reversed: !self.reversed,
        }
    }

    /// Dense id in `0..2m`, used to index partition arrays.
    pub fn id(self) -> usize {
        2 * self.index + self.reversed as usize
    }

    pub fn from_id(id: usize) -> DirEdge {
        DirEdge {
            index: id / 2,
            reversed: id % 2 == 1,
        }
    }
}

/// In-memory representation of a periodic graph: a finite quotient graph
/// whose edges carry integer translation vectors, together with the
/// translation lattice.
///
/// Nodes and edges are referenced by stable arena indices; the structure is
/// append-only (nets are small and short-lived, one per batch item).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetModel {
    node_count: usize,
    edges: Vec<Edge>,
    /// Per node: all directed edges leaving it. Loops appear once in each
    /// direction.
    adjacency: Vec<Vec<DirEdge>>,
    lattice: TranslationLattice,
}

impl NetModel {
    pub fn new() -> Self {
        NetModel {
            node_count: 0,
            edges: Vec::new(),
            adjacency: Vec::new(),
            lattice: TranslationLattice::standard(),
        }
    }

    pub fn with_lattice(lattice: TranslationLattice) -> Self {
        NetModel {
            node_count: 0,
            edges: Vec::new(),
            adjacency: Vec::new(),
            lattice,
        }
    }

    pub fn add_node(&mut self) -> NodeId {
        let id = self.node_count;
        self.node_count += 1;
        self.adjacency.push(Vec::new());
        id
    }

    /// Adds a new edge. Trivial loops (same node, zero shift) and duplicate
    /// edges are rejected: either indicates a malformed net description.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, shift: Vector3<i32>) -> Result<usize> {
        if source >= self.node_count || target >= self.node_count {
            return Err(CrystnetError::Internal(format!(
                "edge references missing node ({} or {})",
                source, target
            )));
        }
        if source == target && shift == Vector3::zeros() {
            return Err(CrystnetError::Degenerate(
                "trivial loop (zero-shift self edge)".to_string(),
            ));
        }
        let edge = Edge::normalized(source, target, shift);
        if self.find_edge(edge.source, edge.target, edge.shift).is_some() {
            return Err(CrystnetError::Degenerate(format!(
                "duplicate edge {} -> {} {:?}",
                source, target, shift
            )));
        }
        let index = self.edges.len();
        self.adjacency[edge.source].push(DirEdge::forward(index));
        self.adjacency[edge.target].push(DirEdge::forward(index).reverse());
        self.edges.push(edge);
        Ok(index)
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        0..self.node_count
    }

    pub fn degree(&self, v: NodeId) -> usize {
        self.adjacency[v].len()
    }

    /// All directed edges leaving `v`, loops once per direction.
    pub fn incidences(&self, v: NodeId) -> &[DirEdge] {
        &self.adjacency[v]
    }

    /// All directed edges of the graph: each undirected edge once in each
    /// direction.
    pub fn directed_edges(&self) -> impl Iterator<Item = DirEdge> + '_ {
        (0..self.edges.len()).flat_map(|i| {
            [DirEdge::forward(i), DirEdge::forward(i).reverse()].into_iter()
        })
    }

    pub fn source(&self, de: DirEdge) -> NodeId {
        let e = &self.edges[de.index];
        if de.reversed {
            e.target
        } else {
            e.source
        }
    }

    pub fn target(&self, de: DirEdge) -> NodeId {
        let e = &self.edges[de.index];
        if de.reversed {
            e.source
        } else {
            e.target
        }
    }

    pub fn shift(&self, de: DirEdge) -> Vector3<i32> {
        let e = &self.edges[de.index];
        if de.reversed {
            -e.shift
        } else {
            e.shift
        }
    }

    /// Looks up the directed edge with the given endpoints and shift, if any.
    pub fn find_edge(&self, source: NodeId, target: NodeId, shift: Vector3<i32>) -> Option<DirEdge> {
        self.adjacency
            .get(source)?
            .iter()
            .copied()
            .find(|&de| self.target(de) == target && self.shift(de) == shift)
    }

    pub fn lattice(&self) -> &TranslationLattice {
        &self.lattice
    }
}

impl Default for NetModel {
    fn default() -> Self {
        NetModel::new()
    }
}
