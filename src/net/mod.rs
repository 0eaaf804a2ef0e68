// Net module: the in-memory representation of a periodic graph
// Provides the quotient-graph arena, the translation lattice, connectivity of
// the infinite graph and the exact barycentric placement.

// ======================== MODULE DECLARATIONS ========================
pub mod barycentric;
pub mod connectivity;
pub mod lattice;
pub mod net_model;

// Test modules
mod _tests_barycentric;
mod _tests_lattice;
mod _tests_net_model;

// ======================== PERIODIC GRAPH REPRESENTATION ========================
pub use net_model::{
    DirEdge,       // struct - directed view onto a stored edge (index + direction)
    Edge,          // struct - normalized undirected edge with integer shift vector
    NetModel,      // struct - finite quotient graph with translation lattice
    NodeId,        // type alias - arena index of a node
    sign_of_shift, // fn(&Vector3<i32>) -> i32 - sign of first nonzero component
};

// ======================== TRANSLATION LATTICE ========================
pub use lattice::TranslationLattice; // struct - rank-3 geometric basis with metric tensor

// ======================== CONNECTIVITY ========================
pub use connectivity::is_connected; // fn(&NetModel) -> bool - connectivity of the infinite graph

// ======================== BARYCENTRIC PLACEMENT ========================
pub use barycentric::{
    barycentric_placement, // fn(&NetModel) -> Result<Vec<QVec3>> - exact equilibrium positions
    difference_vector,     // fn(&NetModel, &[QVec3], DirEdge) -> QVec3 - edge vector in placement
    is_locally_stable,     // fn(&NetModel, &[QVec3]) -> bool - neighbor positions distinct
    is_stable,             // fn(&NetModel, &[QVec3]) -> bool - all positions distinct mod 1
};
