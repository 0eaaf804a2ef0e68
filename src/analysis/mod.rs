// Analysis module: derived descriptors of a net
// Coordination sequences, topological density and the maximum-symmetry
// barycentric embedding.

// ======================== MODULE DECLARATIONS ========================
pub mod coordination;
pub mod embedding;


// ======================== COORDINATION SEQUENCES ========================
pub use coordination::{
    coordination_shells,  // fn(&NetModel, NodeId, usize) -> Vec<usize> - first shells
    topological_density,  // fn(&NetModel) -> f64 - TD10 averaged over nodes
    CoordinationSequence, // struct - endless shell-size iterator
};

// ======================== EMBEDDING ========================
pub use embedding::{
    barycentric_embedding, // fn(&NetModel, &SymmetryGroup) -> Result<Embedding>
    Embedding,             // struct - fractional positions + cartesian lattice
};
