// Reduction module: collapsing a periodic graph to its minimal image
// A net may describe its translational unit with a cell larger than
// necessary; the routines here detect the extra translations and rewrite the
// net over the smallest cell.

// ======================== MODULE DECLARATIONS ========================
pub mod minimal_image;
pub mod morphism;

mod _tests_morphism;

// ======================== GRAPH MORPHISMS ========================
pub use morphism::Morphism; // struct - node/edge bijection with unimodular linear part

// ======================== MINIMAL IMAGE ========================
pub use minimal_image::{
    minimal_image,                      // fn(&NetModel) -> Result<NetModel> - quotient by extra translations
    translational_equivalence_classes,  // fn(&NetModel, &[QVec3]) -> Result<Vec<Vec<NodeId>>>
};
