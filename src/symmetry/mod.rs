// Symmetry module: automorphisms of a periodic graph
// Finds the combinatorial symmetry group of a net, derives the affine
// operators it induces on the barycentric placement, and classifies the
// resulting point group.

// ======================== MODULE DECLARATIONS ========================
pub mod characteristic_bases;
pub mod finder;
pub mod operations;
pub mod partition;
pub mod point_group;

// Test modules
mod _tests_finder;

// ======================== SYMMETRY OPERATIONS ========================
pub use operations::SymOp; // struct - integer rotation + fractional translation

// ======================== GROUP DETECTION ========================
pub use finder::{
    symmetries,             // fn(&NetModel) -> Result<SymmetryGroup> - full automorphism group
    symmetries_with_budget, // fn(&NetModel, usize) -> Result<SymmetryGroup>
    SymmetryGroup,          // struct - group elements, affine operators and node orbits
};
pub use characteristic_bases::{
    characteristic_bases, // fn(&NetModel, &[QVec3]) -> Vec<EdgeBasis>
    EdgeBasis,            // type alias - ordered triple of directed edges spanning space
};

// ======================== POINT GROUP CLASSIFICATION ========================
pub use point_group::{
    classify_point_group, // fn(&[SymOp]) -> Result<PointGroup> - match operation counts
    operation_type,       // fn(&SymOp) -> Result<i32> - rotation type from det and trace
    point_group_of,       // fn(&[SymOp]) -> Result<PointGroup> - distinct rotation parts
    CrystalSystem,        // enum - the seven crystal systems
    PointGroup,           // struct - Hermann-Mauguin symbol, system, group order
};

// ======================== SUPPORT ========================
pub use partition::Partition; // struct - disjoint-set forest over arena indices
