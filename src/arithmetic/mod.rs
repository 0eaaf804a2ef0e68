// Arithmetic module: exact rational linear algebra for net canonicalization
//
// Canonical forms and invariant keys must be bit-for-bit reproducible across
// arbitrary re-descriptions of the same net, so everything feeding into them
// is computed over arbitrary-precision rationals. Floating point appears only
// at the reporting boundary (see analysis::embedding).

// ======================== MODULE DECLARATIONS ========================
pub mod matrix;
pub mod rational;

// Test modules
mod _tests_matrix;

// ======================== RATIONAL 3-VECTORS & MATRICES ========================
pub use rational::{
    Rat,       // type alias - arbitrary-precision rational number
    QVec3,     // struct - rational row 3-vector with lexicographic ordering
    QMat3,     // struct - rational 3x3 matrix acting on row vectors
    rat,        // fn(i64) -> Rat - whole-number constructor
    rat_frac,   // fn(i64, i64) -> Rat - fraction constructor
    rat_to_f64, // fn(&Rat) -> f64 - lossy conversion for reporting
};

// ======================== DENSE RATIONAL MATRICES ========================
pub use matrix::{
    QMatrix,             // struct - dense rational matrix
    hermite_triangulate, // fn(&[QVec3]) -> Vec<QVec3> - lattice-preserving row triangulation
    rank_of_rows,        // fn(&[QVec3]) -> usize - rank of a set of row vectors
};
