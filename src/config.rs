// Constants

// Tolerances
pub const PLACEMENT_TOLERANCE: f64 = 1e-6; // For barycenter consistency checks
pub const BASIS_TOLERANCE: f64 = 1e-10; // For geometric basis comparisons

// Number of coordination shells reported per vertex orbit
pub const DEFAULT_SHELL_COUNT: usize = 10;

// Upper bound on the number of candidate bases tried plus group elements
// generated during the automorphism search. Exceeding it aborts the search
// for that net with a recoverable error.
pub const SYMMETRY_SEARCH_BUDGET: usize = 200_000;
