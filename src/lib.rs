
//! Crystallographic net identification library.
//!
//! This library decides whether two descriptions of an infinite periodic
//! network (a crystallographic net) represent the same structure, up to
//! relabeling, choice of unit cell and choice of basis. Nets are reduced to
//! their minimal translational representative, canonicalized under their full
//! automorphism group and serialized into an invariant key that is equal for,
//! and only for, isomorphic nets. Keys drive batch deduplication and lookup
//! against reference archives of named structures.

pub mod analysis;
pub mod archive;
pub mod arithmetic;
pub mod canonical;
pub mod config;
pub mod errors;
pub mod io;
pub mod net;
pub mod pipeline;
pub mod reduction;
pub mod symmetry;

pub use errors::CrystnetError;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, CrystnetError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version of the invariant key generation process. Archive entries carry
/// this tag so that keys produced by incompatible canonicalization algorithms
/// are never compared against each other.
pub const KEY_VERSION: &str = "1.0";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
