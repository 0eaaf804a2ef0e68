// Canonical module: canonical form and invariant key
// Renumbers and rebases a net into a representation shared by its whole
// isomorphism class, and flattens it into a comparable integer key.

// ======================== MODULE DECLARATIONS ========================
pub mod canonical_form;
pub mod invariant_key;


// ======================== CANONICAL FORM ========================
pub use canonical_form::{
    canonical_form, // fn(&NetModel) -> Result<CanonicalForm> - minimal traversal script
    invariant_key,  // fn(&NetModel) -> Result<InvariantKey> - key only
    CanonicalForm,  // struct - canonical graph plus key
};

// ======================== INVARIANT KEY ========================
pub use invariant_key::InvariantKey; // struct - flat integer key, ordered lexicographically
