// Archive module: reference archives and run-level deduplication
// Archives are plain-text files of checksummed key records; the engine
// tracks the keys seen within a single run.

// ======================== MODULE DECLARATIONS ========================
pub mod archive_file;
pub mod dedup;

// Test modules
mod _tests_archive;

// ======================== ARCHIVE FILES ========================
pub use archive_file::{
    Archive,      // struct - entries indexed by invariant key
    ArchiveEntry, // struct - key + key version + name, md5-checksummed
};

// ======================== DEDUPLICATION ========================
pub use dedup::{
    Classification,      // enum - New (first occurrence) or Duplicate
    DeduplicationEngine, // struct - first-occurrence-wins key registry
};
