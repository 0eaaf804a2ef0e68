use std::collections::hash_map::Entry;
use std::collections::HashMap;

use log::info;

use crate::canonical::InvariantKey;

/// Outcome of presenting a structure to the deduplication engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// First occurrence of this key; the structure was recorded under the
    /// given name.
    New { assigned: String },
    /// The key was seen before, under the given name.
    Duplicate { of: String },
}

/// Tracks the invariant keys seen in one run and flags repeats.
///
/// The first structure presenting a key owns it; everything that follows
/// with the same key is reported as a duplicate of that structure. The
/// outcome therefore depends on input order, by design of the run report.
#[derive(Debug, Default)]
pub struct DeduplicationEngine {
    seen: HashMap<InvariantKey, String>,
    unnamed: usize,
}

impl DeduplicationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classify(&mut self, key: InvariantKey, name: Option<&str>) -> Classification {
        match self.seen.entry(key) {
            Entry::Occupied(slot) => {
                info!("structure already seen as {}", slot.get());
                Classification::Duplicate {
                    of: slot.get().clone(),
                }
            }
            Entry::Vacant(slot) => {
                let assigned = match name {
                    Some(name) => name.to_string(),
                    None => {
                        self.unnamed += 1;
                        format!("nameless-{}", self.unnamed)
                    }
                };
                slot.insert(assigned.clone());
                Classification::New { assigned }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
