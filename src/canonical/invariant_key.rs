use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CrystnetError;

/// The invariant key of a periodic net: a flat integer sequence that is
/// identical for isomorphic nets and distinct for non-isomorphic ones.
///
/// The layout is the dimension followed by one (source, target, shift)
/// record per edge of the canonical form, with node numbers starting at 1.
/// Keys compare lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InvariantKey(Vec<i32>);

impl InvariantKey {
    pub fn new(values: Vec<i32>) -> Self {
        Self(values)
    }

    pub fn dimension(&self) -> i32 {
        self.0.first().copied().unwrap_or(0)
    }

    pub fn values(&self) -> &[i32] {
        &self.0
    }

    /// Number of edge records encoded in the key.
    pub fn edge_count(&self) -> usize {
        self.0.len().saturating_sub(1) / 5
    }
}

impl fmt::Display for InvariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", x)?;
        }
        Ok(())
    }
}

impl FromStr for InvariantKey {
    type Err = CrystnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(|tok| {
                tok.parse::<i32>().map_err(|_| {
                    CrystnetError::Internal(format!("malformed key component {:?}", tok))
                })
            })
            .collect::<Result<Vec<i32>, _>>()?;
        if values.is_empty() {
            return Err(CrystnetError::Internal("empty invariant key".to_string()));
        }
        Ok(Self(values))
    }
}
