use thiserror::Error;

/// Error taxonomy for net processing.
///
/// `ArchiveLoad` and `Io` are fatal for the batch; the remaining variants are
/// recoverable per net: the offending net is reported and skipped while
/// processing continues. An archive lookup miss is not an error at all and is
/// represented as `Option::None` at the lookup site.
#[derive(Debug, Error)]
pub enum CrystnetError {
    /// The underlying graph of the net is not connected. Keys are only
    /// meaningful for connected nets.
    #[error("net is not connected")]
    Disconnected,

    /// The net is degenerate: distinct nodes collide in the barycentric
    /// placement, or a translation of finite order was found during
    /// reduction.
    #[error("degenerate net: {0}")]
    Degenerate(String),

    /// The automorphism search exceeded its configured budget.
    #[error("symmetry search budget of {budget} exceeded")]
    SymmetryOverflow { budget: usize },

    /// The barycentric equilibrium system is singular beyond the expected
    /// one-dimensional null space.
    #[error("singular barycentric placement system")]
    SingularEmbedding,

    /// A net description could not be parsed. Reported with 1-based indices
    /// and the offending line.
    #[error("parse error in net {net_index}, line {line_number}: {message} ({line:?})")]
    Parse {
        net_index: usize,
        line_number: usize,
        line: String,
        message: String,
    },

    /// A reference archive could not be loaded. Fatal for the batch.
    #[error("cannot load archive {path}: {message}")]
    ArchiveLoad { path: String, message: String },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// An internal consistency check failed. These indicate a bug, not bad
    /// input, but still only poison the net that triggered them.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CrystnetError {
    /// Per-net errors are reported and skipped; anything else aborts the
    /// batch.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CrystnetError::Disconnected
                | CrystnetError::Degenerate(_)
                | CrystnetError::SymmetryOverflow { .. }
                | CrystnetError::SingularEmbedding
                | CrystnetError::Parse { .. }
                | CrystnetError::Internal(_)
        )
    }
}
