use std::io;
use std::path::PathBuf;

/// Fatal conditions reported by the ghost binary.
///
/// A rejected letter is not an error: it is reported as
/// [`TurnOutcome::InvalidPrefix`](crate::game_state::TurnOutcome::InvalidPrefix)
/// and the player simply tries again.
#[derive(Debug, thiserror::Error)]
pub enum GhostError {
    #[error("{0}")]
    Usage(String),

    #[error("Invalid argument '{0}'. N must be an integer >= 2.")]
    InvalidPlayerCount(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Invalid minimum word length {min}: must be between 1 and {max} (exclusive).")]
    InvalidMinLength { min: usize, max: usize },

    #[error("Word fragment exceeded the maximum length of {max} letters.")]
    FragmentOverflow { max: usize },

    #[error("Could not load {}: {source}", .path.display())]
    DictionaryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Out of memory while building the dictionary.")]
    AllocationFailure,
}

impl GhostError {
    /// Process exit status for this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => 1,
            Self::InvalidPlayerCount(_)
            | Self::InvalidArgument(_)
            | Self::InvalidMinLength { .. }
            | Self::FragmentOverflow { .. } => 2,
            Self::DictionaryUnreadable { .. } | Self::AllocationFailure => 3,
        }
    }
}
