use crate::session::SessionState;

/// Fetching or decoding a resource failed.
///
/// Payloads are plain strings so the error can be cloned out of a shared in-flight load.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to fetch {path}: {message}")]
    Fetch { path: String, message: String },

    #[error("Failed to fetch {path}: HTTP {status}")]
    Status { path: String, status: u16 },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}

impl LoadError {
    pub fn path(&self) -> &str {
        match self {
            LoadError::Fetch { path, .. }
            | LoadError::Status { path, .. }
            | LoadError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("No words found for level {tier}")]
    EmptyPool { tier: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Session already started")]
    AlreadyStarted,

    #[error("Session is not in progress (state: {state:?})")]
    NotInProgress { state: SessionState },
}
