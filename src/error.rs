use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the contact book core.
///
/// Every variant except `Io` and `Serialize` is a recoverable outcome: the
/// operation that produced it left the book untouched.
#[derive(Debug, Error)]
pub enum BookError {
    #[error("A contact named \"{0}\" already exists.")]
    DuplicateName(String),

    #[error("Name cannot be empty.")]
    EmptyName,

    #[error("No contact named \"{0}\".")]
    NotFound(String),

    #[error("record is missing or has an invalid \"{field}\" field")]
    MalformedRecord { field: &'static str },

    #[error("could not load {}: {reason}", .path.display())]
    MalformedStorage { path: PathBuf, reason: String },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not encode contacts: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl BookError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for outcomes a caller reports and moves past.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::DuplicateName(_)
                | Self::EmptyName
                | Self::NotFound(_)
                | Self::MalformedRecord { .. }
                | Self::MalformedStorage { .. }
        )
    }
}

pub type Result<T, E = BookError> = std::result::Result<T, E>;
