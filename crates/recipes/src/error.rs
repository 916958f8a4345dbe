use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a recipe catalog.
///
/// A missing descriptor file is not an error (it loads as an empty catalog),
/// so everything here means the file exists but cannot be used.
#[derive(Debug, Error)]
pub enum Error {
    /// Descriptor exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path of the descriptor
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Descriptor is not valid JSON or does not match the recipe schema
    #[error("invalid recipe catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two recipes share the same id
    #[error("duplicate recipe id {id}: '{first}' and '{second}'")]
    DuplicateId {
        /// The repeated id
        id: u32,
        /// Name of the first recipe using it
        first: String,
        /// Name of the second recipe using it
        second: String,
    },

    /// A required field is present but empty
    #[error("recipe {id} has an empty '{field}' field")]
    EmptyField {
        /// Recipe id
        id: u32,
        /// Name of the empty field
        field: &'static str,
    },
}

impl Error {
    /// Returns true if the descriptor content is at fault (as opposed to the
    /// filesystem)
    pub fn is_invalid_content(&self) -> bool {
        !matches!(self, Error::Io { .. })
    }
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, Error>;
