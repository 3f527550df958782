//! Error types for bicdir.
//!
//! The library reports failures through [`BicDirError`] via `thiserror`;
//! the binary wraps this with `anyhow` at the top level.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BicDirError>;

/// Top-level error type for all directory-extraction operations.
#[derive(Debug, Error)]
pub enum BicDirError {
    /// Byte acquisition from a locator failed. Carries the underlying
    /// transport error unchanged.
    #[error("transport error for {locator}: {source}")]
    Transport {
        locator: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The fetched bytes are not a readable ZIP container.
    #[error("invalid ZIP archive: {reason}")]
    ArchiveFormat { reason: &'static str },

    /// An archive member is not well-formed XML.
    #[error("malformed XML in archive member: {0}")]
    Xml(#[from] roxmltree::Error),

    /// A directory entry lacks a required child element.
    #[error("element '{element}' is missing from 'BICDirectoryEntry' element (BIC {bic})")]
    MissingElement { element: &'static str, bic: String },

    /// A directory entry lacks a required attribute.
    #[error("attribute '{attribute}' is missing from 'BICDirectoryEntry' element")]
    MissingAttribute { attribute: &'static str },

    /// A parse worker could not be joined.
    #[error("parse task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl BicDirError {
    /// Wrap a transport failure with the locator it occurred on.
    pub fn transport(
        locator: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Transport {
            locator: locator.into(),
            source: source.into(),
        }
    }
}

// Raw I/O inside this crate only happens on in-memory cursors over archive
// structures; a short read there means the container is truncated.
impl From<std::io::Error> for BicDirError {
    fn from(_: std::io::Error) -> Self {
        Self::ArchiveFormat {
            reason: "truncated archive structure",
        }
    }
}
