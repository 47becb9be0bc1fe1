#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed XML at byte {position}: {source}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    #[error("malformed attribute at byte {position}: {message}")]
    Attribute { position: u64, message: String },

    #[error("invalid UTF-8 at byte {position}: {source}")]
    Encoding {
        position: u64,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("element <{name}> is never closed")]
    UnclosedElement { name: String },

    #[error("second root element <{name}> after the document element")]
    MultipleRoots { name: String },

    #[error("document has no root element")]
    EmptyDocument,
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
