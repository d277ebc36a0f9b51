use std::path::PathBuf;

use read_fonts::ReadError;
use thiserror::Error;

/// Everything that can go wrong while building or reading a glyph table
#[derive(Debug, Error)]
pub enum Error {
    /// The font could not be opened or its glyphs could not be enumerated
    #[error("could not read {what} from font")]
    Resource {
        what: &'static str,
        #[source]
        source: ReadError,
    },

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("glyph table is not valid JSON")]
    Json(#[from] serde_json::Error),

    #[error("glyph table is not a JSON object")]
    NotAnObject,

    #[error("invalid code point key {0:?}")]
    InvalidKey(String),

    #[error("glyph name for key {0:?} is not a string")]
    InvalidName(String),
}

impl Error {
    pub(crate) fn resource(what: &'static str) -> impl FnOnce(ReadError) -> Error {
        move |source| Error::Resource { what, source }
    }

    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Error {
        let path = path.into();
        move |source| Error::Io { path, source }
    }
}
