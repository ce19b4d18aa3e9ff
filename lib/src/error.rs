//! All kinds of errors in this crate.

use displaydoc::Display;
use thiserror::Error;

/// The broad class of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An entity could not be constructed from the given values.
    Validation,
    /// A template does not fit on the board at the given offset.
    Range,
    /// Reading or writing a stored game or template failed.
    Storage,
}

/// All kinds of errors in this crate.
#[derive(Debug, Display, Error)]
pub enum Error {
    /// {what} {value} is out of range, it must be between {min} and {max}.
    DimensionOutOfRange {
        what: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
    /// Cell matrix is {found_height}x{found_width}, expected {height}x{width}.
    ShapeMismatch {
        height: usize,
        width: usize,
        found_height: usize,
        found_width: usize,
    },
    /// Invalid cell {0:?}.
    InvalidCell(char),
    /// Template name cannot be empty.
    EmptyName,
    /// Template name is {0} characters long, at most 50 are allowed.
    NameTooLong(usize),
    /// Template name contains an invalid character {0:?}.
    InvalidNameChar(char),
    /// A {width}x{height} template at ({x}, {y}) does not fit on a {board_width}x{board_height} board.
    TemplateOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        board_width: usize,
        board_height: usize,
    },
    /// Template {0:?} not found.
    TemplateNotFound(String),
    /// The file of template {expected:?} holds template {found:?}.
    TemplateNameMismatch { expected: String, found: String },
    /// Unknown file format {0:?}.
    UnknownFormat(String),
    /// I/O error: {0}
    Io(#[from] std::io::Error),
    #[cfg(feature = "serde")]
    /// JSON error: {0}
    Json(#[from] serde_json::Error),
    #[cfg(feature = "serde")]
    /// YAML error: {0}
    Yaml(#[from] serde_yaml::Error),
    #[cfg(feature = "serde")]
    /// TOML error: {0}
    TomlDe(#[from] toml::de::Error),
    #[cfg(feature = "serde")]
    /// TOML error: {0}
    TomlSer(#[from] toml::ser::Error),
}

impl Error {
    /// The class this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::DimensionOutOfRange { .. }
            | Error::ShapeMismatch { .. }
            | Error::InvalidCell(_)
            | Error::EmptyName
            | Error::NameTooLong(_)
            | Error::InvalidNameChar(_) => ErrorKind::Validation,
            Error::TemplateOutOfBounds { .. } => ErrorKind::Range,
            _ => ErrorKind::Storage,
        }
    }
}
