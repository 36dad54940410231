//! A complete collection of errors.

use std::error;
use std::fmt::{self, Display, Formatter};
use std::io;
use toml::de;

/// A convenient `Result` type whose error type is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The set of possible errors.
///
/// Editing and navigation operations are total over clamped inputs, so errors
/// only arise while loading external configuration.
#[derive(Debug)]
pub enum Error {
    /// An I/O error resulting from an operation on a file referenced by `path`.
    Io { path: String, cause: io::Error },

    /// An error occurred while parsing a configuration file referenced by `path`.
    Configuration { path: String, cause: String },

    /// The color `name` is not valid.
    InvalidColor { name: String },
}

impl error::Error for Error {}

impl Error {
    pub fn io(path: &str, cause: io::Error) -> Error {
        Error::Io {
            path: path.to_string(),
            cause,
        }
    }

    pub fn configuration(path: &str, e: &de::Error) -> Error {
        Error::Configuration {
            path: path.to_string(),
            cause: format!("{e}"),
        }
    }

    pub fn invalid_color(name: &str) -> Error {
        Error::InvalidColor {
            name: name.to_string(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { path, cause } => write!(f, "{path}: {cause}"),
            Error::Configuration { path, cause } => {
                write!(f, "{path}: configuration error: {cause}")
            }
            Error::InvalidColor { name } => {
                write!(f, "{name}: invalid color")
            }
        }
    }
}
