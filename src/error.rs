// SPDX-License-Identifier: MPL-2.0
use crate::application::port::CodecError;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub enum Error {
    /// A named input could not be opened for reading. Fatal for the whole run.
    FileNotFound { path: PathBuf, reason: String },

    /// The codec rejected the content of a correctly named file.
    Decode { path: PathBuf, reason: String },

    /// No input yielded a displayable image.
    EmptyCollection,

    /// Invalid command line.
    Usage(String),

    Config(String),
    Io(String),

    /// The windowing toolkit failed to start or crashed.
    Window(String),
}

impl Error {
    pub fn file_not_found(path: &Path, err: &std::io::Error) -> Self {
        Error::FileNotFound {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }
    }

    pub fn decode(path: &Path, err: &CodecError) -> Self {
        Error::Decode {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileNotFound { path, reason } => {
                write!(f, "Could not read file: {} ({})", path.display(), reason)
            }
            Error::Decode { path, reason } => {
                write!(f, "Could not decode file: {} ({})", path.display(), reason)
            }
            Error::EmptyCollection => write!(f, "No displayable image among the given files"),
            Error::Usage(e) => write!(f, "Usage Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Window(e) => write!(f, "Window Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<iced::Error> for Error {
    fn from(err: iced::Error) -> Self {
        Error::Window(err.to_string())
    }
}

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::Usage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
