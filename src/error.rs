use std::fmt;
use std::path::PathBuf;

/// Custom error type for caffemodel-parser
#[derive(Debug)]
pub enum Error {
    /// I/O error while reading an already opened file
    Io(std::io::Error),
    /// Input model could not be opened
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Input model exceeds the decoder's total size limit
    TooLarge { path: PathBuf, len: u64 },
    /// Protobuf decoding error
    Decode(prost::DecodeError),
    /// Missing or invalid command-line arguments
    Argument(String),
    /// Log file could not be created
    LogOpen {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Weight output file could not be created
    OutputOpen {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    /// Process exit status for a failure of this kind
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Argument(_) | Error::LogOpen { .. } => 1,
            Error::Io(_)
            | Error::Open { .. }
            | Error::TooLarge { .. }
            | Error::Decode(_)
            | Error::OutputOpen { .. } => 2,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Open { path, source } => {
                write!(f, "Failed to open file `{}': {}", path.display(), source)
            }
            Error::TooLarge { path, len } => write!(
                f,
                "File `{}' is {} bytes, larger than the {} byte message limit",
                path.display(),
                len,
                crate::model::MAX_MESSAGE_BYTES
            ),
            Error::Decode(e) => write!(f, "Protobuf decode error: {}", e),
            Error::Argument(msg) => write!(f, "Invalid arguments: {}", msg),
            Error::LogOpen { path, .. } => {
                write!(f, "Failed to open log `{}' for write!!!", path.display())
            }
            Error::OutputOpen { path, .. } => {
                write!(f, "Failed to open `{}' for write!!!", path.display())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Open { source, .. }
            | Error::LogOpen { source, .. }
            | Error::OutputOpen { source, .. } => Some(source),
            Error::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<prost::DecodeError> for Error {
    fn from(err: prost::DecodeError) -> Self {
        Error::Decode(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
