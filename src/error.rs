use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum Bit2BinError {
    Usage(String),
    OpenInput(io::Error),
    CreateOutput(io::Error),
    IoError(io::Error),
}

impl From<io::Error> for Bit2BinError {
    fn from(error: io::Error) -> Self {
        Self::IoError(error)
    }
}

impl fmt::Display for Bit2BinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Bit2BinError::*;

        match self {
            Usage(msg) => write!(f, "{}", msg),
            OpenInput(e) => write!(f, "failed to open input: {}", e),
            CreateOutput(e) => write!(f, "failed to create output: {}", e),
            IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl Error for Bit2BinError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Bit2BinError::Usage(_) => None,
            Bit2BinError::OpenInput(e) | Bit2BinError::CreateOutput(e) | Bit2BinError::IoError(e) => {
                Some(e)
            }
        }
    }
}

pub type Bit2BinResult<T> = Result<T, Bit2BinError>;
