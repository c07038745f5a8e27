use std::error::Error;
use std::fmt;
use std::num::ParseIntError;

/// Error raised when the input intervals violate one of the invariants
/// of the rescaling pipeline
///
/// All errors are fatal. The message names the failed check and, where
/// possible, the table, column or transcript group that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxError {
    message: String,
}

impl TxError {
    pub fn new<S: ToString>(message: S) -> TxError {
        TxError {
            message: message.to_string(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Error for TxError {}

impl fmt::Display for TxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<&str> for TxError {
    fn from(message: &str) -> Self {
        TxError::new(message)
    }
}

impl From<String> for TxError {
    fn from(message: String) -> Self {
        TxError { message }
    }
}

impl From<ParseIntError> for TxError {
    fn from(err: ParseIntError) -> Self {
        TxError::new(format!("unable to parse integer: {}", err))
    }
}

/// Error when reading or writing tabular data
#[derive(Debug)]
pub struct ReadWriteError {
    message: String,
}

impl ReadWriteError {
    pub fn new<E: Error>(err: E) -> ReadWriteError {
        ReadWriteError {
            message: err.to_string(),
        }
    }
}

impl Error for ReadWriteError {}

impl fmt::Display for ReadWriteError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<std::io::Error> for ReadWriteError {
    fn from(err: std::io::Error) -> Self {
        ReadWriteError::new(err)
    }
}

impl From<TxError> for ReadWriteError {
    fn from(err: TxError) -> Self {
        ReadWriteError {
            message: err.message,
        }
    }
}

impl From<&str> for ReadWriteError {
    fn from(message: &str) -> Self {
        ReadWriteError {
            message: message.to_string(),
        }
    }
}

impl From<String> for ReadWriteError {
    fn from(message: String) -> Self {
        ReadWriteError { message }
    }
}
