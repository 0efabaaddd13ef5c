use std::error;
use std::fmt;
use std::io;
use std::result;

/// Errors raised while writing a tree out or while validating its structure.
///
/// Structural operations on the tree never fail; the invariant variants are only produced by
/// `AvlTree::check`.
#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    /// An in-order walk produced a value that was not strictly greater than its predecessor.
    Unordered,
    /// A node's right height minus left height fell outside `[-1, 1]`.
    Unbalanced { balance: i32 },
    /// A node's cached height disagreed with the height of its subtree.
    StaleHeight { cached: usize, actual: usize },
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::IOError(error) => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::IOError(error) => write!(f, "{}", error),
            Error::Unordered => write!(f, "values are not in strictly ascending order"),
            Error::Unbalanced { balance } => {
                write!(f, "node has balance factor {} outside of [-1, 1]", balance)
            },
            Error::StaleHeight { cached, actual } => {
                write!(f, "node caches height {} but its subtree has height {}", cached, actual)
            },
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
