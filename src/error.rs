//! error module

use std::io;

use thiserror::Error;

/// crate-level error
#[derive(Debug, Error)]
pub enum Error {
    /// The stream ended before the first requested byte
    #[error("end of stream")]
    Eof,
    /// The stream ended partway through the requested range
    #[error("unexpected end of stream")]
    UnexpectedEof,
    /// Error reported by the underlying source, kept as is
    #[error("source io error: {0}")]
    Io(#[from] io::Error),
    /// Fallback for a short read with no recorded cause.
    ///
    /// `LazyReaderAt` only stops short after a pull error, so it does not
    /// produce this today.
    #[error("could not satisfy read at offset {offset}")]
    Unsatisfied {
        /// requested start offset
        offset: u64,
    },
    /// `offset + len` does not fit in the addressable range
    #[error("read of {len} bytes at offset {offset} overflows")]
    OffsetOverflow {
        /// requested start offset
        offset: u64,
        /// requested length
        len: usize,
    },
}

impl Error {
    /// Whether this error means the stream ran dry.
    pub fn is_eof(&self) -> bool {
        matches!(self, Error::Eof | Error::UnexpectedEof)
    }
}

impl From<Error> for io::Error {
    fn from(e: Error) -> Self {
        match e {
            Error::Io(inner) => inner,
            Error::Eof | Error::UnexpectedEof => io::Error::new(io::ErrorKind::UnexpectedEof, e),
            Error::OffsetOverflow { .. } => io::Error::new(io::ErrorKind::InvalidInput, e),
            Error::Unsatisfied { .. } => io::Error::new(io::ErrorKind::Other, e),
        }
    }
}

/// A read that copied fewer bytes than requested.
///
/// `copied` bytes at the front of the destination are valid.
#[derive(Debug, Error)]
#[error("short read of {copied} bytes: {error}")]
pub struct ShortRead {
    /// bytes copied into the destination
    pub copied: usize,
    /// why the read stopped short
    #[source]
    pub error: Error,
}

impl ShortRead {
    pub(crate) fn empty(error: Error) -> Self {
        Self { copied: 0, error }
    }
}

impl From<ShortRead> for Error {
    fn from(short: ShortRead) -> Self {
        short.error
    }
}

/// crate-level Result type
pub type Result<T, E = Error> = core::result::Result<T, E>;
