//! Random-access reads over a forward-only byte stream.
//!
//! [`LazyReaderAt`] wraps any [`Read`](std::io::Read) and answers reads at
//! arbitrary offsets, in any order. It pulls from the source only as far as
//! the furthest byte requested and keeps everything it has pulled, so earlier
//! offsets can be read again without touching the source.
//!
//! ```rust
//! use lra::{LazyReaderAt, ReadAt};
//!
//! let stream: &[u8] = b"0123456789";
//! let mut reader = LazyReaderAt::new(stream);
//!
//! let mut buf = [0; 3];
//! assert_eq!(reader.read_at(&mut buf, 5).unwrap(), 3);
//! assert_eq!(&buf, b"567");
//!
//! // served from what is already buffered
//! assert_eq!(reader.read_at(&mut buf, 1).unwrap(), 3);
//! assert_eq!(&buf, b"123");
//!
//! // a short read reports how much was copied
//! let short = reader.read_at(&mut buf, 8).unwrap_err();
//! assert_eq!(short.copied, 2);
//! assert!(short.error.is_eof());
//! ```
//!
//! The buffer is never evicted. Memory use grows to the highest offset ever
//! requested, until [`LazyReaderAt::reset`] rebinds the reader.
#![deny(missing_docs)]

mod error;
mod lazy;
mod tracked;

pub use crate::error::{Error, Result, ShortRead};
pub use crate::lazy::LazyReaderAt;

/// Reading at an explicit offset
pub trait ReadAt {
    /// Copy bytes `[offset, offset + buf.len())` into `buf`.
    ///
    /// `Ok(n)` always has `n == buf.len()`. Anything less is a [`ShortRead`],
    /// whose `copied` bytes at the front of `buf` are valid.
    fn read_at(&mut self, buf: &mut [u8], offset: u64) -> Result<usize, ShortRead>;

    /// Fill `buf` completely, treating any short read as failure
    fn read_exact_at(&mut self, buf: &mut [u8], offset: u64) -> Result<()> {
        self.read_at(buf, offset)?;
        Ok(())
    }
}

impl ReadAt for [u8] {
    fn read_at(&mut self, buf: &mut [u8], offset: u64) -> Result<usize, ShortRead> {
        if buf.is_empty() {
            return Ok(0);
        }
        let start = match usize::try_from(offset) {
            Ok(start) if start < self.len() => start,
            Ok(_) => return Err(ShortRead::empty(Error::Eof)),
            Err(_) => {
                return Err(ShortRead::empty(Error::OffsetOverflow {
                    offset,
                    len: buf.len(),
                }))
            }
        };
        let available = &self[start..];
        let copied = buf.len().min(available.len());
        buf[..copied].copy_from_slice(&available[..copied]);
        if copied < buf.len() {
            return Err(ShortRead {
                copied,
                error: Error::UnexpectedEof,
            });
        }
        Ok(copied)
    }
}
