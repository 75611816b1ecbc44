use std::io::Read;

use crate::{error::ShortRead, tracked::Tracked, Error, ReadAt, Result};

/// Random-access reads over a forward-only source.
///
/// Every byte pulled from the source is kept, so the buffer always holds the
/// stream prefix `[0, len)` and grows without bound until [`reset`](Self::reset).
/// Bytes are pulled lazily, and only as far as the furthest range requested.
pub struct LazyReaderAt<R> {
    source: Tracked<R>,
    /// Append-only: bytes below `buf.len()` are never rewritten
    buf: Vec<u8>,
    /// Set once the source returned `Ok(0)`
    exhausted: bool,
}

impl<R: Read> LazyReaderAt<R> {
    /// Wrap `source`. Nothing is read until the first `read_at`.
    pub fn new(source: R) -> Self {
        Self::with_capacity(source, 0)
    }

    /// Like [`new`](Self::new), reserving room for `capacity` bytes up front
    pub fn with_capacity(source: R, capacity: usize) -> Self {
        Self {
            source: Tracked::new(source),
            buf: Vec::with_capacity(capacity),
            exhausted: false,
        }
    }

    /// Rebind to a new source and forget everything buffered.
    ///
    /// The old source is dropped as is. The allocation is kept.
    pub fn reset(&mut self, source: R) {
        log::debug!("reset after buffering {} bytes", self.buf.len());
        self.source = Tracked::new(source);
        self.buf.clear();
        self.exhausted = false;
    }

    /// Pull from the source until the buffer holds `needed` bytes.
    ///
    /// Whatever was obtained is kept, even on error. The buffer only grows by
    /// what the source delivers, so a far offset on a short stream stays cheap.
    fn fill_to(&mut self, needed: usize) -> Result<()> {
        if self.exhausted {
            return Err(Error::Eof);
        }
        let start = self.buf.len();
        let missing = needed - start;
        let result = (&mut self.source)
            .take(missing as u64)
            .read_to_end(&mut self.buf);
        let obtained = self.buf.len() - start;
        log::trace!("pulled {obtained} of {missing} bytes at {start}");
        debug_assert_eq!(self.source.position(), self.buf.len() as u64);
        match result {
            Ok(_) if obtained == missing => Ok(()),
            Ok(_) => {
                log::debug!("source exhausted at {}", self.buf.len());
                self.exhausted = true;
                Err(Error::Eof)
            }
            Err(e) => Err(Error::Io(e)),
        }
    }
}

/// Build the short read for `copied` bytes, naming the end of stream by
/// whether anything of the range was there at all.
fn short_read(copied: usize, pull_error: Option<Error>, offset: u64) -> ShortRead {
    let error = match pull_error {
        Some(e) if e.is_eof() && copied > 0 => Error::UnexpectedEof,
        Some(e) if e.is_eof() => Error::Eof,
        Some(e) => e,
        None => Error::Unsatisfied { offset },
    };
    ShortRead { copied, error }
}

impl<R: Read> ReadAt for LazyReaderAt<R> {
    fn read_at(&mut self, dst: &mut [u8], offset: u64) -> Result<usize, ShortRead> {
        let want = dst.len();
        if want == 0 {
            return Ok(0);
        }
        let overflow = || ShortRead::empty(Error::OffsetOverflow { offset, len: want });
        let start = usize::try_from(offset).map_err(|_| overflow())?;
        let needed = start.checked_add(want).ok_or_else(overflow)?;

        let mut pull_error = None;
        if needed > self.buf.len() {
            pull_error = self.fill_to(needed).err();
        }
        if self.buf.len() <= start {
            return Err(short_read(0, pull_error, offset));
        }
        let available = &self.buf[start..];
        let copied = want.min(available.len());
        dst[..copied].copy_from_slice(&available[..copied]);
        if copied < want {
            return Err(short_read(copied, pull_error, offset));
        }
        Ok(copied)
    }
}
