use std::io::{self, Read};

/// A sequential source that remembers how many bytes it has handed out.
pub(crate) struct Tracked<R> {
    inner: R,
    pos: u64,
}

impl<R: Read> Tracked<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, pos: 0 }
    }
    /// Bytes consumed from `inner` so far
    pub fn position(&self) -> u64 {
        self.pos
    }
    #[cfg(test)]
    pub fn get_ref(&self) -> &R {
        &self.inner
    }
}

impl<R: Read> Read for Tracked<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n_read = self.inner.read(buf)?;
        self.pos += n_read as u64;
        Ok(n_read)
    }
}
