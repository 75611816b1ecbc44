#![allow(dead_code)]

use std::{
    cell::Cell,
    io::{self, Read},
    rc::Rc,
};

/// An endless, seeded pseudo-random byte stream.
pub struct RandomSource {
    rng: fastrand::Rng,
}

impl RandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Read for RandomSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        for b in buf.iter_mut() {
            *b = self.rng.u8(..);
        }
        Ok(buf.len())
    }
}

/// The first `len` bytes `RandomSource::new(seed)` would produce.
pub fn random_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut out = vec![0; len];
    RandomSource::new(seed).read_exact(&mut out).unwrap();
    out
}

/// Shared view of how much a source has been asked for.
#[derive(Clone, Default)]
pub struct Stats {
    calls: Rc<Cell<usize>>,
    pulled: Rc<Cell<usize>>,
}

impl Stats {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
    pub fn pulled(&self) -> usize {
        self.pulled.get()
    }
}

/// Wraps a source, recording calls and delivered bytes into `Stats`.
pub struct Counting<R> {
    inner: R,
    stats: Stats,
}

impl<R: Read> Counting<R> {
    pub fn new(inner: R) -> (Self, Stats) {
        let stats = Stats::default();
        (
            Self {
                inner,
                stats: stats.clone(),
            },
            stats,
        )
    }
}

impl<R: Read> Read for Counting<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.stats.calls.set(self.stats.calls.get() + 1);
        let n = self.inner.read(buf)?;
        self.stats.pulled.set(self.stats.pulled.get() + n);
        Ok(n)
    }
}

/// Hands out at most `chunk` bytes per call, like a socket would.
pub struct Chunked<R> {
    inner: R,
    chunk: usize,
}

impl<R: Read> Chunked<R> {
    pub fn new(inner: R, chunk: usize) -> Self {
        Self { inner, chunk }
    }
}

impl<R: Read> Read for Chunked<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(self.chunk);
        self.inner.read(&mut buf[..n])
    }
}

/// Delivers `data`, failing once with `kind` after `fail_at` bytes.
pub struct Failing {
    data: Vec<u8>,
    pos: usize,
    fail_at: usize,
    kind: io::ErrorKind,
    failed: bool,
}

impl Failing {
    pub fn new(data: Vec<u8>, fail_at: usize, kind: io::ErrorKind) -> Self {
        Self {
            data,
            pos: 0,
            fail_at,
            kind,
            failed: false,
        }
    }
}

impl Read for Failing {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos == self.fail_at && !self.failed {
            self.failed = true;
            return Err(io::Error::new(self.kind, "injected failure"));
        }
        let end = if self.failed {
            self.data.len()
        } else {
            self.fail_at
        };
        let n = buf.len().min(end - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}
