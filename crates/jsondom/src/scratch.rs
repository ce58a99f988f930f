//! Transient byte buffer shared by string decoding and stringification.
//!
//! A [`Scratch`] lives for a single parse or stringify call. While
//! decoding a string the parser pushes bytes above a saved mark and either
//! copies them out on the closing quote or rolls back to the mark on
//! error; the stringifier uses the same buffer as its output accumulator.

use alloc::vec::Vec;

/// A growable byte stack with an explicit top-of-stack.
///
/// Storage starts at 256 bytes and grows by half its size until a
/// reservation fits. Windows handed out by [`reserve`](Scratch::reserve)
/// and [`release`](Scratch::release) borrow the buffer, so a window can
/// never be held across a reallocation.
#[derive(Debug)]
pub(crate) struct Scratch {
    buf: Vec<u8>,
    top: usize,
}

impl Scratch {
    const INITIAL_CAPACITY: usize = 256;

    pub(crate) fn new() -> Self {
        Self {
            buf: Vec::new(),
            top: 0,
        }
    }

    /// Bytes currently in use.
    pub(crate) fn top(&self) -> usize {
        self.top
    }

    /// Hands out a writable window of `n` bytes at the current top and
    /// advances the top past it.
    pub(crate) fn reserve(&mut self, n: usize) -> &mut [u8] {
        self.grow_to(self.top + n);
        let start = self.top;
        self.top += n;
        &mut self.buf[start..self.top]
    }

    /// Shrinks the top by `n` bytes and returns the freed window.
    pub(crate) fn release(&mut self, n: usize) -> &[u8] {
        debug_assert!(n <= self.top);
        self.top -= n;
        &self.buf[self.top..self.top + n]
    }

    /// Rolls the top back to an earlier mark, discarding staged bytes.
    pub(crate) fn truncate(&mut self, mark: usize) {
        debug_assert!(mark <= self.top);
        self.top = mark;
    }

    pub(crate) fn push(&mut self, byte: u8) {
        self.reserve(1)[0] = byte;
    }

    pub(crate) fn extend(&mut self, bytes: &[u8]) {
        self.reserve(bytes.len()).copy_from_slice(bytes);
    }

    /// Consumes the buffer, returning every byte in use.
    pub(crate) fn into_bytes(mut self) -> Vec<u8> {
        self.buf.truncate(self.top);
        self.buf
    }

    fn grow_to(&mut self, needed: usize) {
        if needed <= self.buf.len() {
            return;
        }
        let mut capacity = self.buf.capacity().max(Self::INITIAL_CAPACITY);
        while capacity < needed {
            capacity += capacity / 2;
        }
        self.buf.reserve_exact(capacity - self.buf.len());
        self.buf.resize(capacity, 0);
    }

    #[cfg(test)]
    fn storage_len(&self) -> usize {
        self.buf.len()
    }
}
