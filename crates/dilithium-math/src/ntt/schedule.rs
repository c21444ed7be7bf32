//! order in which the butterfly network walks blocks and twiddle factors
//!
//! Both transforms share a single twiddle index per call. The forward network
//! pre-increments it from 0, so it reads `ZETAS[1..N]` front to back. The
//! inverse network pre-decrements it from N, so it reads the same entries back
//! to front.

use crate::params::N;

/// Twiddle index shared by every stage of one transform call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZetaCursor {
    k: usize,
}

impl ZetaCursor {
    /// cursor for the forward network, before index 1
    pub const fn forward() -> Self {
        Self { k: 0 }
    }

    /// cursor for the inverse network, after index N - 1
    pub const fn inverse() -> Self {
        Self { k: N }
    }

    /// Moves to the next index and returns it.
    #[inline]
    pub fn advance(&mut self) -> usize {
        self.k += 1;
        self.k
    }

    /// Moves to the previous index and returns it.
    #[inline]
    pub fn retreat(&mut self) -> usize {
        self.k -= 1;
        self.k
    }

    pub fn position(&self) -> usize {
        self.k
    }
}

/// One block of a stage: the lower half `start..start + len` is paired with
/// the upper half `start + len..start + 2 * len` under twiddle `ZETAS[zeta]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub len: usize,
    pub start: usize,
    pub zeta: usize,
}

/// Blocks of the decimation-in-frequency network, `len` halving from N / 2.
#[derive(Debug, Clone)]
pub struct ForwardSchedule {
    len: usize,
    start: usize,
    cursor: ZetaCursor,
}

/// Blocks of the decimation-in-time network, `len` doubling up to N / 2.
#[derive(Debug, Clone)]
pub struct InverseSchedule {
    len: usize,
    start: usize,
    cursor: ZetaCursor,
}

pub fn forward_schedule() -> ForwardSchedule {
    ForwardSchedule {
        len: N / 2,
        start: 0,
        cursor: ZetaCursor::forward(),
    }
}

pub fn inverse_schedule() -> InverseSchedule {
    InverseSchedule {
        len: 1,
        start: 0,
        cursor: ZetaCursor::inverse(),
    }
}

impl Iterator for ForwardSchedule {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        if self.len == 0 {
            return None;
        }
        let block = Block {
            len: self.len,
            start: self.start,
            zeta: self.cursor.advance(),
        };
        self.start += 2 * self.len;
        if self.start >= N {
            self.start = 0;
            self.len >>= 1;
        }
        Some(block)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = N - 1 - self.cursor.position();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ForwardSchedule {}

impl Iterator for InverseSchedule {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        if self.len >= N {
            return None;
        }
        let block = Block {
            len: self.len,
            start: self.start,
            zeta: self.cursor.retreat(),
        };
        self.start += 2 * self.len;
        if self.start >= N {
            self.start = 0;
            self.len <<= 1;
        }
        Some(block)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cursor.position() - 1;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for InverseSchedule {}
