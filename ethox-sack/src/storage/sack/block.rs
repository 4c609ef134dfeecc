use core::fmt;

use crate::wire::{Error, Result, TcpSeqNumber};

/// A contiguous range of received sequence numbers.
///
/// Contains the sequence numbers from `start` up to but excluding `end`. The range is defined in
/// the wrapping sequence space, `end` always lies ahead of (or at) `start` in sequence order, so a
/// block may cross the wrap-around point of the underlying representation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Block {
    /// The first sequence number contained, the left edge.
    pub start: TcpSeqNumber,
    /// The first sequence number after the range, the right edge.
    pub end: TcpSeqNumber,
}

impl Block {
    /// Create a block from its edges.
    ///
    /// # Panics
    ///
    /// This method panics if `end` lies before `start`.
    pub fn new(start: TcpSeqNumber, end: TcpSeqNumber) -> Self {
        assert!(start <= end, "Block end must not lie before its start");
        Block { start, end }
    }

    /// Create a block from edges of unknown origin.
    ///
    /// Returns `Error::Malformed` if `end` lies before `start`.
    pub fn new_checked(start: TcpSeqNumber, end: TcpSeqNumber) -> Result<Self> {
        if end < start {
            return Err(Error::Malformed);
        }

        Ok(Block { start, end })
    }

    /// Create a block from raw edges.
    ///
    /// # Panics
    ///
    /// This method panics if `end` lies before `start`.
    pub fn from_raw(start: u32, end: u32) -> Self {
        Block::new(start.into(), end.into())
    }

    /// The block starting at `start` that contains `len` sequence numbers.
    pub fn with_len(start: TcpSeqNumber, len: usize) -> Self {
        Block { start, end: start + len }
    }

    /// An empty block at the origin of the sequence space.
    pub fn empty() -> Self {
        Block::default()
    }

    /// The number of contained sequence numbers.
    pub fn size(&self) -> usize {
        self.end - self.start
    }

    /// Check if the block contains no sequence number.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Check if a sequence number lies within the block.
    pub fn contains(&self, seq: TcpSeqNumber) -> bool {
        let offset = seq.offset_from(self.start);
        offset >= 0 && (offset as usize) < self.size()
    }

    /// Check if the two blocks share a sequence number or are directly adjacent.
    ///
    /// Exactly those blocks whose union is again contiguous.
    pub fn overlaps_or_touches(&self, other: &Block) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// The smallest block containing both blocks.
    pub fn union(&self, other: &Block) -> Block {
        Block {
            start: self.start.earlier(other.start),
            end: self.end.later(other.end),
        }
    }
}

impl From<Block> for (u32, u32) {
    fn from(block: Block) -> (u32, u32) {
        (block.start.into(), block.end.into())
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
