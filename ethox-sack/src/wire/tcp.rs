use core::{cmp, fmt, ops};
use core::convert::TryFrom;

/// The number of SACK blocks that fit into a tcp option next to a timestamp option.
///
/// The option space of a tcp header is 40 bytes, each block takes 8 bytes and the option itself
/// takes 2. Together with the 10 byte timestamp option this leaves room for three blocks.
pub const MAX_SACK_BLOCKS: usize = 3;

/// The SACK blocks of a single outgoing segment, as `(left edge, right edge)` pairs.
///
/// Unused trailing blocks are `None`. The edges are raw sequence numbers, converting them to
/// network byte order and framing the option is up to the encoder.
pub type SackRanges = [Option<(u32, u32)>; MAX_SACK_BLOCKS];

/// A TCP sequence number.
///
/// A sequence number is a monotonically advancing integer modulo 2<sup>32</sup>.
/// Sequence numbers do not have a discontiguity when compared pairwise across a signed overflow.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Hash)]
pub struct SeqNumber(pub i32);

impl SeqNumber {
    /// The signed distance from `origin` to `self`.
    ///
    /// Positive if `self` lies ahead of `origin`. Values that look negative in the underlying
    /// representation are simply those beyond the wrap-around point.
    pub fn offset_from(self, origin: SeqNumber) -> i32 {
        self.0.wrapping_sub(origin.0)
    }

    /// The one of both numbers that lies later in sequence order.
    pub fn later(self, other: SeqNumber) -> SeqNumber {
        if other > self { other } else { self }
    }

    /// The one of both numbers that lies earlier in sequence order.
    pub fn earlier(self, other: SeqNumber) -> SeqNumber {
        if other < self { other } else { self }
    }
}

impl fmt::Display for SeqNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&u32::from(*self), f)
    }
}

impl From<u32> for SeqNumber {
    fn from(raw: u32) -> Self {
        SeqNumber(raw as i32)
    }
}

impl From<SeqNumber> for u32 {
    fn from(seq: SeqNumber) -> u32 {
        seq.0 as u32
    }
}

/// Convert a byte count into a distance in sequence space.
///
/// Only distances below half the number space have a direction.
fn span(len: usize) -> i32 {
    match i32::try_from(len) {
        Ok(span) => span,
        Err(_) => panic!("sequence span {} exceeds half the sequence space", len),
    }
}

impl ops::Add<usize> for SeqNumber {
    type Output = SeqNumber;

    fn add(mut self, len: usize) -> SeqNumber {
        self += len;
        self
    }
}

impl ops::Sub<usize> for SeqNumber {
    type Output = SeqNumber;

    fn sub(mut self, len: usize) -> SeqNumber {
        self -= len;
        self
    }
}

impl ops::AddAssign<usize> for SeqNumber {
    fn add_assign(&mut self, len: usize) {
        self.0 = self.0.wrapping_add(span(len));
    }
}

impl ops::SubAssign<usize> for SeqNumber {
    fn sub_assign(&mut self, len: usize) {
        self.0 = self.0.wrapping_sub(span(len));
    }
}

/// The number of bytes from `origin` up to `self`.
///
/// Panics if `origin` lies ahead of `self`.
impl ops::Sub for SeqNumber {
    type Output = usize;

    fn sub(self, origin: SeqNumber) -> usize {
        let offset = self.offset_from(origin);
        assert!(offset >= 0, "sequence number {} lies before {}", self, origin);
        offset as usize
    }
}

impl cmp::PartialOrd for SeqNumber {
    fn partial_cmp(&self, other: &SeqNumber) -> Option<cmp::Ordering> {
        Some(self.offset_from(*other).cmp(&0))
    }
}
