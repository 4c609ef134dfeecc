use crate::wire::{SackRanges, TcpSeqNumber};

use super::{Block, Order, REPORT_LIMIT};

/// Tracks the received blocks beyond the cumulative acknowledgment.
///
/// The stored blocks are pairwise disjoint and not adjacent, any blocks that would touch are kept
/// as a single merged block instead. They are ordered by recency: the block created or extended by
/// the latest successful call to `recv_out_of_order` is reported first.
///
/// ## Usage
///
/// The RFC 2018 example where the first of eight segments is lost:
///
/// ```
/// use ethox_sack::storage::sack::{Block, Fixed, List};
/// use ethox_sack::wire::TcpSeqNumber;
///
/// let mut list: List<Fixed<9>> = List::default();
/// let mut seq = TcpSeqNumber::from(5500);
///
/// for _ in 0..7 {
///     let res = list.recv_out_of_order(seq, 500);
///     assert_eq!(res.bytes, 500);
///     seq += 500;
/// }
///
/// assert_eq!(list.report().as_slice(), &[Block::from_raw(5500, 9000)]);
///
/// // The lost segment was retransmitted, the acknowledgment jumps over everything.
/// let res = list.new_valid_ack(TcpSeqNumber::from(5500));
/// assert_eq!(res.bytes, 3500);
/// assert!(res.entries.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct List<S> {
    storage: S,
}

/// The outcome of updating a `List`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AckResult {
    /// The blocks to report after the update, most recent first.
    pub entries: Entries,
    /// The number of bytes affected by the update.
    ///
    /// For `recv_out_of_order` these are the newly covered sequence numbers, zero if the segment
    /// was a pure duplicate or could not be stored. For `new_valid_ack` it is the size of all
    /// retired blocks.
    pub bytes: usize,
}

/// At most `REPORT_LIMIT` blocks, in reporting order.
///
/// Unused trailing blocks are kept empty so that two instances with the same reported blocks
/// compare equal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Entries {
    blocks: [Block; REPORT_LIMIT],
    len: usize,
}

impl<S: Order> List<S> {
    /// Create a list tracking blocks in some storage.
    ///
    /// The storage should be empty. Its blocks are otherwise assumed to uphold the invariants of
    /// the list.
    pub fn new(storage: S) -> Self {
        List { storage }
    }

    /// Record a segment received outside the expected in-order position.
    ///
    /// The segment is merged with every stored block it overlaps or touches. The merged block is
    /// reported first afterwards. If it touches no block it becomes a new block, unless the
    /// storage is full in which case it is dropped without any modification.
    ///
    /// # Panics
    ///
    /// This method panics if `len` is zero or exceeds half of the sequence space.
    pub fn recv_out_of_order(&mut self, seq: TcpSeqNumber, len: usize) -> AckResult {
        assert!(len > 0, "Out of order segment must not be empty");
        let segment = Block::with_len(seq, len);

        let mut merged = segment;
        let mut covered = 0;
        let mut absorbed = 0;
        // The merged block grows with every absorbed block, search again until nothing touches.
        while let Some(key) = self.find(|block| block.overlaps_or_touches(&merged)) {
            if let Some(block) = self.take(key) {
                merged = merged.union(&block);
                covered += block.size();
                absorbed += 1;
            }
        }

        let bytes = if absorbed > 0 {
            net_trace!("sack: {} merged with {} blocks into {}", segment, absorbed, merged);
            match self.storage.insert(merged) {
                Some(key) => self.storage.promote(key),
                // At least one slot was freed by absorbing.
                None => unreachable!("No room for merged block"),
            }
            // Absorbed blocks are disjoint and contained in the merged block.
            merged.size() - covered
        } else {
            match self.storage.insert(segment) {
                Some(key) => {
                    net_trace!("sack: new block {}", segment);
                    self.storage.promote(key);
                    len
                },
                None => {
                    net_debug!("sack: dropped {}, all {} blocks in use", segment, self.storage.len());
                    0
                },
            }
        };

        AckResult {
            entries: self.report(),
            bytes,
        }
    }

    /// Retire blocks after the cumulative acknowledgment advanced to `ack`.
    ///
    /// Removes every block starting exactly at `ack`, since it now continues the in-order stream.
    /// Blocks starting anywhere else are left unchanged, this does not trim a block that only
    /// overlaps `ack`. The order of the remaining blocks is preserved.
    pub fn new_valid_ack(&mut self, ack: TcpSeqNumber) -> AckResult {
        let mut bytes = 0;
        while let Some(key) = self.find(|block| block.start == ack) {
            if let Some(block) = self.take(key) {
                net_trace!("sack: ack {} retires {}", ack, block);
                bytes += block.size();
            }
        }

        AckResult {
            entries: self.report(),
            bytes,
        }
    }

    /// The blocks to report, most recent first.
    pub fn report(&self) -> Entries {
        let limit = self.storage.report_limit().min(REPORT_LIMIT);
        let mut entries = Entries::default();
        self.iter()
            .take(limit)
            .for_each(|block| entries.push(block));
        entries
    }

    /// Iterate over all stored blocks, most recent first.
    ///
    /// Unlike `report`, this is not limited to the reported blocks.
    pub fn iter(&self) -> impl Iterator<Item=Block> + '_ {
        self.storage.recency()
            .iter()
            .filter_map(move |&key| self.storage.get(key).copied())
    }

    /// The number of stored blocks.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Check if no block is stored.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Check if a segment touching no block would be dropped.
    pub fn is_full(&self) -> bool {
        self.storage.is_full()
    }

    /// The maximum number of stored blocks.
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Remove all blocks, for example when the connection is reset.
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// Get a reference to the underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Find the most recent block matching a predicate.
    fn find(&self, mut pred: impl FnMut(&Block) -> bool) -> Option<S::Key> {
        self.storage.recency()
            .iter()
            .copied()
            .find(|&key| self.storage.get(key).map_or(false, |block| pred(block)))
    }

    /// Remove a block from both storage and order.
    fn take(&mut self, key: S::Key) -> Option<Block> {
        self.storage.forget(key);
        self.storage.remove(key)
    }
}

impl Entries {
    /// The number of blocks.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if there is no block to report.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The blocks as a slice.
    pub fn as_slice(&self) -> &[Block] {
        &self.blocks[..self.len]
    }

    /// Iterate over the blocks in reporting order.
    pub fn iter(&self) -> impl Iterator<Item=&Block> + '_ {
        self.as_slice().iter()
    }

    /// The blocks as edge pairs for the tcp SACK option.
    pub fn sack_ranges(&self) -> SackRanges {
        let mut ranges: SackRanges = [None; REPORT_LIMIT];
        ranges.iter_mut()
            .zip(self.iter())
            .for_each(|(range, &block)| *range = Some(block.into()));
        ranges
    }

    fn push(&mut self, block: Block) {
        self.blocks[self.len] = block;
        self.len += 1;
    }
}

impl PartialEq<[Block; REPORT_LIMIT]> for Entries {
    /// Compare against blocks padded with empty ones.
    fn eq(&self, other: &[Block; REPORT_LIMIT]) -> bool {
        self.blocks == *other
    }
}
