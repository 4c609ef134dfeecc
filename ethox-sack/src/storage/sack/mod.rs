//! Selective acknowledgement of out-of-order data (RFC 2018).
//!
//! A receiver that holds data beyond a gap reports the ranges it holds as SACK blocks, letting the
//! sender retransmit only the missing ranges. The [`List`] keeps those ranges:
//!
//! * Every segment accepted outside the expected in-order position is handed to
//!   [`List::recv_out_of_order`]. It is merged with all stored blocks it overlaps or touches, so
//!   that the stored blocks never overlap or touch each other.
//! * Every advance of the cumulative acknowledgment is handed to [`List::new_valid_ack`], which
//!   retires the block starting exactly at the new edge.
//!
//! Both return the blocks to report, most recently touched first, and a byte count.
//!
//! [`List`]: struct.List.html
//! [`List::recv_out_of_order`]: struct.List.html#method.recv_out_of_order
//! [`List::new_valid_ack`]: struct.List.html#method.new_valid_ack
//!
//! ## Storage and ordering
//!
//! The list is generic over its backing storage, separated into two capabilities: a [`Store`] of
//! a bounded number of blocks addressed by keys and an [`Order`] deciding which of them are
//! reported first. [`Fixed`] implements both with inline arrays. A store never grows, a segment
//! that can not be merged into any stored block is dropped when the store is full. Stored blocks
//! are never evicted in favor of new ones, older gaps are preserved instead. Merging a segment
//! that bridges two blocks frees one slot again.
//!
//! [`Store`]: trait.Store.html
//! [`Order`]: trait.Order.html
//! [`Fixed`]: struct.Fixed.html
mod block;
mod fixed;
mod list;


pub use self::block::Block;
pub use self::fixed::Fixed;
pub use self::list::{AckResult, Entries, List};

/// The maximum number of blocks reported for one segment.
///
/// This is the number of SACK blocks that fit into the option space next to a timestamp option.
pub const REPORT_LIMIT: usize = crate::wire::MAX_SACK_BLOCKS;

/// Bounded storage of blocks.
///
/// A store has no notion of sequence semantics. Inserting into a full store fails without
/// modifying it, keys of removed blocks are detected as invalid.
pub trait Store {
    /// The handle to a stored block.
    type Key: Copy + Eq;

    /// The maximum number of blocks.
    fn capacity(&self) -> usize;

    /// The number of stored blocks.
    fn len(&self) -> usize;

    /// Check if no block is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if another block can not be inserted.
    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    /// Store a block in a free slot.
    ///
    /// Returns `None` if the store is full. Other slots are not modified.
    fn insert(&mut self, block: Block) -> Option<Self::Key>;

    /// Free the slot of a block, returning it.
    ///
    /// Returns `None` if the key does not refer to a stored block.
    fn remove(&mut self, key: Self::Key) -> Option<Block>;

    /// Retrieve a stored block.
    fn get(&self, key: Self::Key) -> Option<&Block>;
}

/// The reporting order over the blocks of a store.
///
/// Keeps the keys of all stored blocks ordered by recency, the block most recently created or
/// extended first.
pub trait Order: Store {
    /// All keys, most recent first.
    fn recency(&self) -> &[Self::Key];

    /// Move a key to the front, inserting it if it was not ordered before.
    fn promote(&mut self, key: Self::Key);

    /// Remove a key from the order.
    fn forget(&mut self, key: Self::Key);

    /// Remove all blocks from both the store and the order.
    fn clear(&mut self) {
        while let Some(&key) = self.recency().first() {
            self.forget(key);
            self.remove(key);
        }
    }

    /// How many of the most recent blocks are reported.
    ///
    /// Values above `REPORT_LIMIT` are treated as `REPORT_LIMIT`.
    fn report_limit(&self) -> usize {
        REPORT_LIMIT
    }
}
