//! Receiver side selective acknowledgement for user-space tcp and unikernels.
//!
//! ## Table of contents
//!
//! 1. [Overview](#overview)
//! 2. [Design](#design)
//! 3. [Sequence numbers](wire/index.html)
//! 4. [The tracker](storage/sack/index.html)
//!    1. [Blocks](storage/sack/struct.Block.html)
//!    1. [Storage and ordering policies](storage/sack/index.html#storage-and-ordering)
//! 5. [Receiving segments](layer/tcp/index.html)
//! 6. Internals
//!    1. [The managed module](managed/index.html)
//!
//! ## Overview
//!
//! A tcp receiver that gets segments out of sequence order must remember the non-contiguous byte
//! ranges it already holds. It reports them to the sender as SACK blocks (RFC 2018) so that the
//! sender only retransmits the missing ranges, and it retires them once the cumulative
//! acknowledgment reaches them. The [`List`] tracks those ranges, the [`SackReceiver`] shows how a
//! receive path drives it.
//!
//! ```
//! use ethox_sack::storage::sack::{Block, Fixed, List};
//! use ethox_sack::wire::TcpSeqNumber;
//!
//! let mut list: List<Fixed<9>> = List::default();
//!
//! let res = list.recv_out_of_order(TcpSeqNumber::from(6000), 500);
//! assert_eq!(res.bytes, 500);
//! let res = list.recv_out_of_order(TcpSeqNumber::from(7000), 500);
//! assert_eq!(res.entries.as_slice(), &[
//!     Block::from_raw(7000, 7500),
//!     Block::from_raw(6000, 6500),
//! ]);
//!
//! // The hole in between arrives, both blocks are bridged into one.
//! let res = list.recv_out_of_order(TcpSeqNumber::from(6500), 500);
//! assert_eq!(res.entries.as_slice(), &[Block::from_raw(6000, 7500)]);
//! ```
//!
//! [`List`]: storage/sack/struct.List.html
//! [`SackReceiver`]: layer/tcp/struct.SackReceiver.html
//!
//! ## Design
//!
//! Nothing within this crate *ever* dynamically allocates memory. The number of tracked ranges is
//! a compile time constant of the store and all memory is part of the tracker itself, so it can be
//! embedded in a connection struct living in preallocated memory. A segment that would need a new
//! range while the store is full is not an error but simply not tracked. The sender will
//! retransmit it eventually, which is the expected outcome under sustained reordering beyond the
//! tracked window.
#![warn(missing_docs)]
#![warn(unreachable_pub)]

// tests should be able to use `std`
#![cfg_attr(all(
    not(feature = "std"),
    not(test)),
no_std)]

#[macro_use] mod macros;
pub mod layer;
pub mod managed;
pub mod storage;
pub mod wire;
