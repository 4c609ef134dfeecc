//! Receive side bookkeeping of sequence ranges.
//!
//! The data structures here only track *which* parts of the sequence space have been seen. None
//! of them buffer payload bytes.
pub mod sack;
