//! Adapters for the receive path of a protocol layer.
//!
//! The tracker itself only knows about sequence ranges. A layer decides which segments are in
//! order, which are not and where the cumulative acknowledgment currently is.
pub mod tcp;
