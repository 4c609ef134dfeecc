//! The receive side of a tcp connection with selective acknowledgment.
//!
//! A connection hands every accepted segment to a [`SackReceiver`] and asks it for the
//! acknowledgment number and SACK blocks of its next outgoing segment. There are some
//! simplifying assumptions that the owning connection must uphold:
//!
//! * Segments are already checked against the receive window. The receiver does not know the
//!   window and would happily track data far ahead of it.
//! * The payload is handled elsewhere. Only the sequence ranges are tracked here so any data that
//!   is acknowledged must also have been buffered by the connection.
//! * Timers, retransmission and option encoding are out of scope. The ranges are provided in the
//!   shape of the option contents, see [`SackRanges`].
//!
//! [`SackReceiver`]: struct.SackReceiver.html
//! [`SackRanges`]: ../../wire/type.SackRanges.html
mod sack;

pub use self::sack::SackReceiver;
