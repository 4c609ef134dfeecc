use crate::storage::sack::{List, Order};
use crate::wire::{SackRanges, TcpSeqNumber};

/// Tracks the cumulative acknowledgment and out-of-order data of one connection.
///
/// In contrast to a receiver that only remembers the highest in-order sequence number, data beyond
/// a gap is not forgotten. It is reported in SACK blocks and once the gap is filled the
/// acknowledgment jumps over all of it.
///
/// ## Usage
///
/// The RFC 2018 example where every other segment is dropped:
///
/// ```
/// use ethox_sack::layer::tcp::SackReceiver;
/// use ethox_sack::storage::sack::{Fixed, List};
/// use ethox_sack::wire::TcpSeqNumber;
///
/// let isn = TcpSeqNumber::from(5500);
/// let mut recv = SackReceiver::new(List::<Fixed<4>>::default(), isn);
///
/// recv.receive(TcpSeqNumber::from(6000), 500);
/// recv.receive(TcpSeqNumber::from(7000), 500);
/// assert_eq!(recv.ack(), isn);
/// assert_eq!(recv.sack_ranges(), [Some((7000, 7500)), Some((6000, 6500)), None]);
///
/// // The first missing segment arrives, acknowledging everything up to the next gap.
/// assert_eq!(recv.receive(isn, 500), 1000);
/// assert_eq!(recv.ack(), TcpSeqNumber::from(6500));
/// assert_eq!(recv.sack_ranges(), [Some((7000, 7500)), None, None]);
/// ```
#[derive(Clone, Debug)]
pub struct SackReceiver<S> {
    list: List<S>,
    /// The next expected in-order sequence number.
    ack: TcpSeqNumber,
}

impl<S: Order> SackReceiver<S> {
    /// Create a receiver expecting in-order data at `ack`.
    ///
    /// Usually `ack` is the sequence number after the remote's SYN.
    pub fn new(list: List<S>, ack: TcpSeqNumber) -> Self {
        SackReceiver { list, ack }
    }

    /// Record a received segment.
    ///
    /// Data before the acknowledgment is ignored. Returns the number of bytes by which the
    /// acknowledgment advanced, which includes previously stored out-of-order data continuing the
    /// segment.
    pub fn receive(&mut self, begin: TcpSeqNumber, len: usize) -> usize {
        if len == 0 {
            return 0;
        }

        let end = begin + len;
        if end <= self.ack {
            // A retransmission of acknowledged data.
            return 0;
        }

        let begin = begin.later(self.ack);
        let len = end - begin;

        if begin != self.ack {
            self.list.recv_out_of_order(begin, len);
            return 0;
        }

        // Stored blocks never start before the acknowledgment. So the segment is either merged
        // with the blocks it continues into one starting at the acknowledgment or it touches none.
        self.list.recv_out_of_order(begin, len);
        let retired = self.list.new_valid_ack(self.ack);

        // Nothing retired if the list was full and the segment touched no block.
        let advance = if retired.bytes == 0 { len } else { retired.bytes };
        self.ack += advance;
        net_trace!("sack: ack advanced by {} to {}", advance, self.ack);
        advance
    }

    /// The acknowledgment number, the next expected in-order sequence number.
    pub fn ack(&self) -> TcpSeqNumber {
        self.ack
    }

    /// The SACK blocks for the next outgoing segment.
    pub fn sack_ranges(&self) -> SackRanges {
        self.list.report().sack_ranges()
    }

    /// The tracked out-of-order blocks.
    pub fn list(&self) -> &List<S> {
        &self.list
    }

    /// Forget all out-of-order data and expect in-order data at `ack`.
    pub fn reset(&mut self, ack: TcpSeqNumber) {
        self.list.clear();
        self.ack = ack;
    }
}
