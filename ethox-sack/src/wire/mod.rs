/*! Sequence space arithmetic and the shape of tcp SACK option data.

This module does not parse or emit tcp options. It provides the [`TcpSeqNumber`] on which all
ranges of the tracker are defined, and [`SackRanges`], the representation of up to three SACK
blocks that an option encoder consumes as raw edge pairs.

Sequence numbers live in a space of 2<sup>32</sup> values that wraps around. Two sequence numbers
are only ordered relative to each other, by the sign of their difference, so that comparison has no
discontinuity at the wrap-around point:

```
use ethox_sack::wire::TcpSeqNumber;

let before_wrap = TcpSeqNumber::from(u32::max_value() - 10);
let after_wrap = before_wrap + 20;
assert!(before_wrap < after_wrap);
assert_eq!(after_wrap - before_wrap, 20);
```

[`TcpSeqNumber`]: struct.TcpSeqNumber.html
[`SackRanges`]: type.SackRanges.html
*/
mod error;
mod tcp;

pub use self::error::{Error, Result};

pub use self::tcp::{
    SeqNumber as TcpSeqNumber,
    SackRanges,
    MAX_SACK_BLOCKS,
};
