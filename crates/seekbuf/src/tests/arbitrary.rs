use alloc::{boxed::Box, vec::Vec};

use quickcheck::{Arbitrary, Gen};

/// One call against a [`SeekableBuffer`](crate::SeekableBuffer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Op {
    Append(Vec<u8>),
    Read(usize),
    Seek(isize),
    Peek { len: usize, forward_offset: usize },
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match usize::arbitrary(g) % 7 {
            0 | 1 => {
                let len = usize::arbitrary(g) % 48;
                Op::Append((0..len).map(|_| u8::arbitrary(g)).collect())
            }
            2 | 3 => Op::Read(usize::arbitrary(g) % 64),
            4 | 5 => Op::Seek(isize::arbitrary(g) % 96),
            _ => Op::Peek {
                len: usize::arbitrary(g) % 32,
                forward_offset: usize::arbitrary(g) % 64,
            },
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Op::Append(bytes) => Box::new(bytes.shrink().map(Op::Append)),
            Op::Read(n) => Box::new(n.shrink().map(Op::Read)),
            Op::Seek(k) => Box::new(k.shrink().map(Op::Seek)),
            Op::Peek { .. } => Box::new(core::iter::empty()),
        }
    }
}

/// Small capacities so that eviction and backpressure happen often.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Capacities {
    pub backward: usize,
    pub forward: usize,
}

impl Arbitrary for Capacities {
    fn arbitrary(g: &mut Gen) -> Self {
        Self {
            backward: usize::arbitrary(g) % 128,
            forward: usize::arbitrary(g) % 128,
        }
    }
}
