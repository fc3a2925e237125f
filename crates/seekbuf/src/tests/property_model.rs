use alloc::{vec, vec::Vec};

use quickcheck::QuickCheck;

use super::arbitrary::{Capacities, Op};
use crate::SeekableBuffer;

/// Flat reference: every byte ever appended, the `(start, len)` of every
/// non-empty append, and the cursor's stream offset.
struct Model {
    data: Vec<u8>,
    chunks: Vec<(usize, usize)>,
    position: usize,
}

impl Model {
    /// The appended chunk that begins at stream offset `start`, if any.
    fn chunk_at(&self, start: usize) -> Option<(usize, usize)> {
        self.chunks
            .binary_search_by_key(&start, |&(chunk_start, _)| chunk_start)
            .ok()
            .map(|index| self.chunks[index])
    }
}

/// Eviction drops whole chunks, and the window may only be exceeded while
/// the cursor is still inside the oldest resident chunk.
fn eviction_is_exact(buffer: &SeekableBuffer, model: &Model, backward_capacity: usize) -> bool {
    let start = usize::try_from(buffer.start_position()).unwrap_or(usize::MAX);
    if start == model.data.len() {
        return buffer.backward_bytes() == 0 && buffer.forward_bytes() == 0;
    }
    let Some((chunk_start, chunk_len)) = model.chunk_at(start) else {
        return false;
    };
    if buffer.backward_bytes() <= backward_capacity {
        return true;
    }
    let chunk_end = chunk_start + chunk_len;
    model.position < chunk_end && *buffer.current_chunk() == model.data[model.position..chunk_end]
}

/// Replays `ops` against a fresh buffer and the flat model, checking every
/// answer and the counters after each call.
fn agrees_with_model(capacities: Capacities, ops: &[Op]) -> bool {
    let mut buffer = SeekableBuffer::new(capacities.backward, capacities.forward);
    let mut model = Model {
        data: Vec::new(),
        chunks: Vec::new(),
        position: 0,
    };
    let mut start_position = 0;

    for op in ops {
        match op {
            Op::Append(bytes) => {
                let expected = buffer.forward_bytes() + bytes.len() < capacities.forward;
                if buffer.append(bytes) != expected {
                    return false;
                }
                if !bytes.is_empty() {
                    model.chunks.push((model.data.len(), bytes.len()));
                }
                model.data.extend_from_slice(bytes);
            }
            Op::Read(n) => {
                let mut out = vec![0u8; *n];
                let got = buffer.read(&mut out);
                let expected = (*n).min(model.data.len() - model.position);
                if got != expected || out[..got] != model.data[model.position..model.position + got] {
                    return false;
                }
                model.position += got;
            }
            Op::Seek(k) => {
                let magnitude = k.unsigned_abs();
                let allowed = if *k >= 0 {
                    magnitude <= buffer.forward_bytes()
                } else {
                    magnitude <= buffer.backward_bytes()
                };
                if buffer.seek(*k) != allowed {
                    return false;
                }
                if allowed {
                    if *k >= 0 {
                        model.position += magnitude;
                    } else {
                        model.position -= magnitude;
                    }
                }
            }
            Op::Peek { len, forward_offset } => {
                let mut out = vec![0u8; *len];
                let got = buffer.peek(&mut out, *forward_offset);
                let from = (model.position + forward_offset).min(model.data.len());
                let expected = (*len).min(model.data.len() - from);
                if got != expected || out[..got] != model.data[from..from + got] {
                    return false;
                }
            }
        }

        let conserved = buffer.forward_bytes() + buffer.backward_bytes()
            == model.data.len() - buffer.start_position() as usize;
        if !conserved
            || !eviction_is_exact(&buffer, &model, capacities.backward)
            || buffer.position() != model.position as u64
            || buffer.forward_bytes() != model.data.len() - model.position
            || buffer.start_position() < start_position
        {
            return false;
        }
        start_position = buffer.start_position();
    }
    true
}

fn tests() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}

/// Property: any interleaving of appends, reads, seeks and peeks observes
/// exactly the bytes a flat model predicts, and the counters stay conserved
/// and bounded after every call.
#[test]
fn operations_agree_with_flat_model() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(capacities: Capacities, ops: Vec<Op>) -> bool {
        agrees_with_model(capacities, &ops)
    }

    QuickCheck::new()
        .tests(tests())
        .quickcheck(prop as fn(Capacities, Vec<Op>) -> bool);
}

/// Property: whatever the chunking on both sides, reading everything back
/// yields the concatenation of the appended payloads.
#[quickcheck_macros::quickcheck]
fn content_survives_any_chunking(payloads: Vec<Vec<u8>>, reads: Vec<u8>) -> bool {
    let expected: Vec<u8> = payloads.concat();
    let mut buffer = SeekableBuffer::new(0, 16);
    for payload in &payloads {
        buffer.append(payload);
    }

    let mut collected = Vec::with_capacity(expected.len());
    let mut sizes = reads.iter().map(|&size| usize::from(size) + 1).cycle();
    while buffer.forward_bytes() > 0 {
        let mut out = vec![0u8; sizes.next().unwrap_or(7)];
        let got = buffer.read(&mut out);
        collected.extend_from_slice(&out[..got]);
    }

    collected == expected && buffer.backward_bytes() <= payloads.iter().map(Vec::len).max().unwrap_or(0)
}
