use alloc::{boxed::Box, collections::VecDeque};
use core::cmp::Ordering;

use crate::{BufferOptions, SeekError, chunk::Chunk};

/// Where the read cursor stands inside the chunk store.
///
/// The cursor is kept normalized: when `index` names a resident chunk,
/// `offset` is strictly inside it. `index == chunks.len()` with `offset == 0`
/// means everything resident has been consumed; a chunk appended in that
/// state is picked up at its first byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Cursor {
    index: usize,
    offset: usize,
}

/// A bounded staging buffer with a single read cursor that can move in both
/// directions.
///
/// Bytes are appended in chunks at the tail. Reading moves bytes from the
/// *forward* side of the cursor to the *backward* side, where they stay
/// available for [`seek`](Self::seek) with a negative offset until they fall
/// out of the backward capacity.
///
/// The buffer does no I/O and no locking. Every mutating method takes
/// `&mut self`, so sharing one between threads requires an external lock.
#[derive(Debug, Clone)]
pub struct SeekableBuffer {
    chunks: VecDeque<Chunk>,
    cursor: Cursor,
    forward_bytes: usize,
    backward_bytes: usize,
    position: u64,
    options: BufferOptions,
}

impl SeekableBuffer {
    /// Create an empty buffer with the given capacities, both in bytes.
    #[must_use]
    pub fn new(backward_capacity: usize, forward_capacity: usize) -> Self {
        Self::with_options(BufferOptions {
            backward_capacity,
            forward_capacity,
        })
    }

    /// Create an empty buffer from [`BufferOptions`].
    #[must_use]
    pub fn with_options(options: BufferOptions) -> Self {
        Self {
            chunks: VecDeque::new(),
            cursor: Cursor::default(),
            forward_bytes: 0,
            backward_bytes: 0,
            position: 0,
            options,
        }
    }

    /// The capacities this buffer was built with.
    #[must_use]
    #[inline]
    pub fn options(&self) -> BufferOptions {
        self.options
    }

    /// Copy `data` into a new chunk at the tail.
    ///
    /// Returns `true` while the unread byte count stays below the forward
    /// capacity. The return value is advisory: the data is always kept, and
    /// a `false` only asks the producer to pause until the consumer catches
    /// up.
    pub fn append(&mut self, data: &[u8]) -> bool {
        self.append_owned(data)
    }

    /// Like [`append`](Self::append), but takes ownership of the bytes
    /// instead of copying them.
    ///
    /// An empty payload stores nothing.
    pub fn append_owned(&mut self, data: impl Into<Box<[u8]>>) -> bool {
        let data = data.into();
        if !data.is_empty() {
            let had_room = self.has_forward_room();
            self.forward_bytes += data.len();
            self.chunks.push_back(Chunk::new(data));
            if had_room && !self.has_forward_room() {
                log::trace!(
                    "forward capacity reached: {} of {} bytes buffered ahead",
                    self.forward_bytes,
                    self.options.forward_capacity
                );
            }
        }

        self.debug_check();
        self.has_forward_room()
    }

    /// Copy up to `out.len()` bytes from the cursor into `out` and move the
    /// cursor past them.
    ///
    /// Returns the number of bytes copied, which is smaller than `out.len()`
    /// (possibly zero) when fewer bytes are buffered ahead. Consumed chunks
    /// that fall outside the backward capacity are evicted before returning.
    pub fn read(&mut self, out: &mut [u8]) -> usize {
        self.advance(out.len(), Some(out))
    }

    /// Copy up to `out.len()` bytes starting `forward_offset` bytes past the
    /// cursor, without moving the cursor.
    ///
    /// Returns the number of bytes copied; zero when `forward_offset` is at
    /// or past the end of the buffered data.
    #[must_use]
    pub fn peek(&self, out: &mut [u8], forward_offset: usize) -> usize {
        let mut skip = forward_offset;
        let mut offset = self.cursor.offset;
        let mut copied = 0;
        for chunk in self.chunks.range(self.cursor.index..) {
            if copied == out.len() {
                break;
            }

            let available = &chunk[offset..];
            offset = 0;
            if skip >= available.len() {
                skip -= available.len();
                continue;
            }

            let available = &available[skip..];
            skip = 0;
            let n = available.len().min(out.len() - copied);
            out[copied..copied + n].copy_from_slice(&available[..n]);
            copied += n;
        }
        copied
    }

    /// The unread remainder of the chunk under the cursor.
    ///
    /// Empty when nothing is buffered ahead. This is the largest slice that
    /// can be handed out without copying.
    #[must_use]
    pub fn current_chunk(&self) -> &[u8] {
        self.chunks
            .get(self.cursor.index)
            .map_or(&[][..], |chunk| &chunk[self.cursor.offset..])
    }

    /// Move the cursor by `offset` bytes; returns whether it moved.
    ///
    /// Unlike [`read`](Self::read), seeking is all-or-nothing: a positive
    /// offset larger than [`forward_bytes`](Self::forward_bytes), or a
    /// negative one larger than [`backward_bytes`](Self::backward_bytes),
    /// leaves the buffer untouched and returns `false`. Seeking by zero
    /// always succeeds.
    pub fn seek(&mut self, offset: isize) -> bool {
        self.try_seek(offset).is_ok()
    }

    /// Move the cursor by `offset` bytes, reporting why a seek was rejected.
    ///
    /// # Errors
    ///
    /// - [`SeekError::PastForward`] if `offset` is larger than the number of
    ///   bytes buffered ahead of the cursor.
    /// - [`SeekError::PastBackward`] if `-offset` is larger than the number of
    ///   consumed bytes still resident.
    ///
    /// The buffer is unchanged in both cases.
    pub fn try_seek(&mut self, offset: isize) -> Result<(), SeekError> {
        let magnitude = offset.unsigned_abs();
        let result = match offset.cmp(&0) {
            Ordering::Equal => Ok(()),
            Ordering::Greater => self.seek_forward(magnitude),
            Ordering::Less => self.seek_backward(magnitude),
        };
        if let Err(err) = &result {
            log::debug!("rejected seek by {offset}: {err}");
        }
        result
    }

    /// Drop every resident chunk and reset the cursor and positions.
    ///
    /// The capacities are kept.
    pub fn clear(&mut self) {
        self.chunks.clear();
        self.cursor = Cursor::default();
        self.forward_bytes = 0;
        self.backward_bytes = 0;
        self.position = 0;
    }

    /// Bytes buffered ahead of the cursor.
    #[must_use]
    #[inline]
    pub fn forward_bytes(&self) -> usize {
        self.forward_bytes
    }

    /// Consumed bytes still resident behind the cursor.
    #[must_use]
    #[inline]
    pub fn backward_bytes(&self) -> usize {
        self.backward_bytes
    }

    /// Advisory bound on [`forward_bytes`](Self::forward_bytes).
    #[must_use]
    #[inline]
    pub fn forward_capacity(&self) -> usize {
        self.options.forward_capacity
    }

    /// Bound on [`backward_bytes`](Self::backward_bytes) enforced by eviction.
    #[must_use]
    #[inline]
    pub fn backward_capacity(&self) -> usize {
        self.options.backward_capacity
    }

    /// Whether no bytes are resident on either side of the cursor.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Stream offset of the cursor: bytes consumed minus bytes rewound.
    #[must_use]
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Stream offset of the oldest resident byte, which is also the number
    /// of bytes evicted so far.
    #[must_use]
    #[inline]
    pub fn start_position(&self) -> u64 {
        self.position - self.backward_bytes as u64
    }

    /// Stream offset one past the newest appended byte.
    #[must_use]
    #[inline]
    pub fn end_position(&self) -> u64 {
        self.position + self.forward_bytes as u64
    }

    fn has_forward_room(&self) -> bool {
        self.forward_bytes < self.options.forward_capacity
    }

    fn seek_forward(&mut self, size: usize) -> Result<(), SeekError> {
        if size > self.forward_bytes {
            return Err(SeekError::PastForward {
                requested: size,
                available: self.forward_bytes,
            });
        }

        let skipped = self.advance(size, None);
        debug_assert_eq!(skipped, size);
        Ok(())
    }

    fn seek_backward(&mut self, size: usize) -> Result<(), SeekError> {
        if size > self.backward_bytes {
            return Err(SeekError::PastBackward {
                requested: size,
                available: self.backward_bytes,
            });
        }

        let mut remaining = size;
        while remaining > 0 {
            if self.cursor.offset == 0 {
                // `remaining <= backward_bytes` keeps a chunk behind us.
                self.cursor.index -= 1;
                self.cursor.offset = self.chunks[self.cursor.index].len();
            }
            let step = self.cursor.offset.min(remaining);
            self.cursor.offset -= step;
            remaining -= step;
        }

        self.forward_bytes += size;
        self.backward_bytes -= size;
        self.position -= size as u64;

        // No eviction: rewinding only shrinks the backward side.
        self.debug_check();
        Ok(())
    }

    /// Move the cursor forward by up to `size` bytes, copying them into `out`
    /// when given, then evict. Returns the number of bytes passed over.
    pub(crate) fn advance(&mut self, size: usize, mut out: Option<&mut [u8]>) -> usize {
        let mut taken = 0;
        while taken < size {
            let Some(chunk) = self.chunks.get(self.cursor.index) else {
                break;
            };

            let start = self.cursor.offset;
            let n = (chunk.len() - start).min(size - taken);
            if let Some(out) = out.as_deref_mut() {
                out[taken..taken + n].copy_from_slice(&chunk[start..start + n]);
            }
            taken += n;

            self.cursor.offset += n;
            if self.cursor.offset == chunk.len() {
                self.cursor.index += 1;
                self.cursor.offset = 0;
            }
        }

        self.forward_bytes -= taken;
        self.backward_bytes += taken;
        self.position += taken as u64;

        self.evict_backward_chunks();
        taken
    }

    fn evict_backward_chunks(&mut self) {
        let mut evicted = 0;
        // `cursor.index > 0` keeps the chunk under the cursor resident.
        while self.backward_bytes > self.options.backward_capacity && self.cursor.index > 0 {
            let Some(chunk) = self.chunks.pop_front() else {
                break;
            };
            self.backward_bytes -= chunk.len();
            self.cursor.index -= 1;
            evicted += 1;
        }

        if evicted > 0 {
            log::trace!(
                "evicted {evicted} chunk(s), {} bytes retained behind, stream starts at {}",
                self.backward_bytes,
                self.start_position()
            );
        }
        self.debug_check();
    }

    #[inline]
    fn debug_check(&self) {
        #[cfg(debug_assertions)]
        {
            let behind = self
                .chunks
                .range(..self.cursor.index)
                .map(Chunk::len)
                .sum::<usize>()
                + self.cursor.offset;
            let resident = self.chunks.iter().map(Chunk::len).sum::<usize>();

            debug_assert_eq!(self.backward_bytes, behind, "backward count drifted");
            debug_assert_eq!(
                self.forward_bytes + self.backward_bytes,
                resident,
                "byte counts do not cover the resident chunks"
            );
            debug_assert!(
                self.chunks
                    .get(self.cursor.index)
                    .map_or(self.cursor.offset == 0, |chunk| self.cursor.offset
                        < chunk.len()),
                "cursor {:?} is not normalized",
                self.cursor
            );
            debug_assert!(
                self.backward_bytes <= self.options.backward_capacity || self.cursor.index == 0,
                "backward capacity exceeded with evictable chunks resident"
            );
        }
    }
}

impl Default for SeekableBuffer {
    fn default() -> Self {
        Self::with_options(BufferOptions::default())
    }
}
