/// Capacity used for both bounds by [`BufferOptions::default`]: 2 MiB.
pub const DEFAULT_CAPACITY: usize = 2 * 1024 * 1024;

/// Capacity bounds for a [`SeekableBuffer`](crate::SeekableBuffer).
///
/// The two bounds are enforced differently. The backward capacity is hard:
/// consumed chunks are dropped once they fall out of the rewind window. The
/// forward capacity is advisory: it only changes what
/// [`append`](crate::SeekableBuffer::append) reports, never what it keeps.
///
/// # Examples
///
/// ```rust
/// use seekbuf::{BufferOptions, SeekableBuffer};
///
/// let buffer = SeekableBuffer::with_options(BufferOptions {
///     backward_capacity: 64 * 1024,
///     ..Default::default()
/// });
/// assert_eq!(buffer.backward_capacity(), 64 * 1024);
/// ```
///
/// # Default
///
/// Both capacities default to [`DEFAULT_CAPACITY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BufferOptions {
    /// How many already-read bytes to keep resident for backward seeks.
    ///
    /// After every read or forward seek, whole chunks are evicted from the
    /// oldest end until the consumed bytes fit this bound. The chunk under
    /// the cursor is never evicted, so a single large chunk can keep the
    /// backward count above this value until the cursor leaves it.
    ///
    /// # Default
    ///
    /// [`DEFAULT_CAPACITY`]
    pub backward_capacity: usize,

    /// How many unread bytes the caller intends to keep buffered ahead of the
    /// cursor.
    ///
    /// Appending never fails. Once the unread byte count reaches this value,
    /// `append` returns `false` as a signal to pause the producer.
    ///
    /// # Default
    ///
    /// [`DEFAULT_CAPACITY`]
    pub forward_capacity: usize,
}

impl Default for BufferOptions {
    fn default() -> Self {
        Self {
            backward_capacity: DEFAULT_CAPACITY,
            forward_capacity: DEFAULT_CAPACITY,
        }
    }
}
