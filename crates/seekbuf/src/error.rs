use thiserror::Error;

/// Why a seek was rejected.
///
/// A rejected seek leaves the buffer untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekError {
    /// The seek would move past the last appended byte.
    #[error("cannot seek forward {requested} bytes: only {available} buffered ahead")]
    PastForward {
        /// Bytes the caller asked to skip.
        requested: usize,
        /// Unread bytes currently buffered.
        available: usize,
    },
    /// The seek would rewind past the oldest byte still resident.
    #[error("cannot seek backward {requested} bytes: only {available} retained behind")]
    PastBackward {
        /// Bytes the caller asked to rewind.
        requested: usize,
        /// Consumed bytes still resident.
        available: usize,
    },
}
