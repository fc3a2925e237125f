//! A bounded, bidirectionally seekable staging buffer for streamed bytes.
//!
//! [`SeekableBuffer`] sits between a transport that delivers bytes in
//! arbitrarily sized pieces and a consumer that reads them sequentially, but
//! occasionally needs to rewind over bytes it has already consumed or skip
//! ahead over bytes it does not care about.
//!
//! Two capacities bound the buffer:
//!
//! - the **backward capacity** is a hard limit on how many already-read bytes
//!   stay resident for rewinding. Whole chunks that fall out of that window
//!   are evicted after every read.
//! - the **forward capacity** is advisory. [`SeekableBuffer::append`] never
//!   rejects data, it only reports whether the caller should stop feeding.
//!
//! Reads are best-effort and return whatever is buffered. Seeks are
//! all-or-nothing.
//!
//! ```rust
//! use seekbuf::SeekableBuffer;
//!
//! let mut buffer = SeekableBuffer::new(16, 64);
//! assert!(buffer.append(b"hello, "));
//! assert!(buffer.append(b"world"));
//!
//! let mut out = [0u8; 5];
//! assert_eq!(buffer.read(&mut out), 5);
//! assert_eq!(&out, b"hello");
//!
//! // Rewind and read the same bytes again.
//! assert!(buffer.seek(-5));
//! assert_eq!(buffer.read(&mut out), 5);
//! assert_eq!(&out, b"hello");
//!
//! // Skipping past the buffered data is rejected without moving the cursor.
//! assert!(!buffer.seek(100));
//! assert_eq!(buffer.forward_bytes(), 7);
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod buffer;
mod chunk;
mod chunk_utils;
mod error;
#[cfg(feature = "std")]
mod io;
mod options;

#[cfg(test)]
mod tests;

pub use buffer::SeekableBuffer;
pub use chunk_utils::split_into_chunks;
pub use error::SeekError;
pub use options::{BufferOptions, DEFAULT_CAPACITY};
