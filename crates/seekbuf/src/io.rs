//! `std::io` adapters for [`SeekableBuffer`].
//!
//! The inherent [`SeekableBuffer::read`] and [`SeekableBuffer::seek`] shadow
//! the trait methods of the same name, so call these through the trait
//! (`io::Seek::seek(&mut buffer, SeekFrom::Start(0))`) or use the provided
//! helpers such as `read_exact`, `rewind` and `stream_position`.
//!
//! An exhausted forward side reads as `Ok(0)`, which `std::io` consumers
//! treat as end of stream. Callers that keep appending should retry after
//! the next append.

use std::io::{self, BufRead, Read, Seek, SeekFrom};

use crate::SeekableBuffer;

impl Read for SeekableBuffer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(SeekableBuffer::read(self, buf))
    }
}

impl BufRead for SeekableBuffer {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Ok(self.current_chunk())
    }

    fn consume(&mut self, amt: usize) {
        let amt = amt.min(self.forward_bytes());
        self.advance(amt, None);
    }
}

impl Seek for SeekableBuffer {
    /// Seek within the resident bytes.
    ///
    /// `SeekFrom::End` is relative to the newest appended byte, not to the
    /// end of the underlying stream, which the buffer cannot know.
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let current = i128::from(self.position());
        let delta = match pos {
            SeekFrom::Start(target) => i128::from(target) - current,
            SeekFrom::Current(offset) => i128::from(offset),
            SeekFrom::End(offset) => i128::from(self.end_position()) + i128::from(offset) - current,
        };
        // Out-of-range deltas saturate and are rejected like any other
        // oversized seek.
        let offset = isize::try_from(delta).unwrap_or(if delta < 0 { isize::MIN } else { isize::MAX });

        self.try_seek(offset)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
        Ok(self.position())
    }
}
