use alloc::boxed::Box;
use core::{fmt, ops::Deref};

use bstr::ByteSlice;

/// An immutable block of bytes as it was handed to the buffer.
///
/// Chunks are never resized or split. The buffer evicts them whole.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Chunk {
    data: Box<[u8]>,
}

impl Chunk {
    pub(crate) fn new(data: Box<[u8]>) -> Self {
        Self { data }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }
}

impl Deref for Chunk {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Chunk").field(&self.data.as_bstr()).finish()
    }
}
