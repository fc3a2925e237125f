use alloc::vec::Vec;

/// Split `payload` into `parts` approximately equal-sized chunks, the way a
/// transport might deliver it.
///
/// Fewer than `parts` chunks are produced when `payload` is shorter than
/// `parts`; an empty payload yields no chunks.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn split_into_chunks(payload: &[u8], parts: usize) -> Vec<&[u8]> {
    assert!(parts > 0);
    if payload.is_empty() {
        return Vec::new();
    }
    payload.chunks(payload.len().div_ceil(parts)).collect()
}
