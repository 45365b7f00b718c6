use alloc::vec::Vec;

/// Split `payload` into `parts` chunks of approximately equal size.
///
/// Handy for exercising a parser with input delivered in pieces.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn produce_chunks(payload: &[u8], parts: usize) -> Vec<&[u8]> {
    assert!(parts > 0);
    let chunk_size = payload.len().div_ceil(parts).max(1);
    payload.chunks(chunk_size).collect()
}

/// Split `payload` at the given byte offsets.
///
/// Offsets are taken modulo the length of what remains, so any sequence of
/// numbers yields a valid partition; every chunk is non-empty and the chunks
/// concatenate back to `payload`.
#[must_use]
pub fn split_at_offsets<'a>(payload: &'a [u8], offsets: &[usize]) -> Vec<&'a [u8]> {
    let mut chunks = Vec::with_capacity(offsets.len() + 1);
    let mut rest = payload;
    for &offset in offsets {
        if rest.is_empty() {
            break;
        }
        let (head, tail) = rest.split_at(1 + offset % rest.len());
        chunks.push(head);
        rest = tail;
    }
    if !rest.is_empty() {
        chunks.push(rest);
    }
    chunks
}
