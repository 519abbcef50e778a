/// Move `offset` positions from `current` in a circular sequence of `len` items.
///
/// The offset is first reduced by whole laps (truncating division), so a
/// single wrap-around correction is enough afterwards.
///
/// # Panics
///
/// Panics if `len` is zero. Callers must not navigate an empty collection.
pub fn next_index_cyclic(current: usize, offset: isize, len: usize) -> usize {
    assert!(len > 0, "cannot navigate an empty collection");

    let len = len as isize;
    let offset = offset - (offset / len) * len;
    let requested = current as isize + offset;

    let wrapped = if requested >= len {
        requested - len
    } else if requested < 0 {
        requested + len
    } else {
        requested
    };

    wrapped as usize
}
