//! Internal byte constants and helpers.
//!
//! This module is an implementation detail and not part of the public API.

/// Carriage return.
pub(crate) const CR: u8 = b'\r';

/// Line feed.
pub(crate) const LF: u8 = b'\n';

/// Shifts `buf[start..end]` to the front of `buf` and returns the new end.
///
/// Used by the adapters to reclaim consumed space in their staging buffers.
pub(crate) fn compact(buf: &mut [u8], start: usize, end: usize) -> usize {
    if start == 0 {
        return end;
    }
    buf.copy_within(start..end, 0);
    end - start
}
