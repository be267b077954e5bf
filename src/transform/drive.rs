//! Driving a transform to completion over in-memory buffers.

use bytes::{Bytes, BytesMut};
use tracing::trace;

use super::{CrlfExpander, LfNormalizer, Transformer};
use crate::config::MIN_DST_BUFFER_SIZE;

/// Transforms all of `src` and appends the output to `out`.
///
/// This is the caller side of the [`Transformer`] contract: the unconsumed
/// tail is re-supplied with fresh room until the transform reports
/// [`Complete`](super::Transformed::Complete). Room starts at twice the
/// remaining input and doubles after any call that makes no progress.
///
/// # Example
///
/// ```
/// use bytes::BytesMut;
/// use crlfkit::{LfNormalizer, transform_into};
///
/// let mut lf = LfNormalizer::new();
/// let mut out = BytesMut::new();
///
/// transform_into(&mut lf, b"one\r", false, &mut out);
/// transform_into(&mut lf, b"\ntwo\r\n", true, &mut out);
///
/// assert_eq!(&out[..], b"one\ntwo\n");
/// ```
pub fn transform_into<T>(transformer: &mut T, src: &[u8], at_eof: bool, out: &mut BytesMut)
where
    T: Transformer + ?Sized,
{
    let mut src = src;
    let mut room = src.len().saturating_mul(2).max(MIN_DST_BUFFER_SIZE);

    loop {
        let start = out.len();
        out.resize(start + room, 0);
        let result = transformer.transform(&mut out[start..], src, at_eof);
        out.truncate(start + result.written());
        src = &src[result.consumed()..];

        if !result.is_short() {
            return;
        }

        if result.written() == 0 && result.consumed() == 0 {
            room = room.saturating_mul(2);
        }
        trace!(
            remaining = src.len(),
            written = result.written(),
            room,
            "destination short, retrying"
        );
    }
}

/// One-shot helpers for whole buffers.
pub trait TransformerExt: Transformer {
    /// Transforms `src` as a complete stream and returns the output.
    ///
    /// The call is made with `at_eof = true`; carried state is not reset
    /// afterwards.
    ///
    /// # Example
    ///
    /// ```
    /// use crlfkit::{CrlfExpander, TransformerExt};
    ///
    /// let out = CrlfExpander.transform_to_bytes(b"a\nb");
    /// assert_eq!(&out[..], b"a\r\nb");
    /// ```
    fn transform_to_bytes(&mut self, src: &[u8]) -> Bytes {
        let mut out = BytesMut::with_capacity(src.len());
        transform_into(self, src, true, &mut out);
        out.freeze()
    }
}

impl<T: Transformer + ?Sized> TransformerExt for T {}

/// Normalizes every line ending in `src` to LF.
///
/// ```
/// assert_eq!(&crlfkit::normalize_lf(b"a\r\nb\rc")[..], b"a\nb\nc");
/// ```
pub fn normalize_lf(src: &[u8]) -> Bytes {
    LfNormalizer::new().transform_to_bytes(src)
}

/// Expands every LF in `src` to CRLF.
///
/// ```
/// assert_eq!(&crlfkit::expand_crlf(b"a\nb\n")[..], b"a\r\nb\r\n");
/// ```
pub fn expand_crlf(src: &[u8]) -> Bytes {
    CrlfExpander.transform_to_bytes(src)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Transformed;

    /// Writes at most one byte per call, to force the retry path.
    struct OneByte;

    impl Transformer for OneByte {
        fn transform(&mut self, dst: &mut [u8], src: &[u8], _at_eof: bool) -> Transformed {
            if src.is_empty() {
                return Transformed::new(0, 0, 0);
            }
            if dst.is_empty() {
                return Transformed::new(0, 0, src.len());
            }
            dst[0] = src[0];
            Transformed::new(1, 1, src.len())
        }
    }

    /// Needs `need` bytes of room before it emits anything.
    struct Greedy {
        need: usize,
    }

    impl Transformer for Greedy {
        fn transform(&mut self, dst: &mut [u8], src: &[u8], _at_eof: bool) -> Transformed {
            if src.is_empty() {
                return Transformed::new(0, 0, 0);
            }
            if dst.len() < self.need {
                return Transformed::new(0, 0, src.len());
            }
            dst[..src.len()].copy_from_slice(src);
            Transformed::new(src.len(), src.len(), src.len())
        }
    }

    #[test]
    fn test_transform_into_appends() {
        let mut out = BytesMut::from(&b"head:"[..]);
        transform_into(&mut CrlfExpander, b"x\n", true, &mut out);
        assert_eq!(&out[..], b"head:x\r\n");
    }

    #[test]
    fn test_transform_into_retries_short_calls() {
        let mut out = BytesMut::new();
        transform_into(&mut OneByte, b"abcdef", false, &mut out);
        assert_eq!(&out[..], b"abcdef");
    }

    #[test]
    fn test_transform_into_grows_room_on_stall() {
        let mut out = BytesMut::new();
        transform_into(&mut Greedy { need: 64 }, b"ab", false, &mut out);
        assert_eq!(&out[..], b"ab");
    }

    #[test]
    fn test_transform_into_empty_src() {
        let mut out = BytesMut::new();
        transform_into(&mut LfNormalizer::new(), b"", true, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_helpers() {
        assert_eq!(&normalize_lf(b"a\r\nb\rc\nd")[..], b"a\nb\nc\nd");
        assert_eq!(&expand_crlf(b"\n\n")[..], b"\r\n\r\n");
        assert!(normalize_lf(b"").is_empty());
    }

    #[test]
    fn test_transform_to_bytes_keeps_state() {
        let mut lf = LfNormalizer::new();
        assert_eq!(&lf.transform_to_bytes(b"a\r")[..], b"a\n");
        assert!(lf.pending_cr());
        assert_eq!(&lf.transform_to_bytes(b"\nb")[..], b"b");
    }
}
