//! Streaming line-ending transforms.
//!
//! - [`Transformer`] - The chunked transform contract
//! - [`Transformed`] - Outcome of one call, including the short-destination signal
//! - [`LfNormalizer`] - CR / LF / CRLF to LF, carries one byte of state
//! - [`CrlfExpander`] - LF to CRLF, stateless
//! - [`transform_into`] - Drives one chunk to completion into a growable buffer

mod crlf;
mod drive;
mod lf;

pub use crlf::CrlfExpander;
pub use drive::{TransformerExt, expand_crlf, normalize_lf, transform_into};
pub use lf::LfNormalizer;

/// Outcome of a single [`Transformer::transform`] call.
///
/// Both variants report how many bytes were written to the destination and
/// consumed from the source. `DestinationShort` means input is left over
/// because the destination filled up; it is a flow-control signal, not a
/// failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transformed {
    /// All of the offered input was consumed.
    Complete {
        /// Bytes written to the destination.
        written: usize,
        /// Bytes consumed from the source.
        consumed: usize,
    },
    /// The destination ran out of room before the input was used up.
    ///
    /// Call again with `src[consumed..]` and a fresh or larger destination.
    DestinationShort {
        /// Bytes written to the destination.
        written: usize,
        /// Bytes consumed from the source.
        consumed: usize,
    },
}

impl Transformed {
    /// Classifies a finished call by whether any of `src_len` bytes remain.
    pub(crate) fn new(written: usize, consumed: usize, src_len: usize) -> Self {
        debug_assert!(consumed <= src_len);
        if consumed < src_len {
            Transformed::DestinationShort { written, consumed }
        } else {
            Transformed::Complete { written, consumed }
        }
    }

    /// Returns the number of bytes written to the destination.
    pub fn written(&self) -> usize {
        match *self {
            Transformed::Complete { written, .. }
            | Transformed::DestinationShort { written, .. } => written,
        }
    }

    /// Returns the number of bytes consumed from the source.
    pub fn consumed(&self) -> usize {
        match *self {
            Transformed::Complete { consumed, .. }
            | Transformed::DestinationShort { consumed, .. } => consumed,
        }
    }

    /// Returns `true` if input was left over for lack of output space.
    pub fn is_short(&self) -> bool {
        matches!(self, Transformed::DestinationShort { .. })
    }
}

/// A streaming, chunked byte transform.
///
/// # Contract
///
/// - Never writes past `dst.len()`.
/// - Never reports more consumed input than it examined.
/// - Given the unconsumed suffix of `src` again, byte for byte, with a fresh
///   or larger `dst`, continues exactly where it stopped. Anything else it
///   needs to resume lives in the transformer's own state.
///
/// A caller finishes one chunk by re-invoking with `&src[consumed..]` until
/// the result is [`Transformed::Complete`]. `at_eof` marks the last chunk of a
/// stream.
///
/// Calls never allocate, block or perform I/O.
pub trait Transformer {
    /// Converts a prefix of `src` into a prefix of `dst`.
    fn transform(&mut self, dst: &mut [u8], src: &[u8], at_eof: bool) -> Transformed;

    /// Clears carried state before processing an unrelated stream.
    ///
    /// The default does nothing, for transformers without state.
    fn reset(&mut self) {}
}

impl<T: Transformer + ?Sized> Transformer for &mut T {
    fn transform(&mut self, dst: &mut [u8], src: &[u8], at_eof: bool) -> Transformed {
        (**self).transform(dst, src, at_eof)
    }

    fn reset(&mut self) {
        (**self).reset();
    }
}

impl<T: Transformer + ?Sized> Transformer for Box<T> {
    fn transform(&mut self, dst: &mut [u8], src: &[u8], at_eof: bool) -> Transformed {
        (**self).transform(dst, src, at_eof)
    }

    fn reset(&mut self) {
        (**self).reset();
    }
}
