//! LF to CRLF expansion.

use crate::util::{CR, LF};

use super::{Transformed, Transformer};

/// Expands every LF into CR LF.
///
/// The expander carries no state between calls, so one value can be copied
/// or shared across threads and streams freely. An LF is only consumed when
/// both output bytes fit; a partial CR is never written.
///
/// Input that already contains CRLF gains an extra CR. Run it through
/// [`LfNormalizer`](crate::LfNormalizer) first when the source endings are
/// unknown.
///
/// # Example
///
/// ```
/// use crlfkit::{CrlfExpander, Transformed};
///
/// let mut dst = [0u8; 1];
/// let short = CrlfExpander.expand(&mut dst, b"\n");
/// assert_eq!(short, Transformed::DestinationShort { written: 0, consumed: 0 });
///
/// let mut dst = [0u8; 2];
/// let done = CrlfExpander.expand(&mut dst, b"\n");
/// assert_eq!(done, Transformed::Complete { written: 2, consumed: 1 });
/// assert_eq!(&dst, b"\r\n");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CrlfExpander;

impl CrlfExpander {
    /// Creates an expander.
    pub const fn new() -> Self {
        Self
    }

    /// Expands `src` into `dst` without needing exclusive access.
    pub fn expand(&self, dst: &mut [u8], src: &[u8]) -> Transformed {
        let mut written = 0;
        let mut consumed = 0;

        for &byte in src {
            let room = dst.len() - written;
            if byte == LF {
                if room < 2 {
                    break;
                }
                dst[written] = CR;
                dst[written + 1] = LF;
                written += 2;
            } else {
                if room == 0 {
                    break;
                }
                dst[written] = byte;
                written += 1;
            }
            consumed += 1;
        }

        Transformed::new(written, consumed, src.len())
    }
}

impl Transformer for CrlfExpander {
    fn transform(&mut self, dst: &mut [u8], src: &[u8], _at_eof: bool) -> Transformed {
        self.expand(dst, src)
    }
}
