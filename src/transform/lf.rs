//! CR / LF / CRLF to LF normalization.

use crate::util::{CR, LF};

use super::{Transformed, Transformer};

/// What the normalizer remembers about the previous input byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum LineState {
    /// No input yet, or the last byte was not CR.
    #[default]
    Clear,
    /// The last byte was CR; a following LF completes a CRLF pair.
    AfterCr,
}

/// Normalizes CR, LF and CRLF line endings to a single LF.
///
/// A CR is converted to LF as soon as it is seen. An LF that immediately
/// follows a CR, including one that arrives at the start of the next call,
/// is consumed without output since its line break was already emitted.
///
/// Create one normalizer per stream and call [`Transformer::reset`] before
/// reusing it on an unrelated stream.
///
/// # Example
///
/// ```
/// use crlfkit::{LfNormalizer, Transformed, Transformer};
///
/// let mut lf = LfNormalizer::new();
/// let mut dst = [0u8; 16];
///
/// // CRLF split across two calls
/// let first = lf.transform(&mut dst, b"a\r", false);
/// assert_eq!(first, Transformed::Complete { written: 2, consumed: 2 });
/// assert_eq!(&dst[..2], b"a\n");
///
/// let second = lf.transform(&mut dst, b"\nb", true);
/// assert_eq!(second, Transformed::Complete { written: 1, consumed: 2 });
/// assert_eq!(&dst[..1], b"b");
/// ```
#[derive(Debug, Clone, Default)]
pub struct LfNormalizer {
    state: LineState,
}

impl LfNormalizer {
    /// Creates a normalizer with no carried state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the last input byte examined was CR.
    pub fn pending_cr(&self) -> bool {
        self.state == LineState::AfterCr
    }
}

impl Transformer for LfNormalizer {
    fn transform(&mut self, dst: &mut [u8], src: &[u8], _at_eof: bool) -> Transformed {
        let mut written = 0;
        let mut consumed = 0;

        for &byte in src {
            if written == dst.len() {
                break;
            }

            match byte {
                CR => {
                    dst[written] = LF;
                    written += 1;
                }
                // second half of a CRLF already emitted as LF
                LF if self.state == LineState::AfterCr => {}
                _ => {
                    dst[written] = byte;
                    written += 1;
                }
            }

            self.state = if byte == CR {
                LineState::AfterCr
            } else {
                LineState::Clear
            };
            consumed += 1;
        }

        Transformed::new(written, consumed, src.len())
    }

    fn reset(&mut self) {
        self.state = LineState::Clear;
    }
}
