//! `std::io::Read` adapter.
//!
//! [`TransformReader`] pulls bytes from an inner reader, runs them through a
//! [`Transformer`] and serves the output through [`Read`].
//!
//! # Example
//!
//! ```
//! use std::io::Read;
//! use crlfkit::{LfNormalizer, TransformReader};
//!
//! let mut reader = TransformReader::new(&b"Subject: hi\r\n\r\nbody\r\n"[..], LfNormalizer::new());
//! let mut out = String::new();
//! reader.read_to_string(&mut out)?;
//! assert_eq!(out, "Subject: hi\n\nbody\n");
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io::{self, Read};

use tracing::{debug, trace};

use crate::config::TransformConfig;
use crate::error::TransformError;
use crate::transform::Transformer;
use crate::util::compact;

/// A reader that transforms the bytes of an inner reader.
///
/// Input is staged in a buffer of `src_buffer_size` bytes and output in one
/// of `dst_buffer_size` bytes; both are allocated once. The transformer is
/// called with `at_eof = true` once the inner reader reports end of input.
pub struct TransformReader<R, T> {
    reader: R,
    transformer: T,
    src: Vec<u8>,
    src_pos: usize,
    src_end: usize,
    dst: Vec<u8>,
    dst_pos: usize,
    dst_end: usize,
    at_eof: bool,
    finished: bool,
}

impl<R: Read, T: Transformer> TransformReader<R, T> {
    /// Creates a reader with the default [`TransformConfig`].
    pub fn new(reader: R, transformer: T) -> Self {
        Self::build(reader, transformer, TransformConfig::default())
    }

    /// Creates a reader with explicit buffer sizes.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidConfig`] if `config` does not validate.
    pub fn with_config(
        reader: R,
        transformer: T,
        config: TransformConfig,
    ) -> Result<Self, TransformError> {
        config.validate()?;
        Ok(Self::build(reader, transformer, config))
    }

    fn build(reader: R, transformer: T, config: TransformConfig) -> Self {
        Self {
            reader,
            transformer,
            src: vec![0u8; config.src_buffer_size()],
            src_pos: 0,
            src_end: 0,
            dst: vec![0u8; config.dst_buffer_size()],
            dst_pos: 0,
            dst_end: 0,
            at_eof: false,
            finished: false,
        }
    }

    /// Reads more input into the staging buffer.
    fn refill(&mut self) -> io::Result<()> {
        self.src_end = compact(&mut self.src, self.src_pos, self.src_end);
        self.src_pos = 0;

        if self.src_end == self.src.len() {
            // the transformer left a full buffer untouched without asking for room
            return Err(TransformError::NoProgress {
                capacity: self.dst.len(),
            }
            .into());
        }

        loop {
            match self.reader.read(&mut self.src[self.src_end..]) {
                Ok(0) => {
                    debug!("inner reader reached end of input");
                    self.at_eof = true;
                    return Ok(());
                }
                Ok(n) => {
                    trace!(bytes = n, "refilled input");
                    self.src_end += n;
                    return Ok(());
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R, T> TransformReader<R, T> {
    /// Returns a reference to the transformer.
    pub fn transformer(&self) -> &T {
        &self.transformer
    }

    /// Returns a reference to the inner reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Consumes the adapter and returns the inner reader.
    ///
    /// Staged input and output that were not read yet are dropped.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read, T: Transformer> Read for TransformReader<R, T> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        loop {
            if self.dst_pos < self.dst_end {
                let n = buf.len().min(self.dst_end - self.dst_pos);
                buf[..n].copy_from_slice(&self.dst[self.dst_pos..self.dst_pos + n]);
                self.dst_pos += n;
                return Ok(n);
            }

            if self.finished {
                return Ok(0);
            }

            let pending = &self.src[self.src_pos..self.src_end];
            if !pending.is_empty() || self.at_eof {
                let at_eof = self.at_eof;
                let result = self.transformer.transform(&mut self.dst, pending, at_eof);
                self.src_pos += result.consumed();
                self.dst_pos = 0;
                self.dst_end = result.written();

                if result.is_short() {
                    if result.written() == 0 && result.consumed() == 0 {
                        return Err(TransformError::NoProgress {
                            capacity: self.dst.len(),
                        }
                        .into());
                    }
                    trace!(written = result.written(), "destination short");
                    continue;
                }

                if self.at_eof {
                    self.finished = true;
                }
                if result.written() > 0 || self.finished {
                    continue;
                }
            }

            self.refill()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{CrlfExpander, LfNormalizer};

    /// Yields its input a fixed number of bytes at a time.
    struct Trickle<'a> {
        data: &'a [u8],
        step: usize,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.step.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    fn read_all<R: Read>(mut reader: R) -> Vec<u8> {
        let mut out = Vec::new();
        reader.read_to_end(&mut out).unwrap();
        out
    }

    #[test]
    fn test_reader_normalizes() {
        let reader = TransformReader::new(&b"a\r\nb\rc\nd"[..], LfNormalizer::new());
        assert_eq!(read_all(reader), b"a\nb\nc\nd");
    }

    #[test]
    fn test_reader_tiny_buffers() {
        let config = TransformConfig::new(1, 2).unwrap();
        let data = b"line one\nline two\n\n";
        let source = Trickle { data, step: 3 };
        let reader = TransformReader::with_config(source, CrlfExpander, config).unwrap();
        assert_eq!(read_all(reader), b"line one\r\nline two\r\n\r\n");
    }

    #[test]
    fn test_reader_crlf_split_by_inner_reads() {
        let config = TransformConfig::new(2, 2).unwrap();
        let source = Trickle {
            data: b"x\r\ny\r\n",
            step: 2,
        };
        let reader = TransformReader::with_config(source, LfNormalizer::new(), config).unwrap();
        assert_eq!(read_all(reader), b"x\ny\n");
    }

    #[test]
    fn test_reader_empty_input() {
        let reader = TransformReader::new(&b""[..], LfNormalizer::new());
        assert!(read_all(reader).is_empty());
    }

    #[test]
    fn test_reader_rejects_invalid_config() {
        let config = TransformConfig::default().with_dst_buffer_size(1);
        let result = TransformReader::with_config(&b""[..], CrlfExpander, config);
        assert!(result.is_err());
    }

    #[test]
    fn test_reader_small_caller_buffer() {
        let mut reader = TransformReader::new(&b"ab\ncd"[..], CrlfExpander);
        let mut out = Vec::new();
        let mut buf = [0u8; 1];
        loop {
            let n = reader.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            out.extend_from_slice(&buf[..n]);
        }
        assert_eq!(out, b"ab\r\ncd");
    }
}
