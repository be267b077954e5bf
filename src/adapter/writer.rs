//! `std::io::Write` adapter.

use std::io::{self, Write};

use tracing::{debug, trace};

use crate::config::TransformConfig;
use crate::error::TransformError;
use crate::transform::Transformer;

/// A writer that transforms bytes before passing them to an inner writer.
///
/// Output is staged in a buffer of `dst_buffer_size` bytes and drained into
/// the inner writer each time it fills. If the inner writer fails after part
/// of the input has gone through the transformer, `write` reports that part
/// as written and keeps the undelivered output staged; the next `write`,
/// `flush` or [`TransformWriter::finish`] delivers it first. An error is only
/// returned when none of the caller's buffer was consumed.
///
/// Call [`TransformWriter::finish`] at the end of the stream to issue the
/// final `at_eof` call and get the inner writer back. Staged output is lost
/// if the writer is dropped without a `flush` or `finish`.
///
/// # Example
///
/// ```
/// use std::io::Write;
/// use crlfkit::{CrlfExpander, TransformWriter};
///
/// let mut writer = TransformWriter::new(Vec::new(), CrlfExpander);
/// writer.write_all(b"To: a@example.org\n\nhello\n")?;
/// let wire = writer.finish()?;
/// assert_eq!(wire, b"To: a@example.org\r\n\r\nhello\r\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct TransformWriter<W, T> {
    writer: W,
    transformer: T,
    dst: Vec<u8>,
    dst_pos: usize,
    dst_end: usize,
}

impl<W: Write, T: Transformer> TransformWriter<W, T> {
    /// Creates a writer with the default [`TransformConfig`].
    pub fn new(writer: W, transformer: T) -> Self {
        Self::build(writer, transformer, TransformConfig::default())
    }

    /// Creates a writer with an explicit output staging size.
    ///
    /// `src_buffer_size` is not used: input is taken straight from the
    /// caller's buffer.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidConfig`] if `config` does not validate.
    pub fn with_config(
        writer: W,
        transformer: T,
        config: TransformConfig,
    ) -> Result<Self, TransformError> {
        config.validate()?;
        Ok(Self::build(writer, transformer, config))
    }

    fn build(writer: W, transformer: T, config: TransformConfig) -> Self {
        Self {
            writer,
            transformer,
            dst: vec![0u8; config.dst_buffer_size()],
            dst_pos: 0,
            dst_end: 0,
        }
    }

    /// Delivers staged output to the inner writer.
    fn drain(&mut self) -> io::Result<()> {
        while self.dst_pos < self.dst_end {
            match self.writer.write(&self.dst[self.dst_pos..self.dst_end]) {
                Ok(0) => {
                    return Err(io::Error::new(
                        io::ErrorKind::WriteZero,
                        "failed to write transformed output",
                    ));
                }
                Ok(n) => self.dst_pos += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        self.dst_pos = 0;
        self.dst_end = 0;
        Ok(())
    }

    /// Runs `src` through the transformer and returns how much of it was
    /// consumed.
    ///
    /// Stops early, with `Ok`, when the inner writer fails after some input
    /// was consumed; the output of that input stays staged.
    fn pump(&mut self, src: &[u8], at_eof: bool) -> io::Result<usize> {
        self.drain()?;

        let mut consumed = 0;
        loop {
            let rest = &src[consumed..];
            let result = self.transformer.transform(&mut self.dst, rest, at_eof);
            consumed += result.consumed();
            self.dst_end = result.written();

            if let Err(e) = self.drain() {
                if consumed == 0 {
                    return Err(e);
                }
                debug!(consumed, error = %e, "inner writer failed, output kept staged");
                return Ok(consumed);
            }

            if !result.is_short() {
                return Ok(consumed);
            }
            if result.written() == 0 && result.consumed() == 0 {
                if consumed > 0 {
                    return Ok(consumed);
                }
                return Err(TransformError::NoProgress {
                    capacity: self.dst.len(),
                }
                .into());
            }
            trace!(remaining = rest.len() - result.consumed(), "destination short, draining");
        }
    }

    /// Signals end of input, flushes, and returns the inner writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.pump(&[], true)?;
        self.writer.flush()?;
        debug!("transform writer finished");
        Ok(self.writer)
    }
}

impl<W, T> TransformWriter<W, T> {
    /// Returns a reference to the transformer.
    pub fn transformer(&self) -> &T {
        &self.transformer
    }

    /// Returns a reference to the inner writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }
}

impl<W: Write, T: Transformer> Write for TransformWriter<W, T> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pump(buf, false)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.drain()?;
        self.writer.flush()
    }
}
