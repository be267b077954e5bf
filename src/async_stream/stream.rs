//! Async stream adapter for transforms.
//!
//! # Example
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use crlfkit::{transform_async, CrlfExpander, TransformConfig};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead>(reader: R) -> Result<(), crlfkit::TransformError> {
//!     let stream = transform_async(reader, CrlfExpander, TransformConfig::default())?;
//!     futures_util::pin_mut!(stream);
//!
//!     while let Some(bytes) = stream.next().await {
//!         let bytes = bytes?;
//!         println!("{} bytes on the wire", bytes.len());
//!     }
//!     Ok(())
//! }
//! ```

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::{Bytes, BytesMut};
use futures_core::Stream;
use futures_io::AsyncRead;
use pin_project_lite::pin_project;
use tracing::{debug, trace};

use crate::config::TransformConfig;
use crate::error::TransformError;
use crate::transform::{Transformer, transform_into};

pin_project! {
    /// A stream of transformed bytes read from an async reader.
    ///
    /// Each item is the output produced by one read of the inner reader.
    /// Reads that produce no output (a swallowed LF, for example) are
    /// skipped rather than yielded as empty chunks.
    pub struct TransformStream<R, T> {
        #[pin]
        reader: R,
        transformer: T,
        buffer: Vec<u8>,
        finished: bool,
    }
}

impl<R, T> TransformStream<R, T> {
    /// Returns a reference to the transformer.
    pub fn transformer(&self) -> &T {
        &self.transformer
    }
}

impl<R: AsyncRead, T: Transformer> Stream for TransformStream<R, T> {
    type Item = Result<Bytes, TransformError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.finished {
            return Poll::Ready(None);
        }

        loop {
            let n = match this.reader.as_mut().poll_read(cx, &mut this.buffer[..]) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Err(e)) if e.kind() == io::ErrorKind::Interrupted => continue,
                Poll::Ready(Err(e)) => {
                    *this.finished = true;
                    return Poll::Ready(Some(Err(TransformError::Io(e))));
                }
                Poll::Ready(Ok(n)) => n,
            };

            let at_eof = n == 0;
            let mut out = BytesMut::with_capacity(n.saturating_mul(2));
            transform_into(&mut *this.transformer, &this.buffer[..n], at_eof, &mut out);

            if at_eof {
                debug!("async reader reached end of input");
                *this.finished = true;
                if out.is_empty() {
                    return Poll::Ready(None);
                }
                return Poll::Ready(Some(Ok(out.freeze())));
            }

            if !out.is_empty() {
                trace!(read = n, produced = out.len(), "transformed chunk");
                return Poll::Ready(Some(Ok(out.freeze())));
            }
        }
    }
}

/// Creates a stream that transforms bytes from an async reader.
///
/// Uses `futures_io::AsyncRead` for runtime-agnostic async I/O. Tokio users
/// can convert their readers with `tokio_util::compat`:
///
/// ```ignore
/// use tokio_util::compat::TokioAsyncReadCompatExt;
/// use crlfkit::{transform_async, LfNormalizer, TransformConfig};
///
/// let file = tokio::fs::File::open("message.eml").await?;
/// let stream = transform_async(file.compat(), LfNormalizer::new(), TransformConfig::default())?;
/// ```
///
/// Only `src_buffer_size` of `config` is used; it bounds each read. Output
/// chunks are sized by the transform, so `dst_buffer_size` is not checked.
///
/// # Errors
///
/// Returns [`TransformError::InvalidConfig`] if `src_buffer_size` is zero.
pub fn transform_async<R, T>(
    reader: R,
    transformer: T,
    config: TransformConfig,
) -> Result<TransformStream<R, T>, TransformError>
where
    R: AsyncRead,
    T: Transformer,
{
    if config.src_buffer_size() == 0 {
        return Err(TransformError::InvalidConfig {
            message: "src_buffer_size must be non-zero",
        });
    }

    Ok(TransformStream {
        reader,
        transformer,
        buffer: vec![0u8; config.src_buffer_size()],
        finished: false,
    })
}
