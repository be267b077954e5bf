//! crlfkit
//!
//! Streaming line-ending transcoders for mail pipelines.
//!
//! `crlfkit` provides two incremental transforms over bounded byte buffers:
//!
//! - [`LfNormalizer`] - CR, LF and CRLF to LF (local / storage form)
//! - [`CrlfExpander`] - LF to CRLF (wire form for SMTP, IMAP, MIME signing)
//!
//! The crate intentionally:
//! - does NOT parse MIME or headers
//! - does NOT handle charsets
//! - does NOT own the source or sink of the bytes
//!
//! Both transforms share the [`Transformer`] contract: convert a prefix of
//! the input into a prefix of a caller-provided output buffer and report
//! [`Transformed::DestinationShort`] when the output fills up first. A CRLF
//! split across two calls is handled by the state the normalizer carries.
//!
//! # Chunked
//!
//! ```
//! use crlfkit::{LfNormalizer, Transformed, Transformer};
//!
//! let mut lf = LfNormalizer::new();
//! let mut dst = [0u8; 4];
//! let mut out = Vec::new();
//!
//! for chunk in [&b"a\r"[..], &b"\nb\r\nc"[..]] {
//!     let mut src = chunk;
//!     loop {
//!         let result = lf.transform(&mut dst, src, false);
//!         out.extend_from_slice(&dst[..result.written()]);
//!         src = &src[result.consumed()..];
//!         if let Transformed::Complete { .. } = result {
//!             break;
//!         }
//!     }
//! }
//! assert_eq!(out, b"a\nb\nc");
//! ```
//!
//! # Sync I/O
//!
//! ```
//! use std::io::Read;
//! use crlfkit::{CrlfExpander, TransformReader};
//!
//! let mut wire = Vec::new();
//! TransformReader::new(&b"hello\nworld\n"[..], CrlfExpander).read_to_end(&mut wire)?;
//! assert_eq!(wire, b"hello\r\nworld\r\n");
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use crlfkit::{transform_async, LfNormalizer, TransformConfig};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead + Unpin>(reader: R) -> Result<(), crlfkit::TransformError> {
//!     let mut stream = transform_async(reader, LfNormalizer::new(), TransformConfig::default())?;
//!
//!     while let Some(bytes) = stream.next().await {
//!         let bytes = bytes?;
//!         println!("{} bytes", bytes.len());
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod adapter;
mod config;
mod error;
mod transform;

mod util; // internal byte constants

#[cfg(feature = "async-io")]
mod async_stream;

//
// Public surface
//

pub use adapter::{TransformReader, TransformWriter};
pub use config::{
    DEFAULT_DST_BUFFER_SIZE, DEFAULT_SRC_BUFFER_SIZE, MIN_DST_BUFFER_SIZE, TransformConfig,
};
pub use error::TransformError;
pub use transform::{
    CrlfExpander, LfNormalizer, Transformed, Transformer, TransformerExt, expand_crlf,
    normalize_lf, transform_into,
};

#[cfg(feature = "async-io")]
pub use async_stream::{TransformStream, transform_async};
