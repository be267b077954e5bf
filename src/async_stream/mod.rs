//! Async streaming support.
//!
//! This module transforms bytes read through the `futures-io::AsyncRead`
//! trait, which keeps it runtime-agnostic (tokio via `tokio-util::compat`,
//! async-std, smol).
//!
//! - [`transform_async`] - Creates a stream of transformed byte chunks
//!
//! This module requires the `async-io` feature to be enabled.

mod stream;

pub use stream::{TransformStream, transform_async};
