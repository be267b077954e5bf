//! Blocking I/O adapters.
//!
//! - [`TransformReader`] - Transforms bytes pulled from a [`std::io::Read`]
//! - [`TransformWriter`] - Transforms bytes pushed into a [`std::io::Write`]

mod reader;
mod writer;

pub use reader::TransformReader;
pub use writer::TransformWriter;
