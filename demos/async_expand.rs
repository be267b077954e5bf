//! Async example: expand a file to CRLF with tokio.
//!
//! Run with:
//!     cargo run --example async_expand --features async-io -- <path>

use futures_util::StreamExt;
use tokio::io::AsyncWriteExt;
use tokio_util::compat::TokioAsyncReadCompatExt;

use crlfkit::{CrlfExpander, TransformConfig, transform_async};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .ok_or("usage: async_expand <path>")?;

    let file = tokio::fs::File::open(&path).await?;
    let config = TransformConfig::default().with_src_buffer_size(16 * 1024);
    let mut stream = transform_async(file.compat(), CrlfExpander, config)?;

    let mut stdout = tokio::io::stdout();
    let mut total = 0usize;
    while let Some(bytes) = stream.next().await {
        let bytes = bytes?;
        total += bytes.len();
        stdout.write_all(&bytes).await?;
    }
    stdout.flush().await?;

    eprintln!("{}: {} bytes after expansion", path, total);
    Ok(())
}
