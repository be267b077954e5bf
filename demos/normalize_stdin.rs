//! Normalizes stdin to LF line endings and writes the result to stdout.
//!
//! Run with:
//!     printf 'a\r\nb\rc\n' | cargo run --example normalize_stdin

use std::io::{self, Read, Write};

use crlfkit::{LfNormalizer, TransformReader};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    let mut reader = TransformReader::new(stdin, LfNormalizer::new());
    let mut buf = [0u8; 8 * 1024];
    let mut total = 0usize;

    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        stdout.write_all(&buf[..n])?;
        total += n;
    }
    stdout.flush()?;

    eprintln!("wrote {} bytes", total);
    Ok(())
}
