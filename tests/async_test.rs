// Async adapter tests over tokio readers bridged with tokio-util compat
#![cfg(feature = "async-io")]

use crlfkit::{CrlfExpander, LfNormalizer, TransformConfig, transform_async};
use futures_util::StreamExt;
use tokio::io::AsyncWriteExt;
use tokio_util::compat::TokioAsyncReadCompatExt;

#[tokio::test]
async fn test_normalize_over_duplex() {
    let (mut tx, rx) = tokio::io::duplex(4);

    let writer = tokio::spawn(async move {
        for part in [&b"Subject: x\r"[..], &b"\n\r"[..], &b"\nbody\r"[..], &b"\n"[..]] {
            tx.write_all(part).await.unwrap();
        }
    });

    let config = TransformConfig::new(3, 2).unwrap();
    let mut stream = transform_async(rx.compat(), LfNormalizer::new(), config).unwrap();

    let mut out = Vec::new();
    while let Some(chunk) = stream.next().await {
        out.extend_from_slice(&chunk.unwrap());
    }
    writer.await.unwrap();

    assert_eq!(out, b"Subject: x\n\nbody\n");
}

#[tokio::test]
async fn test_expand_tokio_slice() {
    let data: &[u8] = b"one\ntwo\n";
    let config = TransformConfig::default();
    let stream = transform_async(data.compat(), CrlfExpander, config).unwrap();
    let chunks: Vec<_> = stream.collect().await;

    let mut out = Vec::new();
    for chunk in chunks {
        out.extend_from_slice(&chunk.unwrap());
    }
    assert_eq!(out, b"one\r\ntwo\r\n");
}
