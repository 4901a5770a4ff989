//! Integration tests for chunked NDJSON reading: records arriving in
//! arbitrary pieces over a duplex pipe must come out whole and in order.

use serde::Deserialize;
use tokio::io::AsyncWriteExt;

use glossa_stream::RecordReader;

#[derive(Debug, Deserialize, PartialEq)]
struct Listing {
    name: String,
    size: u64,
}

#[tokio::test]
async fn test_records_split_across_writes() {
    let (mut tx, rx) = tokio::io::duplex(64);

    let writer = tokio::spawn(async move {
        // One record split mid-token, another split mid-escape-free string.
        tx.write_all(b"{\"name\":\"read").await.unwrap();
        tx.write_all(b"me.md\",\"size\":14}\n{\"name\":").await.unwrap();
        tx.write_all(b"\"main.rs\",\"size\":2048}\n").await.unwrap();
        // Dropping tx closes the stream.
    });

    let records: Vec<Listing> = RecordReader::new(rx).collect_records().await.unwrap();
    writer.await.unwrap();

    assert_eq!(
        records,
        vec![
            Listing {
                name: "readme.md".to_string(),
                size: 14,
            },
            Listing {
                name: "main.rs".to_string(),
                size: 2048,
            },
        ]
    );
}

#[tokio::test]
async fn test_single_byte_writes() {
    let (mut tx, rx) = tokio::io::duplex(8);
    let body = b"{\"name\":\"a\",\"size\":1}\n{\"name\":\"b\",\"size\":2}\n".to_vec();

    let writer = tokio::spawn(async move {
        for byte in body {
            tx.write_all(&[byte]).await.unwrap();
        }
    });

    let records: Vec<Listing> = RecordReader::new(rx).collect_records().await.unwrap();
    writer.await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "a");
    assert_eq!(records[1].name, "b");
}

#[tokio::test]
async fn test_unterminated_tail_after_close() {
    let (mut tx, rx) = tokio::io::duplex(64);

    let writer = tokio::spawn(async move {
        tx.write_all(b"{\"name\":\"a\",\"size\":1}\n{\"name\":\"tail\",\"size\":9}")
            .await
            .unwrap();
    });

    let records: Vec<Listing> = RecordReader::new(rx).collect_records().await.unwrap();
    writer.await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].name, "tail");
}
