use thiserror::Error;

/// Failures while reading newline-delimited JSON records.
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("stream read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("stream is not valid UTF-8")]
    Utf8,

    #[error("malformed record on line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}
