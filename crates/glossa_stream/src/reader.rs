//! Async NDJSON record reading.

use std::collections::VecDeque;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::trace;

use crate::assembler::LineAssembler;
use crate::error::StreamError;

const READ_CHUNK: usize = 8 * 1024;

/// Reads one JSON record per line off an asynchronous byte stream.
///
/// Each complete line is parsed as one `T`; blank lines are skipped and
/// a trailing unterminated line is parsed at EOF. Records are yielded in
/// stream order.
///
/// ```
/// use glossa_stream::RecordReader;
/// use serde_json::Value;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let body: &[u8] = b"{\"dir\":\"src\"}\n{\"file\":\"main.rs\"}\n";
/// let mut reader = RecordReader::<_, Value>::new(body);
///
/// let mut names = Vec::new();
/// while let Some(record) = reader.next_record().await.unwrap() {
///     names.push(record);
/// }
/// assert_eq!(names.len(), 2);
/// # }
/// ```
pub struct RecordReader<R, T> {
    reader: R,
    assembler: LineAssembler,
    ready: VecDeque<String>,
    line: usize,
    eof: bool,
    _record: PhantomData<fn() -> T>,
}

impl<R, T> RecordReader<R, T>
where
    R: AsyncRead + Unpin,
    T: DeserializeOwned,
{
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            assembler: LineAssembler::new(),
            ready: VecDeque::new(),
            line: 0,
            eof: false,
            _record: PhantomData,
        }
    }

    /// The next record, or `Ok(None)` once the stream is exhausted.
    ///
    /// A malformed line surfaces as [`StreamError::Json`] with its line
    /// number; the reader stays usable and continues after it.
    pub async fn next_record(&mut self) -> Result<Option<T>, StreamError> {
        loop {
            if let Some(line) = self.ready.pop_front() {
                self.line += 1;
                trace!(line = self.line, bytes = line.len(), "record line complete");
                let record = serde_json::from_str(&line).map_err(|source| StreamError::Json {
                    line: self.line,
                    source,
                })?;
                return Ok(Some(record));
            }

            if self.eof {
                return Ok(None);
            }

            let mut chunk = [0u8; READ_CHUNK];
            let n = self.reader.read(&mut chunk).await?;
            if n == 0 {
                self.eof = true;
                if let Some(tail) = self.assembler.finish()? {
                    self.ready.push_back(tail);
                }
            } else {
                self.ready.extend(self.assembler.push(&chunk[..n])?);
            }
        }
    }

    /// Drain the remaining records into a vector.
    pub async fn collect_records(mut self) -> Result<Vec<T>, StreamError> {
        let mut records = Vec::new();
        while let Some(record) = self.next_record().await? {
            records.push(record);
        }
        Ok(records)
    }
}
