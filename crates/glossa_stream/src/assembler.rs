//! Push-based line assembly over arbitrary byte chunks.

use crate::error::StreamError;

/// Splits an incoming byte stream on newline boundaries, buffering any
/// trailing partial line until the next push completes it.
///
/// Chunk boundaries carry no meaning: a line split across ten pushes
/// comes out identical to one arriving whole. A trailing `\r` is
/// stripped (CRLF input), blank lines are discarded, and bytes must be
/// valid UTF-8 once a line is complete.
#[derive(Debug, Default)]
pub struct LineAssembler {
    carry: Vec<u8>,
}

impl LineAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk; returns every line completed by it, in order.
    pub fn push(&mut self, chunk: &[u8]) -> Result<Vec<String>, StreamError> {
        let mut lines = Vec::new();
        for &byte in chunk {
            if byte == b'\n' {
                if let Some(line) = self.take_carry()? {
                    lines.push(line);
                }
            } else {
                self.carry.push(byte);
            }
        }
        Ok(lines)
    }

    /// Finish the stream: yields the unterminated trailing line, if any.
    pub fn finish(&mut self) -> Result<Option<String>, StreamError> {
        self.take_carry()
    }

    /// Bytes currently buffered waiting for a newline.
    pub fn pending(&self) -> usize {
        self.carry.len()
    }

    fn take_carry(&mut self) -> Result<Option<String>, StreamError> {
        let mut raw = std::mem::take(&mut self.carry);
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        if raw.is_empty() {
            return Ok(None);
        }
        let line = String::from_utf8(raw).map_err(|_| StreamError::Utf8)?;
        Ok(Some(line))
    }
}
