//! Incremental newline-delimited JSON (NDJSON) reading
//!
//! Directory listings and similar long-running responses arrive as one
//! JSON record per line over an asynchronous byte stream. This crate
//! provides the two halves of that pattern:
//!
//! - [`LineAssembler`]: push bytes in arbitrary chunks, get complete
//!   lines out, with the trailing partial line carried over between
//!   pushes.
//! - [`RecordReader`]: drive an `AsyncRead` through the assembler and
//!   parse each complete line as one record.
//!
//! Blank lines are discarded, a final unterminated line is still parsed
//! at end of stream, and malformed records report their line number.

mod assembler;
mod error;
mod reader;

pub use assembler::LineAssembler;
pub use error::StreamError;
pub use reader::RecordReader;
