//! Transport-level errors.
//!
//! Tokenization itself never fails — malformed input degrades to `Unknown`
//! or unterminated-construct tokens. The only errors this crate surfaces
//! come from the transport around the tokenizer: the byte source failing to
//! read, or the pipeline being cancelled.

use thiserror::Error;

/// Failure of the producer/consumer transport in
/// [`tokenize_stream`](crate::tokenize_stream).
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The byte source failed while reading a chunk.
    #[error("failed to read from byte source")]
    Read(#[from] std::io::Error),

    /// The pipeline was cancelled before the stream was fully scanned.
    #[error("tokenization was cancelled")]
    Cancelled,
}
