//! Producer/consumer transport around the tokenizer.
//!
//! [`tokenize_stream`] runs two cooperating stages: a *filler* that reads
//! chunks from an [`AsyncRead`] byte source, and a *scanner* that feeds the
//! [`Tokenizer`](crate::Tokenizer) and drives the visitor. They are joined by
//! a bounded channel, so a slow consumer suspends the filler (backpressure)
//! and an empty buffer suspends the scanner. The tokenizer loop itself never
//! suspends; only this transport does.
//!
//! Exactly one filler and one scanner exist per invocation; the channel is a
//! single-producer/single-consumer hand-off, and chunks are consumed in the
//! exact order they were read so line/column accounting stays exact.

use log::{debug, trace};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::error::PipelineError;
use crate::lexer::Tokenizer;
use crate::tokens::TokenVisitor;

/// Tuning knobs for the transport.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Maximum bytes read from the source per chunk.
    pub read_capacity: usize,
    /// Number of in-flight chunks before the filler suspends.
    pub channel_capacity: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            read_capacity: 512,
            channel_capacity: 8,
        }
    }
}

/// Tokenize a chunked byte source, delivering tokens to `visitor` in source
/// order.
///
/// The filler signals end-of-input by closing the channel after its last
/// successful read; the scanner then performs a final drain pass before
/// returning. Cancelling `cancel` aborts both stages promptly without
/// leaving either blocked on the other.
///
/// A read error from the source takes precedence in the returned result, but
/// the scanner still drains every chunk that arrived before the failure.
pub async fn tokenize_stream<R, V>(
    reader: R,
    visitor: &mut V,
    options: PipelineOptions,
    cancel: CancellationToken,
) -> Result<(), PipelineError>
where
    R: AsyncRead + Unpin,
    V: TokenVisitor,
{
    let (sender, receiver) = mpsc::channel::<Vec<u8>>(options.channel_capacity);

    let fill = fill_pipe(reader, sender, options.read_capacity, cancel.clone());
    let scan = scan_pipe(receiver, visitor, cancel);

    let (fill_result, scan_result) = tokio::join!(fill, scan);
    fill_result.and(scan_result)
}

async fn fill_pipe<R: AsyncRead + Unpin>(
    mut reader: R,
    sender: mpsc::Sender<Vec<u8>>,
    read_capacity: usize,
    cancel: CancellationToken,
) -> Result<(), PipelineError> {
    loop {
        let mut chunk = vec![0u8; read_capacity];
        let read = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(PipelineError::Cancelled),
            read = reader.read(&mut chunk) => read?,
        };
        if read == 0 {
            debug!("filler reached end of byte source");
            break;
        }
        chunk.truncate(read);
        trace!(bytes = read; "filler publishing chunk");

        let sent = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(PipelineError::Cancelled),
            sent = sender.send(chunk) => sent,
        };
        if sent.is_err() {
            // Scanner hung up; nothing left to feed.
            break;
        }
    }
    // Dropping the sender is the end-of-input signal.
    Ok(())
}

async fn scan_pipe<V: TokenVisitor>(
    mut receiver: mpsc::Receiver<Vec<u8>>,
    visitor: &mut V,
    cancel: CancellationToken,
) -> Result<(), PipelineError> {
    let mut tokenizer = Tokenizer::new();

    loop {
        let chunk = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(PipelineError::Cancelled),
            chunk = receiver.recv() => chunk,
        };
        let Some(chunk) = chunk else {
            break;
        };
        tokenizer.push_chunk(chunk);
        while let Some(token) = tokenizer.next_token(false) {
            if token.kind.is_significant() {
                visitor.visit(token);
            }
        }
    }

    debug!("scanner draining after end of input");
    while let Some(token) = tokenizer.next_token(true) {
        if token.kind.is_significant() {
            visitor.visit(token);
        }
    }
    Ok(())
}
