//! Asynchronous stream checksums.
//!
//! The only suspension point is the chunk read. Cancellation is observed
//! between chunks: a chunk is either folded into the register completely or
//! not at all.

use polycrc_core::{ChecksumAlgorithm, ChecksumIterator, Error, Result, STREAM_CHUNK_SIZE};
use std::io::ErrorKind;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Checksum of everything `reader` yields, read in 4096-byte chunks.
///
/// Produces the same value as
/// [`ChecksumAlgorithm::compute_checksum_reader`] for the same bytes.
/// Fails with [`Error::Cancelled`] if `cancel` fires before the stream is
/// exhausted.
pub async fn compute_checksum_async<A, R>(
    algorithm: &A,
    reader: R,
    cancel: &CancellationToken,
) -> Result<A::Output>
where
    A: ChecksumAlgorithm,
    R: AsyncRead + Unpin,
{
    compute_checksum_async_chunked(algorithm, reader, cancel, STREAM_CHUNK_SIZE).await
}

/// Like [`compute_checksum_async`] with an explicit chunk size.
pub async fn compute_checksum_async_chunked<A, R>(
    algorithm: &A,
    mut reader: R,
    cancel: &CancellationToken,
    chunk_size: usize,
) -> Result<A::Output>
where
    A: ChecksumAlgorithm,
    R: AsyncRead + Unpin,
{
    if chunk_size == 0 {
        return Err(Error::InvalidChunkSize);
    }

    let mut iterator = algorithm.create_iterator();
    let mut buf = vec![0u8; chunk_size];
    let mut total: u64 = 0;
    let mut chunks: u64 = 0;

    loop {
        if cancel.is_cancelled() {
            debug!(bytes = total, chunks, "Checksum cancelled");
            return Err(Error::Cancelled);
        }

        let read = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                debug!(bytes = total, chunks, "Checksum cancelled during read");
                return Err(Error::Cancelled);
            }
            read = reader.read(&mut buf) => read,
        };

        match read {
            Ok(0) => break,
            Ok(n) => {
                iterator.compute_block(&buf[..n]);
                total += n as u64;
                chunks += 1;
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    debug!(bytes = total, chunks, "Checksum stream complete");
    Ok(iterator.compute_final())
}
