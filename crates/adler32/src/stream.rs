//! Async adapters over `futures` streams and tokio readers (`async` feature).
//!
//! Consumption is strictly sequential: one chunk is awaited, applied, then
//! the next is requested. Nothing is spawned. Dropping one of these futures
//! early leaves the accumulator with every chunk applied so far.

use std::{io, path::Path, vec, vec::Vec};

use futures_util::stream::{self, Stream, StreamExt};
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::{Accumulator, Error, config, octets::Octets};

impl Accumulator {
  /// Apply every chunk of `stream` in arrival order.
  ///
  /// # Errors
  ///
  /// - [`Error::Locked`] if frozen (checked before the stream is polled)
  /// - [`Error::SourceUnavailable`] for the first `Err` item; earlier chunks
  ///   stay applied and the stream is not polled again
  pub async fn update_from_stream<S, D, E>(&mut self, stream: S) -> Result<&mut Self, Error>
  where
    S: Stream<Item = Result<D, E>>,
    D: Octets,
    E: Into<io::Error>,
  {
    self.ensure_unlocked()?;
    let mut stream = core::pin::pin!(stream);
    let mut chunks = 0usize;
    while let Some(item) = stream.next().await {
      let chunk = item.map_err(|err| Error::SourceUnavailable(err.into()))?;
      self.update(&chunk)?;
      chunks += 1;
      log::trace!("adler32: applied stream chunk #{chunks}");
    }
    Ok(self)
  }

  /// A fresh accumulator driven by [`update_from_stream`](Self::update_from_stream).
  ///
  /// # Errors
  ///
  /// [`Error::SourceUnavailable`] for the first `Err` item.
  pub async fn from_stream<S, D, E>(stream: S) -> Result<Self, Error>
  where
    S: Stream<Item = Result<D, E>>,
    D: Octets,
    E: Into<io::Error>,
  {
    let mut acc = Self::new();
    acc.update_from_stream(stream).await?;
    Ok(acc)
  }

  /// Drain a tokio reader through [`update_from_stream`](Self::update_from_stream),
  /// one chunk of the configured read size at a time.
  ///
  /// `Interrupted` reads are re-issued.
  ///
  /// # Errors
  ///
  /// Same as [`update_from_reader`](Self::update_from_reader).
  pub async fn update_from_async_reader<R>(&mut self, reader: R) -> Result<&mut Self, Error>
  where
    R: AsyncRead + Unpin,
  {
    self
      .update_from_stream(read_chunks(reader, config::get().tunables.read_chunk_bytes))
      .await
  }

  /// Checksum the file at `path` with tokio, streaming its chunks through
  /// [`update_from_stream`](Self::update_from_stream).
  ///
  /// The file handle is owned by this future and closed on success, error or
  /// cancellation.
  ///
  /// # Errors
  ///
  /// [`Error::SourceUnavailable`] if the file cannot be opened or read.
  pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
    let path = path.as_ref();
    let file = tokio::fs::File::open(path).await?;
    log::debug!("adler32: opened {} for async checksumming", path.display());

    Self::from_stream(read_chunks(file, config::get().tunables.read_chunk_bytes)).await
  }
}

/// Turn `reader` into a stream of owned chunks of at most `chunk_bytes`.
///
/// Ends at the first zero-length read. A read error is yielded once and the
/// stream ends after it.
fn read_chunks<R>(reader: R, chunk_bytes: usize) -> impl Stream<Item = io::Result<Vec<u8>>>
where
  R: AsyncRead + Unpin,
{
  stream::unfold(Some(reader), move |state| async move {
    let Some(mut reader) = state else {
      return None;
    };
    let mut buf = vec![0u8; chunk_bytes];
    loop {
      match reader.read(&mut buf).await {
        Ok(0) => return None,
        Ok(n) => {
          buf.truncate(n);
          log::trace!("adler32: read async chunk of {n} bytes");
          return Some((Ok(buf), Some(reader)));
        }
        Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
        Err(err) => return Some((Err(err), None)),
      }
    }
  })
}

#[cfg(test)]
mod tests {
  use std::{
    pin::Pin,
    task::{Context, Poll},
  };

  use tokio::io::ReadBuf;

  use super::*;

  /// Yields `Interrupted` before every real read, then hands out `step` bytes.
  struct Flaky<'a> {
    data: &'a [u8],
    step: usize,
    interrupt: bool,
  }

  impl AsyncRead for Flaky<'_> {
    fn poll_read(mut self: Pin<&mut Self>, _: &mut Context<'_>, buf: &mut ReadBuf<'_>) -> Poll<io::Result<()>> {
      self.interrupt = !self.interrupt;
      if self.interrupt {
        return Poll::Ready(Err(io::ErrorKind::Interrupted.into()));
      }
      let n = self.step.min(buf.remaining()).min(self.data.len());
      let data = self.data;
      let (head, tail) = data.split_at(n);
      buf.put_slice(head);
      self.data = tail;
      Poll::Ready(Ok(()))
    }
  }

  struct Broken;

  impl AsyncRead for Broken {
    fn poll_read(self: Pin<&mut Self>, _: &mut Context<'_>, _: &mut ReadBuf<'_>) -> Poll<io::Result<()>> {
      Poll::Ready(Err(io::Error::other("device went away")))
    }
  }

  #[tokio::test]
  async fn chunks_respect_size_and_skip_interrupts() {
    let reader = Flaky {
      data: b"SheetJS",
      step: 5,
      interrupt: false,
    };
    let chunks: Vec<Vec<u8>> = read_chunks(reader, 3).map(Result::unwrap).collect().await;
    assert_eq!(chunks, [b"She".to_vec(), b"etJ".to_vec(), b"S".to_vec()]);
  }

  #[tokio::test]
  async fn read_error_ends_the_stream() {
    let items: Vec<io::Result<Vec<u8>>> = read_chunks(Broken, 16).collect().await;
    assert_eq!(items.len(), 1);
    assert!(items[0].is_err());
  }

  #[tokio::test]
  async fn async_reader_goes_through_stream_path() {
    let mut acc = Accumulator::new();
    acc
      .update_from_async_reader(Flaky {
        data: b"Wikipedia",
        step: 2,
        interrupt: false,
      })
      .await
      .unwrap();
    assert_eq!(acc.digest_hex(), "11E60398");

    let err = Accumulator::new().update_from_async_reader(Broken).await.unwrap_err();
    assert!(matches!(err, Error::SourceUnavailable(_)));
  }
}
