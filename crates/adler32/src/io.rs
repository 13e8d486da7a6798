//! Blocking reader and file adapters (`std`).
//!
//! These only move bytes; every byte still goes through
//! [`Accumulator::update`] or the [`ChecksumReader`] wrapper.

use std::{
  fs::File,
  io::{self, Read},
  path::Path,
  vec,
};

use traits::{Checksum, io::ChecksumReader};

use crate::{Accumulator, Adler32, Error, config};

impl Accumulator {
  /// Drain `reader` into the accumulator in chunks of
  /// [`Adler32Tunables::read_chunk_bytes`](crate::Adler32Tunables).
  ///
  /// `Interrupted` reads are re-issued. Chunks read before a failure stay
  /// applied.
  ///
  /// # Errors
  ///
  /// - [`Error::Locked`] if frozen (checked before the first read)
  /// - [`Error::SourceUnavailable`] on any other read failure
  pub fn update_from_reader<R: Read>(&mut self, mut reader: R) -> Result<&mut Self, Error> {
    self.ensure_unlocked()?;
    let mut buf = vec![0u8; config::get().tunables.read_chunk_bytes];
    let mut total = 0u64;
    loop {
      let n = match reader.read(&mut buf) {
        Ok(0) => break,
        Ok(n) => n,
        Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
        Err(err) => return Err(Error::SourceUnavailable(err)),
      };
      let chunk = buf.get(..n).ok_or_else(|| {
        Error::InvariantViolation(std::format!("reader reported {n} bytes into a {} byte buffer", buf.len()))
      })?;
      log::trace!("adler32: read chunk of {n} bytes");
      self.update(chunk)?;
      total += n as u64;
    }
    log::trace!("adler32: reader drained after {total} bytes");
    Ok(self)
  }

  /// Checksum everything `reader` yields.
  ///
  /// # Errors
  ///
  /// [`Error::SourceUnavailable`] on read failure.
  pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
    let mut acc = Self::new();
    acc.update_from_reader(reader)?;
    Ok(acc)
  }

  /// Checksum the file at `path` with blocking I/O.
  ///
  /// The file is closed on every exit path.
  ///
  /// # Errors
  ///
  /// [`Error::SourceUnavailable`] if the file cannot be opened or read.
  pub fn from_file_sync(path: impl AsRef<Path>) -> Result<Self, Error> {
    let path = path.as_ref();
    let file = File::open(path)?;
    log::debug!("adler32: opened {} for checksumming", path.display());

    let mut reader: ChecksumReader<File, Adler32> = Adler32::reader(file);
    let copied = io::copy(&mut reader, &mut io::sink())?;
    log::debug!("adler32: checksummed {copied} bytes from {}", path.display());

    Ok(Self::resume(reader.checksum()))
  }
}
