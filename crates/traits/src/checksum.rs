//! Non-cryptographic checksum traits.
//!
//! - **Streaming**: incremental updates, one-shot helpers built on top
//! - **Composable**: checksums of adjacent buffers can be combined without
//!   revisiting the data

use core::fmt::Debug;

/// Non-cryptographic checksum algorithm.
///
/// # Usage
///
/// ```rust,ignore
/// use adler32::{Adler32, Checksum};
///
/// // One-shot
/// let sum = Adler32::checksum(b"Wikipedia");
///
/// // Streaming
/// let mut hasher = Adler32::new();
/// hasher.update(b"Wiki");
/// hasher.update(b"pedia");
/// assert_eq!(hasher.finalize(), sum);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent
/// - `reset()` must restore the hasher to its initial state
/// - `with_initial(finalize())` must resume exactly where the hasher left off
pub trait Checksum: Clone + Default {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// The checksum output type.
  type Output: Copy + Eq + Debug + Default;

  /// Create a new hasher in the identity state.
  #[must_use]
  fn new() -> Self;

  /// Create a hasher that continues from a previously finalized value.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Update the hasher with additional data.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers, in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Return the checksum of everything processed so far.
  ///
  /// Does not consume the hasher; further updates keep accumulating.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its identity state.
  fn reset(&mut self);

  /// Compute the checksum of `data` in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the checksum of several buffers in one shot.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Wrap a reader so every byte read through it is checksummed.
  ///
  /// ```rust,ignore
  /// use std::fs::File;
  ///
  /// let mut reader = Adler32::reader(File::open("data.bin")?);
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// println!("{:08X}", reader.checksum());
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::ChecksumReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::ChecksumReader::new(inner)
  }
}

/// Checksums whose values for adjacent buffers can be merged.
///
/// Given `sum_a = checksum(A)`, `sum_b = checksum(B)` and `len(B)`, `combine`
/// returns `checksum(A || B)` without touching the data again. For position
/// dependent sums like Adler-32 this is constant time: only `len(B) mod p`
/// matters.
pub trait ChecksumCombine: Checksum {
  /// Combine two checksums.
  ///
  /// * `sum_a` - Checksum of the first part (A)
  /// * `sum_b` - Checksum of the second part (B)
  /// * `len_b` - Length of the second part in bytes
  #[must_use]
  fn combine(sum_a: Self::Output, sum_b: Self::Output, len_b: u64) -> Self::Output;
}
