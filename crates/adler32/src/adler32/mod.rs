//! Adler-32 kernel state.
//!
//! [`Adler32`] is the raw algorithm: two modular sums behind the
//! [`Checksum`] / [`ChecksumCombine`] traits, with no policy attached. The
//! lock and cache live one layer up in [`Accumulator`](crate::Accumulator).

pub mod config;
mod combine;
pub(crate) mod portable;

use traits::{Checksum, ChecksumCombine};

pub use self::{
  combine::adler32_combine,
  config::{Adler32Config, Adler32Force, Adler32Tunables},
  portable::{MOD, NMAX},
};
use self::portable::{adler32_batched, adler32_bytewise};

/// Kernel signature: packed checksum in, packed checksum out.
pub type Adler32Fn = fn(u32, &[u8]) -> u32;

/// Packed checksum of the empty input (`a = 1`, `b = 0`).
pub const INITIAL: u32 = 1;

// ─────────────────────────────────────────────────────────────────────────────
// Kernel Selection
// ─────────────────────────────────────────────────────────────────────────────

const BYTEWISE: (&str, Adler32Fn) = ("portable/bytewise", adler32_bytewise);
const BATCHED: (&str, Adler32Fn) = ("portable/nmax", adler32_batched);

#[inline]
fn select(config: Adler32Config, len: usize) -> (&'static str, Adler32Fn) {
  match config.force {
    Adler32Force::Bytewise => BYTEWISE,
    Adler32Force::Batched => BATCHED,
    Adler32Force::Auto if len >= config.tunables.bytewise_to_batched => BATCHED,
    Adler32Force::Auto => BYTEWISE,
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Adler-32
// ─────────────────────────────────────────────────────────────────────────────

/// Adler-32 checksum (RFC 1950).
///
/// # Properties
///
/// - **Modulus**: 65521
/// - **Initial value**: 1 (`a = 1`, `b = 0`)
/// - **Output**: `(b << 16) | a`
///
/// # Example
///
/// ```
/// use adler32::{Adler32, Checksum};
///
/// assert_eq!(Adler32::checksum(b"Wikipedia"), 0x11E6_0398);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Adler32 {
  a: u32,
  b: u32,
}

impl Adler32 {
  /// Create a hasher that continues from a previous checksum.
  ///
  /// Halves that are not reduced modulo 65521 are reduced first.
  #[inline]
  #[must_use]
  pub const fn resume(adler: u32) -> Self {
    let (a, b) = portable::split(adler);
    Self { a, b }
  }

  /// The two running sums `(a, b)`, both in `[0, 65520]`.
  #[inline]
  #[must_use]
  pub const fn sums(&self) -> (u32, u32) {
    (self.a, self.b)
  }

  /// The kernel used for inputs without a length hint.
  #[must_use]
  pub fn backend_name() -> &'static str {
    Self::kernel_name_for_len(usize::MAX)
  }

  /// Returns the kernel name that the selector would choose for `len`.
  #[must_use]
  pub fn kernel_name_for_len(len: usize) -> &'static str {
    select(config::get(), len).0
  }

  /// Get the effective configuration (overrides + thresholds).
  #[must_use]
  pub fn config() -> Adler32Config {
    config::get()
  }
}

impl Default for Adler32 {
  #[inline]
  fn default() -> Self {
    Self::resume(INITIAL)
  }
}

impl Checksum for Adler32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  #[inline]
  fn with_initial(initial: u32) -> Self {
    Self::resume(initial)
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    if data.is_empty() {
      return;
    }
    let (_, kernel) = select(config::get(), data.len());
    *self = Self::resume(kernel(self.finalize(), data));
  }

  #[inline]
  fn finalize(&self) -> u32 {
    portable::join(self.a, self.b)
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }
}

impl ChecksumCombine for Adler32 {
  fn combine(sum_a: u32, sum_b: u32, len_b: u64) -> u32 {
    adler32_combine(sum_a, sum_b, len_b)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  const TEST_DATA: &[u8] = b"Wikipedia";

  #[test]
  fn test_adler32_checksum() {
    assert_eq!(Adler32::checksum(TEST_DATA), 0x11E6_0398);
  }

  #[test]
  fn test_adler32_empty() {
    assert_eq!(Adler32::checksum(&[]), INITIAL);
    assert_eq!(Adler32::new().sums(), (1, 0));
  }

  #[test]
  fn test_adler32_streaming() {
    let oneshot = Adler32::checksum(TEST_DATA);

    let mut hasher = Adler32::new();
    for chunk in TEST_DATA.chunks(2) {
      hasher.update(chunk);
    }
    assert_eq!(hasher.finalize(), oneshot);
  }

  #[test]
  fn test_adler32_resume() {
    let (a, b) = TEST_DATA.split_at(4);
    let mut hasher = Adler32::resume(Adler32::checksum(a));
    hasher.update(b);
    assert_eq!(hasher.finalize(), Adler32::checksum(TEST_DATA));
  }

  #[test]
  fn test_adler32_combine() {
    let (a, b) = TEST_DATA.split_at(3);
    let combined = Adler32::combine(Adler32::checksum(a), Adler32::checksum(b), b.len() as u64);
    assert_eq!(combined, Adler32::checksum(TEST_DATA));
  }

  #[test]
  fn test_adler32_reset() {
    let mut hasher = Adler32::new();
    hasher.update(b"some data");
    hasher.reset();
    assert_eq!(hasher, Adler32::new());
  }

  #[test]
  fn test_adler32_vectored() {
    assert_eq!(
      Adler32::checksum_vectored(&[b"Wiki", b"", b"pedia"]),
      Adler32::checksum(TEST_DATA)
    );
  }

  #[test]
  fn test_select_by_length() {
    let config = Adler32Config::default();
    let threshold = config.tunables.bytewise_to_batched;
    assert_eq!(select(config, 0).0, "portable/bytewise");
    assert_eq!(select(config, threshold - 1).0, "portable/bytewise");
    assert_eq!(select(config, threshold).0, "portable/nmax");

    let forced = Adler32Config {
      force: Adler32Force::Bytewise,
      ..config
    };
    assert_eq!(select(forced, usize::MAX).0, "portable/bytewise");
  }
}
