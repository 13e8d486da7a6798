//! The checksum accumulator: kernel state plus the freeze/cache policy.
//!
//! ```
//! use adler32::{Accumulator, Radix};
//!
//! let mut acc = Accumulator::new();
//! acc.update("Sh")?.update("eet")?.update("JS")?;
//! assert_eq!(acc.digest_hex(), "0A8C0297");
//! assert_eq!(acc.digest_radix(Radix::Base36), "2XCLUF");
//!
//! acc.freeze();
//! assert!(acc.update("more").is_err());
//! assert_eq!(acc.digest(), 0x0A8C_0297);
//! # Ok::<(), adler32::Error>(())
//! ```

use alloc::string::String;
use core::{cell::OnceCell, fmt};

use traits::{Checksum, ChecksumCombine};

use crate::{
  Adler32, Error,
  encoding::{self, Radix},
  octets::Octets,
};

/// Derived representations, filled on first read and dropped on every mutation.
#[derive(Clone, Debug, Default)]
struct Cache {
  digest: OnceCell<u32>,
  hex: OnceCell<String>,
  base16: OnceCell<String>,
  base32hex: OnceCell<String>,
  base36: OnceCell<String>,
  bytes: OnceCell<[u8; 4]>,
}

/// Incremental Adler-32 accumulator with a one-way freeze.
///
/// - Mutations (`update*`, `reset`, `combine`) fail with [`Error::Locked`]
///   once [`freeze`](Self::freeze) has been called, leaving state untouched.
/// - Reads never fail on a frozen accumulator and are memoised until the
///   next mutation.
///
/// The cache uses [`OnceCell`], so an `Accumulator` can move between threads
/// but cannot be shared by reference across them.
#[derive(Clone, Default)]
pub struct Accumulator {
  state: Adler32,
  locked: bool,
  cache: Cache,
}

impl Accumulator {
  /// An accumulator in the identity state (digest `1`).
  #[inline]
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// An accumulator that has already ingested `data`.
  #[must_use]
  pub fn with_data<D: Octets + ?Sized>(data: &D) -> Self {
    let mut acc = Self::new();
    acc.ingest(data);
    acc
  }

  /// An unlocked accumulator continuing from a previously computed digest.
  #[inline]
  #[must_use]
  pub fn resume(digest: u32) -> Self {
    Self {
      state: Adler32::resume(digest),
      ..Self::default()
    }
  }

  /// Append `data`.
  ///
  /// # Errors
  ///
  /// [`Error::Locked`] if the accumulator is frozen.
  pub fn update<D: Octets + ?Sized>(&mut self, data: &D) -> Result<&mut Self, Error> {
    self.ensure_unlocked()?;
    self.ingest(data);
    Ok(self)
  }

  /// Append the data whose checksum is `other`, `other_len` bytes long.
  ///
  /// # Errors
  ///
  /// [`Error::Locked`] if `self` is frozen. `other` may be frozen.
  pub fn combine(&mut self, other: &Self, other_len: u64) -> Result<&mut Self, Error> {
    self.ensure_unlocked()?;
    let combined = Adler32::combine(self.state.finalize(), other.state.finalize(), other_len);
    self.state = Adler32::resume(combined);
    self.cache = Cache::default();
    Ok(self)
  }

  /// Return to the identity state.
  ///
  /// # Errors
  ///
  /// [`Error::Locked`] if the accumulator is frozen.
  pub fn reset(&mut self) -> Result<&mut Self, Error> {
    self.ensure_unlocked()?;
    self.state.reset();
    self.cache = Cache::default();
    Ok(self)
  }

  /// Forbid any further mutation. Idempotent and irreversible.
  #[inline]
  pub fn freeze(&mut self) -> &mut Self {
    self.locked = true;
    self
  }

  #[inline]
  #[must_use]
  pub const fn is_frozen(&self) -> bool {
    self.locked
  }

  /// The running sums `(a, b)`.
  #[inline]
  #[must_use]
  pub const fn sums(&self) -> (u32, u32) {
    self.state.sums()
  }

  /// The 32-bit digest, `b * 65536 + a`.
  #[must_use]
  pub fn digest(&self) -> u32 {
    *self.cache.digest.get_or_init(|| self.state.finalize())
  }

  /// The digest as exactly 8 uppercase hex digits.
  #[must_use]
  pub fn digest_hex(&self) -> &str {
    self.cache.hex.get_or_init(|| encoding::hex_padded(self.digest()))
  }

  /// The digest as unpadded uppercase hex (same as radix 16).
  #[must_use]
  pub fn digest_hex_unpadded(&self) -> &str {
    self.digest_radix(Radix::Base16)
  }

  /// The digest in `radix`, uppercase and unpadded.
  #[must_use]
  pub fn digest_radix(&self, radix: Radix) -> &str {
    let cell = match radix {
      Radix::Base16 => &self.cache.base16,
      Radix::Base32Hex => &self.cache.base32hex,
      Radix::Base36 => &self.cache.base36,
    };
    cell.get_or_init(|| encoding::to_radix(self.digest(), radix))
  }

  /// The digest as 4 bytes, most significant first.
  ///
  /// The bytes are parsed pairwise out of [`digest_hex`](Self::digest_hex).
  ///
  /// # Errors
  ///
  /// [`Error::InvariantViolation`] if the padded hex is malformed. This
  /// cannot happen in a correct build and must not be ignored.
  pub fn digest_bytes(&self) -> Result<[u8; 4], Error> {
    if let Some(bytes) = self.cache.bytes.get() {
      return Ok(*bytes);
    }
    let bytes = encoding::hex_to_bytes(self.digest_hex())?;
    Ok(*self.cache.bytes.get_or_init(|| bytes))
  }

  /// The underlying kernel state.
  #[inline]
  #[must_use]
  pub const fn state(&self) -> &Adler32 {
    &self.state
  }

  #[inline]
  pub(crate) fn ensure_unlocked(&self) -> Result<(), Error> {
    if self.locked {
      return Err(Error::Locked);
    }
    Ok(())
  }

  /// Fold `data` into the sums and drop cached representations.
  fn ingest<D: Octets + ?Sized>(&mut self, data: &D) {
    let state = &mut self.state;
    data.for_each_chunk(&mut |chunk| state.update(chunk));
    self.cache = Cache::default();
  }
}

impl From<&str> for Accumulator {
  fn from(data: &str) -> Self {
    Self::with_data(data)
  }
}

impl From<&[u8]> for Accumulator {
  fn from(data: &[u8]) -> Self {
    Self::with_data(data)
  }
}

impl fmt::Display for Accumulator {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.digest_hex())
  }
}

impl fmt::Debug for Accumulator {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let (a, b) = self.state.sums();
    f.debug_struct("Accumulator")
      .field("a", &a)
      .field("b", &b)
      .field("locked", &self.locked)
      .finish()
  }
}
