//! Error taxonomy for the accumulator and its adapters.
//!
//! | Variant | Class | Recovery |
//! |---------|-------|----------|
//! | [`Error::Locked`] | misuse | build a fresh [`Accumulator`](crate::Accumulator) |
//! | [`Error::UnsupportedInputType`] | misuse | pass 8/16/32/64-bit elements |
//! | [`Error::UnsupportedRadix`] | misuse | use 16, 32 or 36 |
//! | [`Error::SourceUnavailable`] | environment | inspect the wrapped I/O error |
//! | [`Error::InvariantViolation`] | defect | none; report verbatim |
//!
//! Nothing in this crate retries: checksumming is deterministic, so the same
//! input fails the same way.

use alloc::string::String;
use core::fmt;

/// Errors returned by [`Accumulator`](crate::Accumulator) and the stream/file adapters.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
  /// The accumulator was frozen; mutation is no longer allowed.
  Locked,

  /// A dynamically typed array could not be interpreted as octets.
  UnsupportedInputType {
    /// Declared element width in bits.
    element_bits: u32,
    /// Length of the raw buffer in bytes.
    byte_len: usize,
  },

  /// Only radix 16, 32 (base32hex) and 36 are supported.
  UnsupportedRadix(u32),

  /// The byte source could not be opened or read.
  #[cfg(feature = "std")]
  SourceUnavailable(std::io::Error),

  /// An internal invariant broke. This is a bug, never user error.
  InvariantViolation(String),
}

impl Error {
  /// `true` for [`Error::InvariantViolation`].
  #[inline]
  #[must_use]
  pub const fn is_defect(&self) -> bool {
    matches!(self, Self::InvariantViolation(_))
  }
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Locked => f.write_str("accumulator is frozen"),
      Self::UnsupportedInputType {
        element_bits,
        byte_len,
      } => write!(
        f,
        "unsupported input type: {byte_len} bytes of {element_bits}-bit elements"
      ),
      Self::UnsupportedRadix(radix) => write!(f, "unsupported radix {radix}: expected 16, 32 or 36"),
      #[cfg(feature = "std")]
      Self::SourceUnavailable(err) => write!(f, "byte source unavailable: {err}"),
      Self::InvariantViolation(what) => write!(f, "internal invariant violated: {what}"),
    }
  }
}

impl core::error::Error for Error {
  fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
    match self {
      #[cfg(feature = "std")]
      Self::SourceUnavailable(err) => Some(err),
      _ => None,
    }
  }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
  fn from(err: std::io::Error) -> Self {
    Self::SourceUnavailable(err)
  }
}

#[cfg(test)]
mod tests {
  use alloc::{format, string::ToString};
  use core::error::Error as _;

  use super::*;

  #[test]
  fn display_messages() {
    assert_eq!(Error::Locked.to_string(), "accumulator is frozen");
    assert_eq!(
      Error::UnsupportedRadix(10).to_string(),
      "unsupported radix 10: expected 16, 32 or 36"
    );
    assert_eq!(
      Error::UnsupportedInputType {
        element_bits: 24,
        byte_len: 6
      }
      .to_string(),
      "unsupported input type: 6 bytes of 24-bit elements"
    );
    assert_eq!(
      Error::InvariantViolation("hex was 9 chars".into()).to_string(),
      "internal invariant violated: hex was 9 chars"
    );
  }

  #[test]
  fn debug_impl() {
    assert_eq!(format!("{:?}", Error::Locked), "Locked");
  }

  #[test]
  fn only_invariant_violation_is_a_defect() {
    assert!(Error::InvariantViolation(String::new()).is_defect());
    assert!(!Error::Locked.is_defect());
    assert!(!Error::UnsupportedRadix(2).is_defect());
  }

  #[cfg(feature = "std")]
  #[test]
  fn source_unavailable_exposes_io_error() {
    let err = Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "missing.bin"));
    assert!(err.to_string().starts_with("byte source unavailable: "));
    let source = err.source().expect("io source");
    assert_eq!(source.to_string(), "missing.bin");
  }

  #[test]
  fn trait_bounds() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    fn assert_error<T: core::error::Error>() {}

    assert_send::<Error>();
    assert_sync::<Error>();
    assert_error::<Error>();
    assert!(Error::Locked.source().is_none());
  }
}
