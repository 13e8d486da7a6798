//! Digest encodings.
//!
//! - [`hex_padded`]: canonical form, 8 uppercase hex digits
//! - [`to_radix`]: unpadded uppercase text in base 16, 32 (RFC 4648 §7
//!   "base32hex", digits `0-9A-V`) or 36
//! - [`hex_to_bytes`]: 4 bytes, most significant first, parsed back out of
//!   the padded hex form

use alloc::{format, string::String, vec::Vec};

use crate::Error;

/// Length of the padded hex digest.
pub const HEX_LEN: usize = 8;

/// Supported text radixes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Radix {
  /// Hexadecimal, `0-9A-F`.
  Base16,
  /// RFC 4648 §7 extended hex alphabet, `0-9A-V`.
  Base32Hex,
  /// `0-9A-Z`.
  Base36,
}

impl Radix {
  pub const ALL: [Self; 3] = [Self::Base16, Self::Base32Hex, Self::Base36];

  /// The numeric base.
  #[inline]
  #[must_use]
  pub const fn radix(self) -> u32 {
    match self {
      Self::Base16 => 16,
      Self::Base32Hex => 32,
      Self::Base36 => 36,
    }
  }
}

impl TryFrom<u32> for Radix {
  type Error = Error;

  fn try_from(radix: u32) -> Result<Self, Error> {
    match radix {
      16 => Ok(Self::Base16),
      32 => Ok(Self::Base32Hex),
      36 => Ok(Self::Base36),
      other => Err(Error::UnsupportedRadix(other)),
    }
  }
}

/// `0-9` then `A-Z`; `digit` must be below 36.
#[inline]
const fn digit_char(digit: u8) -> char {
  if digit < 10 {
    (b'0' + digit) as char
  } else {
    (b'A' + (digit - 10)) as char
  }
}

/// Render `value` in `radix`, uppercase, without padding.
#[must_use]
pub fn to_radix(value: u32, radix: Radix) -> String {
  let base = radix.radix();
  let mut digits = Vec::with_capacity(8);
  let mut rest = value;
  loop {
    digits.push(digit_char((rest % base) as u8));
    rest /= base;
    if rest == 0 {
      break;
    }
  }
  digits.iter().rev().collect()
}

/// Render `value` as exactly [`HEX_LEN`] uppercase hex digits.
#[must_use]
pub fn hex_padded(value: u32) -> String {
  format!("{value:08X}")
}

/// Split a padded hex digest into byte pairs and parse each one.
///
/// # Errors
///
/// [`Error::InvariantViolation`] if `hex` is not [`HEX_LEN`] characters or a
/// pair is not valid hexadecimal. Callers only pass [`hex_padded`] output, so
/// either case means a bug in this crate.
pub fn hex_to_bytes(hex: &str) -> Result<[u8; 4], Error> {
  if hex.len() != HEX_LEN {
    return Err(Error::InvariantViolation(format!(
      "padded hex digest {hex:?} has {} characters, expected {HEX_LEN}",
      hex.len()
    )));
  }

  let mut out = [0u8; 4];
  for (index, byte) in out.iter_mut().enumerate() {
    let pair = hex
      .get(index * 2..index * 2 + 2)
      .ok_or_else(|| Error::InvariantViolation(format!("hex digest {hex:?} is not ASCII")))?;
    *byte = u8::from_str_radix(pair, 16)
      .map_err(|err| Error::InvariantViolation(format!("hex pair {pair:?} in {hex:?}: {err}")))?;
  }
  Ok(out)
}
