//! Accepted input types and how they become octets.
//!
//! Every input is reduced to an ordered byte sequence before it reaches the
//! kernel:
//!
//! | Input | Octets |
//! |-------|--------|
//! | `str`, `String` | UTF-8 encoding |
//! | `[u8]`, `[u8; N]`, `Vec<u8>` | as-is |
//! | `[u16]`, `[u32]`, `[u64]` (and array/`Vec` forms) | every byte of every element, native order |
//! | [`Words`] | every byte of every element, declared order |
//! | [`TypedArray`] | raw buffer, after width validation |
//!
//! Wide elements are always decomposed into all of their bytes; they are
//! never truncated to their low byte.

use alloc::{string::String, vec::Vec};

use crate::Error;

/// Stack buffer used to serialise wide elements before hashing.
const WORD_BUF: usize = 512;

/// Types an [`Accumulator`](crate::Accumulator) can ingest.
pub trait Octets {
  /// Call `sink` with the octets of `self`, in order, in one or more slices.
  fn for_each_chunk(&self, sink: &mut dyn FnMut(&[u8]));
}

impl<T: Octets + ?Sized> Octets for &T {
  #[inline]
  fn for_each_chunk(&self, sink: &mut dyn FnMut(&[u8])) {
    (**self).for_each_chunk(sink);
  }
}

impl Octets for str {
  #[inline]
  fn for_each_chunk(&self, sink: &mut dyn FnMut(&[u8])) {
    sink(self.as_bytes());
  }
}

impl Octets for String {
  #[inline]
  fn for_each_chunk(&self, sink: &mut dyn FnMut(&[u8])) {
    sink(self.as_bytes());
  }
}

impl Octets for [u8] {
  #[inline]
  fn for_each_chunk(&self, sink: &mut dyn FnMut(&[u8])) {
    sink(self);
  }
}

impl<const N: usize> Octets for [u8; N] {
  #[inline]
  fn for_each_chunk(&self, sink: &mut dyn FnMut(&[u8])) {
    sink(self);
  }
}

impl Octets for Vec<u8> {
  #[inline]
  fn for_each_chunk(&self, sink: &mut dyn FnMut(&[u8])) {
    sink(self);
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wide elements
// ─────────────────────────────────────────────────────────────────────────────

/// Byte order used to decompose wide elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ByteOrder {
  /// The platform's native order.
  #[default]
  Native,
  Little,
  Big,
}

mod private {
  pub trait Sealed {}
}

/// Fixed-width unsigned element wider than one byte.
pub trait Word: private::Sealed + Copy {
  /// Element width in bytes.
  const WIDTH: usize;

  /// Write the element's bytes into `out` (exactly `WIDTH` long).
  fn write_bytes(self, order: ByteOrder, out: &mut [u8]);
}

macro_rules! impl_word {
  ($($ty:ty),+) => {$(
    impl private::Sealed for $ty {}

    impl Word for $ty {
      const WIDTH: usize = core::mem::size_of::<$ty>();

      #[inline]
      fn write_bytes(self, order: ByteOrder, out: &mut [u8]) {
        let bytes = match order {
          ByteOrder::Native => self.to_ne_bytes(),
          ByteOrder::Little => self.to_le_bytes(),
          ByteOrder::Big => self.to_be_bytes(),
        };
        out.copy_from_slice(&bytes);
      }
    }

    impl Octets for [$ty] {
      #[inline]
      fn for_each_chunk(&self, sink: &mut dyn FnMut(&[u8])) {
        feed_words(self, ByteOrder::Native, sink);
      }
    }

    impl<const N: usize> Octets for [$ty; N] {
      #[inline]
      fn for_each_chunk(&self, sink: &mut dyn FnMut(&[u8])) {
        feed_words(self, ByteOrder::Native, sink);
      }
    }

    impl Octets for Vec<$ty> {
      #[inline]
      fn for_each_chunk(&self, sink: &mut dyn FnMut(&[u8])) {
        feed_words(self, ByteOrder::Native, sink);
      }
    }

    impl Octets for Words<'_, $ty> {
      #[inline]
      fn for_each_chunk(&self, sink: &mut dyn FnMut(&[u8])) {
        feed_words(self.words, self.order, sink);
      }
    }
  )+};
}

impl_word!(u16, u32, u64);

fn feed_words<W: Word>(words: &[W], order: ByteOrder, sink: &mut dyn FnMut(&[u8])) {
  let mut buf = [0u8; WORD_BUF];
  for group in words.chunks(WORD_BUF / W::WIDTH) {
    let mut filled = 0;
    for (word, slot) in group.iter().zip(buf.chunks_exact_mut(W::WIDTH)) {
      word.write_bytes(order, slot);
      filled += W::WIDTH;
    }
    if let Some(bytes) = buf.get(..filled) {
      sink(bytes);
    }
  }
}

/// A slice of wide elements with an explicit byte order.
///
/// ```
/// use adler32::{Accumulator, Words};
///
/// let be = Accumulator::with_data(&Words::big_endian(&[0x6162_u16, 0x6300]));
/// assert_eq!(be.digest(), Accumulator::with_data(b"abc\0").digest());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Words<'a, W> {
  words: &'a [W],
  order: ByteOrder,
}

impl<'a, W: Word> Words<'a, W> {
  #[must_use]
  pub const fn new(words: &'a [W], order: ByteOrder) -> Self {
    Self { words, order }
  }

  #[must_use]
  pub const fn native(words: &'a [W]) -> Self {
    Self::new(words, ByteOrder::Native)
  }

  #[must_use]
  pub const fn little_endian(words: &'a [W]) -> Self {
    Self::new(words, ByteOrder::Little)
  }

  #[must_use]
  pub const fn big_endian(words: &'a [W]) -> Self {
    Self::new(words, ByteOrder::Big)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dynamically typed arrays
// ─────────────────────────────────────────────────────────────────────────────

/// A raw buffer tagged with an element width decided at runtime.
///
/// This is the boundary where input types are checked dynamically: only 8,
/// 16, 32 and 64-bit elements are accepted, and the buffer must hold a whole
/// number of them. The bytes are hashed in their in-memory order.
#[derive(Clone, Copy, Debug)]
pub struct TypedArray<'a> {
  element_bits: u32,
  raw: &'a [u8],
}

impl<'a> TypedArray<'a> {
  /// Validate `raw` as an array of `element_bits`-wide elements.
  ///
  /// # Errors
  ///
  /// [`Error::UnsupportedInputType`] when the width is not 8/16/32/64 or the
  /// buffer length is not a multiple of the element size.
  pub fn new(element_bits: u32, raw: &'a [u8]) -> Result<Self, Error> {
    let width = match element_bits {
      8 => 1,
      16 => 2,
      32 => 4,
      64 => 8,
      _ => 0,
    };
    if width == 0 || raw.len() % width != 0 {
      return Err(Error::UnsupportedInputType {
        element_bits,
        byte_len: raw.len(),
      });
    }
    Ok(Self { element_bits, raw })
  }

  #[must_use]
  pub const fn element_bits(&self) -> u32 {
    self.element_bits
  }

  /// Number of elements.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.raw.len() / (self.element_bits as usize / 8)
  }

  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.raw.is_empty()
  }
}

impl Octets for TypedArray<'_> {
  #[inline]
  fn for_each_chunk(&self, sink: &mut dyn FnMut(&[u8])) {
    sink(self.raw);
  }
}

#[cfg(test)]
mod tests {
  use alloc::{string::ToString, vec, vec::Vec};

  use super::*;

  fn collect<T: Octets + ?Sized>(data: &T) -> Vec<u8> {
    let mut out = Vec::new();
    data.for_each_chunk(&mut |chunk| out.extend_from_slice(chunk));
    out
  }

  #[test]
  fn text_is_utf8() {
    assert_eq!(collect("\u{2603}"), vec![0xE2, 0x98, 0x83]);
    assert_eq!(collect(&"abc".to_string()), b"abc".to_vec());
  }

  #[test]
  fn wide_elements_keep_every_byte() {
    assert_eq!(collect(&Words::big_endian(&[0x0102_u16, 0x0304])), vec![1, 2, 3, 4]);
    assert_eq!(collect(&Words::little_endian(&[0x0102_0304_u32])), vec![4, 3, 2, 1]);
    assert_eq!(
      collect(&Words::big_endian(&[0x0102_0304_0506_0708_u64])),
      vec![1, 2, 3, 4, 5, 6, 7, 8]
    );
  }

  #[test]
  fn native_order_matches_to_ne_bytes() {
    let words = [0xBEEF_u16, 0x1234, 0xFFFF];
    let expected: Vec<u8> = words.iter().flat_map(|w| w.to_ne_bytes()).collect();
    assert_eq!(collect(&words), expected);
    assert_eq!(collect(&words[..]), expected);
    assert_eq!(collect(&words.to_vec()), expected);
  }

  #[test]
  fn long_word_slices_span_several_buffers() {
    let words: Vec<u64> = (0..1000).collect();
    let expected: Vec<u8> = words.iter().flat_map(|w| w.to_be_bytes()).collect();
    assert_eq!(collect(&Words::big_endian(&words)), expected);
  }

  #[test]
  fn typed_array_validation() {
    assert!(TypedArray::new(8, &[1, 2, 3]).is_ok());
    assert_eq!(TypedArray::new(16, &[1, 2, 3, 4]).unwrap().len(), 2);
    assert!(TypedArray::new(64, &[]).unwrap().is_empty());

    let err = TypedArray::new(24, &[0; 6]).unwrap_err();
    assert!(matches!(
      err,
      Error::UnsupportedInputType {
        element_bits: 24,
        byte_len: 6
      }
    ));
    assert!(TypedArray::new(32, &[0; 6]).is_err());
  }

  #[test]
  fn typed_array_hashes_raw_bytes() {
    let raw = 0x0A0B_0C0D_u32.to_ne_bytes();
    let typed = TypedArray::new(32, &raw).unwrap();
    assert_eq!(collect(&typed), collect(&[0x0A0B_0C0D_u32]));
  }
}
