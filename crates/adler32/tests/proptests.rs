//! Property-based tests for the accumulator.
//!
//! These check invariants that must hold for all inputs, not just specific
//! vectors.

use adler32::{Accumulator, Adler32, Checksum, ChecksumCombine, Radix, __internal};
use proptest::prelude::*;

// Test Strategies

/// Arbitrary byte vectors up to 16KB, enough to cross several NMAX blocks.
fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  prop::collection::vec(any::<u8>(), 0..16384)
}

/// Sorted, deduplicated split points ending at `len`.
fn arb_splits(len: usize, count: usize) -> impl Strategy<Value = Vec<usize>> {
  prop::collection::vec(0..=len, count).prop_map(move |mut splits| {
    splits.sort();
    splits.push(len);
    splits.dedup();
    splits
  })
}

fn data_with_splits() -> impl Strategy<Value = (Vec<u8>, Vec<usize>)> {
  arb_data().prop_flat_map(|data| {
    let len = data.len();
    (Just(data), arb_splits(len, 8))
  })
}

proptest! {
  #[test]
  fn chunking_invariance((data, splits) in data_with_splits()) {
    let mut acc = Accumulator::new();
    let mut prev = 0;
    for split in splits {
      acc.update(&data[prev..split]).unwrap();
      prev = split;
    }
    prop_assert_eq!(acc.digest(), Accumulator::with_data(&data).digest());
  }

  #[test]
  fn kernels_agree(data in arb_data(), seed in any::<u32>()) {
    prop_assert_eq!(
      __internal::adler32_batched(seed, &data),
      __internal::adler32_bytewise(seed, &data)
    );
  }

  #[test]
  fn combine_equals_concatenation(a in arb_data(), b in arb_data()) {
    let mut joined = a.clone();
    joined.extend_from_slice(&b);
    prop_assert_eq!(
      Adler32::combine(Adler32::checksum(&a), Adler32::checksum(&b), b.len() as u64),
      Adler32::checksum(&joined)
    );
  }

  #[test]
  fn resume_continues(a in arb_data(), b in arb_data()) {
    let mut acc = Accumulator::resume(Accumulator::with_data(&a).digest());
    acc.update(&b).unwrap();
    let mut joined = a;
    joined.extend_from_slice(&b);
    prop_assert_eq!(acc.digest(), Accumulator::with_data(&joined).digest());
  }

  #[test]
  fn encodings_round_trip(data in arb_data()) {
    let acc = Accumulator::with_data(&data);
    let digest = acc.digest();

    prop_assert_eq!(acc.digest_hex().len(), 8);
    prop_assert_eq!(u32::from_str_radix(acc.digest_hex(), 16).unwrap(), digest);
    prop_assert_eq!(acc.digest_bytes().unwrap(), digest.to_be_bytes());
    for radix in Radix::ALL {
      prop_assert_eq!(u32::from_str_radix(acc.digest_radix(radix), radix.radix()).unwrap(), digest);
    }
  }

  #[test]
  fn frozen_update_changes_nothing(data in arb_data(), extra in arb_data()) {
    let mut acc = Accumulator::with_data(&data);
    acc.freeze();
    let before = acc.digest();
    prop_assert!(acc.update(&extra).is_err());
    prop_assert_eq!(acc.digest(), before);
  }

  #[test]
  fn text_hashes_as_utf8(text in ".{0,64}") {
    prop_assert_eq!(
      Accumulator::with_data(text.as_str()).digest(),
      Accumulator::with_data(text.as_bytes()).digest()
    );
  }
}
