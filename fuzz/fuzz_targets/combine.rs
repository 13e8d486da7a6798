//! Fuzz target for Adler-32 combine.
//!
//! Combining per-segment checksums over arbitrary splits must equal the
//! checksum of the whole buffer.

#![no_main]

use adler32::{Accumulator, Adler32, Checksum, ChecksumCombine};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  splits: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let expected = Adler32::checksum(data);

  // Normalize splits to valid range and sort
  let max_split = data.len().strict_add(1);
  let mut splits: Vec<usize> = input.splits.iter().map(|s| (*s).strict_rem(max_split)).collect();
  splits.push(data.len());
  splits.sort();
  splits.dedup();

  let mut combined = Adler32::checksum(&[]);
  let mut acc = Accumulator::new();
  let mut prev = 0;
  for split in splits {
    let segment = &data[prev..split];
    combined = Adler32::combine(combined, Adler32::checksum(segment), segment.len() as u64);
    acc.combine(&Accumulator::with_data(segment), segment.len() as u64).unwrap();
    prev = split;
  }

  assert_eq!(combined, expected, "adler32 combine mismatch");
  assert_eq!(acc.digest(), expected, "accumulator combine mismatch");
});
