//! Fuzz target for the streaming accumulator.
//!
//! Arbitrary update partitions, interleaved reads and a final freeze must all
//! produce the one-shot digest.

#![no_main]

use adler32::{Accumulator, Adler32, Checksum, Radix};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
  /// Read an encoding after every chunk (exercises cache invalidation)
  read_between: bool,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let expected = Adler32::checksum(data);

  let mut acc = Accumulator::new();
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      let idx = chunk_idx.strict_rem(input.chunk_sizes.len());
      input.chunk_sizes[idx].strict_rem(8192).max(1)
    };

    let end = offset.strict_add(chunk_size).min(data.len());
    acc.update(&data[offset..end]).unwrap();
    if input.read_between {
      let _ = acc.digest_radix(Radix::Base36);
      let _ = acc.digest_hex();
    }
    offset = end;
    chunk_idx = chunk_idx.strict_add(1);
  }

  acc.freeze();
  assert!(acc.update(b"x").is_err(), "frozen accumulator accepted an update");
  assert_eq!(acc.digest(), expected, "adler32 streaming mismatch");
  assert_eq!(acc.digest_bytes().unwrap(), expected.to_be_bytes());
  assert_eq!(acc.digest_hex(), format!("{expected:08X}"));
});
