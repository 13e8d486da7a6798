//! Differential fuzz target: both portable kernels against the `adler` crate.

#![no_main]

use adler32::{Adler32, Checksum, __internal};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  let reference = adler::adler32_slice(data);

  assert_eq!(__internal::adler32_bytewise(1, data), reference, "bytewise mismatch");
  assert_eq!(__internal::adler32_batched(1, data), reference, "batched mismatch");
  assert_eq!(Adler32::checksum(data), reference, "dispatch mismatch");
});
