//! Adler-32 checksum combination.
//!
//! For `A || B`, with `n = len(B)`:
//!
//! ```text
//! a(A || B) = a(A) + a(B) - 1                      (mod 65521)
//! b(A || B) = b(A) + b(B) + n * (a(A) - 1)         (mod 65521)
//! ```
//!
//! Only `n mod 65521` matters, so combination is constant time.

use super::portable::{MOD, join, split};

/// Combine `adler_a = adler32(A)` and `adler_b = adler32(B)` into `adler32(A || B)`.
#[must_use]
pub const fn adler32_combine(adler_a: u32, adler_b: u32, len_b: u64) -> u32 {
  let (a1, b1) = split(adler_a);
  let (a2, b2) = split(adler_b);
  let rem = (len_b % MOD as u64) as u32;

  // rem, a1 < MOD, so the product fits in u64 comfortably and the remainder in u32.
  let mut sum2 = ((rem as u64 * a1 as u64) % MOD as u64) as u32;
  let mut sum1 = a1 + a2 + MOD - 1;
  sum2 += b1 + b2 + MOD - rem;

  if sum1 >= MOD {
    sum1 -= MOD;
  }
  if sum1 >= MOD {
    sum1 -= MOD;
  }
  if sum2 >= MOD << 1 {
    sum2 -= MOD << 1;
  }
  if sum2 >= MOD {
    sum2 -= MOD;
  }

  join(sum1, sum2)
}
