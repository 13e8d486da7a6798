//! Portable Adler-32 kernels.
//!
//! Both kernels take and return the packed checksum `(b << 16) | a`, the same
//! shape zlib's `adler32(adler, buf, len)` uses, so they can sit behind one
//! function-pointer type.
//!
//! - [`adler32_bytewise`] reduces after every byte. It is the reference: every
//!   other kernel must agree with it bit for bit.
//! - [`adler32_batched`] defers the reduction to every [`NMAX`] bytes.

/// Largest prime below 2^16.
pub const MOD: u32 = 65_521;

/// Largest `n` such that `255 * n * (n + 1) / 2 + (n + 1) * (MOD - 1) <= u32::MAX`.
///
/// Running `n` bytes through the unreduced inner loop starting from reduced
/// sums can therefore never overflow `u32`.
pub const NMAX: usize = 5552;

/// Split a packed checksum into `(a, b)`, each reduced below [`MOD`].
#[inline]
#[must_use]
pub const fn split(adler: u32) -> (u32, u32) {
  ((adler & 0xffff) % MOD, (adler >> 16) % MOD)
}

/// Pack reduced sums back into a checksum.
#[inline]
#[must_use]
pub const fn join(a: u32, b: u32) -> u32 {
  (b << 16) | a
}

/// Reference kernel: one reduction per byte.
#[must_use]
pub fn adler32_bytewise(adler: u32, data: &[u8]) -> u32 {
  let (mut a, mut b) = split(adler);
  for &byte in data {
    a = (a + u32::from(byte)) % MOD;
    b = (b + a) % MOD;
  }
  join(a, b)
}

/// Batched kernel: accumulate up to [`NMAX`] bytes, then reduce once.
#[must_use]
pub fn adler32_batched(adler: u32, data: &[u8]) -> u32 {
  let (mut a, mut b) = split(adler);

  let mut blocks = data.chunks_exact(NMAX);
  for block in &mut blocks {
    // 16-byte groups give the optimizer an unrolled body without changing the sums.
    let mut groups = block.chunks_exact(16);
    for group in &mut groups {
      for &byte in group {
        a += u32::from(byte);
        b += a;
      }
    }
    for &byte in groups.remainder() {
      a += u32::from(byte);
      b += a;
    }
    a %= MOD;
    b %= MOD;
  }

  for &byte in blocks.remainder() {
    a += u32::from(byte);
    b += a;
  }
  a %= MOD;
  b %= MOD;

  join(a, b)
}
