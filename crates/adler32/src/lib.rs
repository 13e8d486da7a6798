//! Adler-32 checksums with a freezable, caching accumulator.
//!
//! # Layers
//!
//! | Item | Role |
//! |------|------|
//! | [`Adler32`] | Raw kernel: two sums modulo 65521, [`Checksum`] + [`ChecksumCombine`] |
//! | [`Accumulator`] | Policy: one-way freeze, memoised digest encodings |
//! | [`encoding`] | Padded hex, radix 16/32/36 text, 4-byte big-endian form |
//! | [`Octets`] | Which inputs are accepted and how they become bytes |
//! | `io` / `stream` | Reader, file and stream adapters (`std` / `async`) |
//!
//! # Example
//!
//! ```rust
//! use adler32::{Accumulator, Radix};
//!
//! let mut acc = Accumulator::new();
//! acc.update("Wiki")?.update(b"pedia")?;
//! assert_eq!(acc.digest(), 0x11E6_0398);
//! assert_eq!(acc.digest_hex(), "11E60398");
//! assert_eq!(acc.digest_bytes()?, [0x11, 0xE6, 0x03, 0x98]);
//! assert_eq!(acc.digest_radix(Radix::Base32Hex), "8UC0SO");
//! # Ok::<(), adler32::Error>(())
//! ```
//!
//! # Features
//!
//! - `std` (default): reader/file adapters, [`Error::SourceUnavailable`],
//!   environment overrides (see [`config`])
//! - `async`: `update_from_stream`, `update_from_async_reader`, `from_file`
//!   on top of tokio and `futures-util`
//!
//! # no_std Support
//!
//! Without `std` the crate needs only `alloc`:
//!
//! ```toml
//! [dependencies]
//! adler32 = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod accumulator;
mod adler32;
pub mod encoding;
mod error;
#[cfg(feature = "std")]
mod io;
mod octets;
#[cfg(feature = "async")]
mod stream;

#[doc(hidden)]
pub mod __internal {
  pub use crate::adler32::portable::{adler32_batched, adler32_bytewise};
}

pub use accumulator::Accumulator;
pub use adler32::{
  Adler32, Adler32Config, Adler32Force, Adler32Fn, Adler32Tunables, INITIAL, MOD, NMAX, adler32_combine, config,
};
pub use encoding::Radix;
pub use error::Error;
pub use octets::{ByteOrder, Octets, TypedArray, Word, Words};
// Re-export traits for convenience
#[cfg(feature = "std")]
pub use traits::io::ChecksumReader;
pub use traits::{Checksum, ChecksumCombine};
