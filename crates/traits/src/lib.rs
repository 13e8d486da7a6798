//! Core checksum traits.
//!
//! This crate provides the interfaces the checksum implementations in this
//! workspace conform to. It is `no_std` compatible and has zero dependencies.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Checksum`] | Streaming non-cryptographic checksum |
//! | [`ChecksumCombine`] | Merge checksums of adjacent buffers |
//! | [`io::ChecksumReader`] | Checksum bytes as they are read (`std`) |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
pub mod io;

pub use checksum::{Checksum, ChecksumCombine};
