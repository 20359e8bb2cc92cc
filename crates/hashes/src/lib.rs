//! SHA-512 compression core.
//!
//! This crate is `no_std` compatible and has zero library dependencies outside
//! the shale workspace. Dev-only dependencies are used for oracle testing
//! and benchmarking.
//!
//! The heart of the crate is the per-block transform `(state, block) -> state`
//! of FIPS 180-4 SHA-512, shipped as two bit-identical kernels: a sequential
//! scalar kernel and a schedule-pipelined kernel that expands the message
//! schedule four words at a time. Padding, variant selection (SHA-384 and the
//! truncated SHA-512/t family), and keyed-MAC wrapping live in the layers
//! above; this crate only supplies the transform and a plain SHA-512 digest
//! built on it.
//!
//! # Modules
//!
//! - [`crypto`] - The SHA-512 digest and its compression kernels.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod crypto;

mod common;
mod util;

pub use traits::Digest;
