//! Cross-kernel equivalence fuzzing.
//!
//! Verifies that the scalar and pipelined SHA-512 kernels produce identical
//! digests for any input, padding and streaming included.

#![no_main]

use hashes::crypto::sha512::kernel_test::verify_sha512_kernels;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  verify_sha512_kernels(data).expect("sha512 kernels should agree");
});
