//! Message schedule expansion: 80 words from one 128-byte block.
//!
//! Two strategies produce the identical word sequence: [`expand`] derives one
//! word at a time, [`expand_group`] derives four per step with wide-lane
//! arithmetic for the pipelined kernel.

#![allow(clippy::indexing_slicing)] // Fixed-size schedule indexing

use super::BLOCK_LEN;
use crate::common::simd::U64x4;
use crate::util::rotr64;

pub(crate) const SCHEDULE_LEN: usize = 80;

#[inline(always)]
pub(crate) fn small_sigma0(x: u64) -> u64 {
  rotr64(x, 1) ^ rotr64(x, 8) ^ (x >> 7)
}

#[inline(always)]
pub(crate) fn small_sigma1(x: u64) -> u64 {
  rotr64(x, 19) ^ rotr64(x, 61) ^ (x >> 6)
}

/// Decode one block into the first 16 schedule words (big-endian).
#[inline(always)]
pub(crate) fn load_block(w: &mut [u64; SCHEDULE_LEN], block: &[u8; BLOCK_LEN]) {
  let (chunks, _) = block.as_chunks::<8>();
  for (dst, c) in w[..16].iter_mut().zip(chunks) {
    *dst = u64::from_be_bytes(*c);
  }
}

/// Fill `w[16..80]` one word at a time:
/// `w[t] = w[t-16] + σ0(w[t-15]) + w[t-7] + σ1(w[t-2])` (mod 2^64).
#[inline(always)]
pub(crate) fn expand(w: &mut [u64; SCHEDULE_LEN]) {
  for t in 16..SCHEDULE_LEN {
    w[t] = small_sigma1(w[t - 2])
      .wrapping_add(w[t - 7])
      .wrapping_add(small_sigma0(w[t - 15]))
      .wrapping_add(w[t - 16]);
  }
}

#[inline(always)]
fn small_sigma0_wide(x: U64x4) -> U64x4 {
  x.rotr::<1>().xor(x.rotr::<8>()).xor(x.shr::<7>())
}

/// Fill the four words `w[t..t + 4]` with wide-lane arithmetic.
///
/// Lane `j` computes `w[t + j]`. Three of the four taps sit strictly below
/// `w[t]` for every lane, so they are gathered as whole contiguous groups:
///
/// | tap       | lanes 0..4 read          |
/// |-----------|--------------------------|
/// | `w[t-16]` | `w[t-16] .. w[t-13]`     |
/// | `σ0` arg  | `w[t-15] .. w[t-12]`     |
/// | `w[t-7]`  | `w[t-7]  .. w[t-4]`      |
///
/// The σ1 tap reads `w[t-2] .. w[t+1]` and crosses the group boundary: lanes
/// 2 and 3 consume the words lanes 0 and 1 produce in this same step, so σ1
/// is applied in two halves instead of as a third gather.
#[inline(always)]
pub(crate) fn expand_group(w: &mut [u64; SCHEDULE_LEN], t: usize) {
  debug_assert!(t >= 16 && t + 4 <= SCHEDULE_LEN);

  let acc = U64x4::load(w, t - 16)
    .add(small_sigma0_wide(U64x4::load(w, t - 15)))
    .add(U64x4::load(w, t - 7));

  let w0 = acc.0[0].wrapping_add(small_sigma1(w[t - 2]));
  let w1 = acc.0[1].wrapping_add(small_sigma1(w[t - 1]));
  let w2 = acc.0[2].wrapping_add(small_sigma1(w0));
  let w3 = acc.0[3].wrapping_add(small_sigma1(w1));

  U64x4([w0, w1, w2, w3]).store(w, t);
}
