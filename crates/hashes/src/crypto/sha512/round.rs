//! The per-round mixing shared by both kernels.

#![allow(clippy::indexing_slicing)] // Fixed-size ring and constant table

use super::consts::K;
use crate::util::rotr64;

#[inline(always)]
fn ch(x: u64, y: u64, z: u64) -> u64 {
  (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u64, y: u64, z: u64) -> u64 {
  (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn big_sigma0(x: u64) -> u64 {
  rotr64(x, 28) ^ rotr64(x, 34) ^ rotr64(x, 39)
}

#[inline(always)]
fn big_sigma1(x: u64) -> u64 {
  rotr64(x, 14) ^ rotr64(x, 18) ^ rotr64(x, 41)
}

/// One compression round, `t` in 0..80.
///
/// The eight working variables live in a fixed 8-slot ring: logical variable
/// `j` (0 = a .. 7 = h) of round `t` sits in slot `(j - t) mod 8`. Writing
/// `d + T1` and `T1 + T2` back into the slots the next round reads as `e` and
/// `a` realizes the textbook (h,g,f,e,d,c,b,a) rotation without moving data.
#[inline(always)]
pub(crate) fn round(t: usize, v: &mut [u64; 8], wt: u64) {
  let i = t & 7;
  let a = (8 - i) & 7;
  let b = (9 - i) & 7;
  let c = (10 - i) & 7;
  let d = (11 - i) & 7;
  let e = (12 - i) & 7;
  let f = (13 - i) & 7;
  let g = (14 - i) & 7;
  let h = (15 - i) & 7;

  let t1 = v[h]
    .wrapping_add(big_sigma1(v[e]))
    .wrapping_add(ch(v[e], v[f], v[g]))
    .wrapping_add(K[t])
    .wrapping_add(wt);
  let t2 = big_sigma0(v[a]).wrapping_add(maj(v[a], v[b], v[c]));

  v[d] = v[d].wrapping_add(t1);
  v[h] = t1.wrapping_add(t2);
}

/// Fold the working variables back into the chaining state.
///
/// 80 rounds bring the ring offset back to zero, so after the last round
/// every slot is realigned with the state word of the same index.
#[inline(always)]
pub(crate) fn fold(state: &mut [u64; 8], v: &[u64; 8]) {
  for (s, &x) in state.iter_mut().zip(v.iter()) {
    *s = s.wrapping_add(x);
  }
}
