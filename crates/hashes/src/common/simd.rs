//! Portable wide-lane arithmetic for schedule vectorization.
//!
//! Rather than wrapping `core::arch` intrinsics, this module expresses the
//! patterns the SHA-512 schedule expander actually needs - lanewise wrapping
//! add, XOR, rotate-right, and logical shift-right over four u64 lanes - as
//! plain Rust. Every op is `#[inline(always)]` and branch-free, so on AVX2
//! and NEON targets the compiler lowers a chain of them to wide-register
//! instructions; on everything else the same code runs as four scalar lanes
//! with identical results.
//!
//! Keeping the fallback and the fast path as one body of code is what makes
//! the bit-for-bit kernel equivalence contract cheap to uphold: there is no
//! per-target reimplementation to diverge.

#![allow(clippy::indexing_slicing)] // Fixed-size lane indexing

/// Four u64 lanes, operated on lanewise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct U64x4(pub(crate) [u64; 4]);

impl U64x4 {
  /// Gather four consecutive words starting at `w[i]`.
  #[inline(always)]
  pub(crate) fn load(w: &[u64], i: usize) -> Self {
    Self([w[i], w[i + 1], w[i + 2], w[i + 3]])
  }

  /// Lanewise wrapping addition.
  #[inline(always)]
  pub(crate) fn add(self, rhs: Self) -> Self {
    Self([
      self.0[0].wrapping_add(rhs.0[0]),
      self.0[1].wrapping_add(rhs.0[1]),
      self.0[2].wrapping_add(rhs.0[2]),
      self.0[3].wrapping_add(rhs.0[3]),
    ])
  }

  /// Lanewise bitwise XOR.
  #[inline(always)]
  pub(crate) fn xor(self, rhs: Self) -> Self {
    Self([
      self.0[0] ^ rhs.0[0],
      self.0[1] ^ rhs.0[1],
      self.0[2] ^ rhs.0[2],
      self.0[3] ^ rhs.0[3],
    ])
  }

  /// Lanewise rotate right by `N` bits.
  ///
  /// N must be in range 1..=63.
  #[inline(always)]
  pub(crate) fn rotr<const N: u32>(self) -> Self {
    Self([
      self.0[0].rotate_right(N),
      self.0[1].rotate_right(N),
      self.0[2].rotate_right(N),
      self.0[3].rotate_right(N),
    ])
  }

  /// Lanewise logical shift right by `N` bits.
  ///
  /// N must be in range 1..=63.
  #[inline(always)]
  pub(crate) fn shr<const N: u32>(self) -> Self {
    Self([self.0[0] >> N, self.0[1] >> N, self.0[2] >> N, self.0[3] >> N])
  }

  /// Scatter the four lanes to `w[i..i + 4]`.
  #[inline(always)]
  pub(crate) fn store(self, w: &mut [u64], i: usize) {
    w[i] = self.0[0];
    w[i + 1] = self.0[1];
    w[i + 2] = self.0[2];
    w[i + 3] = self.0[3];
  }
}

#[cfg(test)]
mod tests {
  use super::U64x4;

  #[test]
  fn lanewise_ops_match_scalar() {
    let a = U64x4([0, 1, u64::MAX, 0x0123_4567_89ab_cdef]);
    let b = U64x4([u64::MAX, 2, 1, 0xfedc_ba98_7654_3210]);

    let sum = a.add(b);
    for i in 0..4 {
      assert_eq!(sum.0[i], a.0[i].wrapping_add(b.0[i]));
    }

    let x = a.xor(b);
    for i in 0..4 {
      assert_eq!(x.0[i], a.0[i] ^ b.0[i]);
    }

    let r = a.rotr::<19>();
    for i in 0..4 {
      assert_eq!(r.0[i], a.0[i].rotate_right(19));
    }

    let s = a.shr::<6>();
    for i in 0..4 {
      assert_eq!(s.0[i], a.0[i] >> 6);
    }
  }

  #[test]
  fn load_store_round_trip() {
    let mut w = [0u64; 8];
    let v = U64x4([10, 20, 30, 40]);
    v.store(&mut w, 3);
    assert_eq!(U64x4::load(&w, 3), v);
    assert_eq!(w[..3], [0, 0, 0]);
    assert_eq!(w[7], 0);
  }
}
