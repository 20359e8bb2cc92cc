#![allow(clippy::indexing_slicing)] // Fixed-size block buffers

use traits::Digest;

mod consts;
mod pipelined;
mod portable;
mod round;
mod schedule;

pub mod kernels;

pub use self::consts::K;

use self::kernels::CompressBlocksFn;

pub(crate) const BLOCK_LEN: usize = 128;

// SHA-512 initial hash value (FIPS 180-4).
const H0: [u64; 8] = [
  0x6a09_e667_f3bc_c908,
  0xbb67_ae85_84ca_a73b,
  0x3c6e_f372_fe94_f82b,
  0xa54f_f53a_5f1d_36f1,
  0x510e_527f_ade6_82d1,
  0x9b05_688c_2b3e_6c1f,
  0x1f83_d9ab_fb41_bd6b,
  0x5be0_cd19_137e_2179,
];

/// Compress every whole 128-byte block of `blocks` into `state`.
///
/// Consumes `blocks.len() - (blocks.len() % 128)` bytes strictly left to
/// right, mutating `state` in place, and returns the byte count consumed.
/// A trailing partial block is left untouched for the caller to buffer; a
/// buffer shorter than one block is a no-op returning 0.
///
/// The state is the caller's: pass the algorithm's initial vector for the
/// first call and thread the folded state through subsequent calls.
/// Splitting a buffer across calls at any block boundary yields the same
/// final state as one call over the concatenation.
#[inline]
pub fn compress(state: &mut [u64; 8], blocks: &[u8]) -> usize {
  (kernels::compress_blocks_fn(kernels::default_kernel()))(state, blocks)
}

#[derive(Clone)]
pub struct Sha512 {
  state: [u64; 8],
  block: [u8; BLOCK_LEN],
  block_len: usize,
  bytes_hashed: u128,
  compress_blocks: CompressBlocksFn,
}

impl Default for Sha512 {
  #[inline]
  fn default() -> Self {
    Self {
      state: H0,
      block: [0u8; BLOCK_LEN],
      block_len: 0,
      bytes_hashed: 0,
      compress_blocks: kernels::compress_blocks_fn(kernels::default_kernel()),
    }
  }
}

impl Sha512 {
  /// Compute the digest of `data` in one shot.
  ///
  /// Inputs that fit in at most two compression blocks skip the streaming
  /// buffer and finalize overhead and pad directly on the stack.
  #[inline]
  #[must_use]
  pub fn digest(data: &[u8]) -> [u8; 64] {
    // Two-block limit:
    // - If `len < 128`, padding uses 1 or 2 blocks.
    // - If `128 <= len < 128 + 112`, we have exactly one full block + a final
    //   block (remainder < 112), i.e. 2 blocks total.
    if data.len() < 240 {
      let compress = kernels::compress_blocks_fn(kernels::default_kernel());
      let mut state = H0;

      let bit_len = (data.len() as u128) << 3;

      // For `len < 240`, this consumes at most one full block.
      let consumed = compress(&mut state, data);
      let rest = &data[consumed..];

      let mut block0 = [0u8; BLOCK_LEN];
      block0[..rest.len()].copy_from_slice(rest);
      block0[rest.len()] = 0x80;

      if rest.len() < 112 {
        block0[112..128].copy_from_slice(&bit_len.to_be_bytes());
        compress(&mut state, &block0[..]);
      } else {
        // `112 <= remainder < 128`: the length spills into a second block.
        compress(&mut state, &block0[..]);
        let mut block1 = [0u8; BLOCK_LEN];
        block1[112..128].copy_from_slice(&bit_len.to_be_bytes());
        compress(&mut state, &block1[..]);
      }

      let mut out = [0u8; 64];
      for (i, word) in state.iter().copied().enumerate() {
        let offset = i * 8;
        out[offset..offset + 8].copy_from_slice(&word.to_be_bytes());
      }
      out
    } else {
      let mut h = Self::new();
      h.update(data);
      h.finalize()
    }
  }

  #[inline]
  fn finalize_inner(&self) -> [u8; 64] {
    let mut state = self.state;
    let mut block = self.block;
    let mut block_len = self.block_len;
    let total_len = self.bytes_hashed.wrapping_add(block_len as u128);

    block[block_len] = 0x80;
    block_len += 1;

    if block_len > 112 {
      block[block_len..].fill(0);
      (self.compress_blocks)(&mut state, &block[..]);
      block = [0u8; BLOCK_LEN];
      block_len = 0;
    }

    block[block_len..112].fill(0);

    let bit_len = total_len << 3;
    block[112..128].copy_from_slice(&bit_len.to_be_bytes());
    (self.compress_blocks)(&mut state, &block[..]);

    let mut out = [0u8; 64];
    for (i, word) in state.iter().copied().enumerate() {
      let offset = i * 8;
      out[offset..offset + 8].copy_from_slice(&word.to_be_bytes());
    }
    out
  }
}

impl Digest for Sha512 {
  const OUTPUT_SIZE: usize = 64;
  type Output = [u8; 64];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  fn update(&mut self, mut data: &[u8]) {
    if data.is_empty() {
      return;
    }

    if self.block_len != 0 {
      let take = core::cmp::min(BLOCK_LEN - self.block_len, data.len());
      self.block[self.block_len..self.block_len + take].copy_from_slice(&data[..take]);
      self.block_len += take;
      data = &data[take..];

      if self.block_len == BLOCK_LEN {
        let block = self.block;
        (self.compress_blocks)(&mut self.state, &block[..]);
        self.bytes_hashed = self.bytes_hashed.wrapping_add(BLOCK_LEN as u128);
        self.block_len = 0;
      }
    }

    let consumed = (self.compress_blocks)(&mut self.state, data);
    self.bytes_hashed = self.bytes_hashed.wrapping_add(consumed as u128);
    data = &data[consumed..];

    if !data.is_empty() {
      self.block[..data.len()].copy_from_slice(data);
      self.block_len = data.len();
    }
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    self.finalize_inner()
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }
}
