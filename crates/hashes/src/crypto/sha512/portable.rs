//! Sequential scalar kernel: expand the whole schedule, then mix 80 rounds.

use super::BLOCK_LEN;
use super::round::{fold, round};
use super::schedule;

#[inline(always)]
fn compress_block(state: &mut [u64; 8], block: &[u8; BLOCK_LEN]) {
  let mut w = [0u64; schedule::SCHEDULE_LEN];
  schedule::load_block(&mut w, block);
  schedule::expand(&mut w);

  let mut v = *state;
  for (t, &wt) in w.iter().enumerate() {
    round(t, &mut v, wt);
  }

  fold(state, &v);
}

/// Compress every whole block of `blocks`, left to right.
///
/// Returns the byte count consumed (a multiple of 128); a trailing partial
/// block is left for the caller to buffer.
pub(crate) fn compress_blocks(state: &mut [u64; 8], blocks: &[u8]) -> usize {
  let (chunks, _) = blocks.as_chunks::<BLOCK_LEN>();
  for block in chunks {
    compress_block(state, block);
  }
  chunks.len() * BLOCK_LEN
}
