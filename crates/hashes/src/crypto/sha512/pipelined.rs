//! Schedule-pipelined kernel.
//!
//! Within one block, schedule expansion runs one group of four words ahead of
//! the round mixing: the step that mixes rounds `t..t+4` first expands group
//! `t+16..t+20` with wide-lane arithmetic, so the expansion latency hides
//! behind the serial round dependency chain. The lookahead is exactly one
//! group and never crosses a block boundary; each block starts only after the
//! previous block's state fold.
//!
//! Arithmetic is identical to the scalar kernel word for word, so the output
//! is bit-identical by construction and enforced by the differential tests.

#![allow(clippy::indexing_slicing)] // Fixed-size schedule indexing

use super::BLOCK_LEN;
use super::round::{fold, round};
use super::schedule;

#[inline(always)]
fn compress_block(state: &mut [u64; 8], block: &[u8; BLOCK_LEN]) {
  let mut w = [0u64; schedule::SCHEDULE_LEN];
  schedule::load_block(&mut w, block);

  let mut v = *state;

  // Rounds 0..64: expand the group sixteen words ahead, then mix the four
  // rounds whose schedule words are already settled.
  let mut t = 0;
  while t < 64 {
    schedule::expand_group(&mut w, t + 16);
    round(t, &mut v, w[t]);
    round(t + 1, &mut v, w[t + 1]);
    round(t + 2, &mut v, w[t + 2]);
    round(t + 3, &mut v, w[t + 3]);
    t += 4;
  }

  // Rounds 64..80: the schedule is complete; no further expansion is issued,
  // the tail purely consumes what the pipeline produced.
  while t < 80 {
    round(t, &mut v, w[t]);
    round(t + 1, &mut v, w[t + 1]);
    round(t + 2, &mut v, w[t + 2]);
    round(t + 3, &mut v, w[t + 3]);
    t += 4;
  }

  fold(state, &v);
}

/// Compress every whole block of `blocks`, left to right.
///
/// Same contract as the scalar kernel: returns the byte count consumed and
/// leaves a trailing partial block untouched.
pub(crate) fn compress_blocks(state: &mut [u64; 8], blocks: &[u8]) -> usize {
  let (chunks, _) = blocks.as_chunks::<BLOCK_LEN>();
  for block in chunks {
    compress_block(state, block);
  }
  chunks.len() * BLOCK_LEN
}
