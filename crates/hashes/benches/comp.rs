use core::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use hashes::crypto::{
  Sha512,
  sha512::kernels::{ALL, compress_blocks_fn},
};
use traits::Digest as _;

const BLOCK_LEN: usize = 128;

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

fn sized_inputs() -> Vec<(usize, Vec<u8>)> {
  // One block, a few blocks, and large multi-block throughput.
  let sizes = [BLOCK_LEN, 4 * BLOCK_LEN, 16 * 1024, 1024 * 1024];
  sizes
    .into_iter()
    .map(|len| {
      let mut v = vec![0u8; len];
      for (i, b) in v.iter_mut().enumerate() {
        *b = (i as u8).wrapping_mul(31).wrapping_add(7);
      }
      (len, v)
    })
    .collect()
}

fn kernels(c: &mut Criterion) {
  let inputs = sized_inputs();
  let mut group = c.benchmark_group("sha512/compress");

  for (len, data) in &inputs {
    group.throughput(Throughput::Bytes(*len as u64));

    for &id in ALL {
      let compress = compress_blocks_fn(id);
      group.bench_with_input(BenchmarkId::new(id.as_str(), len), data, |b, d| {
        b.iter(|| {
          let mut state = H0;
          black_box(compress(black_box(&mut state), black_box(d)));
          black_box(state)
        })
      });
    }
  }

  group.finish();
}

fn oneshot(c: &mut Criterion) {
  let inputs = sized_inputs();
  let mut group = c.benchmark_group("sha512/oneshot");

  for (len, data) in &inputs {
    group.throughput(Throughput::Bytes(*len as u64));

    group.bench_with_input(BenchmarkId::new("shale", len), data, |b, d| {
      b.iter(|| black_box(Sha512::digest(black_box(d))))
    });
    group.bench_with_input(BenchmarkId::new("sha2", len), data, |b, d| {
      b.iter(|| {
        use sha2::Digest as _;
        let out = sha2::Sha512::digest(black_box(d));
        black_box(out)
      })
    });
  }

  group.finish();
}

criterion_group!(benches, kernels, oneshot);
criterion_main!(benches);
