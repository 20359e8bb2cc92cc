use hashes::crypto::Sha512;
use proptest::prelude::*;
use traits::Digest as _;

fn sha512_ref(data: &[u8]) -> [u8; 64] {
  use sha2::Digest as _;
  let out = sha2::Sha512::digest(data);
  let mut bytes = [0u8; 64];
  bytes.copy_from_slice(&out);
  bytes
}

proptest! {
  #[test]
  fn sha512_one_shot_matches_sha2(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    prop_assert_eq!(Sha512::digest(&data), sha512_ref(&data));
  }

  #[test]
  fn sha512_streaming_matches_sha2(data in proptest::collection::vec(any::<u8>(), 0..8192)) {
    let expected = sha512_ref(&data);

    let mut h = Sha512::new();
    let mut i = 0usize;
    while i < data.len() {
      let step = (data[i] as usize % 97) + 1;
      let end = core::cmp::min(data.len(), i + step);
      h.update(&data[i..end]);
      i = end;
    }

    prop_assert_eq!(h.finalize(), expected);
  }

  #[test]
  fn sha512_vectored_matches_contiguous(
    a in proptest::collection::vec(any::<u8>(), 0..512),
    b in proptest::collection::vec(any::<u8>(), 0..512),
  ) {
    let mut joined = a.clone();
    joined.extend_from_slice(&b);

    prop_assert_eq!(Sha512::digest_vectored(&[&a, &b]), sha512_ref(&joined));

    let mut h = Sha512::new();
    h.update_vectored(&[&a, &b]);
    prop_assert_eq!(h.finalize(), sha512_ref(&joined));
  }
}
