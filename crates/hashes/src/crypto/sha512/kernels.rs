use super::{pipelined, portable};

/// `compress_blocks(state, blocks)` for one kernel; returns bytes consumed.
pub type CompressBlocksFn = fn(&mut [u64; 8], &[u8]) -> usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Sha512KernelId {
  Portable = 0,
  Pipelined = 1,
}

pub const ALL: &[Sha512KernelId] = &[Sha512KernelId::Portable, Sha512KernelId::Pipelined];

impl Sha512KernelId {
  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Portable => "portable",
      Self::Pipelined => "pipelined",
    }
  }
}

#[must_use]
pub fn id_from_name(name: &str) -> Option<Sha512KernelId> {
  match name {
    "portable" => Some(Sha512KernelId::Portable),
    "pipelined" => Some(Sha512KernelId::Pipelined),
    _ => None,
  }
}

#[must_use]
pub fn compress_blocks_fn(id: Sha512KernelId) -> CompressBlocksFn {
  match id {
    Sha512KernelId::Portable => portable::compress_blocks,
    Sha512KernelId::Pipelined => pipelined::compress_blocks,
  }
}

/// Both kernels are plain portable Rust, so selection is static: the
/// pipelined kernel everywhere, with the scalar kernel as the reference
/// fallback for callers that ask for it by id.
#[inline]
#[must_use]
pub const fn default_kernel() -> Sha512KernelId {
  Sha512KernelId::Pipelined
}
