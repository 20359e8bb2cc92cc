//! Common utilities for hash computation.
//!
//! Currently this is just the portable wide-lane arithmetic used by the
//! pipelined SHA-512 schedule expander. The ops are written lanewise so the
//! compiler can lower them to whatever vector width the target offers.

pub(crate) mod simd;
