//! Multihash digests and the hashers that produce them.

pub mod digest;
pub mod hasher;
pub mod sha2;

pub use self::{
  digest::Digest,
  hasher::Hasher,
};

/// Multicodec code of sha2-256.
pub const SHA2_256_CODE: u64 = 0x12;
/// Multicodec code of sha2-512.
pub const SHA2_512_CODE: u64 = 0x13;
/// Digest length of sha2-256, in bytes.
pub const SHA2_256_SIZE: usize = 32;
