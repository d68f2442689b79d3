use crate::hashes::Digest;
use sp_std::{
  fmt,
  vec::Vec,
};

/// A hashing algorithm that produces [`Digest`]s tagged with its code.
#[derive(Clone, Copy)]
pub struct Hasher {
  name: &'static str,
  code: u64,
  encode: fn(&[u8]) -> Vec<u8>,
}

impl Hasher {
  /// Declares a hasher from its multicodec name and code and the function
  /// computing the raw digest.
  pub const fn new(
    name: &'static str,
    code: u64,
    encode: fn(&[u8]) -> Vec<u8>,
  ) -> Self {
    Hasher { name, code, encode }
  }

  /// Multicodec name, e.g. `sha2-256`.
  pub fn name(&self) -> &'static str { self.name }

  /// Multicodec code tagging every digest this hasher produces.
  pub fn code(&self) -> u64 { self.code }

  /// Hashes `input` into a framed multihash digest.
  pub fn digest(&self, input: &[u8]) -> Digest {
    Digest::create(self.code, &(self.encode)(input))
  }
}

impl fmt::Debug for Hasher {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_struct("Hasher")
      .field("name", &self.name)
      .field("code", &self.code)
      .finish()
  }
}
