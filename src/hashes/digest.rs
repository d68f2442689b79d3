use crate::{
  error::{
    Error,
    Result,
  },
  hashes::{
    SHA2_256_CODE,
    SHA2_256_SIZE,
  },
  varint,
};
use core::hash;
use sp_std::{
  fmt,
  vec::Vec,
};

/// A multihash digest: the output of a hashing algorithm tagged with the
/// algorithm's code and the output length, encoded as
/// `varint(code) ++ varint(size) ++ digest`.
#[derive(Clone)]
pub struct Digest {
  code: u64,
  size: usize,
  bytes: Vec<u8>,
  // where the raw digest starts inside `bytes`
  offset: usize,
}

impl Digest {
  /// Frames a raw digest produced by the algorithm identified by `code`.
  pub fn create(code: u64, digest: &[u8]) -> Self {
    let size = digest.len();
    let size_offset = varint::encoding_length(code);
    let offset = size_offset + varint::encoding_length(size as u64);
    let mut bytes = vec![0; offset + size];
    varint::encode_to(code, &mut bytes, 0);
    varint::encode_to(size as u64, &mut bytes, size_offset);
    bytes[offset..].copy_from_slice(digest);
    Digest { code, size, bytes, offset }
  }

  /// Parses a multihash.
  ///
  /// # Errors
  ///
  /// Will return `Err` if the code or size varints are malformed, or if the
  /// number of bytes after them differs from the declared size.
  pub fn decode(bytes: &[u8]) -> Result<Self> {
    let (code, size_offset) = varint::decode(bytes)?;
    let (size, digest_offset) = varint::decode(&bytes[size_offset..])?;
    let offset = size_offset + digest_offset;
    let actual = bytes.len() - offset;
    if actual as u64 != size {
      return Err(Error::LengthMismatch { declared: size, actual });
    }
    Ok(Digest { code, size: actual, bytes: bytes.to_vec(), offset })
  }

  /// Parses the multihash of a CIDv0, whose algorithm and length are implied
  /// by the version: sha2-256 with a 32-byte digest.
  ///
  /// # Errors
  ///
  /// Will return `Err` if `bytes` is not a well-formed multihash, if it is
  /// not sha2-256, or if its digest is not 32 bytes long.
  pub fn decode_implicit_sha256(bytes: &[u8]) -> Result<Self> {
    let digest = Digest::decode(bytes)?;
    if digest.code != SHA2_256_CODE {
      return Err(Error::InvalidV0Digest {
        code: digest.code,
        size: digest.size,
      });
    }
    if digest.size != SHA2_256_SIZE {
      return Err(Error::LengthMismatch {
        declared: SHA2_256_SIZE as u64,
        actual: digest.size,
      });
    }
    Ok(digest)
  }

  /// Code of the hashing algorithm.
  pub fn code(&self) -> u64 { self.code }

  /// Length of the raw digest, in bytes.
  pub fn size(&self) -> usize { self.size }

  /// The raw digest, without algorithm information.
  pub fn digest(&self) -> &[u8] { &self.bytes[self.offset..] }

  /// The self-describing encoding.
  pub fn as_bytes(&self) -> &[u8] { &self.bytes }

  /// An owned copy of [`Digest::as_bytes`].
  pub fn to_bytes(&self) -> Vec<u8> { self.bytes.clone() }

  /// Whether this digest can stand for a CIDv0.
  pub fn is_sha256(&self) -> bool {
    self.code == SHA2_256_CODE && self.size == SHA2_256_SIZE
  }
}

impl PartialEq for Digest {
  fn eq(&self, other: &Self) -> bool { self.bytes == other.bytes }
}

impl Eq for Digest {}

impl hash::Hash for Digest {
  fn hash<H: hash::Hasher>(&self, state: &mut H) { self.bytes.hash(state) }
}

impl fmt::Debug for Digest {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_struct("Digest")
      .field("code", &self.code)
      .field("size", &self.size)
      .field("digest", &self.digest())
      .finish()
  }
}
