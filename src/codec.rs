//! Block codecs: the payload formats a CID's code refers to.

use crate::{
  cid::Cid,
  error::{
    Error,
    Result,
  },
  hashes::Hasher,
};
use sp_std::{
  convert::TryFrom,
  vec::Vec,
};
use tracing::trace;

/// A code with no block codec behind it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnsupportedCodec(pub u64);

impl From<UnsupportedCodec> for Error {
  fn from(UnsupportedCodec(code): UnsupportedCodec) -> Self {
    Error::UnsupportedCodec(code)
  }
}

pub trait Codec:
  Copy
  + Send
  + Sync
  + 'static
  + Sized
  + TryFrom<u64, Error = UnsupportedCodec>
  + Into<u64> {
  /// Multicodec name of the payload format.
  const NAME: &'static str;

  /// Multicodec code of the payload format, as carried by a CID.
  fn code(&self) -> u64 { (*self).into() }

  /// # Errors
  ///
  /// Will return `Err` if there was a problem encoding the object
  fn encode<T: Encode<Self> + ?Sized>(&self, obj: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    obj.encode(*self, &mut buf)?;
    Ok(buf)
  }

  /// # Errors
  ///
  /// Will return `Err` if the bytes are not a valid encoding of `T`
  fn decode<T: Decode<Self>>(&self, bytes: &[u8]) -> Result<T> {
    T::decode(*self, bytes)
  }

  /// Encodes `obj` and returns the version 1 CID of the encoded block,
  /// hashed with `hasher`.
  ///
  /// # Errors
  ///
  /// Will return `Err` if there was a problem encoding the object
  fn cid<T: Encode<Self> + ?Sized>(
    &self,
    obj: &T,
    hasher: &Hasher,
  ) -> Result<Cid> {
    let block = self.encode(obj)?;
    trace!(
      codec = Self::NAME,
      hasher = hasher.name(),
      size = block.len(),
      "hashing block"
    );
    Ok(Cid::new_v1(self.code(), hasher.digest(&block)))
  }
}

/// A trait to represent the ability to encode with
/// the codec `C` for the type.
pub trait Encode<C: Codec> {
  /// Encodes `Self` using codec `C`, appending to `w`.
  ///
  /// # Errors
  ///
  /// Will return `Err` if there was a problem during encoding
  fn encode(&self, c: C, w: &mut Vec<u8>) -> Result<()>;
}

/// A trait representing the ability to decode with
/// the codec `C` for the type.
pub trait Decode<C: Codec>: Sized {
  /// Decodes the bytes in `r` using the codec `C` into `Self`.
  ///
  /// # Errors
  ///
  /// Will return `Err` if there was a problem during decoding
  fn decode(c: C, r: &[u8]) -> Result<Self>;
}
