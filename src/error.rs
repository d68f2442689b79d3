use alloc::string::String;
use sp_std::fmt;

/// Type alias to use this library's [`Error`] type in a `Result`.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
  /// The buffer ended inside a varint, or the varint does not fit in a
  /// `u64`.
  MalformedVarint(&'static str),
  /// A digest declared a size that differs from the bytes that follow it.
  LengthMismatch { declared: u64, actual: usize },
  /// The leading discriminator of a CID is neither 18 nor 1.
  InvalidVersion(u64),
  /// A CIDv0 was requested with a payload codec other than dag-pb.
  InvalidV0Codec(u64),
  /// A CIDv0 was requested with a base other than base58btc.
  InvalidV0Base(&'static str),
  /// A CIDv0 was requested with a digest that is not a 32-byte sha2-256.
  InvalidV0Digest { code: u64, size: usize },
  /// No known base uses this prefix character.
  UnsupportedBase(char),
  /// A character outside of the base's alphabet.
  InvalidCharacter { base: &'static str, character: char },
  /// The text only holds alphabet characters but is still not a valid
  /// encoding, e.g. it has an impossible length.
  InvalidBaseText(&'static str),
  /// The base was declared as a placeholder and never wired up.
  NotImplemented(&'static str),
  /// Only dag-pb CIDs can be converted to version 0.
  NonDagPbToV0(u64),
  /// Only sha2-256 CIDs can be converted to version 0.
  NonSha256ToV0(u64),
  /// No block codec is registered for this code.
  UnsupportedCodec(u64),
  /// The JSON block codec failed.
  Json(String),
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    use self::Error::*;
    match self {
      MalformedVarint(reason) => write!(f, "Malformed varint: {}", reason),
      LengthMismatch { declared, actual } => write!(
        f,
        "Multihash has incorrect length: declared {} bytes, found {}",
        declared, actual
      ),
      InvalidVersion(v) => write!(f, "Invalid CID version {}", v),
      InvalidV0Codec(code) => write!(
        f,
        "Version 0 CID must use dag-pb (code: 0x70) block encoding, got \
         0x{:x}",
        code
      ),
      InvalidV0Base(name) => write!(
        f,
        "Version 0 CID must use base58btc base encoding, got {}",
        name
      ),
      InvalidV0Digest { code, size } => write!(
        f,
        "Version 0 CID must use a 32 byte sha2-256 multihash, got code \
         0x{:x} with {} bytes",
        code, size
      ),
      UnsupportedBase(prefix) => {
        write!(f, "No base decoder for prefix {:?}", prefix)
      }
      InvalidCharacter { base, character } => {
        write!(f, "Invalid {} character {:?}", base, character)
      }
      InvalidBaseText(base) => write!(f, "Invalid {} text", base),
      NotImplemented(base) => write!(
        f,
        "{} is imported as placeholder, its implementation needs to be \
         imported",
        base
      ),
      NonDagPbToV0(code) => write!(
        f,
        "Cannot convert a non dag-pb CID (code: 0x{:x}) to CIDv0",
        code
      ),
      NonSha256ToV0(code) => write!(
        f,
        "Cannot convert a non sha2-256 multihash CID (hash: 0x{:x}) to CIDv0",
        code
      ),
      UnsupportedCodec(code) => {
        write!(f, "Unsupported block codec 0x{:x}", code)
      }
      Json(reason) => write!(f, "JSON codec error: {}", reason),
    }
  }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<unsigned_varint::decode::Error> for Error {
  fn from(err: unsigned_varint::decode::Error) -> Self {
    use unsigned_varint::decode::Error::*;
    match err {
      Insufficient => Error::MalformedVarint("buffer ended mid-sequence"),
      Overflow => Error::MalformedVarint("value overflows a u64"),
      NotMinimal => Error::MalformedVarint("non-minimal encoding"),
      _ => Error::MalformedVarint("unrecognised encoding"),
    }
  }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for Error {
  fn from(err: serde_json::Error) -> Self {
    use alloc::string::ToString;
    Error::Json(err.to_string())
  }
}
