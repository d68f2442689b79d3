//! Self-describing content identifiers.
//!
//! A CID couples a version, the multicodec code of the block it points at,
//! and the multihash of that block. Version 1 encodes all three explicitly:
//!
//! ```text
//! varint(1) ++ varint(code) ++ varint(hash code) ++ varint(size) ++ digest
//! ```
//!
//! Version 0 is the legacy form: the bare sha2-256 multihash of a dag-pb
//! block, rendered as unprefixed base58btc. Its first byte is the sha2-256
//! code (18), which is what tells the two layouts apart when decoding.

mod cache;
mod link;

use ::multibase::Base;
use crate::{
  bases::{
    BaseDecoder,
    BaseEncoder,
    Codec,
    BASE32,
    BASE58BTC,
  },
  error::{
    Error,
    Result,
  },
  hashes::{
    Digest,
    SHA2_256_CODE,
  },
  multibase::MULTIBASE,
  varint,
  version::Version,
};
use alloc::string::String;
use core::{
  hash,
  str::FromStr,
};
use serde::{
  Deserialize,
  Serialize,
};
use sp_std::{
  convert::TryFrom,
  fmt,
  vec::Vec,
};
use tracing::debug;

use self::cache::BaseCache;

/// Multicodec code of dag-pb, the only payload codec a CIDv0 can carry.
pub const DAG_PB_CODE: u64 = 0x70;

/// How the leading varint of a binary CID says the rest is laid out.
enum Layout {
  /// The whole buffer is a sha2-256 multihash.
  Legacy,
  /// A payload code and a multihash follow at `offset`.
  Versioned { offset: usize },
}

impl Layout {
  fn of(bytes: &[u8]) -> Result<Self> {
    let (discriminator, offset) = varint::decode(bytes)?;
    if discriminator == SHA2_256_CODE {
      return Ok(Layout::Legacy);
    }
    match Version::try_from(discriminator) {
      Ok(Version::V1) => Ok(Layout::Versioned { offset }),
      _ => {
        debug!(version = discriminator, "rejecting CID with unknown version");
        Err(Error::InvalidVersion(discriminator))
      }
    }
  }
}

/// A content identifier.
///
/// Equality, hashing and [`Cid::to_json`] only look at the version, the
/// payload code and the multihash. The base records how the CID was built
/// or parsed: two CIDs that differ only in base are equal, and
/// [`fmt::Display`] always uses base58btc for version 0 and base32 for
/// version 1.
#[derive(Clone)]
pub struct Cid {
  version: Version,
  code: u64,
  multihash: Digest,
  bytes: Vec<u8>,
  base: Codec,
  cache: BaseCache,
}

impl Cid {
  /// Creates a CID, checking the constraints of its version.
  ///
  /// # Errors
  ///
  /// Will return `Err` for a version 0 CID whose code is not dag-pb, whose
  /// base is not base58btc, or whose multihash is not a 32-byte sha2-256
  /// digest.
  pub fn new(
    version: Version,
    code: u64,
    multihash: Digest,
    base: Codec,
  ) -> Result<Self> {
    match version {
      Version::V0 => {
        if code != DAG_PB_CODE {
          return Err(Error::InvalidV0Codec(code));
        }
        if base != BASE58BTC {
          return Err(Error::InvalidV0Base(base.name()));
        }
        if !multihash.is_sha256() {
          return Err(Error::InvalidV0Digest {
            code: multihash.code(),
            size: multihash.size(),
          });
        }
        let bytes = multihash.to_bytes();
        Ok(Cid::from_parts(version, code, multihash, bytes, BASE58BTC))
      }
      Version::V1 => Ok(Cid::new_v1_with_base(code, multihash, base)),
    }
  }

  /// Creates a version 0 CID for a dag-pb block.
  ///
  /// # Errors
  ///
  /// Will return `Err` if `multihash` is not a 32-byte sha2-256 digest.
  pub fn new_v0(multihash: Digest) -> Result<Self> {
    Cid::new(Version::V0, DAG_PB_CODE, multihash, BASE58BTC)
  }

  /// Creates a version 1 CID with base32 as its base.
  pub fn new_v1(code: u64, multihash: Digest) -> Self {
    Cid::new_v1_with_base(code, multihash, BASE32)
  }

  /// Creates a version 1 CID with `base` as its base.
  pub fn new_v1_with_base(code: u64, multihash: Digest, base: Codec) -> Self {
    let bytes = encode_v1(code, &multihash);
    Cid::from_parts(Version::V1, code, multihash, bytes, base)
  }

  fn from_parts(
    version: Version,
    code: u64,
    multihash: Digest,
    bytes: Vec<u8>,
    base: Codec,
  ) -> Self {
    Cid { version, code, multihash, bytes, base, cache: BaseCache::default() }
  }

  /// Decodes a binary CID. Version 0 CIDs get base58btc as their base and
  /// version 1 CIDs base32.
  ///
  /// # Errors
  ///
  /// Will return `Err` if the bytes are not a valid CID of either version.
  pub fn decode(bytes: &[u8]) -> Result<Self> {
    Cid::decode_with_base(bytes, None)
  }

  /// Decodes a binary CID, using `base` as its base instead of the version
  /// default.
  ///
  /// # Errors
  ///
  /// Will return `Err` if the bytes are not a valid CID of either version,
  /// or if `base` is not base58btc for a version 0 CID.
  pub fn decode_with_base(bytes: &[u8], base: Option<Codec>) -> Result<Self> {
    match Layout::of(bytes)? {
      Layout::Legacy => {
        let multihash = Digest::decode_implicit_sha256(bytes)?;
        Cid::new(
          Version::V0,
          DAG_PB_CODE,
          multihash,
          base.unwrap_or(BASE58BTC),
        )
      }
      Layout::Versioned { offset } => {
        let (code, length) = varint::decode(&bytes[offset..])?;
        let multihash = Digest::decode(&bytes[offset + length..])?;
        Ok(Cid::from_parts(
          Version::V1,
          code,
          multihash,
          bytes.to_vec(),
          base.unwrap_or(BASE32),
        ))
      }
    }
  }

  /// Parses a CID from text whose base is recognised by its prefix.
  /// Supports base32 and base58btc, plus the unprefixed base58btc of
  /// version 0 CIDs (`Qm...`).
  ///
  /// # Errors
  ///
  /// Will return `Err` if the base is unsupported or the text is not a
  /// valid CID.
  pub fn parse(text: &str) -> Result<Self> {
    Cid::parse_with(text, &MULTIBASE)
  }

  /// Parses a CID from text using `decoder`, which may be a single base or
  /// a composite [`crate::multibase::Multibase`]. The text is remembered as
  /// the rendering of the CID in the base that decoded it.
  ///
  /// # Errors
  ///
  /// Will return `Err` if `decoder` rejects the text or the decoded bytes
  /// are not a valid CID.
  pub fn parse_with<D>(text: &str, decoder: &D) -> Result<Self>
  where D: BaseDecoder + ?Sized {
    if text.starts_with('Q') {
      let bytes = BASE58BTC.base_decode(text)?;
      let cid = Cid::decode_with_base(&bytes, Some(BASE58BTC))?;
      if cid.version.is_v0() {
        cid.cache.insert(BASE58BTC.name(), String::from(text));
      }
      return Ok(cid);
    }
    let mut cid = Cid::decode(&decoder.decode(text)?)?;
    // a prefixed version 0 string is not its canonical rendering
    if cid.version.is_v1() {
      if let Some(base) = decoder.resolve(text) {
        cid.base = base;
        cid.cache.insert(base.name(), String::from(text));
      }
    }
    Ok(cid)
  }

  /// Which of the two binary layouts this CID uses.
  pub fn version(&self) -> Version { self.version }

  /// Multicodec code of the block this CID points at.
  pub fn code(&self) -> u64 { self.code }

  /// The multihash of the block this CID points at.
  pub fn hash(&self) -> &Digest { &self.multihash }

  /// The base this CID was created with or parsed from. Always base58btc
  /// for version 0.
  pub fn base(&self) -> Codec { self.base }

  /// The binary form that [`Cid::decode`] reads back.
  pub fn as_bytes(&self) -> &[u8] { &self.bytes }

  pub fn to_bytes(&self) -> Vec<u8> { self.bytes.clone() }

  /// Renders this CID with `base`. Version 0 CIDs only render in base58btc,
  /// without a multibase prefix.
  ///
  /// # Errors
  ///
  /// Will return `Err` if `base` is not base58btc for a version 0 CID, or
  /// if `base` cannot encode.
  pub fn to_string_of_base<E>(&self, base: &E) -> Result<String>
  where E: BaseEncoder + ?Sized {
    match self.version {
      Version::V0 => {
        let expected = (BASE58BTC.name(), BASE58BTC.prefix());
        if (base.name(), base.prefix()) != expected {
          return Err(Error::InvalidV0Base(base.name()));
        }
        self
          .cache
          .get_or_try_insert_with(base.name(), || base.base_encode(&self.bytes))
      }
      Version::V1 => self
        .cache
        .get_or_try_insert_with(base.name(), || base.encode(&self.bytes)),
    }
  }

  /// The canonical text: unprefixed base58btc for version 0, base32 for
  /// version 1. Shares cache entries with [`Cid::to_string_of_base`].
  pub(crate) fn render(&self) -> String {
    match self.version {
      Version::V0 => self.cache.get_or_insert_with(BASE58BTC.name(), || {
        Base::Base58Btc.encode(&self.bytes)
      }),
      Version::V1 => self.cache.get_or_insert_with(BASE32.name(), || {
        ::multibase::encode(Base::Base32Lower, &self.bytes)
      }),
    }
  }

  /// Converts to a version 0 CID.
  ///
  /// # Errors
  ///
  /// Will return `Err` if the CID is not dag-pb or its multihash is not a
  /// 32-byte sha2-256 digest.
  pub fn to_v0(&self) -> Result<Self> {
    match self.version {
      Version::V0 => Ok(self.clone()),
      Version::V1 => {
        if self.code != DAG_PB_CODE {
          return Err(Error::NonDagPbToV0(self.code));
        }
        if !self.multihash.is_sha256() {
          return Err(Error::NonSha256ToV0(self.multihash.code()));
        }
        Cid::new_v0(self.multihash.clone())
      }
    }
  }

  /// Converts to a version 1 CID with the same code, multihash and base.
  pub fn to_v1(&self) -> Self {
    match self.version {
      Version::V0 => {
        Cid::new_v1_with_base(self.code, self.multihash.clone(), self.base)
      }
      Version::V1 => self.clone(),
    }
  }

  /// The JSON view of this CID.
  pub fn to_json(&self) -> CidJson {
    CidJson {
      code: self.code,
      version: self.version.into(),
      hash: self.multihash.to_bytes(),
    }
  }
}

fn encode_v1(code: u64, multihash: &Digest) -> Vec<u8> {
  let version = u64::from(Version::V1);
  let code_offset = varint::encoding_length(version);
  let hash_offset = code_offset + varint::encoding_length(code);
  let mut bytes = vec![0; hash_offset + multihash.as_bytes().len()];
  varint::encode_to(version, &mut bytes, 0);
  varint::encode_to(code, &mut bytes, code_offset);
  bytes[hash_offset..].copy_from_slice(multihash.as_bytes());
  bytes
}

/// Plain-data view of a CID: payload code, version and multihash bytes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CidJson {
  pub code: u64,
  pub version: u64,
  pub hash: Vec<u8>,
}

impl PartialEq for Cid {
  fn eq(&self, other: &Self) -> bool {
    self.code == other.code
      && self.version == other.version
      && self.multihash == other.multihash
  }
}

impl Eq for Cid {}

impl hash::Hash for Cid {
  fn hash<H: hash::Hasher>(&self, state: &mut H) {
    self.version.hash(state);
    self.code.hash(state);
    self.multihash.hash(state);
  }
}

impl fmt::Display for Cid {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(&self.render())
  }
}

impl fmt::Debug for Cid {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "Cid({})", self)
  }
}

impl FromStr for Cid {
  type Err = Error;

  fn from_str(text: &str) -> Result<Self> { Cid::parse(text) }
}

impl TryFrom<&str> for Cid {
  type Error = Error;

  fn try_from(text: &str) -> Result<Self> { Cid::parse(text) }
}

impl TryFrom<String> for Cid {
  type Error = Error;

  fn try_from(text: String) -> Result<Self> { Cid::parse(&text) }
}

impl TryFrom<&[u8]> for Cid {
  type Error = Error;

  fn try_from(bytes: &[u8]) -> Result<Self> { Cid::decode(bytes) }
}

impl TryFrom<Vec<u8>> for Cid {
  type Error = Error;

  fn try_from(bytes: Vec<u8>) -> Result<Self> { Cid::decode(&bytes) }
}

impl From<&Cid> for Vec<u8> {
  fn from(cid: &Cid) -> Self { cid.to_bytes() }
}

#[cfg(test)]
pub mod tests {
  use super::*;
  use crate::{
    bases::{
      ALL,
      BASE16,
      BASE64,
    },
    hashes::sha2::SHA2_256,
  };
  use alloc::string::ToString;
  use quickcheck::{
    Arbitrary,
    Gen,
  };

  const V0_TEXT: &str = "QmdfTbBqBPQ7VNxZEYEj14VmRuZBkqFbiwReogJgS1zR1n";
  const V1_TEXT: &str =
    "bafybeihdwdcefgh4dqkjv67uzcmw7ojee6xedzdetojuzjevtenxquvyku";

  impl Arbitrary for Cid {
    fn arbitrary(g: &mut Gen) -> Self {
      let code = *g.choose(&[0x55, 0x70, 0x71, 0x0129, 0x0200]).unwrap();
      let base = *g.choose(ALL).unwrap();
      Cid::new_v1_with_base(code, Digest::arbitrary(g), base)
    }
  }

  fn test_digest() -> Digest { SHA2_256.digest(b"test") }

  #[quickcheck]
  fn decode_encode_id(cid: Cid) -> bool {
    match Cid::decode(cid.as_bytes()) {
      Ok(decoded) => decoded.as_bytes() == cid.as_bytes() && decoded == cid,
      Err(_) => false,
    }
  }

  #[quickcheck]
  fn parse_to_string_id(cid: Cid) -> bool {
    let base = cid.base();
    match cid.to_string_of_base(&base) {
      Ok(text) => match Cid::parse_with(&text, &base) {
        Ok(parsed) => {
          parsed == cid
            && parsed.base() == base
            && parsed.to_string_of_base(&base) == Ok(text)
        }
        Err(_) => false,
      },
      Err(_) => false,
    }
  }

  #[quickcheck]
  fn to_v1_is_idempotent(cid: Cid) -> bool {
    cid.to_v1() == cid && cid.to_v1().to_v1() == cid
  }

  #[test]
  fn v0_of_test_digest() {
    let digest = test_digest();
    let cid = Cid::new_v0(digest.clone()).unwrap();
    assert_eq!(cid.version(), Version::V0);
    assert_eq!(cid.code(), DAG_PB_CODE);
    assert_eq!(cid.as_bytes(), digest.as_bytes());
    assert_eq!(&cid.as_bytes()[2..], digest.digest());
    assert_eq!(cid.base(), BASE58BTC);
    let text = cid.to_string();
    assert!(text.starts_with("Qm"), "{}", text);
    assert_eq!(text.len(), 46);
    assert_eq!(Cid::parse(&text).unwrap(), cid);
  }

  #[test]
  fn v1_of_test_digest() {
    let v0 = Cid::new_v0(test_digest()).unwrap();
    let v1 = Cid::new_v1(DAG_PB_CODE, test_digest());
    let text = v1.to_string_of_base(&BASE32).unwrap();
    assert!(text.starts_with('b'));
    let parsed = Cid::parse(&text).unwrap();
    assert_eq!(parsed, v1);
    assert_ne!(parsed, v0);
    assert_eq!(v0.to_v1().as_bytes(), v1.as_bytes());
    assert_eq!(v0.to_v1(), v1);
    assert_eq!(parsed.to_v0().unwrap(), v0);
  }

  #[test]
  fn known_v0_v1_pair() {
    let v0 = Cid::parse(V0_TEXT).unwrap();
    let v1 = Cid::parse(V1_TEXT).unwrap();
    assert_eq!(v0.version(), Version::V0);
    assert_eq!(v1.version(), Version::V1);
    assert_eq!(v0.to_v1(), v1);
    assert_eq!(v1.to_v0().unwrap(), v0);
    assert_eq!(v0.to_string(), V0_TEXT);
    assert_eq!(v1.to_string(), V1_TEXT);
    assert_eq!(v0.to_v1().to_string_of_base(&BASE32).unwrap(), V1_TEXT);
    assert_eq!(v1.to_v0().unwrap().to_string(), V0_TEXT);
  }

  #[test]
  fn known_raw_v1() {
    let cid = Cid::new_v1(0x55, SHA2_256.digest(b"foo"));
    assert_eq!(
      cid.to_string(),
      "bafkreibme22gw2h7y2h7tg2fhqotaqjucnbc24deqo72b6mkl2egezxhvy"
    );
  }

  #[test]
  fn v0_constraints() {
    let digest = test_digest();
    assert_eq!(
      Cid::new(Version::V0, 0x71, digest.clone(), BASE58BTC).unwrap_err(),
      Error::InvalidV0Codec(0x71)
    );
    assert_eq!(
      Cid::new(Version::V0, DAG_PB_CODE, digest.clone(), BASE32).unwrap_err(),
      Error::InvalidV0Base("base32")
    );
    let sha512 = Digest::create(0x13, &[0; 64]);
    assert_eq!(
      Cid::new(Version::V0, DAG_PB_CODE, sha512, BASE58BTC).unwrap_err(),
      Error::InvalidV0Digest { code: 0x13, size: 64 }
    );
    assert!(Cid::new(Version::V0, DAG_PB_CODE, digest, BASE58BTC).is_ok());
  }

  #[test]
  fn v0_only_renders_in_base58btc() {
    let cid = Cid::new_v0(test_digest()).unwrap();
    assert_eq!(
      cid.to_string_of_base(&BASE32).unwrap_err(),
      Error::InvalidV0Base("base32")
    );
    assert_eq!(cid.to_string_of_base(&BASE58BTC).unwrap(), cid.to_string());
  }

  #[test]
  fn v0_decode_rejects_other_bases() {
    let cid = Cid::new_v0(test_digest()).unwrap();
    assert_eq!(
      Cid::decode_with_base(cid.as_bytes(), Some(BASE32)).unwrap_err(),
      Error::InvalidV0Base("base32")
    );
  }

  #[test]
  fn conversions() {
    let v0 = Cid::new_v0(test_digest()).unwrap();
    assert_eq!(v0.to_v0().unwrap(), v0);
    assert_eq!(v0.to_v0().unwrap().to_v0().unwrap(), v0);
    assert_eq!(v0.to_v1().to_v1(), v0.to_v1());
    assert_eq!(v0.to_v1().base(), BASE58BTC);
    assert_eq!(v0.to_v1().to_v0().unwrap(), v0);

    let raw = Cid::new_v1(0x55, test_digest());
    assert_eq!(raw.to_v0().unwrap_err(), Error::NonDagPbToV0(0x55));
    let sha512 = Cid::new_v1(DAG_PB_CODE, Digest::create(0x13, &[0; 64]));
    assert_eq!(sha512.to_v0().unwrap_err(), Error::NonSha256ToV0(0x13));
    let short = Cid::new_v1(DAG_PB_CODE, Digest::create(0x12, &[0; 20]));
    assert_eq!(short.to_v0().unwrap_err(), Error::NonSha256ToV0(0x12));
  }

  #[test]
  fn equality_ignores_base() {
    let a = Cid::new_v1_with_base(0x71, test_digest(), BASE32);
    let b = Cid::new_v1_with_base(0x71, test_digest(), BASE16);
    assert_eq!(a, b);
    assert_eq!(a.to_string(), b.to_string());
    assert!(a.to_string().starts_with('b'));
    assert!(b.to_string_of_base(&b.base()).unwrap().starts_with('f'));
    assert_ne!(a, Cid::new_v1(0x55, test_digest()));
  }

  #[test]
  fn parse_remembers_the_decoding_base() {
    let cid = Cid::new_v1(0x71, test_digest());
    let text = cid.to_string_of_base(&BASE58BTC).unwrap();
    assert!(text.starts_with('z'));
    let parsed = Cid::parse(&text).unwrap();
    assert_eq!(parsed.base(), BASE58BTC);
    assert_eq!(parsed.to_string_of_base(&parsed.base()).unwrap(), text);
    assert_eq!(parsed.to_string(), cid.to_string());
    assert!(parsed.to_string().starts_with('b'));
  }

  #[test]
  fn parse_with_explicit_base() {
    let cid = Cid::new_v1(0x71, test_digest());
    let text = cid.to_string_of_base(&BASE64).unwrap();
    assert_eq!(Cid::parse(&text).unwrap_err(), Error::UnsupportedBase('m'));
    assert_eq!(Cid::parse_with(&text, &BASE64).unwrap(), cid);
  }

  #[test]
  fn prefixed_v0_text_parses() {
    let cid = Cid::parse(V0_TEXT).unwrap();
    let prefixed = BASE58BTC.encode(cid.as_bytes()).unwrap();
    let parsed = Cid::parse(&prefixed).unwrap();
    assert_eq!(parsed, cid);
    assert_eq!(parsed.to_string(), V0_TEXT);
  }

  #[test]
  fn invalid_version() {
    let mut bytes = Cid::new_v1(0x71, test_digest()).to_bytes();
    bytes[0] = 2;
    assert_eq!(Cid::decode(&bytes).unwrap_err(), Error::InvalidVersion(2));
  }

  #[test]
  fn truncated_digest_is_length_mismatch() {
    let mut bytes = Cid::new_v1(0x71, test_digest()).to_bytes();
    bytes.pop();
    assert_eq!(
      Cid::decode(&bytes).unwrap_err(),
      Error::LengthMismatch { declared: 32, actual: 31 }
    );
    let mut v0 = Cid::new_v0(test_digest()).unwrap().to_bytes();
    v0.pop();
    assert_eq!(
      Cid::decode(&v0).unwrap_err(),
      Error::LengthMismatch { declared: 32, actual: 31 }
    );
  }

  #[test]
  fn empty_input_fails() {
    assert!(matches!(Cid::decode(&[]), Err(Error::MalformedVarint(_))));
    assert!(matches!(Cid::parse(""), Err(Error::MalformedVarint(_))));
  }

  #[test]
  fn conversions_from_text_and_bytes() {
    let cid = Cid::parse(V1_TEXT).unwrap();
    assert_eq!(V1_TEXT.parse::<Cid>().unwrap(), cid);
    assert_eq!(Cid::try_from(V1_TEXT).unwrap(), cid);
    assert_eq!(Cid::try_from(V1_TEXT.to_string()).unwrap(), cid);
    assert_eq!(Cid::try_from(cid.as_bytes()).unwrap(), cid);
    assert_eq!(Cid::try_from(Vec::from(&cid)).unwrap(), cid);
    assert_eq!(format!("{:?}", cid), format!("Cid({})", V1_TEXT));
  }

  #[test]
  fn to_json_view() {
    let cid = Cid::new_v1(0x71, test_digest());
    let json = cid.to_json();
    assert_eq!(json.code, 0x71);
    assert_eq!(json.version, 1);
    assert_eq!(json.hash, test_digest().to_bytes());
    assert_eq!(Cid::new_v0(test_digest()).unwrap().to_json().version, 0);
  }

  #[test]
  fn placeholder_base_still_displays() {
    let placeholder = crate::bases::base::BASE16;
    let cid = Cid::new_v1_with_base(0x71, test_digest(), placeholder);
    assert_eq!(
      cid.to_string_of_base(&placeholder).unwrap_err(),
      Error::NotImplemented("base16")
    );
    assert_eq!(cid.to_string(), cid.to_string_of_base(&BASE32).unwrap());
  }

  #[test]
  fn v0_with_placeholder_base58btc_displays() {
    let placeholder = crate::bases::base::BASE58BTC;
    let cid =
      Cid::new(Version::V0, DAG_PB_CODE, test_digest(), placeholder).unwrap();
    assert!(cid.base().is_implemented());
    let text = cid.to_string();
    assert!(text.starts_with("Qm"), "{}", text);
    assert_eq!(format!("{:?}", cid), format!("Cid({})", text));
    assert_eq!(cid.to_string_of_base(&cid.base()).unwrap(), text);
  }

  struct UpperHex;

  impl BaseEncoder for UpperHex {
    fn name(&self) -> &'static str { "base16upper" }

    fn prefix(&self) -> char { 'F' }

    fn base_encode(&self, bytes: &[u8]) -> Result<String> {
      Ok(hex::encode_upper(bytes))
    }
  }

  #[test]
  fn renders_with_any_encoder() {
    let cid = Cid::new_v1(0x71, test_digest());
    let text = cid.to_string_of_base(&UpperHex).unwrap();
    assert_eq!(text, format!("F{}", hex::encode_upper(cid.as_bytes())));
    assert_eq!(cid.to_string_of_base(&UpperHex).unwrap(), text);
    let v0 = Cid::new_v0(test_digest()).unwrap();
    assert_eq!(
      v0.to_string_of_base(&UpperHex).unwrap_err(),
      Error::InvalidV0Base("base16upper")
    );
  }

  #[test]
  fn hash_matches_equality() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(Cid::new_v1_with_base(0x71, test_digest(), BASE32));
    let other_base = Cid::new_v1_with_base(0x71, test_digest(), BASE16);
    assert!(set.contains(&other_base));
  }
}
