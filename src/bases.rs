//! Named multibase encodings.
//!
//! Every base is first declared in [`base`] as a placeholder carrying only
//! its name and prefix, then wired to a transform by its own module. The
//! wired bases are re-exported here.

pub mod base;
pub mod base16;
pub mod base32;
pub mod base58;
pub mod base64;

pub use self::{
  base::Codec,
  base16::BASE16,
  base32::{
    BASE32,
    BASE32HEX,
    BASE32HEXPAD,
    BASE32PAD,
    BASE32Z,
  },
  base58::{
    BASE58BTC,
    BASE58FLICKR,
  },
  base64::{
    BASE64,
    BASE64PAD,
    BASE64URL,
    BASE64URLPAD,
  },
};

use crate::error::Result;
use alloc::string::String;
use sp_std::vec::Vec;

/// Every wired base.
pub const ALL: &[Codec] = &[
  BASE16,
  BASE32,
  BASE32PAD,
  BASE32HEX,
  BASE32HEXPAD,
  BASE32Z,
  BASE58BTC,
  BASE58FLICKR,
  BASE64,
  BASE64PAD,
  BASE64URL,
  BASE64URLPAD,
];

/// Encodes bytes as multibase text. Implemented by a single base.
pub trait BaseEncoder {
  fn name(&self) -> &'static str;

  fn prefix(&self) -> char;

  /// Encodes `bytes` without the prefix.
  ///
  /// # Errors
  ///
  /// Will return `Err` if the encoder cannot produce text.
  fn base_encode(&self, bytes: &[u8]) -> Result<String>;

  /// Encodes `bytes` as prefixed multibase text.
  ///
  /// # Errors
  ///
  /// Will return `Err` if the encoder cannot produce text.
  fn encode(&self, bytes: &[u8]) -> Result<String> {
    let body = self.base_encode(bytes)?;
    let mut text = String::with_capacity(body.len() + 1);
    text.push(self.prefix());
    text.push_str(&body);
    Ok(text)
  }
}

/// Decodes multibase text. Implemented by a single base and by composite
/// decoders that pick a base from the text's prefix.
pub trait BaseDecoder {
  /// Decodes `text`, prefix included.
  ///
  /// # Errors
  ///
  /// Will return `Err` if `text` is not valid for the decoder.
  fn decode(&self, text: &str) -> Result<Vec<u8>>;

  /// The base this decoder would use for `text`, if it knows one.
  fn resolve(&self, text: &str) -> Option<Codec>;
}

impl BaseEncoder for Codec {
  fn name(&self) -> &'static str { Codec::name(self) }

  fn prefix(&self) -> char { Codec::prefix(self) }

  fn base_encode(&self, bytes: &[u8]) -> Result<String> {
    Codec::base_encode(self, bytes)
  }

  fn encode(&self, bytes: &[u8]) -> Result<String> {
    Codec::encode(self, bytes)
  }
}

impl BaseDecoder for Codec {
  fn decode(&self, text: &str) -> Result<Vec<u8>> { Codec::decode(self, text) }

  fn resolve(&self, _: &str) -> Option<Codec> { Some(*self) }
}
