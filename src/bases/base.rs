use crate::error::{
  Error,
  Result,
};
use alloc::string::String;
use sp_std::{
  fmt,
  vec::Vec,
};

/// Options driving a settings-based base, for alphabets whose rules are not
/// plain character substitution.
pub type Settings = ::base64::Config;

pub type SettingsEncode = fn(&[u8], Settings) -> String;

pub type SettingsDecode =
  fn(&str, Settings) -> core::result::Result<Vec<u8>, ::base64::DecodeError>;

/// How a base turns bytes into text and back, once the multibase prefix has
/// been dealt with.
#[derive(Clone, Copy)]
pub enum Implementation {
  /// Declared by name and prefix only; encoding and decoding fail until an
  /// implementation is supplied.
  Placeholder,
  /// Character-substitution alphabet. Decoding rejects any character
  /// outside `alphabet` before `engine` sees the text.
  Alphabet { alphabet: &'static str, engine: ::multibase::Base },
  /// Encode/decode pair parameterised by `settings`.
  Settings {
    settings: Settings,
    encode: SettingsEncode,
    decode: SettingsDecode,
  },
}

/// A named multibase: a prefix character and the transform for its
/// alphabet.
#[derive(Clone, Copy)]
pub struct Codec {
  name: &'static str,
  prefix: char,
  implementation: Implementation,
}

impl Codec {
  /// Declares a base by name and prefix without wiring its transform.
  pub const fn placeholder(name: &'static str, prefix: char) -> Self {
    Codec { name, prefix, implementation: Implementation::Placeholder }
  }

  /// Returns this base implemented by `engine` over `alphabet`.
  pub const fn with_alphabet(
    self,
    alphabet: &'static str,
    engine: ::multibase::Base,
  ) -> Self {
    self.implement(Implementation::Alphabet { alphabet, engine })
  }

  /// Returns this base implemented by an encode/decode pair driven by
  /// `settings`.
  pub const fn with_settings(
    self,
    settings: Settings,
    encode: SettingsEncode,
    decode: SettingsDecode,
  ) -> Self {
    self.implement(Implementation::Settings { settings, encode, decode })
  }

  /// Returns this base with `implementation` wired in.
  pub const fn implement(self, implementation: Implementation) -> Self {
    Codec { name: self.name, prefix: self.prefix, implementation }
  }

  pub fn name(&self) -> &'static str { self.name }

  pub fn prefix(&self) -> char { self.prefix }

  pub fn is_implemented(&self) -> bool {
    !matches!(self.implementation, Implementation::Placeholder)
  }

  /// Encodes `bytes` as prefixed multibase text.
  ///
  /// # Errors
  ///
  /// Will return `Err` if this base is an unwired placeholder.
  pub fn encode(&self, bytes: &[u8]) -> Result<String> {
    let body = self.base_encode(bytes)?;
    let mut text = String::with_capacity(body.len() + 1);
    text.push(self.prefix);
    text.push_str(&body);
    Ok(text)
  }

  /// Decodes prefixed multibase text. The first character is taken to be
  /// this base's prefix and is not checked.
  ///
  /// # Errors
  ///
  /// Will return `Err` if this base is an unwired placeholder, if the text
  /// contains characters outside the alphabet, or if the alphabet rejects
  /// the text.
  pub fn decode(&self, text: &str) -> Result<Vec<u8>> {
    let body = match text.chars().next() {
      Some(prefix) => &text[prefix.len_utf8()..],
      None => text,
    };
    self.base_decode(body)
  }

  /// Encodes `bytes` in this base's alphabet, without the prefix.
  ///
  /// # Errors
  ///
  /// Will return `Err` if this base is an unwired placeholder.
  pub fn base_encode(&self, bytes: &[u8]) -> Result<String> {
    match self.implementation {
      Implementation::Placeholder => Err(Error::NotImplemented(self.name)),
      Implementation::Alphabet { engine, .. } => Ok(engine.encode(bytes)),
      Implementation::Settings { settings, encode, .. } => {
        Ok(encode(bytes, settings))
      }
    }
  }

  /// Decodes unprefixed text in this base's alphabet.
  ///
  /// # Errors
  ///
  /// Will return `Err` if this base is an unwired placeholder, if the text
  /// contains characters outside the alphabet, or if the alphabet rejects
  /// the text.
  pub fn base_decode(&self, text: &str) -> Result<Vec<u8>> {
    match self.implementation {
      Implementation::Placeholder => Err(Error::NotImplemented(self.name)),
      Implementation::Alphabet { alphabet, engine } => {
        if let Some(character) = text.chars().find(|c| !alphabet.contains(*c))
        {
          return Err(Error::InvalidCharacter { base: self.name, character });
        }
        engine.decode(text).map_err(|_| Error::InvalidBaseText(self.name))
      }
      Implementation::Settings { settings, decode, .. } => {
        decode(text, settings).map_err(|e| match e {
          ::base64::DecodeError::InvalidByte(offset, byte) => {
            // `offset` is a byte index; report the whole character there
            let character = text
              .get(offset..)
              .and_then(|rest| rest.chars().next())
              .unwrap_or(byte as char);
            Error::InvalidCharacter { base: self.name, character }
          }
          _ => Error::InvalidBaseText(self.name),
        })
      }
    }
  }
}

impl PartialEq for Codec {
  fn eq(&self, other: &Self) -> bool {
    self.name == other.name && self.prefix == other.prefix
  }
}

impl Eq for Codec {}

impl fmt::Debug for Codec {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_struct("Codec")
      .field("name", &self.name)
      .field("prefix", &self.prefix)
      .field("implemented", &self.is_implemented())
      .finish()
  }
}

pub const BASE16: Codec = Codec::placeholder("base16", 'f');
pub const BASE32: Codec = Codec::placeholder("base32", 'b');
pub const BASE32PAD: Codec = Codec::placeholder("base32pad", 'c');
pub const BASE32HEX: Codec = Codec::placeholder("base32hex", 'v');
pub const BASE32HEXPAD: Codec = Codec::placeholder("base32hexpad", 't');
pub const BASE32Z: Codec = Codec::placeholder("base32z", 'h');
pub const BASE58BTC: Codec = Codec::placeholder("base58btc", 'z');
pub const BASE58FLICKR: Codec = Codec::placeholder("base58flickr", 'Z');
pub const BASE64: Codec = Codec::placeholder("base64", 'm');
pub const BASE64PAD: Codec = Codec::placeholder("base64pad", 'M');
pub const BASE64URL: Codec = Codec::placeholder("base64url", 'u');
pub const BASE64URLPAD: Codec = Codec::placeholder("base64urlpad", 'U');
