use crate::bases::base::{
  self,
  Codec,
  Settings,
};
use alloc::string::String;
use sp_std::vec::Vec;

fn encode(bytes: &[u8], settings: Settings) -> String {
  ::base64::encode_config(bytes, settings)
}

fn decode(
  text: &str,
  settings: Settings,
) -> Result<Vec<u8>, ::base64::DecodeError> {
  ::base64::decode_config(text, settings)
}

pub const BASE64: Codec =
  base::BASE64.with_settings(::base64::STANDARD_NO_PAD, encode, decode);

pub const BASE64PAD: Codec =
  base::BASE64PAD.with_settings(::base64::STANDARD, encode, decode);

pub const BASE64URL: Codec =
  base::BASE64URL.with_settings(::base64::URL_SAFE_NO_PAD, encode, decode);

pub const BASE64URLPAD: Codec =
  base::BASE64URLPAD.with_settings(::base64::URL_SAFE, encode, decode);
