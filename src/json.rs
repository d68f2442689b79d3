use crate::{
  codec::*,
  error::Result,
};
use serde::{
  de::DeserializeOwned,
  Serialize,
};
use sp_std::{
  convert::TryFrom,
  vec::Vec,
};

/// Multicodec code of JSON blocks.
pub const JSON_CODE: u64 = 0x0200;

/// Blocks holding any serde value as JSON text. CIDs inside a value are
/// written in their `{"/": "<cid>"}` link form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct JsonCodec;

impl Codec for JsonCodec {
  const NAME: &'static str = "json";
}

impl From<JsonCodec> for u64 {
  fn from(_: JsonCodec) -> Self { JSON_CODE }
}

impl TryFrom<u64> for JsonCodec {
  type Error = UnsupportedCodec;

  fn try_from(code: u64) -> core::result::Result<Self, Self::Error> {
    if code == JSON_CODE { Ok(Self) } else { Err(UnsupportedCodec(code)) }
  }
}

impl<T: Serialize + ?Sized> Encode<JsonCodec> for T {
  fn encode(&self, _: JsonCodec, w: &mut Vec<u8>) -> Result<()> {
    w.extend_from_slice(&serde_json::to_vec(self)?);
    Ok(())
  }
}

impl<T: DeserializeOwned> Decode<JsonCodec> for T {
  fn decode(_: JsonCodec, r: &[u8]) -> Result<Self> {
    Ok(serde_json::from_slice(r)?)
  }
}
