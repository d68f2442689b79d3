use crate::{
  codec::*,
  error::Result,
};
use sp_std::{
  convert::TryFrom,
  vec::Vec,
};

/// Multicodec code of raw binary blocks.
pub const RAW_CODE: u64 = 0x55;

/// Blocks that are their own encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RawCodec;

impl Codec for RawCodec {
  const NAME: &'static str = "raw";
}

impl From<RawCodec> for u64 {
  fn from(_: RawCodec) -> Self { RAW_CODE }
}

impl TryFrom<u64> for RawCodec {
  type Error = UnsupportedCodec;

  fn try_from(code: u64) -> core::result::Result<Self, Self::Error> {
    if code == RAW_CODE { Ok(Self) } else { Err(UnsupportedCodec(code)) }
  }
}

impl Encode<RawCodec> for [u8] {
  fn encode(&self, _: RawCodec, w: &mut Vec<u8>) -> Result<()> {
    w.extend_from_slice(self);
    Ok(())
  }
}

impl Encode<RawCodec> for Vec<u8> {
  fn encode(&self, _: RawCodec, w: &mut Vec<u8>) -> Result<()> {
    w.extend_from_slice(self);
    Ok(())
  }
}

impl Decode<RawCodec> for Vec<u8> {
  fn decode(_: RawCodec, r: &[u8]) -> Result<Self> { Ok(r.to_vec()) }
}
