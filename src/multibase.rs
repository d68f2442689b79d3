//! Decoding of multibase text whose base is only known from its prefix.

use crate::{
  bases::{
    BaseDecoder,
    Codec,
    BASE32,
    BASE58BTC,
  },
  error::{
    Error,
    Result,
  },
};
use sp_std::vec::Vec;
use tracing::debug;

/// The decoder used when parsing CIDs without an explicit base: the bases
/// CIDs are rendered in by default.
pub const MULTIBASE: Multibase<'static> = Multibase::new(&[BASE32, BASE58BTC]);

/// A composite decoder over a closed set of bases, routing on the first
/// character of the text.
#[derive(Clone, Copy, Debug)]
pub struct Multibase<'a> {
  bases: &'a [Codec],
}

impl<'a> Multibase<'a> {
  pub const fn new(bases: &'a [Codec]) -> Self { Multibase { bases } }

  /// The base whose prefix is `prefix`.
  pub fn base(&self, prefix: char) -> Option<&'a Codec> {
    self.bases.iter().find(|base| base.prefix() == prefix)
  }
}

impl<'a> BaseDecoder for Multibase<'a> {
  fn decode(&self, text: &str) -> Result<Vec<u8>> {
    let mut chars = text.chars();
    let prefix = match (chars.next(), chars.next()) {
      (Some(prefix), Some(_)) => prefix,
      _ => return Ok(Vec::new()),
    };
    match self.base(prefix) {
      Some(base) => base.decode(text),
      None => {
        debug!(%prefix, "no base decoder for multibase prefix");
        Err(Error::UnsupportedBase(prefix))
      }
    }
  }

  fn resolve(&self, text: &str) -> Option<Codec> {
    text.chars().next().and_then(|prefix| self.base(prefix)).copied()
  }
}
