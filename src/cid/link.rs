//! The link form of a CID in serde data models: a single-entry map from
//! `"/"` to the CID's text.

use crate::{
  bases::ALL,
  cid::Cid,
  multibase::Multibase,
};
use alloc::string::String;
use serde::{
  de,
  ser::SerializeMap,
  Deserialize,
  Deserializer,
  Serialize,
  Serializer,
};
use sp_std::fmt;

const SPECIAL_KEY: &str = "/";

/// Links are written in base32 or as `Qm...`, but read in any known base.
const LINK_BASES: Multibase<'static> = Multibase::new(ALL);

impl Serialize for Cid {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where S: Serializer {
    let text = self.render();
    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry(SPECIAL_KEY, &text)?;
    map.end()
  }
}

impl<'de> Deserialize<'de> for Cid {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where D: Deserializer<'de> {
    deserializer.deserialize_map(LinkVisitor)
  }
}

struct LinkVisitor;

impl<'de> de::Visitor<'de> for LinkVisitor {
  type Value = Cid;

  fn expecting(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(fmt, "a map with the single key {:?} holding CID text", SPECIAL_KEY)
  }

  fn visit_map<V>(self, mut visitor: V) -> Result<Self::Value, V::Error>
  where V: de::MapAccess<'de> {
    let text = match visitor.next_entry::<String, String>()? {
      Some((key, text)) if key == SPECIAL_KEY => text,
      Some((key, _)) => {
        return Err(de::Error::unknown_field(&key, &[SPECIAL_KEY]));
      }
      None => return Err(de::Error::missing_field(SPECIAL_KEY)),
    };
    if visitor.next_key::<String>()?.is_some() {
      return Err(de::Error::invalid_length(2, &self));
    }
    Cid::parse_with(&text, &LINK_BASES).map_err(de::Error::custom)
  }
}
