use crate::bases::base::{
  self,
  Codec,
};
use ::multibase::Base;

pub const BASE58BTC: Codec = base::BASE58BTC.with_alphabet(
  "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz",
  Base::Base58Btc,
);

pub const BASE58FLICKR: Codec = base::BASE58FLICKR.with_alphabet(
  "123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ",
  Base::Base58Flickr,
);
