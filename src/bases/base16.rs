use crate::bases::base::{
  self,
  Codec,
};
use ::multibase::Base;

pub const BASE16: Codec =
  base::BASE16.with_alphabet("0123456789abcdef", Base::Base16Lower);
