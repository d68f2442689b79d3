use crate::bases::base::{
  self,
  Codec,
};
use ::multibase::Base;

const RFC4648: &str = "abcdefghijklmnopqrstuvwxyz234567";
const RFC4648_PAD: &str = "abcdefghijklmnopqrstuvwxyz234567=";
const HEX: &str = "0123456789abcdefghijklmnopqrstuv";
const HEX_PAD: &str = "0123456789abcdefghijklmnopqrstuv=";
const Z: &str = "ybndrfg8ejkmcpqxot1uwisza345h769";

pub const BASE32: Codec =
  base::BASE32.with_alphabet(RFC4648, Base::Base32Lower);

pub const BASE32PAD: Codec =
  base::BASE32PAD.with_alphabet(RFC4648_PAD, Base::Base32PadLower);

pub const BASE32HEX: Codec =
  base::BASE32HEX.with_alphabet(HEX, Base::Base32HexLower);

pub const BASE32HEXPAD: Codec =
  base::BASE32HEXPAD.with_alphabet(HEX_PAD, Base::Base32HexPadLower);

pub const BASE32Z: Codec = base::BASE32Z.with_alphabet(Z, Base::Base32Z);
