//! sha2 hashers backed by the `sha2` crate.

use crate::hashes::{
  Hasher,
  SHA2_256_CODE,
  SHA2_512_CODE,
};
use ::sha2::{
  Digest as _,
  Sha256,
  Sha512,
};
use sp_std::vec::Vec;

fn sha256(input: &[u8]) -> Vec<u8> { Sha256::digest(input).to_vec() }

fn sha512(input: &[u8]) -> Vec<u8> { Sha512::digest(input).to_vec() }

pub const SHA2_256: Hasher = Hasher::new("sha2-256", SHA2_256_CODE, sha256);

pub const SHA2_512: Hasher = Hasher::new("sha2-512", SHA2_512_CODE, sha512);
