#![deny(
  clippy::missing_errors_doc,
  clippy::missing_panics_doc,
  clippy::missing_safety_doc
)]
#![cfg_attr(not(any(feature = "std", test)), no_std)]

#[macro_use]
extern crate alloc;

#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;
#[cfg(test)]
extern crate rand;

pub mod bases;
pub mod cid;
pub mod codec;
pub mod error;
pub mod hashes;
#[cfg(feature = "json")]
pub mod json;
pub mod multibase;
pub mod raw;
pub mod varint;
pub mod version;

pub use crate::{
  cid::{
    Cid,
    CidJson,
  },
  codec::*,
  error::{
    Error,
    Result,
  },
  hashes::{
    Digest,
    Hasher,
  },
  multibase::{
    Multibase,
    MULTIBASE,
  },
  version::Version,
};
