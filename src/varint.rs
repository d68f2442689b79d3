//! Unsigned LEB128 varints, the framing used by every field of a CID and a
//! multihash.

use crate::error::Result;
use sp_std::vec::Vec;
use unsigned_varint::{
  decode,
  encode,
};

/// Encodes `n` in its minimal varint form.
pub fn encode(n: u64) -> Vec<u8> {
  let mut buf = encode::u64_buffer();
  encode::u64(n, &mut buf).to_vec()
}

/// Writes the varint form of `n` into `target` starting at `offset` and
/// returns the number of bytes written.
///
/// # Panics
///
/// Panics if `target` is shorter than `offset + encoding_length(n)`.
pub fn encode_to(n: u64, target: &mut [u8], offset: usize) -> usize {
  let mut buf = encode::u64_buffer();
  let bytes = encode::u64(n, &mut buf);
  target[offset..offset + bytes.len()].copy_from_slice(bytes);
  bytes.len()
}

/// Decodes a varint from the front of `bytes`, returning the value and how
/// many bytes it occupied.
///
/// # Errors
///
/// Returns `Err` if `bytes` ends before a terminating byte or if the value
/// overflows a `u64`.
pub fn decode(bytes: &[u8]) -> Result<(u64, usize)> {
  let (n, rest) = decode::u64(bytes)?;
  Ok((n, bytes.len() - rest.len()))
}

/// Number of bytes `encode(n)` produces.
pub fn encoding_length(n: u64) -> usize {
  let bits = 64 - n.leading_zeros() as usize;
  if bits == 0 { 1 } else { (bits + 6) / 7 }
}
