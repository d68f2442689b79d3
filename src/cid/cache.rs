use crate::error::Result;
use alloc::string::String;
use sp_std::collections::btree_map::BTreeMap;
use tracing::trace;

#[cfg(not(feature = "std"))]
use core::cell::RefCell;
#[cfg(feature = "std")]
use std::sync::{
  PoisonError,
  RwLock,
};

/// Text renderings of one CID, keyed by base name. Entries are only ever
/// added: the CID they belong to is immutable, so a rendering never goes
/// stale. Two threads racing on a missing entry both compute the same text
/// and the second write is a no-op.
#[derive(Default)]
pub(crate) struct BaseCache {
  #[cfg(feature = "std")]
  texts: RwLock<BTreeMap<&'static str, String>>,
  #[cfg(not(feature = "std"))]
  texts: RefCell<BTreeMap<&'static str, String>>,
}

impl BaseCache {
  #[cfg(feature = "std")]
  pub fn get(&self, base: &str) -> Option<String> {
    let texts = self.texts.read().unwrap_or_else(PoisonError::into_inner);
    texts.get(base).cloned()
  }

  #[cfg(not(feature = "std"))]
  pub fn get(&self, base: &str) -> Option<String> {
    self.texts.borrow().get(base).cloned()
  }

  #[cfg(feature = "std")]
  pub fn insert(&self, base: &'static str, text: String) {
    let mut texts = self.texts.write().unwrap_or_else(PoisonError::into_inner);
    texts.entry(base).or_insert(text);
  }

  #[cfg(not(feature = "std"))]
  pub fn insert(&self, base: &'static str, text: String) {
    self.texts.borrow_mut().entry(base).or_insert(text);
  }

  /// Returns the cached text for `base`, computing and storing it on a
  /// miss.
  pub fn get_or_try_insert_with<F>(
    &self,
    base: &'static str,
    render: F,
  ) -> Result<String>
  where
    F: FnOnce() -> Result<String>,
  {
    if let Some(text) = self.get(base) {
      return Ok(text);
    }
    trace!(base, "rendering CID text");
    let text = render()?;
    self.insert(base, text.clone());
    Ok(text)
  }

  /// Like [`BaseCache::get_or_try_insert_with`] for renderings that cannot
  /// fail.
  pub fn get_or_insert_with<F>(&self, base: &'static str, render: F) -> String
  where F: FnOnce() -> String {
    if let Some(text) = self.get(base) {
      return text;
    }
    trace!(base, "rendering CID text");
    let text = render();
    self.insert(base, text.clone());
    text
  }

  fn snapshot(&self) -> BTreeMap<&'static str, String> {
    #[cfg(feature = "std")]
    let texts = self.texts.read().unwrap_or_else(PoisonError::into_inner);
    #[cfg(not(feature = "std"))]
    let texts = self.texts.borrow();
    texts.clone()
  }
}

impl Clone for BaseCache {
  fn clone(&self) -> Self {
    BaseCache { texts: self.snapshot().into() }
  }
}

#[cfg(test)]
pub mod tests {
  use super::*;
  use crate::error::Error;
  use alloc::string::ToString;

  #[test]
  fn renders_once_per_base() {
    let cache = BaseCache::default();
    let mut calls = 0;
    for _ in 0..3 {
      let text = cache
        .get_or_try_insert_with("base32", || {
          calls += 1;
          Ok("bafy".to_string())
        })
        .unwrap();
      assert_eq!(text, "bafy");
    }
    assert_eq!(calls, 1);
  }

  #[test]
  fn failures_are_not_cached() {
    let cache = BaseCache::default();
    let failed = cache.get_or_try_insert_with("base16", || {
      Err(Error::NotImplemented("base16"))
    });
    assert_eq!(failed, Err(Error::NotImplemented("base16")));
    assert_eq!(cache.get("base16"), None);
  }

  #[test]
  fn infallible_renders_share_entries() {
    let cache = BaseCache::default();
    cache.insert("base32", "bafy".to_string());
    let text = cache.get_or_insert_with("base32", || "other".to_string());
    assert_eq!(text, "bafy");
    let text = cache.get_or_insert_with("base58btc", || "Qm".to_string());
    assert_eq!(text, "Qm");
    assert_eq!(cache.get("base58btc"), Some("Qm".to_string()));
  }

  #[test]
  fn first_write_wins() {
    let cache = BaseCache::default();
    cache.insert("base32", "first".to_string());
    cache.insert("base32", "second".to_string());
    assert_eq!(cache.get("base32"), Some("first".to_string()));
    assert_eq!(cache.clone().get("base32"), Some("first".to_string()));
  }
}
