//! Translation lookup and the shared translation cache
//!
//! The engine consumes translations through the [`Translations`] trait and
//! never fails on a missing key; lookups fall back from the
//! attribute-specific key to the generic key to a built-in default.
//!
//! The only state shared across render calls is the [`TranslationCache`].
//! It is read-mostly and never auto-expires; callers coordinate resets
//! (typically between tests) through
//! [`invalidate`](TranslationCache::invalidate).

use std::collections::HashMap;

use parking_lot::RwLock;

/// Cache key under which the synthesized boolean yes/no collection is
/// stored, per locale
pub const BOOLEAN_COLLECTION_CACHE_KEY: &str = "boolean_collection";

/// Key→string translation lookup
pub trait Translations: Send + Sync {
	/// Translate `key` for `locale`, or `None` when no translation exists
	fn translate(&self, key: &str, locale: &str) -> Option<String>;
}

/// Null object: translates nothing, so every lookup uses its fallback
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranslations;

impl Translations for NoTranslations {
	fn translate(&self, _key: &str, _locale: &str) -> Option<String> {
		None
	}
}

/// Map-backed [`Translations`] store, one message map per locale
///
/// # Examples
///
/// ```
/// use plainform_inputs::i18n::{MessageMap, Translations};
///
/// let mut messages = MessageMap::new();
/// messages.add("en", "yes", "Sim");
/// assert_eq!(messages.translate("yes", "en"), Some("Sim".to_string()));
/// assert_eq!(messages.translate("no", "en"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageMap {
	locales: HashMap<String, HashMap<String, String>>,
}

impl MessageMap {
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a translation for a locale
	pub fn add(
		&mut self,
		locale: impl Into<String>,
		key: impl Into<String>,
		translation: impl Into<String>,
	) {
		self.locales
			.entry(locale.into())
			.or_default()
			.insert(key.into(), translation.into());
	}
}

impl Translations for MessageMap {
	fn translate(&self, key: &str, locale: &str) -> Option<String> {
		self.locales.get(locale)?.get(key).cloned()
	}
}

/// Process-wide cache of translated label/value pairs
///
/// Entries are keyed by cache key, then locale. `invalidate` drops every
/// locale stored under a cache key; there is no automatic expiry.
#[derive(Debug, Default)]
pub struct TranslationCache {
	entries: RwLock<HashMap<String, HashMap<String, Vec<(String, String)>>>>,
}

impl TranslationCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// Fetch a cached collection for (key, locale)
	pub fn get(&self, key: &str, locale: &str) -> Option<Vec<(String, String)>> {
		self.entries.read().get(key)?.get(locale).cloned()
	}

	/// Store a collection under (key, locale)
	pub fn put(&self, key: &str, locale: &str, pairs: Vec<(String, String)>) {
		self.entries
			.write()
			.entry(key.to_string())
			.or_default()
			.insert(locale.to_string(), pairs);
	}

	/// Drop every locale cached under `key`
	pub fn invalidate(&self, key: &str) {
		self.entries.write().remove(key);
	}

	/// Fetch or compute-and-store a collection for (key, locale)
	pub fn get_or_insert_with<F>(&self, key: &str, locale: &str, build: F) -> Vec<(String, String)>
	where
		F: FnOnce() -> Vec<(String, String)>,
	{
		if let Some(cached) = self.get(key, locale) {
			return cached;
		}
		let pairs = build();
		self.put(key, locale, pairs.clone());
		pairs
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_cache_round_trip() {
		let cache = TranslationCache::new();
		cache.put("boolean_collection", "en", vec![("Yes".into(), "true".into())]);
		assert_eq!(
			cache.get("boolean_collection", "en"),
			Some(vec![("Yes".to_string(), "true".to_string())])
		);
		assert_eq!(cache.get("boolean_collection", "pt"), None);
	}

	#[rstest]
	fn test_invalidate_drops_all_locales() {
		let cache = TranslationCache::new();
		cache.put("boolean_collection", "en", vec![]);
		cache.put("boolean_collection", "pt", vec![]);
		cache.invalidate("boolean_collection");
		assert_eq!(cache.get("boolean_collection", "en"), None);
		assert_eq!(cache.get("boolean_collection", "pt"), None);
	}

	#[rstest]
	fn test_get_or_insert_with_computes_once() {
		let cache = TranslationCache::new();
		let mut calls = 0;
		for _ in 0..2 {
			cache.get_or_insert_with("k", "en", || {
				calls += 1;
				vec![("a".into(), "b".into())]
			});
		}
		assert_eq!(calls, 1);
	}
}
