//! Collection normalization
//!
//! Turns heterogeneous collection sources — scalar arrays, label/value
//! pairs, integer ranges, domain objects — into an ordered sequence of
//! [`CollectionEntry`] values. Order is always preserved; nothing is
//! sorted or deduplicated here.

use std::fmt;
use std::ops::RangeInclusive;
use std::sync::Arc;

use serde_json::Value;

use crate::error::{RenderError, RenderResult};
use crate::i18n::{BOOLEAN_COLLECTION_CACHE_KEY, TranslationCache, Translations};

/// One normalized collection entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionEntry {
	pub label: String,
	pub value: String,
	pub selected: bool,
	pub disabled: bool,
}

impl CollectionEntry {
	pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			value: value.into(),
			selected: false,
			disabled: false,
		}
	}
}

/// A collection-like value accepted by the `collection` option
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionSource {
	/// Arbitrary values: scalars, `[label, value]` pairs, or objects
	Values(Vec<Value>),
	/// An inclusive integer range, rendered in range order
	Range { start: i64, end: i64 },
}

impl From<Vec<Value>> for CollectionSource {
	fn from(values: Vec<Value>) -> Self {
		Self::Values(values)
	}
}

impl From<RangeInclusive<i64>> for CollectionSource {
	fn from(range: RangeInclusive<i64>) -> Self {
		Self::Range {
			start: *range.start(),
			end: *range.end(),
		}
	}
}

impl From<Vec<&str>> for CollectionSource {
	fn from(values: Vec<&str>) -> Self {
		Self::Values(values.into_iter().map(Value::from).collect())
	}
}

impl From<Vec<String>> for CollectionSource {
	fn from(values: Vec<String>) -> Self {
		Self::Values(values.into_iter().map(Value::from).collect())
	}
}

impl From<Vec<(&str, &str)>> for CollectionSource {
	fn from(pairs: Vec<(&str, &str)>) -> Self {
		Self::Values(
			pairs
				.into_iter()
				.map(|(label, value)| Value::Array(vec![label.into(), value.into()]))
				.collect(),
		)
	}
}

/// Label or value extraction capability
///
/// Either a named accessor (an object key lookup) or an arbitrary
/// function; the normalizer never branches on which one it holds.
#[derive(Clone)]
pub enum Extractor {
	Accessor(String),
	Func(Arc<dyn Fn(&Value) -> Value + Send + Sync>),
}

impl Extractor {
	pub fn accessor(name: impl Into<String>) -> Self {
		Self::Accessor(name.into())
	}

	pub fn func<F>(f: F) -> Self
	where
		F: Fn(&Value) -> Value + Send + Sync + 'static,
	{
		Self::Func(Arc::new(f))
	}

	/// Extract from one collection item; an accessor that misses falls
	/// back to the item itself
	pub fn extract(&self, item: &Value) -> Value {
		match self {
			Self::Accessor(name) => item.get(name).cloned().unwrap_or_else(|| item.clone()),
			Self::Func(f) => f(item),
		}
	}
}

impl fmt::Debug for Extractor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Accessor(name) => f.debug_tuple("Accessor").field(name).finish(),
			Self::Func(_) => f.write_str("Func(..)"),
		}
	}
}

/// Stringify a JSON value the way it should appear in markup: strings
/// bare, numbers and booleans in their canonical form, null empty
pub fn value_to_string(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		Value::Bool(b) => b.to_string(),
		Value::Number(n) => n.to_string(),
		Value::Null => String::new(),
		other => other.to_string(),
	}
}

/// Type-coerced equality between a normalized entry value and the current
/// attribute value: numeric when both sides parse as numbers, string
/// comparison otherwise
pub fn value_eq(entry_value: &str, current: &Value) -> bool {
	let current = value_to_string(current);
	if let (Ok(a), Ok(b)) = (entry_value.parse::<f64>(), current.parse::<f64>()) {
		return a == b;
	}
	entry_value == current
}

/// Normalize a collection source into ordered entries
///
/// Pair shape must be consistent: mixing 2-element arrays with other
/// values, or arrays of any other arity, is malformed.
///
/// # Examples
///
/// ```
/// use plainform_inputs::collection::{CollectionSource, normalize};
/// use serde_json::json;
///
/// let source = CollectionSource::from(18..=20);
/// let entries = normalize(&source, None, None, Some(&json!(19))).unwrap();
/// assert_eq!(entries.len(), 3);
/// assert_eq!(entries[0].label, "18");
/// assert!(entries[1].selected);
/// ```
pub fn normalize(
	source: &CollectionSource,
	label_method: Option<&Extractor>,
	value_method: Option<&Extractor>,
	current: Option<&Value>,
) -> RenderResult<Vec<CollectionEntry>> {
	let mut entries = match source {
		CollectionSource::Range { start, end } => (*start..=*end)
			.map(|n| CollectionEntry::new(n.to_string(), n.to_string()))
			.collect(),
		CollectionSource::Values(values) => normalize_values(values, label_method, value_method)?,
	};
	if let Some(current) = current
		&& !current.is_null()
	{
		for entry in &mut entries {
			entry.selected = value_eq(&entry.value, current);
		}
	}
	Ok(entries)
}

fn normalize_values(
	values: &[Value],
	label_method: Option<&Extractor>,
	value_method: Option<&Extractor>,
) -> RenderResult<Vec<CollectionEntry>> {
	let any_pairs = values.iter().any(Value::is_array);
	let mut entries = Vec::with_capacity(values.len());
	for item in values {
		let entry = match item {
			Value::Array(pair) => {
				if pair.len() != 2 {
					return Err(RenderError::MalformedCollection(format!(
						"expected a [label, value] pair, found an array of {} elements",
						pair.len()
					)));
				}
				CollectionEntry::new(value_to_string(&pair[0]), value_to_string(&pair[1]))
			}
			_ if any_pairs => {
				return Err(RenderError::MalformedCollection(
					"mixed pair and non-pair entries".to_string(),
				));
			}
			Value::Object(_) => {
				let label = extract_label(item, label_method);
				let value = extract_value(item, value_method);
				CollectionEntry::new(label, value)
			}
			scalar => {
				let label = match label_method {
					Some(m) => value_to_string(&m.extract(scalar)),
					None => value_to_string(scalar),
				};
				let value = match value_method {
					Some(m) => value_to_string(&m.extract(scalar)),
					None => value_to_string(scalar),
				};
				CollectionEntry::new(label, value)
			}
		};
		entries.push(entry);
	}
	Ok(entries)
}

// Default label accessors for domain objects, tried in order.
const LABEL_ACCESSORS: &[&str] = &["name", "title", "label"];

fn extract_label(item: &Value, label_method: Option<&Extractor>) -> String {
	if let Some(method) = label_method {
		return value_to_string(&method.extract(item));
	}
	for accessor in LABEL_ACCESSORS {
		if let Some(label) = item.get(accessor) {
			return value_to_string(label);
		}
	}
	value_to_string(item)
}

fn extract_value(item: &Value, value_method: Option<&Extractor>) -> String {
	if let Some(method) = value_method {
		return value_to_string(&method.extract(item));
	}
	match item.get("id") {
		Some(id) => value_to_string(id),
		None => value_to_string(item),
	}
}

/// The synthesized two-entry collection for boolean attributes
///
/// Labels go through i18n ("yes"/"no" keys, defaulting to Yes/No) and are
/// cached process-wide under [`BOOLEAN_COLLECTION_CACHE_KEY`], keyed by
/// locale.
pub fn boolean_collection(
	translations: &dyn Translations,
	cache: &TranslationCache,
	locale: &str,
) -> Vec<(String, String)> {
	cache.get_or_insert_with(BOOLEAN_COLLECTION_CACHE_KEY, locale, || {
		let yes = translations
			.translate("yes", locale)
			.unwrap_or_else(|| "Yes".to_string());
		let no = translations
			.translate("no", locale)
			.unwrap_or_else(|| "No".to_string());
		vec![(yes, "true".to_string()), (no, "false".to_string())]
	})
}

/// Whether a blank entry is auto-inserted for a select
///
/// The blank is suppressed by an explicit `include_blank: false`, by a
/// prompt, or by multiple selection.
pub fn auto_include_blank(include_blank: Option<bool>, has_prompt: bool, multiple: bool) -> bool {
	include_blank.unwrap_or(true) && !has_prompt && !multiple
}
