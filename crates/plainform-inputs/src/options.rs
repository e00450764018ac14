//! Per-input options
//!
//! [`InputOptions`] carries everything a caller may tune on a single
//! input. It is immutable once dispatch begins; builder methods follow
//! the crate-wide consuming-builder convention.

use std::collections::HashMap;

use regex::Regex;
use serde_json::{Map, Value};

use crate::collection::{CollectionSource, Extractor};

/// Sub-field kind of a composite date/time input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePart {
	Year,
	Month,
	Day,
	Hour,
	Minute,
	Second,
}

/// Prompt text: one text for a select, or per-part texts for a composite
/// date/time input
#[derive(Debug, Clone)]
pub enum Prompt {
	Text(String),
	PerPart(HashMap<DatePart, String>),
}

impl Prompt {
	/// The prompt text applicable to a composite sub-field
	pub fn for_part(&self, part: DatePart) -> Option<&str> {
		match self {
			Prompt::Text(text) => Some(text),
			Prompt::PerPart(map) => map.get(&part).map(String::as_str),
		}
	}
}

/// Priority subset selector for country/time-zone inputs: an explicit
/// list of entry values, or a pattern matched against labels and values
#[derive(Debug, Clone)]
pub enum PriorityFilter {
	Names(Vec<String>),
	Pattern(Regex),
}

impl PriorityFilter {
	pub fn names<I, S>(names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::Names(names.into_iter().map(Into::into).collect())
	}

	pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
		Ok(Self::Pattern(Regex::new(pattern)?))
	}

	/// Whether an entry belongs to the priority subset
	pub fn matches(&self, label: &str, value: &str) -> bool {
		match self {
			Self::Names(names) => names.iter().any(|n| n == value || n == label),
			Self::Pattern(re) => re.is_match(label) || re.is_match(value),
		}
	}
}

/// Options recognized by [`FormRenderer::input`](crate::FormRenderer::input)
///
/// # Examples
///
/// ```
/// use plainform_inputs::options::InputOptions;
///
/// let options = InputOptions::new()
/// 	.as_type("select")
/// 	.collection(18..=60)
/// 	.include_blank(false);
/// assert_eq!(options.as_type.as_deref(), Some("select"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputOptions {
	/// Explicit input type; wins over all inference
	pub as_type: Option<String>,
	pub collection: Option<CollectionSource>,
	pub label_method: Option<Extractor>,
	pub value_method: Option<Extractor>,
	pub priority: Option<PriorityFilter>,
	/// Seeds the selected value when the attribute has none
	pub default: Option<Value>,
	pub prompt: Option<Prompt>,
	pub include_blank: Option<bool>,
	/// Extra attributes merged into the control, overriding inferred ones
	pub input_html: Map<String, Value>,
	/// Full override of the component order; never merged with defaults
	pub components: Option<Vec<String>>,
	pub placeholder: Option<String>,
	pub hint: Option<String>,
	pub label: Option<String>,
	pub disabled: bool,
	pub required: Option<bool>,
	/// Render a seconds select on composite time/datetime inputs
	pub include_seconds: bool,
	/// Render every composite position as a hidden field
	pub use_hidden: bool,
}

impl InputOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn as_type(mut self, name: impl Into<String>) -> Self {
		self.as_type = Some(name.into());
		self
	}

	pub fn collection(mut self, source: impl Into<CollectionSource>) -> Self {
		self.collection = Some(source.into());
		self
	}

	pub fn label_method(mut self, extractor: Extractor) -> Self {
		self.label_method = Some(extractor);
		self
	}

	pub fn value_method(mut self, extractor: Extractor) -> Self {
		self.value_method = Some(extractor);
		self
	}

	pub fn priority(mut self, filter: PriorityFilter) -> Self {
		self.priority = Some(filter);
		self
	}

	pub fn default_value(mut self, value: Value) -> Self {
		self.default = Some(value);
		self
	}

	pub fn prompt(mut self, text: impl Into<String>) -> Self {
		self.prompt = Some(Prompt::Text(text.into()));
		self
	}

	/// Set a prompt for one composite sub-field; repeated calls build the
	/// per-part map
	pub fn prompt_for(mut self, part: DatePart, text: impl Into<String>) -> Self {
		let map = match self.prompt {
			Some(Prompt::PerPart(map)) => {
				let mut map = map;
				map.insert(part, text.into());
				map
			}
			_ => {
				let mut map = HashMap::new();
				map.insert(part, text.into());
				map
			}
		};
		self.prompt = Some(Prompt::PerPart(map));
		self
	}

	pub fn include_blank(mut self, include: bool) -> Self {
		self.include_blank = Some(include);
		self
	}

	pub fn input_html(mut self, name: impl Into<String>, value: Value) -> Self {
		self.input_html.insert(name.into(), value);
		self
	}

	pub fn components<I, S>(mut self, names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.components = Some(names.into_iter().map(Into::into).collect());
		self
	}

	pub fn placeholder(mut self, text: impl Into<String>) -> Self {
		self.placeholder = Some(text.into());
		self
	}

	pub fn hint(mut self, text: impl Into<String>) -> Self {
		self.hint = Some(text.into());
		self
	}

	pub fn label(mut self, text: impl Into<String>) -> Self {
		self.label = Some(text.into());
		self
	}

	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	pub fn required(mut self, required: bool) -> Self {
		self.required = Some(required);
		self
	}

	pub fn include_seconds(mut self, include: bool) -> Self {
		self.include_seconds = include;
		self
	}

	pub fn use_hidden(mut self, use_hidden: bool) -> Self {
		self.use_hidden = use_hidden;
		self
	}

	/// Whether the html-options sub-map requests multiple selection
	pub fn multiple(&self) -> bool {
		matches!(self.input_html.get("multiple"), Some(Value::Bool(true)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_prompt_for_builds_per_part_map() {
		let options = InputOptions::new()
			.prompt_for(DatePart::Year, "ano")
			.prompt_for(DatePart::Month, "mês");
		let prompt = options.prompt.unwrap();
		assert_eq!(prompt.for_part(DatePart::Year), Some("ano"));
		assert_eq!(prompt.for_part(DatePart::Month), Some("mês"));
		assert_eq!(prompt.for_part(DatePart::Day), None);
	}

	#[rstest]
	fn test_text_prompt_applies_to_every_part() {
		let prompt = Prompt::Text("pick".to_string());
		assert_eq!(prompt.for_part(DatePart::Hour), Some("pick"));
	}

	#[rstest]
	fn test_priority_names_match_value_or_label() {
		let filter = PriorityFilter::names(["Brazil"]);
		assert!(filter.matches("Brazil", "Brazil"));
		assert!(!filter.matches("France", "France"));
	}

	#[rstest]
	fn test_priority_pattern() {
		let filter = PriorityFilter::pattern("Brasilia").unwrap();
		assert!(filter.matches("(GMT-03:00) Brasilia", "Brasilia"));
		assert!(!filter.matches("(GMT+00:00) London", "London"));
	}

	#[rstest]
	fn test_multiple_reads_input_html() {
		assert!(!InputOptions::new().multiple());
		assert!(InputOptions::new().input_html("multiple", json!(true)).multiple());
		assert!(!InputOptions::new().input_html("multiple", json!(false)).multiple());
	}
}
