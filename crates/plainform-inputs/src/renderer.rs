//! The public entry point and per-request render context
//!
//! [`FormRenderer`] owns the pieces that outlive a single render call:
//! configuration, the translation backend, and the translation cache.
//! Everything else is request-scoped: [`RenderContext`] is built fresh
//! for each call and discarded with it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use plainform_html::{Element, HtmlNode};

use crate::collection::value_to_string;
use crate::constraints::{self, ConstraintSet};
use crate::error::RenderResult;
use crate::i18n::{NoTranslations, TranslationCache, Translations};
use crate::inputs;
use crate::metadata::{ModelAdapter, Validation};
use crate::options::InputOptions;
use crate::pipeline;
use crate::registry::{self, ResolvedType};
use crate::wrapper;

/// Process-wide rendering defaults
///
/// Serializable so hosts can load it from their settings layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
	/// Locale used for all i18n lookups
	pub locale: String,
	/// Cap for the `size` attribute on text-like controls
	pub default_input_size: usize,
	/// Required-ness of fields with no model and no explicit option
	pub required_by_default: bool,
	/// Default priority subset for country selects
	pub country_priority: Vec<String>,
	/// Default priority subset for time-zone selects
	pub time_zone_priority: Vec<String>,
	/// Component order used by variants that do not override it
	pub default_components: Vec<String>,
}

impl Default for RendererConfig {
	fn default() -> Self {
		Self {
			locale: "en".to_string(),
			default_input_size: 50,
			required_by_default: true,
			country_priority: Vec::new(),
			time_zone_priority: Vec::new(),
			default_components: vec![
				"label".to_string(),
				"input".to_string(),
				"hint".to_string(),
				"error".to_string(),
			],
		}
	}
}

/// Request-scoped state shared by the pipeline and the input variants
pub(crate) struct RenderContext<'a> {
	pub object_name: &'a str,
	pub attribute: &'a str,
	pub model: Option<&'a dyn ModelAdapter>,
	pub resolved: ResolvedType,
	pub options: &'a InputOptions,
	pub config: &'a RendererConfig,
	pub translations: &'a dyn Translations,
	pub cache: &'a TranslationCache,
	pub required: bool,
	pub current: Option<Value>,
	pub constraints: ConstraintSet,
}

impl<'a> RenderContext<'a> {
	pub fn field_id(&self) -> String {
		wrapper::field_id(self.object_name, self.attribute)
	}

	pub fn field_name(&self) -> String {
		wrapper::field_name(self.object_name, self.attribute)
	}

	/// Control/label css classes: semantic type(s) plus required/optional
	pub fn css_classes(&self, decorate_required: bool) -> String {
		let mut parts: Vec<&str> = self.resolved.css_types().to_vec();
		if decorate_required {
			parts.push(wrapper::requiredness_class(self.required));
		}
		wrapper::class_list(parts)
	}

	/// i18n lookup: attribute-specific key first, generic key fallback
	pub fn translate(&self, section: &str) -> Option<String> {
		let locale = &self.config.locale;
		let specific = format!("{section}.{}.{}", self.object_name, self.attribute);
		self.translations
			.translate(&specific, locale)
			.or_else(|| {
				let generic = format!("{section}.{}", self.attribute);
				self.translations.translate(&generic, locale)
			})
	}

	/// The value that drives selection: the attribute's current value, or
	/// the `default` option when the attribute has none
	pub fn selection_value(&self) -> Option<&Value> {
		match &self.current {
			Some(v) if !v.is_null() => Some(v),
			_ => self.options.default.as_ref(),
		}
	}

	/// Current value as markup text, when present
	pub fn current_string(&self) -> Option<String> {
		match &self.current {
			Some(v) if !v.is_null() => Some(value_to_string(v)),
			_ => None,
		}
	}

	pub fn column_limit(&self) -> Option<usize> {
		self.model.and_then(|m| m.column_limit(self.attribute))
	}

	/// Merge the `input_html` sub-map into a built control; caller-supplied
	/// attributes take precedence over inferred ones
	pub fn merge_input_html(&self, el: &mut Element) {
		for (name, value) in &self.options.input_html {
			match value {
				Value::Bool(on) => el.set_flag(name.clone(), *on),
				other => el.set_attr(name.clone(), value_to_string(other)),
			}
		}
	}
}

/// Renders one input per call
///
/// # Examples
///
/// ```
/// use plainform_inputs::metadata::{ColumnType, StaticModel};
/// use plainform_inputs::options::InputOptions;
/// use plainform_inputs::renderer::FormRenderer;
/// use serde_json::json;
///
/// let renderer = FormRenderer::new();
/// let user = StaticModel::new()
/// 	.column("name", ColumnType::String)
/// 	.value("name", json!("Jose"));
///
/// let node = renderer
/// 	.input("user", Some(&user), "name", &InputOptions::new())
/// 	.unwrap();
/// let input = node.find_by_id("user_name").unwrap();
/// assert_eq!(input.attr_text("type"), Some("text"));
/// assert_eq!(input.attr_text("value"), Some("Jose"));
/// ```
pub struct FormRenderer {
	config: RendererConfig,
	translations: Box<dyn Translations>,
	cache: TranslationCache,
}

impl Default for FormRenderer {
	fn default() -> Self {
		Self::new()
	}
}

impl FormRenderer {
	/// A renderer with default configuration and no translations
	pub fn new() -> Self {
		Self {
			config: RendererConfig::default(),
			translations: Box::new(NoTranslations),
			cache: TranslationCache::new(),
		}
	}

	pub fn with_config(mut self, config: RendererConfig) -> Self {
		self.config = config;
		self
	}

	pub fn with_translations(mut self, translations: impl Translations + 'static) -> Self {
		self.translations = Box::new(translations);
		self
	}

	pub fn config(&self) -> &RendererConfig {
		&self.config
	}

	pub fn config_mut(&mut self) -> &mut RendererConfig {
		&mut self.config
	}

	/// Drop a translation cache key; callers coordinate this outside of
	/// concurrent render windows (typically between tests)
	pub fn reset_i18n_cache(&self, key: &str) {
		self.cache.invalidate(key);
	}

	/// Render one input for `(object, attribute)`
	///
	/// `model` may be absent for detached fields; the object name alone
	/// then drives ids and names. Any error aborts the whole call —
	/// partial markup is never returned.
	pub fn input(
		&self,
		object_name: &str,
		model: Option<&dyn ModelAdapter>,
		attribute: &str,
		options: &InputOptions,
	) -> RenderResult<HtmlNode> {
		debug!(object = object_name, attribute, "rendering input");
		let column_type = model.and_then(|m| m.column_type(attribute));
		let is_association = model.map(|m| m.is_association(attribute)).unwrap_or(false);
		let resolved = registry::resolve(
			options.as_type.as_deref(),
			column_type,
			attribute,
			is_association,
			model.is_some(),
		)?;

		let validations = model
			.map(|m| m.validations(attribute))
			.unwrap_or_default();
		let constraints = constraints::infer(&validations, resolved);
		let required = match options.required {
			Some(required) => required,
			None => match model {
				Some(_) => validations.iter().any(|v| matches!(v, Validation::Presence)),
				None => self.config.required_by_default,
			},
		};

		let ctx = RenderContext {
			object_name,
			attribute,
			model,
			resolved,
			options,
			config: &self.config,
			translations: self.translations.as_ref(),
			cache: &self.cache,
			required,
			current: model.and_then(|m| m.value(attribute)),
			constraints,
		};
		let variant = inputs::variant_for(resolved, options.collection.is_some());
		pipeline::compose(&ctx, variant)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_config_defaults() {
		let config = RendererConfig::default();
		assert_eq!(config.default_input_size, 50);
		assert!(config.required_by_default);
		assert_eq!(config.default_components, vec!["label", "input", "hint", "error"]);
	}

	#[test]
	fn test_config_deserializes_with_partial_fields() {
		let config: RendererConfig =
			serde_json::from_str(r#"{"default_input_size": 30}"#).unwrap();
		assert_eq!(config.default_input_size, 30);
		assert_eq!(config.locale, "en");
	}
}
