//! # Plainform
//!
//! A form-input rendering engine. Point it at an attribute of a
//! model-like object and it figures out the right HTML control, infers
//! client-side constraints from the model's validations, and assembles
//! the field from interchangeable components (label, input, hint,
//! error).
//!
//! This facade re-exports the two workspace crates:
//!
//! - [`html`] — the attribute-ordered HTML node tree and serializer
//! - [`inputs`] — the rendering engine itself
//!
//! The commonly used types are re-exported at the root.
//!
//! # Examples
//!
//! ```
//! use plainform::{ColumnType, FormRenderer, InputOptions, StaticModel, Validation};
//! use serde_json::json;
//!
//! let renderer = FormRenderer::new();
//! let user = StaticModel::new()
//! 	.column("name", ColumnType::String)
//! 	.limit("name", 100)
//! 	.validation("name", Validation::Presence)
//! 	.value("name", json!("Jose"));
//!
//! let field = renderer
//! 	.input("user", Some(&user), "name", &InputOptions::new())
//! 	.unwrap();
//!
//! let input = field.find_by_id("user_name").unwrap();
//! assert_eq!(input.attr_text("class"), Some("string required"));
//! assert_eq!(input.attr_text("maxlength"), Some("100"));
//! ```

pub use plainform_html as html;
pub use plainform_inputs as inputs;

pub use plainform_html::{AttrValue, Element, HtmlNode, escape_html};
pub use plainform_inputs::{
	CollectionEntry, CollectionSource, ColumnType, ConstraintSet, DatePart, Extractor,
	FormRenderer, InputOptions, MessageMap, ModelAdapter, NoTranslations, PriorityFilter, Prompt,
	RenderError, RenderResult, RendererConfig, ResolvedType, StaticModel, TranslationCache,
	Translations, Validation,
};
