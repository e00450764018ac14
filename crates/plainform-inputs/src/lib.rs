//! Form input rendering engine
//!
//! Turns an attribute of a model-like object into a complete form field:
//! the input type is resolved from explicit hints and column metadata,
//! HTML constraints are inferred from the model's validations, and the
//! field is assembled from a configurable component pipeline (label,
//! input, hint, error).
//!
//! The entry point is [`FormRenderer::input`].
//!
//! # Examples
//!
//! ```
//! use plainform_inputs::{ColumnType, FormRenderer, InputOptions, StaticModel};
//! use serde_json::json;
//!
//! let renderer = FormRenderer::new();
//! let model = StaticModel::new()
//! 	.column("name", ColumnType::String)
//! 	.value("name", json!("New project"));
//! let html = renderer
//! 	.input("project", Some(&model), "name", &InputOptions::new())
//! 	.unwrap()
//! 	.to_html();
//! assert!(html.contains("id=\"project_name\""));
//! assert!(html.contains("name=\"project[name]\""));
//! ```

pub mod collection;
pub mod constraints;
pub mod data;
pub mod error;
pub mod i18n;
pub mod inputs;
pub mod metadata;
pub mod options;
pub mod pipeline;
pub mod registry;
pub mod renderer;
pub mod wrapper;

pub use collection::{CollectionEntry, CollectionSource, Extractor};
pub use constraints::ConstraintSet;
pub use error::{RenderError, RenderResult};
pub use i18n::{MessageMap, NoTranslations, TranslationCache, Translations};
pub use metadata::{ColumnType, ModelAdapter, StaticModel, Validation};
pub use options::{DatePart, InputOptions, PriorityFilter, Prompt};
pub use registry::ResolvedType;
pub use renderer::{FormRenderer, RendererConfig};
