//! Render error taxonomy
//!
//! Every error here aborts the enclosing render call; partial markup is
//! never emitted. Missing column metadata, missing validations, and
//! missing translations are not errors — they degrade to omitted
//! attributes or fallback strings.

use thiserror::Error;

/// Errors surfaced by [`FormRenderer::input`](crate::FormRenderer::input)
#[derive(Debug, Error)]
pub enum RenderError {
	/// No input variant is registered for the requested or inferred type
	#[error("could not find an input variant for type `{0}`")]
	UnresolvedType(String),

	/// The components list names a component with no registered generator
	#[error("unknown component `{0}` in components list")]
	UnknownComponent(String),

	/// A collection source could not be normalized into label/value pairs
	#[error("malformed collection: {0}")]
	MalformedCollection(String),
}

pub type RenderResult<T> = Result<T, RenderError>;
