//! Input type resolution
//!
//! Maps a request — explicit type, column type, attribute name,
//! association-ness — onto exactly one [`ResolvedType`]. Resolution is
//! deterministic, happens once per request, and rejects unknown types
//! here rather than at render time.

use tracing::debug;

use crate::error::{RenderError, RenderResult};
use crate::metadata::ColumnType;

/// The closed set of input types the engine can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvedType {
	String,
	Text,
	Integer,
	Float,
	Decimal,
	Boolean,
	Date,
	Datetime,
	Time,
	Select,
	Radio,
	Checkbox,
	Country,
	TimeZone,
	File,
	Password,
	Hidden,
	Email,
	Url,
	Search,
	Tel,
}

impl ResolvedType {
	/// Parse a requested type name; `None` for names outside the closed set
	pub fn parse(name: &str) -> Option<Self> {
		Some(match name {
			"string" => Self::String,
			"text" => Self::Text,
			"integer" => Self::Integer,
			"float" => Self::Float,
			"decimal" => Self::Decimal,
			"boolean" => Self::Boolean,
			"date" => Self::Date,
			"datetime" => Self::Datetime,
			"time" => Self::Time,
			"select" => Self::Select,
			"radio" => Self::Radio,
			"checkbox" => Self::Checkbox,
			"country" => Self::Country,
			"time_zone" => Self::TimeZone,
			"file" => Self::File,
			"password" => Self::Password,
			"hidden" => Self::Hidden,
			"email" => Self::Email,
			"url" => Self::Url,
			"search" => Self::Search,
			"tel" => Self::Tel,
			_ => return None,
		})
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::String => "string",
			Self::Text => "text",
			Self::Integer => "integer",
			Self::Float => "float",
			Self::Decimal => "decimal",
			Self::Boolean => "boolean",
			Self::Date => "date",
			Self::Datetime => "datetime",
			Self::Time => "time",
			Self::Select => "select",
			Self::Radio => "radio",
			Self::Checkbox => "checkbox",
			Self::Country => "country",
			Self::TimeZone => "time_zone",
			Self::File => "file",
			Self::Password => "password",
			Self::Hidden => "hidden",
			Self::Email => "email",
			Self::Url => "url",
			Self::Search => "search",
			Self::Tel => "tel",
		}
	}

	/// CSS classes carried by the control: the base semantic type plus,
	/// for typed string variants, the specific subtype
	pub fn css_types(&self) -> &'static [&'static str] {
		match self {
			Self::Email => &["string", "email"],
			Self::Url => &["string", "url"],
			Self::Search => &["string", "search"],
			Self::Tel => &["string", "tel"],
			Self::String => &["string"],
			Self::Text => &["text"],
			Self::Integer => &["integer"],
			Self::Float => &["float"],
			Self::Decimal => &["decimal"],
			Self::Boolean => &["boolean"],
			Self::Date => &["date"],
			Self::Datetime => &["datetime"],
			Self::Time => &["time"],
			Self::Select => &["select"],
			Self::Radio => &["radio"],
			Self::Checkbox => &["checkbox"],
			Self::Country => &["country"],
			Self::TimeZone => &["time_zone"],
			Self::File => &["file"],
			Self::Password => &["password"],
			Self::Hidden => &["hidden"],
		}
	}

	pub fn is_numeric(&self) -> bool {
		matches!(self, Self::Integer | Self::Float | Self::Decimal)
	}

	pub fn is_composite(&self) -> bool {
		matches!(self, Self::Date | Self::Datetime | Self::Time)
	}

	/// All members of the closed enumeration, for exhaustive checks
	pub fn all() -> &'static [ResolvedType] {
		&[
			Self::String,
			Self::Text,
			Self::Integer,
			Self::Float,
			Self::Decimal,
			Self::Boolean,
			Self::Date,
			Self::Datetime,
			Self::Time,
			Self::Select,
			Self::Radio,
			Self::Checkbox,
			Self::Country,
			Self::TimeZone,
			Self::File,
			Self::Password,
			Self::Hidden,
			Self::Email,
			Self::Url,
			Self::Search,
			Self::Tel,
		]
	}
}

/// Resolve the input type for a request
///
/// Precedence: explicit type, association heuristic, column type (with
/// attribute-name refinement for string columns), then the detached
/// default. A model whose column metadata is missing has no mapping to
/// fall back on; that failure surfaces to the caller.
///
/// # Examples
///
/// ```
/// use plainform_inputs::metadata::ColumnType;
/// use plainform_inputs::registry::{ResolvedType, resolve};
///
/// let t = resolve(None, Some(ColumnType::Integer), "age", false, true).unwrap();
/// assert_eq!(t, ResolvedType::Integer);
///
/// let t = resolve(Some("radio"), Some(ColumnType::Integer), "age", false, true).unwrap();
/// assert_eq!(t, ResolvedType::Radio);
/// ```
pub fn resolve(
	explicit: Option<&str>,
	column_type: Option<ColumnType>,
	attribute: &str,
	is_association: bool,
	has_model: bool,
) -> RenderResult<ResolvedType> {
	let resolved = if let Some(name) = explicit {
		ResolvedType::parse(name).ok_or_else(|| RenderError::UnresolvedType(name.to_string()))?
	} else if is_association {
		ResolvedType::Select
	} else if let Some(column) = column_type {
		from_column(column, attribute)
	} else if has_model {
		// A backed model without column metadata has nothing to map from
		return Err(RenderError::UnresolvedType(format!(
			"no column metadata for attribute `{attribute}`"
		)));
	} else {
		ResolvedType::String
	};
	debug!(attribute, resolved = resolved.as_str(), "resolved input type");
	Ok(resolved)
}

fn from_column(column: ColumnType, attribute: &str) -> ResolvedType {
	match column {
		ColumnType::String => from_attribute_name(attribute),
		ColumnType::Text => ResolvedType::Text,
		ColumnType::Integer => ResolvedType::Integer,
		ColumnType::Float => ResolvedType::Float,
		ColumnType::Decimal => ResolvedType::Decimal,
		ColumnType::Boolean => ResolvedType::Boolean,
		ColumnType::Date => ResolvedType::Date,
		ColumnType::Datetime => ResolvedType::Datetime,
		ColumnType::Time => ResolvedType::Time,
	}
}

// String columns get refined by attribute name, matching the original
// password/time_zone/country/email/url conventions.
fn from_attribute_name(attribute: &str) -> ResolvedType {
	if attribute.contains("password") {
		ResolvedType::Password
	} else if attribute.contains("time_zone") {
		ResolvedType::TimeZone
	} else if attribute.contains("country") {
		ResolvedType::Country
	} else if attribute.contains("email") {
		ResolvedType::Email
	} else if attribute.contains("url") {
		ResolvedType::Url
	} else {
		ResolvedType::String
	}
}
