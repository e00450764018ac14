//! Shared id/name/class conventions
//!
//! Every variant derives DOM identity the same way: ids join the object
//! and attribute with underscores, names nest the attribute inside the
//! object (`user[name]`), composite sub-fields append a positional
//! suffix, and per-entry controls append a sanitized value.

/// `user` + `name` → `user_name`
pub fn field_id(object: &str, attribute: &str) -> String {
	format!("{object}_{attribute}")
}

/// `user` + `name` → `user[name]`
pub fn field_name(object: &str, attribute: &str) -> String {
	format!("{object}[{attribute}]")
}

/// Composite sub-field id: `user_born_at_1i`
pub fn multipart_id(object: &str, attribute: &str, position: usize) -> String {
	format!("{object}_{attribute}_{position}i")
}

/// Composite sub-field name, multiparameter style: `user[born_at(1i)]`
pub fn multipart_name(object: &str, attribute: &str, position: usize) -> String {
	format!("{object}[{attribute}({position}i)]")
}

/// Per-entry control id: `user_active_true`
pub fn entry_id(object: &str, attribute: &str, value: &str) -> String {
	format!("{object}_{attribute}_{}", sanitize_value(value))
}

/// Lowercase a value for use inside a DOM id: whitespace becomes an
/// underscore, anything outside `[-a-z0-9_]` is dropped
pub fn sanitize_value(value: &str) -> String {
	value
		.chars()
		.filter_map(|c| {
			if c.is_whitespace() {
				Some('_')
			} else if c.is_alphanumeric() || c == '-' || c == '_' {
				Some(c.to_ascii_lowercase())
			} else {
				None
			}
		})
		.collect()
}

/// Human-readable label text for an attribute: strips a trailing `_id`,
/// replaces underscores, and capitalizes the first letter
pub fn humanize(attribute: &str) -> String {
	let base = attribute.strip_suffix("_id").unwrap_or(attribute);
	let spaced = base.replace('_', " ");
	let mut chars = spaced.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
		None => String::new(),
	}
}

/// The `required`/`optional` decoration class
pub fn requiredness_class(required: bool) -> &'static str {
	if required { "required" } else { "optional" }
}

/// Join css classes, skipping empties
pub fn class_list<I, S>(parts: I) -> String
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut out = String::new();
	for part in parts {
		let part = part.as_ref();
		if part.is_empty() {
			continue;
		}
		if !out.is_empty() {
			out.push(' ');
		}
		out.push_str(part);
	}
	out
}
