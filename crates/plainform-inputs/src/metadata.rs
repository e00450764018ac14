//! Model metadata adapter contract
//!
//! The engine never talks to a model or an ORM directly. It consumes the
//! [`ModelAdapter`] trait, which exposes exactly the metadata the renderer
//! needs: column type, column limit, declared validations, the current
//! attribute value, association-ness, and declared errors. Hosts wrap
//! their own model layer behind this trait.
//!
//! [`StaticModel`] is a map-backed implementation for tests, demos, and
//! detached rendering.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Database column type of an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
	String,
	Text,
	Integer,
	Float,
	Decimal,
	Boolean,
	Date,
	Datetime,
	Time,
}

/// A validation declared on an attribute
///
/// The engine reads these to infer HTML constraints; it never enforces
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validation {
	Presence,
	GreaterThan(f64),
	GreaterThanOrEqualTo(f64),
	LessThan(f64),
	LessThanOrEqualTo(f64),
}

/// Read-only view of a host model, per attribute
///
/// All methods have graceful defaults: an adapter that only knows values
/// still renders, it just loses inferred attributes like `maxlength` or
/// `min`.
pub trait ModelAdapter {
	/// Column type backing the attribute, when known
	fn column_type(&self, attribute: &str) -> Option<ColumnType>;

	/// Declared column length limit, when known
	fn column_limit(&self, attribute: &str) -> Option<usize> {
		let _ = attribute;
		None
	}

	/// Validations declared on the attribute
	fn validations(&self, attribute: &str) -> Vec<Validation> {
		let _ = attribute;
		Vec::new()
	}

	/// Current attribute value, when set
	fn value(&self, attribute: &str) -> Option<Value>;

	/// Whether the attribute names an association rather than a column
	fn is_association(&self, attribute: &str) -> bool {
		let _ = attribute;
		false
	}

	/// Error messages currently attached to the attribute
	fn errors(&self, attribute: &str) -> Vec<String> {
		let _ = attribute;
		Vec::new()
	}
}

/// Map-backed [`ModelAdapter`]
///
/// # Examples
///
/// ```
/// use plainform_inputs::metadata::{ColumnType, ModelAdapter, StaticModel, Validation};
/// use serde_json::json;
///
/// let user = StaticModel::new()
/// 	.column("name", ColumnType::String)
/// 	.limit("name", 100)
/// 	.value("name", json!("Jose"))
/// 	.validation("age", Validation::GreaterThanOrEqualTo(18.0));
///
/// assert_eq!(user.column_type("name"), Some(ColumnType::String));
/// assert_eq!(user.column_limit("name"), Some(100));
/// assert_eq!(user.validations("age").len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticModel {
	columns: HashMap<String, ColumnType>,
	limits: HashMap<String, usize>,
	validations: HashMap<String, Vec<Validation>>,
	values: HashMap<String, Value>,
	associations: HashSet<String>,
	errors: HashMap<String, Vec<String>>,
}

impl StaticModel {
	pub fn new() -> Self {
		Self::default()
	}

	/// Declare a column and its type
	pub fn column(mut self, attribute: impl Into<String>, column_type: ColumnType) -> Self {
		self.columns.insert(attribute.into(), column_type);
		self
	}

	/// Declare a column length limit
	pub fn limit(mut self, attribute: impl Into<String>, limit: usize) -> Self {
		self.limits.insert(attribute.into(), limit);
		self
	}

	/// Attach a validation declaration
	pub fn validation(mut self, attribute: impl Into<String>, validation: Validation) -> Self {
		self.validations
			.entry(attribute.into())
			.or_default()
			.push(validation);
		self
	}

	/// Set the current value of an attribute
	pub fn value(mut self, attribute: impl Into<String>, value: Value) -> Self {
		self.values.insert(attribute.into(), value);
		self
	}

	/// Mark an attribute as an association
	pub fn association(mut self, attribute: impl Into<String>) -> Self {
		self.associations.insert(attribute.into());
		self
	}

	/// Attach an error message to an attribute
	pub fn error(mut self, attribute: impl Into<String>, message: impl Into<String>) -> Self {
		self.errors
			.entry(attribute.into())
			.or_default()
			.push(message.into());
		self
	}

	/// Mutate the current value of an attribute in place
	pub fn set_value(&mut self, attribute: impl Into<String>, value: Value) {
		self.values.insert(attribute.into(), value);
	}
}

impl ModelAdapter for StaticModel {
	fn column_type(&self, attribute: &str) -> Option<ColumnType> {
		self.columns.get(attribute).copied()
	}

	fn column_limit(&self, attribute: &str) -> Option<usize> {
		self.limits.get(attribute).copied()
	}

	fn validations(&self, attribute: &str) -> Vec<Validation> {
		self.validations.get(attribute).cloned().unwrap_or_default()
	}

	fn value(&self, attribute: &str) -> Option<Value> {
		self.values.get(attribute).cloned()
	}

	fn is_association(&self, attribute: &str) -> bool {
		self.associations.contains(attribute)
	}

	fn errors(&self, attribute: &str) -> Vec<String> {
		self.errors.get(attribute).cloned().unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	// The `value` builder shadows the trait accessor of the same name, so
	// reads below go through the trait explicitly.
	#[test]
	fn test_static_model_defaults_are_graceful() {
		let model = StaticModel::new();
		assert_eq!(model.column_type("anything"), None);
		assert_eq!(model.column_limit("anything"), None);
		assert!(model.validations("anything").is_empty());
		assert_eq!(ModelAdapter::value(&model, "anything"), None);
		assert!(!model.is_association("anything"));
		assert!(model.errors("anything").is_empty());
	}

	#[test]
	fn test_static_model_set_value_overwrites() {
		let mut model = StaticModel::new().value("name", json!("Jose"));
		assert_eq!(ModelAdapter::value(&model, "name"), Some(json!("Jose")));
		model.set_value("name", json!("Carlos"));
		assert_eq!(ModelAdapter::value(&model, "name"), Some(json!("Carlos")));
	}
}
