//! Constraint inference from validation metadata
//!
//! Derives `min`/`max`/`step`/required-ness for numeric inputs from the
//! validations declared on an attribute. Derived, never authoritative:
//! an absent field means the corresponding HTML attribute is omitted.

use crate::metadata::Validation;
use crate::registry::ResolvedType;

/// Numeric bounds and required-ness inferred for one attribute
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConstraintSet {
	pub min: Option<f64>,
	pub max: Option<f64>,
	pub step: Option<f64>,
	pub required: bool,
}

/// Infer constraints from declared validations
///
/// Bounds are taken verbatim from the declaration (no ±1 adjustment for
/// exclusive comparisons). `step` is fixed at 1 and only ever populated
/// for integers; float and decimal attributes never receive a step.
///
/// # Examples
///
/// ```
/// use plainform_inputs::constraints::infer;
/// use plainform_inputs::metadata::Validation;
/// use plainform_inputs::registry::ResolvedType;
///
/// let validations = [Validation::GreaterThanOrEqualTo(18.0)];
/// let set = infer(&validations, ResolvedType::Integer);
/// assert_eq!(set.min, Some(18.0));
/// assert_eq!(set.step, Some(1.0));
///
/// let set = infer(&validations, ResolvedType::Float);
/// assert_eq!(set.min, Some(18.0));
/// assert_eq!(set.step, None);
/// ```
pub fn infer(validations: &[Validation], resolved: ResolvedType) -> ConstraintSet {
	let mut set = ConstraintSet::default();
	for validation in validations {
		match *validation {
			Validation::GreaterThan(bound) | Validation::GreaterThanOrEqualTo(bound) => {
				set.min = Some(bound);
			}
			Validation::LessThan(bound) | Validation::LessThanOrEqualTo(bound) => {
				set.max = Some(bound);
			}
			Validation::Presence => set.required = true,
		}
	}
	if resolved == ResolvedType::Integer {
		set.step = Some(1.0);
	}
	set
}

/// Format a bound for markup: integral values render without a decimal
/// point
pub fn format_number(n: f64) -> String {
	if n.fract() == 0.0 && n.abs() < 1e15 {
		format!("{}", n as i64)
	} else {
		n.to_string()
	}
}
