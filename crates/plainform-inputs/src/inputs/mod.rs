//! Input variants
//!
//! One variant per rendering strategy. Dispatch is a closed match over
//! [`ResolvedType`]; unknown types never reach this table because the
//! registry rejects them at resolution time.

pub mod boolean_input;
pub mod collection_input;
pub mod date_time_input;
pub mod hidden_input;
pub mod mapping_input;
pub mod numeric_input;
pub mod priority_input;
pub mod string_input;

use plainform_html::HtmlNode;

use crate::error::RenderResult;
use crate::registry::ResolvedType;
use crate::renderer::RenderContext;

use boolean_input::BooleanInput;
use collection_input::{CollectionInput, Flavor};
use date_time_input::DateTimeInput;
use hidden_input::HiddenInput;
use mapping_input::MappingInput;
use numeric_input::NumericInput;
use priority_input::{PriorityInput, PriorityKind};
use string_input::TextLikeInput;

/// One concrete input-rendering strategy
pub(crate) trait InputVariant: Sync {
	/// Component order when the variant overrides the configured default
	fn default_components(&self) -> Option<&'static [&'static str]> {
		None
	}

	/// Render the control itself (the `input` component)
	fn render_control(&self, ctx: &RenderContext<'_>) -> RenderResult<HtmlNode>;

	/// The id the field label points at
	fn label_target(&self, ctx: &RenderContext<'_>) -> String {
		ctx.field_id()
	}

	/// Whether labels carry the required/optional decoration
	fn decorate_required(&self) -> bool {
		true
	}
}

static TEXT_LIKE: TextLikeInput = TextLikeInput;
static NUMERIC: NumericInput = NumericInput;
static BOOLEAN: BooleanInput = BooleanInput;
static HIDDEN: HiddenInput = HiddenInput;
static MAPPING: MappingInput = MappingInput;
static COMPOSITE: DateTimeInput = DateTimeInput;
static SELECT: CollectionInput = CollectionInput { flavor: Flavor::Select };
static RADIO: CollectionInput = CollectionInput { flavor: Flavor::Radio };
static CHECKBOXES: CollectionInput = CollectionInput {
	flavor: Flavor::Checkboxes,
};
static COUNTRY: PriorityInput = PriorityInput {
	kind: PriorityKind::Country,
};
static TIME_ZONE: PriorityInput = PriorityInput {
	kind: PriorityKind::TimeZone,
};

/// Resolve the variant for a type
///
/// `checkbox` is the one context-sensitive tag: with a collection it
/// renders one checkbox per entry, without one it is the single boolean
/// checkbox.
pub(crate) fn variant_for(resolved: ResolvedType, has_collection: bool) -> &'static dyn InputVariant {
	match resolved {
		ResolvedType::String
		| ResolvedType::Email
		| ResolvedType::Url
		| ResolvedType::Search
		| ResolvedType::Tel => &TEXT_LIKE,
		ResolvedType::Integer | ResolvedType::Float | ResolvedType::Decimal => &NUMERIC,
		ResolvedType::Boolean => &BOOLEAN,
		ResolvedType::Checkbox => {
			if has_collection {
				&CHECKBOXES
			} else {
				&BOOLEAN
			}
		}
		ResolvedType::Select => &SELECT,
		ResolvedType::Radio => &RADIO,
		ResolvedType::Country => &COUNTRY,
		ResolvedType::TimeZone => &TIME_ZONE,
		ResolvedType::Date | ResolvedType::Datetime | ResolvedType::Time => &COMPOSITE,
		ResolvedType::Text | ResolvedType::Password | ResolvedType::File => &MAPPING,
		ResolvedType::Hidden => &HIDDEN,
	}
}
