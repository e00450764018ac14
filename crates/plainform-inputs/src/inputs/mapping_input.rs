//! Table-driven mapping input: text area, password, file
//!
//! Dispatches from the resolved type name to a concrete control through a
//! fixed table. A lookup miss is converted to a hard error at the call
//! site; there is no default control and the failure propagates.

use plainform_html::{Element, HtmlNode};

use crate::error::{RenderError, RenderResult};
use crate::inputs::InputVariant;
use crate::renderer::RenderContext;

enum Mapping {
	TextArea,
	Input(&'static str),
}

const MAPPINGS: &[(&str, Mapping)] = &[
	("text", Mapping::TextArea),
	("password", Mapping::Input("password")),
	("file", Mapping::Input("file")),
];

fn lookup(name: &str) -> Option<&'static Mapping> {
	MAPPINGS
		.iter()
		.find(|(key, _)| *key == name)
		.map(|(_, mapping)| mapping)
}

pub(crate) struct MappingInput;

impl InputVariant for MappingInput {
	fn render_control(&self, ctx: &RenderContext<'_>) -> RenderResult<HtmlNode> {
		let name = ctx.resolved.as_str();
		let mapping = lookup(name).ok_or_else(|| {
			RenderError::UnresolvedType(format!("no mapping for input type `{name}`"))
		})?;
		let mut el = match mapping {
			Mapping::TextArea => {
				let mut el = Element::new("textarea")
					.attr("id", ctx.field_id())
					.attr("name", ctx.field_name())
					.attr("class", ctx.css_classes(true))
					.maybe_attr("placeholder", ctx.options.placeholder.clone());
				if let Some(value) = ctx.current_string() {
					el = el.text(value);
				}
				el
			}
			// Passwords and files never echo a value back
			Mapping::Input(input_type) => Element::new("input")
				.attr("type", *input_type)
				.attr("id", ctx.field_id())
				.attr("name", ctx.field_name())
				.attr("class", ctx.css_classes(true)),
		};
		el.set_flag("disabled", ctx.options.disabled);
		el.set_flag("required", ctx.required);
		ctx.merge_input_html(&mut el);
		Ok(el.into())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_lookup_misses_for_unmapped_names() {
		assert!(lookup("text").is_some());
		assert!(lookup("password").is_some());
		assert!(lookup("file").is_some());
		assert!(lookup("string").is_none());
		assert!(lookup("").is_none());
	}
}
