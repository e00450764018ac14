//! Single-checkbox boolean input
//!
//! The checkbox renders before its label; the adjacent label always
//! carries the required/optional decoration.

use serde_json::Value;

use plainform_html::{Element, HtmlNode};

use crate::error::RenderResult;
use crate::inputs::InputVariant;
use crate::renderer::RenderContext;

pub(crate) struct BooleanInput;

fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Bool(b) => *b,
		Value::String(s) => s == "true" || s == "1",
		Value::Number(n) => n.as_i64() == Some(1),
		_ => false,
	}
}

impl InputVariant for BooleanInput {
	fn default_components(&self) -> Option<&'static [&'static str]> {
		Some(&["input", "label", "hint", "error"])
	}

	fn render_control(&self, ctx: &RenderContext<'_>) -> RenderResult<HtmlNode> {
		let checked = ctx.selection_value().map(is_truthy).unwrap_or(false);
		let mut el = Element::new("input")
			.attr("type", "checkbox")
			.attr("id", ctx.field_id())
			.attr("name", ctx.field_name())
			.attr("value", "1")
			.attr("class", ctx.css_classes(true))
			.flag("checked", checked)
			.flag("disabled", ctx.options.disabled)
			.flag("required", ctx.required);
		ctx.merge_input_html(&mut el);
		Ok(el.into())
	}
}
