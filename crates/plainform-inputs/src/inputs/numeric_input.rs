//! Numeric inputs: integer, float, decimal
//!
//! A number-typed control. Inferred constraints merge in only when
//! present; an absent bound never renders an empty attribute.

use plainform_html::{Element, HtmlNode};

use crate::constraints::format_number;
use crate::error::RenderResult;
use crate::inputs::InputVariant;
use crate::renderer::RenderContext;

pub(crate) struct NumericInput;

impl InputVariant for NumericInput {
	fn render_control(&self, ctx: &RenderContext<'_>) -> RenderResult<HtmlNode> {
		let constraints = &ctx.constraints;
		let mut el = Element::new("input")
			.attr("type", "number")
			.attr("id", ctx.field_id())
			.attr("name", ctx.field_name())
			.maybe_attr("value", ctx.current_string())
			.attr("class", ctx.css_classes(true))
			.attr("size", ctx.config.default_input_size.to_string())
			.maybe_attr("min", constraints.min.map(format_number))
			.maybe_attr("max", constraints.max.map(format_number))
			.maybe_attr("step", constraints.step.map(format_number))
			.flag("disabled", ctx.options.disabled)
			.flag("required", ctx.required);
		ctx.merge_input_html(&mut el);
		Ok(el.into())
	}
}
