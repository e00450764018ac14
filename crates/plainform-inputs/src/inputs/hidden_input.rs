//! Hidden input
//!
//! Label, hint, error, and required/optional decoration are structurally
//! skipped: the component list is just the control, and the css class
//! list never gains a requiredness class.

use plainform_html::{Element, HtmlNode};

use crate::error::RenderResult;
use crate::inputs::InputVariant;
use crate::renderer::RenderContext;

pub(crate) struct HiddenInput;

impl InputVariant for HiddenInput {
	fn default_components(&self) -> Option<&'static [&'static str]> {
		Some(&["input"])
	}

	fn decorate_required(&self) -> bool {
		false
	}

	fn render_control(&self, ctx: &RenderContext<'_>) -> RenderResult<HtmlNode> {
		let mut el = Element::new("input")
			.attr("type", "hidden")
			.attr("id", ctx.field_id())
			.attr("name", ctx.field_name())
			.maybe_attr("value", ctx.current_string())
			.attr("class", ctx.css_classes(false));
		ctx.merge_input_html(&mut el);
		Ok(el.into())
	}
}
