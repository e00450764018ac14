//! Text-like inputs: string, email, url, search, tel
//!
//! One text-typed control. `maxlength` comes from the column limit;
//! `size` is the column limit capped at the configured maximum. Typed
//! variants carry their subtype as an extra css class next to `string`.

use plainform_html::{Element, HtmlNode};

use crate::error::RenderResult;
use crate::inputs::InputVariant;
use crate::registry::ResolvedType;
use crate::renderer::RenderContext;

pub(crate) struct TextLikeInput;

impl InputVariant for TextLikeInput {
	fn render_control(&self, ctx: &RenderContext<'_>) -> RenderResult<HtmlNode> {
		let input_type = match ctx.resolved {
			ResolvedType::Email => "email",
			ResolvedType::Url => "url",
			ResolvedType::Search => "search",
			ResolvedType::Tel => "tel",
			_ => "text",
		};
		let limit = ctx.column_limit();
		let size = limit
			.map(|l| l.min(ctx.config.default_input_size))
			.unwrap_or(ctx.config.default_input_size);
		let placeholder = ctx
			.options
			.placeholder
			.clone()
			.or_else(|| ctx.translate("placeholders"));

		let mut el = Element::new("input")
			.attr("type", input_type)
			.attr("id", ctx.field_id())
			.attr("name", ctx.field_name())
			.maybe_attr("value", ctx.current_string())
			.attr("class", ctx.css_classes(true))
			.maybe_attr("maxlength", limit.map(|l| l.to_string()))
			.attr("size", size.to_string())
			.maybe_attr("placeholder", placeholder)
			.flag("disabled", ctx.options.disabled)
			.flag("required", ctx.required);
		ctx.merge_input_html(&mut el);
		Ok(el.into())
	}
}
