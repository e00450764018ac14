//! Component pipeline
//!
//! Composes the rendered field from an ordered component list. The list
//! is iterated strictly in order, exactly once; duplicate names render
//! once per occurrence (order is authoritative, not a set), and unknown
//! names fail the whole composition.

use tracing::trace;

use plainform_html::{Element, HtmlNode};

use crate::error::{RenderError, RenderResult};
use crate::inputs::InputVariant;
use crate::renderer::RenderContext;
use crate::wrapper;

pub(crate) fn compose(
	ctx: &RenderContext<'_>,
	variant: &dyn InputVariant,
) -> RenderResult<HtmlNode> {
	let order: Vec<String> = match &ctx.options.components {
		Some(names) => names.clone(),
		None => match variant.default_components() {
			Some(defaults) => defaults.iter().map(|s| s.to_string()).collect(),
			None => ctx.config.default_components.clone(),
		},
	};

	let mut nodes = Vec::with_capacity(order.len());
	for name in &order {
		trace!(component = name.as_str(), "rendering component");
		let node = match name.as_str() {
			"input" => variant.render_control(ctx)?,
			"label" => render_label(ctx, variant),
			"hint" => render_hint(ctx),
			"error" => render_error(ctx),
			unknown => return Err(RenderError::UnknownComponent(unknown.to_string())),
		};
		if !node.is_empty() {
			nodes.push(node);
		}
	}
	Ok(HtmlNode::Fragment(nodes))
}

fn render_label(ctx: &RenderContext<'_>, variant: &dyn InputVariant) -> HtmlNode {
	let text = ctx
		.options
		.label
		.clone()
		.or_else(|| ctx.translate("labels"))
		.unwrap_or_else(|| wrapper::humanize(ctx.attribute));
	Element::new("label")
		.attr("for", variant.label_target(ctx))
		.attr("class", ctx.css_classes(variant.decorate_required()))
		.text(text)
		.into()
}

fn render_hint(ctx: &RenderContext<'_>) -> HtmlNode {
	let text = ctx.options.hint.clone().or_else(|| ctx.translate("hints"));
	match text {
		Some(text) => Element::new("span").attr("class", "hint").text(text).into(),
		None => HtmlNode::empty(),
	}
}

fn render_error(ctx: &RenderContext<'_>) -> HtmlNode {
	let errors = ctx
		.model
		.map(|m| m.errors(ctx.attribute))
		.unwrap_or_default();
	match errors.first() {
		Some(message) => Element::new("span")
			.attr("class", "error")
			.text(message.clone())
			.into(),
		None => HtmlNode::empty(),
	}
}
