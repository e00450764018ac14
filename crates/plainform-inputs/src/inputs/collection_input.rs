//! Collection inputs: select, radio, checkboxes
//!
//! All three consume normalized collection entries. A select renders one
//! element with option children; radio and checkbox flavors render one
//! input+label pair per entry with value-suffixed ids. An attribute with
//! no explicit collection falls back to the synthesized boolean yes/no
//! collection.

use plainform_html::{Element, HtmlNode};

use crate::collection::{
	CollectionEntry, auto_include_blank, boolean_collection, normalize, value_eq,
};
use crate::error::RenderResult;
use crate::inputs::InputVariant;
use crate::options::Prompt;
use crate::renderer::RenderContext;
use crate::wrapper;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flavor {
	Select,
	Radio,
	Checkboxes,
}

pub(crate) struct CollectionInput {
	pub flavor: Flavor,
}

/// Entries for the request: the caller's collection when given, else the
/// boolean yes/no collection
pub(crate) fn entries_for(ctx: &RenderContext<'_>) -> RenderResult<Vec<CollectionEntry>> {
	match &ctx.options.collection {
		Some(source) => normalize(
			source,
			ctx.options.label_method.as_ref(),
			ctx.options.value_method.as_ref(),
			ctx.selection_value(),
		),
		None => {
			let pairs = boolean_collection(ctx.translations, ctx.cache, &ctx.config.locale);
			let current = ctx.selection_value();
			Ok(pairs
				.into_iter()
				.map(|(label, value)| {
					let selected = current.map(|c| value_eq(&value, c)).unwrap_or(false);
					CollectionEntry {
						selected,
						..CollectionEntry::new(label, value)
					}
				})
				.collect())
		}
	}
}

/// Render a `<select>` over normalized entries
///
/// Shared with the priority variant, which opts out of the automatic
/// blank entry.
pub(crate) fn render_select(
	ctx: &RenderContext<'_>,
	entries: &[CollectionEntry],
	allow_auto_blank: bool,
) -> HtmlNode {
	let multiple = ctx.options.multiple();
	let mut name = ctx.field_name();
	if multiple {
		name.push_str("[]");
	}
	let prompt = match &ctx.options.prompt {
		Some(Prompt::Text(text)) => Some(text.as_str()),
		_ => None,
	};

	let mut select = Element::new("select")
		.attr("id", ctx.field_id())
		.attr("name", name)
		.attr("class", ctx.css_classes(true))
		.flag("disabled", ctx.options.disabled);

	if let Some(text) = prompt {
		select.push_child(Element::new("option").attr("value", "").text(text).into());
	} else if allow_auto_blank
		&& auto_include_blank(ctx.options.include_blank, false, multiple)
	{
		select.push_child(Element::new("option").attr("value", "").into());
	}
	for entry in entries {
		select.push_child(
			Element::new("option")
				.attr("value", entry.value.clone())
				.flag("selected", entry.selected)
				.flag("disabled", entry.disabled)
				.text(entry.label.clone())
				.into(),
		);
	}
	ctx.merge_input_html(&mut select);
	select.into()
}

// One input+label pair per entry; ids are suffixed with the sanitized
// entry value (user_active_true).
fn render_per_entry(
	ctx: &RenderContext<'_>,
	entries: &[CollectionEntry],
	flavor: Flavor,
) -> HtmlNode {
	let (input_type, pair_label_class) = match flavor {
		Flavor::Checkboxes => ("checkbox", "collection_checkbox"),
		_ => ("radio", "collection_radio"),
	};
	let mut name = ctx.field_name();
	if flavor == Flavor::Checkboxes {
		name.push_str("[]");
	}

	let mut nodes = Vec::with_capacity(entries.len() * 2);
	for entry in entries {
		let id = wrapper::entry_id(ctx.object_name, ctx.attribute, &entry.value);
		let mut input = Element::new("input")
			.attr("type", input_type)
			.attr("id", id.clone())
			.attr("name", name.clone())
			.attr("value", entry.value.clone())
			.attr("class", ctx.resolved.css_types()[0])
			.flag("checked", entry.selected)
			.flag("disabled", entry.disabled || ctx.options.disabled);
		ctx.merge_input_html(&mut input);
		nodes.push(input.into());
		nodes.push(
			Element::new("label")
				.attr("for", id)
				.attr("class", pair_label_class)
				.text(entry.label.clone())
				.into(),
		);
	}
	HtmlNode::Fragment(nodes)
}

impl InputVariant for CollectionInput {
	fn render_control(&self, ctx: &RenderContext<'_>) -> RenderResult<HtmlNode> {
		let entries = entries_for(ctx)?;
		Ok(match self.flavor {
			Flavor::Select => render_select(ctx, &entries, true),
			flavor => render_per_entry(ctx, &entries, flavor),
		})
	}
}
