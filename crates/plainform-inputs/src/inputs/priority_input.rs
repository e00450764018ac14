//! Priority selects: country and time zone
//!
//! Both render a select over a curated base list. When a priority subset
//! is configured — per call or through the renderer config — matching
//! entries are promoted to the top, followed by a disabled separator,
//! followed by the full original list unchanged. No priority, no
//! separator. These selects never get an automatic blank entry.

use plainform_html::HtmlNode;

use crate::collection::{CollectionEntry, value_eq};
use crate::data::{COUNTRIES, TIME_ZONES};
use crate::error::RenderResult;
use crate::inputs::InputVariant;
use crate::inputs::collection_input::render_select;
use crate::options::PriorityFilter;
use crate::renderer::RenderContext;

const SEPARATOR_LABEL: &str = "-------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PriorityKind {
	Country,
	TimeZone,
}

pub(crate) struct PriorityInput {
	pub kind: PriorityKind,
}

impl PriorityInput {
	fn base_entries(&self, ctx: &RenderContext<'_>) -> Vec<CollectionEntry> {
		let current = ctx.selection_value();
		let mark = |mut entry: CollectionEntry| {
			entry.selected = current.map(|c| value_eq(&entry.value, c)).unwrap_or(false);
			entry
		};
		match self.kind {
			PriorityKind::Country => COUNTRIES
				.iter()
				.map(|country| mark(CollectionEntry::new(*country, *country)))
				.collect(),
			PriorityKind::TimeZone => TIME_ZONES
				.iter()
				.map(|(value, label)| mark(CollectionEntry::new(*label, *value)))
				.collect(),
		}
	}

	// Per-call priority wins; otherwise the configured default list.
	fn filter(&self, ctx: &RenderContext<'_>) -> Option<PriorityFilter> {
		if let Some(filter) = &ctx.options.priority {
			return Some(filter.clone());
		}
		let defaults = match self.kind {
			PriorityKind::Country => &ctx.config.country_priority,
			PriorityKind::TimeZone => &ctx.config.time_zone_priority,
		};
		if defaults.is_empty() {
			None
		} else {
			Some(PriorityFilter::names(defaults.clone()))
		}
	}
}

impl InputVariant for PriorityInput {
	fn render_control(&self, ctx: &RenderContext<'_>) -> RenderResult<HtmlNode> {
		let base = self.base_entries(ctx);
		let entries = match self.filter(ctx) {
			Some(filter) => {
				let promoted: Vec<CollectionEntry> = base
					.iter()
					.filter(|e| filter.matches(&e.label, &e.value))
					.cloned()
					.collect();
				if promoted.is_empty() {
					base
				} else {
					let mut entries = promoted;
					entries.push(CollectionEntry {
						disabled: true,
						..CollectionEntry::new(SEPARATOR_LABEL, "")
					});
					entries.extend(base);
					entries
				}
			}
			None => base,
		};
		Ok(render_select(ctx, &entries, false))
	}
}
