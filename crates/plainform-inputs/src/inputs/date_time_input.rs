//! Composite date/time inputs
//!
//! A date, time, or datetime attribute renders as positionally-ordered
//! sub-controls with `_{n}i` id suffixes and multiparameter names.
//! Positions follow year→month→day→hour→minute→second, numbered from 1
//! and skipping nothing in between: a time input still occupies
//! positions 1–3 with hidden fields carrying the current date, so the
//! hour select is always position 4.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde_json::Value;

use plainform_html::{Element, HtmlNode};

use crate::collection::value_to_string;
use crate::error::RenderResult;
use crate::inputs::InputVariant;
use crate::options::DatePart;
use crate::registry::ResolvedType;
use crate::renderer::RenderContext;
use crate::wrapper;

const MONTH_NAMES: &[&str] = &[
	"January",
	"February",
	"March",
	"April",
	"May",
	"June",
	"July",
	"August",
	"September",
	"October",
	"November",
	"December",
];

// Years offered on either side of the seeded (or current) year.
const YEAR_RADIUS: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PartControl {
	Select,
	Hidden,
}

fn layout(resolved: ResolvedType, include_seconds: bool) -> Vec<(usize, DatePart, PartControl)> {
	use DatePart::*;
	use PartControl::*;
	let mut parts = match resolved {
		ResolvedType::Date => vec![(1, Year, Select), (2, Month, Select), (3, Day, Select)],
		ResolvedType::Time => vec![
			(1, Year, Hidden),
			(2, Month, Hidden),
			(3, Day, Hidden),
			(4, Hour, Select),
			(5, Minute, Select),
		],
		_ => vec![
			(1, Year, Select),
			(2, Month, Select),
			(3, Day, Select),
			(4, Hour, Select),
			(5, Minute, Select),
		],
	};
	if include_seconds && resolved != ResolvedType::Date {
		parts.push((6, DatePart::Second, PartControl::Select));
	}
	parts
}

fn parse_seed(value: &Value) -> Option<NaiveDateTime> {
	let s = value_to_string(value);
	if s.is_empty() {
		return None;
	}
	NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S")
		.or_else(|_| NaiveDateTime::parse_from_str(&s, "%Y-%m-%d %H:%M:%S"))
		.ok()
		.or_else(|| {
			NaiveDate::parse_from_str(&s, "%Y-%m-%d")
				.ok()
				.and_then(|d| d.and_hms_opt(0, 0, 0))
		})
		.or_else(|| {
			NaiveTime::parse_from_str(&s, "%H:%M:%S")
				.or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M"))
				.ok()
				.map(|t| Local::now().date_naive().and_time(t))
		})
}

// Markup text for one part of a concrete moment; must agree with the
// option values produced by part_options.
fn part_str(moment: NaiveDateTime, part: DatePart) -> String {
	match part {
		DatePart::Year => moment.year().to_string(),
		DatePart::Month => moment.month().to_string(),
		DatePart::Day => moment.day().to_string(),
		DatePart::Hour => format!("{:02}", moment.hour()),
		DatePart::Minute => format!("{:02}", moment.minute()),
		DatePart::Second => format!("{:02}", moment.second()),
	}
}

fn part_options(part: DatePart, center_year: i32) -> Vec<(String, String)> {
	match part {
		DatePart::Year => (center_year - YEAR_RADIUS..=center_year + YEAR_RADIUS)
			.map(|y| (y.to_string(), y.to_string()))
			.collect(),
		DatePart::Month => MONTH_NAMES
			.iter()
			.enumerate()
			.map(|(i, name)| (name.to_string(), (i + 1).to_string()))
			.collect(),
		DatePart::Day => (1..=31).map(|d: u32| (d.to_string(), d.to_string())).collect(),
		DatePart::Hour => (0..24)
			.map(|h: u32| (format!("{h:02}"), format!("{h:02}")))
			.collect(),
		DatePart::Minute | DatePart::Second => (0..60)
			.map(|m: u32| (format!("{m:02}"), format!("{m:02}")))
			.collect(),
	}
}

pub(crate) struct DateTimeInput;

impl InputVariant for DateTimeInput {
	fn render_control(&self, ctx: &RenderContext<'_>) -> RenderResult<HtmlNode> {
		let parts = layout(ctx.resolved, ctx.options.include_seconds);
		let now = Local::now().naive_local();
		let seed = ctx.selection_value().and_then(parse_seed);
		let center_year = seed.unwrap_or(now).year();

		let mut nodes = Vec::with_capacity(parts.len());
		for (position, part, control) in parts {
			let id = wrapper::multipart_id(ctx.object_name, ctx.attribute, position);
			let name = wrapper::multipart_name(ctx.object_name, ctx.attribute, position);
			let control = if ctx.options.use_hidden {
				PartControl::Hidden
			} else {
				control
			};
			let node = match control {
				PartControl::Hidden => Element::new("input")
					.attr("type", "hidden")
					.attr("id", id)
					.attr("name", name)
					.attr("value", part_str(seed.unwrap_or(now), part))
					.into(),
				PartControl::Select => {
					let mut select = Element::new("select")
						.attr("id", id)
						.attr("name", name)
						.attr("class", ctx.css_classes(true))
						.flag("disabled", ctx.options.disabled);
					let prompt = ctx
						.options
						.prompt
						.as_ref()
						.and_then(|p| p.for_part(part));
					if let Some(text) = prompt {
						select.push_child(
							Element::new("option").attr("value", "").text(text).into(),
						);
					}
					let selected_value = seed.map(|s| part_str(s, part));
					for (label, value) in part_options(part, center_year) {
						let selected = selected_value.as_deref() == Some(value.as_str());
						select.push_child(
							Element::new("option")
								.attr("value", value)
								.flag("selected", selected)
								.text(label)
								.into(),
						);
					}
					ctx.merge_input_html(&mut select);
					select.into()
				}
			};
			nodes.push(node);
		}
		Ok(HtmlNode::Fragment(nodes))
	}

	// The label always targets position 1 when any date portion renders
	// as a select, else the first time position.
	fn label_target(&self, ctx: &RenderContext<'_>) -> String {
		let position = if ctx.resolved == ResolvedType::Time { 4 } else { 1 };
		wrapper::multipart_id(ctx.object_name, ctx.attribute, position)
	}
}
