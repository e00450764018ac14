//! Structured HTML nodes
//!
//! [`HtmlNode`] is the render-output contract of plainform: a tree of
//! elements, text leaves, and fragments. Attribute order is preserved
//! exactly as written, which keeps rendering deterministic and makes
//! byte-for-byte output comparison meaningful in tests.

use serde::{Deserialize, Serialize};

use crate::escape::escape_html;

/// Elements that never take children and render without a closing tag
const VOID_TAGS: &[&str] = &["input", "br", "hr", "img", "meta", "link"];

/// An attribute value: text, or a boolean flag
///
/// A flag serializes as a bare attribute name. Unset flags are never
/// stored, so `false` cannot leak into the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttrValue {
	Text(String),
	Flag,
}

/// A single HTML element with ordered attributes and child nodes
///
/// # Examples
///
/// ```
/// use plainform_html::Element;
///
/// let input = Element::new("input")
/// 	.attr("type", "text")
/// 	.attr("id", "user_name")
/// 	.flag("disabled", true);
///
/// assert_eq!(input.attr_text("type"), Some("text"));
/// assert!(input.has_flag("disabled"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
	tag: String,
	attrs: Vec<(String, AttrValue)>,
	children: Vec<HtmlNode>,
}

impl Element {
	/// Create an element with the given tag name
	pub fn new(tag: impl Into<String>) -> Self {
		Self {
			tag: tag.into(),
			attrs: Vec::new(),
			children: Vec::new(),
		}
	}

	/// Set a text attribute, replacing an existing one in place
	///
	/// Replacing in place keeps the original attribute position, so
	/// overrides (e.g. `input_html`) do not reorder the output.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.set_attr(name, value);
		self
	}

	/// Set a text attribute only when a value is present
	pub fn maybe_attr(self, name: impl Into<String>, value: Option<String>) -> Self {
		match value {
			Some(v) => self.attr(name, v),
			None => self,
		}
	}

	/// Set a boolean flag attribute; `false` stores nothing
	pub fn flag(mut self, name: impl Into<String>, on: bool) -> Self {
		self.set_flag(name, on);
		self
	}

	/// Append a child node
	pub fn child(mut self, node: HtmlNode) -> Self {
		self.children.push(node);
		self
	}

	/// Append a text child
	pub fn text(mut self, content: impl Into<String>) -> Self {
		self.children.push(HtmlNode::Text(content.into()));
		self
	}

	/// Mutating form of [`Element::attr`]
	pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
		let name = name.into();
		let value = AttrValue::Text(value.into());
		match self.attrs.iter_mut().find(|(n, _)| *n == name) {
			Some(slot) => slot.1 = value,
			None => self.attrs.push((name, value)),
		}
	}

	/// Mutating form of [`Element::flag`]
	pub fn set_flag(&mut self, name: impl Into<String>, on: bool) {
		let name = name.into();
		if on {
			if !self.attrs.iter().any(|(n, _)| *n == name) {
				self.attrs.push((name, AttrValue::Flag));
			}
		} else {
			self.attrs.retain(|(n, _)| *n != name);
		}
	}

	/// Push a child node in place
	pub fn push_child(&mut self, node: HtmlNode) {
		self.children.push(node);
	}

	pub fn tag(&self) -> &str {
		&self.tag
	}

	pub fn attrs(&self) -> &[(String, AttrValue)] {
		&self.attrs
	}

	pub fn children(&self) -> &[HtmlNode] {
		&self.children
	}

	/// Look up an attribute value by name
	pub fn get(&self, name: &str) -> Option<&AttrValue> {
		self.attrs.iter().find(|(n, _)| n == name).map(|(_, v)| v)
	}

	/// Look up a text attribute by name
	pub fn attr_text(&self, name: &str) -> Option<&str> {
		match self.get(name) {
			Some(AttrValue::Text(v)) => Some(v),
			_ => None,
		}
	}

	/// Whether a flag attribute is set
	pub fn has_flag(&self, name: &str) -> bool {
		matches!(self.get(name), Some(AttrValue::Flag))
	}

	/// The `id` attribute, if any
	pub fn id(&self) -> Option<&str> {
		self.attr_text("id")
	}

	/// Whether the `class` attribute contains the given class name
	///
	/// # Examples
	///
	/// ```
	/// use plainform_html::Element;
	///
	/// let el = Element::new("input").attr("class", "string required");
	/// assert!(el.has_class("string"));
	/// assert!(el.has_class("required"));
	/// assert!(!el.has_class("optional"));
	/// ```
	pub fn has_class(&self, name: &str) -> bool {
		self.attr_text("class")
			.map(|classes| classes.split_whitespace().any(|c| c == name))
			.unwrap_or(false)
	}

	/// Concatenated text content of all descendant text nodes
	pub fn text_content(&self) -> String {
		let mut out = String::new();
		for child in &self.children {
			match child {
				HtmlNode::Text(t) => out.push_str(t),
				HtmlNode::Element(el) => out.push_str(&el.text_content()),
				HtmlNode::Fragment(nodes) => {
					for node in nodes {
						if let Some(el) = node.as_element() {
							out.push_str(&el.text_content());
						} else if let HtmlNode::Text(t) = node {
							out.push_str(t);
						}
					}
				}
			}
		}
		out
	}

	fn write_html(&self, out: &mut String) {
		out.push('<');
		out.push_str(&self.tag);
		for (name, value) in &self.attrs {
			out.push(' ');
			out.push_str(name);
			if let AttrValue::Text(v) = value {
				out.push_str("=\"");
				out.push_str(&escape_html(v));
				out.push('"');
			}
		}
		out.push('>');
		if VOID_TAGS.contains(&self.tag.as_str()) {
			return;
		}
		for child in &self.children {
			child.write_html(out);
		}
		out.push_str("</");
		out.push_str(&self.tag);
		out.push('>');
	}
}

/// A node in the rendered output tree
///
/// `Fragment` concatenates siblings without introducing a wrapper element;
/// the component pipeline returns one fragment per rendered field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HtmlNode {
	Element(Element),
	Text(String),
	Fragment(Vec<HtmlNode>),
}

impl HtmlNode {
	/// A fragment with no content; renders as the empty string
	pub fn empty() -> Self {
		HtmlNode::Fragment(Vec::new())
	}

	pub fn is_empty(&self) -> bool {
		match self {
			HtmlNode::Element(_) => false,
			HtmlNode::Text(t) => t.is_empty(),
			HtmlNode::Fragment(nodes) => nodes.iter().all(HtmlNode::is_empty),
		}
	}

	pub fn as_element(&self) -> Option<&Element> {
		match self {
			HtmlNode::Element(el) => Some(el),
			_ => None,
		}
	}

	/// All elements (including nested ones) matching a predicate, in
	/// document order
	///
	/// # Examples
	///
	/// ```
	/// use plainform_html::{Element, HtmlNode};
	///
	/// let select = Element::new("select")
	/// 	.child(HtmlNode::Element(Element::new("option").attr("value", "a")))
	/// 	.child(HtmlNode::Element(Element::new("option").attr("value", "b")));
	/// let node = HtmlNode::Element(select);
	///
	/// let options = node.find_all(|el| el.tag() == "option");
	/// assert_eq!(options.len(), 2);
	/// assert_eq!(options[0].attr_text("value"), Some("a"));
	/// ```
	pub fn find_all<'a, F>(&'a self, pred: F) -> Vec<&'a Element>
	where
		F: Fn(&Element) -> bool,
	{
		fn walk<'a>(node: &'a HtmlNode, pred: &dyn Fn(&Element) -> bool, acc: &mut Vec<&'a Element>) {
			match node {
				HtmlNode::Element(el) => {
					if pred(el) {
						acc.push(el);
					}
					for child in el.children() {
						walk(child, pred, acc);
					}
				}
				HtmlNode::Fragment(nodes) => {
					for n in nodes {
						walk(n, pred, acc);
					}
				}
				HtmlNode::Text(_) => {}
			}
		}
		let mut acc = Vec::new();
		walk(self, &pred, &mut acc);
		acc
	}

	/// All elements with the given tag, in document order
	pub fn find_by_tag(&self, tag: &str) -> Vec<&Element> {
		self.find_all(|el| el.tag() == tag)
	}

	/// The element with the given `id`, if any
	pub fn find_by_id(&self, id: &str) -> Option<&Element> {
		self.find_all(|el| el.id() == Some(id)).into_iter().next()
	}

	fn write_html(&self, out: &mut String) {
		match self {
			HtmlNode::Element(el) => el.write_html(out),
			HtmlNode::Text(t) => out.push_str(&escape_html(t)),
			HtmlNode::Fragment(nodes) => {
				for node in nodes {
					node.write_html(out);
				}
			}
		}
	}

	/// Serialize the tree to markup text
	///
	/// # Examples
	///
	/// ```
	/// use plainform_html::{Element, HtmlNode};
	///
	/// let node = HtmlNode::Element(
	/// 	Element::new("input")
	/// 		.attr("type", "checkbox")
	/// 		.flag("checked", true),
	/// );
	/// assert_eq!(node.to_html(), "<input type=\"checkbox\" checked>");
	/// ```
	pub fn to_html(&self) -> String {
		let mut out = String::new();
		self.write_html(&mut out);
		out
	}
}

impl From<Element> for HtmlNode {
	fn from(el: Element) -> Self {
		HtmlNode::Element(el)
	}
}
