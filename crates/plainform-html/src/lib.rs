//! HTML node tree for plainform
//!
//! Input variants build an [`HtmlNode`] tree instead of concatenating
//! markup strings. The host templating layer is expected to serialize the
//! tree itself; [`HtmlNode::to_html`] is provided for tests and for hosts
//! that do not care about the intermediate representation.
//!
//! Attribute values are either text or boolean flags. A flag serializes as
//! a bare attribute name (`disabled`); a flag that is not set never appears
//! in the output.

pub mod escape;
pub mod node;

pub use escape::escape_html;
pub use node::{AttrValue, Element, HtmlNode};
