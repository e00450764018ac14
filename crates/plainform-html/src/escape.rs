//! HTML escaping
//!
//! All text content and attribute values pass through [`escape_html`]
//! before serialization so user-provided labels and values cannot inject
//! markup.
//!
//! Escaped characters:
//! - `<` → `&lt;`
//! - `>` → `&gt;`
//! - `&` → `&amp;`
//! - `"` → `&quot;`
//! - `'` → `&#x27;`

/// Escape HTML special characters
///
/// # Examples
///
/// ```
/// use plainform_html::escape_html;
///
/// assert_eq!(escape_html("<script>alert('XSS')</script>"),
///            "&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;");
/// assert_eq!(escape_html("Hello & goodbye"), "Hello &amp; goodbye");
/// ```
pub fn escape_html(s: &str) -> String {
	let mut out = String::with_capacity(s.len());
	for c in s.chars() {
		match c {
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'&' => out.push_str("&amp;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#x27;"),
			_ => out.push(c),
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_escape_plain_text_unchanged() {
		assert_eq!(escape_html("Jose"), "Jose");
	}

	#[test]
	fn test_escape_quotes() {
		assert_eq!(escape_html(r#"a "b" 'c'"#), "a &quot;b&quot; &#x27;c&#x27;");
	}
}
