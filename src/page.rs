//! Render tree for storefront views.
//!
//! `Page` is the unified representation of renderable content: every view
//! component in this crate is a plain function returning a `Page`. The tree
//! can represent elements, text nodes, fragments, or nothing at all, and
//! can be serialized to an HTML string for inspection and testing.

use std::borrow::Cow;

/// A unified representation of renderable content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
	/// A DOM element.
	Element(PageElement),
	/// A text node.
	Text(Cow<'static, str>),
	/// A fragment containing multiple views (no wrapper element).
	Fragment(Vec<Page>),
	/// An empty view (renders nothing).
	Empty,
}

impl Page {
	/// Renders the view tree to an HTML string.
	///
	/// Text nodes are HTML-escaped; attribute values are escaped when the
	/// element is serialized.
	pub fn render_to_string(&self) -> String {
		match self {
			Page::Element(el) => el.render_to_string(),
			Page::Text(text) => html_escape(text),
			Page::Fragment(children) => {
				children.iter().map(Page::render_to_string).collect()
			}
			Page::Empty => String::new(),
		}
	}
}

impl From<PageElement> for Page {
	fn from(el: PageElement) -> Self {
		Page::Element(el)
	}
}

impl From<&'static str> for Page {
	fn from(text: &'static str) -> Self {
		Page::Text(Cow::Borrowed(text))
	}
}

impl From<String> for Page {
	fn from(text: String) -> Self {
		Page::Text(Cow::Owned(text))
	}
}

/// Represents a DOM element in the view tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageElement {
	/// The tag name (e.g. "div", "span").
	tag: Cow<'static, str>,
	/// HTML attributes in insertion order.
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	/// Child views.
	children: Vec<Page>,
	/// Whether this is a void element (no closing tag).
	is_void: bool,
}

impl PageElement {
	/// Creates a new element view.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
		}
	}

	/// Adds an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Adds a child view.
	pub fn child(mut self, child: impl Into<Page>) -> Self {
		self.children.push(child.into());
		self
	}

	/// Wraps this element into a [`Page`].
	pub fn into_page(self) -> Page {
		Page::Element(self)
	}

	/// Renders this element and its children to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut out = String::new();
		out.push('<');
		out.push_str(&self.tag);
		for (name, value) in &self.attrs {
			out.push(' ');
			out.push_str(name);
			out.push_str("=\"");
			out.push_str(&html_escape(value));
			out.push('"');
		}
		out.push('>');
		if self.is_void {
			return out;
		}
		for child in &self.children {
			out.push_str(&child.render_to_string());
		}
		out.push_str("</");
		out.push_str(&self.tag);
		out.push('>');
		out
	}
}

/// Escapes text for safe inclusion in HTML content and attribute values.
fn html_escape(input: &str) -> String {
	let mut out = String::with_capacity(input.len());
	for c in input.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
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
	fn test_empty_renders_nothing() {
		assert_eq!(Page::Empty.render_to_string(), "");
	}

	#[test]
	fn test_text_is_escaped() {
		let page = Page::from("a < b & c");
		assert_eq!(page.render_to_string(), "a &lt; b &amp; c");
	}

	#[test]
	fn test_element_with_attrs_and_children() {
		let page = PageElement::new("div")
			.attr("class", "container")
			.child(PageElement::new("h1").child("Hello"))
			.into_page();
		assert_eq!(
			page.render_to_string(),
			"<div class=\"container\"><h1>Hello</h1></div>"
		);
	}

	#[test]
	fn test_void_element_has_no_closing_tag() {
		let page = PageElement::new("input")
			.attr("type", "text")
			.into_page();
		assert_eq!(page.render_to_string(), "<input type=\"text\">");
	}

	#[test]
	fn test_fragment_concatenates_children() {
		let page = Page::Fragment(vec![
			PageElement::new("li").child("one").into_page(),
			PageElement::new("li").child("two").into_page(),
		]);
		assert_eq!(page.render_to_string(), "<li>one</li><li>two</li>");
	}

	#[test]
	fn test_attribute_value_is_escaped() {
		let page = PageElement::new("a")
			.attr("title", "\"quoted\"")
			.into_page();
		assert_eq!(page.render_to_string(), "<a title=\"&quot;quoted&quot;\"></a>");
	}
}
