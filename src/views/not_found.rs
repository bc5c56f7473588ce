use crate::page::{Page, PageElement};

/// Fallback page when no route matches the requested path.
pub fn not_found() -> Page {
	PageElement::new("section")
		.attr("class", "page-not-found")
		.child(PageElement::new("h1").attr("class", "title").child("Page not found"))
		.child(
			PageElement::new("a")
				.attr("href", "/")
				.child("Back to the home page"),
		)
		.into_page()
}
