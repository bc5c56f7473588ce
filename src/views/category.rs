use crate::page::{Page, PageElement};

/// Product listing page for one category.
pub fn category(category_slug: &str) -> Page {
	PageElement::new("section")
		.attr("class", "page-category")
		.child(
			PageElement::new("h2")
				.attr("class", "is-size-2 has-text-centered")
				.child(category_slug.to_string()),
		)
		.child(PageElement::new("div").attr("class", "columns is-multiline"))
		.into_page()
}
