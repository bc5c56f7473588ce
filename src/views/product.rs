use crate::page::{Page, PageElement};

/// Product detail page for one item inside a category.
pub fn product(category_slug: &str, product_slug: &str) -> Page {
	PageElement::new("section")
		.attr("class", "page-product")
		.child(
			PageElement::new("nav")
				.attr("class", "breadcrumb")
				.attr("aria-label", "breadcrumbs")
				.child(PageElement::new("li").child(category_slug.to_string()))
				.child(PageElement::new("li").attr("class", "is-active").child(product_slug.to_string())),
		)
		.child(PageElement::new("h1").attr("class", "title").child(product_slug.to_string()))
		.child(
			PageElement::new("button")
				.attr("class", "button is-dark")
				.child("Add to cart"),
		)
		.into_page()
}
