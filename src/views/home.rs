use crate::page::{Page, PageElement};

/// Landing page with the latest products teaser.
pub fn home() -> Page {
	PageElement::new("section")
		.attr("class", "hero is-medium is-dark mb-6")
		.child(
			PageElement::new("div")
				.attr("class", "hero-body has-text-centered")
				.child(PageElement::new("p").attr("class", "title mb-6").child("Welcome to vmarket"))
				.child(
					PageElement::new("p")
						.attr("class", "subtitle")
						.child("The best shoe store online"),
				),
		)
		.child(
			PageElement::new("div")
				.attr("class", "columns is-multiline")
				.child(
					PageElement::new("div")
						.attr("class", "column is-12")
						.child(PageElement::new("h2").attr("class", "is-size-2 has-text-centered").child("Latest products")),
				),
		)
		.into_page()
}
