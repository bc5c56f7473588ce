use crate::page::{Page, PageElement};

/// Checkout page for a logged-in visitor's cart.
pub fn checkout() -> Page {
	PageElement::new("section")
		.attr("class", "page-checkout")
		.child(
			PageElement::new("div")
				.attr("class", "column is-12")
				.child(PageElement::new("h1").attr("class", "title").child("Checkout")),
		)
		.child(
			PageElement::new("div")
				.attr("class", "column is-12 box")
				.child(PageElement::new("h2").attr("class", "subtitle").child("Shipping details")),
		)
		.into_page()
}
