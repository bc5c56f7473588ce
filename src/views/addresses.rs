use crate::page::{Page, PageElement};

pub fn addresses() -> Page {
	PageElement::new("section")
		.attr("class", "page-addresses")
		.child(PageElement::new("h1").attr("class", "title").child("Addresses"))
		.child(
			PageElement::new("a")
				.attr("href", "/my-account/addresses/new")
				.attr("class", "button is-dark")
				.child("Add address"),
		)
		.into_page()
}
