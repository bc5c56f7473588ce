use crate::page::{Page, PageElement};

pub fn cart() -> Page {
	PageElement::new("section")
		.attr("class", "page-cart")
		.child(
			PageElement::new("div")
				.attr("class", "column is-12")
				.child(PageElement::new("h1").attr("class", "title").child("Cart")),
		)
		.child(
			PageElement::new("div")
				.attr("class", "column is-12 box")
				.child(PageElement::new("h2").attr("class", "subtitle").child("Summary")),
		)
		.into_page()
}
