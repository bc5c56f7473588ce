use crate::page::{Page, PageElement};

pub fn orders() -> Page {
	PageElement::new("section")
		.attr("class", "page-orders")
		.child(PageElement::new("h1").attr("class", "title").child("Orders"))
		.child(
			PageElement::new("table")
				.attr("class", "table is-fullwidth")
				.child(
					PageElement::new("thead").child(
						PageElement::new("tr")
							.child(PageElement::new("th").child("Order"))
							.child(PageElement::new("th").child("Amount"))
							.child(PageElement::new("th").child("Status")),
					),
				),
		)
		.into_page()
}
