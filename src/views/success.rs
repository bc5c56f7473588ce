use crate::page::{Page, PageElement};

pub fn success() -> Page {
	PageElement::new("section")
		.attr("class", "page-success")
		.child(PageElement::new("h1").attr("class", "title").child("Success"))
		.child(
			PageElement::new("p")
				.child("Your order will be processed within two days."),
		)
		.into_page()
}
