use crate::page::{Page, PageElement};

pub fn about() -> Page {
	PageElement::new("div")
		.attr("class", "about")
		.child(PageElement::new("h1").child("This is an about page"))
		.into_page()
}
