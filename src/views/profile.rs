use crate::page::{Page, PageElement};

pub fn profile() -> Page {
	PageElement::new("section")
		.attr("class", "page-profile")
		.child(PageElement::new("h1").attr("class", "title").child("Profile"))
		.child(PageElement::new("div").attr("class", "box"))
		.into_page()
}
