use crate::page::{Page, PageElement};

pub fn settings() -> Page {
	PageElement::new("section")
		.attr("class", "page-settings")
		.child(PageElement::new("h1").attr("class", "title").child("Settings"))
		.child(PageElement::new("div").attr("class", "box"))
		.into_page()
}
