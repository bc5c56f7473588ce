use crate::page::{Page, PageElement};

pub fn search() -> Page {
	PageElement::new("section")
		.attr("class", "page-search")
		.child(PageElement::new("h1").attr("class", "title").child("Search"))
		.child(PageElement::new("h2").attr("class", "subtitle").child("Search results"))
		.child(PageElement::new("div").attr("class", "columns is-multiline"))
		.into_page()
}
