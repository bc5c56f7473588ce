use crate::page::{Page, PageElement};

/// Address create/edit form.
///
/// Serves both the "new address" and "edit address" routes; for the new
/// route the caller passes an empty id.
pub fn address_form(id: &str) -> Page {
	PageElement::new("section")
		.attr("class", "page-address-form")
		.child(PageElement::new("h1").attr("class", "title").child("Address"))
		.child(
			PageElement::new("form")
				.child(PageElement::new("input").attr("type", "hidden").attr("value", id.to_string()))
				.child(field("Street"))
				.child(field("City"))
				.child(field("Postal code"))
				.child(
					PageElement::new("button")
						.attr("class", "button is-dark")
						.child("Save"),
				),
		)
		.into_page()
}

fn field(label: &'static str) -> PageElement {
	PageElement::new("div")
		.attr("class", "field")
		.child(PageElement::new("label").child(label))
		.child(
			PageElement::new("div")
				.attr("class", "control")
				.child(PageElement::new("input").attr("type", "text").attr("class", "input")),
		)
}
