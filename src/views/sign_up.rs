use crate::page::{Page, PageElement};

/// Account registration form.
pub fn sign_up() -> Page {
	PageElement::new("section")
		.attr("class", "page-sign-up")
		.child(PageElement::new("h1").attr("class", "title").child("Sign up"))
		.child(
			PageElement::new("form")
				.child(field("Username", "text"))
				.child(field("Password", "password"))
				.child(field("Repeat password", "password"))
				.child(
					PageElement::new("button")
						.attr("class", "button is-dark")
						.child("Sign up"),
				),
		)
		.into_page()
}

fn field(label: &'static str, input_type: &'static str) -> PageElement {
	PageElement::new("div")
		.attr("class", "field")
		.child(PageElement::new("label").child(label))
		.child(
			PageElement::new("div")
				.attr("class", "control")
				.child(PageElement::new("input").attr("type", input_type).attr("class", "input")),
		)
}
