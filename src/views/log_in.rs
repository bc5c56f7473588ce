use crate::page::{Page, PageElement};

/// Login form.
///
/// On successful login the surrounding flow reads the `to` query
/// parameter from the router state and navigates back to the path the
/// visitor originally requested.
pub fn log_in() -> Page {
	PageElement::new("section")
		.attr("class", "page-log-in")
		.child(PageElement::new("h1").attr("class", "title").child("Log in"))
		.child(
			PageElement::new("form")
				.child(
					PageElement::new("div")
						.attr("class", "field")
						.child(PageElement::new("label").child("Username"))
						.child(
							PageElement::new("div")
								.attr("class", "control")
								.child(PageElement::new("input").attr("type", "text").attr("class", "input")),
						),
				)
				.child(
					PageElement::new("div")
						.attr("class", "field")
						.child(PageElement::new("label").child("Password"))
						.child(
							PageElement::new("div")
								.attr("class", "control")
								.child(PageElement::new("input").attr("type", "password").attr("class", "input")),
						),
				)
				.child(
					PageElement::new("button")
						.attr("class", "button is-dark")
						.child("Log in"),
				),
		)
		.into_page()
}
