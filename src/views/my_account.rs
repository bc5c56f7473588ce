use crate::page::{Page, PageElement};

/// Account dashboard linking to the nested account pages.
pub fn my_account() -> Page {
	PageElement::new("section")
		.attr("class", "page-my-account")
		.child(PageElement::new("h1").attr("class", "title").child("My account"))
		.child(
			PageElement::new("ul")
				.child(link("/my-account/profile", "Profile"))
				.child(link("/my-account/orders", "Orders"))
				.child(link("/my-account/addresses", "Addresses"))
				.child(link("/my-account/settings", "Settings")),
		)
		.child(
			PageElement::new("button")
				.attr("class", "button is-danger")
				.child("Log out"),
		)
		.into_page()
}

fn link(href: &'static str, label: &'static str) -> PageElement {
	PageElement::new("li").child(PageElement::new("a").attr("href", href).child(label))
}
