use crate::page::{Page, PageElement};

/// Detail page for one past order.
pub fn order_detail(id: &str) -> Page {
	PageElement::new("section")
		.attr("class", "page-order-detail")
		.child(
			PageElement::new("h1")
				.attr("class", "title")
				.child(format!("Order #{}", id)),
		)
		.child(PageElement::new("div").attr("class", "box"))
		.into_page()
}
