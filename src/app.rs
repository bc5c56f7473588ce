//! The storefront application: concrete route table plus guard wiring.
//!
//! Declaration order in this table is a correctness property, not
//! cosmetics. The one-segment `{category_slug}` catch-all would claim
//! any single-segment path (`/search/`, `/cart/`, `/log-in/`, ...), so
//! it must come after every literal route; the two-segment
//! `{category_slug}/{product_slug}` catch-all must come before it or
//! never be reached at all. The path strings themselves are the
//! storefront's public surface and are reproduced verbatim.

use std::sync::Arc;

use crate::auth::AuthSource;
use crate::routing::{NavigationGuard, Route, Router};
use crate::views;

/// Builds the storefront router with its full route table and the
/// login guard wired to the given authentication source.
pub fn storefront_app(auth: Arc<dyn AuthSource>) -> Router {
	Router::new()
		.mount(Route::view("home", "/", views::home))
		.mount(Route::view("about", "/about", views::about))
		.mount(Route::view("Search", "/search/", views::search))
		.mount(Route::view("SignUp", "/sign-up/", views::sign_up))
		.mount(Route::view("MyAccount", "/my-account/", views::my_account).restricted())
		.mount(Route::view("Profile", "/my-account/profile", views::profile).restricted())
		.mount(Route::view("Orders", "/my-account/orders", views::orders).restricted())
		.mount(
			Route::with_params("OrderDetail", "/my-account/orders/{id}", |params| {
				views::order_detail(params.get("id").unwrap_or(""))
			})
			.restricted(),
		)
		.mount(Route::view("Addresses", "/my-account/addresses", views::addresses).restricted())
		.mount(
			Route::view("NewAddress", "/my-account/addresses/new", || {
				views::address_form("")
			})
			.restricted(),
		)
		.mount(
			Route::with_params("EditAddress", "/my-account/addresses/{id}", |params| {
				views::address_form(params.get("id").unwrap_or(""))
			})
			.restricted(),
		)
		.mount(Route::view("Settings", "/my-account/settings", views::settings).restricted())
		.mount(Route::view("Checkout", "/cart/checkout", views::checkout).restricted())
		.mount(Route::view("Cart", "/cart/", views::cart))
		.mount(Route::view("Success", "/cart/success", views::success))
		.mount(Route::view("LogIn", "/log-in/", views::log_in))
		.mount(Route::with_params(
			"Product",
			"/{category_slug}/{product_slug}/",
			|params| {
				views::product(
					params.get("category_slug").unwrap_or(""),
					params.get("product_slug").unwrap_or(""),
				)
			},
		))
		.mount(Route::with_params("Category", "/{category_slug}/", |params| {
			views::category(params.get("category_slug").unwrap_or(""))
		}))
		.not_found(views::not_found)
		.with_guard(NavigationGuard::new(auth))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::auth::AuthStore;

	fn app() -> Router {
		storefront_app(Arc::new(AuthStore::new()))
	}

	#[test]
	fn test_table_size() {
		assert_eq!(app().route_count(), 18);
	}

	#[test]
	fn test_catch_alls_are_declared_last() {
		let router = app();
		let names: Vec<&str> = router.routes().iter().map(|r| r.name()).collect();

		// The two catch-alls are the final entries, two-segment before
		// one-segment; every literal route precedes them.
		assert_eq!(&names[names.len() - 2..], &["Product", "Category"]);
	}

	#[test]
	fn test_restricted_flags_match_the_storefront() {
		let router = app();
		let restricted = [
			"MyAccount",
			"Profile",
			"Orders",
			"OrderDetail",
			"Addresses",
			"NewAddress",
			"EditAddress",
			"Settings",
			"Checkout",
		];
		for route in router.routes() {
			assert_eq!(
				route.meta().requires_login,
				restricted.contains(&route.name()),
				"unexpected requires_login flag on route {}",
				route.name()
			);
		}
	}

	#[test]
	fn test_login_route_is_never_restricted() {
		// A restricted login route would make the guard redirect loop.
		let router = app();
		let login = router
			.routes()
			.iter()
			.find(|r| r.name() == "LogIn")
			.unwrap();
		assert!(!login.meta().requires_login);
	}
}
