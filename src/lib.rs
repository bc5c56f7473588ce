//! Client-side navigation and access control for the vmarket storefront.
//!
//! This crate is the routing layer of a storefront single-page
//! application: an ordered route table mapping URL paths to view
//! components, and a navigation guard that redirects unauthenticated
//! visitors away from account-restricted views while preserving their
//! intended destination for post-login resumption.
//!
//! ## Overview
//!
//! - [`routing`] - path patterns, the ordered route table, and the
//!   navigation guard (the only decision logic in the crate)
//! - [`app`] - the concrete storefront route table, ordering invariant
//!   included, wired to the guard
//! - [`views`] - one declarative component per storefront page
//! - [`auth`] - the read-only authentication contract the guard consumes
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use vmarket_storefront::app::storefront_app;
//! use vmarket_storefront::auth::AuthStore;
//! use vmarket_storefront::routing::NavigationOutcome;
//!
//! let store = Arc::new(AuthStore::new());
//! let router = storefront_app(store.clone());
//!
//! // Unauthenticated visitors are sent to the login view, with the
//! // requested path preserved for post-login resumption.
//! let outcome = router.navigate("/my-account/orders").unwrap();
//! assert_eq!(
//!     outcome,
//!     NavigationOutcome::Redirected {
//!         from: "/my-account/orders".to_string(),
//!         to: "/log-in/?to=%2Fmy-account%2Forders".to_string(),
//!     }
//! );
//!
//! store.log_in();
//! let outcome = router.navigate("/my-account/orders").unwrap();
//! assert_eq!(
//!     outcome,
//!     NavigationOutcome::Moved {
//!         route: "Orders".to_string(),
//!         path: "/my-account/orders".to_string(),
//!     }
//! );
//! ```

pub mod app;
pub mod auth;
pub mod page;
pub mod routing;
pub mod signal;
pub mod views;

pub use app::storefront_app;
pub use auth::{AuthSource, AuthStore};
pub use page::{Page, PageElement};
pub use routing::{
	GuardConfig, GuardDecision, NavigationGuard, NavigationOutcome, PathPattern, RedirectTarget,
	Route, RouteError, RouteMatch, RouteMeta, RouteParams, Router,
};
pub use signal::Signal;
