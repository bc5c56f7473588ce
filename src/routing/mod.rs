//! Route resolution and navigation for the storefront.
//!
//! The route table maps URL paths to view components; the navigation
//! guard enforces the login requirement before any view is mounted. See
//! [`crate::app`] for the concrete storefront table.

pub mod error;
pub mod guard;
pub mod pattern;
pub mod route;
pub mod router;

pub use error::RouteError;
pub use guard::{GuardConfig, GuardDecision, NavigationGuard, RedirectTarget};
pub use pattern::PathPattern;
pub use route::{Route, RouteMatch, RouteMeta, RouteParams};
pub use router::{NavigationOutcome, Router};
