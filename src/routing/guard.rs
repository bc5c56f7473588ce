//! Navigation guard: the single authorization checkpoint.
//!
//! The guard runs exactly once per navigation attempt, after the route
//! table has resolved the target and before any view is mounted. It is a
//! pure decision function over the matched route's metadata and a
//! snapshot of the authentication flag: per attempt the evaluation moves
//! from pending straight to one of the two terminal decisions, allow or
//! redirect, and is never re-run for the substituted target. The login
//! route carries no access-control tag, so a redirect cannot loop.
//!
//! An unauthorized attempt is expected control flow, not an error: it is
//! logged at debug level and resolved by substituting the login route,
//! carrying the originally requested path so the login flow can resume
//! the interrupted navigation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::auth::AuthSource;

use super::route::RouteMatch;

/// Configuration for the navigation guard.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardConfig {
	/// Symbolic name of the route to substitute on denial.
	pub login_route: String,
	/// Query parameter carrying the originally requested path.
	pub return_param: String,
}

impl Default for GuardConfig {
	fn default() -> Self {
		Self {
			login_route: "LogIn".to_string(),
			return_param: "to".to_string(),
		}
	}
}

/// The substitute destination issued when a navigation is denied.
///
/// Carries the target by symbolic route name plus the structured query
/// payload, so the login-success handler can consume the return path
/// without string parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget {
	/// Symbolic name of the route to navigate to instead.
	pub route: String,
	/// Query parameters to attach, in order.
	pub query: Vec<(String, String)>,
}

impl RedirectTarget {
	/// Encodes the query pairs as a URL query string.
	pub fn query_string(&self) -> String {
		// Plain string pairs; encoding them cannot fail.
		serde_urlencoded::to_string(&self.query).unwrap_or_default()
	}
}

/// Terminal outcome of a guard evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
	/// Proceed to the matched target unchanged.
	Allow,
	/// Deny the target and proceed to the substitute destination.
	Redirect(RedirectTarget),
}

/// Pre-navigation authorization checkpoint.
///
/// The authentication source is injected at construction so tests can
/// supply a fixed fake; the guard reads the flag and never writes it.
pub struct NavigationGuard {
	auth: Arc<dyn AuthSource>,
	config: GuardConfig,
}

impl std::fmt::Debug for NavigationGuard {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("NavigationGuard")
			.field("config", &self.config)
			.finish()
	}
}

impl NavigationGuard {
	/// Creates a guard with the default configuration.
	pub fn new(auth: Arc<dyn AuthSource>) -> Self {
		Self::with_config(auth, GuardConfig::default())
	}

	/// Creates a guard with an explicit configuration.
	pub fn with_config(auth: Arc<dyn AuthSource>, config: GuardConfig) -> Self {
		Self { auth, config }
	}

	/// Returns the guard configuration.
	pub fn config(&self) -> &GuardConfig {
		&self.config
	}

	/// Decides whether the navigation attempt may proceed.
	///
	/// Reads the authentication flag once, at evaluation time. The same
	/// target and the same snapshot always produce the same decision.
	pub fn evaluate(&self, target: &RouteMatch) -> GuardDecision {
		if !target.route.meta().requires_login {
			return GuardDecision::Allow;
		}

		if self.auth.is_authenticated() {
			debug!(path = %target.path, route = %target.route.name(), "restricted route allowed");
			return GuardDecision::Allow;
		}

		debug!(
			path = %target.path,
			route = %target.route.name(),
			"unauthenticated visitor, redirecting to login"
		);
		GuardDecision::Redirect(RedirectTarget {
			route: self.config.login_route.clone(),
			query: vec![(self.config.return_param.clone(), target.path.clone())],
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::page::Page;
	use crate::routing::route::Route;
	use rstest::rstest;

	/// Fixed-value authentication source for guard tests.
	struct FixedAuth(bool);

	impl AuthSource for FixedAuth {
		fn is_authenticated(&self) -> bool {
			self.0
		}
	}

	fn guard(authenticated: bool) -> NavigationGuard {
		NavigationGuard::new(Arc::new(FixedAuth(authenticated)))
	}

	fn attempt(route: Route, path: &str) -> RouteMatch {
		RouteMatch {
			route,
			params: Default::default(),
			path: path.to_string(),
		}
	}

	fn open_route() -> Route {
		Route::view("Cart", "/cart/", || Page::Empty)
	}

	fn restricted_route() -> Route {
		Route::view("Orders", "/my-account/orders", || Page::Empty).restricted()
	}

	#[rstest]
	#[case(false)]
	#[case(true)]
	fn test_open_route_allowed_regardless_of_auth(#[case] authenticated: bool) {
		let decision = guard(authenticated).evaluate(&attempt(open_route(), "/cart/"));
		assert_eq!(decision, GuardDecision::Allow);
	}

	#[test]
	fn test_restricted_route_allowed_when_authenticated() {
		let decision = guard(true).evaluate(&attempt(restricted_route(), "/my-account/orders"));
		assert_eq!(decision, GuardDecision::Allow);
	}

	#[test]
	fn test_restricted_route_redirects_when_unauthenticated() {
		let decision = guard(false).evaluate(&attempt(restricted_route(), "/my-account/orders"));
		assert_eq!(
			decision,
			GuardDecision::Redirect(RedirectTarget {
				route: "LogIn".to_string(),
				query: vec![("to".to_string(), "/my-account/orders".to_string())],
			})
		);
	}

	#[test]
	fn test_evaluation_is_idempotent() {
		let guard = guard(false);
		let target = attempt(restricted_route(), "/my-account/settings");
		assert_eq!(guard.evaluate(&target), guard.evaluate(&target));
	}

	#[test]
	fn test_query_string_encoding() {
		let target = RedirectTarget {
			route: "LogIn".to_string(),
			query: vec![("to".to_string(), "/my-account/orders".to_string())],
		};
		assert_eq!(target.query_string(), "to=%2Fmy-account%2Forders");
	}

	#[test]
	fn test_config_round_trips_through_urlencoded() {
		let config = GuardConfig {
			login_route: "SignIn".to_string(),
			return_param: "next".to_string(),
		};
		let encoded = serde_urlencoded::to_string(&config).unwrap();
		assert_eq!(encoded, "login_route=SignIn&return_param=next");

		let decoded: GuardConfig = serde_urlencoded::from_str(&encoded).unwrap();
		assert_eq!(decoded, config);
	}

	#[test]
	fn test_custom_config() {
		let config = GuardConfig {
			login_route: "SignIn".to_string(),
			return_param: "next".to_string(),
		};
		let guard =
			NavigationGuard::with_config(Arc::new(FixedAuth(false)), config);

		match guard.evaluate(&attempt(restricted_route(), "/my-account/")) {
			GuardDecision::Redirect(target) => {
				assert_eq!(target.route, "SignIn");
				assert_eq!(target.query, vec![("next".to_string(), "/my-account/".to_string())]);
			}
			GuardDecision::Allow => panic!("expected a redirect"),
		}
	}
}
