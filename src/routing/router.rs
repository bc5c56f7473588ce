//! The ordered route table and navigation entry points.
//!
//! The router owns a static, ordered list of [`Route`] definitions.
//! Matching is an explicit first-match scan in declaration order: when
//! two patterns could both match a path (a literal route and a catch-all,
//! say), declaration order is the sole tie-break. The storefront table in
//! [`crate::app`] therefore declares every literal route before the two
//! catch-all patterns, and the two-segment catch-all before the
//! one-segment one.

use std::collections::HashMap;

use tracing::debug;

use crate::page::Page;
use crate::signal::Signal;

use super::error::RouteError;
use super::guard::{GuardDecision, NavigationGuard};
use super::route::{Route, RouteMatch, RouteParams, ViewHandler};

/// Final destination of a committed navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
	/// The guard allowed the matched target.
	Moved {
		/// Name of the route navigated to.
		route: String,
		/// The committed path.
		path: String,
	},
	/// The guard denied the target and substituted the login route.
	Redirected {
		/// The originally requested path.
		from: String,
		/// The committed path, query string included.
		to: String,
	},
	/// No table entry matched; the not-found state was committed.
	NotFound {
		/// The requested path.
		path: String,
	},
}

/// Client-side router for the storefront.
///
/// Built once at application start; the table is read-only afterwards.
pub struct Router {
	/// Registered routes in declaration order.
	routes: Vec<Route>,
	/// Name → table index, for programmatic navigation and redirects.
	named: HashMap<String, usize>,
	/// Pre-navigation authorization checkpoint.
	guard: Option<NavigationGuard>,
	/// View rendered when no route matches.
	not_found: Option<ViewHandler>,
	/// Committed path for the current navigation state.
	current_path: Signal<String>,
	/// Parameters bound by the committed match.
	current_params: Signal<RouteParams>,
	/// Name of the committed route, if any matched.
	current_route: Signal<Option<String>>,
	/// Query parameters attached to the committed path.
	current_query: Signal<Vec<(String, String)>>,
}

impl std::fmt::Debug for Router {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Router")
			.field("routes", &self.routes.len())
			.field("guard", &self.guard.is_some())
			.field("current_path", &self.current_path.get())
			.finish()
	}
}

impl Default for Router {
	fn default() -> Self {
		Self::new()
	}
}

impl Router {
	/// Creates an empty router positioned at the root path.
	pub fn new() -> Self {
		Self {
			routes: Vec::new(),
			named: HashMap::new(),
			guard: None,
			not_found: None,
			current_path: Signal::new("/".to_string()),
			current_params: Signal::default(),
			current_route: Signal::new(None),
			current_query: Signal::default(),
		}
	}

	/// Appends a route to the table.
	///
	/// Declaration order is semantically significant: the first pattern
	/// that structurally matches a path wins.
	///
	/// # Panics
	///
	/// Panics if a route with the same name is already registered; every
	/// name must be unique so lookup by name is unambiguous.
	pub fn mount(mut self, route: Route) -> Self {
		if self.named.contains_key(route.name()) {
			panic!("duplicate route name '{}'", route.name());
		}
		self.named.insert(route.name().to_string(), self.routes.len());
		self.routes.push(route);
		self
	}

	/// Installs the navigation guard.
	pub fn with_guard(mut self, guard: NavigationGuard) -> Self {
		self.guard = Some(guard);
		self
	}

	/// Sets the view rendered when no route matches.
	pub fn not_found<F>(mut self, component: F) -> Self
	where
		F: Fn() -> Page + Send + Sync + 'static,
	{
		self.not_found = Some(std::sync::Arc::new(move |_params| component()));
		self
	}

	/// Matches a path against the table in declaration order.
	///
	/// Any query string is stripped before matching. Returns the first
	/// structural match with its parameter bindings, or `None`.
	pub fn match_path(&self, path: &str) -> Option<RouteMatch> {
		let (path, _query) = split_query(path);
		for route in &self.routes {
			if let Some(params) = route.pattern().matches(path) {
				debug!(path, route = %route.name(), "route matched");
				return Some(RouteMatch {
					route: route.clone(),
					params: params.into(),
					path: path.to_string(),
				});
			}
		}
		debug!(path, "no route matched");
		None
	}

	/// Generates a path by route name with parameter bindings.
	///
	/// # Errors
	///
	/// Returns [`RouteError::UnknownRouteName`] if the name is not in the
	/// table, or [`RouteError::MissingParameter`] if a pattern parameter
	/// has no binding.
	pub fn reverse(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RouteError> {
		let index = self
			.named
			.get(name)
			.ok_or_else(|| RouteError::UnknownRouteName(name.to_string()))?;
		let route = &self.routes[*index];

		let bindings: HashMap<String, String> = params
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();

		route.pattern().reverse(&bindings).ok_or_else(|| {
			let missing = route
				.pattern()
				.param_names()
				.iter()
				.find(|p| !bindings.contains_key(*p))
				.cloned()
				.unwrap_or_default();
			RouteError::MissingParameter {
				route: name.to_string(),
				param: missing,
			}
		})
	}

	/// Processes a path-based navigation attempt.
	///
	/// Matches the path, runs the guard exactly once, and commits the
	/// final destination to the router's current-state signals. A missing
	/// route and a guard denial are normal outcomes, not errors.
	///
	/// # Errors
	///
	/// Returns an error only for a misconfigured table, e.g. a guard
	/// redirect naming a route that does not exist.
	pub fn navigate(&self, path: &str) -> Result<NavigationOutcome, RouteError> {
		let (raw_path, query) = split_query(path);

		let Some(target) = self.match_path(raw_path) else {
			self.commit(raw_path.to_string(), None, RouteParams::default(), query);
			return Ok(NavigationOutcome::NotFound {
				path: raw_path.to_string(),
			});
		};

		let decision = match &self.guard {
			Some(guard) => guard.evaluate(&target),
			None => GuardDecision::Allow,
		};

		match decision {
			GuardDecision::Allow => {
				let route = target.route.name().to_string();
				self.commit(target.path.clone(), Some(route.clone()), target.params, query);
				Ok(NavigationOutcome::Moved {
					route,
					path: raw_path.to_string(),
				})
			}
			GuardDecision::Redirect(redirect) => {
				// Terminal decision: the substitute target is committed
				// without re-running the guard.
				let to_path = self.reverse(&redirect.route, &[])?;
				let substitute = self
					.match_path(&to_path)
					.ok_or_else(|| RouteError::NoRouteMatch(to_path.clone()))?;

				let to = if redirect.query.is_empty() {
					to_path
				} else {
					format!("{}?{}", to_path, redirect.query_string())
				};

				self.commit(
					substitute.path,
					Some(substitute.route.name().to_string()),
					substitute.params,
					redirect.query,
				);
				Ok(NavigationOutcome::Redirected {
					from: raw_path.to_string(),
					to,
				})
			}
		}
	}

	/// Processes a programmatic navigation attempt by route name.
	///
	/// # Errors
	///
	/// Returns [`RouteError::UnknownRouteName`] or
	/// [`RouteError::MissingParameter`] if the reverse lookup fails.
	pub fn navigate_to_name(
		&self,
		name: &str,
		params: &[(&str, &str)],
	) -> Result<NavigationOutcome, RouteError> {
		let path = self.reverse(name, params)?;
		self.navigate(&path)
	}

	/// Renders the view for the committed navigation state.
	///
	/// Falls back to the not-found view (or [`Page::Empty`] if none is
	/// registered) when the current state has no matched route.
	pub fn render_current(&self) -> Page {
		let name = self.current_route.get();
		let handler = name
			.as_deref()
			.and_then(|name| self.named.get(name))
			.map(|index| &self.routes[*index]);

		match handler {
			Some(route) => self.current_params.with(|params| route.render(params)),
			None => match &self.not_found {
				Some(not_found) => not_found(&RouteParams::default()),
				None => Page::Empty,
			},
		}
	}

	/// Returns the number of registered routes.
	pub fn route_count(&self) -> usize {
		self.routes.len()
	}

	/// Checks whether a route name exists in the table.
	pub fn has_route(&self, name: &str) -> bool {
		self.named.contains_key(name)
	}

	/// Returns the routes in declaration order.
	pub fn routes(&self) -> &[Route] {
		&self.routes
	}

	/// Returns the committed path signal.
	pub fn current_path(&self) -> &Signal<String> {
		&self.current_path
	}

	/// Returns the committed params signal.
	pub fn current_params(&self) -> &Signal<RouteParams> {
		&self.current_params
	}

	/// Returns the committed route-name signal.
	pub fn current_route(&self) -> &Signal<Option<String>> {
		&self.current_route
	}

	/// Returns the committed query-parameters signal.
	pub fn current_query(&self) -> &Signal<Vec<(String, String)>> {
		&self.current_query
	}

	/// Commits a navigation decision to the current-state signals.
	fn commit(
		&self,
		path: String,
		route: Option<String>,
		params: RouteParams,
		query: Vec<(String, String)>,
	) {
		self.current_path.set(path);
		self.current_route.set(route);
		self.current_params.set(params);
		self.current_query.set(query);
	}
}

/// Splits a navigation path into its path and parsed query parts.
fn split_query(path: &str) -> (&str, Vec<(String, String)>) {
	match path.split_once('?') {
		Some((path, query)) => (
			path,
			serde_urlencoded::from_str(query).unwrap_or_default(),
		),
		None => (path, Vec::new()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::page::PageElement;

	fn stub_view() -> Page {
		Page::Empty
	}

	fn router() -> Router {
		Router::new()
			.mount(Route::view("home", "/", stub_view))
			.mount(Route::view("Search", "/search/", stub_view))
			.mount(Route::with_params("Category", "/{category_slug}/", |_| Page::Empty))
	}

	#[test]
	fn test_mount_and_lookup() {
		let router = router();
		assert_eq!(router.route_count(), 3);
		assert!(router.has_route("home"));
		assert!(router.has_route("Category"));
		assert!(!router.has_route("Basket"));
	}

	#[test]
	#[should_panic(expected = "duplicate route name 'home'")]
	fn test_mount_rejects_duplicate_names() {
		let _ = Router::new()
			.mount(Route::view("home", "/", stub_view))
			.mount(Route::view("home", "/home/", stub_view));
	}

	#[test]
	fn test_first_match_wins() {
		let router = router();
		// `/search/` also fits the one-segment catch-all; the literal
		// route is declared earlier and must win.
		let m = router.match_path("/search/").unwrap();
		assert_eq!(m.route.name(), "Search");

		let m = router.match_path("/running/").unwrap();
		assert_eq!(m.route.name(), "Category");
		assert_eq!(m.params.get("category_slug"), Some("running"));
	}

	#[test]
	fn test_match_strips_query() {
		let router = router();
		let m = router.match_path("/search/?q=shoes").unwrap();
		assert_eq!(m.route.name(), "Search");
		assert_eq!(m.path, "/search/");
	}

	#[test]
	fn test_reverse() {
		let router = router();
		assert_eq!(router.reverse("Search", &[]).unwrap(), "/search/");
		assert_eq!(
			router.reverse("Category", &[("category_slug", "running")]).unwrap(),
			"/running/"
		);
	}

	#[test]
	fn test_reverse_unknown_name() {
		assert_eq!(
			router().reverse("Basket", &[]),
			Err(RouteError::UnknownRouteName("Basket".to_string()))
		);
	}

	#[test]
	fn test_reverse_missing_param() {
		assert_eq!(
			router().reverse("Category", &[]),
			Err(RouteError::MissingParameter {
				route: "Category".to_string(),
				param: "category_slug".to_string(),
			})
		);
	}

	#[test]
	fn test_navigate_commits_state() {
		let router = router();
		let outcome = router.navigate("/running/").unwrap();
		assert_eq!(
			outcome,
			NavigationOutcome::Moved {
				route: "Category".to_string(),
				path: "/running/".to_string(),
			}
		);
		assert_eq!(router.current_path().get(), "/running/");
		assert_eq!(router.current_route().get(), Some("Category".to_string()));
		assert_eq!(router.current_params().get().get("category_slug"), Some("running"));
	}

	#[test]
	fn test_navigate_not_found() {
		let router = router();
		let outcome = router.navigate("/a/b/c/").unwrap();
		assert_eq!(
			outcome,
			NavigationOutcome::NotFound {
				path: "/a/b/c/".to_string(),
			}
		);
		assert_eq!(router.current_route().get(), None);
	}

	#[test]
	fn test_navigate_to_name() {
		let router = router();
		let outcome = router
			.navigate_to_name("Category", &[("category_slug", "running")])
			.unwrap();
		assert_eq!(
			outcome,
			NavigationOutcome::Moved {
				route: "Category".to_string(),
				path: "/running/".to_string(),
			}
		);
	}

	#[test]
	fn test_render_current_reads_committed_params() {
		let router = Router::new().mount(Route::with_params(
			"Category",
			"/{category_slug}/",
			|params| {
				PageElement::new("h1")
					.child(params.get("category_slug").unwrap_or("").to_string())
					.into_page()
			},
		));

		router.navigate("/running/").unwrap();
		assert_eq!(router.render_current().render_to_string(), "<h1>running</h1>");
	}

	#[test]
	fn test_render_current_falls_back_to_not_found() {
		let router = Router::new()
			.mount(Route::view("home", "/", stub_view))
			.not_found(|| PageElement::new("h1").child("Not found").into_page());

		router.navigate("/missing/page/here/").unwrap();
		assert_eq!(router.render_current().render_to_string(), "<h1>Not found</h1>");
	}

	#[test]
	fn test_split_query_parses_pairs() {
		let (path, query) = split_query("/log-in/?to=%2Fcart%2F");
		assert_eq!(path, "/log-in/");
		assert_eq!(query, vec![("to".to_string(), "/cart/".to_string())]);
	}
}
