//! Route definitions and match results.

use std::collections::HashMap;
use std::sync::Arc;

use crate::page::Page;

use super::pattern::PathPattern;

/// Type alias for view handler functions.
pub(crate) type ViewHandler = Arc<dyn Fn(&RouteParams) -> Page + Send + Sync>;

/// Access-control metadata attached to a route.
///
/// Currently a single flag; kept as an open struct so further tags (e.g.
/// role requirements) can be added without breaking the table API.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteMeta {
	/// Whether navigating to this route requires an authenticated visitor.
	pub requires_login: bool,
}

impl RouteMeta {
	/// Metadata for a route that requires an authenticated visitor.
	pub fn restricted() -> Self {
		Self {
			requires_login: true,
		}
	}
}

/// Parameter segments bound by a pattern match, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(HashMap<String, String>);

impl RouteParams {
	/// Returns the value bound to the given parameter name.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0.get(name).map(String::as_str)
	}

	/// Returns the number of bound parameters.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns whether no parameters were bound.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<HashMap<String, String>> for RouteParams {
	fn from(map: HashMap<String, String>) -> Self {
		Self(map)
	}
}

/// A single route definition.
///
/// Binds a path pattern to a symbolic name, a view component, and
/// access-control metadata. Metadata is fixed at construction; the table
/// offers no mutation API afterwards.
#[derive(Clone)]
pub struct Route {
	pattern: PathPattern,
	name: String,
	handler: ViewHandler,
	meta: RouteMeta,
}

impl std::fmt::Debug for Route {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Route")
			.field("name", &self.name)
			.field("pattern", &self.pattern)
			.field("meta", &self.meta)
			.finish()
	}
}

impl Route {
	/// Creates a named route for a parameterless view component.
	///
	/// # Panics
	///
	/// Panics if the pattern is invalid. Use [`PathPattern::new`] directly
	/// for fallible construction.
	pub fn view<F>(name: impl Into<String>, pattern: &str, component: F) -> Self
	where
		F: Fn() -> Page + Send + Sync + 'static,
	{
		Self {
			pattern: PathPattern::new(pattern)
				.unwrap_or_else(|e| panic!("invalid route pattern '{}': {}", pattern, e)),
			name: name.into(),
			handler: Arc::new(move |_params| component()),
			meta: RouteMeta::default(),
		}
	}

	/// Creates a named route whose view component reads path parameters.
	///
	/// # Panics
	///
	/// Panics if the pattern is invalid. Use [`PathPattern::new`] directly
	/// for fallible construction.
	pub fn with_params<F>(name: impl Into<String>, pattern: &str, handler: F) -> Self
	where
		F: Fn(&RouteParams) -> Page + Send + Sync + 'static,
	{
		Self {
			pattern: PathPattern::new(pattern)
				.unwrap_or_else(|e| panic!("invalid route pattern '{}': {}", pattern, e)),
			name: name.into(),
			handler: Arc::new(handler),
			meta: RouteMeta::default(),
		}
	}

	/// Marks this route as requiring an authenticated visitor.
	pub fn restricted(mut self) -> Self {
		self.meta = RouteMeta::restricted();
		self
	}

	/// Returns the route's symbolic name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the route's path pattern.
	pub fn pattern(&self) -> &PathPattern {
		&self.pattern
	}

	/// Returns the route's access-control metadata.
	pub fn meta(&self) -> RouteMeta {
		self.meta
	}

	/// Renders the route's view with the given parameters.
	pub fn render(&self, params: &RouteParams) -> Page {
		(self.handler)(params)
	}
}

/// A matched route with its bound parameters.
///
/// Constructed fresh for each navigation attempt and discarded once the
/// guard decision has been applied.
#[derive(Debug, Clone)]
pub struct RouteMatch {
	/// The matched route.
	pub route: Route,
	/// Parameter segments bound from the path.
	pub params: RouteParams,
	/// The requested path (query string already stripped).
	pub path: String,
}
