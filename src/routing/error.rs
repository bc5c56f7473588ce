//! Error types for route resolution and navigation.

use thiserror::Error;

/// Error type for router operations.
///
/// `NoRouteMatch` is the only variant produced during normal operation;
/// the remaining variants indicate a misconfigured table or a bad
/// programmatic navigation request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
	/// No table entry structurally matches the requested path.
	#[error("no route matches path: {0}")]
	NoRouteMatch(String),
	/// A programmatic navigation referenced a name not in the table.
	#[error("unknown route name: {0}")]
	UnknownRouteName(String),
	/// A reverse lookup was missing a required parameter binding.
	#[error("missing parameter `{param}` for route `{route}`")]
	MissingParameter {
		/// Name of the route being reversed.
		route: String,
		/// Name of the parameter that was not supplied.
		param: String,
	},
	/// A route pattern failed to compile.
	#[error("invalid route pattern `{pattern}`: {reason}")]
	InvalidPattern {
		/// The offending pattern string.
		pattern: String,
		/// Why compilation was rejected.
		reason: String,
	},
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_error_display() {
		assert_eq!(
			RouteError::NoRouteMatch("/nowhere/".to_string()).to_string(),
			"no route matches path: /nowhere/"
		);
		assert_eq!(
			RouteError::UnknownRouteName("Basket".to_string()).to_string(),
			"unknown route name: Basket"
		);
		assert_eq!(
			RouteError::MissingParameter {
				route: "Product".to_string(),
				param: "product_slug".to_string(),
			}
			.to_string(),
			"missing parameter `product_slug` for route `Product`"
		);
	}
}
