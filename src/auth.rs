//! Authentication state access.
//!
//! The navigation guard needs exactly one signal from the outside world:
//! whether the current visitor is logged in. [`AuthSource`] is that
//! read-only contract; [`AuthStore`] is the process-wide store that owns
//! and mutates the flag. The routing layer holds only an
//! `Arc<dyn AuthSource>` and never writes through it, which also lets
//! tests supply a fixed fake source.

use parking_lot::RwLock;

/// Read-only view of the authentication state.
///
/// Implementations must be synchronously readable once the application
/// has started; an unavailable store is a startup failure, not a
/// per-navigation condition.
pub trait AuthSource: Send + Sync {
	/// Returns whether the current visitor is authenticated.
	fn is_authenticated(&self) -> bool;
}

/// Process-wide authentication store.
///
/// Owns the single `is_authenticated` flag for the lifetime of the
/// application. Mutation goes through [`AuthStore::log_in`] and
/// [`AuthStore::log_out`]; the routing layer only ever reads.
#[derive(Debug, Default)]
pub struct AuthStore {
	authenticated: RwLock<bool>,
}

impl AuthStore {
	/// Creates a store for an unauthenticated visitor.
	pub fn new() -> Self {
		Self::default()
	}

	/// Marks the visitor as logged in.
	pub fn log_in(&self) {
		*self.authenticated.write() = true;
	}

	/// Marks the visitor as logged out.
	pub fn log_out(&self) {
		*self.authenticated.write() = false;
	}
}

impl AuthSource for AuthStore {
	fn is_authenticated(&self) -> bool {
		*self.authenticated.read()
	}
}
