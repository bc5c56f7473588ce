//! Observable state cells for router-owned state.
//!
//! `Signal<T>` holds a value shared between the router and anything that
//! wants to observe the current navigation state (path, params, route
//! name). All clones of a signal share the same underlying value.
//!
//! Navigation is dispatched serially by the host event loop, so no
//! cross-thread coordination protocol is layered on top of the lock.

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// A shared, observable value cell.
///
/// Cloning a `Signal` is cheap and yields a handle to the same value.
pub struct Signal<T> {
	value: Arc<RwLock<T>>,
}

impl<T> Signal<T> {
	/// Creates a new signal with the given initial value.
	pub fn new(value: T) -> Self {
		Self {
			value: Arc::new(RwLock::new(value)),
		}
	}

	/// Returns a clone of the current value.
	pub fn get(&self) -> T
	where
		T: Clone,
	{
		self.value.read().clone()
	}

	/// Replaces the current value.
	pub fn set(&self, value: T) {
		*self.value.write() = value;
	}

	/// Reads the current value through a closure without cloning.
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&self.value.read())
	}
}

impl<T> Clone for Signal<T> {
	fn clone(&self) -> Self {
		Self {
			value: Arc::clone(&self.value),
		}
	}
}

impl<T: Clone + fmt::Debug> fmt::Debug for Signal<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Signal").field("value", &self.get()).finish()
	}
}

impl<T: Default> Default for Signal<T> {
	fn default() -> Self {
		Self::new(T::default())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_signal_get_set() {
		let signal = Signal::new(0);
		assert_eq!(signal.get(), 0);
		signal.set(42);
		assert_eq!(signal.get(), 42);
	}

	#[test]
	fn test_signal_clone_shares_value() {
		let a = Signal::new("initial".to_string());
		let b = a.clone();
		a.set("changed".to_string());
		assert_eq!(b.get(), "changed");
	}

	#[test]
	fn test_signal_with_reads_in_place() {
		let signal = Signal::new(vec![1, 2, 3]);
		let len = signal.with(|v| v.len());
		assert_eq!(len, 3);
	}
}
