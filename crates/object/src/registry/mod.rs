use arc_swap::ArcSwap;
use rustc_hash::FxHashMap as HashMap;

use crate::value::Value;

/// Result of a successful registration.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InsertAction {
	/// Name was new; value inserted.
	InsertedNew,
	/// Name existed; previous value replaced.
	ReplacedExisting,
}

#[derive(Clone, Default)]
struct SymbolSnapshot {
	by_name: HashMap<Box<str>, Value>,
}

/// Shared name to value table.
///
/// Readers load an immutable snapshot and never block. Writers copy the current
/// snapshot and swap it in; concurrent writes to the same name are last-write-wins.
/// Dotted names such as `geo.Shape` are opaque keys.
pub struct SymbolRegistry {
	snap: ArcSwap<SymbolSnapshot>,
}

impl SymbolRegistry {
	pub fn new() -> Self {
		Self {
			snap: ArcSwap::from_pointee(SymbolSnapshot::default()),
		}
	}

	/// Binds `name` to `value`, replacing any previous binding.
	pub fn register(&self, name: &str, value: Value) -> InsertAction {
		let prev = self.snap.rcu(|cur| {
			let mut next = SymbolSnapshot::clone(cur);
			next.by_name.insert(Box::from(name), value.clone());
			next
		});

		if prev.by_name.contains_key(name) {
			tracing::debug!(symbol = name, "replaced existing symbol");
			InsertAction::ReplacedExisting
		} else {
			tracing::trace!(symbol = name, "registered symbol");
			InsertAction::InsertedNew
		}
	}

	/// Returns the value bound to `name`.
	#[inline]
	pub fn resolve(&self, name: &str) -> Option<Value> {
		self.snap.load().by_name.get(name).cloned()
	}

	#[inline]
	pub fn contains(&self, name: &str) -> bool {
		self.snap.load().by_name.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.snap.load().by_name.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Registered names in sorted order.
	pub fn names(&self) -> Vec<String> {
		let snap = self.snap.load();
		let mut names: Vec<String> = snap.by_name.keys().map(|k| k.to_string()).collect();
		names.sort_unstable();
		names
	}
}

impl Default for SymbolRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl core::fmt::Debug for SymbolRegistry {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("SymbolRegistry")
			.field("len", &self.len())
			.finish()
	}
}

#[cfg(test)]
mod tests;
