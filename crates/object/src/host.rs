use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Object type defined outside this crate and carried inside a [`Value`](crate::Value).
///
/// Embedders recognize their own host objects by downcasting through
/// [`HostObject::as_any`].
pub trait HostObject: Any + fmt::Debug + fmt::Display + Send + Sync {
	fn as_any(&self) -> &dyn Any;

	fn into_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl dyn HostObject {
	/// Returns the concrete object if it is a `T`.
	pub fn downcast_ref<T: HostObject>(&self) -> Option<&T> {
		self.as_any().downcast_ref::<T>()
	}

	/// Converts a shared handle into a handle to the concrete `T`.
	pub fn downcast_arc<T: HostObject>(self: Arc<Self>) -> Option<Arc<T>> {
		self.into_any_arc().downcast::<T>().ok()
	}
}
