use std::any::Any;
use std::fmt;
use std::sync::{Arc, LazyLock};

use conform_object::{HostObject, Members, Value};

use crate::error::Result;
use crate::verify;

/// Per-process value stamped on every descriptor.
///
/// Every descriptor is built by [`InterfaceDescriptor::new`] with this value, so
/// the downcast in [`as_interface`] is what identifies an interface; the seal
/// comparison is a consistency check on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Seal(u64);

static PROCESS_SEAL: LazyLock<Seal> =
	LazyLock::new(|| Seal(uuid::Uuid::new_v4().as_u64_pair().0));

/// Declarative input for an interface.
#[derive(Debug, Clone, Default)]
pub struct InterfaceConfig {
	/// Required members mapped to shape samples, in declaration order.
	pub members: Members,
	/// Event metadata, carried but never verified.
	pub events: Option<Value>,
	/// Property metadata, carried but never verified.
	pub properties: Option<Value>,
}

impl InterfaceConfig {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a required member. The sample's kind (and arity, for functions) is the contract.
	pub fn member(mut self, key: impl Into<String>, sample: impl Into<Value>) -> Self {
		self.members.insert(key.into(), sample.into());
		self
	}

	pub fn events(mut self, events: Value) -> Self {
		self.events = Some(events);
		self
	}

	pub fn properties(mut self, properties: Value) -> Self {
		self.properties = Some(properties);
		self
	}

	/// Reads `members`, `events` and `properties` from a map value.
	///
	/// A non-map config, or a non-map `members` entry, contributes no members.
	pub fn from_value(config: &Value) -> Self {
		let members = config
			.get("members")
			.and_then(Value::as_object)
			.cloned()
			.unwrap_or_default();
		Self {
			members,
			events: config.get("events").cloned(),
			properties: config.get("properties").cloned(),
		}
	}
}

/// A declared interface.
///
/// Immutable once declared. Shared between the symbol registry and callers
/// through `Arc`.
#[derive(Debug)]
pub struct InterfaceDescriptor {
	name: String,
	members: Members,
	events: Option<Value>,
	properties: Option<Value>,
	strict_arity: bool,
	seal: Seal,
}

impl InterfaceDescriptor {
	pub(crate) fn new(name: &str, config: InterfaceConfig, strict_arity: bool) -> Self {
		Self {
			name: name.to_string(),
			members: config.members,
			events: config.events,
			properties: config.properties,
			strict_arity,
			seal: *PROCESS_SEAL,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Required members and their shape samples.
	pub fn members(&self) -> &Members {
		&self.members
	}

	pub fn events(&self) -> Option<&Value> {
		self.events.as_ref()
	}

	pub fn properties(&self) -> Option<&Value> {
		self.properties.as_ref()
	}

	/// Whether function members are checked for matching parameter counts.
	pub fn strict_arity(&self) -> bool {
		self.strict_arity
	}

	/// Verifies that `target` (a class or an instance) implements this interface.
	pub fn assert(&self, target: &Value) -> Result<()> {
		verify::verify(target, self)
	}

	fn is_sealed(&self) -> bool {
		self.seal == *PROCESS_SEAL
	}
}

impl fmt::Display for InterfaceDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[Interface {}]", self.name)
	}
}

impl HostObject for InterfaceDescriptor {
	fn as_any(&self) -> &dyn Any {
		self
	}

	fn into_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
		self
	}
}

/// Returns the descriptor carried by `value`, if it is a sealed interface.
pub fn as_interface(value: &Value) -> Option<&InterfaceDescriptor> {
	value
		.as_host()?
		.downcast_ref::<InterfaceDescriptor>()
		.filter(|iface| iface.is_sealed())
}

/// Shared handle variant of [`as_interface`].
pub(crate) fn interface_arc(value: Value) -> Option<Arc<InterfaceDescriptor>> {
	match value {
		Value::Host(host) => host
			.downcast_arc::<InterfaceDescriptor>()
			.filter(|iface| iface.is_sealed()),
		_ => None,
	}
}

/// Whether `value` is a declared interface. Never fails.
pub fn is_interface(value: &Value) -> bool {
	as_interface(value).is_some()
}
