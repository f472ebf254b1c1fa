//! Interface declaration and name resolution over a shared symbol registry.

use std::sync::Arc;

use conform_object::{Assertions, HostObject, InsertAction, SymbolRegistry, Value};

use crate::descriptor::{InterfaceConfig, InterfaceDescriptor, interface_arc, is_interface};
use crate::error::{InterfaceError, Result};
use crate::settings::Settings;
use crate::verify;

/// Declares interfaces into a symbol registry and resolves them by name.
///
/// Holds an assertion table with the builtin checks plus `implementsInterface`
/// and `isInterface`; debug-mode declaration validation runs through it.
#[derive(Debug, Clone)]
pub struct Interfaces {
	symbols: Arc<SymbolRegistry>,
	settings: Settings,
	assertions: Assertions,
}

impl Interfaces {
	pub fn new(symbols: Arc<SymbolRegistry>, settings: Settings) -> Self {
		let mut assertions = Assertions::with_builtins();
		register_assertions(&mut assertions);
		Self {
			symbols,
			settings,
			assertions,
		}
	}

	/// Assertion table used for declaration checks.
	pub fn assertions(&self) -> &Assertions {
		&self.assertions
	}

	pub fn symbols(&self) -> &Arc<SymbolRegistry> {
		&self.symbols
	}

	pub fn settings(&self) -> Settings {
		self.settings
	}

	/// Declares an interface and registers it under `name`.
	///
	/// Redeclaring a name replaces the previous binding. With
	/// [`Settings::debug`] set, `name` must be a dotted identifier path.
	pub fn declare(&self, name: &str, config: InterfaceConfig) -> Result<Arc<InterfaceDescriptor>> {
		self.check_name(name)?;

		let iface = Arc::new(InterfaceDescriptor::new(
			name,
			config,
			self.settings.strict_arity,
		));
		let host: Arc<dyn HostObject> = iface.clone();
		let action = self.symbols.register(name, Value::Host(host));

		tracing::debug!(
			interface = name,
			members = iface.members().len(),
			replaced = action == InsertAction::ReplacedExisting,
			"declared interface"
		);
		Ok(iface)
	}

	/// Declares an interface from a dynamic configuration map.
	///
	/// With [`Settings::debug`] set, a config that is not a map is rejected;
	/// otherwise it declares an interface without members.
	pub fn declare_value(&self, name: &str, config: &Value) -> Result<Arc<InterfaceDescriptor>> {
		self.check_name(name)?;
		if self.settings.debug {
			self.assertions
				.check("map", std::slice::from_ref(config))
				.map_err(|error| {
					tracing::debug!(interface = name, %error, "invalid interface configuration");
					InterfaceError::InvalidConfig(name.to_string())
				})?;
		}
		self.declare(name, InterfaceConfig::from_value(config))
	}

	fn check_name(&self, name: &str) -> Result<()> {
		if !self.settings.debug {
			return Ok(());
		}
		self.assertions
			.check("moduleName", &[Value::from(name)])
			.map_err(|error| {
				tracing::debug!(interface = name, %error, "invalid interface name");
				InterfaceError::InvalidName(name.to_string())
			})
	}

	/// Returns the interface registered under `name`.
	///
	/// Missing names and names bound to anything other than an interface both
	/// yield `None`.
	pub fn get_by_name(&self, name: &str) -> Option<Arc<InterfaceDescriptor>> {
		let found = self.symbols.resolve(name).and_then(interface_arc);
		tracing::trace!(interface = name, found = found.is_some(), "interface lookup");
		found
	}

	/// Verifies that `target` implements `iface`. See [`verify::assert_implements`].
	pub fn assert_implements(&self, target: &Value, iface: &Value) -> Result<()> {
		verify::assert_implements(target, iface)
	}

	/// Verifies `target` against the interface registered under `name`.
	pub fn assert_implements_named(&self, target: &Value, name: &str) -> Result<()> {
		match self.get_by_name(name) {
			Some(iface) => iface.assert(target),
			None => Err(InterfaceError::InvalidInterface {
				interface: name.to_string(),
			}),
		}
	}
}

/// Registers `implementsInterface` and `isInterface` into an assertion table.
pub fn register_assertions(table: &mut Assertions) {
	table.add(
		"implementsInterface",
		implements_interface_arg,
		"Does not implement %1!",
	);
	table.add("isInterface", is_interface_arg, "Invalid interface!");
}

fn implements_interface_arg(args: &[Value]) -> bool {
	match args {
		[target, iface, ..] => verify::assert_implements(target, iface).is_ok(),
		_ => false,
	}
}

fn is_interface_arg(args: &[Value]) -> bool {
	args.first().is_some_and(is_interface)
}
