//! Member-table conformance checks.

use std::sync::Arc;

use conform_object::{Class, Function, Value};

use crate::descriptor::{InterfaceDescriptor, as_interface};
use crate::error::{Expected, InterfaceError, Result};

/// Verifies that `target` implements `iface`.
///
/// `target` is a class or an instance (whose class is checked). Checks run in
/// order and stop at the first violation: target validity, interface validity,
/// then every required member in declaration order.
pub fn assert_implements(target: &Value, iface: &Value) -> Result<()> {
	let class = resolve_class(target)?;
	let iface = as_interface(iface).ok_or_else(|| InterfaceError::InvalidInterface {
		interface: iface.to_string(),
	})?;
	check_class(class, iface)
}

pub(crate) fn verify(target: &Value, iface: &InterfaceDescriptor) -> Result<()> {
	let class = resolve_class(target)?;
	check_class(class, iface)
}

fn resolve_class(target: &Value) -> Result<&Arc<Class>> {
	let invalid = || InterfaceError::InvalidTarget {
		target: target.to_string(),
	};
	if !target.is_truthy() {
		return Err(invalid());
	}
	match target {
		Value::Class(class) => Ok(class),
		Value::Instance(instance) => Ok(instance.class()),
		_ => Err(invalid()),
	}
}

fn check_class(class: &Class, iface: &InterfaceDescriptor) -> Result<()> {
	let result = check_members(class, iface);
	match &result {
		Ok(()) => tracing::trace!(
			class = class.name(),
			interface = iface.name(),
			"interface satisfied"
		),
		Err(error) => tracing::debug!(
			class = class.name(),
			interface = iface.name(),
			%error,
			"interface not satisfied"
		),
	}
	result
}

fn check_members(class: &Class, iface: &InterfaceDescriptor) -> Result<()> {
	for (key, expected) in iface.members() {
		let Some(actual) = class.member(key) else {
			return Err(InterfaceError::MissingMember {
				class: class.name().to_string(),
				interface: iface.name().to_string(),
				member: key.clone(),
			});
		};

		match compare(expected, actual, iface.strict_arity()) {
			Ok(()) => {}
			Err(Mismatch::Shape(shape)) => {
				return Err(InterfaceError::KindMismatch {
					class: class.name().to_string(),
					interface: iface.name().to_string(),
					member: key.clone(),
					expected: shape,
				});
			}
			Err(Mismatch::Arity { expected, found }) => {
				return Err(InterfaceError::ArityMismatch {
					class: class.name().to_string(),
					interface: iface.name().to_string(),
					member: key.clone(),
					expected,
					found,
				});
			}
		}
	}
	Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mismatch {
	Shape(Expected),
	Arity { expected: usize, found: usize },
}

/// Compares one class member against the interface's shape sample.
fn compare(expected: &Value, actual: &Value, strict_arity: bool) -> std::result::Result<(), Mismatch> {
	if expected.kind() != actual.kind() {
		return Err(Mismatch::Shape(Expected::Kind(expected.kind())));
	}

	if expected.is_callable() {
		let (Some(want), Some(have)) = (expected.signature(), actual.signature()) else {
			return Err(Mismatch::Shape(Expected::Function));
		};
		if strict_arity && !arity_matches(want, have) {
			return Err(Mismatch::Arity {
				expected: want.arity(),
				found: have.arity(),
			});
		}
	} else if expected.is_array() && !actual.is_array() {
		return Err(Mismatch::Shape(Expected::Array));
	}

	Ok(())
}

/// Declared counts must be equal, except that a member taking a rest parameter
/// accepts any call shape with at least its fixed parameters.
fn arity_matches(want: Function, have: Function) -> bool {
	if have.has_rest() {
		have.arity() <= want.arity()
	} else {
		have.arity() == want.arity()
	}
}
