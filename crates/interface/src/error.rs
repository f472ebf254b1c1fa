//! Error types for interface declaration and verification.

use conform_object::ValueKind;

/// Shape a class member was expected to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
	/// A value of this runtime kind.
	Kind(ValueKind),
	/// A callable.
	Function,
	/// An array.
	Array,
}

impl core::fmt::Display for Expected {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Expected::Kind(kind) => write!(f, "type {kind}"),
			Expected::Function => f.write_str("a function"),
			Expected::Array => f.write_str("an array"),
		}
	}
}

/// Errors raised by interface declaration and conformance checks.
///
/// Verification stops at the first violation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InterfaceError {
	/// Target is falsy, or neither a class nor an instance of one.
	#[error("invalid class or object to verify interface with: {target}")]
	InvalidTarget { target: String },

	/// Value passed as the interface is not a declared interface.
	#[error("invalid interface {interface}")]
	InvalidInterface { interface: String },

	#[error("class {class} does not implement interface {interface}: missing member: {member}")]
	MissingMember {
		class: String,
		interface: String,
		member: String,
	},

	#[error(
		"class {class} does not implement interface {interface}: different member types in: {member}, expecting {expected}"
	)]
	KindMismatch {
		class: String,
		interface: String,
		member: String,
		expected: Expected,
	},

	#[error(
		"class {class} does not implement interface {interface}: different number of arguments in function '{member}', expecting {expected} (got {found})"
	)]
	ArityMismatch {
		class: String,
		interface: String,
		member: String,
		expected: usize,
		found: usize,
	},

	/// Interface name is not a dotted identifier path (debug mode only).
	#[error("invalid interface name: {0:?}")]
	InvalidName(String),

	/// Interface configuration is not a key/value map (debug mode only).
	#[error("invalid interface configuration in {0}")]
	InvalidConfig(String),
}

/// Result type for interface operations.
pub type Result<T> = std::result::Result<T, InterfaceError>;
