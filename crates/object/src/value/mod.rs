use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::class::{Class, Instance};
use crate::host::HostObject;

/// A dynamically typed runtime value.
#[derive(Debug, Clone, Default)]
pub enum Value {
	/// Absent value.
	#[default]
	Undefined,
	/// Explicit null.
	Null,
	/// Boolean.
	Bool(bool),
	/// Double-precision number.
	Number(f64),
	/// String.
	String(String),
	/// Callable, described by its signature.
	Function(Function),
	/// Ordered list.
	Array(Vec<Value>),
	/// Plain key/value map.
	Object(IndexMap<String, Value>),
	/// Class handle (constructor).
	Class(Arc<Class>),
	/// Instance of a class.
	Instance(Instance),
	/// Opaque object owned by an embedding crate.
	Host(Arc<dyn HostObject>),
}

/// Runtime kind of a value, as reported by `typeof`.
///
/// Arrays, maps, null, instances and host objects all report [`ValueKind::Object`];
/// classes report [`ValueKind::Function`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
	Undefined,
	Boolean,
	Number,
	String,
	Function,
	Object,
}

impl ValueKind {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Undefined => "undefined",
			Self::Boolean => "boolean",
			Self::Number => "number",
			Self::String => "string",
			Self::Function => "function",
			Self::Object => "object",
		}
	}
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Function signature sample.
///
/// `arity` counts declared parameters before any rest parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Function {
	arity: usize,
	rest: bool,
}

impl Function {
	/// Function declaring exactly `arity` parameters.
	pub const fn new(arity: usize) -> Self {
		Self { arity, rest: false }
	}

	/// Function declaring `arity` parameters followed by a rest parameter.
	pub const fn with_rest(arity: usize) -> Self {
		Self { arity, rest: true }
	}

	pub const fn arity(&self) -> usize {
		self.arity
	}

	pub const fn has_rest(&self) -> bool {
		self.rest
	}
}

impl Value {
	/// Builds an array value.
	pub fn array<I>(items: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<Value>,
	{
		Value::Array(items.into_iter().map(Into::into).collect())
	}

	/// Builds a plain map value, keeping insertion order.
	pub fn object<I, K>(entries: I) -> Self
	where
		I: IntoIterator<Item = (K, Value)>,
		K: Into<String>,
	{
		Value::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
	}

	/// Empty plain map.
	pub fn empty_object() -> Self {
		Value::Object(IndexMap::new())
	}

	pub fn kind(&self) -> ValueKind {
		match self {
			Value::Undefined => ValueKind::Undefined,
			Value::Bool(_) => ValueKind::Boolean,
			Value::Number(_) => ValueKind::Number,
			Value::String(_) => ValueKind::String,
			Value::Function(_) | Value::Class(_) => ValueKind::Function,
			Value::Null
			| Value::Array(_)
			| Value::Object(_)
			| Value::Instance(_)
			| Value::Host(_) => ValueKind::Object,
		}
	}

	/// Returns false for `undefined`, `null`, `false`, `0`, `NaN` and `""`.
	pub fn is_truthy(&self) -> bool {
		match self {
			Value::Undefined | Value::Null => false,
			Value::Bool(b) => *b,
			Value::Number(n) => *n != 0.0 && !n.is_nan(),
			Value::String(s) => !s.is_empty(),
			_ => true,
		}
	}

	pub fn is_array(&self) -> bool {
		matches!(self, Value::Array(_))
	}

	/// Returns true for functions and classes.
	pub fn is_callable(&self) -> bool {
		matches!(self, Value::Function(_) | Value::Class(_))
	}

	/// Returns true only for plain key/value maps.
	pub fn is_map(&self) -> bool {
		matches!(self, Value::Object(_))
	}

	/// Signature of a callable: the function itself, or a class's constructor.
	pub fn signature(&self) -> Option<Function> {
		match self {
			Value::Function(func) => Some(*func),
			Value::Class(class) => Some(class.constructor()),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
		match self {
			Value::Object(map) => Some(map),
			_ => None,
		}
	}

	pub fn as_host(&self) -> Option<&Arc<dyn HostObject>> {
		match self {
			Value::Host(host) => Some(host),
			_ => None,
		}
	}

	/// Looks up a key on a plain map, returning `None` for every other value.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.as_object()?.get(key)
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Undefined => f.write_str("undefined"),
			Value::Null => f.write_str("null"),
			Value::Bool(b) => write!(f, "{b}"),
			Value::Number(n) => fmt_number(*n, f),
			Value::String(s) => f.write_str(s),
			Value::Function(func) => write!(f, "function/{}", func.arity()),
			Value::Array(items) => {
				for (i, item) in items.iter().enumerate() {
					if i > 0 {
						f.write_str(",")?;
					}
					write!(f, "{item}")?;
				}
				Ok(())
			}
			Value::Object(_) => f.write_str("[object Object]"),
			Value::Class(class) => write!(f, "[class {}]", class.name()),
			Value::Instance(instance) => write!(f, "[object {}]", instance.class().name()),
			Value::Host(host) => fmt::Display::fmt(&**host, f),
		}
	}
}

fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	if n.is_nan() {
		f.write_str("NaN")
	} else if n.is_infinite() {
		f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
	} else if n.fract() == 0.0 && n.abs() < 1e15 {
		write!(f, "{}", n as i64)
	} else {
		write!(f, "{n}")
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Bool(v)
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::Number(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Number(v as f64)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Number(v.into())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::String(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::String(v.to_string())
	}
}

impl From<Function> for Value {
	fn from(v: Function) -> Self {
		Value::Function(v)
	}
}

impl From<Vec<Value>> for Value {
	fn from(v: Vec<Value>) -> Self {
		Value::Array(v)
	}
}

impl From<Arc<Class>> for Value {
	fn from(v: Arc<Class>) -> Self {
		Value::Class(v)
	}
}

impl From<Instance> for Value {
	fn from(v: Instance) -> Self {
		Value::Instance(v)
	}
}

#[cfg(test)]
mod tests;
