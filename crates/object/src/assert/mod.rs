use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashMap as HashMap;

use crate::registry::InsertAction;
use crate::value::Value;

/// Predicate over assertion arguments.
pub type Predicate = fn(&[Value]) -> bool;

/// Assertion failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssertionError {
	#[error("unknown assertion: {0}")]
	Unknown(String),
	#[error("{message}")]
	Failed { name: String, message: String },
}

#[derive(Clone, Copy)]
struct AssertionDef {
	check: Predicate,
	message: &'static str,
}

/// Table of named predicates, each paired with a failure message template.
///
/// Templates reference arguments as `%1`, `%2`, ... (1-based).
#[derive(Clone)]
pub struct Assertions {
	entries: HashMap<Box<str>, AssertionDef>,
}

impl Assertions {
	/// Empty table.
	pub fn new() -> Self {
		Self {
			entries: HashMap::default(),
		}
	}

	/// Table preloaded with `string`, `map` and `moduleName`.
	pub fn with_builtins() -> Self {
		let mut table = Self::new();
		table.add("string", is_string_arg, "Not a string: %1");
		table.add("map", is_map_arg, "Not a map: %1");
		table.add("moduleName", is_module_name_arg, "Invalid module name: %1");
		table
	}

	/// Registers `check` under `name`, replacing any previous predicate.
	pub fn add(&mut self, name: &str, check: Predicate, message: &'static str) -> InsertAction {
		match self
			.entries
			.insert(Box::from(name), AssertionDef { check, message })
		{
			Some(_) => InsertAction::ReplacedExisting,
			None => InsertAction::InsertedNew,
		}
	}

	pub fn contains(&self, name: &str) -> bool {
		self.entries.contains_key(name)
	}

	/// Raw message template for `name`.
	pub fn message(&self, name: &str) -> Option<&'static str> {
		self.entries.get(name).map(|def| def.message)
	}

	/// Runs the predicate registered as `name` against `args`.
	pub fn check(&self, name: &str, args: &[Value]) -> Result<(), AssertionError> {
		let def = self
			.entries
			.get(name)
			.ok_or_else(|| AssertionError::Unknown(name.to_string()))?;
		if (def.check)(args) {
			return Ok(());
		}
		Err(AssertionError::Failed {
			name: name.to_string(),
			message: format_message(def.message, args),
		})
	}
}

impl Default for Assertions {
	fn default() -> Self {
		Self::new()
	}
}

impl core::fmt::Debug for Assertions {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		let mut names: Vec<&str> = self.entries.keys().map(|k| &**k).collect();
		names.sort_unstable();
		f.debug_struct("Assertions").field("names", &names).finish()
	}
}

/// Substitutes `%N` placeholders with the display form of the N-th argument.
///
/// Placeholders past the end of `args` render as `undefined`. `%0` and indices
/// too large for `usize` are kept verbatim.
pub fn format_message(template: &str, args: &[Value]) -> String {
	let mut out = String::with_capacity(template.len());
	let mut chars = template.chars().peekable();
	while let Some(c) = chars.next() {
		if c != '%' {
			out.push(c);
			continue;
		}
		let mut digits = String::new();
		let mut index = Some(0usize);
		while let Some(d) = chars.next_if(char::is_ascii_digit) {
			index = index
				.and_then(|i| i.checked_mul(10))
				.and_then(|i| i.checked_add(d as usize - '0' as usize));
			digits.push(d);
		}
		let index = match index {
			Some(index) if !digits.is_empty() && index > 0 => index,
			_ => {
				out.push('%');
				out.push_str(&digits);
				continue;
			}
		};
		match args.get(index - 1) {
			Some(arg) => {
				let _ = write!(out, "{arg}");
			}
			None => out.push_str("undefined"),
		}
	}
	out
}

static MODULE_NAME: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*(\.[A-Za-z_$][A-Za-z0-9_$]*)*$")
		.expect("module name pattern is valid")
});

/// Whether `name` is a dotted identifier path such as `geo.shapes.Polygon`.
pub fn is_module_name(name: &str) -> bool {
	MODULE_NAME.is_match(name)
}

fn is_string_arg(args: &[Value]) -> bool {
	matches!(args.first(), Some(Value::String(_)))
}

fn is_map_arg(args: &[Value]) -> bool {
	args.first().is_some_and(Value::is_map)
}

fn is_module_name_arg(args: &[Value]) -> bool {
	args.first()
		.and_then(Value::as_str)
		.is_some_and(is_module_name)
}

#[cfg(test)]
mod tests;
