//! Dynamic object model used by runtime interface checks.
//!
//! Values, classes and instances, a shared symbol registry for name
//! resolution, and a table of named assertions with message templates.

/// Named predicates with message templates.
pub mod assert;
/// Classes, instances, and member tables.
pub mod class;
/// Opaque host objects embedded in values.
pub mod host;
/// Name to value registry with copy-on-write snapshots.
pub mod registry;
/// Runtime values and their kinds.
pub mod value;

pub use assert::{AssertionError, Assertions, Predicate, format_message, is_module_name};
pub use class::{Class, ClassBuilder, Instance, Members, is_class};
pub use host::HostObject;
pub use registry::{InsertAction, SymbolRegistry};
pub use value::{Function, Value, ValueKind};
