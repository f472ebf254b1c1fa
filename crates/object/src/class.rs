use std::sync::Arc;

use indexmap::IndexMap;

use crate::value::{Function, Value};

/// Ordered member table (prototype) of a class.
pub type Members = IndexMap<String, Value>;

/// A class: constructor signature plus a member table, optionally extending a parent.
#[derive(Debug)]
pub struct Class {
	name: String,
	constructor: Function,
	parent: Option<Arc<Class>>,
	members: Members,
}

impl Class {
	pub fn builder(name: impl Into<String>) -> ClassBuilder {
		ClassBuilder {
			name: name.into(),
			constructor: Function::default(),
			parent: None,
			members: Members::new(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn constructor(&self) -> Function {
		self.constructor
	}

	/// Looks up a member on this class, then along the parent chain.
	pub fn member(&self, key: &str) -> Option<&Value> {
		let mut class = self;
		loop {
			if let Some(value) = class.members.get(key) {
				return Some(value);
			}
			class = class.parent.as_deref()?;
		}
	}

	/// Creates an instance with no own fields.
	pub fn instantiate(self: &Arc<Self>) -> Instance {
		Instance::new(Arc::clone(self))
	}
}

/// Chaining builder for [`Class`].
#[derive(Debug)]
pub struct ClassBuilder {
	name: String,
	constructor: Function,
	parent: Option<Arc<Class>>,
	members: Members,
}

impl ClassBuilder {
	pub fn constructor(mut self, constructor: Function) -> Self {
		self.constructor = constructor;
		self
	}

	pub fn extends(mut self, parent: Arc<Class>) -> Self {
		self.parent = Some(parent);
		self
	}

	/// Adds or replaces a member. Later calls win.
	pub fn member(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.members.insert(key.into(), value.into());
		self
	}

	pub fn build(self) -> Arc<Class> {
		Arc::new(Class {
			name: self.name,
			constructor: self.constructor,
			parent: self.parent,
			members: self.members,
		})
	}
}

/// Instance of a class with its own fields.
///
/// Own fields are instance state and never stand in for class members.
#[derive(Debug, Clone)]
pub struct Instance {
	class: Arc<Class>,
	fields: IndexMap<String, Value>,
}

impl Instance {
	pub fn new(class: Arc<Class>) -> Self {
		Self {
			class,
			fields: IndexMap::new(),
		}
	}

	pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.fields.insert(key.into(), value.into());
		self
	}

	/// The constructing class.
	pub fn class(&self) -> &Arc<Class> {
		&self.class
	}

	pub fn field(&self, key: &str) -> Option<&Value> {
		self.fields.get(key)
	}
}

/// Returns true if `value` is a class of this object model.
pub fn is_class(value: &Value) -> bool {
	matches!(value, Value::Class(_))
}
