//! Runtime interface conformance for the `conform-object` model.
//!
//! An interface is a named set of required members, each described by a shape
//! sample whose kind (and arity, for functions) must match the class member of
//! the same name. Interfaces are declared into a shared
//! [`SymbolRegistry`](conform_object::SymbolRegistry), resolved by name, and
//! checked against classes or instances with [`assert_implements`].
//!
//! ```
//! use std::sync::Arc;
//!
//! use conform_interface::{InterfaceConfig, Interfaces, Settings};
//! use conform_object::{Class, Function, SymbolRegistry, Value};
//!
//! let interfaces = Interfaces::new(Arc::new(SymbolRegistry::new()), Settings::default());
//! let shape = interfaces
//! 	.declare(
//! 		"geo.Shape",
//! 		InterfaceConfig::new()
//! 			.member("area", Function::new(0))
//! 			.member("corners", Value::Array(vec![])),
//! 	)
//! 	.unwrap();
//!
//! let square = Class::builder("geo.Square")
//! 	.member("area", Function::new(0))
//! 	.member("corners", Value::array([0, 1, 2, 3]))
//! 	.build();
//!
//! assert!(shape.assert(&Value::from(square)).is_ok());
//! ```

mod descriptor;
mod error;
mod interfaces;
mod settings;
mod verify;

pub use descriptor::{InterfaceConfig, InterfaceDescriptor, as_interface, is_interface};
pub use error::{Expected, InterfaceError, Result};
pub use interfaces::{Interfaces, register_assertions};
pub use settings::{Settings, SettingsError};
pub use verify::assert_implements;
