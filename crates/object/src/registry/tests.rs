use std::sync::Arc;
use std::thread;

use super::*;
use crate::class::Class;

#[test]
fn resolve_missing_is_none() {
	let reg = SymbolRegistry::new();
	assert!(reg.resolve("geo.Shape").is_none());
	assert!(!reg.contains("geo.Shape"));
	assert!(reg.is_empty());
}

#[test]
fn register_then_resolve() {
	let reg = SymbolRegistry::new();
	let class = Class::builder("geo.Square").build();

	assert_eq!(
		reg.register("geo.Square", Value::from(class)),
		InsertAction::InsertedNew
	);
	assert!(matches!(reg.resolve("geo.Square"), Some(Value::Class(c)) if c.name() == "geo.Square"));
	assert_eq!(reg.len(), 1);
}

#[test]
fn redeclaring_replaces_previous_value() {
	let reg = SymbolRegistry::new();
	reg.register("answer", Value::from(41));

	assert_eq!(
		reg.register("answer", Value::from(42)),
		InsertAction::ReplacedExisting
	);
	assert_eq!(reg.resolve("answer").map(|v| v.to_string()), Some("42".into()));
	assert_eq!(reg.len(), 1);
}

#[test]
fn names_are_sorted() {
	let reg = SymbolRegistry::new();
	reg.register("b.Two", Value::Null);
	reg.register("a.One", Value::Null);
	reg.register("c.Three", Value::Null);

	assert_eq!(reg.names(), vec!["a.One", "b.Two", "c.Three"]);
}

#[test]
fn concurrent_registration_keeps_every_name() {
	let reg = Arc::new(SymbolRegistry::new());
	let handles: Vec<_> = (0..8)
		.map(|i| {
			let reg = Arc::clone(&reg);
			thread::spawn(move || {
				for j in 0..16 {
					reg.register(&format!("t{i}.s{j}"), Value::from(j));
				}
			})
		})
		.collect();
	for handle in handles {
		handle.join().unwrap();
	}

	assert_eq!(reg.len(), 8 * 16);
}
