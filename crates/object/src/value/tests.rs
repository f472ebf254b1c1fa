use super::*;
use crate::class::Class;

#[test]
fn kinds_follow_typeof() {
	assert_eq!(Value::Undefined.kind(), ValueKind::Undefined);
	assert_eq!(Value::Null.kind(), ValueKind::Object);
	assert_eq!(Value::from(true).kind(), ValueKind::Boolean);
	assert_eq!(Value::from(1.5).kind(), ValueKind::Number);
	assert_eq!(Value::from("x").kind(), ValueKind::String);
	assert_eq!(Value::from(Function::new(2)).kind(), ValueKind::Function);
	assert_eq!(Value::Array(vec![]).kind(), ValueKind::Object);
	assert_eq!(Value::empty_object().kind(), ValueKind::Object);
}

#[test]
fn classes_are_callable_functions() {
	let class = Class::builder("geo.Square")
		.constructor(Function::new(1))
		.build();
	let value = Value::from(class.clone());
	assert_eq!(value.kind(), ValueKind::Function);
	assert!(value.is_callable());
	assert_eq!(value.signature(), Some(Function::new(1)));

	let instance = Value::from(class.instantiate());
	assert_eq!(instance.kind(), ValueKind::Object);
	assert!(!instance.is_callable());
	assert_eq!(instance.signature(), None);
}

#[test]
fn instance_fields_belong_to_the_instance() {
	let class = Class::builder("geo.Square").member("area", Function::new(0)).build();
	let instance = class.instantiate().with_field("side", 4);

	assert_eq!(instance.field("side").map(Value::to_string), Some("4".to_string()));
	assert!(instance.field("area").is_none());
	assert!(instance.class().member("side").is_none());
	assert!(instance.class().member("area").is_some());
}

#[test]
fn truthiness() {
	assert!(!Value::Undefined.is_truthy());
	assert!(!Value::Null.is_truthy());
	assert!(!Value::from(false).is_truthy());
	assert!(!Value::from(0).is_truthy());
	assert!(!Value::from(f64::NAN).is_truthy());
	assert!(!Value::from("").is_truthy());

	assert!(Value::from(-1).is_truthy());
	assert!(Value::from("0").is_truthy());
	assert!(Value::Array(vec![]).is_truthy());
	assert!(Value::empty_object().is_truthy());
}

#[test]
fn arrays_are_distinguished_from_maps() {
	let arr = Value::array([1, 2]);
	assert!(arr.is_array());
	assert!(!arr.is_map());

	let map = Value::object([("a", Value::from(1))]);
	assert!(map.is_map());
	assert!(!map.is_array());
	assert_eq!(map.get("a").map(Value::to_string), Some("1".to_string()));
	assert!(arr.get("a").is_none());
}

#[test]
fn display() {
	assert_eq!(Value::Null.to_string(), "null");
	assert_eq!(Value::Undefined.to_string(), "undefined");
	assert_eq!(Value::from(3).to_string(), "3");
	assert_eq!(Value::from(2.5).to_string(), "2.5");
	assert_eq!(Value::from(f64::NAN).to_string(), "NaN");
	assert_eq!(Value::array([1, 2, 3]).to_string(), "1,2,3");
	assert_eq!(Value::empty_object().to_string(), "[object Object]");

	let class = Class::builder("geo.Circle").build();
	assert_eq!(Value::from(class.clone()).to_string(), "[class geo.Circle]");
	assert_eq!(
		Value::from(class.instantiate()).to_string(),
		"[object geo.Circle]"
	);
}

#[test]
fn rest_parameter_is_tracked_separately() {
	let f = Function::with_rest(1);
	assert_eq!(Value::from(f).signature(), Some(f));
	assert_eq!(f.arity(), 1);
	assert!(f.has_rest());
	assert!(!Function::new(1).has_rest());
}
