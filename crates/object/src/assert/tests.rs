use pretty_assertions::assert_eq;

use super::*;

#[test]
fn module_names() {
	assert!(is_module_name("Shape"));
	assert!(is_module_name("geo.shapes.Polygon"));
	assert!(is_module_name("$core.Env_2"));

	assert!(!is_module_name(""));
	assert!(!is_module_name("geo..Shape"));
	assert!(!is_module_name(".Shape"));
	assert!(!is_module_name("geo.Shape."));
	assert!(!is_module_name("1geo.Shape"));
	assert!(!is_module_name("geo Shape"));
}

#[test]
fn builtins_pass_and_fail() {
	let table = Assertions::with_builtins();

	assert!(table.check("string", &[Value::from("x")]).is_ok());
	assert!(table.check("map", &[Value::empty_object()]).is_ok());
	assert!(table.check("moduleName", &[Value::from("geo.Shape")]).is_ok());

	assert_eq!(
		table.check("map", &[Value::array([1, 2])]),
		Err(AssertionError::Failed {
			name: "map".into(),
			message: "Not a map: 1,2".into(),
		})
	);
	assert!(table.check("moduleName", &[Value::from(3)]).is_err());
	assert!(table.check("string", &[]).is_err());
}

#[test]
fn unknown_assertion() {
	let table = Assertions::new();
	assert_eq!(
		table.check("string", &[Value::from("x")]),
		Err(AssertionError::Unknown("string".into()))
	);
}

#[test]
fn add_replaces_existing() {
	fn always(_: &[Value]) -> bool {
		true
	}

	let mut table = Assertions::with_builtins();
	assert_eq!(table.add("positive", always, "%1 <= 0"), InsertAction::InsertedNew);
	assert_eq!(table.add("string", always, "never"), InsertAction::ReplacedExisting);
	assert!(table.check("string", &[Value::from(1)]).is_ok());
	assert_eq!(table.message("positive"), Some("%1 <= 0"));
}

#[test]
fn message_templates() {
	let args = [Value::from("geo.Square"), Value::from(2)];
	assert_eq!(format_message("Does not implement %1!", &args), "Does not implement geo.Square!");
	assert_eq!(format_message("%2 of %1", &args), "2 of geo.Square");
	assert_eq!(format_message("%3", &args), "undefined");
	assert_eq!(format_message("100% sure", &args), "100% sure");
	assert_eq!(format_message("%0 and %01", &args), "%0 and geo.Square");
}

#[test]
fn oversized_placeholder_is_kept_verbatim() {
	let args = [Value::from(1)];
	assert_eq!(
		format_message("%99999999999999999999999!", &args),
		"%99999999999999999999999!"
	);
	assert_eq!(
		format_message("%1 then %184467440737095516160", &args),
		"1 then %184467440737095516160"
	);
}

#[test]
fn default_table_is_empty() {
	let table = Assertions::default();
	assert!(!table.contains("string"));
	assert!(Assertions::with_builtins().contains("string"));
}
