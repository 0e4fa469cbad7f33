use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

#[rstest]
#[case(Value::nothing(), "nothing")]
#[case(Value::bool(true), "true")]
#[case(Value::int(47), "47")]
#[case(Value::float(1.5), "1.5")]
#[case(Value::string("Joel"), "\"Joel\"")]
#[case(Value::symbol("one"), ":one")]
#[case(Value::list([Value::int(1), Value::string("w")]), "[1, \"w\"]")]
#[case(Value::range(Range::inclusive(1, 5)), "1..=5")]
#[case(Value::range(Range::exclusive(1, 5)), "1..5")]
#[case(Value::range(Range::starting_at(1)), "1..")]
#[case(Value::range(Range::up_to(5)), "..=5")]
#[case(Value::object(Object::new("User")), "#<User>")]
fn inspect(#[case] value: Value, #[case] expected: &str) {
	assert_eq!(value.inspect(), expected);
}

#[test]
fn inspect_record_keeps_insertion_order() {
	let mut rec = Record::new();
	rec.insert("town".to_string(), Value::string("Chorley"));
	rec.insert("age".to_string(), Value::int(47));
	assert_eq!(Value::record(rec).inspect(), "{town: \"Chorley\", age: 47}");
}

#[test]
fn record_insert_replaces_in_place() {
	let mut rec = Record::new();
	rec.insert("a".to_string(), Value::int(1));
	rec.insert("b".to_string(), Value::int(2));
	rec.insert("a".to_string(), Value::int(3));
	assert_eq!(Value::record(rec).inspect(), "{a: 3, b: 2}");
}

#[test]
fn object_fields_are_replaced_in_place() {
	let mut obj = Object::new("User");
	obj.set_field("age", Value::int(47));
	obj.set_field("age", Value::int(48));
	assert_eq!(obj.field("age"), Some(&Value::int(48)));
	assert_eq!(obj.field("town"), None);
}

#[test]
fn typed_accessor_reports_actual_type() {
	let err = Value::string("x").as_int().expect_err("string is not an int");
	assert_eq!(err.to_string(), "expected int, got string");
	assert_eq!(err.got(), ValueType::String);
}

#[test]
fn list_elements() {
	let list = Value::list([Value::int(1), Value::int(2)]);
	let items: Vec<_> = list.elements().expect("list is enumerable").collect();
	assert_eq!(items, vec![Value::int(1), Value::int(2)]);
}

#[test]
fn record_elements_are_pairs() {
	let mut rec = Record::new();
	rec.insert("a".to_string(), Value::int(1));
	let items: Vec<_> = Value::record(rec).elements().expect("record is enumerable").collect();
	assert_eq!(items, vec![Value::list([Value::string("a"), Value::int(1)])]);
}

#[rstest]
#[case(Range::inclusive(1, 3), vec![1, 2, 3])]
#[case(Range::exclusive(1, 3), vec![1, 2])]
#[case(Range::inclusive(3, 1), vec![])]
#[case(Range::exclusive(0, i64::MIN), vec![])]
fn int_range_elements(#[case] range: Range, #[case] expected: Vec<i64>) {
	let items: Vec<_> = Value::range(range).elements().expect("int range is enumerable").collect();
	assert_eq!(items, expected.into_iter().map(Value::int).collect::<Vec<_>>());
}

#[rstest]
#[case(Value::range(Range::starting_at(1)))]
#[case(Value::range(Range::up_to(1)))]
#[case(Value::range(Range::inclusive("a", "c")))]
#[case(Value::int(1))]
#[case(Value::string("abc"))]
#[case(Value::nothing())]
fn not_enumerable(#[case] value: Value) {
	assert!(value.elements().is_none());
}

#[test]
fn capability_tables() {
	assert!(Value::string("foo").responds_to("to_s"));
	assert!(Value::string("foo").responds_to_all(["to_s", "to_i"]));
	assert!(!Value::symbol("foo").responds_to("bar"));
	assert!(Value::list(Vec::new()).responds_to("each"));
	assert!(!Value::int(1).responds_to("each"));
	assert!(Value::nothing().responds_to("nil?"));
}

#[test]
fn objects_expose_registered_operations() {
	let obj = Object::new("Duck").with_operations(["quack"]);
	let value = Value::object(obj);
	assert!(value.responds_to("quack"));
	assert!(value.responds_to("inspect"));
	assert!(!value.responds_to("bark"));
}

#[test]
fn every_type_exposes_common_operations() {
	for ty in ValueType::ALL {
		let tables = operations_for(ty);
		for op in COMMON {
			assert!(tables.iter().any(|t| t.contains(op)), "{ty} missing {op}");
		}
	}
}

#[test]
fn block_equality_is_identity() {
	let a = Block::new(|_| Value::string("Hello"));
	let b = Block::new(|_| Value::string("Hello"));
	assert_eq!(a.clone(), a);
	assert_ne!(a, b);
	assert_eq!(a.call(&[]), Value::string("Hello"));
}

#[test]
fn option_converts_to_nothing() {
	assert_eq!(Value::from(None::<i64>), Value::nothing());
	assert_eq!(Value::from(Some("x")), Value::string("x"));
}
