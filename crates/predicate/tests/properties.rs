use callguard_predicate::{Predicate, Predicates};
use callguard_value::{Range, Value, ValueType};
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = Value> {
	prop_oneof![
		Just(Value::nothing()),
		any::<bool>().prop_map(Value::bool),
		any::<i64>().prop_map(Value::int),
		"[a-z]{0,6}".prop_map(Value::string),
		"[a-z]{1,6}".prop_map(Value::symbol),
	]
}

fn value() -> impl Strategy<Value = Value> {
	scalar().prop_recursive(3, 24, 6, |inner| {
		prop_oneof![
			prop::collection::vec(inner.clone(), 0..6).prop_map(Value::list),
			(prop::option::of(inner.clone()), prop::option::of(inner))
				.prop_map(|(start, end)| Value::range(Range::new(start, end, false))),
		]
	})
}

fn value_type() -> impl Strategy<Value = ValueType> {
	prop::sample::select(ValueType::ALL.to_vec())
}

proptest! {
	#[test]
	fn matching_is_deterministic(v in value(), ty in value_type()) {
		let p = Predicates::strict();
		let preds = [
			p.any(),
			p.optional(ty),
			p.array_of(ty),
			p.enumerable_of(ty),
			p.range_of(ty),
			p.responds_to(["to_s", "each"]),
		];
		for pred in &preds {
			prop_assert_eq!(pred.matches(&v), pred.matches(&v));
		}
	}

	#[test]
	fn any_without_members_matches_everything(v in value()) {
		prop_assert!(Predicates::strict().any().matches(&v));
	}

	#[test]
	fn any_is_disjunction(v in value(), a in value_type(), b in value_type()) {
		let x = Predicate::from(a);
		let y = Predicate::from(b);
		let either = Predicates::strict().any_of([x.clone(), y.clone()]);
		prop_assert_eq!(either.matches(&v), x.matches(&v) || y.matches(&v));
	}

	#[test]
	fn optional_is_inner_or_nothing(v in value(), ty in value_type()) {
		let inner = Predicate::from(ty);
		let opt = Predicates::strict().optional(inner.clone());
		prop_assert!(opt.matches(&Value::nothing()));
		if !v.is_nothing() {
			prop_assert_eq!(opt.matches(&v), inner.matches(&v));
		}
	}

	#[test]
	fn strict_array_of_is_conjunction(items in prop::collection::vec(scalar(), 0..8), ty in value_type()) {
		let inner = Predicate::from(ty);
		let all = items.iter().all(|item| inner.matches(item));
		prop_assert_eq!(Predicates::strict().array_of(ty).matches(&Value::list(items)), all);
	}

	#[test]
	fn sampling_array_of_checks_head(items in prop::collection::vec(scalar(), 0..8), ty in value_type()) {
		let inner = Predicate::from(ty);
		let head = items.first().is_none_or(|item| inner.matches(item));
		prop_assert_eq!(Predicates::sampling().array_of(ty).matches(&Value::list(items)), head);
	}

	#[test]
	fn int_ranges_match_int_predicate(start in prop::option::of(any::<i64>()), end in prop::option::of(any::<i64>())) {
		let range = Range::new(start.map(Value::int), end.map(Value::int), false);
		let open = start.is_none() && end.is_none();
		prop_assert_eq!(Predicates::strict().range_of(ValueType::Int).matches(&Value::range(range)), !open);
	}
}
