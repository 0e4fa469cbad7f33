//! Operation tables backing duck-typed capability checks.

use crate::{Value, ValueType};

/// Operations every value exposes.
pub const COMMON: &[&str] = &["==", "!=", "class", "inspect", "is_a?", "nil?", "respond_to?", "to_s"];

const NOTHING: &[&str] = &["to_a", "to_i", "to_f"];
const BOOL: &[&str] = &["&", "|", "^", "!"];
const NUMERIC: &[&str] = &["+", "-", "*", "/", "%", "<", "<=", ">", ">=", "<=>", "abs", "to_f", "to_i", "zero?"];
const INT: &[&str] = &["succ", "pred", "times", "even?", "odd?"];
const STRING: &[&str] = &[
	"+", "*", "<=>", "[]", "chars", "downcase", "each_char", "empty?", "length", "size", "split", "strip", "to_f", "to_i",
	"to_sym", "upcase",
];
const SYMBOL: &[&str] = &["<=>", "[]", "length", "size", "to_proc", "to_sym"];
const ENUMERABLE: &[&str] = &["count", "each", "first", "include?", "map", "select", "to_a"];
const LIST: &[&str] = &["<<", "[]", "[]=", "empty?", "last", "length", "push", "size"];
const RECORD: &[&str] = &["[]", "[]=", "empty?", "fetch", "key?", "keys", "length", "size", "values"];
const RANGE: &[&str] = &["begin", "cover?", "end", "exclude_end?", "last"];
const BLOCK: &[&str] = &["arity", "call", "to_proc"];

/// Capability surface of a value: which named operations it exposes.
///
/// Checks never look at the nominal type of a value beyond selecting its
/// operation table.
pub trait Capabilities {
	fn responds_to(&self, operation: &str) -> bool;

	fn responds_to_all<'a, I>(&self, operations: I) -> bool
	where
		I: IntoIterator<Item = &'a str>,
	{
		operations.into_iter().all(|op| self.responds_to(op))
	}
}

/// Built-in operation tables for a value type, most specific last.
pub fn operations_for(ty: ValueType) -> &'static [&'static [&'static str]] {
	match ty {
		ValueType::Nothing => &[COMMON, NOTHING],
		ValueType::Bool => &[COMMON, BOOL],
		ValueType::Int => &[COMMON, NUMERIC, INT],
		ValueType::Float => &[COMMON, NUMERIC],
		ValueType::String => &[COMMON, STRING],
		ValueType::Symbol => &[COMMON, SYMBOL],
		ValueType::List => &[COMMON, ENUMERABLE, LIST],
		ValueType::Record => &[COMMON, ENUMERABLE, RECORD],
		ValueType::Range => &[COMMON, ENUMERABLE, RANGE],
		ValueType::Object => &[COMMON],
		ValueType::Block => &[COMMON, BLOCK],
	}
}

impl Capabilities for Value {
	fn responds_to(&self, operation: &str) -> bool {
		if let Value::Object(object) = self {
			if object.exposes(operation) {
				return true;
			}
		}
		operations_for(self.get_type()).iter().any(|table| table.contains(&operation))
	}
}
