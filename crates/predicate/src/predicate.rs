use std::fmt;
use std::sync::Arc;

use callguard_value::{Capabilities, Value, ValueType};

use crate::{Mismatch, Validation};

/// Immutable value matcher with a diagnostic description.
///
/// Cloning is cheap; the same predicate can back any number of signatures.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
	kind: Arc<Kind>,
}

#[derive(Debug, PartialEq)]
pub(crate) enum Kind {
	Any(Vec<Predicate>),
	Union(Vec<Predicate>),
	Optional(Option<Predicate>),
	Boolean,
	ArrayOf { inner: Predicate, validation: Validation },
	EnumerableOf { inner: Option<Predicate>, validation: Validation },
	RangeOf(Predicate),
	RespondsTo(Vec<String>),
	Type(ValueType),
	Literal(Value),
	Instance(String),
}

impl Predicate {
	pub(crate) fn from_kind(kind: Kind) -> Self {
		Self { kind: Arc::new(kind) }
	}

	/// Exact type test.
	pub fn of_type(ty: ValueType) -> Self {
		Self::from_kind(Kind::Type(ty))
	}

	/// Structural equality with `value`.
	pub fn literal(value: impl Into<Value>) -> Self {
		Self::from_kind(Kind::Literal(value.into()))
	}

	/// Objects instantiated from the scope named `class`.
	pub fn instance_of(class: impl Into<String>) -> Self {
		Self::from_kind(Kind::Instance(class.into()))
	}

	pub fn matches(&self, value: &Value) -> bool {
		match &*self.kind {
			Kind::Any(preds) => preds.is_empty() || preds.iter().any(|p| p.matches(value)),
			Kind::Union(preds) => preds.iter().any(|p| p.matches(value)),
			Kind::Optional(inner) => value.is_nothing() || inner.as_ref().is_none_or(|p| p.matches(value)),
			Kind::Boolean => matches!(value, Value::Bool(_)),
			Kind::ArrayOf { inner, validation } => match value {
				Value::List(items) => all_elements(items.iter().cloned(), inner, *validation),
				_ => false,
			},
			Kind::EnumerableOf { inner, validation } => match (value.elements(), inner) {
				(None, _) => false,
				(Some(_), None) => true,
				(Some(items), Some(inner)) => match int_span(value) {
					Some((lo, hi)) if lo > hi => true,
					Some(_) => inner.uniform_over_ints().unwrap_or_else(|| all_elements(items, inner, *validation)),
					None => all_elements(items, inner, *validation),
				},
			},
			Kind::RangeOf(inner) => match value {
				Value::Range(range) => range_matches(range.start(), range.end(), inner),
				_ => false,
			},
			Kind::RespondsTo(ops) => value.responds_to_all(ops.iter().map(String::as_str)),
			Kind::Type(ty) => value.get_type() == *ty,
			Kind::Literal(expected) => value == expected,
			Kind::Instance(class) => matches!(value, Value::Object(obj) if obj.class() == class),
		}
	}

	/// Elementary check used by guarded calls; the error is kept as the
	/// cause of argument and return errors.
	pub fn check(&self, value: &Value) -> Result<(), Mismatch> {
		if self.matches(value) {
			Ok(())
		} else {
			Err(Mismatch::new(self, value))
		}
	}

	/// Human-readable description for diagnostics only.
	pub fn describe(&self) -> String {
		match &*self.kind {
			Kind::Any(preds) if preds.is_empty() => "any".to_string(),
			Kind::Any(preds) => format!("any<{}>", join(preds, ", ")),
			Kind::Union(preds) => join(preds, " | "),
			Kind::Optional(None) => "optional".to_string(),
			Kind::Optional(Some(inner)) => format!("optional<{}>", inner.describe()),
			Kind::Boolean => "boolean".to_string(),
			Kind::ArrayOf { inner, .. } => format!("list<{}>", inner.describe()),
			Kind::EnumerableOf { inner: None, .. } => "enumerable".to_string(),
			Kind::EnumerableOf { inner: Some(inner), .. } => format!("enumerable<{}>", inner.describe()),
			Kind::RangeOf(inner) => format!("range<{}>", inner.describe()),
			Kind::RespondsTo(ops) => format!("responds_to({})", ops.join(", ")),
			Kind::Type(ty) => ty.to_string(),
			Kind::Literal(value) => value.inspect(),
			Kind::Instance(class) => class.clone(),
		}
	}

	/// The verdict this predicate gives every integer, when it does not
	/// depend on which integer.
	fn uniform_over_ints(&self) -> Option<bool> {
		match &*self.kind {
			Kind::Any(preds) if preds.is_empty() => Some(true),
			Kind::Any(preds) | Kind::Union(preds) => {
				let mut verdict = Some(false);
				for pred in preds {
					match pred.uniform_over_ints() {
						Some(true) => return Some(true),
						Some(false) => {}
						None => verdict = None,
					}
				}
				verdict
			}
			Kind::Optional(None) => Some(true),
			Kind::Optional(Some(inner)) => inner.uniform_over_ints(),
			Kind::RespondsTo(ops) => Some(Value::Int(0).responds_to_all(ops.iter().map(String::as_str))),
			Kind::Type(ty) => Some(*ty == ValueType::Int),
			Kind::Literal(Value::Int(_)) => None,
			Kind::Boolean
			| Kind::ArrayOf { .. }
			| Kind::EnumerableOf { .. }
			| Kind::RangeOf(_)
			| Kind::Literal(_)
			| Kind::Instance(_) => Some(false),
		}
	}

	/// Validation mode baked into a collection predicate, if any.
	pub fn validation(&self) -> Option<Validation> {
		match &*self.kind {
			Kind::ArrayOf { validation, .. } | Kind::EnumerableOf { validation, .. } => Some(*validation),
			_ => None,
		}
	}
}

fn all_elements<I>(mut items: I, inner: &Predicate, validation: Validation) -> bool
where
	I: Iterator<Item = Value>,
{
	match validation {
		Validation::Strict => items.all(|item| inner.matches(&item)),
		Validation::Sampling => items.next().is_none_or(|first| inner.matches(&first)),
	}
}

fn int_span(value: &Value) -> Option<(i64, i64)> {
	match value {
		Value::Range(range) => range.int_bounds(),
		_ => None,
	}
}

/// A present start must match and the end must be open or match. With an
/// open start, the end must be present and match. A fully open range never
/// matches.
fn range_matches(start: Option<&Value>, end: Option<&Value>, inner: &Predicate) -> bool {
	match (start, end) {
		(Some(start), end) => inner.matches(start) && end.is_none_or(|end| inner.matches(end)),
		(None, Some(end)) => inner.matches(end),
		(None, None) => false,
	}
}

fn join(preds: &[Predicate], sep: &str) -> String {
	preds.iter().map(Predicate::describe).collect::<Vec<_>>().join(sep)
}

impl fmt::Display for Predicate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.describe())
	}
}

impl From<ValueType> for Predicate {
	fn from(ty: ValueType) -> Self {
		Self::of_type(ty)
	}
}

impl From<Value> for Predicate {
	fn from(value: Value) -> Self {
		Self::literal(value)
	}
}

impl From<&Predicate> for Predicate {
	fn from(pred: &Predicate) -> Self {
		pred.clone()
	}
}

macro_rules! literal_from {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for Predicate {
				fn from(val: $ty) -> Self {
					Self::literal(val)
				}
			}
		)*
	};
}

literal_from!(bool, i64, i32, f64, &str, String);
