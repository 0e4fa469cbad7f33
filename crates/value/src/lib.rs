//! Dynamic value model for guarded calls.
//!
//! Values are what flows through a guarded member: positional and keyword
//! arguments, trailing blocks, and results. The model is deliberately small
//! and closed so predicates can match on it exhaustively.

use std::fmt;

use indexmap::IndexMap;

mod capabilities;
mod object;
mod range;

pub use capabilities::{COMMON, Capabilities, operations_for};
pub use object::{Block, Object};
pub use range::Range;

/// Insertion-ordered record. Inserting an existing key replaces its value in
/// place.
pub type Record = IndexMap<String, Value>;

/// Runtime value passed to and returned from guarded members.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	Nothing,
	Bool(bool),
	Int(i64),
	Float(f64),
	String(String),
	Symbol(String),
	List(Vec<Value>),
	Record(Record),
	Range(Range),
	Object(Object),
	Block(Block),
}

impl Value {
	pub fn nothing() -> Self {
		Self::Nothing
	}

	pub fn bool(val: bool) -> Self {
		Self::Bool(val)
	}

	pub fn int(val: i64) -> Self {
		Self::Int(val)
	}

	pub fn float(val: f64) -> Self {
		Self::Float(val)
	}

	pub fn string(val: impl Into<String>) -> Self {
		Self::String(val.into())
	}

	pub fn symbol(name: impl Into<String>) -> Self {
		Self::Symbol(name.into())
	}

	pub fn list(vals: impl IntoIterator<Item = Value>) -> Self {
		Self::List(vals.into_iter().collect())
	}

	pub fn record(val: Record) -> Self {
		Self::Record(val)
	}

	pub fn range(val: Range) -> Self {
		Self::Range(val)
	}

	pub fn object(val: Object) -> Self {
		Self::Object(val)
	}

	pub fn get_type(&self) -> ValueType {
		match self {
			Self::Nothing => ValueType::Nothing,
			Self::Bool(_) => ValueType::Bool,
			Self::Int(_) => ValueType::Int,
			Self::Float(_) => ValueType::Float,
			Self::String(_) => ValueType::String,
			Self::Symbol(_) => ValueType::Symbol,
			Self::List(_) => ValueType::List,
			Self::Record(_) => ValueType::Record,
			Self::Range(_) => ValueType::Range,
			Self::Object(_) => ValueType::Object,
			Self::Block(_) => ValueType::Block,
		}
	}

	pub fn is_nothing(&self) -> bool {
		matches!(self, Self::Nothing)
	}

	pub fn as_int(&self) -> Result<i64, ValueTypeError> {
		match self {
			Self::Int(val) => Ok(*val),
			other => Err(ValueTypeError::new("int", other.get_type())),
		}
	}

	pub fn as_str(&self) -> Result<&str, ValueTypeError> {
		match self {
			Self::String(val) => Ok(val),
			other => Err(ValueTypeError::new("string", other.get_type())),
		}
	}

	pub fn as_object(&self) -> Result<&Object, ValueTypeError> {
		match self {
			Self::Object(val) => Ok(val),
			other => Err(ValueTypeError::new("object", other.get_type())),
		}
	}

	pub fn as_block(&self) -> Result<&Block, ValueTypeError> {
		match self {
			Self::Block(val) => Ok(val),
			other => Err(ValueTypeError::new("block", other.get_type())),
		}
	}

	/// Finite element iteration, if this value is enumerable.
	///
	/// Lists yield their items, records yield `[key, value]` pairs, and
	/// ranges with two integer endpoints yield each integer. Everything else,
	/// open-ended ranges included, returns `None`.
	pub fn elements(&self) -> Option<Elements<'_>> {
		match self {
			Self::List(vals) => Some(Elements::List(vals.iter())),
			Self::Record(rec) => Some(Elements::Record(rec.iter())),
			Self::Range(range) => range.int_bounds().map(|(lo, hi)| Elements::Ints(lo..=hi)),
			_ => None,
		}
	}

	/// Diagnostic representation used in error messages.
	pub fn inspect(&self) -> String {
		match self {
			Self::Nothing => "nothing".to_string(),
			Self::Bool(val) => val.to_string(),
			Self::Int(val) => val.to_string(),
			Self::Float(val) => format!("{val:?}"),
			Self::String(val) => format!("{val:?}"),
			Self::Symbol(name) => format!(":{name}"),
			Self::List(vals) => {
				let items: Vec<_> = vals.iter().map(Value::inspect).collect();
				format!("[{}]", items.join(", "))
			}
			Self::Record(rec) => {
				let items: Vec<_> = rec.iter().map(|(k, v)| format!("{k}: {}", v.inspect())).collect();
				format!("{{{}}}", items.join(", "))
			}
			Self::Range(range) => range.to_string(),
			Self::Object(obj) => format!("#<{}>", obj.class()),
			Self::Block(_) => "#<block>".to_string(),
		}
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.inspect())
	}
}

/// Iterator returned by [`Value::elements`].
pub enum Elements<'a> {
	List(std::slice::Iter<'a, Value>),
	Record(indexmap::map::Iter<'a, String, Value>),
	Ints(std::ops::RangeInclusive<i64>),
}

impl Iterator for Elements<'_> {
	type Item = Value;

	fn next(&mut self) -> Option<Value> {
		match self {
			Self::List(iter) => iter.next().cloned(),
			Self::Record(iter) => iter.next().map(|(k, v)| Value::list([Value::string(k.as_str()), v.clone()])),
			Self::Ints(iter) => iter.next().map(Value::Int),
		}
	}
}

macro_rules! impl_from {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<$ty> for Value {
				fn from(val: $ty) -> Self {
					Self::$variant(val.into())
				}
			}
		)*
	};
}

impl_from! {
	bool => Bool,
	i64 => Int,
	i32 => Int,
	u32 => Int,
	f64 => Float,
	String => String,
	&str => String,
	Vec<Value> => List,
	Record => Record,
	Range => Range,
	Object => Object,
	Block => Block,
}

impl From<()> for Value {
	fn from(_: ()) -> Self {
		Self::Nothing
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(val: Option<T>) -> Self {
		val.map_or(Self::Nothing, Into::into)
	}
}

/// Coarse value type used by type tests and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueType {
	Nothing,
	Bool,
	Int,
	Float,
	String,
	Symbol,
	List,
	Record,
	Range,
	Object,
	Block,
}

impl ValueType {
	pub const ALL: [ValueType; 11] = [
		Self::Nothing,
		Self::Bool,
		Self::Int,
		Self::Float,
		Self::String,
		Self::Symbol,
		Self::List,
		Self::Record,
		Self::Range,
		Self::Object,
		Self::Block,
	];

	pub fn name(self) -> &'static str {
		match self {
			Self::Nothing => "nothing",
			Self::Bool => "bool",
			Self::Int => "int",
			Self::Float => "float",
			Self::String => "string",
			Self::Symbol => "symbol",
			Self::List => "list",
			Self::Record => "record",
			Self::Range => "range",
			Self::Object => "object",
			Self::Block => "block",
		}
	}
}

impl fmt::Display for ValueType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Error returned by typed accessors like [`Value::as_int`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected}, got {got}")]
pub struct ValueTypeError {
	expected: &'static str,
	got: ValueType,
}

impl ValueTypeError {
	pub fn new(expected: &'static str, got: ValueType) -> Self {
		Self { expected, got }
	}

	pub fn got(&self) -> ValueType {
		self.got
	}
}

#[cfg(test)]
mod tests;
