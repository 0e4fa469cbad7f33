use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::{Record, Value};

/// Instance of a named scope.
///
/// Carries mutable fields and the names of the operations the instance
/// exposes. Operation names feed [`Capabilities`](crate::Capabilities); they
/// are not dispatched through here.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
	class: String,
	fields: Record,
	operations: BTreeSet<String>,
}

impl Object {
	pub fn new(class: impl Into<String>) -> Self {
		Self {
			class: class.into(),
			fields: Record::new(),
			operations: BTreeSet::new(),
		}
	}

	/// Adds exposed operation names.
	pub fn with_operations<I, S>(mut self, names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.operations.extend(names.into_iter().map(Into::into));
		self
	}

	pub fn class(&self) -> &str {
		&self.class
	}

	pub fn field(&self, name: &str) -> Option<&Value> {
		self.fields.get(name)
	}

	pub fn set_field(&mut self, name: impl Into<String>, value: Value) {
		self.fields.insert(name.into(), value);
	}

	pub fn exposes(&self, name: &str) -> bool {
		self.operations.contains(name)
	}
}

/// Opaque callable value, typically a trailing callback handed to a member.
///
/// Equality is identity: two blocks are equal only if they share the same
/// allocation.
#[derive(Clone)]
pub struct Block(Arc<dyn Fn(&[Value]) -> Value + Send + Sync>);

impl Block {
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(&[Value]) -> Value + Send + Sync + 'static,
	{
		Self(Arc::new(f))
	}

	pub fn call(&self, args: &[Value]) -> Value {
		(self.0)(args)
	}
}

impl PartialEq for Block {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}
}

impl fmt::Debug for Block {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Block({:p})", Arc::as_ptr(&self.0))
	}
}
