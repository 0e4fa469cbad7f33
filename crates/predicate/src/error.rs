use callguard_value::Value;
use thiserror::Error;

use crate::Predicate;

/// Elementary match failure: a value did not conform to a predicate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{received} does not match {expected}")]
pub struct Mismatch {
	expected: String,
	received: String,
}

impl Mismatch {
	pub fn new(predicate: &Predicate, value: &Value) -> Self {
		Self {
			expected: predicate.describe(),
			received: value.inspect(),
		}
	}

	/// Description of the predicate that failed.
	pub fn expected(&self) -> &str {
		&self.expected
	}

	/// Representation of the offending value.
	pub fn received(&self) -> &str {
		&self.received
	}
}

/// Invalid predicate construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredicateError {
	/// A union needs at least one member to match anything.
	#[error("union requires at least one member")]
	EmptyUnion,
}
