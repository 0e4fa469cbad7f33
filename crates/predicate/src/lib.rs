//! Composable runtime type predicates.
//!
//! A [`Predicate`] answers "does this value match" and describes itself for
//! diagnostics. Raw types and literals convert into predicates, so they can
//! be mixed freely with the composite forms built by [`Predicates`]:
//!
//! ```
//! use callguard_predicate::{Predicates, Validation};
//! use callguard_value::{Value, ValueType};
//!
//! let p = Predicates::new(Validation::Strict);
//! let names = p.array_of(ValueType::String);
//! assert!(names.matches(&Value::list([Value::string("Joel")])));
//! assert!(!names.matches(&Value::int(1)));
//! ```
//!
//! The free functions in this crate build through the process-wide factory,
//! whose validation mode comes from [`STRICTNESS_ENV`] on first use.

mod config;
mod error;
mod factory;
mod predicate;

pub use config::{STRICTNESS_ENV, Validation};
pub use error::{Mismatch, PredicateError};
pub use factory::Predicates;
pub use predicate::Predicate;

pub fn any() -> Predicate {
	Predicates::global().any()
}

pub fn any_of<I, P>(preds: I) -> Predicate
where
	I: IntoIterator<Item = P>,
	P: Into<Predicate>,
{
	Predicates::global().any_of(preds)
}

pub fn union_of<I, P>(preds: I) -> Result<Predicate, PredicateError>
where
	I: IntoIterator<Item = P>,
	P: Into<Predicate>,
{
	Predicates::global().union_of(preds)
}

pub fn optional(pred: impl Into<Predicate>) -> Predicate {
	Predicates::global().optional(pred)
}

pub fn optional_any() -> Predicate {
	Predicates::global().optional_any()
}

pub fn boolean() -> Predicate {
	Predicates::global().boolean()
}

pub fn array_of(pred: impl Into<Predicate>) -> Predicate {
	Predicates::global().array_of(pred)
}

pub fn enumerable() -> Predicate {
	Predicates::global().enumerable()
}

pub fn enumerable_of(pred: impl Into<Predicate>) -> Predicate {
	Predicates::global().enumerable_of(pred)
}

pub fn range_of(pred: impl Into<Predicate>) -> Predicate {
	Predicates::global().range_of(pred)
}

pub fn responds_to<I, S>(operations: I) -> Predicate
where
	I: IntoIterator<Item = S>,
	S: Into<String>,
{
	Predicates::global().responds_to(operations)
}
