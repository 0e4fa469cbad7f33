use crate::predicate::Kind;
use crate::{Predicate, PredicateError, Validation};

/// Named constructors for composite predicates.
///
/// The factory carries the [`Validation`] mode that collection predicates
/// capture at construction, so strict and sampling predicates can coexist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Predicates {
	validation: Validation,
}

impl Predicates {
	pub const fn new(validation: Validation) -> Self {
		Self { validation }
	}

	pub const fn strict() -> Self {
		Self::new(Validation::Strict)
	}

	pub const fn sampling() -> Self {
		Self::new(Validation::Sampling)
	}

	/// Factory using the process-wide default mode.
	pub fn global() -> Self {
		Self::new(Validation::process_default())
	}

	pub fn validation(&self) -> Validation {
		self.validation
	}

	/// Matches everything, nothing included.
	pub fn any(&self) -> Predicate {
		Predicate::from_kind(Kind::Any(Vec::new()))
	}

	/// Matches when any member matches. With no members, matches everything.
	pub fn any_of<I, P>(&self, preds: I) -> Predicate
	where
		I: IntoIterator<Item = P>,
		P: Into<Predicate>,
	{
		Predicate::from_kind(Kind::Any(preds.into_iter().map(Into::into).collect()))
	}

	/// Matches when at least one member matches. Requires a member.
	pub fn union_of<I, P>(&self, preds: I) -> Result<Predicate, PredicateError>
	where
		I: IntoIterator<Item = P>,
		P: Into<Predicate>,
	{
		let preds: Vec<Predicate> = preds.into_iter().map(Into::into).collect();
		if preds.is_empty() {
			return Err(PredicateError::EmptyUnion);
		}
		Ok(Predicate::from_kind(Kind::Union(preds)))
	}

	/// Matches nothing, or whatever `pred` matches.
	pub fn optional(&self, pred: impl Into<Predicate>) -> Predicate {
		Predicate::from_kind(Kind::Optional(Some(pred.into())))
	}

	/// Optional without an inner predicate: matches everything.
	pub fn optional_any(&self) -> Predicate {
		Predicate::from_kind(Kind::Optional(None))
	}

	pub fn boolean(&self) -> Predicate {
		Predicate::from_kind(Kind::Boolean)
	}

	/// Lists whose elements match `pred`. Empty lists always match.
	pub fn array_of(&self, pred: impl Into<Predicate>) -> Predicate {
		Predicate::from_kind(Kind::ArrayOf {
			inner: pred.into(),
			validation: self.validation,
		})
	}

	/// Any finite enumerable value.
	pub fn enumerable(&self) -> Predicate {
		Predicate::from_kind(Kind::EnumerableOf {
			inner: None,
			validation: self.validation,
		})
	}

	/// Finite enumerables whose elements match `pred`.
	pub fn enumerable_of(&self, pred: impl Into<Predicate>) -> Predicate {
		Predicate::from_kind(Kind::EnumerableOf {
			inner: Some(pred.into()),
			validation: self.validation,
		})
	}

	/// Ranges whose present endpoints match `pred`.
	pub fn range_of(&self, pred: impl Into<Predicate>) -> Predicate {
		Predicate::from_kind(Kind::RangeOf(pred.into()))
	}

	/// Values exposing every named operation, whatever their type.
	pub fn responds_to<I, S>(&self, operations: I) -> Predicate
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Predicate::from_kind(Kind::RespondsTo(operations.into_iter().map(Into::into).collect()))
	}
}
