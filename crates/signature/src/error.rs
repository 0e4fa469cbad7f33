use std::error::Error as StdError;

use callguard_predicate::Mismatch;
use thiserror::Error;

use crate::report::Position;

/// Illegal signature declaration, raised before any hook is armed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeclarationError {
	/// Return type given both as a callback and as a mapped spec.
	#[error("cannot mix callback and mapped forms for the return type; use one or the other")]
	MixedReturnForms,
	/// A mapped spec must be the only positional spec.
	#[error("mapped return spec must be the only positional spec, found at {index} of {count}")]
	MappedReturnMisplaced { index: usize, count: usize },
	/// Keywords belong inside the mapped spec.
	#[error("mapped return spec carries its own keywords, found {0} declared outside it")]
	MappedReturnWithKeywords(usize),
}

/// An actual argument failed its declared predicate. The guarded
/// implementation was not invoked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{member}: {position} expected {}, got {}", .source.expected(), .source.received())]
pub struct ArgumentError {
	pub member: String,
	pub position: Position,
	#[source]
	pub source: Mismatch,
}

/// The implementation's result failed the declared return predicate. The
/// implementation has already run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{member}: return value expected {}, got {}", .source.expected(), .source.received())]
pub struct ReturnError {
	pub member: String,
	#[source]
	pub source: Mismatch,
}

/// Failure surfaced by a guarded call.
#[derive(Error, Debug)]
pub enum CallError {
	#[error(transparent)]
	Argument(#[from] ArgumentError),
	#[error(transparent)]
	Return(#[from] ReturnError),
	/// No member with this qualified name.
	#[error("undefined member {0}")]
	NoSuchMember(String),
	/// The implementation itself failed; its error is the source.
	#[error("{0}")]
	Raised(#[source] Box<dyn StdError + Send + Sync>),
}

impl CallError {
	pub fn raised(err: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
		Self::Raised(err.into())
	}

	/// The elementary mismatch behind a contract violation, if any.
	pub fn mismatch(&self) -> Option<&Mismatch> {
		match self {
			Self::Argument(err) => Some(&err.source),
			Self::Return(err) => Some(&err.source),
			Self::NoSuchMember(_) | Self::Raised(_) => None,
		}
	}
}

/// Raised errors compare by identity.
impl PartialEq for CallError {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Argument(a), Self::Argument(b)) => a == b,
			(Self::Return(a), Self::Return(b)) => a == b,
			(Self::NoSuchMember(a), Self::NoSuchMember(b)) => a == b,
			(Self::Raised(a), Self::Raised(b)) => std::ptr::addr_eq(&**a, &**b),
			_ => false,
		}
	}
}
