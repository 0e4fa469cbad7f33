//! Diagnostic formatting for contract violations.

use std::fmt;

use callguard_predicate::Mismatch;

use crate::{ArgumentError, ReturnError};

/// Whether a member belongs to instances of a scope or to the scope itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
	Instance,
	Singleton,
}

impl Role {
	/// `Scope#member` for instance members, `Scope.member` for singleton
	/// members.
	pub fn qualify(self, scope: &str, member: &str) -> String {
		match self {
			Self::Instance => format!("{scope}#{member}"),
			Self::Singleton => format!("{scope}.{member}"),
		}
	}
}

/// Where an argument sits in a call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Position {
	Index(usize),
	Keyword(String),
}

impl fmt::Display for Position {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Index(i) => write!(f, "argument {i}"),
			Self::Keyword(name) => write!(f, "keyword `{name}`"),
		}
	}
}

pub(crate) fn argument(member: &str, position: Position, mismatch: Mismatch) -> ArgumentError {
	ArgumentError {
		member: member.to_string(),
		position,
		source: mismatch,
	}
}

pub(crate) fn return_value(member: &str, mismatch: Mismatch) -> ReturnError {
	ReturnError {
		member: member.to_string(),
		source: mismatch,
	}
}
