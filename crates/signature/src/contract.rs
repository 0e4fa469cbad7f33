use std::sync::Arc;

use callguard_value::Value;

use crate::report::{self, Position};
use crate::{Args, ArgumentError, CallError, ReturnError, Signature};

static NOTHING: Value = Value::Nothing;

/// A signature bound to one member, reporting under its qualified name.
#[derive(Debug, Clone, PartialEq)]
pub struct Contract {
	member: String,
	signature: Arc<Signature>,
}

impl Contract {
	pub fn new(member: impl Into<String>, signature: Arc<Signature>) -> Self {
		Self {
			member: member.into(),
			signature,
		}
	}

	/// Qualified member name used in diagnostics.
	pub fn member(&self) -> &str {
		&self.member
	}

	pub fn signature(&self) -> &Signature {
		&self.signature
	}

	/// Checks positionals by index, then declared keywords.
	///
	/// A declared position with no supplied argument is checked as nothing.
	pub fn check_args(&self, args: &Args) -> Result<(), ArgumentError> {
		for (index, pred) in self.signature.positional().iter().enumerate() {
			let value = args.get(index).unwrap_or(&NOTHING);
			pred.check(value)
				.map_err(|mismatch| report::argument(&self.member, Position::Index(index), mismatch))?;
		}

		for (name, pred) in self.signature.keywords() {
			let Some(value) = args.get_keyword(name) else {
				continue;
			};
			pred.check(value)
				.map_err(|mismatch| report::argument(&self.member, Position::Keyword(name.clone()), mismatch))?;
		}

		Ok(())
	}

	pub fn check_return(&self, result: &Value) -> Result<(), ReturnError> {
		match self.signature.returns() {
			Some(pred) => pred.check(result).map_err(|mismatch| report::return_value(&self.member, mismatch)),
			None => Ok(()),
		}
	}

	/// Validates `args`, runs `f`, validates and returns its result.
	pub fn invoke<F>(&self, args: &Args, f: F) -> Result<Value, CallError>
	where
		F: FnOnce(&Args) -> Result<Value, CallError>,
	{
		tracing::trace!(member = %self.member, positional = args.len(), keywords = args.keywords().len(), "guarded call");
		self.check_args(args)?;
		let result = f(args)?;
		self.check_return(&result)?;
		Ok(result)
	}
}
