use callguard_value::Value;

use crate::contract::Contract;
use crate::{Args, CallError};

/// A function wrapped in a validating proxy.
///
/// Built with [`Signature::wrap`](crate::Signature::wrap) at the definition
/// site.
pub struct Guarded<F> {
	contract: Contract,
	inner: F,
}

impl<F> Guarded<F> {
	pub(crate) fn new(contract: Contract, inner: F) -> Self {
		Self { contract, inner }
	}

	pub fn contract(&self) -> &Contract {
		&self.contract
	}

	/// Unwraps the original, unchecked function.
	pub fn into_inner(self) -> F {
		self.inner
	}
}

impl<F> Guarded<F>
where
	F: Fn(&Args) -> Result<Value, CallError>,
{
	pub fn call(&self, args: &Args) -> Result<Value, CallError> {
		self.contract.invoke(args, &self.inner)
	}
}

impl<F> std::fmt::Debug for Guarded<F> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Guarded").field("contract", &self.contract).finish_non_exhaustive()
	}
}
