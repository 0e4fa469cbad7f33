use std::sync::Arc;

use callguard_predicate::Predicate;
use callguard_value::{Value, ValueType};
use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::DeclarationError;
use crate::contract::Contract;
use crate::guarded::Guarded;

/// Declared contract for one callable member.
///
/// Positional predicates are index-aligned with the member's positional
/// parameters; supplied arguments past the last predicate are unchecked.
/// Keywords are checked only when both declared and supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
	positional: SmallVec<[Predicate; 4]>,
	keywords: IndexMap<String, Predicate>,
	returns: Option<Predicate>,
}

impl Signature {
	pub fn builder() -> SignatureBuilder {
		SignatureBuilder::default()
	}

	pub fn positional(&self) -> &[Predicate] {
		&self.positional
	}

	pub fn keywords(&self) -> &IndexMap<String, Predicate> {
		&self.keywords
	}

	pub fn keyword(&self, name: &str) -> Option<&Predicate> {
		self.keywords.get(name)
	}

	pub fn returns(&self) -> Option<&Predicate> {
		self.returns.as_ref()
	}

	/// Wraps `f` in a validating proxy reporting failures as `member`.
	pub fn wrap<F>(self, member: impl Into<String>, f: F) -> Guarded<F> {
		Guarded::new(Contract::new(member, Arc::new(self)), f)
	}
}

/// One positional slot of a declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Spec {
	Predicate(Predicate),
	/// Parameter specs mapped to a return predicate. Only valid as the sole
	/// positional spec.
	Mapped(Mapped),
}

impl Spec {
	/// Mapped form with no parameters: only the return value is checked.
	pub fn returns(pred: impl Into<Predicate>) -> Self {
		Mapped::new(Vec::<Predicate>::new()).returns(pred)
	}
}

macro_rules! spec_from {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for Spec {
				fn from(val: $ty) -> Self {
					Self::Predicate(val.into())
				}
			}
		)*
	};
}

spec_from!(Predicate, &Predicate, ValueType, Value, bool, i64, i32, f64, &str, String);

/// Parameter list (with optional trailing keywords) awaiting a return
/// predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct Mapped {
	params: Vec<Predicate>,
	keywords: IndexMap<String, Predicate>,
	returns: Option<Predicate>,
}

impl Mapped {
	pub fn new<I, P>(params: I) -> Self
	where
		I: IntoIterator<Item = P>,
		P: Into<Predicate>,
	{
		Self {
			params: params.into_iter().map(Into::into).collect(),
			keywords: IndexMap::new(),
			returns: None,
		}
	}

	pub fn keyword(mut self, name: impl Into<String>, pred: impl Into<Predicate>) -> Self {
		self.keywords.insert(name.into(), pred.into());
		self
	}

	pub fn returns(mut self, pred: impl Into<Predicate>) -> Spec {
		self.returns = Some(pred.into());
		Spec::Mapped(self)
	}
}

/// Collects the pieces of a signature declaration.
///
/// The return type comes from exactly one of [`returns_with`] or a trailing
/// [`Spec::Mapped`]; [`declare`] rejects anything else.
///
/// [`returns_with`]: SignatureBuilder::returns_with
/// [`declare`]: SignatureBuilder::declare
#[derive(Debug, Default)]
pub struct SignatureBuilder {
	args: Vec<Spec>,
	keywords: IndexMap<String, Predicate>,
	returns: Option<Predicate>,
}

impl SignatureBuilder {
	pub fn arg(mut self, spec: impl Into<Spec>) -> Self {
		self.args.push(spec.into());
		self
	}

	pub fn args<I, S>(mut self, specs: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<Spec>,
	{
		self.args.extend(specs.into_iter().map(Into::into));
		self
	}

	pub fn keyword(mut self, name: impl Into<String>, pred: impl Into<Predicate>) -> Self {
		self.keywords.insert(name.into(), pred.into());
		self
	}

	/// Callback form. The callback runs immediately.
	pub fn returns_with<F, P>(mut self, f: F) -> Self
	where
		F: FnOnce() -> P,
		P: Into<Predicate>,
	{
		self.returns = Some(f().into());
		self
	}

	pub fn declare(self) -> Result<Signature, DeclarationError> {
		let Self {
			args,
			mut keywords,
			mut returns,
		} = self;
		let count = args.len();

		if let Some(index) = args.iter().position(|spec| matches!(spec, Spec::Mapped(_))) {
			if returns.is_some() {
				return Err(DeclarationError::MixedReturnForms);
			}
			if count != 1 {
				return Err(DeclarationError::MappedReturnMisplaced { index, count });
			}
			if !keywords.is_empty() {
				return Err(DeclarationError::MappedReturnWithKeywords(keywords.len()));
			}
		}

		let mut positional = SmallVec::new();
		for spec in args {
			match spec {
				Spec::Predicate(pred) => positional.push(pred),
				Spec::Mapped(mapped) => {
					positional.extend(mapped.params);
					keywords = mapped.keywords;
					returns = mapped.returns;
				}
			}
		}

		Ok(Signature {
			positional,
			keywords,
			returns,
		})
	}
}
