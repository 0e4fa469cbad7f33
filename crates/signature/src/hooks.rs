//! One-shot binding of a declared signature to the next defined member.
//!
//! A declaration arms a pending signature. The next member-defined
//! notification in an armed role consumes it, and every slot is disarmed so
//! members defined afterwards stay unchecked until a new declaration.

use std::sync::Arc;

use crate::Signature;
use crate::contract::Contract;
use crate::report::Role;

/// Binding lifecycle of a role slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingState {
	/// Nothing declared since the last binding.
	Idle,
	/// A declaration is waiting for the next member definition.
	Pending,
}

/// Pending-signature slots for one scope.
#[derive(Debug, Default)]
pub struct Hooks {
	instance: Option<Arc<Signature>>,
	singleton: Option<Arc<Signature>>,
}

impl Hooks {
	pub fn new() -> Self {
		Self::default()
	}

	/// Arms both roles with `signature`; whichever member is defined first
	/// takes it.
	pub fn arm(&mut self, signature: Signature) {
		let signature = Arc::new(signature);
		self.arm_slot(Role::Instance, Arc::clone(&signature));
		self.arm_slot(Role::Singleton, signature);
	}

	/// Arms a single role, leaving the other slot untouched.
	pub fn arm_for(&mut self, role: Role, signature: Signature) {
		self.arm_slot(role, Arc::new(signature));
	}

	fn arm_slot(&mut self, role: Role, signature: Arc<Signature>) {
		let slot = self.slot_mut(role);
		if slot.is_some() {
			tracing::debug!(?role, "pending signature replaced before a member was defined");
		}
		tracing::debug!(
			?role,
			positional = signature.positional().len(),
			keywords = signature.keywords().len(),
			returns = signature.returns().is_some(),
			"armed signature"
		);
		*slot = Some(signature);
	}

	pub fn state(&self, role: Role) -> BindingState {
		match self.slot(role) {
			Some(_) => BindingState::Pending,
			None => BindingState::Idle,
		}
	}

	pub fn pending(&self, role: Role) -> Option<&Signature> {
		self.slot(role).map(|sig| &**sig)
	}

	/// Member-defined notification.
	///
	/// Consumes the pending signature for `role` and disarms every slot.
	/// Returns `None`, leaving the other slot armed, when `role` has nothing
	/// pending.
	pub fn member_defined(&mut self, role: Role, scope: &str, member: &str) -> Option<Contract> {
		let signature = self.slot_mut(role).take()?;
		self.disarm();
		let contract = Contract::new(role.qualify(scope, member), signature);
		tracing::debug!(member = contract.member(), "bound signature");
		Some(contract)
	}

	pub fn disarm(&mut self) {
		self.instance = None;
		self.singleton = None;
	}

	fn slot(&self, role: Role) -> Option<&Arc<Signature>> {
		match role {
			Role::Instance => self.instance.as_ref(),
			Role::Singleton => self.singleton.as_ref(),
		}
	}

	fn slot_mut(&mut self, role: Role) -> &mut Option<Arc<Signature>> {
		match role {
			Role::Instance => &mut self.instance,
			Role::Singleton => &mut self.singleton,
		}
	}
}
