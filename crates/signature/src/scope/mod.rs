//! Minimal host scope that defines callable members and notifies [`Hooks`].
//!
//! A scope owns an instance member table and a singleton member table.
//! Defining a member while a signature is pending retains the original body
//! under `__<name>` and installs a validating proxy under `<name>`.

use std::collections::HashMap;
use std::sync::Arc;

use callguard_value::{Object, Value};
use indexmap::IndexMap;

use crate::contract::Contract;
use crate::hooks::Hooks;
use crate::report::Role;
use crate::{Args, CallError, DeclarationError, SignatureBuilder};

/// Body of an instance member.
pub type InstanceFn = Arc<dyn Fn(&mut Object, &Args) -> Result<Value, CallError> + Send + Sync>;
/// Body of a singleton member.
pub type SingletonFn = Arc<dyn Fn(&Args) -> Result<Value, CallError> + Send + Sync>;

/// Name of the member run by [`Scope::instantiate`].
pub const INITIALIZER: &str = "initialize";

const RETAINED_PREFIX: &str = "__";

/// A named scope whose members can carry contracts.
pub struct Scope {
	name: String,
	instance: IndexMap<String, InstanceFn>,
	singleton: IndexMap<String, SingletonFn>,
	contracts: HashMap<(Role, String), Contract>,
	hooks: Hooks,
}

impl Scope {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			instance: IndexMap::new(),
			singleton: IndexMap::new(),
			contracts: HashMap::new(),
			hooks: Hooks::new(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn hooks(&self) -> &Hooks {
		&self.hooks
	}

	/// Declares a signature for the next member defined in either role.
	///
	/// Declaration errors surface here and leave the hooks untouched.
	pub fn declare(&mut self, builder: SignatureBuilder) -> Result<&mut Self, DeclarationError> {
		let signature = builder.declare()?;
		self.hooks.arm(signature);
		Ok(self)
	}

	/// Declares a signature for the next member defined in `role` only.
	pub fn declare_for(&mut self, role: Role, builder: SignatureBuilder) -> Result<&mut Self, DeclarationError> {
		let signature = builder.declare()?;
		self.hooks.arm_for(role, signature);
		Ok(self)
	}

	pub fn define_method<F>(&mut self, name: impl Into<String>, body: F) -> &mut Self
	where
		F: Fn(&mut Object, &Args) -> Result<Value, CallError> + Send + Sync + 'static,
	{
		let name = name.into();
		let body: InstanceFn = Arc::new(body);
		self.instance.insert(name.clone(), Arc::clone(&body));

		match self.hooks.member_defined(Role::Instance, &self.name, &name) {
			Some(contract) => {
				self.instance.insert(retained(&name), Arc::clone(&body));
				let proxy = contract.clone();
				let proxied: InstanceFn = Arc::new(move |receiver: &mut Object, args: &Args| proxy.invoke(args, |args| body(receiver, args)));
				self.instance.insert(name.clone(), proxied);
				self.contracts.insert((Role::Instance, name), contract);
			}
			None => {
				self.instance.shift_remove(&retained(&name));
				self.contracts.remove(&(Role::Instance, name));
			}
		}
		self
	}

	pub fn define_singleton_method<F>(&mut self, name: impl Into<String>, body: F) -> &mut Self
	where
		F: Fn(&Args) -> Result<Value, CallError> + Send + Sync + 'static,
	{
		let name = name.into();
		let body: SingletonFn = Arc::new(body);
		self.singleton.insert(name.clone(), Arc::clone(&body));

		match self.hooks.member_defined(Role::Singleton, &self.name, &name) {
			Some(contract) => {
				self.singleton.insert(retained(&name), Arc::clone(&body));
				let proxy = contract.clone();
				let proxied: SingletonFn = Arc::new(move |args: &Args| proxy.invoke(args, |args| body(args)));
				self.singleton.insert(name.clone(), proxied);
				self.contracts.insert((Role::Singleton, name), contract);
			}
			None => {
				self.singleton.shift_remove(&retained(&name));
				self.contracts.remove(&(Role::Singleton, name));
			}
		}
		self
	}

	/// Contract currently bound to a member, if any.
	pub fn contract(&self, role: Role, name: &str) -> Option<&Contract> {
		self.contracts.get(&(role, name.to_string()))
	}

	pub fn has_member(&self, role: Role, name: &str) -> bool {
		match role {
			Role::Instance => self.instance.contains_key(name),
			Role::Singleton => self.singleton.contains_key(name),
		}
	}

	/// Creates an instance exposing this scope's public instance members and
	/// runs its initializer, if defined, with `args`.
	pub fn instantiate(&self, args: &Args) -> Result<Value, CallError> {
		let operations = self.instance.keys().filter(|name| !name.starts_with(RETAINED_PREFIX));
		let mut object = Object::new(self.name.as_str()).with_operations(operations.cloned());
		if self.instance.contains_key(INITIALIZER) {
			self.call(&mut object, INITIALIZER, args)?;
		}
		Ok(Value::Object(object))
	}

	pub fn call(&self, receiver: &mut Object, name: &str, args: &Args) -> Result<Value, CallError> {
		let body = self
			.instance
			.get(name)
			.ok_or_else(|| CallError::NoSuchMember(Role::Instance.qualify(&self.name, name)))?;
		body(receiver, args)
	}

	pub fn call_singleton(&self, name: &str, args: &Args) -> Result<Value, CallError> {
		let body = self
			.singleton
			.get(name)
			.ok_or_else(|| CallError::NoSuchMember(Role::Singleton.qualify(&self.name, name)))?;
		body(args)
	}
}

impl std::fmt::Debug for Scope {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Scope")
			.field("name", &self.name)
			.field("instance", &self.instance.keys().collect::<Vec<_>>())
			.field("singleton", &self.singleton.keys().collect::<Vec<_>>())
			.field("hooks", &self.hooks)
			.finish()
	}
}

fn retained(name: &str) -> String {
	format!("{RETAINED_PREFIX}{name}")
}

#[cfg(test)]
mod tests;
