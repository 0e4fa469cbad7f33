use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use callguard_value::ValueType;
use pretty_assertions::assert_eq;

use super::*;
use crate::{BindingState, Signature, Spec};

fn int_arg() -> SignatureBuilder {
	Signature::builder().arg(ValueType::Int)
}

fn echo(_: &mut Object, args: &Args) -> Result<Value, CallError> {
	Ok(args.get(0).cloned().unwrap_or(Value::Nothing))
}

#[test]
fn next_member_gets_the_contract() {
	let mut scope = Scope::new("Counter");
	scope.declare(int_arg()).expect("valid");
	scope.define_method("checked", echo);
	scope.define_method("unchecked", echo);

	let mut obj = Object::new("Counter");
	assert!(scope.call(&mut obj, "checked", &Args::new().arg("x")).is_err());
	assert_eq!(scope.call(&mut obj, "unchecked", &Args::new().arg("x")), Ok(Value::string("x")));
	assert!(scope.contract(Role::Instance, "checked").is_some());
	assert!(scope.contract(Role::Instance, "unchecked").is_none());
}

#[test]
fn original_is_retained_unchecked() {
	let mut scope = Scope::new("Counter");
	scope.declare(int_arg()).expect("valid");
	scope.define_method("checked", echo);

	assert!(scope.has_member(Role::Instance, "__checked"));
	let mut obj = Object::new("Counter");
	assert_eq!(scope.call(&mut obj, "__checked", &Args::new().arg("x")), Ok(Value::string("x")));
}

#[test]
fn declaration_error_leaves_hooks_unarmed() {
	let mut scope = Scope::new("Counter");
	let err = scope
		.declare(Signature::builder().arg(Spec::returns(ValueType::Int)).returns_with(|| ValueType::Int))
		.expect_err("mixed return forms");
	assert!(err.to_string().contains("mix"));
	assert_eq!(scope.hooks().state(Role::Instance), BindingState::Idle);
	assert_eq!(scope.hooks().state(Role::Singleton), BindingState::Idle);
	scope.define_method("free", echo);
	assert!(scope.contract(Role::Instance, "free").is_none());
}

#[test]
fn redefinition_without_declaration_is_unchecked() {
	let mut scope = Scope::new("Counter");
	scope.declare(int_arg()).expect("valid");
	scope.define_method("value", echo);
	scope.define_method("value", echo);

	let mut obj = Object::new("Counter");
	assert!(scope.call(&mut obj, "value", &Args::new().arg("x")).is_ok());
	assert!(scope.contract(Role::Instance, "value").is_none());
	assert!(!scope.has_member(Role::Instance, "__value"));
}

#[test]
fn singleton_redefinition_drops_retained_original() {
	let mut scope = Scope::new("Counter");
	scope.declare(int_arg()).expect("valid");
	scope.define_singleton_method("value", |args: &Args| Ok(args.get(0).cloned().unwrap_or(Value::Nothing)));
	assert!(scope.has_member(Role::Singleton, "__value"));

	scope.define_singleton_method("value", |_: &Args| Ok(Value::Nothing));
	assert!(!scope.has_member(Role::Singleton, "__value"));
	assert_eq!(scope.call_singleton("value", &Args::new().arg("x")), Ok(Value::Nothing));
}

#[test]
fn redefinition_after_new_declaration_is_checked() {
	let mut scope = Scope::new("Counter");
	scope.define_method("value", echo);
	scope.declare(int_arg()).expect("valid");
	scope.define_method("value", echo);

	let mut obj = Object::new("Counter");
	assert!(scope.call(&mut obj, "value", &Args::new().arg("x")).is_err());
}

#[test]
fn second_declaration_wins() {
	let mut scope = Scope::new("Counter");
	scope.declare(int_arg()).expect("valid");
	scope.declare(Signature::builder().arg(ValueType::String)).expect("valid");
	scope.define_method("value", echo);

	let mut obj = Object::new("Counter");
	assert!(scope.call(&mut obj, "value", &Args::new().arg("x")).is_ok());
	assert!(scope.call(&mut obj, "value", &Args::new().arg(1)).is_err());
}

#[test]
fn roles_can_pend_separately() {
	let mut scope = Scope::new("Counter");
	scope
		.declare_for(Role::Singleton, Signature::builder().arg(ValueType::String))
		.expect("valid")
		.declare_for(Role::Instance, int_arg())
		.expect("valid");
	scope.define_singleton_method("named", |args: &Args| Ok(args.get(0).cloned().unwrap_or(Value::Nothing)));

	assert!(scope.call_singleton("named", &Args::new().arg(1)).is_err());
	assert_eq!(scope.hooks().state(Role::Instance), BindingState::Idle);
}

#[test]
fn argument_failure_skips_implementation() {
	let calls = Arc::new(AtomicUsize::new(0));
	let seen = Arc::clone(&calls);
	let mut scope = Scope::new("Counter");
	scope.declare(int_arg()).expect("valid");
	scope.define_singleton_method("bump", move |_: &Args| {
		seen.fetch_add(1, Ordering::SeqCst);
		Ok(Value::Nothing)
	});

	assert!(scope.call_singleton("bump", &Args::new().arg("x")).is_err());
	assert_eq!(calls.load(Ordering::SeqCst), 0);
	assert!(scope.call_singleton("bump", &Args::new().arg(1)).is_ok());
	assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn unknown_member_is_reported_qualified() {
	let scope = Scope::new("Counter");
	let mut obj = Object::new("Counter");
	assert_eq!(
		scope.call(&mut obj, "nope", &Args::new()),
		Err(CallError::NoSuchMember("Counter#nope".to_string()))
	);
	assert_eq!(
		scope.call_singleton("nope", &Args::new()),
		Err(CallError::NoSuchMember("Counter.nope".to_string()))
	);
}

#[test]
fn instances_expose_public_members() {
	let mut scope = Scope::new("Counter");
	scope.declare(int_arg()).expect("valid");
	scope.define_method("value", echo);

	let instance = scope.instantiate(&Args::new()).expect("no initializer");
	let object = instance.as_object().expect("object");
	assert_eq!(object.class(), "Counter");
	assert!(object.exposes("value"));
	assert!(!object.exposes("__value"));
}
