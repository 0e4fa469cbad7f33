//! Call-boundary contracts for callable members.
//!
//! A [`Signature`] declares positional, keyword, and return predicates. It
//! is attached to a function in one of two ways:
//!
//! - directly, with [`Signature::wrap`], which yields a [`Guarded`] proxy;
//! - through a [`Scope`], where a declaration arms [`Hooks`] and the next
//!   member defined in the scope is wrapped automatically.
//!
//! ```
//! use callguard_signature::{Args, CallError, Signature};
//! use callguard_value::{Value, ValueType};
//!
//! fn greet(args: &Args) -> Result<Value, CallError> {
//! 	let name = args.get(0).map(Value::inspect).unwrap_or_default();
//! 	Ok(Value::string(format!("hello {name}")))
//! }
//!
//! let greet = Signature::builder()
//! 	.arg(ValueType::String)
//! 	.returns_with(|| ValueType::String)
//! 	.declare()
//! 	.unwrap()
//! 	.wrap("greet", greet);
//!
//! assert!(greet.call(&Args::new().arg("Joel")).is_ok());
//! assert!(greet.call(&Args::new().arg(1)).is_err());
//! ```

mod args;
mod contract;
mod error;
mod guarded;
mod hooks;
pub mod report;
mod scope;
mod signature;

pub use args::Args;
pub use contract::Contract;
pub use error::{ArgumentError, CallError, DeclarationError, ReturnError};
pub use guarded::Guarded;
pub use hooks::{BindingState, Hooks};
pub use report::{Position, Role};
pub use scope::{INITIALIZER, InstanceFn, Scope, SingletonFn};
pub use signature::{Mapped, Signature, SignatureBuilder, Spec};
