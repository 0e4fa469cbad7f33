use std::sync::OnceLock;

/// Environment variable selecting collection validation strictness.
pub const STRICTNESS_ENV: &str = "CALLGUARD_EXPENSIVE_TYPE_CHECKS";

/// How collection predicates walk their elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Validation {
	/// Every element is checked.
	#[default]
	Strict,
	/// Only the first element is checked and the collection is assumed
	/// homogeneous.
	///
	/// Non-homogeneous collections slip through: `[1, "two"]` passes
	/// `array_of(int)` in this mode.
	Sampling,
}

static PROCESS_DEFAULT: OnceLock<Validation> = OnceLock::new();

impl Validation {
	/// Parses the strictness switch. Falsy tokens select sampling; anything
	/// else, including absence, keeps strict checks.
	pub fn parse(value: Option<&str>) -> Self {
		let Some(value) = value else {
			return Self::Strict;
		};

		match value.trim().to_ascii_lowercase().as_str() {
			"0" | "false" | "no" | "off" => Self::Sampling,
			_ => Self::Strict,
		}
	}

	/// Reads [`STRICTNESS_ENV`] from the environment.
	pub fn from_env() -> Self {
		Self::parse(std::env::var(STRICTNESS_ENV).ok().as_deref())
	}

	/// Process-wide default, resolved from the environment on first use and
	/// never re-read.
	pub fn process_default() -> Self {
		*PROCESS_DEFAULT.get_or_init(|| {
			let validation = Self::from_env();
			tracing::debug!(?validation, env = STRICTNESS_ENV, "resolved collection validation mode");
			validation
		})
	}
}
