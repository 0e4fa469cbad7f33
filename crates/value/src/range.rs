use std::fmt;

use crate::Value;

/// Interval with optional endpoints.
///
/// Either side may be open (`None`). Endpoints are arbitrary values; only
/// integer ranges with both endpoints present are enumerable.
#[derive(Debug, Clone, PartialEq)]
pub struct Range {
	start: Option<Box<Value>>,
	end: Option<Box<Value>>,
	exclusive: bool,
}

impl Range {
	pub fn new(start: Option<Value>, end: Option<Value>, exclusive: bool) -> Self {
		Self {
			start: start.map(Box::new),
			end: end.map(Box::new),
			exclusive,
		}
	}

	/// `start..=end`
	pub fn inclusive(start: impl Into<Value>, end: impl Into<Value>) -> Self {
		Self::new(Some(start.into()), Some(end.into()), false)
	}

	/// `start..end`
	pub fn exclusive(start: impl Into<Value>, end: impl Into<Value>) -> Self {
		Self::new(Some(start.into()), Some(end.into()), true)
	}

	/// `start..` with an open end.
	pub fn starting_at(start: impl Into<Value>) -> Self {
		Self::new(Some(start.into()), None, false)
	}

	/// `..=end` with an open start.
	pub fn up_to(end: impl Into<Value>) -> Self {
		Self::new(None, Some(end.into()), false)
	}

	/// `..` with both ends open.
	pub fn unbounded() -> Self {
		Self::new(None, None, false)
	}

	pub fn start(&self) -> Option<&Value> {
		self.start.as_deref()
	}

	pub fn end(&self) -> Option<&Value> {
		self.end.as_deref()
	}

	/// Inclusive integer bounds, if both endpoints are integers.
	///
	/// Empty ranges come back with `lo > hi`.
	pub fn int_bounds(&self) -> Option<(i64, i64)> {
		let lo = self.start()?.as_int().ok()?;
		let hi = self.end()?.as_int().ok()?;
		if self.exclusive {
			// `lo..i64::MIN` is empty.
			match hi.checked_sub(1) {
				Some(hi) => Some((lo, hi)),
				None => Some((1, 0)),
			}
		} else {
			Some((lo, hi))
		}
	}
}

impl fmt::Display for Range {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if let Some(start) = self.start() {
			f.write_str(&start.inspect())?;
		}
		f.write_str(match (self.exclusive, self.end.is_some()) {
			(true, _) => "..",
			(false, true) => "..=",
			(false, false) => "..",
		})?;
		if let Some(end) = self.end() {
			f.write_str(&end.inspect())?;
		}
		Ok(())
	}
}
