use callguard_value::{Block, Value};
use indexmap::IndexMap;
use smallvec::SmallVec;

/// Arguments of one call: positionals, keywords, and an optional trailing
/// block. Forwarded to the implementation unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
	positional: SmallVec<[Value; 4]>,
	keywords: IndexMap<String, Value>,
	block: Option<Block>,
}

impl Args {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn arg(mut self, value: impl Into<Value>) -> Self {
		self.positional.push(value.into());
		self
	}

	pub fn keyword(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.keywords.insert(name.into(), value.into());
		self
	}

	pub fn block(mut self, block: Block) -> Self {
		self.block = Some(block);
		self
	}

	pub fn positional(&self) -> &[Value] {
		&self.positional
	}

	pub fn get(&self, index: usize) -> Option<&Value> {
		self.positional.get(index)
	}

	pub fn keywords(&self) -> &IndexMap<String, Value> {
		&self.keywords
	}

	pub fn get_keyword(&self, name: &str) -> Option<&Value> {
		self.keywords.get(name)
	}

	pub fn trailing_block(&self) -> Option<&Block> {
		self.block.as_ref()
	}

	pub fn len(&self) -> usize {
		self.positional.len()
	}

	pub fn is_empty(&self) -> bool {
		self.positional.is_empty()
	}
}

impl<V: Into<Value>> FromIterator<V> for Args {
	fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
		Self {
			positional: iter.into_iter().map(Into::into).collect(),
			..Self::default()
		}
	}
}
