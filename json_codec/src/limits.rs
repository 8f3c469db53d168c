/// Nesting depth used when no explicit [`Limits`] are given.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Resource bounds shared by the parser and the serializer.
///
/// `max_depth` counts nested arrays and objects. The parser uses it to keep
/// recursion off the end of the stack, the serializer uses it as a guard
/// against cyclic inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
	pub max_depth: usize,
}

impl Limits {
	pub const fn new() -> Self {
		Limits {
			max_depth: DEFAULT_MAX_DEPTH,
		}
	}

	pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = max_depth;
		self
	}
}

impl Default for Limits {
	fn default() -> Self {
		Self::new()
	}
}
