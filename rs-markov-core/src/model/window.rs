use std::borrow::Borrow;
use std::fmt;

/// An ordered tuple of consecutive words used as a frequency table key.
///
/// Keys compare and hash on the words themselves, so lookups can be done
/// with a plain `&[String]` slice without building a key.
///
/// # Invariants
/// - All keys of one table have the same length (the window size)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WindowKey(Vec<String>);

impl WindowKey {
	/// Creates a key from a slice of words.
	pub fn new(words: &[String]) -> Self {
		Self(words.to_vec())
	}

	pub fn words(&self) -> &[String] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<Vec<String>> for WindowKey {
	fn from(words: Vec<String>) -> Self {
		Self(words)
	}
}

impl Borrow<[String]> for WindowKey {
	fn borrow(&self) -> &[String] {
		&self.0
	}
}

/// Canonical textual form: the words joined by single spaces.
impl fmt::Display for WindowKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0.join(" "))
	}
}
