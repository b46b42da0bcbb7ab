use std::collections::HashMap;

use rand::Rng;
use rand::seq::IndexedRandom;

use super::window::WindowKey;

/// Maps each window of consecutive words to the words observed after it.
///
/// Conceptually, each key is a node of a Markov chain and its
/// continuation list holds one entry per observed transition, so a word
/// seen twice after a window is twice as likely to be sampled.
///
/// # Invariants
/// - Every key has exactly `window_size` words
/// - Continuation lists keep duplicates, their order is irrelevant
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrequencyTable {
	window_size: usize,
	entries: HashMap<WindowKey, Vec<String>>,
}

impl FrequencyTable {
	/// Builds the table from an ordered word sequence.
	///
	/// # Behavior
	/// - Registers every window fully inside `words`
	/// - Appends the word following each window occurrence, when one exists
	/// - The last window of the corpus is registered even if nothing follows it
	///
	/// # Notes
	/// - Deterministic for a given word sequence.
	/// - Fewer than `window_size` words (or a zero window) gives an empty table.
	pub fn build(words: &[String], window_size: usize) -> Self {
		let mut table = Self { window_size, entries: HashMap::new() };
		if window_size == 0 || words.len() < window_size {
			return table;
		}

		for (j, window) in words.windows(window_size).enumerate() {
			let continuations = table.entries.entry(WindowKey::new(window)).or_default();
			if let Some(next) = words.get(j + window_size) {
				continuations.push(next.clone());
			}
		}

		table
	}

	pub fn window_size(&self) -> usize {
		self.window_size
	}

	/// Number of distinct windows.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn keys(&self) -> impl Iterator<Item = &WindowKey> {
		self.entries.keys()
	}

	/// Returns the recorded continuations of `window`, or `None` if the
	/// window was never seen.
	pub fn continuations(&self, window: &[String]) -> Option<&[String]> {
		self.entries.get(window).map(Vec::as_slice)
	}

	/// Picks one continuation of `window` uniformly among its occurrences.
	///
	/// Returns `None` if the window is unknown or has no continuation.
	pub fn sample<R: Rng + ?Sized>(&self, window: &[String], rng: &mut R) -> Option<&str> {
		self.continuations(window)?.choose(rng).map(String::as_str)
	}
}
