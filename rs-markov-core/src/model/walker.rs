use rand::Rng;

use super::config::{GeneratorConfig, TailPolicy};
use super::frequency_table::FrequencyTable;
use crate::error::{MarkovError, Result};

/// Outcome counters of a walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WalkStats {
	/// Steps that sampled a continuation.
	pub hits: usize,
	/// Steps that restarted from the corpus head.
	pub misses: usize,
}

/// Text produced by [`walk`] along with its counters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkOutput {
	pub text: String,
	pub stats: WalkStats,
}

/// Accumulates words and cuts them into lines once a width is reached.
struct LineBuffer {
	width: usize,
	current: String,
	current_chars: usize,
	lines: Vec<String>,
}

impl LineBuffer {
	fn new(width: usize) -> Self {
		Self { width, current: String::new(), current_chars: 0, lines: Vec::new() }
	}

	fn push_word(&mut self, word: &str) {
		self.current.push(' ');
		self.current.push_str(word);
		self.current_chars += 1 + word.chars().count();
	}

	fn flush_if_full(&mut self) {
		if self.current_chars >= self.width {
			self.lines.push(std::mem::take(&mut self.current));
			self.current_chars = 0;
		}
	}

	fn finish(mut self, tail: TailPolicy) -> String {
		if tail == TailPolicy::Flush && !self.current.is_empty() {
			self.lines.push(self.current);
		}
		self.lines
			.iter()
			.map(|line| line.trim())
			.filter(|line| !line.is_empty())
			.collect::<Vec<_>>()
			.join("\n")
	}
}

/// Walks the frequency table for `num_words` steps.
///
/// # Behavior
/// - The window starts on the first `window_size` words of `words`, which
///   also open the output.
/// - Hit: a continuation is sampled, emitted, and the window slides by one.
/// - Miss (unknown window or no continuation): the window is reset to the
///   corpus head and the head words are emitted again. The step still counts.
/// - Lines are cut once a sampled word brings them to `line_width`
///   characters; restarts never cut a line. The final partial line is kept
///   or dropped according to the tail policy.
///
/// # Returns
/// - `Ok(WalkOutput)` with the trimmed text, lines separated by `\n`.
///   Asking for zero words yields an empty text.
/// - `Err(InsufficientCorpus)` if `words` cannot fill one window.
/// - `Err(InvalidConfig)` if the table was built for another window size.
pub fn walk<R: Rng + ?Sized>(
	words: &[String],
	table: &FrequencyTable,
	config: &GeneratorConfig,
	num_words: usize,
	rng: &mut R,
) -> Result<WalkOutput> {
	let window_size = config.window_size();
	if table.window_size() != window_size {
		return Err(MarkovError::InvalidConfig(format!(
			"table window size {} does not match configured {}",
			table.window_size(),
			window_size
		)));
	}

	let mut stats = WalkStats::default();
	if num_words == 0 {
		return Ok(WalkOutput { text: String::new(), stats });
	}

	if window_size == 0 || words.len() < window_size {
		return Err(MarkovError::InsufficientCorpus { words: words.len(), window_size });
	}

	let head = &words[..window_size];
	let mut last_words: Vec<String> = head.to_vec();
	let mut buffer = LineBuffer::new(config.line_width());
	for word in head {
		buffer.push_word(word);
	}

	for _ in 0..num_words {
		match table.sample(&last_words, rng) {
			Some(next) => {
				stats.hits += 1;
				buffer.push_word(next);
				buffer.flush_if_full();
				last_words.rotate_left(1);
				if let Some(slot) = last_words.last_mut() {
					*slot = next.to_owned();
				}
			}
			None => {
				stats.misses += 1;
				last_words.clear();
				last_words.extend_from_slice(head);
				for word in head {
					buffer.push_word(word);
				}
			}
		}
	}

	Ok(WalkOutput { text: buffer.finish(config.tail()), stats })
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn words(text: &str) -> Vec<String> {
		text.split(' ').map(str::to_owned).collect()
	}

	fn config(window_size: usize, line_width: usize, tail: TailPolicy) -> GeneratorConfig {
		let mut config = GeneratorConfig::default();
		config.set_window_size(window_size).unwrap();
		config.set_line_width(line_width).unwrap();
		config.set_tail(tail);
		config
	}

	#[test]
	fn zero_words_is_empty() {
		let corpus = words("the cat sat on the mat");
		let table = FrequencyTable::build(&corpus, 2);
		let mut rng = StdRng::seed_from_u64(1);
		let output = walk(&corpus, &table, &GeneratorConfig::default(), 0, &mut rng).unwrap();
		assert_eq!(output.text, "");
		assert_eq!(output.stats, WalkStats::default());
	}

	#[test]
	fn corpus_shorter_than_window_fails() {
		let corpus = words("alone");
		let table = FrequencyTable::build(&corpus, 2);
		let mut rng = StdRng::seed_from_u64(1);
		match walk(&corpus, &table, &GeneratorConfig::default(), 3, &mut rng) {
			Err(MarkovError::InsufficientCorpus { words, window_size }) => {
				assert_eq!((words, window_size), (1, 2));
			}
			other => panic!("expected InsufficientCorpus, got {other:?}"),
		}
	}

	#[test]
	fn mismatched_window_size_fails() {
		let corpus = words("a b c d");
		let table = FrequencyTable::build(&corpus, 3);
		let mut rng = StdRng::seed_from_u64(1);
		let result = walk(&corpus, &table, &GeneratorConfig::default(), 3, &mut rng);
		assert!(matches!(result, Err(MarkovError::InvalidConfig(_))));
	}

	#[test]
	fn miss_restarts_from_head_every_step() {
		let corpus = words("a b");
		let table = FrequencyTable::build(&corpus, 2);
		let mut rng = StdRng::seed_from_u64(9);
		let output = walk(&corpus, &table, &GeneratorConfig::default(), 3, &mut rng).unwrap();
		assert_eq!(output.text, "a b a b a b a b");
		assert_eq!(output.stats, WalkStats { hits: 0, misses: 3 });
	}

	#[test]
	fn restarts_never_flush_a_line() {
		let corpus = words("a b");
		let table = FrequencyTable::build(&corpus, 2);
		let mut rng = StdRng::seed_from_u64(9);

		let dropped = walk(&corpus, &table, &config(2, 5, TailPolicy::Drop), 3, &mut rng).unwrap();
		assert_eq!(dropped.text, "");
		assert_eq!(dropped.stats, WalkStats { hits: 0, misses: 3 });

		let kept = walk(&corpus, &table, &config(2, 5, TailPolicy::Flush), 3, &mut rng).unwrap();
		assert_eq!(kept.text, "a b a b a b a b");
	}

	#[test]
	fn wraps_lines_and_flushes_tail() {
		// A chain with one continuation per window walks deterministically
		let corpus = words("w0 w1 w2 w3 w4 w5 w6 w7 w8 w9");
		let table = FrequencyTable::build(&corpus, 2);
		let mut rng = StdRng::seed_from_u64(0);
		let output = walk(&corpus, &table, &config(2, 10, TailPolicy::Flush), 5, &mut rng).unwrap();
		assert_eq!(output.text, "w0 w1 w2 w3\nw4 w5 w6");
		assert_eq!(output.stats, WalkStats { hits: 5, misses: 0 });
	}

	#[test]
	fn drop_policy_discards_partial_line() {
		let corpus = words("w0 w1 w2 w3 w4 w5 w6 w7 w8 w9");
		let table = FrequencyTable::build(&corpus, 2);
		let mut rng = StdRng::seed_from_u64(0);
		let output = walk(&corpus, &table, &config(2, 10, TailPolicy::Drop), 5, &mut rng).unwrap();
		assert_eq!(output.text, "w0 w1 w2 w3");

		let short = walk(&corpus, &table, &config(2, 50, TailPolicy::Drop), 2, &mut rng).unwrap();
		assert_eq!(short.text, "");
	}

	#[test]
	fn reaching_the_end_restarts_at_head() {
		let corpus = words("w0 w1 w2 w3");
		let table = FrequencyTable::build(&corpus, 2);
		let mut rng = StdRng::seed_from_u64(0);
		let output = walk(&corpus, &table, &GeneratorConfig::default(), 4, &mut rng).unwrap();
		// w0 w1 -> w2 -> w3, then (w2 w3) has no continuation
		assert_eq!(output.text, "w0 w1 w2 w3 w0 w1 w2");
		assert_eq!(output.stats, WalkStats { hits: 3, misses: 1 });
	}

	#[test]
	fn larger_window() {
		let corpus = words("a b c d e");
		let table = FrequencyTable::build(&corpus, 3);
		let mut rng = StdRng::seed_from_u64(0);
		let output = walk(&corpus, &table, &config(3, 50, TailPolicy::Flush), 2, &mut rng).unwrap();
		assert_eq!(output.text, "a b c d e");
	}

	#[test]
	fn output_stays_within_word_bound() {
		let corpus = words("one fish two fish red fish blue fish one fish two");
		let table = FrequencyTable::build(&corpus, 2);
		let mut rng = StdRng::seed_from_u64(1234);
		for n in [1usize, 5, 20, 100] {
			let output = walk(&corpus, &table, &GeneratorConfig::default(), n, &mut rng).unwrap();
			let count = output.text.split_whitespace().count();
			assert!(count <= 2 + 2 * n, "{count} words for n = {n}");
			assert_eq!(output.stats.hits + output.stats.misses, n);
			assert!(output.text.split_whitespace().all(|w| corpus.iter().any(|c| c == w)));
		}
	}
}
