use std::sync::LazyLock;

use rand::Rng;
use rand::seq::SliceRandom;
use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?-u:\s)(?-u:\s)+").expect("valid regex"));
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\n\r]").expect("valid regex"));
static MARKUP_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// Sentence separator used to split and rejoin the corpus.
pub const SENTENCE_SEPARATOR: char = '.';

/// Turns raw source text into the ordered word sequence fed to the chain.
///
/// # Steps
/// 1. Collapse whitespace runs into a single space
/// 2. Remove line breaks
/// 3. Strip markup tags
/// 4. Escape markup-significant characters
/// 5. Shuffle sentences (split and rejoined on `.`)
/// 6. Tokenize on single spaces, dropping empty tokens
///
/// # Notes
/// - Never fails; empty input yields an empty sequence.
/// - The sentence shuffle uses `rng`, so the result differs between calls
///   unless the generator is seeded.
pub fn normalize<R: Rng + ?Sized>(raw: &str, rng: &mut R) -> Vec<String> {
	let text = collapse_whitespace(raw);
	let text = strip_line_breaks(&text);
	let text = strip_tags(&text);
	let text = escape_markup(&text);
	let text = shuffle_sentences(&text, rng);
	tokenize(&text)
}

/// Replaces every run of two or more ASCII whitespace characters with one
/// space. Unicode spaces such as NBSP are left alone.
pub fn collapse_whitespace(text: &str) -> String {
	WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

/// Removes `\n` and `\r` without inserting a space.
pub fn strip_line_breaks(text: &str) -> String {
	LINE_BREAK.replace_all(text, "").into_owned()
}

/// Removes `<...>` tags, keeping the text between them.
pub fn strip_tags(text: &str) -> String {
	MARKUP_TAG.replace_all(text, "").into_owned()
}

/// Escapes `&`, `<`, `>`, `"` and `'` as HTML entities.
pub fn escape_markup(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#039;"),
			_ => escaped.push(c),
		}
	}
	escaped
}

/// Splits on `.`, shuffles the fragments and joins them back with `.`.
///
/// Fragment contents are untouched, only their order changes.
pub fn shuffle_sentences<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
	let mut sentences: Vec<&str> = text.split(SENTENCE_SEPARATOR).collect();
	sentences.shuffle(rng);
	sentences.join(".")
}

/// Splits on single spaces. Empty tokens (leading, trailing or doubled
/// separators) are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
	text.split(' ')
		.filter(|token| !token.is_empty())
		.map(str::to_owned)
		.collect()
}
