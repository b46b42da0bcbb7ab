use std::path::Path;

use log::{debug, info};
use rand::Rng;

use super::config::GeneratorConfig;
use super::frequency_table::FrequencyTable;
use super::walker;
use crate::error::{MarkovError, Result};
use crate::{io, normalizer};

/// Holds a source text and generates Markov text from it.
///
/// # Responsibilities
/// - Load the source from a file or take it from a string
/// - Keep the generation settings (`GeneratorConfig`)
/// - Run one full normalize / build / walk pass per `generate` call
///
/// Nothing is cached between calls: every call re-normalizes and
/// re-shuffles the source, so two calls with the same input differ.
#[derive(Clone, Debug, Default)]
pub struct Markov {
	text: String,
	config: GeneratorConfig,
}

impl Markov {
	/// Creates an instance with no source and the default configuration.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an instance whose source is read from `path`.
	///
	/// # Errors
	/// - `SourceNotFound` if the file does not exist.
	/// - `Io` if it cannot be read.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
		let mut markov = Self::new();
		markov.set_source_file(path)?;
		Ok(markov)
	}

	/// Creates an instance from an in-memory source.
	pub fn from_string<S: Into<String>>(text: S) -> Self {
		Self { text: text.into(), config: GeneratorConfig::default() }
	}

	/// Replaces the source with the content of `path`.
	///
	/// The current source is kept if loading fails.
	pub fn set_source_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
		let path = path.as_ref();
		self.text = io::read_source(path)?;
		info!("loaded source {} ({} bytes)", path.display(), self.text.len());
		Ok(())
	}

	pub fn set_source_string<S: Into<String>>(&mut self, text: S) {
		self.text = text.into();
	}

	/// Returns the raw source text.
	pub fn source(&self) -> &str {
		&self.text
	}

	pub fn config(&self) -> &GeneratorConfig {
		&self.config
	}

	/// Replaces the configuration after validating it.
	///
	/// # Errors
	/// Returns `InvalidConfig` and keeps the current configuration if
	/// `config` breaks an invariant.
	pub fn set_config(&mut self, config: GeneratorConfig) -> Result<()> {
		config.validate()?;
		self.config = config;
		Ok(())
	}

	/// Generates `num_words` words of text using the thread-local RNG.
	///
	/// See [`Markov::generate_with_rng`].
	pub fn generate(&self, num_words: usize) -> Result<String> {
		self.generate_with_rng(num_words, &mut rand::rng())
	}

	/// Generates `num_words` words of text using `rng` for both the
	/// sentence shuffle and the sampling.
	///
	/// # Errors
	/// - `EmptySource` if the source text is empty.
	/// - `InsufficientCorpus` if the normalized corpus cannot fill one window.
	pub fn generate_with_rng<R: Rng + ?Sized>(&self, num_words: usize, rng: &mut R) -> Result<String> {
		if self.text.is_empty() {
			return Err(MarkovError::EmptySource);
		}

		let words = normalizer::normalize(&self.text, rng);
		let table = FrequencyTable::build(&words, self.config.window_size());
		let output = walker::walk(&words, &table, &self.config, num_words, rng)?;

		debug!(
			"generated {} word(s) from {} corpus words, {} windows ({} hits, {} misses)",
			num_words,
			words.len(),
			table.len(),
			output.stats.hits,
			output.stats.misses
		);
		Ok(output.text)
	}
}

/// Generates `num_words` words of Markov text from `source_text` with the
/// default configuration.
///
/// # Errors
/// - `EmptySource` if `source_text` is empty.
/// - `InsufficientCorpus` if fewer than two words remain after normalization.
pub fn generate(source_text: &str, num_words: usize) -> Result<String> {
	Markov::from_string(source_text).generate(num_words)
}
