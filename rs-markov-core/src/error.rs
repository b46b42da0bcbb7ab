use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a source or generating text.
///
/// Every variant is terminal for the call that produced it: no partial
/// output is returned and no state survives the failure.
#[derive(Debug, Error)]
pub enum MarkovError {
	/// The requested source file does not exist. Raised by the loader only.
	#[error("source file not found: {}", .0.display())]
	SourceNotFound(PathBuf),

	/// `generate` was called with a zero-length source text.
	#[error("cannot generate from an empty source")]
	EmptySource,

	/// The tokenized corpus is too short to seed the first window.
	#[error("corpus has {words} word(s), at least {window_size} required")]
	InsufficientCorpus { words: usize, window_size: usize },

	/// A configuration value is out of range.
	#[error("invalid configuration: {0}")]
	InvalidConfig(String),

	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MarkovError>;
