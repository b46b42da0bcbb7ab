use serde::{Deserialize, Serialize};

use crate::error::{MarkovError, Result};

/// Number of words in a window when nothing else is configured.
pub const DEFAULT_WINDOW_SIZE: usize = 2;

/// Character count at which a line of output is flushed.
pub const DEFAULT_LINE_WIDTH: usize = 50;

/// What to do with the last, not yet flushed, line of output.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TailPolicy {
	/// Emit the partial line.
	#[default]
	Flush,
	/// Discard it, keeping only full lines.
	Drop,
}

/// Settings of a generation run.
///
/// # Invariants
/// - `window_size >= 1`
/// - `line_width >= 1`
///
/// Setters enforce the invariants; values coming from deserialization must
/// go through [`GeneratorConfig::validate`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorConfig {
	/// Number of consecutive words conditioning the next one.
	window_size: usize,

	/// Flush threshold of the line buffer, in characters.
	line_width: usize,

	/// Handling of the final partial line.
	tail: TailPolicy,
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self {
			window_size: DEFAULT_WINDOW_SIZE,
			line_width: DEFAULT_LINE_WIDTH,
			tail: TailPolicy::default(),
		}
	}
}

impl GeneratorConfig {
	pub fn window_size(&self) -> usize {
		self.window_size
	}

	pub fn line_width(&self) -> usize {
		self.line_width
	}

	pub fn tail(&self) -> TailPolicy {
		self.tail
	}

	/// Sets the window size.
	///
	/// # Errors
	/// Returns `InvalidConfig` if `window_size` is 0.
	pub fn set_window_size(&mut self, window_size: usize) -> Result<()> {
		if window_size == 0 {
			return Err(MarkovError::InvalidConfig("window_size must be >= 1".to_owned()));
		}
		self.window_size = window_size;
		Ok(())
	}

	/// Sets the line flush threshold.
	///
	/// # Errors
	/// Returns `InvalidConfig` if `line_width` is 0.
	pub fn set_line_width(&mut self, line_width: usize) -> Result<()> {
		if line_width == 0 {
			return Err(MarkovError::InvalidConfig("line_width must be >= 1".to_owned()));
		}
		self.line_width = line_width;
		Ok(())
	}

	pub fn set_tail(&mut self, tail: TailPolicy) {
		self.tail = tail;
	}

	/// Checks the invariants, for configs built by deserialization.
	pub fn validate(&self) -> Result<()> {
		if self.window_size == 0 {
			return Err(MarkovError::InvalidConfig("window_size must be >= 1".to_owned()));
		}
		if self.line_width == 0 {
			return Err(MarkovError::InvalidConfig("line_width must be >= 1".to_owned()));
		}
		Ok(())
	}
}
