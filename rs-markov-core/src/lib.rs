//! Word-level Markov chain text generation library.
//!
//! This crate provides a small order-N Markov text generator including:
//! - Corpus normalization (whitespace, markup, escaping, sentence shuffling)
//! - Frequency table construction over sliding word windows
//! - A bounded random walk producing soft-wrapped text
//! - A `Markov` source holder and a file loader
//!
//! The one-shot entry point is [`generate`]; [`Markov`] keeps a source
//! around for repeated calls.

/// Error type shared by the loader and the generator.
pub mod error;

/// Source loading utilities (file reading, directory listing).
pub mod io;

/// Frequency table, random walk and the `Markov` facade.
pub mod model;

/// Corpus normalization and tokenization.
pub mod normalizer;

pub use error::{MarkovError, Result};
pub use model::config::{GeneratorConfig, TailPolicy};
pub use model::markov::{Markov, generate};
