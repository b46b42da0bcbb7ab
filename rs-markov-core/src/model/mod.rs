//! Top-level module for the word-level Markov chain.
//!
//! This module provides:
//! - Window keys over consecutive words (`WindowKey`)
//! - The frequency table built from a corpus (`FrequencyTable`)
//! - The bounded random walk over that table (`walker`)
//! - Generation settings (`GeneratorConfig`)
//! - A high-level source holder (`Markov`)

/// Generation settings: window size, line width, tail policy.
pub mod config;

/// Mapping from word windows to observed continuations.
///
/// Built once per generation call from the tokenized corpus.
pub mod frequency_table;

/// High-level interface holding a source text and generating from it.
pub mod markov;

/// Random walk over a frequency table with soft line wrapping.
pub mod walker;

/// Fixed-length sequence of consecutive words used as a table key.
pub mod window;
