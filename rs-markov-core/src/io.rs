use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{MarkovError, Result};

/// Reads a whole text file into a `String`.
///
/// - Fails with `SourceNotFound` if the path does not exist
/// - Invalid UTF-8 sequences are replaced, the source only has to be text
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<String> {
	let path = path.as_ref();
	if !path.exists() {
		return Err(MarkovError::SourceNotFound(path.to_path_buf()));
	}

	let bytes = fs::read(path)?;
	let text = String::from_utf8_lossy(&bytes).into_owned();
	debug!("read {} bytes from {}", bytes.len(), path.display());
	Ok(text)
}

/// Lists all files with a given extension in a directory.
///
/// Returns file names only (no paths), sorted.
pub fn list_sources<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();

		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			if let Some(name) = path.file_name() {
				files.push(name.to_string_lossy().to_string());
			}
		}
	}

	files.sort();
	Ok(files)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_file_is_source_not_found() {
		let dir = tempfile::tempdir().unwrap();
		let missing = dir.path().join("nope.txt");
		match read_source(&missing) {
			Err(MarkovError::SourceNotFound(p)) => assert_eq!(p, missing),
			other => panic!("expected SourceNotFound, got {other:?}"),
		}
	}

	#[test]
	fn reads_whole_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("story.txt");
		fs::write(&path, "line one\nline two\n").unwrap();
		assert_eq!(read_source(&path).unwrap(), "line one\nline two\n");
	}

	#[test]
	fn invalid_utf8_is_replaced() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("bytes.txt");
		fs::write(&path, [b'a', 0xff, b'b']).unwrap();
		assert_eq!(read_source(&path).unwrap(), "a\u{fffd}b");
	}

	#[test]
	fn lists_only_matching_extension() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("b.txt"), "b").unwrap();
		fs::write(dir.path().join("a.txt"), "a").unwrap();
		fs::write(dir.path().join("c.bin"), "c").unwrap();
		fs::create_dir(dir.path().join("d.txt")).unwrap();

		assert_eq!(list_sources(dir.path(), "txt").unwrap(), vec!["a.txt", "b.txt"]);
	}
}
