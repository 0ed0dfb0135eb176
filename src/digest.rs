//! Whole-file content comparison via BLAKE3 digests

use std::fs;
use std::io;
use std::path::Path;

/// Compute the BLAKE3 digest of a file's full byte content.
///
/// The file is read completely into memory first; mirrored folders are
/// assumed to fit comfortably in memory, so no streaming is done.
pub fn content_digest(path: &Path) -> io::Result<blake3::Hash> {
	let bytes = fs::read(path)?;
	Ok(blake3::hash(&bytes))
}

/// Whether two regular files have identical content.
///
/// Compares full-content digests; no size or mtime pre-filtering. A file
/// that cannot be read to completion yields `Err` (comparison inconclusive),
/// never `Ok(false)`.
pub fn files_are_equal(a: &Path, b: &Path) -> io::Result<bool> {
	Ok(content_digest(a)? == content_digest(b)?)
}


// vim: ts=4
