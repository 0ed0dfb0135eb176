//! Recursive tree reconciliation: make the replica match the source
//!
//! One pass walks both trees in lock-step, top-down. Per directory level the
//! phases run in a fixed order: ensure the target directory exists, copy new
//! or changed source files, recurse into source subdirectories, then delete
//! target files and target subdirectories that have no source counterpart.
//! Copies always happen before deletions, so a rename-shaped change never
//! transiently drops content that a later comparison could still need, and
//! the target-side cleanup of a level only runs once its children are fully
//! up to date.

use std::ffi::OsString;
use std::fs;
use std::path::Path;

use crate::digest;
use crate::error::SyncError;
use crate::events::{EventSink, SyncEvent};
use crate::logging::debug;

/// The direct children of one directory, split by kind, in discovery order.
///
/// Traversal artifact only; levels are re-read on every pass and never
/// retained. Symlinks and special files are outside the data model and are
/// skipped during classification.
struct Level {
	files: Vec<OsString>,
	dirs: Vec<OsString>,
}

fn read_level(dir: &Path) -> Result<Level, SyncError> {
	let entries = fs::read_dir(dir).map_err(|err| SyncError::ReadDir {
		path: dir.to_path_buf(),
		source: err,
	})?;

	let mut level = Level { files: Vec::new(), dirs: Vec::new() };
	for entry in entries {
		let entry = entry.map_err(|err| SyncError::ReadDir {
			path: dir.to_path_buf(),
			source: err,
		})?;
		let kind = entry.file_type().map_err(|err| SyncError::ReadDir {
			path: dir.to_path_buf(),
			source: err,
		})?;
		if kind.is_dir() {
			level.dirs.push(entry.file_name());
		} else if kind.is_file() {
			level.files.push(entry.file_name());
		}
	}
	Ok(level)
}

/// Whether the source file must be copied over the target path.
///
/// The target is copied when it is missing or its content digest differs.
/// A comparison that cannot complete also forces the copy; overwriting is
/// the recovery path for an unreadable target file.
fn needs_copy(source_file: &Path, target_file: &Path) -> bool {
	if !target_file.is_file() {
		return true;
	}
	match digest::files_are_equal(source_file, target_file) {
		Ok(equal) => !equal,
		Err(err) => {
			debug!(
				"comparison of {} failed ({}), forcing copy",
				target_file.display(),
				err
			);
			true
		}
	}
}

/// Reconcile `target` to be a structural and content copy of `source`,
/// reporting every mutation to `sink`.
///
/// Stateless: each pass re-reads both trees from scratch. The first error
/// aborts the remainder of the pass; mutations already applied stay applied,
/// and the next pass converges from wherever this one stopped.
pub fn reconcile(source: &Path, target: &Path, sink: &dyn EventSink) -> Result<(), SyncError> {
	// Phase 1: the target directory itself
	if !target.is_dir() {
		fs::create_dir_all(target).map_err(|err| SyncError::CreateDir {
			path: target.to_path_buf(),
			source: err,
		})?;
		sink.record(&SyncEvent::DirCreated { path: target.to_path_buf() });
	}

	let source_level = read_level(source)?;

	// Phase 2: files present in source
	for name in &source_level.files {
		let source_file = source.join(name);
		let target_file = target.join(name);
		if needs_copy(&source_file, &target_file) {
			fs::copy(&source_file, &target_file).map_err(|err| SyncError::Copy {
				from: source_file.clone(),
				to: target_file.clone(),
				source: err,
			})?;
			sink.record(&SyncEvent::FileCopied { from: source_file, to: target_file });
		}
	}

	// Phase 3: recurse into source subdirectories
	for name in &source_level.dirs {
		reconcile(&source.join(name), &target.join(name), sink)?;
	}

	// Phases 4 and 5 read the target level only now, after it has received
	// every new and updated entry
	let target_level = read_level(target)?;

	// Phase 4: target files with no source counterpart
	for name in &target_level.files {
		if !source_level.files.contains(name) {
			let path = target.join(name);
			fs::remove_file(&path).map_err(|err| SyncError::DeleteFile {
				path: path.clone(),
				source: err,
			})?;
			sink.record(&SyncEvent::FileDeleted { path });
		}
	}

	// Phase 5: target subdirectories with no source counterpart, removed
	// with all descendants and reported as one event
	for name in &target_level.dirs {
		if !source_level.dirs.contains(name) {
			let path = target.join(name);
			fs::remove_dir_all(&path).map_err(|err| SyncError::DeleteDir {
				path: path.clone(),
				source: err,
			})?;
			sink.record(&SyncEvent::DirDeleted { path });
		}
	}

	Ok(())
}


// vim: ts=4
