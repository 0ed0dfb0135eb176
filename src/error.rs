//! Error types for mirror passes

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// A failed filesystem step within one mirror pass.
///
/// Every variant names the operation and the path(s) involved, so the pass
/// outcome can be journaled with enough context to find the offending entry.
#[derive(Debug)]
pub enum SyncError {
	/// Directory listing failed
	ReadDir { path: PathBuf, source: io::Error },

	/// Target directory creation failed
	CreateDir { path: PathBuf, source: io::Error },

	/// File copy failed
	Copy { from: PathBuf, to: PathBuf, source: io::Error },

	/// Target file deletion failed
	DeleteFile { path: PathBuf, source: io::Error },

	/// Target directory deletion failed
	DeleteDir { path: PathBuf, source: io::Error },

	/// Invalid configuration
	InvalidConfig { message: String },
}

impl fmt::Display for SyncError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SyncError::ReadDir { path, source } => {
				write!(f, "Cannot list directory {}: {}", path.display(), source)
			}
			SyncError::CreateDir { path, source } => {
				write!(f, "Cannot create directory {}: {}", path.display(), source)
			}
			SyncError::Copy { from, to, source } => {
				write!(f, "Cannot copy {} -> {}: {}", from.display(), to.display(), source)
			}
			SyncError::DeleteFile { path, source } => {
				write!(f, "Cannot delete file {}: {}", path.display(), source)
			}
			SyncError::DeleteDir { path, source } => {
				write!(f, "Cannot delete directory {}: {}", path.display(), source)
			}
			SyncError::InvalidConfig { message } => {
				write!(f, "Invalid configuration: {}", message)
			}
		}
	}
}

impl Error for SyncError {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display_carries_both_copy_paths() {
		let err = SyncError::Copy {
			from: PathBuf::from("/src/a.txt"),
			to: PathBuf::from("/dst/a.txt"),
			source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
		};

		let text = err.to_string();
		assert!(text.contains("/src/a.txt"));
		assert!(text.contains("/dst/a.txt"));
		assert!(text.contains("denied"));
	}

	#[test]
	fn test_display_invalid_config() {
		let err = SyncError::InvalidConfig { message: "interval must be positive".to_string() };
		assert!(err.to_string().contains("interval must be positive"));
	}
}

// vim: ts=4
