//! Runtime configuration for the mirror daemon

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::SyncError;

/// Immutable settings resolved once at startup and handed to the scheduler
/// and reconciler. Nothing reads configuration after construction.
#[derive(Debug, Clone)]
pub struct Config {
	/// Authoritative tree being mirrored from
	pub source: PathBuf,

	/// Replica tree kept identical to the source; the only tree ever mutated
	pub replica: PathBuf,

	/// Wall-clock delay between passes
	pub interval: Duration,

	/// Append-only journal file
	pub log_file: PathBuf,
}

impl Config {
	/// Validate the configuration before the first pass is scheduled.
	///
	/// The source must exist as a directory. The replica may be missing (the
	/// first pass creates it) but must not live inside the source, which
	/// would make every pass mirror the replica into itself.
	pub fn validate(&self) -> Result<(), SyncError> {
		let meta = fs::metadata(&self.source).map_err(|_| SyncError::InvalidConfig {
			message: format!("source folder {} does not exist", self.source.display()),
		})?;
		if !meta.is_dir() {
			return Err(SyncError::InvalidConfig {
				message: format!("source {} is not a directory", self.source.display()),
			});
		}

		if self.replica.starts_with(&self.source) {
			return Err(SyncError::InvalidConfig {
				message: format!(
					"replica folder {} must not be inside the source folder {}",
					self.replica.display(),
					self.source.display()
				),
			});
		}

		if self.interval.is_zero() {
			return Err(SyncError::InvalidConfig {
				message: "interval must be a positive number of seconds".to_string(),
			});
		}

		Ok(())
	}
}


// vim: ts=4
