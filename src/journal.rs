//! Dual-destination mutation journal (console + append-only log file)

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Local;

use crate::events::{EventSink, SyncEvent};
use crate::logging::warn;

/// Formats every event as `<timestamp>: <message>` and delivers the line to
/// stdout and to an append-only log file.
///
/// The file is opened for append on each event, so the journal holds no file
/// handle between passes. The file is never rotated or truncated.
#[derive(Debug, Clone)]
pub struct Journal {
	log_file: PathBuf,
}

impl Journal {
	pub fn new(log_file: PathBuf) -> Self {
		Journal { log_file }
	}

	fn append_line(&self, line: &str) -> io::Result<()> {
		let mut file =
			OpenOptions::new().create(true).append(true).open(&self.log_file)?;
		writeln!(file, "{}", line)
	}
}

impl EventSink for Journal {
	fn record(&self, event: &SyncEvent) {
		let line = format!("{}: {}", Local::now().format("%Y-%m-%d %H:%M:%S"), event);
		println!("{}", line);
		if let Err(err) = self.append_line(&line) {
			// A journal write failure must not abort the pass
			warn!("cannot append to journal {}: {}", self.log_file.display(), err);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;
	use std::path::Path;
	use tempfile::TempDir;

	#[test]
	fn test_lines_appended_in_order() {
		let dir = TempDir::new().unwrap();
		let log_file = dir.path().join("mirror.log");
		let journal = Journal::new(log_file.clone());

		journal.record(&SyncEvent::PassStarted);
		journal.record(&SyncEvent::FileDeleted { path: Path::new("/dst/old.txt").to_path_buf() });
		journal.record(&SyncEvent::PassCompleted);

		let contents = fs::read_to_string(&log_file).unwrap();
		let lines: Vec<&str> = contents.lines().collect();
		assert_eq!(lines.len(), 3);
		assert!(lines[0].ends_with(": Synchronization started."));
		assert!(lines[1].ends_with(": Deleted file: /dst/old.txt"));
		assert!(lines[2].ends_with(": Synchronization completed."));
	}

	#[test]
	fn test_existing_log_is_never_truncated() {
		let dir = TempDir::new().unwrap();
		let log_file = dir.path().join("mirror.log");
		fs::write(&log_file, "previous line\n").unwrap();

		let journal = Journal::new(log_file.clone());
		journal.record(&SyncEvent::PassStarted);

		let contents = fs::read_to_string(&log_file).unwrap();
		assert!(contents.starts_with("previous line\n"));
		assert_eq!(contents.lines().count(), 2);
	}
}

// vim: ts=4
