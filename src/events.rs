//! Mirror pass events and the sink trait that consumes them

use std::fmt;
use std::path::PathBuf;
use std::sync::Mutex;

/// One observable pass boundary or replica mutation.
///
/// The `Display` text is the exact line delivered to the journal sinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
	/// A pass began
	PassStarted,

	/// A pass finished with no errors
	PassCompleted,

	/// A pass aborted part-way; carries the failure message
	PassFailed { message: String },

	/// A target directory was created
	DirCreated { path: PathBuf },

	/// Source file content was copied over the target path
	FileCopied { from: PathBuf, to: PathBuf },

	/// A target file absent from the source was removed
	FileDeleted { path: PathBuf },

	/// A target directory absent from the source was removed with all
	/// of its descendants
	DirDeleted { path: PathBuf },
}

impl SyncEvent {
	/// True for events that mutate the replica tree (not pass boundaries).
	pub fn is_mutation(&self) -> bool {
		matches!(
			self,
			SyncEvent::DirCreated { .. }
				| SyncEvent::FileCopied { .. }
				| SyncEvent::FileDeleted { .. }
				| SyncEvent::DirDeleted { .. }
		)
	}
}

impl fmt::Display for SyncEvent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SyncEvent::PassStarted => write!(f, "Synchronization started."),
			SyncEvent::PassCompleted => write!(f, "Synchronization completed."),
			SyncEvent::PassFailed { message } => {
				write!(f, "Error during synchronization: {}", message)
			}
			SyncEvent::DirCreated { path } => {
				write!(f, "Created directory: {}", path.display())
			}
			SyncEvent::FileCopied { from, to } => {
				write!(f, "Copied/Updated file: {} -> {}", from.display(), to.display())
			}
			SyncEvent::FileDeleted { path } => {
				write!(f, "Deleted file: {}", path.display())
			}
			SyncEvent::DirDeleted { path } => {
				write!(f, "Deleted directory: {}", path.display())
			}
		}
	}
}

/// Consumer of the reconciler's event stream.
///
/// Events arrive in emission order, one call per event, from whichever
/// thread is running the pass.
pub trait EventSink: Send + Sync {
	/// Called once per event.
	fn record(&self, event: &SyncEvent);
}

/// Sink that remembers every event it sees, for assertions in tests and
/// for callers that want to inspect a pass after the fact.
#[derive(Debug, Default)]
pub struct CollectingSink {
	events: Mutex<Vec<SyncEvent>>,
}

impl CollectingSink {
	pub fn new() -> Self {
		Self::default()
	}

	/// Snapshot of all events recorded so far, in order.
	pub fn events(&self) -> Vec<SyncEvent> {
		self.events.lock().unwrap().clone()
	}

	/// Number of replica-mutating events recorded so far.
	pub fn mutation_count(&self) -> usize {
		self.events.lock().unwrap().iter().filter(|e| e.is_mutation()).count()
	}

	/// Forget everything recorded so far.
	pub fn clear(&self) {
		self.events.lock().unwrap().clear();
	}
}

impl EventSink for CollectingSink {
	fn record(&self, event: &SyncEvent) {
		self.events.lock().unwrap().push(event.clone());
	}
}


// vim: ts=4
