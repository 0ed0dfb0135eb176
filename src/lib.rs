//! # ReplicR - periodic one-way folder mirroring
//!
//! ReplicR keeps a replica directory identical to a source directory by
//! running a full tree reconciliation on a fixed interval. Each pass copies
//! new and changed files (detected by full-content BLAKE3 digests), creates
//! missing directories, and removes replica entries that no longer exist in
//! the source, journaling every mutation to the console and to an
//! append-only log file.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use replicr::events::CollectingSink;
//! use replicr::reconcile::reconcile;
//!
//! let sink = CollectingSink::new();
//! reconcile(Path::new("./source"), Path::new("./replica"), &sink)?;
//! for event in sink.events() {
//!     println!("{}", event);
//! }
//! ```

pub mod config;
pub mod digest;
pub mod error;
pub mod events;
pub mod journal;
pub mod logging;
pub mod reconcile;
pub mod scheduler;

// Re-export commonly used types and functions
pub use config::Config;
pub use error::SyncError;
pub use events::{CollectingSink, EventSink, SyncEvent};
pub use journal::Journal;
pub use reconcile::reconcile;

// vim: ts=4
