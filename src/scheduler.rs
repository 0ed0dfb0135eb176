//! Fixed-interval pass scheduling with at most one pass in flight

use tokio::time::{self, MissedTickBehavior};

use crate::config::Config;
use crate::error::SyncError;
use crate::events::{EventSink, SyncEvent};
use crate::journal::Journal;
use crate::logging::{debug, error};
use crate::reconcile;

/// Run one complete mirror pass, reporting the pass boundaries to the sink.
///
/// A failed pass is reported as a single failure event carrying the failing
/// operation and path; the error is swallowed here so the caller keeps
/// scheduling and the next pass retries the whole tree.
pub fn run_pass(config: &Config, sink: &dyn EventSink) {
	sink.record(&SyncEvent::PassStarted);
	match reconcile::reconcile(&config.source, &config.replica, sink) {
		Ok(()) => sink.record(&SyncEvent::PassCompleted),
		Err(err) => report_failure(sink, err),
	}
}

fn report_failure(sink: &dyn EventSink, err: SyncError) {
	debug!("pass aborted: {}", err);
	sink.record(&SyncEvent::PassFailed { message: err.to_string() });
}

/// Drive passes forever on the configured interval.
///
/// The loop awaits each pass to completion before asking the timer for
/// another tick, so two passes can never overlap. Ticks that elapse while a
/// long pass is still running are skipped rather than queued, which keeps a
/// slow pass from being followed by a burst of back-to-back passes.
pub async fn run(config: Config, journal: Journal) {
	let mut ticker = time::interval(config.interval);
	ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
	// The timer's first tick completes immediately; consume it so the first
	// pass starts one full interval after startup.
	ticker.tick().await;

	loop {
		ticker.tick().await;

		// The pass is blocking filesystem work; keep it off the runtime's
		// core threads
		let pass_config = config.clone();
		let pass_journal = journal.clone();
		let pass =
			tokio::task::spawn_blocking(move || run_pass(&pass_config, &pass_journal));
		if let Err(err) = pass.await {
			error!("mirror pass panicked: {}", err);
		}
	}
}


// vim: ts=4
