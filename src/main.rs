use clap::{value_parser, Arg, Command};
use std::error::Error;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use replicr::journal::Journal;
use replicr::logging::{info, warn};
use replicr::{logging, scheduler, Config};

fn cli() -> Command {
	Command::new("ReplicR")
		.version("0.1.0")
		.about("One-way directory mirroring on a fixed interval")
		.arg(
			Arg::new("source")
				.required(true)
				.value_name("SOURCE_FOLDER")
				.help("Folder to mirror from"),
		)
		.arg(
			Arg::new("replica")
				.required(true)
				.value_name("REPLICA_FOLDER")
				.help("Folder kept identical to the source"),
		)
		.arg(
			Arg::new("interval")
				.required(true)
				.value_name("INTERVAL_SECONDS")
				.value_parser(value_parser!(u64).range(1..))
				.help("Seconds between passes"),
		)
		.arg(
			Arg::new("log_file")
				.required(true)
				.value_name("LOG_FILE")
				.help("Append-only journal file"),
		)
}

/// Exit cleanly on SIGINT/SIGTERM.
///
/// Nothing needs flushing on the way out: the journal opens its file per
/// append, and a pass interrupted mid-flight is simply redone from scratch
/// on the next start.
fn spawn_signal_listener() {
	tokio::spawn(async {
		use tokio::signal::unix::{signal, SignalKind};

		let handlers = (signal(SignalKind::interrupt()), signal(SignalKind::terminate()));
		let (mut sigint, mut sigterm) = match handlers {
			(Ok(sigint), Ok(sigterm)) => (sigint, sigterm),
			_ => {
				warn!("signal handlers unavailable, relying on external termination");
				return;
			}
		};

		let code = tokio::select! {
			_ = sigint.recv() => 130, // 128 + SIGINT(2)
			_ = sigterm.recv() => 143, // 128 + SIGTERM(15)
		};
		info!("shutdown signal received");
		process::exit(code);
	});
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
	logging::init_tracing();

	let matches = match cli().try_get_matches() {
		Ok(matches) => matches,
		Err(err) => {
			// Usage, help and argument errors all belong on standard output
			print!("{}", err.render());
			process::exit(if err.use_stderr() { 2 } else { 0 });
		}
	};

	let source = matches.get_one::<String>("source").ok_or("source folder argument required")?;
	let replica =
		matches.get_one::<String>("replica").ok_or("replica folder argument required")?;
	let interval_secs =
		*matches.get_one::<u64>("interval").ok_or("interval argument required")?;
	let log_file =
		matches.get_one::<String>("log_file").ok_or("log file argument required")?;

	let config = Config {
		source: PathBuf::from(source),
		replica: PathBuf::from(replica),
		interval: Duration::from_secs(interval_secs),
		log_file: PathBuf::from(log_file),
	};
	config.validate()?;

	spawn_signal_listener();

	println!("Synchronization started. Syncing every {} seconds.", interval_secs);

	let journal = Journal::new(config.log_file.clone());
	scheduler::run(config, journal).await;

	Ok(())
}

// vim: ts=4
