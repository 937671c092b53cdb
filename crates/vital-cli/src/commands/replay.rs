// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use colored::Colorize;
use vital_session::{render_json, render_text, IngestOutcome, SessionStore};

#[derive(Debug, Clone, clap::Args)]
pub struct ReplayArgs {
	/// Capture file: one hex frame per line, `#` starts a comment
	pub file: PathBuf,

	/// Emit the session snapshot as JSON instead of the text report
	#[arg(long)]
	pub json: bool,
}

pub fn run(args: ReplayArgs) -> anyhow::Result<()> {
	let capture = fs::read_to_string(&args.file)
		.with_context(|| format!("reading capture file {}", args.file.display()))?;

	let store = SessionStore::new();
	let mut accepted = 0u64;
	for line in capture.lines() {
		let line = line.trim();
		if line.is_empty() || line.starts_with('#') {
			continue;
		}
		if store.ingest(line) == IngestOutcome::Accepted {
			accepted += 1;
		}
	}

	let snapshot = store.snapshot();
	if args.json {
		println!("{}", render_json(&snapshot)?);
		return Ok(());
	}

	println!(
		"{} {} accepted, {} dropped ({} malformed, {} checksum, {} other device, {} unknown command)",
		"Replayed:".bold(),
		accepted.to_string().green(),
		snapshot.rejects.total().to_string().yellow(),
		snapshot.rejects.malformed,
		snapshot.rejects.checksum,
		snapshot.rejects.device,
		snapshot.rejects.unknown_command,
	);
	println!();
	println!("{}", render_text(&snapshot));
	Ok(())
}
