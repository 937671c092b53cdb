// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Diagnostic CLI for pulse oximeter frame captures.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "vital", version, about = "Pulse oximeter frame capture tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
	/// Replay a capture file through a session and print the report
	Replay(commands::replay::ReplayArgs),
	/// Validate and decode a single hex frame
	Decode(commands::decode::DecodeArgs),
}

fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	let cli = Cli::parse();
	match cli.command {
		Commands::Replay(args) => commands::replay::run(args),
		Commands::Decode(args) => commands::decode::run(args),
	}
}
