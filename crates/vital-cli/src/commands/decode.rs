// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use anyhow::bail;
use colored::Colorize;
use vital_protocol::{
	frame, BatteryLevel, VitalSample, CMD_BATTERY_STATUS, CMD_VITAL_SIGNS,
};

#[derive(Debug, Clone, clap::Args)]
pub struct DecodeArgs {
	/// Hex frame to decode; whitespace between byte pairs is fine
	pub frame: String,
}

fn field<T: std::fmt::Display>(value: Option<T>) -> String {
	match value {
		Some(v) => v.to_string(),
		None => "no data".dimmed().to_string(),
	}
}

pub fn run(args: DecodeArgs) -> anyhow::Result<()> {
	let valid = match frame::validate(&args.frame) {
		Ok(valid) => valid,
		Err(err) => bail!("frame rejected: {err}"),
	};

	match valid.command {
		CMD_VITAL_SIGNS => {
			let sample = VitalSample::decode(&valid.payload)?;
			println!("{}", "Vital signs".bold());
			println!("  probe status:    {}", sample.probe_status);
			println!("  pulse rate:      {} bpm", field(sample.pulse_rate));
			println!("  spo2:            {} %", field(sample.spo2));
			println!("  temperature:     {} °C", field(sample.temperature));
			println!("  perfusion index: {} %", field(sample.perfusion_index));
			println!("  respiration:     {} /min", field(sample.respiration_rate));
		}
		CMD_BATTERY_STATUS => {
			let level = BatteryLevel::decode(&valid.payload)?;
			println!("{}", "Battery status".bold());
			println!("  level: {} ({})", level, level.as_step());
		}
		other => bail!("unknown command id {other:#04x}"),
	}
	Ok(())
}
