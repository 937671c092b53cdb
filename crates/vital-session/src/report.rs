// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Detection-report rendering over a session snapshot.
//!
//! Downstream consumers (display, upload, archival) expect this exact data
//! shape: one-decimal temperature, two-decimal perfusion index, and absent
//! fields rendered as an explicit "no data" marker rather than a numeric
//! placeholder.

use std::fmt;

use crate::snapshot::SessionSnapshot;

const NO_DATA: &str = "no data";
const RULE: &str = "══════════════════════════";

/// `Display` adapter rendering a snapshot as the human-readable report.
pub struct TextReport<'a>(pub &'a SessionSnapshot);

impl fmt::Display for TextReport<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let snap = self.0;
		let stats = &snap.stats;

		writeln!(f, "Fingertip pulse oximetry report")?;
		writeln!(f, "{RULE}")?;
		match snap.started_at {
			Some(t) => writeln!(f, "Session start:   {}", t.to_rfc3339())?,
			None => writeln!(f, "Session start:   {NO_DATA}")?,
		}
		writeln!(f, "Frames accepted: {}", snap.frames_received)?;
		writeln!(f, "Valid samples:   {}", stats.valid_samples)?;
		match snap.vitals.map(|v| v.probe_status) {
			Some(status) => writeln!(f, "Probe status:    {status}")?,
			None => writeln!(f, "Probe status:    {NO_DATA}")?,
		}
		writeln!(f)?;

		match snap.vitals.and_then(|v| v.spo2) {
			Some(spo2) => writeln!(f, "SpO2:            {spo2} %")?,
			None => writeln!(f, "SpO2:            {NO_DATA}")?,
		}
		if let (Some(min), Some(max), Some(avg)) =
			(stats.spo2_min, stats.spo2_max, stats.avg_spo2())
		{
			writeln!(f, "  range {min} ~ {max} %, average {avg} %")?;
		}

		match snap.vitals.and_then(|v| v.pulse_rate) {
			Some(pr) => writeln!(f, "Pulse rate:      {pr} bpm")?,
			None => writeln!(f, "Pulse rate:      {NO_DATA}")?,
		}
		if let (Some(min), Some(max), Some(avg)) = (stats.pr_min, stats.pr_max, stats.avg_pr()) {
			writeln!(f, "  range {min} ~ {max} bpm, average {avg} bpm")?;
		}

		match snap.vitals.and_then(|v| v.temperature) {
			Some(t) => writeln!(f, "Temperature:     {t} °C")?,
			None => writeln!(f, "Temperature:     {NO_DATA}")?,
		}
		match snap.vitals.and_then(|v| v.perfusion_index) {
			Some(pi) => writeln!(f, "Perfusion index: {pi} %")?,
			None => writeln!(f, "Perfusion index: {NO_DATA}")?,
		}
		match snap.vitals.and_then(|v| v.respiration_rate) {
			Some(rr) => writeln!(f, "Respiration:     {rr} /min")?,
			None => writeln!(f, "Respiration:     {NO_DATA}")?,
		}
		match snap.battery {
			Some(level) => writeln!(f, "Battery:         {level}")?,
			None => writeln!(f, "Battery:         {NO_DATA}")?,
		}

		writeln!(f, "{RULE}")?;
		writeln!(
			f,
			"Normal reference: SpO2 ≥ 95 % | PR 60-100 bpm | temp 36.0-37.2 °C"
		)
	}
}

/// Renders the human-readable text report.
#[must_use]
pub fn render_text(snapshot: &SessionSnapshot) -> String {
	TextReport(snapshot).to_string()
}

/// Renders the snapshot as pretty-printed JSON for the upload collaborator.
pub fn render_json(snapshot: &SessionSnapshot) -> serde_json::Result<String> {
	serde_json::to_string_pretty(snapshot)
}
