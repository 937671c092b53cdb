// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Session store: the single mutual-exclusion domain around ingest,
//! aggregation, and snapshot reads.
//!
//! Frames arrive strictly ordered on one transport callback context while
//! display and export paths read concurrently. One lock covers the whole
//! validate→decode→fold sequence, so a snapshot is always a consistent
//! point-in-time copy.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use tracing::debug;
use vital_protocol::{
	frame, BatteryLevel, FrameError, VitalSample, CMD_BATTERY_STATUS, CMD_VITAL_SIGNS,
};

use crate::snapshot::{RejectCounters, SessionSnapshot};
use crate::stats::VitalStats;

/// Outcome of ingesting one raw frame. Rejections are expected under
/// transport noise and on a shared channel; none of them is a failure of
/// the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IngestOutcome {
	Accepted,
	RejectedMalformed,
	RejectedChecksum,
	RejectedDevice,
	RejectedUnknownCommand,
}

impl From<&FrameError> for IngestOutcome {
	fn from(err: &FrameError) -> Self {
		match err {
			FrameError::Malformed(_) => IngestOutcome::RejectedMalformed,
			FrameError::ChecksumMismatch { .. } => IngestOutcome::RejectedChecksum,
			FrameError::WrongDevice(_) => IngestOutcome::RejectedDevice,
			FrameError::UnknownCommand(_) => IngestOutcome::RejectedUnknownCommand,
		}
	}
}

#[derive(Debug, Default)]
struct SessionState {
	log: Vec<String>,
	started_at: Option<DateTime<Utc>>,
	vitals: Option<VitalSample>,
	battery: Option<BatteryLevel>,
	stats: VitalStats,
	rejects: RejectCounters,
}

impl SessionState {
	fn reject(&mut self, err: &FrameError) -> IngestOutcome {
		let outcome = IngestOutcome::from(err);
		match outcome {
			IngestOutcome::RejectedMalformed => self.rejects.malformed += 1,
			IngestOutcome::RejectedChecksum => self.rejects.checksum += 1,
			IngestOutcome::RejectedDevice => self.rejects.device += 1,
			IngestOutcome::RejectedUnknownCommand => self.rejects.unknown_command += 1,
			IngestOutcome::Accepted => {}
		}
		debug!(%err, "frame dropped");
		outcome
	}
}

/// Owns one detection session: the accepted-frame log, the current vitals
/// and battery readings, and the running statistics.
#[derive(Debug, Default)]
pub struct SessionStore {
	inner: Mutex<SessionState>,
}

impl SessionStore {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Ingests one raw hex frame from the transport.
	///
	/// The session start timestamp is set on the very first call whether or
	/// not that frame is accepted, matching the device's companion app. On
	/// acceptance the raw frame is appended verbatim to the log, the
	/// current-value state is overwritten, and vitals feed the aggregator.
	pub fn ingest(&self, raw: &str) -> IngestOutcome {
		let mut state = self.inner.lock();
		if state.started_at.is_none() {
			state.started_at = Some(Utc::now());
		}

		let valid = match frame::validate(raw) {
			Ok(valid) => valid,
			Err(err) => return state.reject(&err),
		};

		match valid.command {
			CMD_VITAL_SIGNS => match VitalSample::decode(&valid.payload) {
				Ok(sample) => {
					state.stats.fold(&sample);
					state.vitals = Some(sample);
				}
				Err(err) => return state.reject(&err),
			},
			CMD_BATTERY_STATUS => match BatteryLevel::decode(&valid.payload) {
				Ok(level) => state.battery = Some(level),
				Err(err) => return state.reject(&err),
			},
			other => return state.reject(&FrameError::UnknownCommand(other)),
		}

		state.log.push(raw.to_string());
		IngestOutcome::Accepted
	}

	/// Consistent point-in-time copy of the session state.
	#[must_use]
	pub fn snapshot(&self) -> SessionSnapshot {
		let state = self.inner.lock();
		SessionSnapshot {
			frames_received: state.log.len(),
			started_at: state.started_at,
			vitals: state.vitals,
			battery: state.battery,
			stats: state.stats.clone(),
			rejects: state.rejects,
		}
	}

	/// Clears everything back to the initial state. The caller guarantees
	/// no ingest is in flight; this is a between-sessions operation.
	pub fn reset(&self) {
		*self.inner.lock() = SessionState::default();
	}

	/// Raw accepted frames joined in arrival order, the archival export
	/// shape consumed by the upload and persistence collaborators.
	#[must_use]
	pub fn raw_log_joined(&self) -> String {
		self.inner.lock().log.join(",")
	}
}
