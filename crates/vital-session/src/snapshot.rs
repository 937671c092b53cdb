// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Point-in-time read model of a detection session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vital_protocol::{BatteryLevel, VitalSample};

use crate::stats::VitalStats;

/// Per-reason tallies of dropped frames, for diagnostics only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectCounters {
	pub malformed: u64,
	pub checksum: u64,
	pub device: u64,
	pub unknown_command: u64,
}

impl RejectCounters {
	#[must_use]
	pub fn total(&self) -> u64 {
		self.malformed + self.checksum + self.device + self.unknown_command
	}
}

/// Immutable copy of the session state, taken under the store's lock so a
/// reader never observes a half-updated field set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
	/// Accepted frames in the session log
	pub frames_received: usize,
	/// Wall-clock time of the first ingest attempt
	pub started_at: Option<DateTime<Utc>>,
	/// Most recent vital-signs sample, if any arrived
	pub vitals: Option<VitalSample>,
	/// Most recent battery level, if any arrived
	pub battery: Option<BatteryLevel>,
	pub stats: VitalStats,
	pub rejects: RejectCounters,
}
