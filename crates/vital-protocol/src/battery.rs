// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Battery-status payload decoding (command `0x99`).

use serde::{Deserialize, Serialize};

use crate::error::{FrameError, Result};

/// Four-step qualitative battery charge scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatteryLevel {
	Empty,
	Low,
	Medium,
	Full,
}

impl BatteryLevel {
	/// Decodes a battery-status payload. The level lives in the low two
	/// bits of the first byte; all four values are legal.
	pub fn decode(payload: &[u8]) -> Result<Self> {
		let byte = payload.first().ok_or_else(|| {
			FrameError::Malformed("battery payload is empty".to_string())
		})?;
		Ok(match byte & 0x03 {
			0 => BatteryLevel::Empty,
			1 => BatteryLevel::Low,
			2 => BatteryLevel::Medium,
			_ => BatteryLevel::Full,
		})
	}

	/// Raw protocol step, 0-3.
	#[must_use]
	pub fn as_step(self) -> u8 {
		match self {
			BatteryLevel::Empty => 0,
			BatteryLevel::Low => 1,
			BatteryLevel::Medium => 2,
			BatteryLevel::Full => 3,
		}
	}
}

impl std::fmt::Display for BatteryLevel {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			BatteryLevel::Empty => write!(f, "empty"),
			BatteryLevel::Low => write!(f, "low"),
			BatteryLevel::Medium => write!(f, "medium"),
			BatteryLevel::Full => write!(f, "full"),
		}
	}
}
