// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Vital-signs payload decoding (command `0x95`).
//!
//! Each field carries its own validity rule; a field outside its range
//! decodes to `None` without invalidating the rest of the sample.

use serde::{Deserialize, Serialize};

use crate::error::{FrameError, Result};

/// Device-reported sensor-contact quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeStatus {
	/// Probe attached and reading
	Normal,
	/// Probe not connected to the unit
	ProbeDisconnected,
	/// LED drive current out of range
	OverCurrent,
	/// Probe hardware fault
	ProbeFault,
	/// Finger removed from the clip
	FingerOut,
	/// Reserved status code
	Unknown(u8),
}

impl ProbeStatus {
	/// Maps bits 2-4 of payload byte 0.
	#[must_use]
	pub fn from_code(code: u8) -> Self {
		match code {
			0 => ProbeStatus::Normal,
			1 => ProbeStatus::ProbeDisconnected,
			2 => ProbeStatus::OverCurrent,
			3 => ProbeStatus::ProbeFault,
			4 => ProbeStatus::FingerOut,
			other => ProbeStatus::Unknown(other),
		}
	}
}

impl std::fmt::Display for ProbeStatus {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ProbeStatus::Normal => write!(f, "normal"),
			ProbeStatus::ProbeDisconnected => write!(f, "probe disconnected"),
			ProbeStatus::OverCurrent => write!(f, "over-current"),
			ProbeStatus::ProbeFault => write!(f, "probe fault"),
			ProbeStatus::FingerOut => write!(f, "finger out"),
			ProbeStatus::Unknown(code) => write!(f, "unknown status ({code})"),
		}
	}
}

/// Body temperature as the protocol's fixed-point pair: whole degrees
/// Celsius (1-99) plus tenths (0-9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Temperature {
	pub whole: u8,
	pub tenths: u8,
}

impl Temperature {
	#[must_use]
	pub fn as_celsius(self) -> f64 {
		f64::from(self.whole) + f64::from(self.tenths) / 10.0
	}
}

impl std::fmt::Display for Temperature {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}.{}", self.whole, self.tenths)
	}
}

/// Perfusion index as the protocol's fixed-point pair: whole percent
/// (at most 20) plus hundredths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerfusionIndex {
	pub whole: u8,
	pub hundredths: u8,
}

impl PerfusionIndex {
	#[must_use]
	pub fn as_percent(self) -> f64 {
		f64::from(self.whole) + f64::from(self.hundredths) / 100.0
	}
}

impl std::fmt::Display for PerfusionIndex {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}.{:02}", self.whole, self.hundredths)
	}
}

/// Byte value meaning "no PI reading" in either PI byte.
const PI_SENTINEL: u8 = 0x7F;

/// One decoded vital-signs sample. Absent/out-of-range fields are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalSample {
	pub probe_status: ProbeStatus,
	/// Pulse rate in bpm, 25-300
	pub pulse_rate: Option<u16>,
	/// Blood-oxygen saturation percent, 0-100
	pub spo2: Option<u8>,
	pub temperature: Option<Temperature>,
	pub perfusion_index: Option<PerfusionIndex>,
	/// Breaths per minute, 4-120; carried only by 8-byte payloads
	pub respiration_rate: Option<u8>,
}

impl VitalSample {
	/// Decodes a vital-signs payload. Seven bytes is a complete sample;
	/// an eighth byte adds respiration rate. Anything shorter rejects
	/// before field extraction.
	pub fn decode(payload: &[u8]) -> Result<Self> {
		if payload.len() < 7 {
			return Err(FrameError::Malformed(format!(
				"vital-signs payload has {} bytes, need at least 7",
				payload.len()
			)));
		}

		let probe_status = ProbeStatus::from_code((payload[0] >> 2) & 0x07);

		// Pulse rate's ninth bit rides on the top bit of the spo2 byte.
		let pulse_rate = u16::from(payload[1]) + u16::from((payload[2] >> 7) & 1) * 256;
		let pulse_rate = (25..=300).contains(&pulse_rate).then_some(pulse_rate);

		let spo2 = payload[2] & 0x7F;
		let spo2 = (spo2 <= 100).then_some(spo2);

		let temperature = (1..=99).contains(&payload[3]) && payload[4] <= 9;
		let temperature = temperature.then_some(Temperature {
			whole: payload[3],
			tenths: payload[4],
		});

		let perfusion_index =
			payload[5] != PI_SENTINEL && payload[6] != PI_SENTINEL && payload[5] <= 20;
		let perfusion_index = perfusion_index.then_some(PerfusionIndex {
			whole: payload[5],
			hundredths: payload[6],
		});

		let respiration_rate = payload
			.get(7)
			.copied()
			.filter(|rr| (4..=120).contains(rr));

		Ok(Self {
			probe_status,
			pulse_rate,
			spo2,
			temperature,
			perfusion_index,
			respiration_rate,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	const REFERENCE_PAYLOAD: [u8; 7] = [0x00, 0x3C, 0x62, 0x24, 0x05, 0x01, 0x14];

	#[test]
	fn test_reference_payload() {
		let sample = VitalSample::decode(&REFERENCE_PAYLOAD).unwrap();
		assert_eq!(sample.probe_status, ProbeStatus::Normal);
		assert_eq!(sample.pulse_rate, Some(60));
		assert_eq!(sample.spo2, Some(98));
		assert_eq!(sample.temperature, Some(Temperature { whole: 36, tenths: 5 }));
		assert_eq!(
			sample.perfusion_index,
			Some(PerfusionIndex { whole: 1, hundredths: 20 })
		);
		assert_eq!(sample.respiration_rate, None);
	}

	#[test]
	fn test_short_payload_rejected() {
		assert!(matches!(
			VitalSample::decode(&REFERENCE_PAYLOAD[..6]),
			Err(FrameError::Malformed(_))
		));
	}

	#[test]
	fn test_probe_status_codes() {
		assert_eq!(ProbeStatus::from_code(0), ProbeStatus::Normal);
		assert_eq!(ProbeStatus::from_code(1), ProbeStatus::ProbeDisconnected);
		assert_eq!(ProbeStatus::from_code(2), ProbeStatus::OverCurrent);
		assert_eq!(ProbeStatus::from_code(3), ProbeStatus::ProbeFault);
		assert_eq!(ProbeStatus::from_code(4), ProbeStatus::FingerOut);
		assert_eq!(ProbeStatus::from_code(6), ProbeStatus::Unknown(6));
	}

	#[test]
	fn test_probe_status_from_byte_bits() {
		// b0 = 0b0001_0000 -> code 4 (finger out)
		let mut payload = REFERENCE_PAYLOAD;
		payload[0] = 0b0001_0000;
		let sample = VitalSample::decode(&payload).unwrap();
		assert_eq!(sample.probe_status, ProbeStatus::FingerOut);
	}

	#[test]
	fn test_pulse_rate_high_bit() {
		// b1 = 0x2C (44), spo2 byte top bit set: pr = 44 + 256 = 300.
		let mut payload = REFERENCE_PAYLOAD;
		payload[1] = 0x2C;
		payload[2] = 0x80 | 0x62;
		let sample = VitalSample::decode(&payload).unwrap();
		assert_eq!(sample.pulse_rate, Some(300));
		assert_eq!(sample.spo2, Some(98));
	}

	#[test]
	fn test_pulse_rate_out_of_range() {
		let mut payload = REFERENCE_PAYLOAD;
		payload[1] = 24; // below 25
		let sample = VitalSample::decode(&payload).unwrap();
		assert_eq!(sample.pulse_rate, None);
		// Other fields unaffected.
		assert_eq!(sample.spo2, Some(98));
	}

	#[test]
	fn test_spo2_out_of_range() {
		let mut payload = REFERENCE_PAYLOAD;
		payload[2] = 101;
		let sample = VitalSample::decode(&payload).unwrap();
		assert_eq!(sample.spo2, None);
		assert_eq!(sample.pulse_rate, Some(60));
	}

	#[test]
	fn test_perfusion_sentinel_bytes() {
		for (b5, b6) in [(0x7F, 0x14), (0x01, 0x7F), (21, 0x14)] {
			let mut payload = REFERENCE_PAYLOAD;
			payload[5] = b5;
			payload[6] = b6;
			let sample = VitalSample::decode(&payload).unwrap();
			assert_eq!(sample.perfusion_index, None);
		}
	}

	#[test]
	fn test_respiration_from_eighth_byte() {
		let payload = [0x00, 0x3C, 0x62, 0x24, 0x05, 0x01, 0x14, 16];
		let sample = VitalSample::decode(&payload).unwrap();
		assert_eq!(sample.respiration_rate, Some(16));

		let payload = [0x00, 0x3C, 0x62, 0x24, 0x05, 0x01, 0x14, 3];
		let sample = VitalSample::decode(&payload).unwrap();
		assert_eq!(sample.respiration_rate, None);

		let payload = [0x00u8, 0x3C, 0x62, 0x24, 0x05, 0x01, 0x14, 121];
		let sample = VitalSample::decode(&payload).unwrap();
		assert_eq!(sample.respiration_rate, None);
	}

	#[test]
	fn test_display_formats() {
		assert_eq!(Temperature { whole: 36, tenths: 5 }.to_string(), "36.5");
		assert_eq!(
			PerfusionIndex { whole: 1, hundredths: 20 }.to_string(),
			"1.20"
		);
		assert_eq!(
			PerfusionIndex { whole: 12, hundredths: 3 }.to_string(),
			"12.03"
		);
		assert_eq!(ProbeStatus::Unknown(6).to_string(), "unknown status (6)");
	}

	proptest! {
		#[test]
		fn temperature_whole_zero_is_always_absent(b4 in 0u8..=255, rest in any::<[u8; 3]>()) {
			let payload = [rest[0], rest[1], rest[2], 0x00, b4, 0x01, 0x14];
			let sample = VitalSample::decode(&payload).unwrap();
			prop_assert_eq!(sample.temperature, None);
		}

		#[test]
		fn fields_decode_independently(payload in any::<[u8; 8]>()) {
			// Well-formed length never rejects, whatever the bytes.
			let sample = VitalSample::decode(&payload).unwrap();
			if let Some(pr) = sample.pulse_rate {
				prop_assert!((25..=300).contains(&pr));
			}
			if let Some(spo2) = sample.spo2 {
				prop_assert!(spo2 <= 100);
			}
			if let Some(t) = sample.temperature {
				prop_assert!((1..=99).contains(&t.whole) && t.tenths <= 9);
			}
			if let Some(pi) = sample.perfusion_index {
				prop_assert!(pi.whole <= 20);
			}
			if let Some(rr) = sample.respiration_rate {
				prop_assert!((4..=120).contains(&rr));
			}
		}
	}
}
