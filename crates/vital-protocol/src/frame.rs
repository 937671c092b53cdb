// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Frame validation for the fingertip oximeter framing protocol.
//!
//! A frame is a run of hex digit pairs: a 2-byte magic (`FFFE`), a length
//! byte `LL`, a checksum byte `CS`, a device id, a command id, then the
//! payload. The checksum covers everything after itself:
//! `(LL + device + command + Σpayload) mod 256`.

use tracing::{debug, warn};

use crate::error::{FrameError, Result};

/// Fixed 2-byte frame magic, as hex digits after normalization.
pub const FRAME_MAGIC: &str = "FFFE";

/// Device id of the fingertip oximeter. Frames from other devices on the
/// shared channel are filtered out, not treated as errors.
pub const OXIMETER_DEVICE_ID: u8 = 0x23;

/// Command id carrying the vital-signs payload.
pub const CMD_VITAL_SIGNS: u8 = 0x95;

/// Command id carrying the battery-status payload.
pub const CMD_BATTERY_STATUS: u8 = 0x99;

/// Minimum normalized frame length in hex digits (magic + 4 header bytes).
const MIN_FRAME_HEX_DIGITS: usize = 12;

/// A frame that passed header, device, and checksum validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidFrame {
	/// Command id selecting the payload schema.
	pub command: u8,
	/// Payload bytes after the 4-byte header.
	pub payload: Vec<u8>,
}

/// Validates a raw hex frame and strips the header.
///
/// Whitespace is stripped and hex digits uppercased before any check, so
/// `"FF FE 07 ..."` and `"fffe07..."` are the same frame. Rejection order
/// follows the device protocol: header shape, then device filter, then
/// checksum.
pub fn validate(raw: &str) -> Result<ValidFrame> {
	let clean: String = raw
		.chars()
		.filter(|c| !c.is_whitespace())
		.collect::<String>()
		.to_ascii_uppercase();

	// Hex-digit guard first: it keeps every later byte-indexed check on
	// ASCII and makes byte length equal hex-digit count.
	if !clean.bytes().all(|b| b.is_ascii_hexdigit()) {
		return Err(FrameError::Malformed("non-hex input".to_string()));
	}
	if clean.len() < MIN_FRAME_HEX_DIGITS {
		return Err(FrameError::Malformed(format!(
			"frame has {} hex digits, need at least {MIN_FRAME_HEX_DIGITS}",
			clean.len()
		)));
	}
	if !clean.starts_with(FRAME_MAGIC) {
		return Err(FrameError::Malformed(format!(
			"bad magic: {}",
			&clean[..4]
		)));
	}

	let bytes =
		hex::decode(&clean).map_err(|e| FrameError::Malformed(format!("invalid hex: {e}")))?;

	// Offsets after the 2-byte magic.
	let length_byte = bytes[2];
	let carried = bytes[3];
	let device = bytes[4];
	let command = bytes[5];
	let payload = &bytes[6..];

	if device != OXIMETER_DEVICE_ID {
		debug!(device = %format_args!("{device:#04x}"), "frame from another device, skipping");
		return Err(FrameError::WrongDevice(device));
	}

	let computed = checksum(length_byte, device, command, payload);
	if computed != carried {
		// Expected under transport noise; drop and count, never raise.
		warn!(
			carried = %format_args!("{carried:#04x}"),
			computed = %format_args!("{computed:#04x}"),
			frame = %clean,
			"checksum mismatch, dropping frame"
		);
		return Err(FrameError::ChecksumMismatch { carried, computed });
	}

	Ok(ValidFrame {
		command,
		payload: payload.to_vec(),
	})
}

/// Integrity checksum over the length byte, device id, command id, and
/// payload. Not cryptographic; mismatches just mean line noise.
#[must_use]
pub fn checksum(length_byte: u8, device: u8, command: u8, payload: &[u8]) -> u8 {
	payload
		.iter()
		.fold(
			length_byte
				.wrapping_add(device)
				.wrapping_add(command),
			|acc, b| acc.wrapping_add(*b),
		)
}
