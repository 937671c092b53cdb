// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the oximeter protocol.
//!
//! Every variant is a recoverable, expected outcome: frames arrive over a
//! noisy shared channel and a rejection must never surface to the transport
//! caller as a failure.

use thiserror::Error;

/// Reasons a frame or payload is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
	/// Header or length violation (short frame, bad magic, non-hex input,
	/// payload too short for the command)
	#[error("malformed frame: {0}")]
	Malformed(String),

	/// Recomputed checksum does not match the frame's checksum byte
	#[error("checksum mismatch: frame carries {carried:#04x}, computed {computed:#04x}")]
	ChecksumMismatch { carried: u8, computed: u8 },

	/// Frame addressed to a different device sharing the channel
	#[error("frame addressed to device {0:#04x}")]
	WrongDevice(u8),

	/// Valid frame with a command id this decoder does not know
	#[error("unknown command id {0:#04x}")]
	UnknownCommand(u8),
}

pub type Result<T> = std::result::Result<T, FrameError>;
