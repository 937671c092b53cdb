// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Framing protocol for a fingertip pulse oximeter.
//!
//! The device streams hex-encoded frames over Bluetooth characteristic
//! notifications on a channel it may share with other sensors. This crate
//! validates the fixed `FFFE` framing (length, checksum, device filter) and
//! decodes the two known command payloads:
//!
//! - `0x95` vital signs: probe status, pulse rate, SpO2, temperature,
//!   perfusion index, and an optional respiration rate
//! - `0x99` battery status: a four-step charge level
//!
//! Rejections are expected, recoverable outcomes (a shared channel carries
//! foreign frames; transport noise corrupts checksums) and are surfaced as
//! [`FrameError`] values rather than failures. Session bookkeeping lives in
//! `vital-session`.

pub mod battery;
pub mod error;
pub mod frame;
pub mod vitals;

pub use battery::BatteryLevel;
pub use error::{FrameError, Result};
pub use frame::{
	validate, ValidFrame, CMD_BATTERY_STATUS, CMD_VITAL_SIGNS, FRAME_MAGIC, OXIMETER_DEVICE_ID,
};
pub use vitals::{PerfusionIndex, ProbeStatus, Temperature, VitalSample};
