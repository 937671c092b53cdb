// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Detection-session state for the fingertip pulse oximeter.
//!
//! One [`SessionStore`] owns a session: the ordered log of accepted raw
//! frames, the current vitals and battery readings, and running SpO2 /
//! pulse-rate statistics. The transport calls [`SessionStore::ingest`] once
//! per received notification; display and export paths read a consistent
//! [`SessionSnapshot`] at any time and never trigger decoding themselves.

pub mod report;
pub mod snapshot;
pub mod stats;
pub mod store;

pub use report::{render_json, render_text, TextReport};
pub use snapshot::{RejectCounters, SessionSnapshot};
pub use stats::VitalStats;
pub use store::{IngestOutcome, SessionStore};
