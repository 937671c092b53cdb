// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Running SpO2 and pulse-rate statistics across a detection session.

use serde::{Deserialize, Serialize};
use vital_protocol::VitalSample;

/// Incremental count/sum/min/max over accepted vital-signs samples.
///
/// A sample counts as valid when it carries at least one usable reading
/// (SpO2 above zero or a pulse rate); each field then only contributes to
/// its own sum and extremes when it is itself in range. Min/max stay `None`
/// until a reading has actually been seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VitalStats {
	pub valid_samples: u32,
	pub spo2_sum: u64,
	pub spo2_min: Option<u8>,
	pub spo2_max: Option<u8>,
	pub pr_sum: u64,
	pub pr_min: Option<u16>,
	pub pr_max: Option<u16>,
}

impl VitalStats {
	/// Folds one decoded sample into the running state. Never rejects;
	/// a sample with no usable reading simply leaves the state untouched.
	pub fn fold(&mut self, sample: &VitalSample) {
		let spo2 = sample.spo2.filter(|v| *v > 0);
		let pr = sample.pulse_rate;

		if spo2.is_none() && pr.is_none() {
			return;
		}
		self.valid_samples += 1;

		if let Some(spo2) = spo2 {
			self.spo2_sum += u64::from(spo2);
			self.spo2_min = Some(self.spo2_min.map_or(spo2, |m| m.min(spo2)));
			self.spo2_max = Some(self.spo2_max.map_or(spo2, |m| m.max(spo2)));
		}
		if let Some(pr) = pr {
			self.pr_sum += u64::from(pr);
			self.pr_min = Some(self.pr_min.map_or(pr, |m| m.min(pr)));
			self.pr_max = Some(self.pr_max.map_or(pr, |m| m.max(pr)));
		}
	}

	/// Integer-truncated average SpO2 over all valid samples.
	#[must_use]
	pub fn avg_spo2(&self) -> Option<u64> {
		(self.valid_samples > 0).then(|| self.spo2_sum / u64::from(self.valid_samples))
	}

	/// Integer-truncated average pulse rate over all valid samples.
	#[must_use]
	pub fn avg_pr(&self) -> Option<u64> {
		(self.valid_samples > 0).then(|| self.pr_sum / u64::from(self.valid_samples))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use vital_protocol::ProbeStatus;

	fn sample(spo2: Option<u8>, pr: Option<u16>) -> VitalSample {
		VitalSample {
			probe_status: ProbeStatus::Normal,
			pulse_rate: pr,
			spo2,
			temperature: None,
			perfusion_index: None,
			respiration_rate: None,
		}
	}

	#[test]
	fn test_single_sample() {
		let mut stats = VitalStats::default();
		stats.fold(&sample(Some(98), Some(60)));
		assert_eq!(stats.valid_samples, 1);
		assert_eq!(stats.avg_spo2(), Some(98));
		assert_eq!(stats.spo2_min, Some(98));
		assert_eq!(stats.spo2_max, Some(98));
		assert_eq!(stats.avg_pr(), Some(60));
		assert_eq!(stats.pr_min, Some(60));
		assert_eq!(stats.pr_max, Some(60));
	}

	#[test]
	fn test_empty_sample_not_counted() {
		let mut stats = VitalStats::default();
		stats.fold(&sample(None, None));
		assert_eq!(stats, VitalStats::default());
		assert_eq!(stats.avg_spo2(), None);
	}

	#[test]
	fn test_spo2_zero_not_usable() {
		// A zero SpO2 reading counts the sample only if pulse rate is there,
		// and never feeds the SpO2 extremes.
		let mut stats = VitalStats::default();
		stats.fold(&sample(Some(0), None));
		assert_eq!(stats.valid_samples, 0);

		stats.fold(&sample(Some(0), Some(72)));
		assert_eq!(stats.valid_samples, 1);
		assert_eq!(stats.spo2_min, None);
		assert_eq!(stats.pr_min, Some(72));
	}

	#[test]
	fn test_average_truncates() {
		let mut stats = VitalStats::default();
		stats.fold(&sample(Some(98), Some(60)));
		stats.fold(&sample(Some(97), Some(61)));
		// 195 / 2 and 121 / 2, truncated.
		assert_eq!(stats.avg_spo2(), Some(97));
		assert_eq!(stats.avg_pr(), Some(60));
	}

	#[test]
	fn test_mixed_field_validity() {
		// Average divides by the sample count, not the per-field count,
		// exactly as the device's companion app computed it.
		let mut stats = VitalStats::default();
		stats.fold(&sample(Some(98), Some(60)));
		stats.fold(&sample(None, Some(64)));
		assert_eq!(stats.valid_samples, 2);
		assert_eq!(stats.avg_spo2(), Some(49));
		assert_eq!(stats.spo2_min, Some(98));
		assert_eq!(stats.avg_pr(), Some(62));
	}

	proptest! {
		#[test]
		fn monotone_extremes_and_exact_count(
			readings in prop::collection::vec((0u8..=100, 25u16..=300, any::<bool>(), any::<bool>()), 1..50)
		) {
			let mut stats = VitalStats::default();
			let mut expected_count = 0u32;
			for (spo2, pr, with_spo2, with_pr) in &readings {
				let s = sample(
					with_spo2.then_some(*spo2),
					with_pr.then_some(*pr),
				);
				if s.spo2.is_some_and(|v| v > 0) || s.pulse_rate.is_some() {
					expected_count += 1;
				}
				stats.fold(&s);
			}
			prop_assert_eq!(stats.valid_samples, expected_count);
			for (spo2, pr, with_spo2, with_pr) in &readings {
				if *with_spo2 && *spo2 > 0 {
					prop_assert!(stats.spo2_min.unwrap() <= *spo2);
					prop_assert!(stats.spo2_max.unwrap() >= *spo2);
				}
				if *with_pr {
					prop_assert!(stats.pr_min.unwrap() <= *pr);
					prop_assert!(stats.pr_max.unwrap() >= *pr);
				}
			}
		}
	}
}
