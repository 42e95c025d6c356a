// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::DurationValue;

/// 2^-512, exact when applied to values that are not tiny.
const DOWNSCALE_FACTOR: DurationValue = DurationValue::from_bits((1023 - 512) << 52);

/// 2^512, the inverse of [`DOWNSCALE_FACTOR`].
const UPSCALE_FACTOR: DurationValue = DurationValue::from_bits((1023 + 512) << 52);

/// Compensated (Neumaier) sum.
#[derive(Debug, Clone, Copy, Default)]
struct CompensatedSum {
    sum: DurationValue,
    compensation: DurationValue,
}

impl CompensatedSum {
    fn add(&mut self, value: DurationValue) {
        let Self { sum, compensation } = self;
        let total = *sum + value;
        if sum.abs() >= value.abs() {
            *compensation += (*sum - total) + value;
        } else {
            *compensation += (value - total) + *sum;
        }
        *sum = total;
    }

    #[must_use]
    fn value(&self) -> DurationValue {
        let Self { sum, compensation } = self;
        if sum.is_finite() {
            sum + compensation
        } else {
            // Compensation degrades to NaN after overflowing into infinity.
            *sum
        }
    }
}

/// Count and sum of durations.
///
/// A second, downscaled sum recovers the mean of finite durations
/// whose sum exceeds the floating-point range.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct DurationAggregate {
    count: usize,
    sum: CompensatedSum,
    downscaled_sum: CompensatedSum,
}

impl DurationAggregate {
    pub(super) fn add(&mut self, value: DurationValue) {
        self.sum.add(value);
        self.downscaled_sum.add(value * DOWNSCALE_FACTOR);
        self.count += 1;
    }

    #[must_use]
    pub(super) const fn count(&self) -> usize {
        self.count
    }

    /// The arithmetic mean, absent if empty.
    #[must_use]
    pub(super) fn mean(&self) -> Option<DurationValue> {
        let Self {
            count,
            sum,
            downscaled_sum,
        } = self;
        if *count == 0 {
            return None;
        }
        let count = *count as DurationValue;
        let sum = sum.value();
        if sum.is_finite() {
            return Some(sum / count);
        }
        let downscaled_sum = downscaled_sum.value();
        if downscaled_sum.is_finite() {
            // Overflow of finite values
            return Some(downscaled_sum / count * UPSCALE_FACTOR);
        }
        // Infinite or NaN values
        Some(sum / count)
    }
}

impl Extend<DurationValue> for DurationAggregate {
    fn extend<I: IntoIterator<Item = DurationValue>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl FromIterator<DurationValue> for DurationAggregate {
    fn from_iter<I: IntoIterator<Item = DurationValue>>(iter: I) -> Self {
        let mut aggregate = Self::default();
        aggregate.extend(iter);
        aggregate
    }
}
