// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunable thresholds and durations for the swipe controller.

/// When queued programmatic swipes are drained.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum DrainPolicy {
    /// Drain one request only after a commit whose listener declined it.
    ///
    /// An accepted commit returns the row to its natural X and leaves the
    /// queue untouched.
    #[default]
    OnDecline,
    /// Drain one request after every commit.
    ///
    /// Declined commits drain immediately; accepted commits drain once the
    /// row has finished returning to its natural X.
    OnCompletion,
}

/// Swipe controller configuration.
///
/// Distances are in the same logical units as pointer positions; durations
/// and press times are in milliseconds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Duration of the commit (off-screen) animation.
    pub commit_duration_ms: u64,
    /// Duration of the return-to-natural-X animation.
    pub reset_duration_ms: u64,
    /// Horizontal dead-zone before the front region starts to follow the pointer.
    pub reveal_threshold: f64,
    /// A release commits once the front has moved more than `width / commit_width_ratio`.
    pub commit_width_ratio: f64,
    /// Presses held longer than this are long presses.
    pub long_press_ms: u64,
    /// Maximum per-axis movement between down and up for a tap.
    pub tap_slop: f64,
    /// Queue drain policy.
    pub drain_policy: DrainPolicy,
}

impl SwipeConfig {
    /// Defaults matching common mobile list conventions.
    pub const DEFAULT: Self = Self {
        commit_duration_ms: 300,
        reset_duration_ms: 500,
        reveal_threshold: 50.0,
        commit_width_ratio: 5.0,
        long_press_ms: 500,
        tap_slop: 5.0,
        drain_policy: DrainPolicy::OnDecline,
    };

    /// Displacement a release must exceed to commit, for a front of `width`.
    #[must_use]
    pub fn commit_distance(&self, width: f64) -> f64 {
        width / self.commit_width_ratio
    }

    /// Returns a copy with `policy` as the drain policy.
    #[must_use]
    pub fn with_drain_policy(mut self, policy: DrainPolicy) -> Self {
        self.drain_policy = policy;
        self
    }
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
