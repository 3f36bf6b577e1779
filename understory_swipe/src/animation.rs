// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation requests, lifecycle events, and the row lock set.
//!
//! The controller never runs animations itself. It hands the host an
//! [`Animation`] describing where the front region should go, how long to take,
//! and which curve to use. The host reports progress back through
//! [`AnimationEvent`]s tagged with the [`AnimationId`] it was given.
//!
//! While an animation is in flight its row sits in a [`LockSet`], which keeps a
//! new gesture (or a programmatic swipe) from grabbing the same row.
//!
//! Hosts without a tween engine can step animations with [`Animation::sample`]:
//!
//! ```
//! use understory_swipe::animation::{Animation, AnimationId, Easing};
//!
//! let anim = Animation {
//!     id: AnimationId(1),
//!     target_x: 100.0,
//!     duration_ms: 200,
//!     easing: Easing::Accelerate,
//! };
//! assert_eq!(anim.sample(0.0, 0), 0.0);
//! assert_eq!(anim.sample(0.0, 100), 25.0);
//! assert_eq!(anim.sample(0.0, 400), 100.0);
//! ```

use core::hash::Hash;

use hashbrown::HashSet;

use crate::types::SwipeDirection;

/// Identifier the controller assigns to each animation it starts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(pub u64);

/// Timing curve of an animation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Easing {
    /// Starts slow and speeds up (`t²`). Used for commits.
    Accelerate,
    /// Speeds up then slows down (cubic ease-in-out). Used for resets.
    AccelerateDecelerate,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` to eased progress. Out-of-range
    /// input is clamped.
    #[must_use]
    pub fn sample(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Accelerate => t * t,
            Self::AccelerateDecelerate => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

/// A request to move a front region to `target_x`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Animation {
    /// Id to report back with [`AnimationEvent`]s.
    pub id: AnimationId,
    /// Final X of the region.
    pub target_x: f64,
    /// Duration in milliseconds.
    pub duration_ms: u64,
    /// Timing curve.
    pub easing: Easing,
}

impl Animation {
    /// X of the region `elapsed_ms` after starting from `from_x`.
    #[must_use]
    pub fn sample(&self, from_x: f64, elapsed_ms: u64) -> f64 {
        if self.duration_ms == 0 || elapsed_ms >= self.duration_ms {
            return self.target_x;
        }
        let t = elapsed_ms as f64 / self.duration_ms as f64;
        from_x + (self.target_x - from_x) * self.easing.sample(t)
    }
}

/// Lifecycle events a host reports for an animation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AnimationEvent {
    /// The animation began running. The row stays locked.
    Started,
    /// The animation repeated. The row is unlocked.
    Repeated,
    /// The animation was cancelled. The row is unlocked and nothing else runs.
    Cancelled,
    /// The animation ran to completion. The row is unlocked and its
    /// continuation (listener call, follow-up reset, queue drain) runs.
    Finished,
}

/// What a row is animating toward.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RowPhase {
    /// Moving off-screen after a committed swipe.
    Committing(SwipeDirection),
    /// Returning to its natural X.
    Resetting,
}

/// What to do when an animation finishes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Continuation {
    /// Ask the listener about the swipe.
    Commit(SwipeDirection),
    /// Nothing, or drain one queued request when `drain` is set.
    Reset { drain: bool },
}

impl Continuation {
    pub(crate) fn phase(self) -> RowPhase {
        match self {
            Self::Commit(direction) => RowPhase::Committing(direction),
            Self::Reset { .. } => RowPhase::Resetting,
        }
    }
}

/// Bookkeeping for one in-flight animation.
#[derive(Copy, Clone, Debug)]
pub(crate) struct InFlight<K, R> {
    pub(crate) row: K,
    pub(crate) front: R,
    pub(crate) natural_x: f64,
    pub(crate) continuation: Continuation,
}

/// Rows currently under animation.
#[derive(Clone, Debug)]
pub struct LockSet<K> {
    rows: HashSet<K>,
}

impl<K> Default for LockSet<K> {
    fn default() -> Self {
        Self {
            rows: HashSet::default(),
        }
    }
}

impl<K: Copy + Eq + Hash> LockSet<K> {
    /// Create an empty lock set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock `row`. Returns `true` if it was not locked before.
    pub fn lock(&mut self, row: K) -> bool {
        self.rows.insert(row)
    }

    /// Unlock `row`. Returns `true` if it was locked.
    pub fn unlock(&mut self, row: K) -> bool {
        self.rows.remove(&row)
    }

    /// Returns `true` if `row` is animating.
    #[must_use]
    pub fn contains(&self, row: K) -> bool {
        self.rows.contains(&row)
    }

    /// Number of locked rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if no row is locked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
