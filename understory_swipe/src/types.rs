// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small shared types: swipe direction, gesture state, and outcomes.

use crate::animation::AnimationId;

/// Horizontal swipe direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// Front region moves toward negative X; reveals `reveal-left`.
    Left,
    /// Front region moves toward positive X; reveals `reveal-right`.
    Right,
}

impl SwipeDirection {
    /// `-1.0` for [`Left`](Self::Left), `1.0` for [`Right`](Self::Right).
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    /// Direction of a horizontal displacement; `None` for zero.
    #[must_use]
    pub fn of(dx: f64) -> Option<Self> {
        if dx > 0.0 {
            Some(Self::Right)
        } else if dx < 0.0 {
            Some(Self::Left)
        } else {
            None
        }
    }
}

/// Where the pointer-tracking session currently is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum GestureState {
    /// No pointer is down.
    #[default]
    Idle,
    /// A pointer is down, but it did not land on a draggable row.
    Pressed,
    /// A pointer is down on a row and has not left the dead-zone yet.
    Tracking,
    /// The front region of the touched row is following the pointer.
    Dragging,
}

/// What a single pointer event did.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GestureOutcome {
    /// Nothing to do for this event.
    Ignored,
    /// A session started but no draggable row is under the pointer.
    Pressed,
    /// The session is tracking a row; no visual change.
    Tracking,
    /// The front region moved to `x`.
    Dragged {
        /// New X of the front region.
        x: f64,
    },
    /// Release committed a swipe; the commit animation has started.
    Committed(SwipeDirection),
    /// Release was a tap; the click callback ran and the row is resetting.
    Clicked,
    /// Release was a long press; the long-click callback ran and the row is resetting.
    LongClicked,
    /// Release was neither a commit nor a tap; the row is resetting.
    Reset,
}

/// Result of a programmatic swipe request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RequestOutcome {
    /// A gesture session is live; the request waits in the pending queue.
    Queued,
    /// The commit animation started.
    Started(AnimationId),
    /// No row at that index, or the row is already animating.
    Ignored,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_of_displacement() {
        assert_eq!(SwipeDirection::of(3.0), Some(SwipeDirection::Right));
        assert_eq!(SwipeDirection::of(-0.5), Some(SwipeDirection::Left));
        assert_eq!(SwipeDirection::of(0.0), None);
        assert_eq!(SwipeDirection::Left.sign(), -1.0);
    }
}
