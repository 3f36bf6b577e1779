// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pending programmatic swipes.
//!
//! Requests made while a gesture session is live cannot run without racing the
//! session, so they wait here in FIFO order. The queue stores
//! [`SwipeRequest`] values as they are.
//!
//! For handing a request across a boundary that only carries integers (a
//! platform message, a saved-state bundle) there is also a compact signed
//! form: the magnitude is `index + 1` (so index `0` is distinct from
//! "nothing") and the sign is the direction. The controller itself never
//! encodes requests.
//!
//! ```
//! use understory_swipe::queue::SwipeRequest;
//! use understory_swipe::types::SwipeDirection;
//!
//! let req = SwipeRequest::new(0, SwipeDirection::Left);
//! assert_eq!(req.to_signed(), Some(-1));
//! assert_eq!(SwipeRequest::from_signed(-1), Some(req));
//! assert_eq!(SwipeRequest::from_signed(0), None);
//! ```

use alloc::collections::VecDeque;

use crate::types::SwipeDirection;

/// A programmatic swipe on the row at `index`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SwipeRequest {
    /// Row index, as understood by [`RowSource::row_at_index`](crate::host::RowSource::row_at_index).
    pub index: usize,
    /// Swipe direction.
    pub direction: SwipeDirection,
}

impl SwipeRequest {
    /// Create a request.
    #[must_use]
    pub const fn new(index: usize, direction: SwipeDirection) -> Self {
        Self { index, direction }
    }

    /// Signed interchange form: `-(index + 1)` for left, `index + 1` for right.
    ///
    /// `None` if the index does not fit.
    #[must_use]
    pub fn to_signed(self) -> Option<i64> {
        let magnitude = i64::try_from(self.index).ok()?.checked_add(1)?;
        Some(match self.direction {
            SwipeDirection::Left => -magnitude,
            SwipeDirection::Right => magnitude,
        })
    }

    /// Decode the signed form. `0` decodes to `None`.
    #[must_use]
    pub fn from_signed(value: i64) -> Option<Self> {
        let direction = match value {
            0 => return None,
            v if v < 0 => SwipeDirection::Left,
            _ => SwipeDirection::Right,
        };
        let index = usize::try_from(value.unsigned_abs() - 1).ok()?;
        Some(Self { index, direction })
    }
}

/// FIFO of pending swipe requests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SwipeQueue {
    pending: VecDeque<SwipeRequest>,
}

impl SwipeQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a request.
    pub fn push(&mut self, request: SwipeRequest) {
        self.pending.push_back(request);
    }

    /// Take the oldest request, if any.
    pub fn pop(&mut self) -> Option<SwipeRequest> {
        self.pending.pop_front()
    }

    /// The oldest request without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&SwipeRequest> {
        self.pending.front()
    }

    /// Pending requests, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &SwipeRequest> + '_ {
        self.pending.iter()
    }

    /// Number of pending requests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop every pending request.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
