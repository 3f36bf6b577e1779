// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer events and primary-pointer tracking.
//!
//! A [`PointerEvent`] carries every pointer currently in contact, in the
//! platform's pointer-index order, together with the action that triggered it.
//! [`ActivePointer`] remembers which pointer id drives the gesture and hands
//! off to another pointer when the primary one lifts while others stay down.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_swipe::pointer::{ActivePointer, PointerAction, PointerEvent, PointerId, PointerSample};
//!
//! let a = PointerSample::new(PointerId(1), Point::new(10.0, 0.0));
//! let b = PointerSample::new(PointerId(2), Point::new(40.0, 0.0));
//!
//! let mut active = ActivePointer::default();
//! active.press(&PointerEvent::new(PointerAction::Down, [a], 0));
//! assert_eq!(active.id(), Some(PointerId(1)));
//!
//! // The primary finger lifts while the second stays down.
//! active.lift_secondary(&PointerEvent::new(PointerAction::SecondaryUp { index: 0 }, [a, b], 5));
//! assert_eq!(active.id(), Some(PointerId(2)));
//! ```

use kurbo::Point;
use smallvec::SmallVec;

/// Platform pointer identifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

/// One pointer's position within an event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerSample {
    /// Pointer id.
    pub id: PointerId,
    /// Position in list coordinates.
    pub pos: Point,
}

impl PointerSample {
    /// Create a sample.
    #[must_use]
    pub const fn new(id: PointerId, pos: Point) -> Self {
        Self { id, pos }
    }
}

/// What happened to the pointers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointerAction {
    /// The first pointer touched down.
    Down,
    /// One or more pointers moved.
    Move,
    /// The last pointer lifted.
    Up,
    /// A pointer lifted while others remain down; `index` points into the samples.
    SecondaryUp {
        /// Index of the lifted pointer in [`PointerEvent::pointers`].
        index: usize,
    },
    /// The platform aborted the gesture.
    Cancel,
}

/// A pointer event as delivered by the platform.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// The triggering action.
    pub action: PointerAction,
    /// Pointers in contact, in pointer-index order.
    pub pointers: SmallVec<[PointerSample; 2]>,
    /// Event timestamp in milliseconds.
    pub time: u64,
}

impl PointerEvent {
    /// Create an event from its samples.
    pub fn new(
        action: PointerAction,
        pointers: impl IntoIterator<Item = PointerSample>,
        time: u64,
    ) -> Self {
        Self {
            action,
            pointers: pointers.into_iter().collect(),
            time,
        }
    }

    /// Single-pointer event with pointer id `0`.
    #[must_use]
    pub fn single(action: PointerAction, pos: Point, time: u64) -> Self {
        Self::new(action, [PointerSample::new(PointerId(0), pos)], time)
    }

    /// Sample for pointer `id`, if it is part of this event.
    #[must_use]
    pub fn find(&self, id: PointerId) -> Option<&PointerSample> {
        self.pointers.iter().find(|p| p.id == id)
    }

    /// The first sample (pointer index 0).
    #[must_use]
    pub fn first(&self) -> Option<&PointerSample> {
        self.pointers.first()
    }
}

/// Tracks the pointer that drives the current gesture.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivePointer {
    id: Option<PointerId>,
}

impl ActivePointer {
    /// The primary pointer id, if a gesture is in progress.
    #[must_use]
    pub fn id(&self) -> Option<PointerId> {
        self.id
    }

    /// Adopt the first pointer of a down event. Returns its sample.
    pub fn press(&mut self, event: &PointerEvent) -> Option<PointerSample> {
        let first = event.first().copied();
        self.id = first.map(|s| s.id);
        first
    }

    /// Sample of the primary pointer within `event`.
    #[must_use]
    pub fn locate(&self, event: &PointerEvent) -> Option<PointerSample> {
        self.id.and_then(|id| event.find(id)).copied()
    }

    /// Handle a secondary pointer lifting.
    ///
    /// If the lifted pointer was the primary one, the pointer at index `1`
    /// (or `0` when the lifted pointer was at `1` or beyond) becomes primary.
    pub fn lift_secondary(&mut self, event: &PointerEvent) {
        let PointerAction::SecondaryUp { index } = event.action else {
            return;
        };
        let Some(lifted) = event.pointers.get(index) else {
            return;
        };
        if Some(lifted.id) == self.id {
            let replacement = if index == 0 { 1 } else { 0 };
            self.id = event.pointers.get(replacement).map(|s| s.id);
        }
    }

    /// Forget the primary pointer.
    pub fn release(&mut self) {
        self.id = None;
    }
}
