// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture session: one pointer-down → release cycle over a single row.
//!
//! ## Usage
//!
//! 1) Start a session with [`GestureSession::start`] on pointer-down.
//! 2) If the hit-test found a draggable row, [`GestureSession::attach`] it.
//! 3) On each move, ask [`GestureSession::drag_target`] where the front region
//!    should go, apply it, then record it with [`GestureSession::set_front_x`].
//! 4) On release, call [`GestureSession::finish`] and [`GestureSession::classify`].
//! 5) [`GestureSession::clear`] once the outcome has been acted on.
//!
//! The session is pure bookkeeping; it never talks to the host.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_swipe::config::SwipeConfig;
//! use understory_swipe::session::{GestureSession, Release, TouchedRow};
//! use understory_swipe::types::SwipeDirection;
//!
//! let config = SwipeConfig::default();
//! let mut session = GestureSession::default();
//! session.start(Point::new(100.0, 50.0), 0);
//! session.attach(TouchedRow {
//!     row: 0_u32,
//!     front: 1_u32,
//!     reveal_left: Some(2),
//!     reveal_right: Some(3),
//!     natural_x: 0.0,
//!     width: 200.0,
//! });
//!
//! // 100 units right: 50 are swallowed by the dead-zone.
//! let x = session.drag_target(200.0, config.reveal_threshold).unwrap();
//! assert_eq!(x, 50.0);
//! session.set_front_x(x);
//!
//! session.finish(Some(Point::new(200.0, 50.0)), 120);
//! assert_eq!(session.classify(&config), Some(Release::Commit(SwipeDirection::Right)));
//! ```

use kurbo::Point;

use crate::config::SwipeConfig;
use crate::types::{GestureState, SwipeDirection};

/// The row a session is dragging, with its geometry captured at pointer-down.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchedRow<K, R> {
    /// Row identity.
    pub row: K,
    /// Front region of the row.
    pub front: R,
    /// Left reveal region, if the row has one.
    pub reveal_left: Option<R>,
    /// Right reveal region, if the row has one.
    pub reveal_right: Option<R>,
    /// X of the front region when the session started.
    pub natural_x: f64,
    /// Width of the front region when the session started.
    pub width: f64,
}

impl<K, R: Copy> TouchedRow<K, R> {
    /// The reveal region exposed by moving in `direction`.
    pub fn reveal(&self, direction: SwipeDirection) -> Option<R> {
        match direction {
            SwipeDirection::Left => self.reveal_left,
            SwipeDirection::Right => self.reveal_right,
        }
    }
}

/// How a release resolved.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Release {
    /// The front moved past the commit distance.
    Commit(SwipeDirection),
    /// Short press within the tap slop.
    Click,
    /// Press held past the long-press time within the tap slop.
    LongClick,
    /// Neither a commit nor a tap.
    Reset,
}

/// State of the current pointer-tracking session.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureSession<K, R> {
    down_pos: Option<Point>,
    down_time: Option<u64>,
    up_pos: Option<Point>,
    up_time: Option<u64>,
    touched: Option<TouchedRow<K, R>>,
    last_x: f64,
    dragging: bool,
}

impl<K, R> Default for GestureSession<K, R> {
    fn default() -> Self {
        Self {
            down_pos: None,
            down_time: None,
            up_pos: None,
            up_time: None,
            touched: None,
            last_x: 0.0,
            dragging: false,
        }
    }
}

impl<K: Copy, R: Copy> GestureSession<K, R> {
    /// Begin a session at `pos`, overwriting any previous one.
    pub fn start(&mut self, pos: Point, time: u64) {
        *self = Self::default();
        self.down_pos = Some(pos);
        self.down_time = Some(time);
    }

    /// Attach the row under the pointer.
    ///
    /// The last front X starts at the natural X, so a release without any
    /// drag never commits.
    pub fn attach(&mut self, touched: TouchedRow<K, R>) {
        self.last_x = touched.natural_x;
        self.touched = Some(touched);
    }

    /// Returns `true` between pointer-down and [`clear`](Self::clear).
    pub fn is_active(&self) -> bool {
        self.down_time.is_some()
    }

    /// The attached row, if any.
    pub fn touched(&self) -> Option<&TouchedRow<K, R>> {
        self.touched.as_ref()
    }

    /// Where the pointer went down.
    pub fn down_pos(&self) -> Option<Point> {
        self.down_pos
    }

    /// Last front X applied during the drag (natural X if never dragged).
    pub fn last_x(&self) -> f64 {
        self.last_x
    }

    /// Front X for a pointer at horizontal position `x`, or `None` while the
    /// movement stays inside the dead-zone.
    ///
    /// Movement in a direction only counts if the row has a reveal region for
    /// it. The dead-zone is subtracted so the front starts moving from the
    /// dead-zone boundary, not from zero.
    pub fn drag_target(&self, x: f64, threshold: f64) -> Option<f64> {
        let down = self.down_pos?;
        let touched = self.touched.as_ref()?;
        let dx = x - down.x;
        let direction = SwipeDirection::of(dx)?;
        touched.reveal(direction)?;
        if dx * direction.sign() <= threshold {
            return None;
        }
        Some(touched.natural_x + dx - threshold * direction.sign())
    }

    /// Record the front X applied to the host.
    pub fn set_front_x(&mut self, x: f64) {
        self.last_x = x;
        self.dragging = true;
    }

    /// Record the release sample. `pos` is `None` when the platform gave no position.
    pub fn finish(&mut self, pos: Option<Point>, time: u64) {
        self.up_pos = pos;
        self.up_time = Some(time);
    }

    /// Classify the release. `None` when no row is attached.
    pub fn classify(&self, config: &SwipeConfig) -> Option<Release> {
        let touched = self.touched.as_ref()?;
        let commit = config.commit_distance(touched.width);
        if self.last_x > touched.natural_x + commit {
            return Some(Release::Commit(SwipeDirection::Right));
        }
        if self.last_x < touched.natural_x - commit {
            return Some(Release::Commit(SwipeDirection::Left));
        }

        let (Some(down), Some(up)) = (self.down_pos, self.up_pos) else {
            return Some(Release::Reset);
        };
        let moved = up - down;
        let slop = -config.tap_slop..=config.tap_slop;
        if !slop.contains(&moved.x) || !slop.contains(&moved.y) {
            return Some(Release::Reset);
        }

        let held = self
            .up_time
            .unwrap_or_default()
            .saturating_sub(self.down_time.unwrap_or_default());
        if held > config.long_press_ms {
            Some(Release::LongClick)
        } else {
            Some(Release::Click)
        }
    }

    /// Where the session is.
    pub fn state(&self) -> GestureState {
        match (self.down_time, &self.touched) {
            (None, _) => GestureState::Idle,
            (Some(_), None) => GestureState::Pressed,
            (Some(_), Some(_)) if self.dragging => GestureState::Dragging,
            (Some(_), Some(_)) => GestureState::Tracking,
        }
    }

    /// End the session, zeroing positions and releasing the row.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touched(natural_x: f64, left: bool, right: bool) -> TouchedRow<u32, u32> {
        TouchedRow {
            row: 1,
            front: 10,
            reveal_left: left.then_some(11),
            reveal_right: right.then_some(12),
            natural_x,
            width: 200.0,
        }
    }

    fn session_at(x: f64, y: f64, time: u64) -> GestureSession<u32, u32> {
        let mut s = GestureSession::default();
        s.start(Point::new(x, y), time);
        s.attach(touched(0.0, true, true));
        s
    }

    #[test]
    fn new_session_is_idle() {
        let s = GestureSession::<u32, u32>::default();
        assert!(!s.is_active());
        assert_eq!(s.state(), GestureState::Idle);
        assert!(s.touched().is_none());
    }

    #[test]
    fn start_without_row_is_pressed() {
        let mut s = GestureSession::<u32, u32>::default();
        s.start(Point::new(1.0, 2.0), 9);
        assert!(s.is_active());
        assert_eq!(s.state(), GestureState::Pressed);
        assert_eq!(s.drag_target(500.0, 50.0), None);
        assert_eq!(s.classify(&SwipeConfig::default()), None);
    }

    #[test]
    fn attach_initializes_last_x_to_natural() {
        let mut s = GestureSession::default();
        s.start(Point::ZERO, 0);
        s.attach(touched(16.0, true, true));
        assert_eq!(s.last_x(), 16.0);
        assert_eq!(s.state(), GestureState::Tracking);
    }

    #[test]
    fn dead_zone_swallows_small_moves() {
        let s = session_at(100.0, 50.0, 0);
        assert_eq!(s.drag_target(150.0, 50.0), None);
        assert_eq!(s.drag_target(50.0, 50.0), None);
        assert_eq!(s.drag_target(100.0, 50.0), None);
    }

    #[test]
    fn drag_target_starts_at_dead_zone_boundary() {
        let s = session_at(100.0, 50.0, 0);
        assert_eq!(s.drag_target(160.0, 50.0), Some(10.0));
        assert_eq!(s.drag_target(30.0, 50.0), Some(-20.0));
    }

    #[test]
    fn missing_reveal_blocks_that_direction() {
        let mut s = GestureSession::default();
        s.start(Point::new(100.0, 0.0), 0);
        s.attach(touched(0.0, true, false));
        assert_eq!(s.drag_target(300.0, 50.0), None);
        assert_eq!(s.drag_target(-100.0, 50.0), Some(-150.0));
    }

    #[test]
    fn set_front_x_marks_dragging() {
        let mut s = session_at(0.0, 0.0, 0);
        s.set_front_x(42.0);
        assert_eq!(s.state(), GestureState::Dragging);
        assert_eq!(s.last_x(), 42.0);
    }

    #[test]
    fn classify_commit_right_and_left() {
        let config = SwipeConfig::default();
        let mut s = session_at(0.0, 0.0, 0);
        s.set_front_x(50.0);
        s.finish(Some(Point::new(100.0, 0.0)), 10);
        assert_eq!(s.classify(&config), Some(Release::Commit(SwipeDirection::Right)));

        s.set_front_x(-41.0);
        assert_eq!(s.classify(&config), Some(Release::Commit(SwipeDirection::Left)));

        // Exactly at the commit distance does not commit.
        s.set_front_x(40.0);
        assert_eq!(s.classify(&config), Some(Release::Reset));
    }

    #[test]
    fn classify_short_press_as_click() {
        let mut s = session_at(100.0, 50.0, 1000);
        s.finish(Some(Point::new(103.0, 48.0)), 1200);
        assert_eq!(s.classify(&SwipeConfig::default()), Some(Release::Click));
    }

    #[test]
    fn classify_long_press() {
        let mut s = session_at(100.0, 50.0, 1000);
        s.finish(Some(Point::new(100.0, 50.0)), 1800);
        assert_eq!(s.classify(&SwipeConfig::default()), Some(Release::LongClick));
    }

    #[test]
    fn press_of_exactly_long_press_time_is_click() {
        let mut s = session_at(0.0, 0.0, 0);
        s.finish(Some(Point::ZERO), 500);
        assert_eq!(s.classify(&SwipeConfig::default()), Some(Release::Click));
    }

    #[test]
    fn movement_beyond_slop_resets_silently() {
        let mut s = session_at(100.0, 50.0, 0);
        s.set_front_x(10.0);
        s.finish(Some(Point::new(160.0, 50.0)), 200);
        assert_eq!(s.classify(&SwipeConfig::default()), Some(Release::Reset));

        let mut s = session_at(100.0, 50.0, 0);
        s.finish(Some(Point::new(100.0, 56.0)), 200);
        assert_eq!(s.classify(&SwipeConfig::default()), Some(Release::Reset));
    }

    #[test]
    fn release_without_position_is_not_a_tap() {
        let mut s = session_at(0.0, 0.0, 0);
        s.finish(None, 10);
        assert_eq!(s.classify(&SwipeConfig::default()), Some(Release::Reset));
    }

    #[test]
    fn clear_resets_everything() {
        let mut s = session_at(100.0, 50.0, 1000);
        s.set_front_x(80.0);
        s.finish(Some(Point::ZERO), 1100);
        s.clear();
        assert_eq!(s, GestureSession::default());
        assert_eq!(s.state(), GestureState::Idle);
    }

    #[test]
    fn start_overwrites_previous_session() {
        let mut s = session_at(0.0, 0.0, 0);
        s.set_front_x(99.0);
        s.start(Point::new(5.0, 5.0), 50);
        assert_eq!(s.down_pos(), Some(Point::new(5.0, 5.0)));
        assert!(s.touched().is_none());
        assert_eq!(s.last_x(), 0.0);
    }
}
