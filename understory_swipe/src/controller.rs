// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The swipe controller: pointer events in, row animations and listener calls out.
//!
//! ## Lifecycle
//!
//! - **Down**: remember the primary pointer and hit-test the list. A row that is
//!   currently animating is not draggable.
//! - **Move**: once the horizontal travel leaves the dead-zone in a direction the
//!   row has a reveal region for, the front region follows the pointer and the
//!   matching reveal region is shown.
//! - **Up / Cancel**: the last front X decides. Past `width / ratio` either way
//!   commits; otherwise a press that stayed within the tap slop is a click or a
//!   long click, and the row animates back to its natural X.
//! - **Commit finished**: the listener is asked. Accepting returns the row to
//!   its natural X; declining leaves it and runs one queued programmatic swipe.
//!
//! Programmatic swipes requested while a pointer is down are queued instead of
//! racing the live session.
//!
//! Everything runs on the caller's thread. Animation progress arrives later via
//! [`SwipeController::on_animation_event`].

use core::fmt;

use hashbrown::HashMap;
use kurbo::Point;
use tracing::{debug, trace};

use crate::animation::{
    Animation, AnimationEvent, AnimationId, Continuation, Easing, InFlight, LockSet, RowPhase,
};
use crate::config::{DrainPolicy, SwipeConfig};
use crate::host::{RegionSurface, RowSource};
use crate::listener::SwipeListener;
use crate::pointer::{ActivePointer, PointerAction, PointerEvent};
use crate::queue::{SwipeQueue, SwipeRequest};
use crate::session::{GestureSession, Release, TouchedRow};
use crate::types::{GestureOutcome, GestureState, RequestOutcome, SwipeDirection};

/// Recognizes swipes, taps, and long presses on the rows of one list.
///
/// The controller owns the host (list + view toolkit) and the listener. Feed it
/// pointer events with [`handle_pointer`](Self::handle_pointer) and animation
/// lifecycle events with [`on_animation_event`](Self::on_animation_event).
pub struct SwipeController<H: RowSource, L> {
    host: H,
    listener: L,
    config: SwipeConfig,
    pointer: ActivePointer,
    session: GestureSession<H::Row, H::Region>,
    locks: LockSet<H::Row>,
    in_flight: HashMap<AnimationId, InFlight<H::Row, H::Region>>,
    queue: SwipeQueue,
    next_id: u64,
}

impl<H: RowSource, L> fmt::Debug for SwipeController<H, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeController")
            .field("config", &self.config)
            .field("pointer", &self.pointer)
            .field("session", &self.session)
            .field("locks", &self.locks)
            .field("in_flight", &self.in_flight)
            .field("queue", &self.queue)
            .finish_non_exhaustive()
    }
}

impl<H, L> SwipeController<H, L>
where
    H: RowSource + RegionSurface<H::Region>,
    L: SwipeListener<H::Item>,
{
    /// Create a controller with the default configuration.
    pub fn new(host: H, listener: L) -> Self {
        Self::with_config(host, listener, SwipeConfig::default())
    }

    /// Create a controller with `config`.
    pub fn with_config(host: H, listener: L, config: SwipeConfig) -> Self {
        Self {
            host,
            listener,
            config,
            pointer: ActivePointer::default(),
            session: GestureSession::default(),
            locks: LockSet::new(),
            in_flight: HashMap::new(),
            queue: SwipeQueue::new(),
            next_id: 0,
        }
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The listener.
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// The listener, mutably.
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// The configuration.
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Give back the host and listener.
    pub fn into_parts(self) -> (H, L) {
        (self.host, self.listener)
    }

    /// Where the pointer-tracking session is.
    pub fn state(&self) -> GestureState {
        self.session.state()
    }

    /// Returns `true` while `row` is animating and cannot be dragged.
    pub fn is_locked(&self, row: H::Row) -> bool {
        self.locks.contains(row)
    }

    /// What `row` is animating toward, if anything.
    pub fn row_phase(&self, row: H::Row) -> Option<RowPhase> {
        self.in_flight
            .values()
            .find(|f| f.row == row)
            .map(|f| f.continuation.phase())
    }

    /// Programmatic swipes waiting for the live session to end.
    pub fn pending_requests(&self) -> &SwipeQueue {
        &self.queue
    }

    /// Number of animations started and not yet finished or cancelled.
    pub fn animations_in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Process one pointer event.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> GestureOutcome {
        match event.action {
            PointerAction::Down => self.pointer_down(event),
            PointerAction::Move => self.pointer_move(event),
            PointerAction::SecondaryUp { .. } => {
                self.pointer.lift_secondary(event);
                GestureOutcome::Ignored
            }
            PointerAction::Up | PointerAction::Cancel => self.pointer_up(event),
        }
    }

    /// Swipe the row at `index` to the left.
    pub fn swipe_left(&mut self, index: usize) -> RequestOutcome {
        self.request_swipe(index, SwipeDirection::Left)
    }

    /// Swipe the row at `index` to the right.
    pub fn swipe_right(&mut self, index: usize) -> RequestOutcome {
        self.request_swipe(index, SwipeDirection::Right)
    }

    /// Swipe the row at `index` in `direction`, bypassing drag classification.
    ///
    /// While a pointer is down the request is queued. It runs after a later
    /// commit completes, as governed by [`DrainPolicy`].
    pub fn request_swipe(&mut self, index: usize, direction: SwipeDirection) -> RequestOutcome {
        let request = SwipeRequest::new(index, direction);
        if self.session.is_active() {
            debug!(index, ?direction, "session live; queueing swipe");
            self.queue.push(request);
            return RequestOutcome::Queued;
        }
        self.start_request(request)
    }

    /// Report an animation lifecycle event from the host.
    ///
    /// Events for ids the controller does not know about are ignored.
    pub fn on_animation_event(&mut self, id: AnimationId, event: AnimationEvent) {
        match event {
            AnimationEvent::Started => {
                if let Some(f) = self.in_flight.get(&id) {
                    self.locks.lock(f.row);
                }
            }
            AnimationEvent::Repeated => {
                if let Some(f) = self.in_flight.get(&id) {
                    self.locks.unlock(f.row);
                }
            }
            AnimationEvent::Cancelled => {
                if let Some(f) = self.in_flight.remove(&id) {
                    debug!(row = ?f.row, ?id, "animation cancelled");
                    self.locks.unlock(f.row);
                }
            }
            AnimationEvent::Finished => {
                let Some(f) = self.in_flight.remove(&id) else {
                    trace!(?id, "finish for unknown animation");
                    return;
                };
                self.locks.unlock(f.row);
                self.complete(f);
            }
        }
    }

    fn pointer_down(&mut self, event: &PointerEvent) -> GestureOutcome {
        let Some(sample) = self.pointer.press(event) else {
            trace!("pointer down without samples");
            return GestureOutcome::Ignored;
        };
        self.session.start(sample.pos, event.time);

        let Some(touched) = self.resolve_touched(sample.pos) else {
            return GestureOutcome::Pressed;
        };
        debug!(row = ?touched.row, natural_x = touched.natural_x, "swipe session started");
        self.session.attach(touched);
        GestureOutcome::Tracking
    }

    fn pointer_move(&mut self, event: &PointerEvent) -> GestureOutcome {
        let Some(sample) = self.pointer.locate(event) else {
            return GestureOutcome::Ignored;
        };
        let Some(touched) = self.session.touched().copied() else {
            return GestureOutcome::Ignored;
        };
        let Some(x) = self
            .session
            .drag_target(sample.pos.x, self.config.reveal_threshold)
        else {
            return GestureOutcome::Tracking;
        };

        self.host.set_region_x(touched.front, x);
        if let Some(direction) = SwipeDirection::of(x - touched.natural_x) {
            self.show_reveal(&touched, direction);
        }
        self.session.set_front_x(x);
        trace!(row = ?touched.row, x, "front follows pointer");
        GestureOutcome::Dragged { x }
    }

    fn pointer_up(&mut self, event: &PointerEvent) -> GestureOutcome {
        let sample = self
            .pointer
            .locate(event)
            .or_else(|| event.first().copied());
        self.pointer.release();
        self.session.finish(sample.map(|s| s.pos), event.time);

        let outcome = match (
            self.session.touched().copied(),
            self.session.classify(&self.config),
        ) {
            (Some(touched), Some(release)) => self.resolve(&touched, release),
            _ => GestureOutcome::Ignored,
        };
        self.session.clear();
        outcome
    }

    fn resolve(
        &mut self,
        touched: &TouchedRow<H::Row, H::Region>,
        release: Release,
    ) -> GestureOutcome {
        debug!(row = ?touched.row, ?release, "release classified");
        match release {
            Release::Commit(direction) => {
                self.start_commit(touched, direction);
                GestureOutcome::Committed(direction)
            }
            Release::Click => {
                if let Some(binding) = self.host.binding(touched.row) {
                    self.listener.on_click(&binding.item);
                }
                self.start_reset(touched.row, touched.front, touched.natural_x, false);
                GestureOutcome::Clicked
            }
            Release::LongClick => {
                if let Some(binding) = self.host.binding(touched.row) {
                    self.listener.on_long_click(&binding.item);
                }
                self.start_reset(touched.row, touched.front, touched.natural_x, false);
                GestureOutcome::LongClicked
            }
            Release::Reset => {
                self.start_reset(touched.row, touched.front, touched.natural_x, false);
                GestureOutcome::Reset
            }
        }
    }

    fn resolve_touched(&self, pos: Point) -> Option<TouchedRow<H::Row, H::Region>> {
        let row = self.host.row_at_point(pos)?;
        if self.locks.contains(row) {
            trace!(?row, "row is animating; not draggable");
            return None;
        }
        self.touched_row(row)
    }

    fn touched_row(&self, row: H::Row) -> Option<TouchedRow<H::Row, H::Region>> {
        let binding = self.host.binding(row)?;
        let front = binding.front;
        Some(TouchedRow {
            row,
            front,
            reveal_left: binding.reveal_left,
            reveal_right: binding.reveal_right,
            natural_x: self.host.region_x(front),
            width: self.host.region_width(front),
        })
    }

    fn show_reveal(&mut self, touched: &TouchedRow<H::Row, H::Region>, direction: SwipeDirection) {
        let (shown, hidden) = match direction {
            SwipeDirection::Left => (touched.reveal_left, touched.reveal_right),
            SwipeDirection::Right => (touched.reveal_right, touched.reveal_left),
        };
        if let Some(region) = hidden {
            self.host.set_region_visible(region, false);
        }
        if let Some(region) = shown {
            self.host.set_region_visible(region, true);
        }
    }

    fn start_request(&mut self, request: SwipeRequest) -> RequestOutcome {
        if request.index >= self.host.child_count() {
            trace!(?request, "swipe index out of range");
            return RequestOutcome::Ignored;
        }
        let Some(row) = self.host.row_at_index(request.index) else {
            trace!(?request, "no row realized at index");
            return RequestOutcome::Ignored;
        };
        if self.locks.contains(row) {
            debug!(?row, ?request, "row is animating; dropping swipe");
            return RequestOutcome::Ignored;
        }
        let Some(touched) = self.touched_row(row) else {
            return RequestOutcome::Ignored;
        };
        self.show_reveal(&touched, request.direction);
        RequestOutcome::Started(self.start_commit(&touched, request.direction))
    }

    fn start_commit(
        &mut self,
        touched: &TouchedRow<H::Row, H::Region>,
        direction: SwipeDirection,
    ) -> AnimationId {
        let animation = Animation {
            id: self.next_animation_id(),
            target_x: touched.natural_x + direction.sign() * touched.width,
            duration_ms: self.config.commit_duration_ms,
            easing: Easing::Accelerate,
        };
        debug!(row = ?touched.row, ?direction, id = ?animation.id, "commit animation started");
        self.launch(
            InFlight {
                row: touched.row,
                front: touched.front,
                natural_x: touched.natural_x,
                continuation: Continuation::Commit(direction),
            },
            animation,
        );
        animation.id
    }

    fn start_reset(&mut self, row: H::Row, front: H::Region, natural_x: f64, drain: bool) {
        let animation = Animation {
            id: self.next_animation_id(),
            target_x: natural_x,
            duration_ms: self.config.reset_duration_ms,
            easing: Easing::AccelerateDecelerate,
        };
        debug!(?row, id = ?animation.id, "reset animation started");
        self.launch(
            InFlight {
                row,
                front,
                natural_x,
                continuation: Continuation::Reset { drain },
            },
            animation,
        );
    }

    fn launch(&mut self, flight: InFlight<H::Row, H::Region>, animation: Animation) {
        self.locks.lock(flight.row);
        self.in_flight.insert(animation.id, flight);
        self.host.animate_region_x(flight.front, animation);
    }

    fn complete(&mut self, flight: InFlight<H::Row, H::Region>) {
        let direction = match flight.continuation {
            Continuation::Reset { drain } => {
                if drain {
                    self.drain_one();
                }
                return;
            }
            Continuation::Commit(direction) => direction,
        };

        let accepted = match self.host.binding(flight.row) {
            Some(binding) => match direction {
                SwipeDirection::Left => self.listener.on_swipe_left(&binding.item),
                SwipeDirection::Right => self.listener.on_swipe_right(&binding.item),
            },
            None => {
                debug!(row = ?flight.row, "row unbound before commit finished");
                false
            }
        };
        debug!(row = ?flight.row, ?direction, accepted, "swipe listener answered");

        if accepted {
            let drain = self.config.drain_policy == DrainPolicy::OnCompletion;
            self.start_reset(flight.row, flight.front, flight.natural_x, drain);
        } else {
            self.drain_one();
        }
    }

    fn drain_one(&mut self) {
        if self.session.is_active() {
            trace!(pending = self.queue.len(), "session live; queue left as is");
            return;
        }
        let Some(request) = self.queue.pop() else {
            return;
        };
        debug!(?request, remaining = self.queue.len(), "running queued swipe");
        self.start_request(request);
    }

    fn next_animation_id(&mut self) -> AnimationId {
        let id = AnimationId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }
}
