// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_swipe --heading-base-level=0

//! Understory Swipe: swipe-to-action gestures for virtualized list rows.
//!
//! This crate turns raw pointer events over a list into per-row actions:
//! **swipe left**, **swipe right**, **click**, and **long click**. It tracks the
//! pointer, moves the row's front region while revealing what sits behind it,
//! decides on release whether the swipe committed, and drives a two-stage
//! commit → return animation through the host.
//!
//! The core pieces are:
//!
//! - [`RowBinding`]: a row's front region, optional left/right reveal regions,
//!   and its item payload, resolved by tag or by position.
//! - [`RowSource`] and [`RegionSurface`]: what the controller needs from the
//!   list (hit-testing, index lookup) and from the view toolkit (geometry,
//!   visibility, animations).
//! - [`SwipeListener`]: the application callbacks.
//! - [`SwipeController`]: the state machine that ties them together, including
//!   the lock set of animating rows and the queue of programmatic swipes made
//!   while a pointer is down.
//!
//! The crate does not render, scroll, or own any views. Animations are started
//! through the host and their completion is reported back with
//! [`SwipeController::on_animation_event`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_swipe::{
//!     Animation, AnimationEvent, GestureOutcome, PointerAction, PointerEvent, RegionSurface,
//!     RowBinding, RowSource, SwipeController, SwipeListener,
//! };
//!
//! // One row, 100 units tall, with a front (0) and a right reveal region (1).
//! struct List {
//!     row: RowBinding<u8, &'static str>,
//!     front_x: f64,
//!     started: Vec<Animation>,
//! }
//!
//! impl RowSource for List {
//!     type Row = u8;
//!     type Region = u8;
//!     type Item = &'static str;
//!     fn row_at_point(&self, pos: Point) -> Option<u8> { (pos.y < 100.0).then_some(0) }
//!     fn row_at_index(&self, index: usize) -> Option<u8> { (index == 0).then_some(0) }
//!     fn child_count(&self) -> usize { 1 }
//!     fn binding(&self, _: u8) -> Option<&RowBinding<u8, &'static str>> { Some(&self.row) }
//! }
//!
//! impl RegionSurface<u8> for List {
//!     fn region_x(&self, _: u8) -> f64 { self.front_x }
//!     fn region_width(&self, _: u8) -> f64 { 200.0 }
//!     fn set_region_x(&mut self, _: u8, x: f64) { self.front_x = x; }
//!     fn set_region_visible(&mut self, _: u8, _: bool) {}
//!     fn animate_region_x(&mut self, _: u8, animation: Animation) { self.started.push(animation); }
//! }
//!
//! #[derive(Default)]
//! struct Log(Vec<String>);
//!
//! impl SwipeListener<&'static str> for Log {
//!     fn on_swipe_left(&mut self, item: &&'static str) -> bool { self.0.push(format!("left {item}")); true }
//!     fn on_swipe_right(&mut self, item: &&'static str) -> bool { self.0.push(format!("right {item}")); true }
//!     fn on_click(&mut self, item: &&'static str) { self.0.push(format!("click {item}")); }
//!     fn on_long_click(&mut self, item: &&'static str) { self.0.push(format!("hold {item}")); }
//! }
//!
//! let list = List {
//!     row: RowBinding::from_regions(0, None, Some(1), "inbox").unwrap(),
//!     front_x: 0.0,
//!     started: Vec::new(),
//! };
//! let mut swipe = SwipeController::new(list, Log::default());
//!
//! // Drag 150 units right: 50 are dead-zone, so the front ends at x = 100.
//! swipe.handle_pointer(&PointerEvent::single(PointerAction::Down, Point::new(20.0, 50.0), 0));
//! swipe.handle_pointer(&PointerEvent::single(PointerAction::Move, Point::new(170.0, 50.0), 16));
//! let outcome = swipe.handle_pointer(&PointerEvent::single(PointerAction::Up, Point::new(170.0, 50.0), 32));
//! assert!(matches!(outcome, GestureOutcome::Committed(_)));
//!
//! // The host finishes the commit animation; the listener accepts it.
//! let commit = swipe.host().started[0];
//! swipe.on_animation_event(commit.id, AnimationEvent::Finished);
//! assert_eq!(swipe.listener().0, ["right inbox"]);
//!
//! // Accepting sends the row back to its natural position.
//! assert_eq!(swipe.host().started[1].target_x, 0.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forward `std` to Kurbo and `tracing`.
//! - `libm`: use Kurbo's `libm` backend in `no_std` builds.
//!
//! Diagnostics are emitted through `tracing`; install a subscriber to see them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod animation;
pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod listener;
pub mod pointer;
pub mod queue;
pub mod row;
pub mod session;
pub mod types;

pub use animation::{Animation, AnimationEvent, AnimationId, Easing, LockSet, RowPhase};
pub use config::{DrainPolicy, SwipeConfig};
pub use controller::SwipeController;
pub use error::BindError;
pub use host::{RegionSurface, RowSource};
pub use listener::SwipeListener;
pub use pointer::{ActivePointer, PointerAction, PointerEvent, PointerId, PointerSample};
pub use queue::{SwipeQueue, SwipeRequest};
pub use row::{RegionTag, RowBinding, RowContainer, TaggedChild};
pub use session::{GestureSession, Release, TouchedRow};
pub use types::{GestureOutcome, GestureState, RequestOutcome, SwipeDirection};
