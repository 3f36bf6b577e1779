// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe basics.
//!
//! Drive a ten-row in-memory list with synthetic pointer events: a drag that
//! commits a swipe, a short tap, a long press, and a drag that falls short.
//!
//! Run:
//! - `cargo run -p understory_demos --example swipe_basics`
//! - `RUST_LOG=understory_swipe=trace cargo run -p understory_demos --example swipe_basics`

use kurbo::Point;
use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_demos::{MemoryList, settle};
use understory_swipe::{PointerAction, PointerEvent, SwipeController, SwipeListener};

const ROW_HEIGHT: f64 = 48.0;
const WIDTH: f64 = 320.0;

/// Accepts every swipe and prints what happened.
struct Printer;

impl SwipeListener<String> for Printer {
    fn on_swipe_left(&mut self, item: &String) -> bool {
        info!("  swiped left: {item}");
        true
    }

    fn on_swipe_right(&mut self, item: &String) -> bool {
        info!("  swiped right: {item}");
        true
    }

    fn on_click(&mut self, item: &String) {
        info!("  clicked: {item}");
    }

    fn on_long_click(&mut self, item: &String) {
        info!("  long clicked: {item}");
    }
}

fn row_center(row: usize) -> f64 {
    ROW_HEIGHT * row as f64 + ROW_HEIGHT / 2.0
}

fn gesture(
    swipe: &mut SwipeController<MemoryList, Printer>,
    row: usize,
    from_x: f64,
    to_x: f64,
    start: u64,
    held: u64,
) -> u64 {
    let y = row_center(row);
    let down = PointerEvent::single(PointerAction::Down, Point::new(from_x, y), start);
    let mv = PointerEvent::single(PointerAction::Move, Point::new(to_x, y), start + held / 2);
    let up = PointerEvent::single(PointerAction::Up, Point::new(to_x, y), start + held);
    swipe.handle_pointer(&down);
    swipe.handle_pointer(&mv);
    let outcome = swipe.handle_pointer(&up);
    info!("  release -> {outcome:?}");
    settle(swipe, start + held)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let items = (0..10).map(|i| format!("Item {i}"));
    let list = MemoryList::new(items, ROW_HEIGHT, WIDTH);
    let mut swipe = SwipeController::new(list, Printer);

    info!("Drag row 2 well past the threshold to the right:");
    let t = gesture(&mut swipe, 2, 10.0, 250.0, 0, 120);
    info!("  fronts: {:?}", swipe.host().front_positions());

    info!("Drag row 5 to the left:");
    let t = gesture(&mut swipe, 5, 300.0, 40.0, t + 100, 120);
    info!("  fronts: {:?}", swipe.host().front_positions());

    info!("Tap row 0:");
    let t = gesture(&mut swipe, 0, 100.0, 102.0, t + 100, 80);

    info!("Press and hold row 7:");
    let t = gesture(&mut swipe, 7, 100.0, 100.0, t + 100, 800);

    info!("Drag row 3 only a little, so it springs back:");
    let t = gesture(&mut swipe, 3, 100.0, 140.0, t + 100, 120);
    info!("  fronts: {:?}", swipe.host().front_positions());

    info!("Programmatic swipe of row 9 at t = {t}:");
    let outcome = swipe.swipe_left(9);
    info!("  request -> {outcome:?}");
    settle(&mut swipe, t);
    info!("  fronts: {:?}", swipe.host().front_positions());
}
