// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Queued programmatic swipes.
//!
//! Swipe requests made while a finger is down are queued. This demo queues
//! three of them during a drag, then lets the listener decline the drag's
//! commit, which releases the queue one request at a time.
//!
//! Run:
//! - `cargo run -p understory_demos --example swipe_queue`

use kurbo::Point;
use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_demos::{MemoryList, settle};
use understory_swipe::{
    DrainPolicy, PointerAction, PointerEvent, SwipeConfig, SwipeController, SwipeListener,
};

const ROW_HEIGHT: f64 = 48.0;
const WIDTH: f64 = 320.0;

/// Declines swipes on the first row and accepts the rest.
struct Picky;

impl SwipeListener<String> for Picky {
    fn on_swipe_left(&mut self, item: &String) -> bool {
        let accept = item != "Row 0";
        info!("  left {item}: {}", if accept { "accepted" } else { "declined" });
        accept
    }

    fn on_swipe_right(&mut self, item: &String) -> bool {
        let accept = item != "Row 0";
        info!("  right {item}: {}", if accept { "accepted" } else { "declined" });
        accept
    }

    fn on_click(&mut self, _: &String) {}

    fn on_long_click(&mut self, _: &String) {}
}

fn run(policy: DrainPolicy) {
    info!("Drain policy: {policy:?}");
    let items = (0..6).map(|i| format!("Row {i}"));
    let list = MemoryList::new(items, ROW_HEIGHT, WIDTH);
    let config = SwipeConfig::default().with_drain_policy(policy);
    let mut swipe = SwipeController::with_config(list, Picky, config);

    let y = ROW_HEIGHT / 2.0;
    swipe.handle_pointer(&PointerEvent::single(
        PointerAction::Down,
        Point::new(10.0, y),
        0,
    ));
    swipe.handle_pointer(&PointerEvent::single(
        PointerAction::Move,
        Point::new(260.0, y),
        40,
    ));

    for index in [2, 3, 4] {
        let outcome = swipe.swipe_right(index);
        info!("  swipe_right({index}) while dragging -> {outcome:?}");
    }
    info!("  pending: {}", swipe.pending_requests().len());

    swipe.handle_pointer(&PointerEvent::single(
        PointerAction::Up,
        Point::new(260.0, y),
        80,
    ));

    let now = settle(&mut swipe, 80);
    info!("  pending after t = {now}: {}", swipe.pending_requests().len());
    info!("  fronts: {:?}", swipe.host().front_positions());
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    run(DrainPolicy::OnDecline);
    run(DrainPolicy::OnCompletion);
}
