// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scaffolding for the Understory demos.
//!
//! [`MemoryList`] is a small in-memory list host for `understory_swipe`: fixed
//! height rows, a flat region table, and a stepping animation driver so the
//! demos can run without a real toolkit.

use std::collections::HashMap;

use kurbo::Point;
use tracing::debug;
use understory_swipe::{
    Animation, AnimationEvent, AnimationId, RegionSurface, RegionTag, RowBinding, RowSource,
    SwipeController, SwipeListener, TaggedChild,
};

/// Region state kept by [`MemoryList`].
#[derive(Clone, Debug)]
pub struct RegionState {
    /// Current X.
    pub x: f64,
    /// Width.
    pub width: f64,
    /// Visibility.
    pub visible: bool,
}

#[derive(Clone, Debug)]
struct Running {
    region: u32,
    from_x: f64,
    started_at: u64,
    animation: Animation,
    announced: bool,
}

/// A list of equally tall rows, each laid out as reveal-right, reveal-left,
/// front (back to front).
#[derive(Debug)]
pub struct MemoryList {
    row_height: f64,
    rows: Vec<RowBinding<u32, String>>,
    regions: HashMap<u32, RegionState>,
    running: Vec<Running>,
    cancelled: Vec<AnimationId>,
    now: u64,
}

impl MemoryList {
    /// One row per item, `row_height` tall and `width` wide.
    ///
    /// Odd rows tag their regions; even rows rely on positional fallback.
    ///
    /// # Panics
    ///
    /// Panics if the list has more than `u32::MAX / 3` items.
    pub fn new(items: impl IntoIterator<Item = String>, row_height: f64, width: f64) -> Self {
        let mut rows = Vec::new();
        let mut regions = HashMap::new();
        for (i, item) in items.into_iter().enumerate() {
            let base = u32::try_from(i * 3).expect("demo lists are small");
            let children = if i % 2 == 1 {
                [
                    TaggedChild::tagged(RegionTag::RevealRight, base),
                    TaggedChild::tagged(RegionTag::RevealLeft, base + 1),
                    TaggedChild::tagged(RegionTag::Front, base + 2),
                ]
            } else {
                [
                    TaggedChild::untagged(base),
                    TaggedChild::untagged(base + 1),
                    TaggedChild::untagged(base + 2),
                ]
            };
            for child in &children {
                regions.insert(
                    child.region,
                    RegionState {
                        x: 0.0,
                        width,
                        visible: child.region == base + 2,
                    },
                );
            }
            rows.push(RowBinding::bind(&children[..], item).expect("three children always bind"));
        }
        Self {
            row_height,
            rows,
            regions,
            running: Vec::new(),
            cancelled: Vec::new(),
            now: 0,
        }
    }

    /// State of `region`.
    pub fn region(&self, region: u32) -> Option<&RegionState> {
        self.regions.get(&region)
    }

    /// The front region X of every row, in row order.
    pub fn front_positions(&self) -> Vec<f64> {
        self.rows
            .iter()
            .map(|b| self.region_x(b.front))
            .collect()
    }

    /// Returns `true` while any animation is running.
    pub fn is_animating(&self) -> bool {
        !self.running.is_empty()
    }

    /// Advance running animations to `now`, returning their lifecycle events.
    ///
    /// Animations replaced since the last call are reported as cancelled first.
    pub fn advance(&mut self, now: u64) -> Vec<(AnimationId, AnimationEvent)> {
        self.now = now;
        let mut events: Vec<_> = self
            .cancelled
            .drain(..)
            .map(|id| (id, AnimationEvent::Cancelled))
            .collect();
        let regions = &mut self.regions;
        self.running.retain_mut(|run| {
            if !run.announced {
                run.announced = true;
                events.push((run.animation.id, AnimationEvent::Started));
            }
            let elapsed = now.saturating_sub(run.started_at);
            if let Some(state) = regions.get_mut(&run.region) {
                state.x = run.animation.sample(run.from_x, elapsed);
            }
            if elapsed >= run.animation.duration_ms {
                events.push((run.animation.id, AnimationEvent::Finished));
                false
            } else {
                true
            }
        });
        events
    }
}

impl RowSource for MemoryList {
    type Row = u32;
    type Region = u32;
    type Item = String;

    fn row_at_point(&self, pos: Point) -> Option<u32> {
        if pos.y < 0.0 {
            return None;
        }
        let index = (pos.y / self.row_height).floor();
        if index >= self.rows.len() as f64 {
            return None;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "index is non-negative and below the row count"
        )]
        let index = index as u32;
        Some(index)
    }

    fn row_at_index(&self, index: usize) -> Option<u32> {
        self.rows.get(index)?;
        u32::try_from(index).ok()
    }

    fn child_count(&self) -> usize {
        self.rows.len()
    }

    fn binding(&self, row: u32) -> Option<&RowBinding<u32, String>> {
        self.rows.get(row as usize)
    }
}

impl RegionSurface<u32> for MemoryList {
    fn region_x(&self, region: u32) -> f64 {
        self.regions.get(&region).map_or(0.0, |r| r.x)
    }

    fn region_width(&self, region: u32) -> f64 {
        self.regions.get(&region).map_or(0.0, |r| r.width)
    }

    fn set_region_x(&mut self, region: u32, x: f64) {
        if let Some(r) = self.regions.get_mut(&region) {
            r.x = x;
        }
    }

    fn set_region_visible(&mut self, region: u32, visible: bool) {
        if let Some(r) = self.regions.get_mut(&region) {
            r.visible = visible;
        }
    }

    fn animate_region_x(&mut self, region: u32, animation: Animation) {
        // A new animation on the same region replaces the old one.
        let cancelled = &mut self.cancelled;
        self.running.retain(|r| {
            if r.region != region {
                return true;
            }
            debug!(region, id = ?r.animation.id, "animation replaced");
            cancelled.push(r.animation.id);
            false
        });
        self.running.push(Running {
            region,
            from_x: self.region_x(region),
            started_at: self.now,
            animation,
            announced: false,
        });
    }
}

/// Step the host's animations to `now` and feed the events back to `swipe`.
pub fn pump<L: SwipeListener<String>>(swipe: &mut SwipeController<MemoryList, L>, now: u64) {
    let events = swipe.host_mut().advance(now);
    for (id, event) in events {
        swipe.on_animation_event(id, event);
    }
}

/// Pump frames every 16 ms from `start` until every animation has finished.
/// Returns the time of the last frame.
pub fn settle<L: SwipeListener<String>>(
    swipe: &mut SwipeController<MemoryList, L>,
    start: u64,
) -> u64 {
    let mut now = start;
    while swipe.host().is_animating() {
        now += 16;
        pump(swipe, now);
    }
    now
}
