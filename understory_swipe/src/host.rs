// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host integration: the list and view toolkit the controller drives.
//!
//! The controller does not own rows, views, or an animation engine. It asks a
//! host for them through two small traits:
//!
//! - [`RowSource`] is the virtualized list: hit-testing, index lookup, and
//!   access to each live row's [`RowBinding`].
//! - [`RegionSurface`] is the view toolkit: region geometry, visibility, and
//!   starting a tweened move of a region.
//!
//! The controller needs one value implementing both, with the surface keyed by
//! the list's region handle: `H: RowSource + RegionSurface<H::Region>`.

use core::fmt::Debug;
use core::hash::Hash;

use kurbo::Point;

use crate::animation::Animation;
use crate::row::RowBinding;

/// The virtualized list that owns the rows.
pub trait RowSource {
    /// Identity of a live row view. Equal values refer to the same view.
    type Row: Copy + Eq + Hash + Debug;
    /// Handle to a region inside a row.
    type Region: Copy + Eq + Debug;
    /// Payload attached to each row.
    type Item;

    /// The row under `pos`, if any.
    fn row_at_point(&self, pos: Point) -> Option<Self::Row>;

    /// The row currently showing item `index`, if it is realized.
    fn row_at_index(&self, index: usize) -> Option<Self::Row>;

    /// Number of items addressable by index.
    fn child_count(&self) -> usize;

    /// The binding of a live row.
    fn binding(&self, row: Self::Row) -> Option<&RowBinding<Self::Region, Self::Item>>;
}

/// Region geometry, visibility, and animation.
pub trait RegionSurface<R> {
    /// Current X of `region`.
    fn region_x(&self, region: R) -> f64;

    /// Current width of `region`.
    fn region_width(&self, region: R) -> f64;

    /// Move `region` to `x` immediately.
    fn set_region_x(&mut self, region: R, x: f64);

    /// Show or hide `region`.
    fn set_region_visible(&mut self, region: R, visible: bool);

    /// Start moving `region` to `animation.target_x`.
    ///
    /// Must return without waiting. Report progress with
    /// [`SwipeController::on_animation_event`](crate::SwipeController::on_animation_event)
    /// using `animation.id`.
    fn animate_region_x(&mut self, region: R, animation: Animation);
}
