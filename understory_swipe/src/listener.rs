// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Application callbacks for row actions.

/// Receives the actions recognized on rows carrying items of type `M`.
pub trait SwipeListener<M> {
    /// A left swipe finished animating.
    ///
    /// Return `true` to accept the action; the row then returns to its natural
    /// position. Return `false` to decline it; the row stays where it is and
    /// the next queued programmatic swipe (if any) runs.
    fn on_swipe_left(&mut self, item: &M) -> bool;

    /// A right swipe finished animating. See [`on_swipe_left`](Self::on_swipe_left).
    fn on_swipe_right(&mut self, item: &M) -> bool;

    /// The row was tapped.
    fn on_click(&mut self, item: &M);

    /// The row was pressed and held.
    fn on_long_click(&mut self, item: &M);
}

impl<M, L: SwipeListener<M> + ?Sized> SwipeListener<M> for &mut L {
    fn on_swipe_left(&mut self, item: &M) -> bool {
        (**self).on_swipe_left(item)
    }

    fn on_swipe_right(&mut self, item: &M) -> bool {
        (**self).on_swipe_right(item)
    }

    fn on_click(&mut self, item: &M) {
        (**self).on_click(item);
    }

    fn on_long_click(&mut self, item: &M) {
        (**self).on_long_click(item);
    }
}
