// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row binding: resolve the front and reveal regions of a list row.
//!
//! Every swipeable row is a container with a **front** region (the content that
//! moves) and up to two **reveal** regions that sit behind it and become visible
//! while the front is dragged aside.
//!
//! Regions are resolved once, when the row is bound:
//!
//! 1) A child tagged `front`, `reveal-left` or `reveal-right` wins.
//! 2) Otherwise the front falls back to the last child.
//! 3) If neither reveal region is tagged, the second-to-last child becomes
//!    `reveal-left`, and the third-to-last (if any) becomes `reveal-right`.
//!
//! With exactly two untagged children the second-to-last child is always the
//! left reveal. This is a fixed convention; layout direction is not consulted.
//!
//! A positional fallback never resolves to the front region. When the front is
//! tagged and also sits where a reveal would be taken from, that reveal stays
//! empty.
//!
//! ## Minimal example
//!
//! ```
//! use understory_swipe::row::{RowBinding, TaggedChild};
//!
//! // Three untagged children, back to front.
//! let children = [TaggedChild::untagged(10_u32), TaggedChild::untagged(11), TaggedChild::untagged(12)];
//! let row = RowBinding::bind(&children[..], "payload").unwrap();
//!
//! assert_eq!(row.front, 12);
//! assert_eq!(row.reveal_left, Some(11));
//! assert_eq!(row.reveal_right, Some(10));
//! ```

use core::str::FromStr;

use crate::error::BindError;
use crate::types::SwipeDirection;

/// Tag naming one of the logical regions of a row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RegionTag {
    /// The content region that follows the pointer.
    Front,
    /// Region shown when the front is dragged to the left.
    RevealLeft,
    /// Region shown when the front is dragged to the right.
    RevealRight,
}

impl RegionTag {
    /// The textual tag used in row layouts.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::RevealLeft => "reveal-left",
            Self::RevealRight => "reveal-right",
        }
    }
}

impl FromStr for RegionTag {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "front" => Ok(Self::Front),
            "reveal-left" => Ok(Self::RevealLeft),
            "reveal-right" => Ok(Self::RevealRight),
            _ => Err(()),
        }
    }
}

/// A row's root container, as seen by the binder.
///
/// Implement this for whatever your toolkit uses as a row view. `Region` is a
/// cheap handle to one child (an id, an index, a generational key).
pub trait RowContainer {
    /// Handle to a child region.
    type Region: Copy;

    /// Number of direct children.
    fn child_count(&self) -> usize;

    /// Child at `index`, in back-to-front order.
    fn child_at(&self, index: usize) -> Option<Self::Region>;

    /// The region carrying `tag`, if any.
    fn find_tagged(&self, tag: RegionTag) -> Option<Self::Region>;
}

/// A child handle with an optional region tag.
///
/// Slices of these implement [`RowContainer`], which is convenient for hosts
/// that already hold their row children in a flat list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TaggedChild<R> {
    /// Tag attached to the child in the row layout.
    pub tag: Option<RegionTag>,
    /// Handle to the child.
    pub region: R,
}

impl<R> TaggedChild<R> {
    /// A child carrying `tag`.
    pub const fn tagged(tag: RegionTag, region: R) -> Self {
        Self {
            tag: Some(tag),
            region,
        }
    }

    /// A child without a tag; resolved positionally.
    pub const fn untagged(region: R) -> Self {
        Self { tag: None, region }
    }
}

impl<R: Copy> RowContainer for [TaggedChild<R>] {
    type Region = R;

    fn child_count(&self) -> usize {
        self.len()
    }

    fn child_at(&self, index: usize) -> Option<R> {
        self.get(index).map(|c| c.region)
    }

    fn find_tagged(&self, tag: RegionTag) -> Option<R> {
        self.iter()
            .find(|c| c.tag == Some(tag))
            .map(|c| c.region)
    }
}

/// The resolved regions of one row plus its item payload.
///
/// A binding is immutable for the lifetime of the row view; when the list
/// recycles the view, bind it again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowBinding<R, M> {
    /// Region that follows the pointer.
    pub front: R,
    /// Region revealed by dragging left, if any.
    pub reveal_left: Option<R>,
    /// Region revealed by dragging right, if any.
    pub reveal_right: Option<R>,
    /// Application payload handed to the listener.
    pub item: M,
}

impl<R: Copy, M> RowBinding<R, M> {
    /// Resolve the regions of `row` and attach `item`.
    ///
    /// # Errors
    ///
    /// - [`BindError::MissingFrontRegion`] if no child is tagged `front` and
    ///   the row is empty.
    /// - [`BindError::MissingRevealRegion`] if no reveal region is tagged and
    ///   no child other than the front is left to fall back on.
    pub fn bind<C>(row: &C, item: M) -> Result<Self, BindError>
    where
        C: RowContainer<Region = R> + ?Sized,
        R: PartialEq,
    {
        let count = row.child_count();

        let front = match row.find_tagged(RegionTag::Front) {
            Some(front) => front,
            None if count == 0 => return Err(BindError::MissingFrontRegion),
            None => row
                .child_at(count - 1)
                .ok_or(BindError::MissingFrontRegion)?,
        };

        let mut reveal_left = row.find_tagged(RegionTag::RevealLeft);
        let mut reveal_right = row.find_tagged(RegionTag::RevealRight);

        if reveal_left.is_none() && reveal_right.is_none() {
            if count < 2 {
                return Err(BindError::MissingRevealRegion);
            }
            reveal_left = row.child_at(count - 2).filter(|r| *r != front);
        }
        if reveal_right.is_none() && count >= 3 {
            reveal_right = row.child_at(count - 3).filter(|r| *r != front);
        }

        Self::from_regions(front, reveal_left, reveal_right, item)
    }

    /// Build a binding from already-resolved regions.
    ///
    /// # Errors
    ///
    /// [`BindError::MissingRevealRegion`] if both reveal regions are `None`.
    pub fn from_regions(
        front: R,
        reveal_left: Option<R>,
        reveal_right: Option<R>,
        item: M,
    ) -> Result<Self, BindError> {
        if reveal_left.is_none() && reveal_right.is_none() {
            return Err(BindError::MissingRevealRegion);
        }
        Ok(Self {
            front,
            reveal_left,
            reveal_right,
            item,
        })
    }

    /// The reveal region exposed by a swipe in `direction`.
    #[must_use]
    pub fn reveal(&self, direction: SwipeDirection) -> Option<R> {
        match direction {
            SwipeDirection::Left => self.reveal_left,
            SwipeDirection::Right => self.reveal_right,
        }
    }
}
