// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while binding a row layout.

/// A row layout that cannot carry swipe actions.
///
/// These are raised once, when a row is first bound, and indicate a malformed
/// row layout rather than a transient condition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    /// No child is tagged `front` and the row has no children to fall back on.
    #[error("row has no region tagged `front` and no children to use instead")]
    MissingFrontRegion,
    /// Neither reveal region is tagged and the row has fewer than two children.
    #[error("row needs at least one reveal region (`reveal-left` or `reveal-right`)")]
    MissingRevealRegion,
}
