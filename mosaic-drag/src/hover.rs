//! Hover highlighting — ephemeral bounding-box feedback.
//!
//! No persistent state: every call reads current geometry and paints (or
//! clears) overlays through the host. Missing geometry degrades to "no
//! highlight"; none of these functions can fail.

use mosaic_api::ContainerId;

use crate::constants::{HOVER_OUTLINE_OFFSET, MIN_HIGHLIGHT_HEIGHT};
use crate::host::DragHost;

/// Outline one region with a fixed offset around its own box.
pub fn hover_in(host: &mut dyn DragHost, container: &ContainerId) {
    if let Some(rect) = host.container_rect(container) {
        host.show_highlight(rect.inflate(HOVER_OUTLINE_OFFSET));
    }
}

/// Tight bounding box around the visible, non-proxy children of
/// `container`, recomputed on every call (container contents change as the
/// gesture adds and removes helpers).
///
/// With no qualifying children, falls back to the container's own box at a
/// minimum height.
pub fn hover_inner(host: &mut dyn DragHost, container: &ContainerId) {
    let children = host.child_rects(container);
    if let Some(first) = children.first() {
        let bounds = children.iter().skip(1).fold(*first, |acc, r| acc.union(*r));
        host.show_highlight(bounds);
    } else if let Some(own) = host.container_rect(container) {
        let mut rect = own;
        rect.height = rect.height.max(MIN_HIGHLIGHT_HEIGHT);
        host.show_highlight(rect);
    }
}

/// Remove every highlight overlay. Always safe, even when none exist;
/// called defensively before most transitions.
pub fn hover_out(host: &mut dyn DragHost) {
    host.clear_highlights();
}
