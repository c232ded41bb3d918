//! Shared constants for the drag engine.

/// Outline offset applied by the fixed-offset hover rectangle.
pub const HOVER_OUTLINE_OFFSET: f32 = 2.0;

/// Fallback highlight height for containers with no qualifying children.
pub const MIN_HIGHLIGHT_HEIGHT: f32 = 24.0;
