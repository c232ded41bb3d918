//! Mosaic Drag - The drag/placement engine of the authoring surface.
//!
//! A headless, host-adapted gesture state machine: the host drag framework
//! reports five lifecycle events (start, entered-target, left-target,
//! about-to-stop, stop) and the [`DragController`] drives every visual side
//! effect through the [`DragHost`] trait — one proxy per eligible
//! container, stacking-order correction, hover highlighting — then commits
//! exactly one store mutation or reverts with none.
//!
//! # Module Organization
//!
//! - `primitives`: geometry (Point, Rect)
//! - `host`: the adapter trait the host framework implements
//! - `session`: per-gesture state and the gesture phase enum
//! - `controller`: the five-event state machine
//! - `stacking`: stacking-order correction for legacy renderers
//! - `hover`: ephemeral bounding-box highlighting
//! - `headless`: in-memory host for tests and the demo binary

pub mod constants;
pub mod primitives;

pub mod host;
pub mod session;

pub mod hover;
pub mod stacking;

pub mod controller;

pub mod headless;

pub use controller::{DragController, GestureOutcome, Start};
pub use host::{DragHost, HostDrag, ProxyId};
pub use session::{DragSession, GesturePhase};
