//! Per-gesture session state.

use indexmap::IndexMap;
use mosaic_api::{ContainerId, ElementId};

use crate::host::{HostDrag, ProxyId};

/// Where the state machine is within one gesture.
///
/// Replaces the legacy `over`/`cancel` boolean pair with one explicit
/// enum: `about-to-stop` maps `OverEligible` to `Committing` and
/// everything else to `Cancelling`, and `stop` consumes the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// No gesture in progress.
    Idle,
    /// Pointer over a container the element is eligible for.
    OverEligible,
    /// Pointer over nothing useful, or over an ineligible container.
    OverIneligible,
    /// Gesture ending over an eligible container; stop will commit.
    Committing,
    /// Gesture ending nowhere useful; stop will revert.
    Cancelling,
}

/// Ephemeral record of one drag gesture.
///
/// Created at gesture start, destroyed unconditionally at stop. At most one
/// exists system-wide: the host disables new drags while one is live, and
/// the controller refuses reentrant starts.
#[derive(Debug)]
pub struct DragSession {
    /// The dragged element.
    pub resource: ElementId,
    /// Container the gesture started in.
    pub start_container: ContainerId,
    /// Container currently under the pointer, when it is an active target.
    pub current_container: Option<ContainerId>,
    pub phase: GesturePhase,
    /// One visual proxy per eligible container, in the element's
    /// content-map insertion order. The first entry wins ties for the
    /// default active helper.
    pub helpers: IndexMap<ContainerId, ProxyId>,
    /// The dimmed start-container ghost, when one applies (never for menu
    /// starts).
    pub origin_ghost: Option<ProxyId>,
    /// Containers whose hover highlight tracks this gesture.
    pub hover_targets: Vec<ContainerId>,
    /// Natural stack order of every involved container, captured once at
    /// start and read-only afterwards.
    pub saved_orders: IndexMap<ContainerId, i32>,
    /// The host's native handles for this gesture.
    pub drag: HostDrag,
    pub started_from_menu: bool,
}

impl DragSession {
    pub fn helper_for(&self, container: &ContainerId) -> Option<ProxyId> {
        self.helpers.get(container).copied()
    }

    /// True while the pointer is over some eligible container.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, GesturePhase::OverEligible)
    }
}
