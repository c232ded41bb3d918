//! Host drag-framework adapter.
//!
//! The engine is headless: every visual side effect goes through this
//! trait, and the host translates its native pointer events into the five
//! `DragController` lifecycle calls. Implementations must tag
//! controller-created proxies so their own item collection and the hover
//! geometry queries ignore them.

use mosaic_api::{ContainerId, ElementId};

use crate::primitives::Rect;

/// Handle to a host-owned visual node (item, proxy, placeholder, ghost).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProxyId(pub u64);

/// What the host hands the controller when a native drag begins.
#[derive(Debug, Clone, Copy)]
pub struct HostDrag {
    /// The item the editor grabbed.
    pub item: ProxyId,
    /// The host's native drag proxy following the pointer.
    pub helper: ProxyId,
    /// The host's reorder placeholder.
    pub placeholder: ProxyId,
}

/// Visual side effects the controller drives on the host scene.
pub trait DragHost {
    /// The container currently holding `item`, if any.
    fn parent_container(&self, item: ProxyId) -> Option<ContainerId>;

    /// The element the grabbed item renders.
    fn resource_for(&self, item: ProxyId) -> Option<ElementId>;

    /// Append a hidden, absolutely positioned, proxy-tagged helper built
    /// from `markup` into `container`.
    fn create_proxy(&mut self, container: &ContainerId, markup: &str) -> ProxyId;

    fn remove_proxy(&mut self, proxy: ProxyId);

    /// Attach the secondary move handle that makes a settled helper
    /// re-draggable.
    fn attach_move_handle(&mut self, proxy: ProxyId);

    fn remove_move_handle(&mut self, proxy: ProxyId);

    /// Swap the native drag proxy to `proxy` and show it under the pointer.
    fn set_active_helper(&mut self, proxy: ProxyId);

    /// Resize the reorder placeholder to match `proxy`.
    fn resize_placeholder_to(&mut self, proxy: ProxyId);

    /// Re-cache `proxy`'s geometry with the host framework.
    fn refresh_geometry(&mut self, proxy: ProxyId);

    fn show_placeholder(&mut self);

    fn hide_placeholder(&mut self);

    /// Move the reorder placeholder into `container`. Favorites accepts
    /// drops without ordered-placeholder semantics; this is how.
    fn reparent_placeholder(&mut self, container: &ContainerId);

    /// Index the placeholder currently occupies within its container, if
    /// the host can tell. `None` appends to the tail on commit.
    fn placeholder_index(&self) -> Option<usize>;

    /// Leave a dimmed copy of `item` in `container` (the "you're taking
    /// this out" ghost). Created hidden.
    fn create_ghost(&mut self, container: &ContainerId, item: ProxyId) -> ProxyId;

    fn show_ghost(&mut self, ghost: ProxyId);

    fn hide_ghost(&mut self, ghost: ProxyId);

    /// Splice the ghost out, settling `replacement` into its slot.
    fn replace_ghost(&mut self, ghost: ProxyId, replacement: ProxyId);

    /// Whether the rendering engine isolates stacking contexts per drop
    /// target. When it does, the stacking corrector is the identity.
    fn isolates_stacking(&self) -> bool;

    fn stack_order(&self, container: &ContainerId) -> i32;

    fn set_stack_order(&mut self, container: &ContainerId, order: i32);

    /// The container's own bounding box, if it has geometry.
    fn container_rect(&self, container: &ContainerId) -> Option<Rect>;

    /// Bounding boxes of the container's visible, non-proxy direct
    /// children.
    fn child_rects(&self, container: &ContainerId) -> Vec<Rect>;

    fn show_highlight(&mut self, rect: Rect);

    fn clear_highlights(&mut self);

    /// Hide a menu container's popup chrome for the duration of a gesture.
    fn hide_menu(&mut self, container: &ContainerId);

    fn show_menu(&mut self, container: &ContainerId);

    /// Animate the native proxy back to its origin (the cancel path).
    fn revert_to_origin(&mut self);

    /// Abort the native gesture before it starts (stale dragged id).
    fn abort_gesture(&mut self);

    /// Strip temporary inline position/offset/stacking from `proxy`,
    /// settling it as an ordinary item where it stands.
    fn finalize_proxy(&mut self, proxy: ProxyId);

    /// Keep `proxy` in place, relatively positioned. Used for the start
    /// helper when the element lands in favorites: it stays visible in its
    /// original container as a now-settled item.
    fn settle_proxy(&mut self, proxy: ProxyId);

    /// Clear transient inline state from the dragged item itself.
    fn clear_item_state(&mut self, item: ProxyId);
}
