//! The drag controller — one gesture, many eligible drop targets.
//!
//! Five host-reported lifecycle events drive the machine: `start`,
//! `entered-target`, `left-target`, `about-to-stop`, `stop`. Everything
//! between start and stop only moves proxies around; the single store
//! mutation happens at stop, and only on the commit path. Stop always
//! destroys the session, so no gesture state can leak into the next one.

use indexmap::IndexMap;
use mosaic_api::{ContainerId, ElementId, PersistTarget};
use mosaic_store::ElementStore;

use crate::host::{DragHost, HostDrag};
use crate::hover;
use crate::session::{DragSession, GesturePhase};
use crate::stacking::StackingCorrector;

/// Result of a start request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Start {
    Started,
    /// Refused: unknown element, detached item, or a gesture already live.
    Ignored,
}

/// What one finished gesture did to the store.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureOutcome {
    /// Gesture reverted; the store is untouched.
    Cancelled,
    /// The element settled in an ordinary container (possibly the one it
    /// started in — a reorder).
    Moved {
        element: ElementId,
        from: ContainerId,
        to: ContainerId,
        position: Option<usize>,
    },
    /// The element was added to the favorites list.
    Favorited { element: ElementId },
}

impl GestureOutcome {
    /// Aggregates the host application should persist after this outcome.
    pub fn dirty(&self) -> Vec<PersistTarget> {
        match self {
            Self::Cancelled => Vec::new(),
            Self::Moved { .. } => vec![PersistTarget::Containers, PersistTarget::Recent],
            Self::Favorited { .. } => vec![PersistTarget::Favorites, PersistTarget::Recent],
        }
    }
}

/// Owns the one allowed [`DragSession`] and the stacking workaround.
#[derive(Debug, Default)]
pub struct DragController {
    stacking: StackingCorrector,
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The live session, if any. Read-only; the controller owns mutation.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Current gesture phase, [`GesturePhase::Idle`] when no gesture is
    /// live.
    pub fn phase(&self) -> GesturePhase {
        self.session
            .as_ref()
            .map(|session| session.phase)
            .unwrap_or(GesturePhase::Idle)
    }

    /// `start`: the host reports a native drag beginning on `drag.item`.
    ///
    /// Builds one helper per container the element has a content variant
    /// for, snapshots stack orders, and paints the initial hover set. An
    /// unresolvable dragged id aborts the native gesture silently: that is
    /// a data-integrity condition, not a user-facing error.
    pub fn on_start(
        &mut self,
        store: &ElementStore,
        host: &mut dyn DragHost,
        drag: HostDrag,
    ) -> Start {
        if self.session.is_some() {
            // Gestures are strictly non-reentrant; the host normally
            // prevents this upstream.
            tracing::warn!("drag start ignored: a gesture is already live");
            return Start::Ignored;
        }
        let Some(start_container) = host.parent_container(drag.item) else {
            host.abort_gesture();
            return Start::Ignored;
        };
        let Some(resource) = host.resource_for(drag.item) else {
            host.abort_gesture();
            return Start::Ignored;
        };
        let Some(element) = store.element(&resource) else {
            tracing::debug!(element = %resource, "drag aborted: unknown element");
            host.abort_gesture();
            return Start::Ignored;
        };
        let from_menu = start_container.is_menu();

        // One helper per eligible container. The start container reuses the
        // host's native proxy; every other one gets a hidden helper built
        // from its content variant, re-draggable via a move handle unless
        // the gesture came out of a menu.
        let mut helpers: IndexMap<ContainerId, _> = IndexMap::new();
        helpers.insert(start_container.clone(), drag.helper);
        for (container, markup) in &element.contents {
            if *container == start_container {
                continue;
            }
            let proxy = host.create_proxy(container, markup);
            if !from_menu {
                host.attach_move_handle(proxy);
            }
            helpers.insert(container.clone(), proxy);
        }
        if from_menu {
            // A menu drag's primary purpose is "add to favorites"; it gets
            // an entry proxy even without a favorites content variant.
            let favorites = ContainerId::favorites();
            helpers
                .entry(favorites.clone())
                .or_insert_with(|| host.create_proxy(&favorites, &element.meta.title));
            host.hide_menu(&start_container);
            // Menu containers don't reflow like ordered lists.
            host.hide_placeholder();
        }

        let mut saved_orders = IndexMap::new();
        for container in helpers.keys() {
            saved_orders.insert(container.clone(), host.stack_order(container));
        }

        let origin_ghost = if from_menu {
            None
        } else {
            Some(host.create_ghost(&start_container, drag.item))
        };

        let mut hover_targets = vec![start_container.clone()];
        if !from_menu {
            hover_targets.extend(
                helpers
                    .keys()
                    .filter(|c| **c != start_container && !c.is_menu())
                    .cloned(),
            );
        }
        Self::repaint_hover(host, &hover_targets);

        tracing::debug!(
            element = %resource,
            start = %start_container,
            helpers = helpers.len(),
            "gesture started"
        );
        self.session = Some(DragSession {
            resource,
            start_container,
            current_container: None,
            phase: GesturePhase::OverIneligible,
            helpers,
            origin_ghost,
            hover_targets,
            saved_orders,
            drag,
            started_from_menu: from_menu,
        });
        Start::Started
    }

    /// `entered-target`: the pointer is now over `target`.
    pub fn on_enter(&mut self, host: &mut dyn DragHost, target: &ContainerId) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        // The origin ghost shows only while the pointer is away from home;
        // menu starts never have one.
        if let Some(ghost) = session.origin_ghost {
            if target == &session.start_container {
                host.hide_ghost(ghost);
            } else {
                host.show_ghost(ghost);
            }
        }

        if let Some(helper) = session.helper_for(target) {
            self.stacking.fix(host, Some(target), &session.saved_orders);
            if session.current_container.as_ref() != Some(target) {
                host.set_active_helper(helper);
                host.resize_placeholder_to(helper);
                host.refresh_geometry(helper);
            }
            host.show_placeholder();
            session.current_container = Some(target.clone());
            session.phase = GesturePhase::OverEligible;
            Self::repaint_hover(host, &session.hover_targets);
            tracing::trace!(container = %target, "over eligible container");
        } else if target.is_favorites() {
            // Favorites accepts drops without ordered-placeholder
            // semantics: the generic placeholder just moves in.
            host.reparent_placeholder(target);
            session.current_container = Some(target.clone());
            session.phase = GesturePhase::OverEligible;
        } else {
            host.hide_placeholder();
            session.current_container = None;
            session.phase = GesturePhase::OverIneligible;
        }
    }

    /// `left-target`: the pointer left `target` toward nowhere in
    /// particular. Only acts when `target` is the session's active
    /// container.
    pub fn on_leave(&mut self, host: &mut dyn DragHost, target: &ContainerId) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.current_container.as_ref() != Some(target) {
            return;
        }

        if let Some(start_helper) = session.helper_for(&session.start_container) {
            host.set_active_helper(start_helper);
            host.resize_placeholder_to(start_helper);
            host.refresh_geometry(start_helper);
        }
        host.reparent_placeholder(&session.start_container);
        if let Some(ghost) = session.origin_ghost {
            if !session.start_container.is_favorites() {
                host.show_ghost(ghost);
            }
        }
        session.current_container = None;
        session.phase = GesturePhase::OverIneligible;
        Self::repaint_hover(host, &session.hover_targets);
    }

    /// `about-to-stop`: pure decision step. Whatever phase the pointer is
    /// in right now determines whether `stop` commits or reverts.
    pub fn on_before_stop(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.phase = if session.is_over() {
            GesturePhase::Committing
        } else {
            GesturePhase::Cancelling
        };
        tracing::debug!(phase = ?session.phase, "gesture ending");
    }

    /// `stop`: commit or revert, then tear everything down. The session is
    /// destroyed unconditionally.
    pub fn on_stop(&mut self, store: &mut ElementStore, host: &mut dyn DragHost) -> GestureOutcome {
        let Some(session) = self.session.take() else {
            return GestureOutcome::Cancelled;
        };

        // Natural stacking first, whatever happens next.
        self.stacking.fix(host, None, &session.saved_orders);

        let outcome = if session.phase == GesturePhase::Committing {
            Self::commit(store, host, &session)
        } else {
            Self::revert(host, &session);
            GestureOutcome::Cancelled
        };

        let landing = match &outcome {
            GestureOutcome::Cancelled => None,
            GestureOutcome::Moved { to, .. } => Some(to.clone()),
            GestureOutcome::Favorited { .. } => Some(ContainerId::favorites()),
        };
        Self::teardown(host, &session, landing.as_ref());

        hover::hover_out(host);
        host.clear_item_state(session.drag.item);
        tracing::debug!(element = %session.resource, outcome = ?outcome, "gesture finished");
        outcome
    }

    fn commit(
        store: &mut ElementStore,
        host: &mut dyn DragHost,
        session: &DragSession,
    ) -> GestureOutcome {
        let landing = session
            .current_container
            .clone()
            .unwrap_or_else(|| session.start_container.clone());

        if landing.is_favorites() {
            store.add_favorite(session.resource.clone());
            store.record_recent(session.resource.clone());
            if let Some(ghost) = session.origin_ghost {
                host.remove_proxy(ghost);
            }
            return GestureOutcome::Favorited {
                element: session.resource.clone(),
            };
        }

        let position = host.placeholder_index();
        if let Some(helper) = session.helper_for(&landing) {
            match session.origin_ghost {
                // A reorder settles the helper into the ghost's slot.
                Some(ghost) if landing == session.start_container => {
                    host.replace_ghost(ghost, helper)
                }
                Some(ghost) => host.remove_proxy(ghost),
                None => {}
            }
            host.finalize_proxy(helper);
            host.remove_move_handle(helper);
        }
        if let Err(err) =
            store.commit_move(&session.start_container, &landing, &session.resource, position)
        {
            // Integrity problem; the gesture still tears down cleanly.
            tracing::warn!("commit failed: {err}");
        }
        store.record_recent(session.resource.clone());
        GestureOutcome::Moved {
            element: session.resource.clone(),
            from: session.start_container.clone(),
            to: landing,
            position,
        }
    }

    /// Repaint the gesture's hover set: content-tracking boxes for ordinary
    /// containers, a plain outline for menu containers (their popup chrome
    /// has no reflowing children to bound).
    fn repaint_hover(host: &mut dyn DragHost, targets: &[ContainerId]) {
        hover::hover_out(host);
        for target in targets {
            if target.is_menu() {
                hover::hover_in(host, target);
            } else {
                hover::hover_inner(host, target);
            }
        }
    }

    fn revert(host: &mut dyn DragHost, session: &DragSession) {
        host.revert_to_origin();
        if let Some(ghost) = session.origin_ghost {
            host.remove_proxy(ghost);
        }
        if session.started_from_menu {
            host.show_menu(&session.start_container);
        }
    }

    /// Remove every helper that is neither the landing container's nor the
    /// start helper of a favorites landing (which settles in place — the
    /// element is still an ordinary member of its start container).
    fn teardown(host: &mut dyn DragHost, session: &DragSession, landing: Option<&ContainerId>) {
        let favorites_landing = landing.map(|c| c.is_favorites()).unwrap_or(false);
        for (container, proxy) in &session.helpers {
            if Some(container) == landing {
                continue;
            }
            if favorites_landing && *container == session.start_container {
                host.settle_proxy(*proxy);
                continue;
            }
            if *proxy == session.drag.helper {
                // The host owns (and disposes) its native proxy.
                continue;
            }
            host.remove_proxy(*proxy);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessHost;
    use crate::host::ProxyId;
    use crate::primitives::Rect;
    use mosaic_api::{Container, Element};
    use mosaic_store::StoreConfig;

    fn id(s: &str) -> ElementId {
        ElementId::new(s)
    }

    fn cid(s: &str) -> ContainerId {
        ContainerId::new(s)
    }

    fn element(title: &str, variants: &[&str]) -> Element {
        let mut elem: Element = serde_json::from_value(serde_json::json!({
            "contents": {},
            "title": title,
        }))
        .unwrap();
        for v in variants {
            elem.contents.insert(cid(v), format!("<div>{title}@{v}</div>"));
        }
        elem
    }

    /// Page `[x, y, z]`, empty sidebar and footer, a favorites menu zone.
    /// Elements have page+sidebar variants only. Returns the host item
    /// handle for `y`.
    fn fixture() -> (ElementStore, HeadlessHost, DragController, ProxyId) {
        let mut store = ElementStore::new(StoreConfig::default());
        for e in ["x", "y", "z"] {
            store.replace_element(id(e), element(e, &["page", "sidebar"]));
        }
        store.insert_container(
            cid("page"),
            Container::with_elements("page", vec![id("x"), id("y"), id("z")]),
        );
        store.insert_container(cid("sidebar"), Container::new("sidebar"));
        store.insert_container(cid("footer"), Container::new("footer"));

        let mut host = HeadlessHost::new();
        host.add_container(cid("page"), Rect::new(0.0, 0.0, 200.0, 300.0), 1);
        host.add_container(cid("sidebar"), Rect::new(200.0, 0.0, 100.0, 300.0), 2);
        host.add_container(cid("footer"), Rect::new(0.0, 300.0, 300.0, 50.0), 3);
        host.add_container(
            ContainerId::favorites(),
            Rect::new(320.0, 0.0, 100.0, 200.0),
            4,
        );
        host.add_item(&cid("page"), id("x"), Rect::new(0.0, 0.0, 200.0, 40.0));
        let item_y = host.add_item(&cid("page"), id("y"), Rect::new(0.0, 40.0, 200.0, 40.0));
        host.add_item(&cid("page"), id("z"), Rect::new(0.0, 80.0, 200.0, 40.0));

        (store, host, DragController::new(), item_y)
    }

    fn container_snapshot(store: &ElementStore) -> Vec<(ContainerId, Vec<ElementId>)> {
        store
            .containers()
            .map(|(id, c)| (id.clone(), c.elements.clone()))
            .collect()
    }

    #[test]
    fn start_builds_one_helper_per_eligible_container() {
        let (store, mut host, mut controller, item) = fixture();
        let drag = host.begin_drag(item);

        assert_eq!(controller.on_start(&store, &mut host, drag), Start::Started);
        let session = controller.session().unwrap();
        assert_eq!(session.helpers.len(), 2);
        assert_eq!(session.helper_for(&cid("page")), Some(drag.helper));
        assert_eq!(session.phase, GesturePhase::OverIneligible);

        // The sidebar helper is parked hidden in the sidebar, re-draggable.
        let sidebar_helper = session.helper_for(&cid("sidebar")).unwrap();
        let node = host.node(sidebar_helper).unwrap();
        assert!(node.proxy);
        assert!(!node.visible);
        assert!(node.move_handle);
        // Footer has no content variant, so no helper landed there.
        assert!(host.proxies_in(&cid("footer")).is_empty());
        // Initial hover covers start + eligible siblings.
        assert_eq!(host.highlights().len(), 2);
    }

    #[test]
    fn start_with_unknown_element_aborts_silently() {
        let (store, mut host, mut controller, _item) = fixture();
        let stale = host.add_item(&cid("page"), id("gone"), Rect::new(0.0, 120.0, 200.0, 40.0));
        let drag = host.begin_drag(stale);

        assert_eq!(controller.on_start(&store, &mut host, drag), Start::Ignored);
        assert!(host.aborted());
        assert!(!controller.is_dragging());
    }

    #[test]
    fn reentrant_start_is_refused() {
        let (store, mut host, mut controller, item) = fixture();
        let drag = host.begin_drag(item);
        controller.on_start(&store, &mut host, drag);

        let other = host.add_item(&cid("page"), id("x"), Rect::new(0.0, 0.0, 200.0, 40.0));
        let second = host.begin_drag(other);
        assert_eq!(controller.on_start(&store, &mut host, second), Start::Ignored);
        // The live gesture is untouched and nothing was aborted.
        assert!(controller.is_dragging());
        assert!(!host.aborted());
    }

    #[test]
    fn entering_eligible_container_activates_its_helper() {
        let (store, mut host, mut controller, item) = fixture();
        let drag = host.begin_drag(item);
        controller.on_start(&store, &mut host, drag);

        controller.on_enter(&mut host, &cid("sidebar"));

        let session = controller.session().unwrap();
        assert_eq!(session.phase, GesturePhase::OverEligible);
        assert_eq!(session.current_container, Some(cid("sidebar")));
        assert_eq!(host.active_helper(), session.helper_for(&cid("sidebar")));
        // The active container is stacked above every other involved one.
        assert!(host.stack_order(&cid("sidebar")) > host.stack_order(&cid("page")));
        assert_eq!(host.stack_order(&cid("page")), 1);
        // Away from home, the origin ghost shows.
        let ghost = session.origin_ghost.unwrap();
        assert!(host.node(ghost).unwrap().visible);
    }

    #[test]
    fn entering_ineligible_container_shows_no_helper() {
        let (store, mut host, mut controller, item) = fixture();
        let drag = host.begin_drag(item);
        controller.on_start(&store, &mut host, drag);

        controller.on_enter(&mut host, &cid("footer"));

        let session = controller.session().unwrap();
        assert_eq!(session.phase, GesturePhase::OverIneligible);
        assert_eq!(session.current_container, None);
        assert!(!host.placeholder_visible());
        assert!(host.proxies_in(&cid("footer")).is_empty());
    }

    #[test]
    fn entering_favorites_reparents_the_placeholder() {
        let (store, mut host, mut controller, item) = fixture();
        let drag = host.begin_drag(item);
        controller.on_start(&store, &mut host, drag);

        controller.on_enter(&mut host, &ContainerId::favorites());

        let session = controller.session().unwrap();
        assert_eq!(session.phase, GesturePhase::OverEligible);
        assert_eq!(host.placeholder_container(), Some(&ContainerId::favorites()));
    }

    #[test]
    fn leaving_the_active_container_reverts_to_the_start_helper() {
        let (store, mut host, mut controller, item) = fixture();
        let drag = host.begin_drag(item);
        controller.on_start(&store, &mut host, drag);
        controller.on_enter(&mut host, &cid("sidebar"));

        controller.on_leave(&mut host, &cid("sidebar"));

        let session = controller.session().unwrap();
        assert_eq!(session.phase, GesturePhase::OverIneligible);
        assert_eq!(session.current_container, None);
        assert_eq!(host.active_helper(), Some(drag.helper));
        assert_eq!(host.placeholder_container(), Some(&cid("page")));
    }

    #[test]
    fn leave_of_a_stale_container_is_ignored() {
        let (store, mut host, mut controller, item) = fixture();
        let drag = host.begin_drag(item);
        controller.on_start(&store, &mut host, drag);
        controller.on_enter(&mut host, &cid("sidebar"));

        controller.on_leave(&mut host, &cid("footer"));

        assert_eq!(
            controller.session().unwrap().phase,
            GesturePhase::OverEligible
        );
    }

    #[test]
    fn before_stop_decides_commit_or_cancel() {
        let (store, mut host, mut controller, item) = fixture();
        let drag = host.begin_drag(item);
        controller.on_start(&store, &mut host, drag);

        controller.on_before_stop();
        assert_eq!(controller.session().unwrap().phase, GesturePhase::Cancelling);

        controller.on_enter(&mut host, &cid("sidebar"));
        controller.on_before_stop();
        assert_eq!(controller.session().unwrap().phase, GesturePhase::Committing);
    }

    #[test]
    fn cancelled_gesture_leaves_every_container_untouched() {
        let (mut store, mut host, mut controller, item) = fixture();
        let before = container_snapshot(&store);
        let drag = host.begin_drag(item);
        controller.on_start(&store, &mut host, drag);
        controller.on_enter(&mut host, &cid("sidebar"));
        controller.on_leave(&mut host, &cid("sidebar"));
        controller.on_before_stop();

        let outcome = controller.on_stop(&mut store, &mut host);

        assert_eq!(outcome, GestureOutcome::Cancelled);
        assert!(outcome.dirty().is_empty());
        assert_eq!(container_snapshot(&store), before);
        assert!(store.recent().is_empty());
        assert!(host.reverted());
        assert!(!controller.is_dragging());
        assert_eq!(controller.phase(), GesturePhase::Idle);
        // Stack orders and hover are back to natural state.
        assert_eq!(host.stack_order(&cid("sidebar")), 2);
        assert!(host.highlights().is_empty());
        assert!(!host.node(item).unwrap().transient);
    }

    #[test]
    fn committed_move_relocates_exactly_one_id() {
        let (mut store, mut host, mut controller, item) = fixture();
        let drag = host.begin_drag(item);
        controller.on_start(&store, &mut host, drag);
        controller.on_enter(&mut host, &cid("sidebar"));
        let sidebar_helper = controller
            .session()
            .unwrap()
            .helper_for(&cid("sidebar"))
            .unwrap();
        let ghost = controller.session().unwrap().origin_ghost.unwrap();
        controller.on_before_stop();

        let outcome = controller.on_stop(&mut store, &mut host);

        assert_eq!(
            outcome,
            GestureOutcome::Moved {
                element: id("y"),
                from: cid("page"),
                to: cid("sidebar"),
                position: None,
            }
        );
        assert_eq!(
            outcome.dirty(),
            vec![PersistTarget::Containers, PersistTarget::Recent]
        );
        let page = store.container(&cid("page")).unwrap();
        let sidebar = store.container(&cid("sidebar")).unwrap();
        assert_eq!(page.elements, vec![id("x"), id("z")]);
        assert_eq!(sidebar.elements, vec![id("y")]);
        assert!(store.container(&cid("footer")).unwrap().is_empty());
        assert_eq!(store.recent().front(), Some(&id("y")));

        // The landing helper settled as an ordinary item; the ghost is gone.
        let node = host.node(sidebar_helper).unwrap();
        assert!(node.finalized);
        assert!(!node.move_handle);
        assert!(!host.has_node(ghost));
        assert!(!controller.is_dragging());
    }

    #[test]
    fn dropping_back_into_the_start_container_is_a_reorder() {
        let (mut store, mut host, mut controller, item) = fixture();
        let drag = host.begin_drag(item);
        controller.on_start(&store, &mut host, drag);
        controller.on_enter(&mut host, &cid("page"));
        host.set_placeholder_index(Some(0));
        controller.on_before_stop();

        let outcome = controller.on_stop(&mut store, &mut host);

        assert!(matches!(outcome, GestureOutcome::Moved { .. }));
        let page = store.container(&cid("page")).unwrap();
        assert_eq!(page.elements, vec![id("y"), id("x"), id("z")]);
    }

    #[test]
    fn favorites_landing_promotes_without_removing_from_start() {
        let (mut store, mut host, mut controller, item) = fixture();
        let drag = host.begin_drag(item);
        controller.on_start(&store, &mut host, drag);
        controller.on_enter(&mut host, &ContainerId::favorites());
        controller.on_before_stop();

        let outcome = controller.on_stop(&mut store, &mut host);

        assert_eq!(outcome, GestureOutcome::Favorited { element: id("y") });
        assert_eq!(
            outcome.dirty(),
            vec![PersistTarget::Favorites, PersistTarget::Recent]
        );
        assert_eq!(store.favorites().front(), Some(&id("y")));
        assert_eq!(store.recent().front(), Some(&id("y")));
        // The start container still holds the element, and its helper
        // settled in place instead of vanishing.
        let page = store.container(&cid("page")).unwrap();
        assert_eq!(page.elements, vec![id("x"), id("y"), id("z")]);
        assert!(host.node(drag.helper).unwrap().settled);
    }

    #[test]
    fn menu_start_hides_the_menu_and_cancel_restores_it() {
        let (mut store, mut host, mut controller, _item) = fixture();
        let favorites = ContainerId::favorites();
        let menu_item = host.add_item(&favorites, id("x"), Rect::new(320.0, 0.0, 100.0, 24.0));
        let drag = host.begin_drag(menu_item);

        controller.on_start(&store, &mut host, drag);
        let session = controller.session().unwrap();
        assert!(session.started_from_menu);
        assert!(session.origin_ghost.is_none());
        assert!(host.menu_hidden(&favorites));
        assert!(!host.placeholder_visible());

        controller.on_before_stop();
        let outcome = controller.on_stop(&mut store, &mut host);

        assert_eq!(outcome, GestureOutcome::Cancelled);
        assert!(!host.menu_hidden(&favorites));
        assert!(host.reverted());
    }

    #[test]
    fn menu_start_commit_seeds_the_page_container() {
        let (mut store, mut host, mut controller, _item) = fixture();
        let favorites = ContainerId::favorites();
        let menu_item = host.add_item(&favorites, id("x"), Rect::new(320.0, 0.0, 100.0, 24.0));
        let drag = host.begin_drag(menu_item);
        controller.on_start(&store, &mut host, drag);

        // The page helper exists without the page ever being configured as
        // a menu sibling: the element's own content map provides it.
        assert!(controller.session().unwrap().helper_for(&cid("page")).is_some());

        controller.on_enter(&mut host, &cid("page"));
        controller.on_before_stop();
        let outcome = controller.on_stop(&mut store, &mut host);

        assert!(matches!(outcome, GestureOutcome::Moved { .. }));
        // x was already on the page; the commit relocated it, never
        // duplicated it.
        let page = store.container(&cid("page")).unwrap();
        assert_eq!(
            page.elements.iter().filter(|e| **e == id("x")).count(),
            1
        );
        assert_eq!(page.len(), 3);
    }
}
