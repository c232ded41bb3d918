//! In-memory host used by tests and the demo binary.
//!
//! Models just enough scene structure to observe every side effect the
//! engine drives: container membership of nodes, proxy tags, visibility,
//! stack orders, placeholder location, highlight overlays, and menu
//! chrome. No rendering; assertions read the scene directly.

use indexmap::IndexMap;
use mosaic_api::{ContainerId, ElementId};

use crate::host::{DragHost, HostDrag, ProxyId};
use crate::primitives::Rect;

/// One visual node in the headless scene.
#[derive(Debug, Clone)]
pub struct Node {
    pub container: Option<ContainerId>,
    pub rect: Rect,
    pub visible: bool,
    /// Proxy-tagged nodes are invisible to hover geometry and to the
    /// host's own item collection.
    pub proxy: bool,
    pub move_handle: bool,
    pub resource: Option<ElementId>,
    pub markup: String,
    /// Transient inline drag state (position/offset/stacking).
    pub transient: bool,
    /// Settled relatively in place (favorites-landing start helper).
    pub settled: bool,
    /// Finalized as an ordinary item (committed landing helper).
    pub finalized: bool,
}

impl Node {
    fn new(container: Option<ContainerId>, rect: Rect) -> Self {
        Self {
            container,
            rect,
            visible: true,
            proxy: false,
            move_handle: false,
            resource: None,
            markup: String::new(),
            transient: false,
            settled: false,
            finalized: false,
        }
    }
}

#[derive(Debug, Default)]
pub struct HeadlessHost {
    next_id: u64,
    nodes: IndexMap<ProxyId, Node>,
    container_rects: IndexMap<ContainerId, Rect>,
    stack_orders: IndexMap<ContainerId, i32>,
    hidden_menus: Vec<ContainerId>,
    highlights: Vec<Rect>,
    placeholder: Option<ProxyId>,
    placeholder_container: Option<ContainerId>,
    placeholder_visible: bool,
    placeholder_index: Option<usize>,
    active_helper: Option<ProxyId>,
    reverted: bool,
    aborted: bool,
    pub isolates_stacking: bool,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------------------------------------------------------------
    // Scene setup
    // ---------------------------------------------------------------------

    pub fn add_container(&mut self, id: ContainerId, rect: Rect, stack_order: i32) {
        self.container_rects.insert(id.clone(), rect);
        self.stack_orders.insert(id, stack_order);
    }

    /// Add an ordinary (non-proxy) item rendering `resource`.
    pub fn add_item(&mut self, container: &ContainerId, resource: ElementId, rect: Rect) -> ProxyId {
        let id = self.alloc();
        let mut node = Node::new(Some(container.clone()), rect);
        node.resource = Some(resource);
        self.nodes.insert(id, node);
        id
    }

    /// Begin a native drag on `item`: the host mints its pointer-following
    /// helper and its reorder placeholder, and the item picks up transient
    /// inline state.
    pub fn begin_drag(&mut self, item: ProxyId) -> HostDrag {
        let (container, rect) = self
            .nodes
            .get(&item)
            .map(|node| (node.container.clone(), node.rect))
            .unwrap_or((None, Rect::ZERO));
        if let Some(node) = self.nodes.get_mut(&item) {
            node.transient = true;
        }

        let helper = self.alloc();
        let mut helper_node = Node::new(None, rect);
        helper_node.proxy = true;
        self.nodes.insert(helper, helper_node);
        self.active_helper = Some(helper);

        let placeholder = self.alloc();
        let mut placeholder_node = Node::new(container.clone(), rect);
        placeholder_node.proxy = true;
        self.nodes.insert(placeholder, placeholder_node);
        self.placeholder = Some(placeholder);
        self.placeholder_container = container;
        self.placeholder_visible = true;
        self.placeholder_index = None;

        HostDrag {
            item,
            helper,
            placeholder,
        }
    }

    pub fn set_proxy_rect(&mut self, proxy: ProxyId, rect: Rect) {
        if let Some(node) = self.nodes.get_mut(&proxy) {
            node.rect = rect;
            node.visible = true;
        }
    }

    /// Where the host's sort logic would insert the drop.
    pub fn set_placeholder_index(&mut self, index: Option<usize>) {
        self.placeholder_index = index;
    }

    // ---------------------------------------------------------------------
    // Test observables
    // ---------------------------------------------------------------------

    pub fn node(&self, id: ProxyId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn has_node(&self, id: ProxyId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn highlights(&self) -> &[Rect] {
        &self.highlights
    }

    pub fn active_helper(&self) -> Option<ProxyId> {
        self.active_helper
    }

    pub fn placeholder_container(&self) -> Option<&ContainerId> {
        self.placeholder_container.as_ref()
    }

    pub fn placeholder_visible(&self) -> bool {
        self.placeholder_visible
    }

    pub fn menu_hidden(&self, container: &ContainerId) -> bool {
        self.hidden_menus.contains(container)
    }

    pub fn reverted(&self) -> bool {
        self.reverted
    }

    pub fn aborted(&self) -> bool {
        self.aborted
    }

    /// Proxy-tagged nodes currently parked in `container`.
    pub fn proxies_in(&self, container: &ContainerId) -> Vec<ProxyId> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.proxy && node.container.as_ref() == Some(container))
            .map(|(id, _)| *id)
            .collect()
    }

    fn alloc(&mut self) -> ProxyId {
        self.next_id += 1;
        ProxyId(self.next_id)
    }
}

impl DragHost for HeadlessHost {
    fn parent_container(&self, item: ProxyId) -> Option<ContainerId> {
        self.nodes.get(&item).and_then(|node| node.container.clone())
    }

    fn resource_for(&self, item: ProxyId) -> Option<ElementId> {
        self.nodes.get(&item).and_then(|node| node.resource.clone())
    }

    fn create_proxy(&mut self, container: &ContainerId, markup: &str) -> ProxyId {
        let id = self.alloc();
        let mut node = Node::new(Some(container.clone()), Rect::ZERO);
        node.proxy = true;
        node.visible = false;
        node.transient = true;
        node.markup = markup.to_string();
        self.nodes.insert(id, node);
        id
    }

    fn remove_proxy(&mut self, proxy: ProxyId) {
        self.nodes.shift_remove(&proxy);
    }

    fn attach_move_handle(&mut self, proxy: ProxyId) {
        if let Some(node) = self.nodes.get_mut(&proxy) {
            node.move_handle = true;
        }
    }

    fn remove_move_handle(&mut self, proxy: ProxyId) {
        if let Some(node) = self.nodes.get_mut(&proxy) {
            node.move_handle = false;
        }
    }

    fn set_active_helper(&mut self, proxy: ProxyId) {
        if let Some(previous) = self.active_helper {
            if let Some(node) = self.nodes.get_mut(&previous) {
                node.visible = false;
            }
        }
        if let Some(node) = self.nodes.get_mut(&proxy) {
            node.visible = true;
        }
        self.active_helper = Some(proxy);
    }

    fn resize_placeholder_to(&mut self, proxy: ProxyId) {
        let size = self.nodes.get(&proxy).map(|node| node.rect);
        if let (Some(placeholder), Some(rect)) = (self.placeholder, size) {
            if let Some(node) = self.nodes.get_mut(&placeholder) {
                node.rect.width = rect.width;
                node.rect.height = rect.height;
            }
        }
    }

    fn refresh_geometry(&mut self, _proxy: ProxyId) {
        // The headless scene has no layout cache to refresh.
    }

    fn show_placeholder(&mut self) {
        self.placeholder_visible = true;
    }

    fn hide_placeholder(&mut self) {
        self.placeholder_visible = false;
    }

    fn reparent_placeholder(&mut self, container: &ContainerId) {
        self.placeholder_container = Some(container.clone());
        if let Some(placeholder) = self.placeholder {
            if let Some(node) = self.nodes.get_mut(&placeholder) {
                node.container = Some(container.clone());
            }
        }
        self.placeholder_visible = true;
    }

    fn placeholder_index(&self) -> Option<usize> {
        self.placeholder_index
    }

    fn create_ghost(&mut self, container: &ContainerId, item: ProxyId) -> ProxyId {
        let rect = self.nodes.get(&item).map(|node| node.rect).unwrap_or(Rect::ZERO);
        let id = self.alloc();
        let mut node = Node::new(Some(container.clone()), rect);
        node.proxy = true;
        node.visible = false;
        self.nodes.insert(id, node);
        id
    }

    fn show_ghost(&mut self, ghost: ProxyId) {
        if let Some(node) = self.nodes.get_mut(&ghost) {
            node.visible = true;
        }
    }

    fn hide_ghost(&mut self, ghost: ProxyId) {
        if let Some(node) = self.nodes.get_mut(&ghost) {
            node.visible = false;
        }
    }

    fn replace_ghost(&mut self, ghost: ProxyId, replacement: ProxyId) {
        let slot = self.nodes.get(&ghost).and_then(|node| node.container.clone());
        self.nodes.shift_remove(&ghost);
        if let Some(node) = self.nodes.get_mut(&replacement) {
            node.container = slot;
            node.visible = true;
        }
    }

    fn isolates_stacking(&self) -> bool {
        self.isolates_stacking
    }

    fn stack_order(&self, container: &ContainerId) -> i32 {
        self.stack_orders.get(container).copied().unwrap_or(0)
    }

    fn set_stack_order(&mut self, container: &ContainerId, order: i32) {
        self.stack_orders.insert(container.clone(), order);
    }

    fn container_rect(&self, container: &ContainerId) -> Option<Rect> {
        self.container_rects.get(container).copied()
    }

    fn child_rects(&self, container: &ContainerId) -> Vec<Rect> {
        self.nodes
            .values()
            .filter(|node| {
                node.visible && !node.proxy && node.container.as_ref() == Some(container)
            })
            .map(|node| node.rect)
            .collect()
    }

    fn show_highlight(&mut self, rect: Rect) {
        self.highlights.push(rect);
    }

    fn clear_highlights(&mut self) {
        self.highlights.clear();
    }

    fn hide_menu(&mut self, container: &ContainerId) {
        if !self.hidden_menus.contains(container) {
            self.hidden_menus.push(container.clone());
        }
    }

    fn show_menu(&mut self, container: &ContainerId) {
        self.hidden_menus.retain(|c| c != container);
    }

    fn revert_to_origin(&mut self) {
        self.reverted = true;
        if let Some(helper) = self.active_helper.take() {
            if let Some(node) = self.nodes.get_mut(&helper) {
                node.visible = false;
            }
        }
    }

    fn abort_gesture(&mut self) {
        self.aborted = true;
    }

    fn finalize_proxy(&mut self, proxy: ProxyId) {
        if let Some(node) = self.nodes.get_mut(&proxy) {
            node.proxy = false;
            node.visible = true;
            node.transient = false;
            node.finalized = true;
        }
    }

    fn settle_proxy(&mut self, proxy: ProxyId) {
        if let Some(node) = self.nodes.get_mut(&proxy) {
            node.proxy = false;
            node.visible = true;
            node.transient = false;
            node.settled = true;
        }
    }

    fn clear_item_state(&mut self, item: ProxyId) {
        if let Some(node) = self.nodes.get_mut(&item) {
            node.transient = false;
        }
    }
}
