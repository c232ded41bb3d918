//! The in-memory element/container repository.

use indexmap::IndexMap;
use mosaic_api::{Container, ContainerId, Element, ElementId, PageState, PersistTarget};

use crate::{RecencyList, StoreConfig, StoreError, SyncClient, SyncError};

/// Everything the authoring surface knows about the current page.
///
/// All gesture logic runs synchronously against this value on the host's
/// event thread; only the sync client is asynchronous, and it never holds a
/// reference into the store across an await.
#[derive(Debug)]
pub struct ElementStore {
    config: StoreConfig,
    elements: IndexMap<ElementId, Element>,
    containers: IndexMap<ContainerId, Container>,
    favorites: RecencyList,
    recent: RecencyList,
    new_counter: u64,
    locale: String,
    allow_edit: bool,
    locked: bool,
}

impl ElementStore {
    pub fn new(config: StoreConfig) -> Self {
        let favorites = RecencyList::new(config.favorites_capacity);
        let recent = RecencyList::new(config.recent_capacity);
        Self {
            config,
            elements: IndexMap::new(),
            containers: IndexMap::new(),
            favorites,
            recent,
            new_counter: 0,
            locale: String::new(),
            allow_edit: false,
            locked: false,
        }
    }

    /// Replace the whole store with a freshly loaded page state.
    ///
    /// Atomic by construction: an error payload never reaches this point
    /// (the sync client rejects it), so ingestion either happens completely
    /// or not at all.
    pub fn apply_page_state(&mut self, page: PageState) {
        self.elements = page.elements;
        self.containers = page.containers;
        self.favorites = RecencyList::from_ids(page.favorites, self.config.favorites_capacity);
        self.recent = RecencyList::from_ids(page.recent, self.config.recent_capacity);
        self.new_counter = page.new_counter;
        self.locale = page.locale;
        self.allow_edit = page.allow_edit;
        self.locked = page.locked;
        tracing::debug!(
            elements = self.elements.len(),
            containers = self.containers.len(),
            "applied page state"
        );
    }

    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn container(&self, id: &ContainerId) -> Option<&Container> {
        self.containers.get(id)
    }

    pub fn containers(&self) -> impl Iterator<Item = (&ContainerId, &Container)> {
        self.containers.iter()
    }

    pub fn favorites(&self) -> &RecencyList {
        &self.favorites
    }

    pub fn recent(&self) -> &RecencyList {
        &self.recent
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn allow_edit(&self) -> bool {
        self.allow_edit
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    /// Insert or overwrite a single element. This is both the lazy-reload
    /// path and the property-edit path (edits reconstruct the element from
    /// server data rather than mutating in place).
    pub fn replace_element(&mut self, id: ElementId, element: Element) {
        self.elements.insert(id, element);
    }

    /// Register a container (page bootstrap declares the drop zones).
    pub fn insert_container(&mut self, id: ContainerId, container: Container) {
        self.containers.insert(id, container);
    }

    /// Mint an id for a newly created element.
    pub fn new_element_id(&mut self) -> ElementId {
        self.new_counter += 1;
        ElementId::new(format!("new{}", self.new_counter))
    }

    /// Look up `id`, lazily reloading it from the server if absent.
    ///
    /// Containers and recency lists must never reference a dangling id;
    /// this is the repair path for ids the page references but the element
    /// map does not yet hold.
    pub async fn ensure_element(
        &mut self,
        client: &SyncClient,
        id: &ElementId,
    ) -> Result<&Element, SyncError> {
        if !self.elements.contains_key(id) {
            let element = client.load_one(id).await?;
            self.elements.insert(id.clone(), element);
        }
        Ok(&self.elements[id])
    }

    /// Apply the membership mutation of one committed gesture.
    ///
    /// - `dest` is a menu container: the matching recency list is touched;
    ///   no container's element list changes.
    /// - `dest == start`: an in-place reorder; nothing is lost or
    ///   duplicated.
    /// - otherwise: the id leaves `start` (unless the gesture started from
    ///   a menu, whose membership is recency rather than placement) and
    ///   appears exactly once in `dest`, at `position` or at the tail.
    pub fn commit_move(
        &mut self,
        start: &ContainerId,
        dest: &ContainerId,
        id: &ElementId,
        position: Option<usize>,
    ) -> Result<(), StoreError> {
        if dest.is_menu() {
            if dest.is_favorites() {
                self.favorites.touch(id.clone());
            } else {
                self.recent.touch(id.clone());
            }
            tracing::debug!(element = %id, menu = %dest, "menu drop recorded");
            return Ok(());
        }

        if dest == start {
            let container = self
                .containers
                .get_mut(start)
                .ok_or_else(|| StoreError::UnknownContainer(start.clone()))?;
            let from = container
                .position(id)
                .ok_or_else(|| StoreError::UnknownElement(id.clone()))?;
            container.elements.remove(from);
            let at = position
                .unwrap_or(container.elements.len())
                .min(container.elements.len());
            container.elements.insert(at, id.clone());
            tracing::debug!(element = %id, container = %start, to = at, "reorder committed");
            return Ok(());
        }

        if !start.is_menu() {
            let source = self
                .containers
                .get_mut(start)
                .ok_or_else(|| StoreError::UnknownContainer(start.clone()))?;
            if let Some(from) = source.position(id) {
                source.elements.remove(from);
            }
        }

        let target = self
            .containers
            .get_mut(dest)
            .ok_or_else(|| StoreError::UnknownContainer(dest.clone()))?;
        // The same id never occurs twice within one container.
        if let Some(existing) = target.position(id) {
            target.elements.remove(existing);
        }
        let at = position
            .unwrap_or(target.elements.len())
            .min(target.elements.len());
        target.elements.insert(at, id.clone());
        tracing::debug!(element = %id, from = %start, to = %dest, at, "move committed");
        Ok(())
    }

    /// Promote an element to the front of the favorites list.
    pub fn add_favorite(&mut self, id: ElementId) {
        tracing::debug!(element = %id, "favorite added");
        self.favorites.touch(id);
    }

    /// Record an element as recently used.
    pub fn record_recent(&mut self, id: ElementId) {
        self.recent.touch(id);
    }

    /// Serialized current value of one aggregate, used as the persist
    /// request body. These shapes cannot fail to serialize.
    pub fn persist_body(&self, target: PersistTarget) -> serde_json::Value {
        let result = match target {
            PersistTarget::Containers => serde_json::to_value(&self.containers),
            PersistTarget::Favorites => serde_json::to_value(self.favorites.ids()),
            PersistTarget::Recent => serde_json::to_value(self.recent.ids()),
        };
        result.unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_api::ResponseState;

    fn id(s: &str) -> ElementId {
        ElementId::new(s)
    }

    fn cid(s: &str) -> ContainerId {
        ContainerId::new(s)
    }

    fn element(variants: &[&str]) -> Element {
        let contents = variants
            .iter()
            .map(|v| (cid(v), format!("<div>{v}</div>")))
            .collect();
        Element {
            contents,
            meta: Default::default(),
        }
    }

    fn store_with_page() -> ElementStore {
        let mut store = ElementStore::new(StoreConfig::default());
        for e in ["x", "y", "z"] {
            store.replace_element(id(e), element(&["page", "sidebar"]));
        }
        store.insert_container(
            cid("page"),
            Container::with_elements("page", vec![id("x"), id("y"), id("z")]),
        );
        store.insert_container(cid("sidebar"), Container::new("sidebar"));
        store.insert_container(cid("footer"), Container::new("footer"));
        store
    }

    #[test]
    fn apply_page_state_replaces_everything() {
        let mut store = store_with_page();
        let page: PageState = serde_json::from_value(serde_json::json!({
            "state": "ok",
            "elements": { "a": { "contents": { "page": "<p>a</p>" }, "title": "A" } },
            "containers": { "page": { "type": "page", "elements": ["a"] } },
            "favorites": ["a", "a"],
            "recent": [],
            "newCounter": 3,
            "locale": "en",
            "allowEdit": true,
            "locked": false,
        }))
        .unwrap();
        assert_eq!(page.state, ResponseState::Ok);
        store.apply_page_state(page);

        assert!(store.element(&id("x")).is_none());
        assert_eq!(store.container(&cid("page")).unwrap().len(), 1);
        // Server duplicates are deduped on ingestion.
        assert_eq!(store.favorites().len(), 1);
        assert!(store.allow_edit());
        assert_eq!(store.locale(), "en");
    }

    #[test]
    fn new_element_ids_follow_the_counter() {
        let mut store = ElementStore::new(StoreConfig::default());
        assert_eq!(store.new_element_id(), id("new1"));
        assert_eq!(store.new_element_id(), id("new2"));
    }

    #[test]
    fn cross_container_move_conserves_membership() {
        let mut store = store_with_page();
        store
            .commit_move(&cid("page"), &cid("sidebar"), &id("y"), None)
            .unwrap();

        let page = store.container(&cid("page")).unwrap();
        let sidebar = store.container(&cid("sidebar")).unwrap();
        assert!(!page.contains(&id("y")));
        assert_eq!(sidebar.elements, vec![id("y")]);
        // Untouched container is untouched.
        assert!(store.container(&cid("footer")).unwrap().is_empty());
    }

    #[test]
    fn same_container_drop_is_a_reorder() {
        let mut store = store_with_page();
        store
            .commit_move(&cid("page"), &cid("page"), &id("y"), Some(0))
            .unwrap();

        let page = store.container(&cid("page")).unwrap();
        assert_eq!(page.elements, vec![id("y"), id("x"), id("z")]);
    }

    #[test]
    fn move_into_container_already_holding_the_id_does_not_duplicate() {
        let mut store = store_with_page();
        store
            .commit_move(&cid("page"), &cid("sidebar"), &id("y"), None)
            .unwrap();
        // Stale gesture against the old layout: y is already in sidebar.
        store
            .commit_move(&cid("page"), &cid("sidebar"), &id("y"), Some(0))
            .unwrap();

        let sidebar = store.container(&cid("sidebar")).unwrap();
        assert_eq!(sidebar.elements, vec![id("y")]);
    }

    #[test]
    fn favorites_drop_leaves_container_lists_alone() {
        let mut store = store_with_page();
        store
            .commit_move(&cid("page"), &ContainerId::favorites(), &id("y"), None)
            .unwrap();

        assert_eq!(store.favorites().front(), Some(&id("y")));
        let page = store.container(&cid("page")).unwrap();
        assert_eq!(page.elements, vec![id("x"), id("y"), id("z")]);
    }

    #[test]
    fn menu_start_does_not_touch_menu_membership() {
        let mut store = store_with_page();
        store.add_favorite(id("y"));
        store
            .commit_move(&ContainerId::favorites(), &cid("sidebar"), &id("y"), None)
            .unwrap();

        assert!(store.favorites().contains(&id("y")));
        assert!(store.container(&cid("sidebar")).unwrap().contains(&id("y")));
    }

    #[test]
    fn commit_move_rejects_unknown_container() {
        let mut store = store_with_page();
        let err = store
            .commit_move(&cid("page"), &cid("nowhere"), &id("y"), None)
            .unwrap_err();
        assert!(matches!(err, StoreError::UnknownContainer(_)));
    }

    #[test]
    fn persist_bodies_have_wire_shapes() {
        let mut store = store_with_page();
        store.add_favorite(id("x"));

        let favorites = store.persist_body(PersistTarget::Favorites);
        assert_eq!(favorites, serde_json::json!(["x"]));

        let containers = store.persist_body(PersistTarget::Containers);
        assert_eq!(containers["page"]["type"], "page");
        assert_eq!(containers["page"]["elements"][1], "y");
    }
}
