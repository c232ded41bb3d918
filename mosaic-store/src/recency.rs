//! Bounded, duplicate-free, most-recent-first id lists.

use mosaic_api::ElementId;

/// Ordered id list with MRU-first semantics and a hard capacity.
///
/// Backs both the favorites and the recently-used pseudo-containers. Lists
/// are small and bounded, so the O(n) scan in [`RecencyList::touch`] is the
/// whole story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecencyList {
    ids: Vec<ElementId>,
    capacity: usize,
}

impl RecencyList {
    pub fn new(capacity: usize) -> Self {
        Self {
            ids: Vec::new(),
            capacity,
        }
    }

    /// Build from a server payload, deduplicating (first occurrence wins)
    /// and truncating to capacity.
    pub fn from_ids(ids: Vec<ElementId>, capacity: usize) -> Self {
        let mut list = Self::new(capacity);
        for id in ids {
            if !list.contains(&id) && list.ids.len() < capacity {
                list.ids.push(id);
            }
        }
        list
    }

    /// Promote `id` to the front.
    ///
    /// The single primitive behind both "promote to favorite" and "record
    /// recently used": an existing occurrence is moved, never duplicated,
    /// and the tail is truncated to capacity. Touching the front id again
    /// is a no-op.
    pub fn touch(&mut self, id: ElementId) {
        self.ids.retain(|existing| *existing != id);
        self.ids.insert(0, id);
        self.ids.truncate(self.capacity);
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    pub fn ids(&self) -> &[ElementId] {
        &self.ids
    }

    pub fn front(&self) -> Option<&ElementId> {
        self.ids.first()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
