//! Identifier newtypes shared across the authoring surface.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a content element. Minted by the server (or from
/// the page's `newCounter` for locally created elements).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reserved id of the favorites menu container.
pub const FAVORITES_CONTAINER: &str = "favorites";

/// Reserved id of the recently-used menu container.
pub const RECENT_CONTAINER: &str = "recent";

/// Unique identifier for a drop-target container.
///
/// Container ids double as type names: an element's content-variant map is
/// keyed by the same namespace, matching the legacy payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerId(pub String);

impl ContainerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn favorites() -> Self {
        Self(FAVORITES_CONTAINER.to_string())
    }

    pub fn recent() -> Self {
        Self(RECENT_CONTAINER.to_string())
    }

    /// Menu containers (favorites, recent) record membership and recency
    /// rather than order, and have their own drop semantics.
    pub fn is_menu(&self) -> bool {
        self.0 == FAVORITES_CONTAINER || self.0 == RECENT_CONTAINER
    }

    pub fn is_favorites(&self) -> bool {
        self.0 == FAVORITES_CONTAINER
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_containers_are_reserved_ids() {
        assert!(ContainerId::favorites().is_menu());
        assert!(ContainerId::recent().is_menu());
        assert!(!ContainerId::new("page").is_menu());
    }

    #[test]
    fn favorites_is_not_recent() {
        assert!(ContainerId::favorites().is_favorites());
        assert!(!ContainerId::recent().is_favorites());
    }
}
