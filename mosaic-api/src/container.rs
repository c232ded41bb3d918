//! Drop-target containers and their ordered element membership.

use serde::{Deserialize, Serialize};

use crate::ElementId;

/// A named drop target holding an ordered list of element ids.
///
/// Keyed by [`crate::ContainerId`] in the store and on the wire; the id is
/// not repeated inside the body. The same element id may appear in several
/// containers but never twice within one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    /// The container's type name; selects which element content variant it
    /// displays.
    #[serde(rename = "type")]
    pub kind: String,
    /// Ordered membership.
    #[serde(default)]
    pub elements: Vec<ElementId>,
}

impl Container {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            elements: Vec::new(),
        }
    }

    pub fn with_elements(kind: impl Into<String>, elements: Vec<ElementId>) -> Self {
        Self {
            kind: kind.into(),
            elements,
        }
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.elements.iter().any(|e| e == id)
    }

    pub fn position(&self, id: &ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e == id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_queries() {
        let container = Container::with_elements(
            "page",
            vec![ElementId::new("a"), ElementId::new("b")],
        );
        assert!(container.contains(&ElementId::new("a")));
        assert_eq!(container.position(&ElementId::new("b")), Some(1));
        assert_eq!(container.position(&ElementId::new("c")), None);
    }

    #[test]
    fn wire_shape_uses_type_key() {
        let container = Container::with_elements("page", vec![ElementId::new("a")]);
        let value = serde_json::to_value(&container).unwrap();
        assert_eq!(value["type"], "page");
        assert_eq!(value["elements"][0], "a");
    }
}
