//! Content elements — reusable fragments with per-container-type variants.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::ContainerId;

/// Display-only resource metadata. Placement logic never consults it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceMeta {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    /// Resource type (image, text, teaser, ...). `type` on the wire.
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// A reusable content element.
///
/// `contents` maps a container type name to the pre-rendered markup shown in
/// containers of that type. The map keeps the server's insertion order, and
/// that order is contractual: during a drag, the first eligible container in
/// it wins ties for the default active helper.
///
/// Elements are owned by the store. The drag engine never mutates one in
/// place; property edits replace the whole entry from server data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    #[serde(default)]
    pub contents: IndexMap<ContainerId, String>,
    #[serde(flatten)]
    pub meta: ResourceMeta,
}

impl Element {
    /// The markup variant for one container type, if the element has one.
    pub fn content_for(&self, container: &ContainerId) -> Option<&str> {
        self.contents.get(container).map(String::as_str)
    }

    /// Whether the element can be dropped into containers of this type.
    pub fn is_eligible_for(&self, container: &ContainerId) -> bool {
        self.contents.contains_key(container)
    }
}
