//! Wire payload shapes for the store synchronization protocol.
//!
//! The server owns these layouts; field names follow its legacy camelCase
//! scheme. Every response carries a `state` marker, and `state == "error"`
//! responses are treated identically regardless of the request: surface the
//! server message, report failure, mutate nothing.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{Container, ContainerId, Element, ElementId};

/// Outcome marker present on every response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseState {
    Ok,
    Error,
}

/// Which aggregate a persist request writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistTarget {
    Containers,
    Favorites,
    Recent,
}

impl PersistTarget {
    /// The legacy `obj=` parameter value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Containers => "containers",
            Self::Favorites => "favorites",
            Self::Recent => "recent",
        }
    }
}

/// A request to the synchronization endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncRequest {
    /// Fetch the full page state.
    LoadAll { page: String },
    /// Fetch a single element by id (the lazy reload path).
    LoadOne { elem: ElementId },
    LoadFavorites,
    LoadRecent,
    /// Write one aggregate; `body` is its serialized current value.
    Persist {
        target: PersistTarget,
        body: serde_json::Value,
    },
}

impl SyncRequest {
    /// Query parameters in the legacy `obj=...` scheme.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::LoadAll { page } => vec![("obj", "all".into()), ("page", page.clone())],
            Self::LoadOne { elem } => vec![("obj", "elem".into()), ("elem", elem.to_string())],
            Self::LoadFavorites => vec![("obj", "favorites".into())],
            Self::LoadRecent => vec![("obj", "recent".into())],
            Self::Persist { target, .. } => vec![("obj", target.as_str().into())],
        }
    }

    /// POST body, present only for persist requests.
    pub fn body(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Persist { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn is_post(&self) -> bool {
        matches!(self, Self::Persist { .. })
    }
}

/// The bare envelope every response can be read as.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub state: ResponseState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response to `load-all`: the complete page state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageState {
    pub state: ResponseState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub elements: IndexMap<ElementId, Element>,
    #[serde(default)]
    pub containers: IndexMap<ContainerId, Container>,
    #[serde(default)]
    pub favorites: Vec<ElementId>,
    #[serde(default)]
    pub recent: Vec<ElementId>,
    /// Counter the client bumps to mint ids for newly created elements.
    #[serde(default)]
    pub new_counter: u64,
    #[serde(default)]
    pub locale: String,
    #[serde(default)]
    pub allow_edit: bool,
    #[serde(default)]
    pub locked: bool,
}

/// Response to `load-one`: a map holding (at least) the requested element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementsPayload {
    pub state: ResponseState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub elements: IndexMap<ElementId, Element>,
}

/// Response to `load-favorites` / `load-recent`: the ordered id list under
/// the aggregate's own key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdListPayload {
    pub state: ResponseState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, alias = "favorites", alias = "recent")]
    pub ids: Vec<ElementId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_state_parses_legacy_camel_case() {
        let page: PageState = serde_json::from_value(serde_json::json!({
            "state": "ok",
            "elements": {},
            "containers": {
                "page": { "type": "page", "elements": ["a", "b"] }
            },
            "favorites": ["a"],
            "recent": [],
            "newCounter": 7,
            "locale": "de",
            "allowEdit": true,
            "locked": false,
        }))
        .unwrap();
        assert_eq!(page.state, ResponseState::Ok);
        assert_eq!(page.new_counter, 7);
        assert!(page.allow_edit);
        assert_eq!(page.containers[&ContainerId::new("page")].len(), 2);
    }

    #[test]
    fn error_envelope_parses_without_data() {
        let ack: Ack = serde_json::from_value(serde_json::json!({
            "state": "error",
            "error": "page is locked",
        }))
        .unwrap();
        assert_eq!(ack.state, ResponseState::Error);
        assert_eq!(ack.error.as_deref(), Some("page is locked"));
    }

    #[test]
    fn id_list_accepts_aggregate_key() {
        let payload: IdListPayload = serde_json::from_value(serde_json::json!({
            "state": "ok",
            "favorites": ["x", "y"],
        }))
        .unwrap();
        assert_eq!(payload.ids.len(), 2);
    }

    #[test]
    fn requests_carry_legacy_query_params() {
        let req = SyncRequest::LoadOne {
            elem: ElementId::new("e12"),
        };
        assert_eq!(
            req.query(),
            vec![("obj", "elem".to_string()), ("elem", "e12".to_string())]
        );
        assert!(!req.is_post());

        let persist = SyncRequest::Persist {
            target: PersistTarget::Favorites,
            body: serde_json::json!(["e12"]),
        };
        assert!(persist.is_post());
        assert_eq!(persist.query()[0].1, "favorites");
    }
}
