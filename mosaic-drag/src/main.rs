//! Demo: load a page over a loopback transport, run two scripted drag
//! gestures against the headless host, and persist the dirty aggregates.
//!
//! Run with `RUST_LOG=debug cargo run --bin mosaic-demo` to watch the
//! engine's tracing.

use anyhow::Context;
use async_trait::async_trait;
use mosaic_api::{ContainerId, ElementId, SyncRequest};
use mosaic_drag::headless::HeadlessHost;
use mosaic_drag::primitives::Rect;
use mosaic_drag::{DragController, ProxyId};
use mosaic_store::{AlertSink, ElementStore, StoreConfig, SyncClient, SyncError, Transport};
use tracing_subscriber::EnvFilter;

/// In-process stand-in for the legacy endpoint: one canned page, every
/// persist acknowledged.
struct LoopbackTransport;

#[async_trait]
impl Transport for LoopbackTransport {
    async fn exchange(&self, request: &SyncRequest) -> Result<serde_json::Value, SyncError> {
        if request.is_post() {
            tracing::info!(query = ?request.query(), body = %request.body().cloned().unwrap_or_default(), "persist accepted");
            return Ok(serde_json::json!({ "state": "ok" }));
        }
        match request.query().first().map(|(_, v)| v.clone()).as_deref() {
            Some("all") => Ok(demo_page()),
            other => Err(SyncError::Transport(format!(
                "loopback has no route for {other:?}"
            ))),
        }
    }
}

struct LogAlerts;

impl AlertSink for LogAlerts {
    fn alert(&self, message: &str) {
        tracing::error!("ALERT: {message}");
    }
}

fn demo_page() -> serde_json::Value {
    serde_json::json!({
        "state": "ok",
        "elements": {
            "teaser-1": {
                "contents": {
                    "page": "<div class='teaser'>Spring teaser</div>",
                    "sidebar": "<li>Spring teaser</li>",
                },
                "title": "Spring teaser",
                "author": "jdoe",
                "type": "teaser",
            },
            "article-7": {
                "contents": { "page": "<article>Board minutes</article>" },
                "title": "Board minutes",
                "author": "board",
                "type": "text",
            },
            "img-3": {
                "contents": {
                    "page": "<img src='lake.jpg'>",
                    "sidebar": "<img src='lake_small.jpg'>",
                },
                "title": "Lake",
                "type": "image",
            },
        },
        "containers": {
            "page": { "type": "page", "elements": ["teaser-1", "article-7", "img-3"] },
            "sidebar": { "type": "sidebar", "elements": [] },
            "footer": { "type": "footer", "elements": [] },
        },
        "favorites": [],
        "recent": ["article-7"],
        "newCounter": 1,
        "locale": "en",
        "allowEdit": true,
        "locked": false,
    })
}

/// Lay the page out as a fixed-geometry headless scene and remember each
/// rendered item's host handle.
fn build_scene(store: &ElementStore) -> (HeadlessHost, Vec<(ElementId, ProxyId)>) {
    let mut host = HeadlessHost::new();
    let mut items = Vec::new();
    let mut x = 0.0;
    let mut order = 1;
    for (container_id, container) in store.containers() {
        host.add_container(
            container_id.clone(),
            Rect::new(x, 0.0, 240.0, 600.0),
            order,
        );
        let mut y = 0.0;
        for element_id in &container.elements {
            let item = host.add_item(
                container_id,
                element_id.clone(),
                Rect::new(x + 8.0, y + 8.0, 224.0, 56.0),
            );
            items.push((element_id.clone(), item));
            y += 64.0;
        }
        x += 260.0;
        order += 1;
    }
    host.add_container(ContainerId::favorites(), Rect::new(x, 0.0, 180.0, 300.0), order);
    (host, items)
}

async fn persist_dirty(
    client: &SyncClient,
    store: &ElementStore,
    outcome: &mosaic_drag::GestureOutcome,
) -> anyhow::Result<()> {
    for target in outcome.dirty() {
        client
            .persist(target, store.persist_body(target))
            .await
            .with_context(|| format!("persisting {}", target.as_str()))?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = StoreConfig::default();
    let client = SyncClient::new(
        Box::new(LoopbackTransport),
        Box::new(LogAlerts),
        config.sync_timeout,
    );

    let page = client.load_all("home").await.context("loading demo page")?;
    let mut store = ElementStore::new(config);
    store.apply_page_state(page);

    let (mut host, items) = build_scene(&store);
    let teaser = items
        .iter()
        .find(|(id, _)| id == &ElementId::new("teaser-1"))
        .map(|(_, item)| *item)
        .context("teaser-1 not rendered")?;
    let image = items
        .iter()
        .find(|(id, _)| id == &ElementId::new("img-3"))
        .map(|(_, item)| *item)
        .context("img-3 not rendered")?;

    let mut controller = DragController::new();

    // Gesture 1: drag the teaser from the page into the sidebar.
    let drag = host.begin_drag(teaser);
    controller.on_start(&store, &mut host, drag);
    controller.on_enter(&mut host, &ContainerId::new("sidebar"));
    controller.on_before_stop();
    let outcome = controller.on_stop(&mut store, &mut host);
    tracing::info!(?outcome, "gesture 1 finished");
    persist_dirty(&client, &store, &outcome).await?;

    // Gesture 2: drag the image into the favorites menu.
    let drag = host.begin_drag(image);
    controller.on_start(&store, &mut host, drag);
    controller.on_enter(&mut host, &ContainerId::favorites());
    controller.on_before_stop();
    let outcome = controller.on_stop(&mut store, &mut host);
    tracing::info!(?outcome, "gesture 2 finished");
    persist_dirty(&client, &store, &outcome).await?;

    for (id, container) in store.containers() {
        tracing::info!(container = %id, elements = ?container.elements, "final layout");
    }
    tracing::info!(favorites = ?store.favorites().ids(), recent = ?store.recent().ids(), "final menus");
    Ok(())
}
