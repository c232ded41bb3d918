//! Mosaic Store - In-memory element/container repository and sync client.
//!
//! Owns every `Element` and `Container` on the page plus the favorites and
//! recently-used lists. The drag engine reads it during a gesture and asks
//! it to commit at most one membership mutation when a gesture lands;
//! synchronization with the server happens out of band through
//! [`SyncClient`].

mod config;
mod error;
mod recency;
mod store;
mod sync;

pub use config::StoreConfig;
pub use error::{StoreError, SyncError};
pub use recency::RecencyList;
pub use store::ElementStore;
pub use sync::{AlertSink, SyncClient, Transport};
