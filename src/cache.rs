//! In-memory caching using moka
//!
//! Holds booking drafts while a host is negotiating. Drafts expire on their
//! own once the host stops editing them. Each draft sits behind its own lock
//! so concurrent edits to one draft apply in sequence.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::config::Config;
use crate::drafts::BookingDraft;

/// A cached draft, locked for the duration of an edit
pub type SharedDraft = Arc<Mutex<BookingDraft>>;

/// Application cache holding open booking drafts
#[derive(Clone)]
pub struct AppCache {
    /// Drafts (draft id -> BookingDraft)
    pub drafts: Cache<Uuid, SharedDraft>,
}

impl AppCache {
    /// Create a new cache instance with configured limits
    pub fn new(config: &Config) -> Self {
        Self {
            drafts: Cache::builder()
                .max_capacity(config.draft_capacity)
                .time_to_live(config.draft_ttl)
                .time_to_idle(config.draft_idle)
                .build(),
        }
    }

    pub async fn get_draft(&self, id: Uuid) -> Option<SharedDraft> {
        self.drafts.get(&id).await
    }

    pub async fn put_draft(&self, draft: BookingDraft) -> SharedDraft {
        let id = draft.id;
        let draft = Arc::new(Mutex::new(draft));
        self.drafts.insert(id, draft.clone()).await;
        draft
    }

    /// Remove a draft, returning it if it was still cached
    pub async fn remove_draft(&self, id: Uuid) -> Option<SharedDraft> {
        let removed = self.drafts.remove(&id).await;
        if removed.is_some() {
            info!("Draft {} discarded", id);
        }
        removed
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            drafts_size: self.drafts.entry_count(),
        }
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub drafts_size: u64,
}
