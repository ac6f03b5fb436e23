// src/services/cache.rs
// DOCUMENTATION: In-memory cache for model-generated accessibility profiles
// PURPOSE: Avoid a model call for every /analyze, /css and /react request

use crate::models::{AccessibilityProfile, DisabilityType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Cache entry with expiration
#[derive(Clone, Debug)]
struct CacheEntry<T> {
    data: T,
    expires_at: Instant,
}

impl<T> CacheEntry<T> {
    fn new(data: T, ttl: Duration) -> Self {
        Self {
            data,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() > self.expires_at
    }
}

/// Profile cache with TTL
/// DOCUMENTATION: Thread-safe; one entry per disability type
pub struct ProfileCache {
    store: Arc<RwLock<HashMap<DisabilityType, CacheEntry<AccessibilityProfile>>>>,
    default_ttl: Duration,
}

impl ProfileCache {
    pub fn new(ttl_seconds: u64) -> Self {
        Self {
            store: Arc::new(RwLock::new(HashMap::new())),
            default_ttl: Duration::from_secs(ttl_seconds),
        }
    }

    pub async fn get(&self, key: DisabilityType) -> Option<AccessibilityProfile> {
        let store = self.store.read().await;

        match store.get(&key) {
            Some(entry) if !entry.is_expired() => {
                log::debug!("Cache HIT for profile: {}", key);
                Some(entry.data.clone())
            }
            Some(_) => {
                log::debug!("Cache EXPIRED for profile: {}", key);
                None
            }
            None => {
                log::debug!("Cache MISS for profile: {}", key);
                None
            }
        }
    }

    pub async fn set(&self, key: DisabilityType, profile: AccessibilityProfile) {
        self.set_with_ttl(key, profile, self.default_ttl).await;
    }

    pub async fn set_with_ttl(&self, key: DisabilityType, profile: AccessibilityProfile, ttl: Duration) {
        let mut store = self.store.write().await;
        store.insert(key, CacheEntry::new(profile, ttl));
        log::debug!("Cache SET for profile: {} (TTL: {}s)", key, ttl.as_secs());
    }

    /// Clear expired entries
    pub async fn cleanup(&self) {
        let mut store = self.store.write().await;
        let before_count = store.len();
        store.retain(|_, entry| !entry.is_expired());
        let after_count = store.len();

        if before_count > after_count {
            log::info!(
                "Profile cache cleanup: removed {} expired entries ({} remaining)",
                before_count - after_count,
                after_count
            );
        }
    }

    pub async fn stats(&self) -> CacheStats {
        let store = self.store.read().await;
        let total = store.len();
        let expired = store.values().filter(|e| e.is_expired()).count();

        CacheStats {
            total_entries: total,
            expired_entries: expired,
            active_entries: total - expired,
        }
    }

    pub async fn clear(&self) {
        let mut store = self.store.write().await;
        let count = store.len();
        store.clear();
        log::info!("Profile cache cleared: {} entries removed", count);
    }
}

/// Cache statistics
#[derive(Debug, Serialize, Deserialize)]
pub struct CacheStats {
    pub total_entries: usize,
    pub expired_entries: usize,
    pub active_entries: usize,
}

/// Start background cleanup task
/// DOCUMENTATION: Periodically removes expired entries
pub fn start_cleanup_task(cache: Arc<ProfileCache>, interval_seconds: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(interval_seconds));

        loop {
            interval.tick().await;
            cache.cleanup().await;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProfileSource;

    fn profile(dt: DisabilityType) -> AccessibilityProfile {
        AccessibilityProfile {
            disability_type: dt,
            modifications: vec![],
            css_classes: vec![dt.css_class()],
            content_adaptations: vec![],
            summary: "cached".into(),
            source: ProfileSource::Model,
        }
    }

    #[test]
    fn test_clear_empties_cache() {
        let cache = ProfileCache::new(60);
        tokio_test::block_on(async {
            cache.set(DisabilityType::Dyslexia, profile(DisabilityType::Dyslexia)).await;
            cache.clear().await;
            assert_eq!(cache.stats().await.total_entries, 0);
        });
    }

    #[tokio::test]
    async fn test_cache_set_get() {
        let cache = ProfileCache::new(60);
        cache.set(DisabilityType::Dyslexia, profile(DisabilityType::Dyslexia)).await;

        let hit = cache.get(DisabilityType::Dyslexia).await.unwrap();
        assert_eq!(hit.summary, "cached");
        assert!(cache.get(DisabilityType::LowVision).await.is_none());
    }

    #[tokio::test]
    async fn test_cache_expiration() {
        let cache = ProfileCache::new(60);
        cache
            .set_with_ttl(
                DisabilityType::LowVision,
                profile(DisabilityType::LowVision),
                Duration::from_millis(50),
            )
            .await;

        assert!(cache.get(DisabilityType::LowVision).await.is_some());
        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(cache.get(DisabilityType::LowVision).await.is_none());

        cache.cleanup().await;
        assert_eq!(cache.stats().await.total_entries, 0);
    }

    #[tokio::test]
    async fn test_cache_clear() {
        let cache = ProfileCache::new(60);
        for dt in DisabilityType::all() {
            cache.set(dt, profile(dt)).await;
        }
        assert_eq!(cache.stats().await.active_entries, 5);

        cache.clear().await;
        assert_eq!(cache.stats().await.total_entries, 0);
    }
}
