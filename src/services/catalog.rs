use std::sync::Arc;
use std::time::Duration;

use crate::models::Ball;
use crate::services::postgres::{PostgresClient, PostgresError};

const CATALOG_KEY: &str = "balls:all";

/// TTL'd snapshots of the ball catalog
///
/// Handlers take one snapshot per request and pass it into the recommender;
/// the scoring core itself never reads this cache, so a batch always scores
/// against a single consistent catalog.
pub struct CatalogCache {
    cache: moka::future::Cache<&'static str, Arc<Vec<Ball>>>,
}

impl CatalogCache {
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let cache = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    /// Current catalog snapshot, loading from PostgreSQL on miss
    pub async fn snapshot(
        &self,
        postgres: &PostgresClient,
    ) -> Result<Arc<Vec<Ball>>, PostgresError> {
        if let Some(balls) = self.cache.get(CATALOG_KEY).await {
            tracing::trace!("Catalog cache hit ({} balls)", balls.len());
            return Ok(balls);
        }

        let balls = Arc::new(postgres.list_balls().await?);
        self.cache.insert(CATALOG_KEY, balls.clone()).await;
        tracing::debug!("Catalog cache refreshed ({} balls)", balls.len());

        Ok(balls)
    }

    /// Drop the cached snapshot so the next request reloads
    pub async fn invalidate(&self) {
        self.cache.invalidate(CATALOG_KEY).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "Requires PostgreSQL"]
    async fn test_snapshot_round_trip() {
        let postgres = PostgresClient::new("postgres://localhost:5432/lanematch", 2, 1)
            .await
            .expect("Failed to connect");
        let cache = CatalogCache::new(16, 60);

        let first = cache.snapshot(&postgres).await.unwrap();
        let second = cache.snapshot(&postgres).await.unwrap();

        // Second call must serve the same snapshot
        assert!(Arc::ptr_eq(&first, &second));

        cache.invalidate().await;
    }
}
