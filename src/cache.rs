//! In-memory caching using moka
//!
//! Vehicle rate rows are read on every quote and change rarely, so they are
//! kept for a short TTL. Quotes themselves are never cached.

use moka::future::Cache;
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

use crate::db::queries;
use crate::error::Result;
use crate::models::Vehicle;

/// Application cache holding vehicle pricing rows
#[derive(Clone)]
pub struct AppCache {
    /// Vehicles (id -> Vehicle)
    pub vehicles: Cache<Uuid, Arc<Vehicle>>,
}

impl AppCache {
    /// Create a new cache instance with the given vehicle TTL
    pub fn new(vehicle_ttl: Duration) -> Self {
        Self {
            // Vehicles: 500 entries, idle entries dropped after half the TTL
            vehicles: Cache::builder()
                .max_capacity(500)
                .time_to_live(vehicle_ttl)
                .time_to_idle(vehicle_ttl / 2)
                .build(),
        }
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            vehicles_size: self.vehicles.entry_count(),
        }
    }

    /// Get a vehicle, reading through to the database on a miss
    pub async fn vehicle(&self, pool: &PgPool, id: Uuid) -> Result<Arc<Vehicle>> {
        if let Some(cached) = self.vehicles.get(&id).await {
            debug!("Cache HIT for vehicle: {}", id);
            return Ok(cached);
        }

        debug!("Cache MISS for vehicle: {}", id);
        let vehicle = Arc::new(queries::get_vehicle(pool, id).await?);
        self.vehicles.insert(id, vehicle.clone()).await;
        Ok(vehicle)
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(5 * 60))
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub vehicles_size: u64,
}
