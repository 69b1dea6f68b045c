//! In-memory route persistence.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::coordinate::Coordinate;
use crate::traits::RouteStore;

pub use crate::error::StoreError;
pub use crate::traits::StoredRoute;

#[derive(Debug, Default)]
struct Inner {
    last_id: u64,
    routes: HashMap<u64, Vec<Coordinate>>,
}

/// Thread-safe store backed by a map. Ids start at 1.
#[derive(Debug, Default)]
pub struct InMemoryRouteStore {
    inner: RwLock<Inner>,
}

impl InMemoryRouteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.read().routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A poisoned lock still holds consistent data: every write is a single insert.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RouteStore for InMemoryRouteStore {
    fn create(&self, points: Vec<Coordinate>) -> StoredRoute {
        let mut inner = self.write();
        inner.last_id += 1;
        let id = inner.last_id;
        inner.routes.insert(id, points.clone());
        tracing::debug!(id, points = points.len(), "stored route");
        StoredRoute { id, points }
    }

    fn get(&self, id: u64) -> Result<StoredRoute, StoreError> {
        self.read()
            .routes
            .get(&id)
            .map(|points| StoredRoute {
                id,
                points: points.clone(),
            })
            .ok_or(StoreError::NotFound(id))
    }
}
