use std::future::Future;
use std::sync::Arc;

use futures_util::FutureExt;
use futures_util::future::{BoxFuture, Shared};
use tokio::sync::Mutex;
use wortkarte_core::error::LoadError;

type SharedLoad<T> = Shared<BoxFuture<'static, Result<Arc<T>, LoadError>>>;

enum Slot<T> {
    Empty,
    /// Load in flight, tagged with its id
    Loading(u64, SharedLoad<T>),
    Ready(Arc<T>),
}

struct Inner<T> {
    slot: Slot<T>,
    /// Id for the next load; a waiter only writes back while its own load holds the slot
    next_load: u64,
}

/// Memoized resource with explicit invalidation.
///
/// Concurrent `load` calls share one in-flight future. A failed load leaves the cache
/// empty, so the next `load` fetches again.
pub struct ResourceCache<T> {
    inner: Mutex<Inner<T>>,
}

impl<T: Send + Sync + 'static> ResourceCache<T> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                slot: Slot::Empty,
                next_load: 0,
            }),
        }
    }

    /// Cached value, without loading
    pub async fn get(&self) -> Option<Arc<T>> {
        match &self.inner.lock().await.slot {
            Slot::Ready(value) => Some(Arc::clone(value)),
            Slot::Empty | Slot::Loading(..) => None,
        }
    }

    pub async fn is_loading(&self) -> bool {
        matches!(self.inner.lock().await.slot, Slot::Loading(..))
    }

    /// Return the cached value or run `loader`, joining a load already in flight.
    pub async fn load<F, Fut>(&self, loader: F) -> Result<Arc<T>, LoadError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, LoadError>> + Send + 'static,
    {
        let (id, future) = {
            let mut inner = self.inner.lock().await;

            let in_flight = match &inner.slot {
                Slot::Ready(value) => return Ok(Arc::clone(value)),
                Slot::Loading(id, future) => Some((*id, future.clone())),
                Slot::Empty => None,
            };

            match in_flight {
                Some(load) => load,
                None => {
                    let id = inner.next_load;
                    inner.next_load += 1;

                    let future = loader().map(|result| result.map(Arc::new)).boxed().shared();
                    inner.slot = Slot::Loading(id, future.clone());
                    (id, future)
                }
            }
        };

        let result = future.await;

        // a retry or an invalidate may have replaced the slot meanwhile
        let mut inner = self.inner.lock().await;
        if matches!(inner.slot, Slot::Loading(current, _) if current == id) {
            inner.slot = match &result {
                Ok(value) => Slot::Ready(Arc::clone(value)),
                Err(_) => Slot::Empty,
            };
        }

        result
    }

    /// Drop the cached value. A load in flight still completes for its waiters but is
    /// not stored.
    pub async fn invalidate(&self) {
        self.inner.lock().await.slot = Slot::Empty;
    }
}

impl<T: Send + Sync + 'static> Default for ResourceCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
