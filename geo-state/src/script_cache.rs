//! Memoized loading of external scripts.
//!
//! The first caller for a URL starts the load; every later caller gets a
//! clone of the same shared future, pending or resolved. Outcomes are cached
//! for the lifetime of the cache, failures included.

use futures::future::{FutureExt, LocalBoxFuture, Shared};
use log::debug;
use std::collections::HashMap;
use std::future::Future;

/// Outcome of a script load; the error is a user-facing message.
pub type LoadResult = Result<(), String>;

/// A load that any number of callers can await.
pub type SharedLoad = Shared<LocalBoxFuture<'static, LoadResult>>;

#[derive(Default)]
pub struct ScriptCache {
    loads: HashMap<String, SharedLoad>,
}

impl ScriptCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The load for `url`, calling `start` only if none exists yet.
    pub fn get_or_start<F, Fut>(&mut self, url: &str, start: F) -> SharedLoad
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = LoadResult> + 'static,
    {
        if let Some(load) = self.loads.get(url) {
            debug!("Reusing script load for {}", url);
            return load.clone();
        }
        debug!("Starting script load for {}", url);
        let load = start().boxed_local().shared();
        self.loads.insert(url.to_string(), load.clone());
        load
    }

    #[cfg(test)]
    fn contains(&self, url: &str) -> bool {
        self.loads.contains_key(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_load_started_once_per_url() {
        let mut cache = ScriptCache::new();
        let starts = Rc::new(Cell::new(0));

        let counter = starts.clone();
        let first = cache.get_or_start("https://maps.example/js", move || {
            counter.set(counter.get() + 1);
            async { Ok(()) }
        });
        let counter = starts.clone();
        let second = cache.get_or_start("https://maps.example/js", move || {
            counter.set(counter.get() + 1);
            async { Ok(()) }
        });

        assert_eq!(starts.get(), 1);
        assert_eq!(block_on(first), Ok(()));
        assert_eq!(block_on(second), Ok(()));
    }

    #[test]
    fn test_pending_load_is_shared() {
        let mut cache = ScriptCache::new();
        let (tx, rx) = oneshot::channel::<LoadResult>();
        let first = cache.get_or_start("https://d3.example/d3.js", move || async move {
            rx.await.unwrap_or_else(|_| Err("cancelled".to_string()))
        });
        let second = cache.get_or_start("https://d3.example/d3.js", || async {
            Err("should not start".to_string())
        });

        tx.send(Err("Failed to load".to_string())).unwrap();
        assert_eq!(block_on(second), Err("Failed to load".to_string()));
        assert_eq!(block_on(first), Err("Failed to load".to_string()));
    }

    #[test]
    fn test_distinct_urls_load_separately() {
        let mut cache = ScriptCache::new();
        let _ = cache.get_or_start("a.js", || async { Ok(()) });
        assert!(cache.contains("a.js"));
        assert!(!cache.contains("b.js"));
    }
}
