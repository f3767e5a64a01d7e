use crate::models::{cache_key::CacheKey, error::AppError, prices::PriceResponse};
use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

/// Fetch started by the store, driven to completion with `spawn_local`. It
/// records the outcome in the store before resolving. Dropping it early
/// leaves the key without data and lets the next `resolve` fetch again.
pub type PendingFetch = Pin<Box<dyn Future<Output = Result<(), AppError>>>>;

/// Status of one cache key as seen by the view.
#[derive(Clone, PartialEq, Debug)]
pub enum FetchStatus {
    Loading,
    Loaded(Rc<PriceResponse>),
    Error(String),
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }

    /// Returns the data if it is loaded
    pub fn data(&self) -> Option<&Rc<PriceResponse>> {
        match self {
            FetchStatus::Loaded(prices) => Some(prices),
            _ => None,
        }
    }
}

/// Outcome of [`PriceStore::resolve`].
#[must_use]
pub struct Resolution {
    pub status: FetchStatus,
    /// Present only when this call started a fetch.
    pub task: Option<PendingFetch>,
}

#[derive(Debug, Default)]
struct Entry {
    settled: Option<Result<Rc<PriceResponse>, String>>,
    in_flight: bool,
}

impl Entry {
    fn status(&self) -> FetchStatus {
        match &self.settled {
            Some(Ok(prices)) => FetchStatus::Loaded(prices.clone()),
            Some(Err(message)) => FetchStatus::Error(message.clone()),
            None => FetchStatus::Loading,
        }
    }
}

/// Request-deduplicating cache of price bundles keyed by [`CacheKey`].
///
/// Clones share the same entries. At most one fetch per key is in flight,
/// and a completed fetch only ever writes the entry of its own key.
#[derive(Clone, Default)]
pub struct PriceStore {
    entries: Rc<RefCell<HashMap<CacheKey, Entry>>>,
}

impl PartialEq for PriceStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.entries, &other.entries)
    }
}

impl PriceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status of `key`. Unknown keys report `Loading`.
    pub fn status(&self, key: &CacheKey) -> FetchStatus {
        self.entries
            .borrow()
            .get(key)
            .map_or(FetchStatus::Loading, Entry::status)
    }

    /// Returns the status of `key`, starting a fetch when the key is unknown
    /// or its previous attempt failed.
    pub fn resolve<F, Fut>(&self, key: &CacheKey, fetch: F) -> Resolution
    where
        F: FnOnce(CacheKey) -> Fut,
        Fut: Future<Output = Result<PriceResponse, AppError>> + 'static,
    {
        {
            let mut entries = self.entries.borrow_mut();
            let entry = entries.entry(key.clone()).or_default();
            let retry = matches!(entry.settled, Some(Err(_)));
            if entry.in_flight || (entry.settled.is_some() && !retry) {
                return Resolution {
                    status: entry.status(),
                    task: None,
                };
            }
            entry.in_flight = true;
            entry.settled = None;
        }

        Resolution {
            status: FetchStatus::Loading,
            task: Some(self.start(key, fetch)),
        }
    }

    /// Refreshes a key that already has data. The cached data stays visible
    /// until the new response arrives; a failed refresh keeps it.
    ///
    /// Returns `None` when the key has no data yet or a fetch is in flight.
    pub fn revalidate<F, Fut>(&self, key: &CacheKey, fetch: F) -> Option<PendingFetch>
    where
        F: FnOnce(CacheKey) -> Fut,
        Fut: Future<Output = Result<PriceResponse, AppError>> + 'static,
    {
        {
            let mut entries = self.entries.borrow_mut();
            let entry = entries.get_mut(key)?;
            if entry.in_flight || !matches!(entry.settled, Some(Ok(_))) {
                return None;
            }
            entry.in_flight = true;
        }

        Some(self.start(key, fetch))
    }

    fn start<F, Fut>(&self, key: &CacheKey, fetch: F) -> PendingFetch
    where
        F: FnOnce(CacheKey) -> Fut,
        Fut: Future<Output = Result<PriceResponse, AppError>> + 'static,
    {
        let mut attempt = Attempt {
            entries: Rc::clone(&self.entries),
            key: Some(key.clone()),
        };
        let request = fetch(key.clone());

        Box::pin(async move {
            let outcome = request.await;

            let Some(key) = attempt.key.take() else {
                return Ok(());
            };
            let mut entries = attempt.entries.borrow_mut();
            let entry = entries.entry(key).or_default();
            entry.in_flight = false;

            match outcome {
                Ok(prices) => {
                    entry.settled = Some(Ok(Rc::new(prices)));
                    Ok(())
                }
                Err(e) => {
                    // A failed refresh keeps the data already shown.
                    if !matches!(entry.settled, Some(Ok(_))) {
                        entry.settled = Some(Err(e.to_string()));
                    }
                    Err(e)
                }
            }
        })
    }
}

/// Marks the fetch for `key` as finished when its task is dropped before an
/// outcome was recorded, so the next resolve can start a new attempt.
struct Attempt {
    entries: Rc<RefCell<HashMap<CacheKey, Entry>>>,
    key: Option<CacheKey>,
}

impl Drop for Attempt {
    fn drop(&mut self) {
        let Some(key) = self.key.take() else {
            return;
        };
        if let Ok(mut entries) = self.entries.try_borrow_mut() {
            if let Some(entry) = entries.get_mut(&key) {
                entry.in_flight = false;
            }
        }
    }
}
