use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

use crate::config::Config;
use crate::models::{cache_key::CacheKey, error::AppError, prices::PriceResponse};
use crate::services::api::FuelPriceClient;
use crate::services::price_store::{FetchStatus, PriceStore};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

/// Client shared by every request of one panel. Holds the construction
/// error when the HTTP client could not be built.
type SharedClient = Rc<Result<FuelPriceClient, String>>;

async fn fetch_with(client: SharedClient, key: CacheKey) -> Result<PriceResponse, AppError> {
    match client.as_ref() {
        Ok(client) => client.fetch_prices(&key).await,
        Err(e) => Err(AppError::ConfigError(e.clone())),
    }
}

/// Resolves the prices for `key` through a per-panel [`PriceStore`].
///
/// Results for keys the panel has moved away from stay in the store and
/// only trigger a re-render, which reads the current key.
#[hook]
pub fn use_prices(key: CacheKey) -> FetchStatus {
    let store = use_memo((), |_| PriceStore::new());
    let client: SharedClient = use_memo((), |_| {
        FuelPriceClient::new().map_err(|e| e.to_string())
    });
    let update = use_force_update();

    // Effect: Resolve when the key changes
    {
        let store = (*store).clone();
        let client = client.clone();
        let update = update.clone();

        use_effect_with(key.clone(), move |key| {
            let resolution = store.resolve(key, move |key| fetch_with(client, key));

            if let Some(task) = resolution.task {
                let key = key.clone();
                spawn_local(async move {
                    if let Err(e) = task.await {
                        gloo::console::error!(&format!("Failed to fetch prices for {key}: {e}"));
                    }
                    update.force_update();
                });
            }

            || () // Cleanup
        });
    }

    // Effect: Revalidate the current key while it stays on screen
    {
        let store = (*store).clone();

        use_effect_with(key.clone(), move |key| {
            let key = key.clone();
            let client = client.clone();
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            if Config::ENABLE_AUTO_REFRESH {
                spawn_local(async move {
                    loop {
                        TimeoutFuture::new(Config::POLLING_INTERVAL_MS).await;
                        if aborted_check.get() {
                            break;
                        }

                        let client = client.clone();
                        let Some(task) = store.revalidate(&key, move |key| fetch_with(client, key))
                        else {
                            continue;
                        };
                        if let Err(e) = task.await {
                            gloo::console::warn!(&format!("Failed to refresh prices for {key}: {e}"));
                        }
                        if !aborted_check.get() {
                            update.force_update();
                        }
                    }
                });
            }

            move || {
                aborted.set(true);
            }
        });
    }

    store.status(&key)
}
