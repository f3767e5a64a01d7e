#[cfg(test)]
mod tests {
    use chrono::{Days, FixedOffset, NaiveDate, TimeZone, Utc};
    use fuel_price_panel::models::{
        cache_key::{CacheKey, FuelType},
        change_tracker::{ChangeTracker, TrackerAction},
        date_window::{DateWindow, Direction, initial_reference_date},
        error::AppError,
        panel::{PanelView, UNKNOWN_PRICE},
        prices::{PriceResponse, PriceSlot},
    };
    use fuel_price_panel::services::price_store::{FetchStatus, PriceStore};
    use fuel_price_panel::services::url_sync::UrlState;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::Cell;
    use std::rc::Rc;
    use yew::functional::Reducible;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // Response used by the E10 walkthrough
    fn scenario_response() -> PriceResponse {
        serde_json::from_str(
            r#"{
                "message": "",
                "prices": {
                    "today": {
                        "date": "2024-03-10",
                        "price": 21.45,
                        "prevPrices": [
                            { "detectionTimestamp": "2024-03-10T08:00:00Z", "price": 21.90 }
                        ]
                    },
                    "tomorrow": null,
                    "yesterday": { "date": "2024-03-09", "price": 21.30, "prevPrices": [] }
                }
            }"#,
        )
        .unwrap()
    }

    async fn fetched(response: PriceResponse) -> Result<PriceResponse, AppError> {
        Ok(response)
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_api_display() {
        let error = AppError::ApiError("Connection failed".to_string());
        assert_eq!(error.to_string(), "API error: Connection failed");
    }

    #[test]
    fn test_app_error_malformed_date_display() {
        let error = AppError::MalformedDate("x".to_string());
        assert_eq!(error.to_string(), "Malformed date: x");
    }

    // ===== Scenario =====

    #[test]
    fn test_e10_scenario() {
        let today = date(2024, 3, 12);
        let fuel = FuelType::new("E10");
        let window = DateWindow::from_override(Some("2024-03-10"), today);
        let key = CacheKey::new(window.reference_date(), &fuel);
        assert_eq!(key.date_param(), "2024-03-10");

        let store = PriceStore::new();
        let resolution = store.resolve(&key, |_| fetched(scenario_response()));
        assert_eq!(resolution.status, FetchStatus::Loading);
        block_on(resolution.task.unwrap()).unwrap();

        let status = store.status(&key);
        let prices = status.data().unwrap();

        let tracker = Rc::new(ChangeTracker::default());
        let view = PanelView::compose(prices, &tracker, &key);
        assert!(view.slot(PriceSlot::Today).is_clickable());
        assert!(!view.slot(PriceSlot::Yesterday).has_changed);
        assert_eq!(view.slot(PriceSlot::Tomorrow).price_label(), UNKNOWN_PRICE);
        assert!(view.history.is_none());

        // Click Today
        let tracker = tracker.reduce(TrackerAction::Toggle {
            slot: PriceSlot::Today,
            prices: prices.clone(),
            key: key.clone(),
        });
        let view = PanelView::compose(prices, &tracker, &key);
        let history = view.history.as_ref().unwrap();
        assert_eq!(history.rows.len(), 1);
        assert_eq!(history.rows[0].detected_at, "2024-03-10 08:00:00");
        assert_eq!(history.rows[0].price, "21.90 kr");

        // Clicks on slots without revisions change nothing
        for slot in [PriceSlot::Yesterday, PriceSlot::Tomorrow] {
            let same = tracker.clone().reduce(TrackerAction::Toggle {
                slot,
                prices: prices.clone(),
                key: key.clone(),
            });
            assert!(Rc::ptr_eq(&tracker, &same));
        }

        // Click Today again
        let collapsed = tracker.clone().reduce(TrackerAction::Toggle {
            slot: PriceSlot::Today,
            prices: prices.clone(),
            key: key.clone(),
        });
        assert!(PanelView::compose(prices, &collapsed, &key).history.is_none());

        // Navigate forward from the expanded state
        let next = window.step(Direction::Forward, today).unwrap();
        let tracker = tracker.reduce(TrackerAction::Reset);
        let next_key = CacheKey::new(next.reference_date(), &fuel);
        assert!(tracker.is_collapsed());
        assert_eq!(next_key.date_param(), "2024-03-11");
        assert_eq!(store.status(&next_key), FetchStatus::Loading);
    }

    // ===== Properties =====

    #[test]
    fn test_key_determinism_across_offsets() {
        let fuel = FuelType::new("diesel");
        for hour in 0..24 {
            let utc = Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap();
            let shifted = utc.with_timezone(&FixedOffset::west_opt(2 * 3600).unwrap());
            let local_date = shifted.date_naive();

            assert_eq!(
                CacheKey::from_datetime(&shifted, &fuel),
                CacheKey::new(local_date, &fuel)
            );
        }
    }

    #[test]
    fn test_no_future_invariant() {
        let today = date(2024, 3, 12);
        let mut window = DateWindow::from_override(Some("2024-03-01"), today);

        for _ in 0..30 {
            if let Some(next) = window.step(Direction::Forward, today) {
                window = next;
            }
            assert!(window.reference_date() <= today);
        }
        assert_eq!(window.reference_date(), today);
        assert_eq!(window.step(Direction::Forward, today), None);

        let future = today.checked_add_days(Days::new(5)).unwrap();
        assert_eq!(DateWindow::new(future, today).reference_date(), today);
    }

    #[test]
    fn test_initial_date_from_url() {
        let today = date(2024, 3, 12);
        let url = UrlState::from_href("https://fuel.example/?now=2024-02-29").unwrap();
        assert_eq!(
            initial_reference_date(url.now.as_deref(), today),
            date(2024, 2, 29)
        );

        let bad = UrlState::from_href("https://fuel.example/?now=29.02.2024").unwrap();
        assert_eq!(initial_reference_date(bad.now.as_deref(), today), today);
    }

    #[test]
    fn test_at_most_one_fetch_per_key() {
        let store = PriceStore::new();
        let key = CacheKey::new(date(2024, 3, 10), &FuelType::new("95"));
        let calls = Rc::new(Cell::new(0u32));
        let (tx, rx) = oneshot::channel::<PriceResponse>();
        let mut rx = Some(rx);

        let mut tasks = Vec::new();
        for _ in 0..10 {
            let calls = calls.clone();
            let rx = &mut rx;
            let resolution = store.resolve(&key, move |_| {
                calls.set(calls.get() + 1);
                let rx = rx.take().unwrap();
                async move { rx.await.map_err(|e| AppError::ApiError(e.to_string())) }
            });
            assert!(resolution.status.is_loading());
            tasks.extend(resolution.task);
        }

        assert_eq!(calls.get(), 1);
        assert_eq!(tasks.len(), 1);

        tx.send(scenario_response()).unwrap();
        for task in tasks {
            block_on(task).unwrap();
        }
        assert!(store.status(&key).data().is_some());
    }

    #[test]
    fn test_stale_result_absorbed() {
        let store = PriceStore::new();
        let fuel = FuelType::new("E10");
        let k1 = CacheKey::new(date(2024, 3, 10), &fuel);
        let k2 = CacheKey::new(date(2024, 3, 9), &fuel);

        let (tx, rx) = oneshot::channel::<PriceResponse>();
        let slow = store
            .resolve(&k1, move |_| async move {
                rx.await.map_err(|e| AppError::ApiError(e.to_string()))
            })
            .task
            .unwrap();

        // User navigates away before k1 answers
        let k2_task = store
            .resolve(&k2, |_| fetched(PriceResponse::default()))
            .task
            .unwrap();
        assert_eq!(store.status(&k2), FetchStatus::Loading);

        tx.send(scenario_response()).unwrap();
        block_on(slow).unwrap();
        assert_eq!(store.status(&k2), FetchStatus::Loading);

        block_on(k2_task).unwrap();
        assert_eq!(
            store.status(&k2).data().map(|p| (**p).clone()),
            Some(PriceResponse::default())
        );
    }

    #[test]
    fn test_reset_on_fuel_type_change() {
        let day = date(2024, 3, 10);
        let e10 = CacheKey::new(day, &FuelType::new("E10"));
        let diesel = CacheKey::new(day, &FuelType::new("diesel"));

        let mut revised = scenario_response();
        revised.prices.tomorrow = revised.prices.today.clone();
        revised.prices.yesterday = revised.prices.today.clone();
        let prices = Rc::new(revised);

        for slot in PriceSlot::ALL {
            let expanded = Rc::new(ChangeTracker::default()).reduce(TrackerAction::Toggle {
                slot,
                prices: prices.clone(),
                key: e10.clone(),
            });

            // Before the reset lands, the new key already sees no expansion
            assert_eq!(expanded.expanded(&diesel), None);
            assert!(expanded.reduce(TrackerAction::Reset).is_collapsed());
        }
    }

    #[test]
    fn test_failed_fetch_recovers_on_return() {
        let store = PriceStore::new();
        let key = CacheKey::new(date(2024, 3, 10), &FuelType::new("98"));

        let failing = store
            .resolve(&key, |_| async { Err::<PriceResponse, _>(AppError::RateLimited) })
            .task
            .unwrap();
        assert!(block_on(failing).is_err());
        assert!(matches!(store.status(&key), FetchStatus::Error(_)));

        let retry = store.resolve(&key, |_| fetched(scenario_response()));
        assert!(retry.status.is_loading());
        block_on(retry.task.unwrap()).unwrap();
        assert!(store.status(&key).data().is_some());
    }
}
