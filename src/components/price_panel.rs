use chrono::NaiveDate;
use yew::prelude::*;

use crate::components::{
    day_navigator::DayNavigator, price_slot::PriceSlotCard, revision_table::RevisionTable,
    status::Status,
};
use crate::hooks::use_prices::use_prices;
use crate::hooks::use_reference_date::use_reference_date;
use crate::models::{
    cache_key::{CacheKey, FuelType},
    change_tracker::{ChangeTracker, TrackerAction},
    panel::PanelView,
    prices::PriceSlot,
};
use crate::services::url_sync::UrlState;

#[derive(Properties, PartialEq)]
pub struct PricePanelProps {
    pub fuel_type: FuelType,
    pub url_state: UrlState,
}

/// Three-day price panel for one fuel type
#[function_component(PricePanel)]
pub fn price_panel(props: &PricePanelProps) -> Html {
    let tracker = use_reducer(ChangeTracker::default);

    let on_step = {
        let tracker = tracker.dispatcher();
        Callback::from(move |_: NaiveDate| tracker.dispatch(TrackerAction::Reset))
    };
    let date = use_reference_date(props.url_state.clone(), on_step);

    // Effect: Collapse the history when the fuel type changes
    {
        let tracker = tracker.dispatcher();
        use_effect_with(props.fuel_type.clone(), move |_| {
            tracker.dispatch(TrackerAction::Reset);
            || ()
        });
    }

    let key = CacheKey::new(date.window.reference_date(), &props.fuel_type);
    let status = use_prices(key.clone());

    let panel = status
        .data()
        .map(|prices| PanelView::compose(prices, &tracker, &key));

    let on_toggle = {
        let tracker = tracker.dispatcher();
        let key = key.clone();
        let prices = status.data().cloned();
        Callback::from(move |slot: PriceSlot| {
            if let Some(prices) = &prices {
                tracker.dispatch(TrackerAction::Toggle {
                    slot,
                    prices: prices.clone(),
                    key: key.clone(),
                });
            }
        })
    };

    html! {
        <section class="price-panel">
            <DayNavigator
                date={date.window.reference_date()}
                can_step_forward={date.can_step_forward}
                on_navigate={date.navigate.clone()}
            />

            <Status state={status.clone()} />

            if let Some(panel) = panel {
                <div class="price-slots">
                    {
                        panel.slots.iter().map(|view| html! {
                            <PriceSlotCard
                                key={view.slot.label()}
                                view={view.clone()}
                                on_toggle={on_toggle.clone()}
                            />
                        }).collect::<Html>()
                    }
                </div>

                if let Some(history) = &panel.history {
                    <RevisionTable history={history.clone()} />
                }

                if let Some(message) = &panel.message {
                    <p class="service-message">{message.clone()}</p>
                }
            }
        </section>
    }
}
