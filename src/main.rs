use yew::prelude::*;

use fuel_price_panel::components::{FuelSelector, PricePanel};
use fuel_price_panel::config::Config;
use fuel_price_panel::models::cache_key::FuelType;
use fuel_price_panel::services::url_sync::{UrlState, read_page_state};

#[function_component(App)]
fn app() -> Html {
    let fuel_type = use_state(|| FuelType::new(Config::DEFAULT_FUEL_TYPE));
    let url_state = use_memo((), |_| {
        read_page_state().unwrap_or_else(|e| {
            gloo::console::warn!(&format!("Failed to read page URL: {e}"));
            UrlState::default()
        })
    });

    let on_fuel_change = {
        let fuel_type = fuel_type.clone();
        Callback::from(move |fuel: FuelType| fuel_type.set(fuel))
    };

    // Cosmetic colours from the URL are applied as given
    let style = [
        url_state.bg_color.as_ref().map(|c| format!("background-color: {c};")),
        url_state.text_color.as_ref().map(|c| format!("color: {c};")),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" ");

    html! {
        <div class="app-container" {style}>
            <header class="app-header">
                <h1>{"Fuel Prices"}</h1>
                <FuelSelector fuel_type={(*fuel_type).clone()} on_change={on_fuel_change} />
            </header>

            <main class="app-main">
                <PricePanel fuel_type={(*fuel_type).clone()} url_state={(*url_state).clone()} />
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
