use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::cache_key::FuelType;

#[derive(Properties, PartialEq)]
pub struct FuelSelectorProps {
    pub fuel_type: FuelType,
    pub on_change: Callback<FuelType>,
}

/// Fuel type selector dropdown component
#[function_component(FuelSelector)]
pub fn fuel_selector(props: &FuelSelectorProps) -> Html {
    let on_change = {
        let callback = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            callback.emit(FuelType::new(target.value()));
        })
    };

    html! {
        <select
            class="fuel-selector"
            onchange={on_change}
            aria-label="Select fuel type"
            title="Select fuel type"
        >
            {
                Config::FUEL_TYPES.iter().map(|fuel| {
                    let selected = *fuel == props.fuel_type.as_str();
                    html! {
                        <option value={*fuel} {selected}>{*fuel}</option>
                    }
                }).collect::<Html>()
            }
        </select>
    }
}
