use chrono::NaiveDate;
use yew::prelude::*;

use crate::models::date_window::{DATE_FORMAT, Direction};

#[derive(Properties, PartialEq)]
pub struct DayNavigatorProps {
    pub date: NaiveDate,
    pub can_step_forward: bool,
    pub on_navigate: Callback<Direction>,
}

/// Previous/next day buttons around the reference date
#[function_component(DayNavigator)]
pub fn day_navigator(props: &DayNavigatorProps) -> Html {
    let on_back = props.on_navigate.reform(|_: MouseEvent| Direction::Back);
    let on_forward = props.on_navigate.reform(|_: MouseEvent| Direction::Forward);

    html! {
        <nav class="day-navigator">
            <button class="nav-button" onclick={on_back} aria-label="Previous day" title="Previous day">
                {"\u{2190}"}
            </button>
            <span class="reference-date">{props.date.format(DATE_FORMAT).to_string()}</span>
            <button
                class="nav-button"
                onclick={on_forward}
                disabled={!props.can_step_forward}
                aria-label="Next day"
                title="Next day"
            >
                {"\u{2192}"}
            </button>
        </nav>
    }
}
