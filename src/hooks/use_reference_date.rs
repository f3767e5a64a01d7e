use chrono::NaiveDate;
use yew::prelude::*;

use crate::models::date_window::{DateWindow, Direction, current_date, parse_override};
use crate::services::url_sync::{UrlState, publish_page_state};

/// Handle returned by `use_reference_date` hook
#[derive(Clone, PartialEq)]
pub struct ReferenceDateHandle {
    pub window: DateWindow,
    pub can_step_forward: bool,
    pub navigate: Callback<Direction>,
}

/// Custom hook for the panel's reference date, synced to the `now` URL parameter.
///
/// `on_step` fires with the new date after every accepted step, in the same
/// event as the date change.
#[hook]
pub fn use_reference_date(initial: UrlState, on_step: Callback<NaiveDate>) -> ReferenceDateHandle {
    let window = {
        let initial = initial.clone();
        use_state(move || {
            let override_value = initial.now.as_deref();
            if let Some(Err(e)) = override_value.map(parse_override) {
                gloo::console::warn!(&format!("Ignoring `now` parameter: {e}"));
            }
            DateWindow::from_override(override_value, current_date())
        })
    };

    // Effect: Publish the date to the URL on change
    {
        let date = window.reference_date();
        use_effect_with(date, move |date| {
            if let Err(e) = publish_page_state(&initial.with_date(*date)) {
                gloo::console::warn!(&format!("Failed to update URL: {e}"));
            }
            || ()
        });
    }

    let navigate = {
        let window = window.clone();
        Callback::from(move |direction| {
            if let Some(next) = window.step(direction, current_date()) {
                on_step.emit(next.reference_date());
                window.set(next);
            }
        })
    };

    ReferenceDateHandle {
        window: *window,
        can_step_forward: window.can_step_forward(current_date()),
        navigate,
    }
}
