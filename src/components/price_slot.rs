use yew::prelude::*;

use crate::models::{date_window::DATE_FORMAT, panel::SlotView, prices::PriceSlot};

#[derive(Properties, PartialEq)]
pub struct PriceSlotCardProps {
    pub view: SlotView,
    pub on_toggle: Callback<PriceSlot>,
}

#[function_component(PriceSlotCard)]
pub fn price_slot_card(props: &PriceSlotCardProps) -> Html {
    let view = &props.view;

    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let slot = view.slot;
        let clickable = view.is_clickable();
        Callback::from(move |_: MouseEvent| {
            if clickable {
                on_toggle.emit(slot);
            }
        })
    };

    let class = classes!(
        view.slot.css_class(),
        view.record.is_none().then_some("unknown"),
        view.has_changed.then_some("changed"),
        view.expanded.then_some("expanded"),
    );

    html! {
        <div {class} {onclick}>
            <h3>{view.slot.label()}</h3>
            if let Some(record) = &view.record {
                <p class="slot-date">{record.date.format(DATE_FORMAT).to_string()}</p>
            }
            <p class="slot-price">
                {view.price_label()}
                if view.has_changed {
                    <span class="changed-marker" title="Price changed after publication">{" *"}</span>
                }
            </p>
        </div>
    }
}
