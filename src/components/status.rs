use crate::services::price_store::FetchStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub state: FetchStatus,
}

/// Loading and failure notices. Loaded data renders nothing here.
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    match &props.state {
        FetchStatus::Loading => html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Loading prices..."}</p>
            </div>
        },
        FetchStatus::Error(msg) => html! {
            <div class="status error" title={msg.clone()}>
                <p>{"An error occurred"}</p>
            </div>
        },
        FetchStatus::Loaded(_) => html! {},
    }
}
