use crate::models::panel::HistoryView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RevisionTableProps {
    pub history: HistoryView,
}

#[function_component(RevisionTable)]
pub fn revision_table(props: &RevisionTableProps) -> Html {
    html! {
        <table class="revision-table">
            <caption>{format!("Price changes: {}", props.history.slot.label())}</caption>
            <thead>
                <tr>
                    <th>{"Detected"}</th>
                    <th>{"Previous price"}</th>
                </tr>
            </thead>
            <tbody>
                {
                    props.history.rows.iter().map(|row| html! {
                        <tr>
                            <td>{&row.detected_at}</td>
                            <td>{&row.price}</td>
                        </tr>
                    }).collect::<Html>()
                }
            </tbody>
        </table>
    }
}
