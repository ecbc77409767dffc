use shared::AppointmentDetails;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::date_utils::{format_date_for_display, format_time_for_display};

#[derive(Properties, PartialEq)]
pub struct AppointmentModalProps {
    /// Appointment on display; the modal is closed when `None`
    pub details: Option<AppointmentDetails>,
    pub deleting: bool,
    pub on_delete: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(AppointmentModal)]
pub fn appointment_modal(props: &AppointmentModalProps) -> Html {
    let Some(details) = &props.details else {
        return html! {};
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let deleting = props.deleting;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if !deleting {
                on_close.emit(());
            }
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    let on_delete_click = {
        let on_delete = props.on_delete.clone();
        Callback::from(move |_: MouseEvent| {
            on_delete.emit(());
        })
    };

    let rows = [
        ("Name", details.name.clone()),
        ("Email", details.email.clone()),
        ("Phone", details.phone.clone()),
        ("Date", format_date_for_display(details.date)),
        ("Time", format_time_for_display(details.time)),
    ];

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal-dialog" onclick={on_modal_click}>
                <div class="modal-header">
                    <h3 class="modal-title">{"Appointment Details"}</h3>
                    <button
                        type="button"
                        class="modal-close"
                        onclick={on_close_click.clone()}
                        disabled={props.deleting}
                    >
                        {"×"}
                    </button>
                </div>
                <div class="modal-body">
                    {for rows.into_iter().map(|(label, value)| html! {
                        <p class="appointment-field">
                            <strong>{format!("{}:", label)}</strong>
                            {" "}
                            {value}
                        </p>
                    })}
                </div>
                <div class="modal-footer">
                    <button
                        type="button"
                        class="btn btn-secondary"
                        onclick={on_close_click}
                        disabled={props.deleting}
                    >
                        {"Close"}
                    </button>
                    <button
                        type="button"
                        class="btn btn-danger"
                        onclick={on_delete_click}
                        disabled={props.deleting}
                    >
                        {if props.deleting { "Deleting..." } else { "Delete Appointment" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
