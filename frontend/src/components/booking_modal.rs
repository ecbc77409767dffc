use shared::{BookingForm, FormField, SlotSelection};
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use crate::services::date_utils::{format_date_for_display, format_time_for_display};

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    /// Slot being booked; the modal is closed when `None`
    pub selection: Option<SlotSelection>,
    pub form: BookingForm,
    pub submitting: bool,
    pub on_field_change: Callback<(FormField, String)>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
    let Some(selection) = props.selection else {
        return html! {};
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        let submitting = props.submitting;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if !submitting {
                on_close.emit(());
            }
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal-dialog" onclick={on_modal_click}>
                <div class="modal-header">
                    <h3 class="modal-title">{"Book Appointment"}</h3>
                    <button
                        type="button"
                        class="modal-close"
                        onclick={on_cancel.clone()}
                        disabled={props.submitting}
                    >
                        {"×"}
                    </button>
                </div>
                <div class="modal-body">
                    <p class="booking-slot">
                        {format!(
                            "{} at {}",
                            format_date_for_display(selection.date),
                            format_time_for_display(selection.time)
                        )}
                    </p>
                    <form class="booking-form" onsubmit={on_submit}>
                        {for FormField::ALL.iter().map(|field| render_field(*field, props))}
                        <div class="modal-buttons">
                            <button
                                type="submit"
                                class="btn btn-primary"
                                disabled={props.submitting}
                            >
                                {if props.submitting { "Booking..." } else { "Book Appointment" }}
                            </button>
                            <button
                                type="button"
                                class="btn btn-secondary"
                                onclick={on_cancel}
                                disabled={props.submitting}
                            >
                                {"Cancel"}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}

fn render_field(field: FormField, props: &BookingModalProps) -> Html {
    let error = props.form.error(field).map(str::to_string);
    let input_type = match field {
        FormField::Email => "email",
        FormField::Name | FormField::Phone => "text",
    };
    let id = format!("booking-{}", field.key());

    let oninput = {
        let on_field_change = props.on_field_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_field_change.emit((field, input.value()));
        })
    };

    html! {
        <div class="form-group">
            <label for={id.clone()}>{field.label()}</label>
            <input
                id={id}
                type={input_type}
                name={field.key()}
                class={classes!("form-control", error.is_some().then_some("is-invalid"))}
                value={props.form.value(field).to_string()}
                oninput={oninput}
                disabled={props.submitting}
                required=true
            />
            {if let Some(message) = error {
                html! { <div class="invalid-feedback">{message}</div> }
            } else {
                html! {}
            }}
        </div>
    }
}
