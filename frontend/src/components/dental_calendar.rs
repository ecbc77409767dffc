use shared::{Action, FormField, ModalState};
use yew::prelude::*;

use crate::components::appointment_modal::AppointmentModal;
use crate::components::booking_modal::BookingModal;
use crate::components::calendar::CalendarGrid;
use crate::hooks::use_scheduler::{use_scheduler, UseSchedulerResult};
use crate::services::api::ApiClient;

/// Booking calendar with its two dialogs
#[function_component(DentalCalendar)]
pub fn dental_calendar() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let UseSchedulerResult { state, dispatch } = use_scheduler(&api_client);

    let on_event_click = dispatch.reform(Action::EventClicked);
    let on_field_change =
        dispatch.reform(|(field, value): (FormField, String)| Action::FieldChanged(field, value));
    let on_submit = dispatch.reform(|_: ()| Action::SubmitBooking);
    let on_cancel = dispatch.reform(|_: ()| Action::CancelBooking);
    let on_delete = dispatch.reform(|_: ()| Action::DeleteRequested);
    let on_close_viewer = dispatch.reform(|_: ()| Action::CloseViewer);

    let (selection, details) = match state.modal() {
        ModalState::Idle => (None, None),
        ModalState::BookingOpen(selection) => (Some(*selection), None),
        ModalState::ViewingOpen(details) => (None, Some(details.clone())),
    };

    html! {
        <div class="dental-calendar">
            <CalendarGrid
                events={state.events().to_vec()}
                loading={state.is_loading()}
                on_event_click={on_event_click}
            />

            <BookingModal
                selection={selection}
                form={state.form().clone()}
                submitting={state.is_mutating()}
                on_field_change={on_field_change}
                on_submit={on_submit}
                on_close={on_cancel}
            />

            <AppointmentModal
                details={details}
                deleting={state.is_mutating()}
                on_delete={on_delete}
                on_close={on_close_viewer}
            />
        </div>
    }
}
