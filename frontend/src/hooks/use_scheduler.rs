use std::cell::RefCell;
use std::rc::Rc;

use shared::slot_time::{format_date, format_hhmm};
use shared::{Action, ApiError, Command, Scheduler, SlotTime};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::date_utils::local_offset;
use crate::services::logging::Logger;

const COMPONENT: &str = "scheduler";

pub struct UseSchedulerResult {
    /// Snapshot taken for this render
    pub state: Scheduler,
    pub dispatch: Callback<Action>,
}

/// Owns the scheduler and runs the commands it issues. The schedule is
/// loaded once on mount.
#[hook]
pub fn use_scheduler(api_client: &ApiClient) -> UseSchedulerResult {
    let scheduler = use_mut_ref(Scheduler::new);
    let update = use_force_update();

    let dispatch = {
        let scheduler = scheduler.clone();
        let api_client = api_client.clone();
        let update = update.clone();

        use_callback((), move |action: Action, _| {
            run(scheduler.clone(), api_client.clone(), update.clone(), action);
        })
    };

    // Load initial data
    use_effect_with((), {
        let dispatch = dispatch.clone();
        move |_| {
            dispatch.emit(Action::Load);
            || ()
        }
    });

    let state = scheduler.borrow().clone();
    UseSchedulerResult { state, dispatch }
}

fn run(
    scheduler: Rc<RefCell<Scheduler>>,
    api_client: ApiClient,
    update: UseForceUpdateHandle,
    action: Action,
) {
    if let Action::EventClicked(event) = &action {
        log_utc_shift(&event.start);
    }

    let outcome = scheduler.borrow_mut().dispatch(action);
    update.force_update();

    match outcome {
        Ok(Some(command)) => execute(scheduler, api_client, update, command),
        Ok(None) => {}
        Err(e) => Logger::error_with_component(COMPONENT, &e.to_string()),
    }
}

fn execute(
    scheduler: Rc<RefCell<Scheduler>>,
    api_client: ApiClient,
    update: UseForceUpdateHandle,
    command: Command,
) {
    Logger::debug_with_component(COMPONENT, &format!("{:?}", command));

    spawn_local(async move {
        let action = match command {
            Command::FetchSchedule { generation } => Action::ScheduleLoaded {
                generation,
                result: api_client.fetch_schedule().await,
            },
            Command::CreateAppointment(request) => {
                let result = api_client.create_appointment(&request).await;
                match &result {
                    Ok(()) => Logger::info_with_component(
                        COMPONENT,
                        &format!("Booked {} {}", request.date, request.time),
                    ),
                    Err(ApiError::Validation(errors)) => Logger::warn_with_component(
                        COMPONENT,
                        &format!("Booking rejected: {}", errors),
                    ),
                    Err(_) => {}
                }
                Action::BookingCreated(result)
            }
            Command::DeleteAppointment(appointment_id) => {
                let result = api_client.delete_appointment(&appointment_id).await;
                if result.is_ok() {
                    Logger::info_with_component(
                        COMPONENT,
                        &format!("Deleted appointment {}", appointment_id),
                    );
                }
                Action::AppointmentDeleted(result)
            }
        };
        run(scheduler, api_client, update, action);
    });
}

/// Reports slots whose UTC reading lands on another date or hour than the
/// wall-clock time used for booking
fn log_utc_shift(start: &str) {
    let Ok(slot) = SlotTime::parse(start) else {
        return;
    };
    if let Some((date, time)) = slot.utc_shift(local_offset()) {
        Logger::debug_with_component(
            COMPONENT,
            &format!(
                "Slot {} is {} {} in UTC; booking uses the wall-clock time",
                start,
                format_date(date),
                format_hhmm(time)
            ),
        );
    }
}
