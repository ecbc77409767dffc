//! # Scheduler
//!
//! UI state of the booking calendar and the transitions between its modal
//! states. The scheduler never performs I/O: `dispatch` applies an action and
//! hands back at most one `Command` for the caller to run. The result of that
//! command is fed back in as another action.
//!
//! ```text
//! Idle --click available--> BookingOpen --created--> Idle (+ fetch)
//! Idle --click booked-----> ViewingOpen --deleted--> Idle (+ fetch)
//! ```

use crate::error::{ApiError, FieldErrors, SchedulerError};
use crate::mapper::map_schedule;
use crate::model::{
    AppointmentId, CalendarEvent, ContactDetails, DaySchedule, NewAppointmentRequest,
};
use crate::slot_time::{format_date, format_hhmm, SlotTime};
use chrono::{NaiveDate, NaiveTime};

/// Booking form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Phone,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Phone];

    /// Key used by the server in structured error responses
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Phone => "Phone",
        }
    }
}

/// Controlled values and validation messages of the booking form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub errors: FieldErrors,
}

impl BookingForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Phone => self.phone = value,
        }
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(field.key())
    }

    pub fn contact(&self) -> ContactDetails {
        ContactDetails {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }

    /// Errors for fields left blank
    fn missing_fields(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field in FormField::ALL {
            if self.value(field).trim().is_empty() {
                errors.insert(field.key(), format!("{} is required", field.label()));
            }
        }
        errors
    }
}

/// The open slot picked for booking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSelection {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// The booked appointment shown in the viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentDetails {
    pub appointment_id: AppointmentId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// Which modal is open; at most one at a time
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Idle,
    BookingOpen(SlotSelection),
    ViewingOpen(AppointmentDetails),
}

/// Work the caller must perform on behalf of the scheduler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchSchedule { generation: u64 },
    CreateAppointment(NewAppointmentRequest),
    DeleteAppointment(AppointmentId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Start a full (re)load of the calendar
    Load,
    ScheduleLoaded {
        generation: u64,
        result: Result<Vec<DaySchedule>, ApiError>,
    },
    EventClicked(CalendarEvent),
    FieldChanged(FormField, String),
    SubmitBooking,
    BookingCreated(Result<(), ApiError>),
    CancelBooking,
    DeleteRequested,
    AppointmentDeleted(Result<(), ApiError>),
    CloseViewer,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scheduler {
    events: Vec<CalendarEvent>,
    modal: ModalState,
    form: BookingForm,
    loading: bool,
    /// A create or delete request is outstanding
    mutating: bool,
    /// Generation of the most recently issued fetch
    generation: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_mutating(&self) -> bool {
        self.mutating
    }

    /// Applies `action`. Errors are faults to be logged; the state has
    /// already been updated when one is returned.
    pub fn dispatch(&mut self, action: Action) -> Result<Option<Command>, SchedulerError> {
        match action {
            Action::Load => Ok(Some(self.begin_fetch())),
            Action::ScheduleLoaded { generation, result } => self.finish_fetch(generation, result),
            Action::EventClicked(event) => self.click_event(event),
            Action::FieldChanged(field, value) => {
                if matches!(self.modal, ModalState::BookingOpen(_)) {
                    self.form.set(field, value);
                }
                Ok(None)
            }
            Action::SubmitBooking => Ok(self.submit_booking()),
            Action::BookingCreated(result) => self.finish_booking(result),
            Action::CancelBooking => {
                // the dialog stays up until the outstanding create settles
                if matches!(self.modal, ModalState::BookingOpen(_)) && !self.mutating {
                    self.modal = ModalState::Idle;
                }
                Ok(None)
            }
            Action::DeleteRequested => Ok(self.request_delete()),
            Action::AppointmentDeleted(result) => self.finish_delete(result),
            Action::CloseViewer => {
                if matches!(self.modal, ModalState::ViewingOpen(_)) && !self.mutating {
                    self.modal = ModalState::Idle;
                }
                Ok(None)
            }
        }
    }

    fn begin_fetch(&mut self) -> Command {
        self.generation += 1;
        self.loading = true;
        Command::FetchSchedule {
            generation: self.generation,
        }
    }

    fn finish_fetch(
        &mut self,
        generation: u64,
        result: Result<Vec<DaySchedule>, ApiError>,
    ) -> Result<Option<Command>, SchedulerError> {
        // superseded by a later fetch
        if generation < self.generation {
            return Ok(None);
        }
        self.loading = false;
        match result {
            Ok(days) => {
                self.events = map_schedule(&days);
                Ok(None)
            }
            Err(e) => {
                self.events.clear();
                Err(e.into())
            }
        }
    }

    fn click_event(&mut self, event: CalendarEvent) -> Result<Option<Command>, SchedulerError> {
        if self.modal != ModalState::Idle {
            return Ok(None);
        }

        let start = SlotTime::parse(&event.start)
            .map_err(|e| SchedulerError::DataIntegrity(e.to_string()))?;

        match event.extended_props.user {
            None => {
                self.form.errors = FieldErrors::new();
                self.modal = ModalState::BookingOpen(SlotSelection {
                    date: start.calendar_date(),
                    time: start.time_of_day(),
                });
            }
            Some(user) => {
                let appointment_id = user.appointment_id.ok_or_else(|| {
                    SchedulerError::DataIntegrity(format!(
                        "booked slot at {} has no appointment id",
                        event.start
                    ))
                })?;
                self.modal = ModalState::ViewingOpen(AppointmentDetails {
                    appointment_id,
                    name: user.name,
                    email: user.email,
                    phone: user.phone,
                    date: start.calendar_date(),
                    time: start.time_of_day(),
                });
            }
        }
        Ok(None)
    }

    fn submit_booking(&mut self) -> Option<Command> {
        let ModalState::BookingOpen(selection) = &self.modal else {
            return None;
        };
        if self.mutating {
            return None;
        }

        let missing = self.form.missing_fields();
        if !missing.is_empty() {
            self.form.errors = missing;
            return None;
        }

        let request = NewAppointmentRequest {
            date: format_date(selection.date),
            time: format_hhmm(selection.time),
            user: self.form.contact(),
        };
        self.mutating = true;
        Some(Command::CreateAppointment(request))
    }

    fn finish_booking(
        &mut self,
        result: Result<(), ApiError>,
    ) -> Result<Option<Command>, SchedulerError> {
        self.mutating = false;
        match result {
            Ok(()) => {
                if matches!(self.modal, ModalState::BookingOpen(_)) {
                    self.modal = ModalState::Idle;
                }
                self.form = BookingForm::default();
                Ok(Some(self.begin_fetch()))
            }
            Err(ApiError::Validation(errors)) => {
                self.form.errors = errors;
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn request_delete(&mut self) -> Option<Command> {
        let ModalState::ViewingOpen(details) = &self.modal else {
            return None;
        };
        if self.mutating {
            return None;
        }
        self.mutating = true;
        Some(Command::DeleteAppointment(details.appointment_id.clone()))
    }

    fn finish_delete(
        &mut self,
        result: Result<(), ApiError>,
    ) -> Result<Option<Command>, SchedulerError> {
        self.mutating = false;
        result?;
        if matches!(self.modal, ModalState::ViewingOpen(_)) {
            self.modal = ModalState::Idle;
        }
        Ok(Some(self.begin_fetch()))
    }
}
