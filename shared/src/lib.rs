pub mod calendar_view;
pub mod error;
pub mod mapper;
pub mod model;
pub mod scheduler;
pub mod slot_time;

pub use calendar_view::CalendarView;
pub use error::{ApiError, FieldErrors, SchedulerError};
pub use mapper::map_schedule;
pub use model::{
    AppointmentId, BookingInfo, CalendarEvent, ContactDetails, DaySchedule, ErrorResponse,
    EventColor, ExtendedProps, FieldErrorEntry, NewAppointmentRequest, TimeSlot,
};
pub use scheduler::{
    Action, AppointmentDetails, BookingForm, Command, FormField, ModalState, Scheduler,
    SlotSelection,
};
pub use slot_time::SlotTime;
