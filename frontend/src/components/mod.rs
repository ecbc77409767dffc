pub mod appointment_modal;
pub mod booking_modal;
pub mod calendar;
pub mod dental_calendar;
