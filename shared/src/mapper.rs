use crate::model::{CalendarEvent, DaySchedule, EventColor, ExtendedProps, TimeSlot};

pub const AVAILABLE_TITLE: &str = "Available";
pub const BOOKED_TITLE: &str = "Booked";

/// Flattens the schedule into one calendar event per slot, in input order.
pub fn map_schedule(days: &[DaySchedule]) -> Vec<CalendarEvent> {
    days.iter()
        .flat_map(|day| day.time_slots.iter().map(move |slot| map_slot(&day.date, slot)))
        .collect()
}

pub fn map_slot(date: &str, slot: &TimeSlot) -> CalendarEvent {
    if slot.available {
        CalendarEvent {
            title: AVAILABLE_TITLE.to_string(),
            start: slot.time.clone(),
            color: EventColor::Green,
            editable: false,
            duration_editable: false,
            url: Some(booking_url(date, &slot.time)),
            extended_props: ExtendedProps { user: None },
        }
    } else {
        CalendarEvent {
            title: BOOKED_TITLE.to_string(),
            start: slot.time.clone(),
            color: EventColor::Red,
            editable: false,
            duration_editable: false,
            url: None,
            extended_props: ExtendedProps {
                user: slot.booking_info(),
            },
        }
    }
}

/// Deep link to the booking form for a slot
pub fn booking_url(date: &str, time: &str) -> String {
    format!("/appointment/new?date={}&time={}", date, time)
}
