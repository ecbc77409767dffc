use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque appointment identifier assigned by the server.
///
/// The server is free to send it as a JSON string or an integer; both are
/// normalized to their textual form. An empty identifier is never constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AppointmentId(String);

impl AppointmentId {
    /// Returns `None` for blank input
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAppointmentId {
    Text(String),
    Number(i64),
}

/// Accepts a string, an integer, `null` or a missing field
fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<AppointmentId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawAppointmentId>::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| match raw {
        RawAppointmentId::Text(text) => AppointmentId::new(text),
        RawAppointmentId::Number(number) => AppointmentId::new(number.to_string()),
    }))
}

/// One day of the schedule grid as returned by `GET /api/calendar`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    /// Calendar date in YYYY-MM-DD format
    pub date: String,
    /// Slots in the order the server sent them
    #[serde(default)]
    pub time_slots: Vec<TimeSlot>,
}

/// A single bookable hour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// Slot start as sent by the server (e.g. "2024-06-01T09:00")
    pub time: String,
    pub available: bool,
    /// Contact details of the booking, present only on booked slots
    #[serde(default)]
    pub user: Option<BookingInfo>,
    /// Some server versions put the id on the slot rather than on `user`
    #[serde(
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub appointment_id: Option<AppointmentId>,
}

impl TimeSlot {
    /// Booking details with the appointment id resolved from wherever the
    /// server placed it. The id inside `user` takes precedence.
    pub fn booking_info(&self) -> Option<BookingInfo> {
        self.user.as_ref().map(|user| BookingInfo {
            appointment_id: user
                .appointment_id
                .clone()
                .or_else(|| self.appointment_id.clone()),
            ..user.clone()
        })
    }
}

/// Contact information attached to a booked slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingInfo {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub appointment_id: Option<AppointmentId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// Display color of a calendar event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventColor {
    Green,
    Red,
}

impl EventColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventColor::Green => "green",
            EventColor::Red => "red",
        }
    }
}

/// Extra data carried by an event for click routing
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtendedProps {
    pub user: Option<BookingInfo>,
}

/// Display item for the calendar grid, derived from one `TimeSlot`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub title: String,
    pub start: String,
    pub color: EventColor,
    pub editable: bool,
    pub duration_editable: bool,
    /// Deep link for booking; only available slots have one
    pub url: Option<String>,
    pub extended_props: ExtendedProps,
}

/// Contact fields submitted with a booking
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Body of `POST /api/appointment/new`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAppointmentRequest {
    /// YYYY-MM-DD
    pub date: String,
    /// HH:MM
    pub time: String,
    pub user: ContactDetails,
}

/// One entry of a structured error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrorEntry {
    pub field: String,
    pub message: String,
}

/// Error body optionally returned by the booking endpoint
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub errors: Option<Vec<FieldErrorEntry>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_day_schedule_deserializes_server_payload() {
        let payload = json!([{
            "date": "2024-06-01",
            "timeSlots": [
                { "time": "2024-06-01T09:00", "available": true },
                {
                    "time": "2024-06-01T10:00",
                    "available": false,
                    "user": { "name": "Ana", "email": "ana@example.com", "phone": "555-0101" },
                    "appointmentId": 42
                }
            ]
        }]);

        let days: Vec<DaySchedule> = serde_json::from_value(payload).unwrap();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].time_slots.len(), 2);
        assert!(days[0].time_slots[0].user.is_none());
        assert_eq!(
            days[0].time_slots[1].appointment_id,
            AppointmentId::new("42")
        );
    }

    #[test]
    fn test_booking_info_prefers_id_inside_user() {
        let slot: TimeSlot = serde_json::from_value(json!({
            "time": "2024-06-01T10:00",
            "available": false,
            "user": {
                "appointmentId": "inner",
                "name": "Bo",
                "email": "bo@example.com",
                "phone": "1"
            },
            "appointmentId": "outer"
        }))
        .unwrap();

        let info = slot.booking_info().unwrap();
        assert_eq!(info.appointment_id.unwrap().as_str(), "inner");
        assert_eq!(info.name, "Bo");
    }

    #[test]
    fn test_booking_info_falls_back_to_slot_id() {
        let slot: TimeSlot = serde_json::from_value(json!({
            "time": "2024-06-01T10:00",
            "available": false,
            "user": { "name": "Bo", "email": "bo@example.com", "phone": "1" },
            "appointmentId": "outer"
        }))
        .unwrap();

        assert_eq!(
            slot.booking_info().unwrap().appointment_id.unwrap().as_str(),
            "outer"
        );
    }

    #[test]
    fn test_blank_and_null_ids_are_absent() {
        let slot: TimeSlot = serde_json::from_value(json!({
            "time": "2024-06-01T10:00",
            "available": false,
            "user": { "appointmentId": "  ", "name": "Bo", "email": "", "phone": "" },
            "appointmentId": null
        }))
        .unwrap();

        assert!(slot.booking_info().unwrap().appointment_id.is_none());
        assert!(AppointmentId::new("").is_none());
    }

    #[test]
    fn test_calendar_event_serializes_widget_shape() {
        let event = CalendarEvent {
            title: "Available".to_string(),
            start: "2024-06-01T09:00".to_string(),
            color: EventColor::Green,
            editable: false,
            duration_editable: false,
            url: Some("/appointment/new?date=2024-06-01&time=2024-06-01T09:00".to_string()),
            extended_props: ExtendedProps::default(),
        };

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["color"], "green");
        assert_eq!(value["durationEditable"], false);
        assert_eq!(value["extendedProps"]["user"], serde_json::Value::Null);
    }

    #[test]
    fn test_new_appointment_request_body() {
        let request = NewAppointmentRequest {
            date: "2024-06-01".to_string(),
            time: "09:00".to_string(),
            user: ContactDetails {
                name: "Ana".to_string(),
                email: "ana@example.com".to_string(),
                phone: "555".to_string(),
            },
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "date": "2024-06-01",
                "time": "09:00",
                "user": { "name": "Ana", "email": "ana@example.com", "phone": "555" }
            })
        );
    }
}
