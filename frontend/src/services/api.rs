use crate::config;
use gloo::net::http::Request;
use shared::{
    ApiError, AppointmentId, DaySchedule, ErrorResponse, FieldErrors, NewAppointmentRequest,
};
use web_sys::RequestCredentials;

/// API client for the scheduling server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the configured base URL
    pub fn new() -> Self {
        Self {
            base_url: config::api_base_url(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Fetch the slot grid. Sends the session cookie.
    pub async fn fetch_schedule(&self) -> Result<Vec<DaySchedule>, ApiError> {
        let url = format!("{}/api/calendar", self.base_url);

        let response = Request::get(&url)
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to fetch calendar data: {}", e)))?;

        check_status("Failed to fetch calendar data", response.status())?;

        response
            .json::<Vec<DaySchedule>>()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to parse calendar data: {}", e)))
    }

    /// Book a slot
    pub async fn create_appointment(
        &self,
        request: &NewAppointmentRequest,
    ) -> Result<(), ApiError> {
        let url = format!("{}/api/appointment/new", self.base_url);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        if response.ok() {
            return Ok(());
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(booking_rejection(status, &body))
    }

    /// Cancel an appointment
    pub async fn delete_appointment(
        &self,
        appointment_id: &AppointmentId,
    ) -> Result<(), ApiError> {
        let url = format!("{}{}", self.base_url, delete_path(appointment_id));

        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        check_status(
            &format!("Failed to delete appointment {}", appointment_id),
            response.status(),
        )
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Any status outside 2xx is a network error carrying `context`
fn check_status(context: &str, status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Network(format!("{}: server returned {}", context, status)))
    }
}

/// Error for a non-2xx booking response: field errors when the body carries
/// them, a network error otherwise
fn booking_rejection(status: u16, body: &str) -> ApiError {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .as_ref()
        .and_then(FieldErrors::from_response)
        .map(ApiError::Validation)
        .unwrap_or_else(|| {
            ApiError::Network(format!("Failed to book appointment: server returned {}", status))
        })
}

fn delete_path(appointment_id: &AppointmentId) -> String {
    format!(
        "/api/appointment/delete/{}",
        urlencoding::encode(appointment_id.as_str())
    )
}
