//! Build-time settings. There are no config files: values are baked in when
//! the wasm bundle is built and fall back to local development defaults.

use crate::services::logging::LogLevel;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Scheduling API root, from `DENTAL_API_URL` at build time
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("DENTAL_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

/// Lowest level written to the console, from `DENTAL_LOG_LEVEL` at build time
pub fn min_log_level() -> LogLevel {
    option_env!("DENTAL_LOG_LEVEL")
        .and_then(LogLevel::parse)
        .unwrap_or(LogLevel::Info)
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_removed() {
        assert_eq!(normalize_base_url("http://clinic.test/ "), "http://clinic.test");
        assert_eq!(normalize_base_url(DEFAULT_API_BASE_URL), DEFAULT_API_BASE_URL);
    }
}
