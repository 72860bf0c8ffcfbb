//! Application configuration.
//!
//! Centralized configuration for the pdfdrop frontend. The backend
//! address is baked in at compile time so the deployed bundle needs no
//! runtime configuration lookup.

/// Backend API base URL.
///
/// Read at compile time from the `PDFDROP_BACKEND_URL` environment
/// variable. An empty value means same-origin: requests use relative
/// URLs against whatever host serves the app.
pub const BACKEND_URL: &str = match option_env!("PDFDROP_BACKEND_URL") {
    Some(url) => url,
    None => "",
};

/// Application name, shown in the browser tab.
pub const APP_NAME: &str = "pdfdrop";
