//! Frontend configuration

/// Application configuration
pub struct AppConfig;

impl AppConfig {
    /// localStorage key holding the bearer token
    pub const TOKEN_KEY: &'static str = "token";

    /// localStorage key holding the serialized session record
    pub const SESSION_KEY: &'static str = "gallery_session";

    /// Service base URL baked in at build time
    const BUILD_API_URL: Option<&'static str> = option_env!("GALLERY_API_URL");

    /// Base URL for data and mutation service calls
    pub fn api_base_url() -> String {
        if let Some(url) = Self::BUILD_API_URL.filter(|url| !url.trim().is_empty()) {
            return url.to_string();
        }

        // Fall back to the page origin
        if let Some(window) = web_sys::window()
            && let Ok(origin) = window.location().origin()
        {
            return origin;
        }

        String::new()
    }
}
