//! Where the remote API lives.
//!
//! The base URL is fixed at build time through the `SAAS_API_URL`
//! environment variable. Without it the API is assumed to run on port 4000
//! of the host serving the panel, under `/api`.

/// Build-time override, e.g. `SAAS_API_URL=https://api.example.com/api trunk build`
const API_URL_OVERRIDE: Option<&str> = option_env!("SAAS_API_URL");

const DEFAULT_API_PORT: u16 = 4000;
const API_PREFIX: &str = "/api";

/// Get the base URL for API requests, without a trailing slash
///
/// # Returns
/// - The `SAAS_API_URL` value when set at build time
/// - Otherwise e.g. "http://localhost:4000/api", derived from the window location
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(url) = API_URL_OVERRIDE {
        return url.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_for(&protocol, &hostname)
}

fn base_for(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}{}", protocol, hostname, DEFAULT_API_PORT, API_PREFIX)
}

/// Build a full API URL from a resource path such as `/metrics/abc`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Path of a single record, with the id percent-encoded
pub fn resource_path(collection: &str, id: &str) -> String {
    format!("{}/{}", collection, urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_for_location() {
        assert_eq!(base_for("https:", "panel.example.com"), "https://panel.example.com:4000/api");
    }

    #[test]
    fn test_resource_path_encodes_id() {
        assert_eq!(resource_path("/metrics", "m1"), "/metrics/m1");
        assert_eq!(resource_path("/users/delete", "a/b c"), "/users/delete/a%2Fb%20c");
    }
}
