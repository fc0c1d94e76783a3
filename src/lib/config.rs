//! Build-time configuration for the rental API and logging with an optional
//! runtime override. The runtime config is read from `window.WIGELL_CONFIG`
//! (if present) so static deployments can point at another backend without
//! rebuilding. Configuration values are public; do not store secrets here.

/// API base used when nothing else is configured.
const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/v1";
/// Log filter used when nothing else is configured.
const DEFAULT_LOG_FILTER: &str = "info";

/// Keys read from `window.WIGELL_CONFIG`, snake case first.
const API_BASE_URL_KEYS: [&str; 2] = ["api_base_url", "apiBaseUrl"];
const LOG_FILTER_KEYS: [&str; 2] = ["log_filter", "logFilter"];

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_filter: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        #[cfg_attr(not(target_arch = "wasm32"), allow(unused_mut))]
        let mut config = Self {
            api_base_url: option_env!("WIGELL_API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            log_filter: option_env!("WIGELL_LOG_FILTER")
                .unwrap_or(DEFAULT_LOG_FILTER)
                .to_string(),
        };

        #[cfg(target_arch = "wasm32")]
        if let Some(runtime) = runtime_object() {
            config.override_from(|key| read_string(&runtime, key));
        }

        config
    }

    /// Builds a request URL from the configured API base and the provided path.
    pub fn endpoint(&self, path: &str) -> String {
        build_url_with_base(&self.api_base_url, path)
    }

    /// Takes every value `lookup` knows under one of its keys. Blank entries
    /// leave the build-time value in place.
    fn override_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let first = |keys: &[&str]| {
            keys.iter()
                .find_map(|key| lookup(key).as_deref().and_then(non_blank))
        };
        if let Some(api_base_url) = first(&API_BASE_URL_KEYS) {
            self.api_base_url = api_base_url;
        }
        if let Some(log_filter) = first(&LOG_FILTER_KEYS) {
            self.log_filter = log_filter;
        }
    }
}

/// Joins a base URL and a path with exactly one separating slash.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(target_arch = "wasm32")]
fn runtime_object() -> Option<js_sys::Object> {
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = js_sys::Reflect::get(&window, &JsValue::from_str("WIGELL_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    Some(js_sys::Object::from(config))
}

#[cfg(target_arch = "wasm32")]
fn read_string(object: &js_sys::Object, key: &str) -> Option<String> {
    js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, build_url_with_base};
    use std::collections::HashMap;

    fn local_backend() -> AppConfig {
        AppConfig {
            api_base_url: "http://localhost:8080/api/v1".to_string(),
            log_filter: "info".to_string(),
        }
    }

    fn runtime(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn load_falls_back_to_local_backend() {
        let config = AppConfig::load();
        assert!(!config.api_base_url.is_empty());
        assert!(!config.log_filter.is_empty());
    }

    #[test]
    fn endpoint_joins_base_and_path() {
        let config = local_backend();
        assert_eq!(config.endpoint("/cars/7"), "http://localhost:8080/api/v1/cars/7");
        assert_eq!(
            config.endpoint("bookings/user/3"),
            "http://localhost:8080/api/v1/bookings/user/3"
        );
        assert_eq!(
            build_url_with_base("https://rentals.example/api/", "/users/current"),
            "https://rentals.example/api/users/current"
        );
        assert_eq!(build_url_with_base("  ", "/auth/login"), "/auth/login");
    }

    #[test]
    fn staging_deploy_points_at_its_own_backend() {
        let mut config = local_backend();
        let overrides = runtime(&[("apiBaseUrl", " https://staging.wigell.se/api/v1 ")]);
        config.override_from(|key| overrides.get(key).cloned());
        assert_eq!(config.api_base_url, "https://staging.wigell.se/api/v1");
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.endpoint("cars"), "https://staging.wigell.se/api/v1/cars");
    }

    #[test]
    fn snake_case_keys_win_and_blanks_are_ignored() {
        let mut config = local_backend();
        let overrides = runtime(&[
            ("api_base_url", "https://rentals.wigell.se/api/v1"),
            ("apiBaseUrl", "https://ignored.example"),
            ("log_filter", "   "),
            ("logFilter", "wigell_web=debug"),
        ]);
        config.override_from(|key| overrides.get(key).cloned());
        assert_eq!(config.api_base_url, "https://rentals.wigell.se/api/v1");
        assert_eq!(config.log_filter, "wigell_web=debug");
    }

    #[test]
    fn empty_runtime_config_keeps_build_values() {
        let mut config = local_backend();
        config.override_from(|_| None);
        assert_eq!(config.api_base_url, "http://localhost:8080/api/v1");
        assert_eq!(config.log_filter, "info");
    }
}
