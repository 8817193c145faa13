use lazy_static::lazy_static;
use web_sys::window;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
const DEFAULT_APP_NAME: &str = "YouTube Trending";

lazy_static! {
    pub static ref BACKEND_URL: String = get_backend_url();
}

/// Read a key from the `window.ENV_CONFIG` object injected by `env.js`
pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;

    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - environment variables not loaded");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;

    if !value.is_undefined() {
        value.as_string()
    } else {
        log::warn!("Environment variable '{}' is undefined", key);
        None
    }
}

/// Blank values count as unset; a trailing slash is dropped so paths can be appended
fn backend_url_or_default(raw: Option<String>) -> String {
    raw.map(|url| url.trim().trim_end_matches('/').to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
}

fn parse_flag(raw: Option<String>) -> bool {
    matches!(
        raw.as_deref().map(str::trim).map(str::to_ascii_lowercase).as_deref(),
        Some("true" | "1" | "yes" | "on")
    )
}

pub fn get_backend_url() -> String {
    backend_url_or_default(get_env_var("BACKEND_URL"))
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME")
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_APP_NAME.to_string())
}

pub fn is_debug_mode() -> bool {
    parse_flag(get_env_var("DEBUG_MODE"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_url_is_trimmed_or_defaulted() {
        assert_eq!(
            backend_url_or_default(Some(" https://api.example.com/ ".to_string())),
            "https://api.example.com"
        );
        assert_eq!(backend_url_or_default(Some("  ".to_string())), DEFAULT_BACKEND_URL);
        assert_eq!(backend_url_or_default(None), DEFAULT_BACKEND_URL);
    }

    #[test]
    fn debug_flag_accepts_common_spellings() {
        for value in ["true", "TRUE", "1", " yes ", "on"] {
            assert!(parse_flag(Some(value.to_string())), "{value}");
        }
        for value in ["false", "0", "", "maybe"] {
            assert!(!parse_flag(Some(value.to_string())), "{value}");
        }
        assert!(!parse_flag(None));
    }
}
