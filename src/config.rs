use std::str::FromStr;

use crate::domain::logging::LogLevel;

/// Runtime settings read from the page URL, e.g. `?q=일본&log=trace`
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    pub log_level: LogLevel,
    /// Pre-filled search field value
    pub initial_search: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { log_level: LogLevel::build_default(), initial_search: String::new() }
    }
}

impl BoardConfig {
    /// Parse a query string (leading `?` optional). Unknown keys and
    /// unparseable values fall back to defaults.
    pub fn from_query(query: &str) -> Self {
        let mut config = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let (Some(key), Some(value)) = (decode_component(key), decode_component(value)) else {
                continue;
            };
            match key.as_str() {
                "q" | "search" => config.initial_search = value,
                "log" => {
                    if let Ok(level) = LogLevel::from_str(&value) {
                        config.log_level = level;
                    }
                }
                _ => {}
            }
        }

        config
    }

    /// Read from `window.location.search`, defaulting when unavailable.
    pub fn from_location() -> Self {
        gloo::utils::window()
            .location()
            .search()
            .map(|query| Self::from_query(&query))
            .unwrap_or_default()
    }
}

/// `application/x-www-form-urlencoded` component: `+` is a space, then percent-decoding.
/// Invalid UTF-8 yields `None`.
fn decode_component(raw: &str) -> Option<String> {
    urlencoding::decode(&raw.replace('+', " ")).ok().map(|decoded| decoded.into_owned())
}
