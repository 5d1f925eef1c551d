use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub time_zone: Option<String>,
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();
static API_BASE_URL: OnceLock<String> = OnceLock::new();
static TIME_ZONE: OnceLock<Tz> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn get_from_env_js() -> Option<RuntimeConfig> {
    // Expect optional global object:
    // window.__HOLIDAY_CALENDAR_ENV = { API_BASE_URL: "...", TIME_ZONE: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &"__HOLIDAY_CALENDAR_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let read = |upper: &str, lower: &str| {
        js_sys::Reflect::get(&obj, &upper.into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .or_else(|| js_sys::Reflect::get(&obj, &lower.into()).ok())
            .and_then(|v| v.as_string())
    };
    Some(RuntimeConfig {
        api_base_url: read("API_BASE_URL", "api_base_url"),
        time_zone: read("TIME_ZONE", "time_zone"),
    })
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

#[cfg(target_arch = "wasm32")]
async fn fetch_config() -> RuntimeConfig {
    if let Some(cfg) = get_from_env_js() {
        return cfg;
    }
    fetch_runtime_config().await.unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_config() -> RuntimeConfig {
    RuntimeConfig::default()
}

async fn runtime_config() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    let cfg = fetch_config().await;
    RUNTIME_CONFIG.get_or_init(|| cfg).clone()
}

/// Strips surrounding whitespace and trailing slashes so paths can be appended.
pub fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

fn resolve_base_url(runtime: Option<&str>, build_time: Option<&str>) -> String {
    [runtime, build_time]
        .into_iter()
        .flatten()
        .map(normalize_base_url)
        .find(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

fn cache_base_url(value: String) -> String {
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

fn parse_time_zone(name: &str) -> Option<Tz> {
    match name.trim().parse::<Tz>() {
        Ok(tz) => Some(tz),
        Err(err) => {
            log::warn!("Ignoring invalid time zone {:?}: {}", name, err);
            None
        }
    }
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    let cfg = runtime_config().await;
    cache_base_url(resolve_base_url(
        cfg.api_base_url.as_deref(),
        option_env!("API_BASE_URL"),
    ))
}

fn resolve_time_zone(name: Option<&str>) -> Tz {
    name.and_then(parse_time_zone).unwrap_or(Tz::UTC)
}

/// Resolves the app time zone from runtime config, independent of the base URL.
pub async fn await_time_zone() -> Tz {
    if let Some(tz) = TIME_ZONE.get() {
        return *tz;
    }
    let cfg = runtime_config().await;
    *TIME_ZONE.get_or_init(|| resolve_time_zone(cfg.time_zone.as_deref()))
}

/// Time zone used to turn timestamp-shaped dates into calendar days.
/// Falls back to UTC until [`await_time_zone`] has run.
pub fn app_time_zone() -> Tz {
    TIME_ZONE.get().copied().unwrap_or(Tz::UTC)
}

pub async fn init() {
    let _ = await_time_zone().await;
    let _ = await_api_base_url().await;
}
