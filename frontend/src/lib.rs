pub mod api;
pub mod components;
pub mod config;
pub mod pages;
#[cfg(test)]
mod test_support;
pub mod utils;

pub use components::footer::Footer;
pub use pages::calendar::{CalendarGridProps, FullScreenCalendar};

/// WASM entry point: installs the panic hook and console logger, then starts
/// resolving runtime configuration. Mounting the calendar is left to the host
/// application, which supplies the grid renderer.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting holiday calendar frontend (wasm)");

    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
        log::debug!("Runtime config initialized");
    });
}
