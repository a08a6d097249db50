//! Offline support
//!
//! The service worker (`web/sw.js`) precaches the static assets listed here
//! on install, takes over open pages on activate and serves cache-first with
//! network fallback. This module owns the manifest and registers the worker.

/// Cache bucket; bump when the asset list changes
pub const CACHE_NAME: &str = "friends-snake-v1";

/// Service worker script, relative to the page
pub const SERVICE_WORKER_URL: &str = "sw.js";

/// Static assets fetched into the cache at install time
pub const PRECACHE_ASSETS: &[&str] = &[
    "/",
    "/index.html",
    "/styles.css",
    "/friends_snake.js",
    "/friends_snake_bg.wasm",
    "/manifest.json",
    "/icon_192x192.png",
    "/icon_512x512.png",
    "/bg_music.wav",
];

/// Register the service worker. Failures (unsupported browser, file://
/// origin) only cost offline support.
#[cfg(target_arch = "wasm32")]
pub fn register_service_worker() {
    use wasm_bindgen_futures::JsFuture;

    let Some(window) = web_sys::window() else { return };
    let container = window.navigator().service_worker();
    let promise = container.register(SERVICE_WORKER_URL);

    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => log::info!("Service worker registered ({})", CACHE_NAME),
            Err(e) => log::warn!("Service worker registration failed: {:?}", e),
        }
    });
}
