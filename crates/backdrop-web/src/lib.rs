#![cfg(target_arch = "wasm32")]

//! Browser glue for the animated backdrops.
//!
//! Hosts call one of the three `mount_*` functions with a container element;
//! the renderer attaches its own canvas, runs until the returned handle is
//! disposed, and contains every failure behind its own boundary: a page
//! never breaks because its backdrop could not start.

mod dom;
mod events;
mod frame;
mod lifecycle;
mod orb_field;
mod particle_network;
mod warp_field;

pub use lifecycle::RendererHandle;

use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web ready");
    Ok(())
}

/// Mounts the connected-particle network into `container`.
#[wasm_bindgen]
pub fn mount_particle_network(
    container: web::HtmlElement,
    class_name: Option<String>,
) -> Result<RendererHandle, JsValue> {
    particle_network::mount(&container, class_name.as_deref()).map_err(to_js)
}

/// Mounts the orbiting-gradient orb field into `container`.
#[wasm_bindgen]
pub fn mount_orb_field(
    container: web::HtmlElement,
    class_name: Option<String>,
) -> Result<RendererHandle, JsValue> {
    orb_field::mount(&container, class_name.as_deref()).map_err(to_js)
}

/// Mounts the GPU warp field into `container`.
#[wasm_bindgen]
pub fn mount_warp_field(
    container: web::HtmlElement,
    class_name: Option<String>,
) -> Result<RendererHandle, JsValue> {
    warp_field::mount(&container, class_name.as_deref()).map_err(to_js)
}

fn to_js(e: anyhow::Error) -> JsValue {
    log::error!("mount failed: {e:#}");
    JsValue::from_str(&format!("{e:#}"))
}

/// Per-mount simulation seed. Backdrops are decorative; they want a fresh
/// look per mount, not reproducibility.
pub(crate) fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}
