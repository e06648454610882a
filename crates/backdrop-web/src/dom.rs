//! Canvas creation and surface sizing against the host container.

use anyhow::{anyhow, Result};
use backdrop_core::Viewport;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Creates a canvas inside the container, optionally tagged with a styling
/// class. The canvas is the renderer's own; disposal removes it again.
pub fn create_canvas(
    container: &web::HtmlElement,
    class_name: Option<&str>,
) -> Result<web::HtmlCanvasElement> {
    let document = web::window()
        .and_then(|w| w.document())
        .ok_or_else(|| anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow!(format!("{:?}", e)))?
        .dyn_into()
        .map_err(|e| anyhow!(format!("{:?}", e)))?;
    if let Some(class) = class_name {
        canvas.set_class_name(class);
    }
    container
        .append_child(&canvas)
        .map_err(|e| anyhow!(format!("{:?}", e)))?;
    Ok(canvas)
}

/// Container size in logical (CSS) pixels. A zero-width container falls
/// back to the window's inner width, matching how a full-bleed section
/// behaves before layout settles.
pub fn container_size(container: &web::HtmlElement) -> (f32, f32) {
    let mut width = container.client_width() as f32;
    let height = container.client_height() as f32;
    if width <= 0.0 {
        if let Some(w) = web::window() {
            width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
        }
    }
    (width, height)
}

pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

/// Applies a fitted viewport to the canvas: backing store at physical
/// pixels, CSS size at logical pixels. Backing-store writes are skipped
/// when unchanged since setting a canvas dimension clears it.
pub fn apply_viewport(canvas: &web::HtmlCanvasElement, vp: &Viewport) {
    let (bw, bh) = vp.backing_size();
    if canvas.width() != bw {
        canvas.set_width(bw);
    }
    if canvas.height() != bh {
        canvas.set_height(bh);
    }
    let style = canvas.style();
    let _ = style.set_property("width", &format!("{}px", vp.width));
    let _ = style.set_property("height", &format!("{}px", vp.height));
}

/// Normalized pointer position over the canvas in [0, 1] per axis.
pub fn pointer_uv(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    let (w, h) = (rect.width() as f32, rect.height() as f32);
    if w <= 0.0 || h <= 0.0 {
        return None;
    }
    let x = (ev.client_x() as f32 - rect.left() as f32) / w;
    let y = (ev.client_y() as f32 - rect.top() as f32) / h;
    Some(Vec2::new(x.clamp(0.0, 1.0), y.clamp(0.0, 1.0)))
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

/// Drawing happens in logical units; the transform folds in the pixel
/// ratio so the backing store fills at device resolution.
pub fn apply_transform(ctx: &web::CanvasRenderingContext2d, vp: &Viewport) {
    let r = vp.pixel_ratio;
    let _ = ctx.set_transform(r, 0.0, 0.0, r, 0.0, 0.0);
}
