//! The mount/dispose contract shared by all three renderers.

use wasm_bindgen::prelude::*;
use web_sys as web;

use crate::events::Listener;
use crate::frame::FrameLoop;

/// Everything a mounted renderer owns. Dropping it tears the renderer down
/// in the required order: frame loop first (no further frames), then the
/// event listeners, then the GPU bundle, then the canvas itself.
pub(crate) struct Mounted {
    pub frames: Option<FrameLoop>,
    pub listeners: Vec<Listener>,
    pub canvas: Option<web::HtmlCanvasElement>,
    pub release: Option<Box<dyn FnOnce()>>,
}

impl Mounted {
    /// A handle for a mount whose setup failed after the canvas was
    /// attached: nothing runs, but dispose still detaches the canvas.
    pub fn inert(canvas: Option<web::HtmlCanvasElement>) -> Self {
        Self {
            frames: None,
            listeners: Vec::new(),
            canvas,
            release: None,
        }
    }
}

/// Returned by every `mount_*` call. The host keeps it for the lifetime of
/// the background effect and calls `dispose` (or lets it drop) to unmount.
#[wasm_bindgen]
pub struct RendererHandle {
    inner: Option<Mounted>,
}

impl RendererHandle {
    pub(crate) fn new(mounted: Mounted) -> Self {
        Self {
            inner: Some(mounted),
        }
    }
}

#[wasm_bindgen]
impl RendererHandle {
    /// Cancels the frame loop, removes all event listeners, releases GPU
    /// resources and detaches the canvas. Idempotent.
    pub fn dispose(&mut self) {
        let Some(mut mounted) = self.inner.take() else {
            return;
        };
        if let Some(frames) = mounted.frames.take() {
            frames.cancel();
        }
        mounted.listeners.clear();
        if let Some(release) = mounted.release.take() {
            release();
        }
        if let Some(canvas) = mounted.canvas.take() {
            canvas.remove();
        }
        log::info!("backdrop disposed");
    }
}

impl Drop for RendererHandle {
    fn drop(&mut self) {
        self.dispose();
    }
}
