//! Orbiting-gradient orb renderer: additive Canvas2D blobs over the
//! simulation in `backdrop_core::orbs`.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use backdrop_core::{OrbField, Viewport, ORB_FLOOR};
use web_sys as web;

use crate::dom;
use crate::events::{as_mouse, Listener};
use crate::frame::FrameLoop;
use crate::lifecycle::{Mounted, RendererHandle};

pub fn mount(container: &web::HtmlElement, class_name: Option<&str>) -> Result<RendererHandle> {
    let canvas = dom::create_canvas(container, class_name)?;
    let Some(ctx) = dom::context_2d(&canvas) else {
        log::error!("orb field: 2d context unavailable, backdrop disabled");
        return Ok(RendererHandle::new(Mounted::inert(Some(canvas))));
    };

    let (cw, ch) = dom::container_size(container);
    let vp = Viewport::fit(cw, ch, ORB_FLOOR, dom::device_pixel_ratio());
    dom::apply_viewport(&canvas, &vp);
    dom::apply_transform(&ctx, &vp);

    let field = Rc::new(RefCell::new(OrbField::new(
        vp.width,
        vp.height,
        crate::random_seed(),
    )));
    log::info!("orb field mounted");

    let mut listeners = Vec::new();

    let on_resize = {
        let container = container.clone();
        let canvas = canvas.clone();
        let ctx = ctx.clone();
        let field = field.clone();
        move |_: web::Event| {
            let (cw, ch) = dom::container_size(&container);
            let vp = Viewport::fit(cw, ch, ORB_FLOOR, dom::device_pixel_ratio());
            dom::apply_viewport(&canvas, &vp);
            dom::apply_transform(&ctx, &vp);
            field.borrow_mut().resize(vp.width, vp.height);
        }
    };
    if let Some(window) = web::window() {
        listeners.push(Listener::add(&window, "resize", on_resize));
    }

    // Parallax: every pointer move nudges all orbits by the offset from the
    // surface center. The next frame simply sees the nudged state.
    let on_pointer = {
        let canvas = canvas.clone();
        let field = field.clone();
        move |ev: web::Event| {
            let Some(mouse) = as_mouse(&ev) else { return };
            if let Some(uv) = dom::pointer_uv(&mouse, &canvas) {
                field.borrow_mut().pointer_nudge(uv.x - 0.5, uv.y - 0.5);
            }
        }
    };
    listeners.push(Listener::add(&canvas, "pointermove", on_pointer));

    let frames = {
        let field = field.clone();
        FrameLoop::start(move || {
            let mut f = field.borrow_mut();
            f.advance();
            draw(&ctx, &f);
        })
    };

    Ok(RendererHandle::new(Mounted {
        frames: Some(frames),
        listeners,
        canvas: Some(canvas),
        release: None,
    }))
}

fn draw(ctx: &web::CanvasRenderingContext2d, field: &OrbField) {
    let (w, h) = (field.width() as f64, field.height() as f64);
    ctx.clear_rect(0.0, 0.0, w, h);

    // Vignette backdrop
    if let Ok(g) = ctx.create_radial_gradient(
        w * 0.5,
        h * 0.45,
        10.0,
        w * 0.5,
        h * 0.5,
        w.max(h) * 0.8,
    ) {
        let _ = g.add_color_stop(0.0, "rgba(10,11,15,0.9)");
        let _ = g.add_color_stop(1.0, "rgba(7,8,11,1)");
        ctx.set_fill_style_canvas_gradient(&g);
        ctx.fill_rect(0.0, 0.0, w, h);
    }

    // Additive orb layer; overlaps brighten rather than occlude
    let _ = ctx.set_global_composite_operation("lighter");
    for (i, orb) in field.orbs().iter().enumerate() {
        let (x, y) = field.position(orb);
        let (x, y) = (x as f64, y as f64);
        let radius = orb.radius as f64;
        let color = OrbField::color(orb, i);
        if let Ok(g) = ctx.create_radial_gradient(x, y, 0.0, x, y, radius) {
            let _ = g.add_color_stop(0.0, &color);
            let _ = g.add_color_stop(0.4, &color);
            let _ = g.add_color_stop(1.0, "rgba(0,0,0,0)");
            ctx.set_fill_style_canvas_gradient(&g);
            ctx.begin_path();
            let _ = ctx.arc(x, y, radius, 0.0, std::f64::consts::TAU);
            ctx.fill();
        }
    }
    let _ = ctx.set_global_composite_operation("source-over");

    // Soft horizon glow band over the lower frame
    let hg = ctx.create_linear_gradient(0.0, h * 0.75, 0.0, h);
    let _ = hg.add_color_stop(0.0, "rgba(255,255,255,0.06)");
    let _ = hg.add_color_stop(1.0, "rgba(7,8,11,0)");
    ctx.set_fill_style_canvas_gradient(&hg);
    ctx.fill_rect(0.0, h * 0.6, w, h * 0.4);
}
