//! Connected-particle network renderer: Canvas2D drawing over the
//! simulation in `backdrop_core::particles`.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use backdrop_core::{css_hsla, ParticleField, Viewport, PARTICLE_FLOOR, PARTICLE_HALO_SCALE};
use web_sys as web;

use crate::dom;
use crate::events::Listener;
use crate::frame::FrameLoop;
use crate::lifecycle::{Mounted, RendererHandle};

pub fn mount(container: &web::HtmlElement, class_name: Option<&str>) -> Result<RendererHandle> {
    let canvas = dom::create_canvas(container, class_name)?;
    let Some(ctx) = dom::context_2d(&canvas) else {
        log::error!("particle network: 2d context unavailable, backdrop disabled");
        return Ok(RendererHandle::new(Mounted::inert(Some(canvas))));
    };

    let (cw, ch) = dom::container_size(container);
    let vp = Viewport::fit(cw, ch, PARTICLE_FLOOR, dom::device_pixel_ratio());
    dom::apply_viewport(&canvas, &vp);
    dom::apply_transform(&ctx, &vp);

    let field = Rc::new(RefCell::new(ParticleField::new(
        vp.width,
        vp.height,
        crate::random_seed(),
    )));
    log::info!("particle network mounted ({} particles)", field.borrow().len());

    // Refit the surface, then reseed at the new density. The two steps are
    // deliberate: population count is a function of the fitted size.
    let on_resize = {
        let container = container.clone();
        let canvas = canvas.clone();
        let ctx = ctx.clone();
        let field = field.clone();
        move |_: web::Event| {
            let (cw, ch) = dom::container_size(&container);
            let vp = Viewport::fit(cw, ch, PARTICLE_FLOOR, dom::device_pixel_ratio());
            dom::apply_viewport(&canvas, &vp);
            dom::apply_transform(&ctx, &vp);
            field.borrow_mut().resize(vp.width, vp.height);
        }
    };
    let mut listeners = Vec::new();
    if let Some(window) = web::window() {
        listeners.push(Listener::add(&window, "resize", on_resize));
    }

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

fn draw(ctx: &web::CanvasRenderingContext2d, field: &ParticleField) {
    let (w, h) = (field.width() as f64, field.height() as f64);
    draw_background(ctx, w, h);

    // Connection pass
    ctx.set_line_width(1.0);
    field.visit_edges(|edge| {
        ctx.set_stroke_style_str(&css_hsla(
            edge.hue,
            80.0,
            40.0 + edge.strength * 25.0,
            0.18 + edge.strength * 0.25,
        ));
        ctx.begin_path();
        ctx.move_to(edge.a.x as f64, edge.a.y as f64);
        ctx.line_to(edge.b.x as f64, edge.b.y as f64);
        ctx.stroke();
    });

    // Particles: soft halo gradient plus a solid core
    for p in field.particles() {
        let (px, py) = (p.pos.x as f64, p.pos.y as f64);
        let halo = (p.radius * PARTICLE_HALO_SCALE) as f64;
        let hue = field.particle_hue(p);
        if let Ok(g) = ctx.create_radial_gradient(px, py, 0.0, px, py, halo) {
            let _ = g.add_color_stop(0.0, &css_hsla(hue, 90.0, 65.0, 0.9));
            let _ = g.add_color_stop(0.4, &css_hsla(hue, 90.0, 55.0, 0.6));
            let _ = g.add_color_stop(1.0, "rgba(0,0,0,0)");
            ctx.set_fill_style_canvas_gradient(&g);
            ctx.begin_path();
            let _ = ctx.arc(px, py, halo, 0.0, std::f64::consts::TAU);
            ctx.fill();
        }
        ctx.set_fill_style_str("rgba(255,255,255,0.9)");
        ctx.begin_path();
        let _ = ctx.arc(px, py, p.radius as f64, 0.0, std::f64::consts::TAU);
        ctx.fill();
    }

    draw_vignette(ctx, w, h);
}

fn draw_background(ctx: &web::CanvasRenderingContext2d, w: f64, h: f64) {
    if let Ok(g) = ctx.create_radial_gradient(
        w * 0.5,
        h * 0.5,
        w.min(h) * 0.1,
        w * 0.5,
        h * 0.6,
        w.max(h) * 0.9,
    ) {
        let _ = g.add_color_stop(0.0, "rgba(10, 12, 18, 0.95)");
        let _ = g.add_color_stop(1.0, "rgba(7, 8, 11, 1)");
        ctx.set_fill_style_canvas_gradient(&g);
        ctx.fill_rect(0.0, 0.0, w, h);
    }

    // Directional tint wash under the particles
    let wash = ctx.create_linear_gradient(0.0, 0.0, w, h);
    let _ = wash.add_color_stop(0.0, "rgba(99, 102, 241, 0.07)");
    let _ = wash.add_color_stop(1.0, "rgba(236, 72, 153, 0.06)");
    ctx.set_fill_style_canvas_gradient(&wash);
    ctx.fill_rect(0.0, 0.0, w, h);
}

fn draw_vignette(ctx: &web::CanvasRenderingContext2d, w: f64, h: f64) {
    let vg = ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
    let _ = vg.add_color_stop(0.0, "rgba(0,0,0,0.2)");
    let _ = vg.add_color_stop(0.6, "rgba(0,0,0,0)");
    let _ = vg.add_color_stop(1.0, "rgba(7,8,11,0.4)");
    ctx.set_fill_style_canvas_gradient(&vg);
    ctx.fill_rect(0.0, 0.0, w, h);
}
