//! GPU warp-field renderer.
//!
//! The whole effect is one fragment program over a fullscreen triangle; the
//! CPU side compiles the pipeline once at mount, then writes four scalars'
//! worth of uniforms per frame. GPU acquisition is asynchronous, so the
//! frame loop starts immediately and simply skips frames until the bundle
//! is ready (or forever, if acquisition failed).

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use anyhow::{anyhow, Result};
use backdrop_core::{Viewport, WarpState, WarpUniforms, WARP_FLOOR, WARP_WGSL};
use instant::Instant;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use crate::dom;
use crate::events::{as_mouse, Listener};
use crate::frame::FrameLoop;
use crate::lifecycle::{Mounted, RendererHandle};

pub fn mount(container: &web::HtmlElement, class_name: Option<&str>) -> Result<RendererHandle> {
    let canvas = dom::create_canvas(container, class_name)?;

    let (cw, ch) = dom::container_size(container);
    let vp = Viewport::fit(cw, ch, WARP_FLOOR, dom::device_pixel_ratio());
    dom::apply_viewport(&canvas, &vp);

    let state = Rc::new(RefCell::new(WarpState::new(vp.width, vp.height)));
    let gpu: Rc<RefCell<Option<GpuState>>> = Rc::new(RefCell::new(None));
    let released = Rc::new(Cell::new(false));

    // Asynchronous context/program acquisition. Failure is terminal for
    // this mount: it is logged and the surface stays blank.
    {
        let canvas = canvas.clone();
        let gpu = gpu.clone();
        let released = released.clone();
        spawn_local(async move {
            match GpuState::new(canvas).await {
                Ok(bundle) => {
                    if released.get() {
                        bundle.release();
                    } else {
                        *gpu.borrow_mut() = Some(bundle);
                        log::info!("warp field mounted");
                    }
                }
                Err(e) => log::error!("warp field: gpu unavailable: {e:#}"),
            }
        });
    }

    let mut listeners = Vec::new();

    // Resize reissues the resolution uniform and reconfigures the surface;
    // it never recompiles the program.
    let on_resize = {
        let container = container.clone();
        let canvas = canvas.clone();
        let state = state.clone();
        move |_: web::Event| {
            let (cw, ch) = dom::container_size(&container);
            let vp = Viewport::fit(cw, ch, WARP_FLOOR, dom::device_pixel_ratio());
            dom::apply_viewport(&canvas, &vp);
            state.borrow_mut().set_resolution(vp.width, vp.height);
        }
    };
    if let Some(window) = web::window() {
        listeners.push(Listener::add(&window, "resize", on_resize));
    }

    let on_move = {
        let canvas = canvas.clone();
        let state = state.clone();
        move |ev: web::Event| {
            let Some(mouse) = as_mouse(&ev) else { return };
            if let Some(uv) = dom::pointer_uv(&mouse, &canvas) {
                state.borrow_mut().pointer.moved(uv.x, uv.y);
            }
        }
    };
    listeners.push(Listener::add(&canvas, "pointermove", on_move));

    let on_down = {
        let state = state.clone();
        move |_: web::Event| state.borrow_mut().pointer.pressed()
    };
    listeners.push(Listener::add(&canvas, "pointerdown", on_down));

    let on_up = {
        let state = state.clone();
        move |_: web::Event| state.borrow_mut().pointer.released()
    };
    listeners.push(Listener::add(&canvas, "pointerup", on_up));

    let on_leave = {
        let state = state.clone();
        move |_: web::Event| state.borrow_mut().pointer.left()
    };
    listeners.push(Listener::add(&canvas, "pointerleave", on_leave));

    let frames = {
        let canvas = canvas.clone();
        let gpu = gpu.clone();
        let state = state.clone();
        let started = Instant::now();
        FrameLoop::start(move || {
            let mut slot = gpu.borrow_mut();
            let Some(bundle) = slot.as_mut() else {
                // Still acquiring, or acquisition failed: render nothing.
                return;
            };
            let uniforms = {
                let mut s = state.borrow_mut();
                s.set_elapsed(started.elapsed().as_secs_f32());
                s.uniforms()
            };
            bundle.resize_if_needed(canvas.width(), canvas.height());
            if let Err(e) = bundle.render(&uniforms) {
                log::error!("warp render error: {e:?}");
            }
        })
    };

    // Explicit context release on unmount; repeated mount/unmount cycles
    // must not depend on garbage collection reclaiming the device.
    let release = {
        let gpu = gpu.clone();
        let released = released.clone();
        Box::new(move || {
            released.set(true);
            if let Some(bundle) = gpu.borrow_mut().take() {
                bundle.release();
            }
        }) as Box<dyn FnOnce()>
    };

    Ok(RendererHandle::new(Mounted {
        frames: Some(frames),
        listeners,
        canvas: Some(canvas),
        release: Some(release),
    }))
}

// ===================== GPU bundle =====================

struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    width: u32,
    height: u32,
}

impl GpuState {
    async fn new(canvas: web::HtmlCanvasElement) -> Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
            .map_err(|e| anyhow!("create_surface error: {e}"))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow!("no WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow!("request_device error: {e:?}"))?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .first()
            .copied()
            .ok_or_else(|| anyhow!("no supported surface formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        // Surface shader/pipeline validation as a contained failure rather
        // than an uncaptured error: nothing below may receive a draw call
        // unless the whole bundle built cleanly.
        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("warp_shader"),
            source: wgpu::ShaderSource::Wgsl(WARP_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("warp_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("warp_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("warp_pipeline"),
            layout: Some(&pl),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_fullscreen"),
                buffers: &[],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_warp"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("warp_uniforms"),
            size: std::mem::size_of::<WarpUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("warp_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        if let Some(err) = device.pop_error_scope().await {
            return Err(anyhow!("warp shader rejected: {err}"));
        }

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            bind_group,
            width,
            height,
        })
    }

    fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    fn render(&mut self, uniforms: &WarpUniforms) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("warp_encoder"),
            });
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));

        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("warp_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.draw(0..3, 0..1);
        drop(rpass);

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Releases the underlying context explicitly rather than waiting for
    /// collection; the surface drops with `self`.
    fn release(self) {
        self.device.destroy();
    }
}
