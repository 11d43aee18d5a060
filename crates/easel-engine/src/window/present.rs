use std::num::NonZeroU32;

use anyhow::{anyhow, bail, Result};
use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::coords::Viewport;
use crate::device::{Gpu, GpuInit, SurfaceErrorAction};
use crate::paint::Color;
use crate::render::{RasterSurface, RenderCtx, RenderTarget, ShapeBatch, ShapeRenderer, Surface};

use super::{Backend, RuntimeConfig};

/// Turns one repaint of the window into pixels on screen.
///
/// The variant is fixed at window creation; lifetimes are tied to the window
/// through the runtime's self-referencing window entry.
pub(crate) enum Presenter<'w> {
    Gpu(GpuPresenter<'w>),
    Software(SoftwarePresenter<'w>),
}

impl<'w> Presenter<'w> {
    /// Tries each candidate backend in preference order and keeps the first that comes up.
    pub fn select(window: &'w Window, config: &RuntimeConfig) -> Result<Self> {
        let mut last_err = None;

        for &backend in config.backend.candidates() {
            match Self::create(window, backend, config) {
                Ok(presenter) => {
                    log::info!("presenting with {backend} backend");
                    return Ok(presenter);
                }
                Err(e) => {
                    log::warn!("{backend} backend unavailable: {e:#}");
                    last_err = Some(e);
                }
            }
        }

        Err(last_err.unwrap_or_else(|| anyhow!("no rendering backend to try")))
    }

    fn create(window: &'w Window, backend: Backend, config: &RuntimeConfig) -> Result<Self> {
        match backend {
            Backend::Gpu => GpuPresenter::new(window, config.gpu_init.clone(), config.anti_alias)
                .map(Presenter::Gpu),
            Backend::Software => {
                SoftwarePresenter::new(window, config.anti_alias).map(Presenter::Software)
            }
        }
    }

    pub fn backend(&self) -> Backend {
        match self {
            Presenter::Gpu(_) => Backend::Gpu,
            Presenter::Software(_) => Backend::Software,
        }
    }

    /// Reacts to a physical size change.
    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        match self {
            Presenter::Gpu(p) => p.gpu.resize(size),
            // Software buffers are sized at present time.
            Presenter::Software(_) => {}
        }
    }

    /// Clears to `backdrop`, lets `paint` draw, and presents the result.
    pub fn present<F>(&mut self, window: &Window, backdrop: Color, paint: F) -> Result<()>
    where
        F: FnOnce(&mut dyn Surface),
    {
        match self {
            Presenter::Gpu(p) => p.present(window, backdrop, paint),
            Presenter::Software(p) => p.present(window, backdrop, paint),
        }
    }
}

/// wgpu presenter: replays into a [`ShapeBatch`] and draws it in a single pass.
pub(crate) struct GpuPresenter<'w> {
    gpu: Gpu<'w>,
    renderer: ShapeRenderer,
    batch: ShapeBatch,
    anti_alias: bool,
}

impl<'w> GpuPresenter<'w> {
    fn new(window: &'w Window, init: GpuInit, anti_alias: bool) -> Result<Self> {
        let gpu = pollster::block_on(Gpu::new(window, init))?;
        log::debug!("gpu adapter: {}", gpu.adapter_name());

        Ok(Self {
            gpu,
            renderer: ShapeRenderer::new(),
            batch: ShapeBatch::default(),
            anti_alias,
        })
    }

    fn present<F>(&mut self, window: &Window, backdrop: Color, paint: F) -> Result<()>
    where
        F: FnOnce(&mut dyn Surface),
    {
        let logical: winit::dpi::LogicalSize<f64> =
            window.inner_size().to_logical(window.scale_factor());
        let viewport = Viewport::new(logical.width as f32, logical.height as f32);
        if !viewport.is_valid() {
            // Minimized or not yet mapped.
            return Ok(());
        }

        self.batch.reset(viewport);
        paint(&mut self.batch);

        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => bail!("gpu surface failed fatally"),
                    SurfaceErrorAction::Reconfigured => {
                        window.request_redraw();
                        Ok(())
                    }
                    SurfaceErrorAction::SkipFrame => Ok(()),
                };
            }
        };

        let format = self.gpu.surface_format();
        let [r, g, b, a] = if format.is_srgb() {
            backdrop.to_linear_f32()
        } else {
            backdrop.to_srgb_f32()
        };

        // Clear pass; dropped before the encoder is borrowed again.
        {
            let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("easel clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view:           &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes:         None,
                occlusion_query_set:      None,
                multiview_mask:           None,
            });
        }

        let rctx = RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            format,
            viewport,
            self.anti_alias,
        );

        // RenderTarget borrows frame.encoder; dropped before submit() takes frame.
        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            self.renderer.render(&rctx, &mut target, &self.batch);
        }

        window.pre_present_notify();
        self.gpu.submit(frame);
        Ok(())
    }
}

/// CPU presenter: rasterizes with tiny-skia and blits through softbuffer.
pub(crate) struct SoftwarePresenter<'w> {
    surface: softbuffer::Surface<&'w Window, &'w Window>,
    anti_alias: bool,
}

impl<'w> SoftwarePresenter<'w> {
    fn new(window: &'w Window, anti_alias: bool) -> Result<Self> {
        // softbuffer errors are not Send + Sync, so they are formatted into anyhow here.
        let context = softbuffer::Context::new(window)
            .map_err(|e| anyhow!("failed to create softbuffer context: {e}"))?;
        let surface = softbuffer::Surface::new(&context, window)
            .map_err(|e| anyhow!("failed to create softbuffer surface: {e}"))?;

        Ok(Self { surface, anti_alias })
    }

    fn present<F>(&mut self, window: &Window, backdrop: Color, paint: F) -> Result<()>
    where
        F: FnOnce(&mut dyn Surface),
    {
        let size = window.inner_size();
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            // Minimized or not yet mapped.
            return Ok(());
        };

        self.surface
            .resize(width, height)
            .map_err(|e| anyhow!("failed to resize softbuffer surface: {e}"))?;

        let mut raster = RasterSurface::new(size.width, size.height, window.scale_factor() as f32)?
            .with_anti_alias(self.anti_alias);
        raster.clear(backdrop);
        paint(&mut raster);

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow!("failed to acquire softbuffer buffer: {e}"))?;
        raster.copy_to_xrgb(&mut buffer[..]);

        window.pre_present_notify();
        buffer
            .present()
            .map_err(|e| anyhow!("failed to present softbuffer buffer: {e}"))?;
        Ok(())
    }
}
