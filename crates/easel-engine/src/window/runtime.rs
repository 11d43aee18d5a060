use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, WindowCtx};
use crate::device::GpuInit;
use crate::paint::Color;

use super::present::Presenter;
use super::BackendPreference;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Fixed inner size; the window is not user-resizable.
    pub size: LogicalSize<f64>,
    pub backend: BackendPreference,
    pub anti_alias: bool,
    /// Painted under every repaint, before the app draws.
    pub backdrop: Color,
    pub gpu_init: GpuInit,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "easel".to_string(),
            size: LogicalSize::new(300.0, 300.0),
            backend: BackendPreference::Auto,
            anti_alias: true,
            backdrop: Color::BACKDROP,
            gpu_init: GpuInit::default(),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens one window and blocks until it is closed.
    ///
    /// Must be called from the main thread on platforms where winit requires it.
    /// Fails if no backend could present to the window or if
    /// [`App::on_start`](crate::core::App::on_start) fails.
    pub fn run<A>(config: RuntimeConfig, app: &mut A) -> Result<()>
    where
        A: CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[not_covariant]
    presenter: Presenter<'this>,
}

struct AppState<'a, A>
where
    A: CoreApp,
{
    config: RuntimeConfig,
    app: &'a mut A,

    window: Option<WindowEntry>,
    started: bool,
    failure: Option<anyhow::Error>,
}

impl<'a, A> AppState<'a, A>
where
    A: CoreApp,
{
    fn new(config: RuntimeConfig, app: &'a mut A) -> Self {
        Self {
            config,
            app,
            window: None,
            started: false,
            failure: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.window = None;
        if self.failure.is_none() {
            self.failure = Some(err);
        }
        event_loop.exit();
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.size)
            .with_resizable(false);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let config = &self.config;
        WindowEntryTryBuilder {
            window,
            presenter_builder: |w| Presenter::select(w, config),
        }
        .try_build()
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let entry = self.create_window_entry(event_loop)?;

        let backend = entry.with_presenter(|p| p.backend());
        let app = &mut *self.app;
        entry.with_window(|window| {
            let ctx = WindowCtx {
                id: window.id(),
                window,
                backend,
            };
            app.on_start(&ctx)
        })?;

        entry.with_window(|w| w.request_redraw());
        self.window = Some(entry);
        Ok(())
    }

    fn redraw(&mut self) -> Result<()> {
        let backdrop = self.config.backdrop;
        let (app, window) = (&mut *self.app, &mut self.window);

        let Some(entry) = window.as_mut() else {
            return Ok(());
        };

        entry.with_mut(|fields| {
            let window: &Window = fields.window;
            fields
                .presenter
                .present(window, backdrop, |surface| app.on_paint(surface))
        })
    }
}

impl<A> ApplicationHandler for AppState<'_, A>
where
    A: CoreApp,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.started {
            return;
        }
        self.started = true;

        if let Err(e) = self.start(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Repaints are driven by the platform only.
        event_loop.set_control_flow(ControlFlow::Wait);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(entry) = self.window.as_mut() else {
            return;
        };
        if entry.with_window(|w| w.id()) != window_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::debug!("close requested");
                self.window = None;
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                entry.with_presenter_mut(|p| p.resize(new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.with_window(|w| w.inner_size());
                entry.with_presenter_mut(|p| p.resize(new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.redraw() {
                    self.fail(event_loop, e.context("failed to present window"));
                }
            }

            _ => {}
        }
    }
}
