use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use winit::dpi::LogicalSize;

use easel_engine::core::{App as EngineApp, WindowCtx};
use easel_engine::coords::Viewport;
use easel_engine::device::GpuInit;
use easel_engine::paint::Color;
use easel_engine::render::Surface;
use easel_engine::scene::Canvas;
use easel_engine::window::{BackendPreference, Runtime, RuntimeConfig};

use crate::{Context, Error, WINDOW_HEIGHT, WINDOW_WIDTH};

/// A drawing script: evaluated once, against a fresh [`Context`].
pub type Script = Box<dyn FnOnce(&mut Context<'_>) -> anyhow::Result<()>>;

/// Window host for a single drawing script.
///
/// Builder over the engine's [`RuntimeConfig`]: configure, attach a script,
/// then [`run`](Sketch::run).
///
/// ```rust,ignore
/// Sketch::new("clock")
///     .backend(BackendPreference::Software)
///     .script(|ctx| {
///         ctx.background(ctx.rgb(230, 240, 200));
///         Ok(())
///     })
///     .run()?;
/// ```
pub struct Sketch {
    config: RuntimeConfig,
    script: Option<Script>,
}

impl Sketch {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            config: RuntimeConfig {
                title: title.into(),
                size: LogicalSize::new(WINDOW_WIDTH as f64, WINDOW_HEIGHT as f64),
                ..RuntimeConfig::default()
            },
            script: None,
        }
    }

    /// Set the fixed window size in logical pixels.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.config.size = LogicalSize::new(width as f64, height as f64);
        self
    }

    /// Choose which presenters may be tried. `EASEL_BACKEND` still wins at run time.
    pub fn backend(mut self, backend: BackendPreference) -> Self {
        self.config.backend = backend;
        self
    }

    pub fn anti_alias(mut self, anti_alias: bool) -> Self {
        self.config.anti_alias = anti_alias;
        self
    }

    /// Color shown wherever the script has not painted.
    pub fn backdrop(mut self, color: Color) -> Self {
        self.config.backdrop = color;
        self
    }

    pub fn gpu_init(mut self, init: GpuInit) -> Self {
        self.config.gpu_init = init;
        self
    }

    /// Attach the script. A later call replaces an earlier one.
    pub fn script<F>(mut self, script: F) -> Self
    where
        F: FnOnce(&mut Context<'_>) -> anyhow::Result<()> + 'static,
    {
        self.script = Some(Box::new(script));
        self
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Evaluates the script without opening a window and returns the recorded canvas.
    pub fn record(self) -> Result<Canvas, Error> {
        let script = self.script.ok_or(Error::MissingScript)?;
        let mut canvas = Canvas::new(viewport(&self.config));
        evaluate(script, &mut canvas)?;
        Ok(canvas)
    }

    /// Opens the window, runs the script on the event-loop thread and blocks
    /// until the window is closed.
    ///
    /// Fails before any window exists if no script was attached or
    /// `EASEL_BACKEND` is invalid. Script errors and panics close the window
    /// and are returned here.
    pub fn run(self) -> Result<(), Error> {
        let Sketch { mut config, script } = self;
        let script = script.ok_or(Error::MissingScript)?;

        config.backend = config.backend.or_env().map_err(Error::Runtime)?;

        let mut app = SketchApp::new(Canvas::new(viewport(&config)), script);
        let result = Runtime::run(config, &mut app);

        if let Some(err) = app.failure.take() {
            return Err(err);
        }
        result.map_err(Error::Runtime)
    }
}

/// Shows `script` in a fixed-size window titled `title`.
pub fn render<F>(title: impl Into<String>, script: F) -> Result<(), Error>
where
    F: FnOnce(&mut Context<'_>) -> anyhow::Result<()> + 'static,
{
    Sketch::new(title).script(script).run()
}

fn viewport(config: &RuntimeConfig) -> Viewport {
    Viewport::new(config.size.width as f32, config.size.height as f32)
}

/// Runs `script` against `canvas`, turning errors and panics into [`Error`].
fn evaluate(script: Script, canvas: &mut Canvas) -> Result<(), Error> {
    let mut ctx = Context::new(canvas);
    match panic::catch_unwind(AssertUnwindSafe(|| script(&mut ctx))) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(Error::Script(e)),
        Err(payload) => Err(Error::ScriptPanicked(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Engine-side app: owns the canvas and runs the script when the window appears.
struct SketchApp {
    canvas: Canvas,
    script: Option<Script>,
    failure: Option<Error>,
}

impl SketchApp {
    fn new(canvas: Canvas, script: Script) -> Self {
        Self {
            canvas,
            script: Some(script),
            failure: None,
        }
    }
}

impl EngineApp for SketchApp {
    fn on_start(&mut self, window: &WindowCtx<'_>) -> anyhow::Result<()> {
        let Some(script) = self.script.take() else {
            return Ok(());
        };

        log::debug!(
            "running sketch script ({} backend, scale {})",
            window.backend,
            window.scale_factor()
        );

        match evaluate(script, &mut self.canvas) {
            Ok(()) => {
                log::debug!("script recorded {} ops", self.canvas.len());
                Ok(())
            }
            Err(err) => {
                let summary = anyhow::anyhow!("{err}");
                self.failure = Some(err);
                Err(summary)
            }
        }
    }

    fn on_paint(&mut self, surface: &mut dyn Surface) {
        self.canvas.repaint(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_engine::scene::Op;

    #[test]
    fn run_without_script_fails_before_window() {
        let err = Sketch::new("empty").run().unwrap_err();
        assert!(matches!(err, Error::MissingScript));
    }

    #[test]
    fn record_without_script_fails() {
        assert!(matches!(Sketch::new("empty").record(), Err(Error::MissingScript)));
    }

    #[test]
    fn defaults_to_fixed_window() {
        let sketch = Sketch::new("clock");
        let config = sketch.config();
        assert_eq!(config.title, "clock");
        assert_eq!(config.size, LogicalSize::new(300.0, 300.0));
        assert_eq!(config.backend, BackendPreference::Auto);
        assert!(config.anti_alias);
    }

    #[test]
    fn builder_overrides_config() {
        let sketch = Sketch::new("x")
            .size(120, 80)
            .backend(BackendPreference::Software)
            .anti_alias(false)
            .backdrop(Color::WHITE);
        let config = sketch.config();
        assert_eq!(config.size, LogicalSize::new(120.0, 80.0));
        assert_eq!(config.backend, BackendPreference::Software);
        assert!(!config.anti_alias);
        assert_eq!(config.backdrop, Color::WHITE);
    }

    #[test]
    fn record_collects_ops() {
        let canvas = Sketch::new("x")
            .script(|ctx| {
                ctx.background(ctx.white());
                ctx.nofill();
                Ok(())
            })
            .record()
            .unwrap();
        assert_eq!(canvas.ops(), &[Op::Clear(Color::WHITE), Op::ClearFill]);
        assert_eq!(canvas.size(), Viewport::new(300.0, 300.0));
    }

    #[test]
    fn script_error_is_reported() {
        let err = Sketch::new("x")
            .script(|_| anyhow::bail!("bad radius"))
            .record()
            .unwrap_err();
        assert!(matches!(&err, Error::Script(e) if e.to_string() == "bad radius"));
    }

    #[test]
    fn script_panic_is_captured() {
        let err = Sketch::new("x")
            .script(|_| panic!("kaboom {}", 7))
            .record()
            .unwrap_err();
        assert!(matches!(&err, Error::ScriptPanicked(msg) if msg == "kaboom 7"));
    }

    #[test]
    fn evaluate_captures_str_panic() {
        let mut canvas = Canvas::new(Viewport::new(10.0, 10.0));
        let result = evaluate(Box::new(|_| panic!("static message")), &mut canvas);
        assert!(matches!(result, Err(Error::ScriptPanicked(msg)) if msg == "static message"));
    }

    #[test]
    fn later_script_replaces_earlier() {
        let canvas = Sketch::new("x")
            .script(|ctx| {
                ctx.nostroke();
                Ok(())
            })
            .script(|ctx| {
                ctx.nofill();
                Ok(())
            })
            .record()
            .unwrap();
        assert_eq!(canvas.ops(), &[Op::ClearFill]);
    }
}
