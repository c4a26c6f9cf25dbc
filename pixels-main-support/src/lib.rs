#![deny(clippy::all)]
#![forbid(unsafe_code)]

use error_iter::ErrorIter as _;
use log::{error, info};
use pixels::wgpu::Color;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, KeyEvent, StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};
use world_grid::{GridCell, World};

const BACKGROUND_COLOR: Color = Color::BLACK;
const MIN_TIME_STEP: Duration = Duration::from_millis(1);
const MAX_TIME_STEP: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Error)]
pub enum AnimateError {
    #[error("event loop failed")]
    EventLoop(#[from] EventLoopError),

    #[error("failed to create window")]
    Window(#[from] OsError),

    #[error("failed to create pixel buffer")]
    Pixels(#[from] pixels::Error),

    #[error("failed to resize pixel buffer")]
    Texture(#[from] pixels::TextureError),
}

#[derive(Clone, Debug)]
pub struct AnimationSettings {
    pub title: String,
    pub time_step: Duration,
    pub cell_pixel_width: u32,
}

/// Shows `world` in a window, one texel per cell, calling `World::update`
/// once per time step until the world is finished. Returns when the window
/// is closed, or with the first error that closed it.
pub fn animate<W>(world: W, settings: AnimationSettings) -> Result<(), AnimateError>
where
    W: World,
{
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    let mut handler = AppEventHandler::new(world, settings);
    event_loop.run_app(&mut handler)?;
    handler.failure.into_result()
}

fn clamp_time_step(time_step: Duration) -> Duration {
    time_step.clamp(MIN_TIME_STEP, MAX_TIME_STEP)
}

/// Always strictly after `now`.
fn next_deadline(now: Instant, time_step: Duration) -> Instant {
    now.checked_add(clamp_time_step(time_step))
        .unwrap_or(now + MIN_TIME_STEP)
}

struct App<W: World> {
    world: W,
    window: Arc<Window>,
    pixels: Pixels<'static>,
    time_step: Duration,
    next_update: Instant,
}

impl<W: World> App<W> {
    fn new(
        event_loop: &ActiveEventLoop,
        world: W,
        settings: &AnimationSettings,
    ) -> Result<Self, AnimateError> {
        let window = Arc::new(Self::build_window(event_loop, &world, settings)?);
        let pixels = Self::build_pixels(&window, world.width(), world.height())?;
        let time_step = clamp_time_step(settings.time_step);
        Ok(Self {
            world,
            window,
            pixels,
            time_step,
            next_update: next_deadline(Instant::now(), time_step),
        })
    }

    fn build_window(
        event_loop: &ActiveEventLoop,
        world: &W,
        settings: &AnimationSettings,
    ) -> Result<Window, OsError> {
        let scale = settings.cell_pixel_width as f64;
        let size = LogicalSize::new(world.width() as f64 * scale, world.height() as f64 * scale);
        let min_size = LogicalSize::new(world.width() as f64, world.height() as f64);
        let window_attributes = Window::default_attributes()
            .with_title(settings.title.clone())
            .with_inner_size(size)
            .with_min_inner_size(min_size)
            .with_visible(false);
        event_loop.create_window(window_attributes)
    }

    fn build_pixels(
        window: &Arc<Window>,
        width: usize,
        height: usize,
    ) -> Result<Pixels<'static>, pixels::Error> {
        let window_size = window.inner_size();
        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());
        PixelsBuilder::new(width as u32, height as u32, surface_texture)
            .clear_color(BACKGROUND_COLOR)
            .build()
    }

    fn on_create(&mut self) {
        self.window.request_redraw();
        self.window.set_visible(true);
    }

    fn on_time_step(&mut self) {
        if !self.world.is_finished() {
            self.world.update();
            self.window.request_redraw();
        }
        self.next_update = next_deadline(Instant::now(), self.time_step);
    }

    fn on_resize(&mut self, size: PhysicalSize<u32>) -> Result<(), AnimateError> {
        self.pixels.resize_surface(size.width, size.height)?;
        self.window.request_redraw();
        Ok(())
    }

    fn on_redraw(&mut self) -> Result<(), AnimateError> {
        let screen = self.pixels.frame_mut();
        debug_assert_eq!(screen.len(), 4 * self.world.num_cells());

        for (cell, pixel) in self.world.cells_iter().zip(screen.chunks_exact_mut(4)) {
            pixel.copy_from_slice(&cell.color_rgba());
        }
        self.pixels.render()?;
        Ok(())
    }
}

/// The first error raised inside the event loop, handed back to the caller of
/// `animate` once the loop has exited.
#[derive(Debug, Default)]
struct Failure {
    error: Option<AnimateError>,
}

impl Failure {
    fn record(&mut self, method_name: &str, err: AnimateError) {
        error!("{method_name}() failed: {err}");
        for source in err.sources().skip(1) {
            error!("  Caused by: {source}");
        }
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    fn into_result(self) -> Result<(), AnimateError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

struct AppEventHandler<W>
where
    W: World,
{
    world: Option<W>,
    settings: AnimationSettings,
    app: Option<App<W>>,
    failure: Failure,
}

impl<W> AppEventHandler<W>
where
    W: World,
{
    fn new(world: W, settings: AnimationSettings) -> Self {
        Self {
            world: Some(world),
            settings,
            app: None,
            failure: Failure::default(),
        }
    }
}

impl<W> ApplicationHandler for AppEventHandler<W>
where
    W: World,
{
    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        if let StartCause::ResumeTimeReached { .. } = cause
            && let Some(app) = self.app.as_mut()
        {
            app.on_time_step();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let Some(world) = self.world.take() else {
            return;
        };
        match App::new(event_loop, world, &self.settings) {
            Ok(mut app) => {
                app.on_create();
                self.app = Some(app);
            }
            Err(err) => {
                self.failure.record("App::new", err);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(app) = self.app.as_mut() else {
            return;
        };
        match event {
            WindowEvent::CloseRequested => {
                info!("Window closed");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Released,
                        repeat: false,
                        ..
                    },
                ..
            } => match code {
                KeyCode::Escape | KeyCode::KeyQ | KeyCode::KeyX => {
                    event_loop.exit();
                }
                _ => (),
            },
            WindowEvent::Resized(size) => {
                if let Err(err) = app.on_resize(size) {
                    self.failure.record("pixels.resize_surface", err);
                    event_loop.exit();
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(err) = app.on_redraw() {
                    self.failure.record("pixels.render", err);
                    event_loop.exit();
                }
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(app) = self.app.as_ref() {
            event_loop.set_control_flow(ControlFlow::WaitUntil(app.next_update));
        }
    }
}
