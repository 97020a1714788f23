use std::rc::Rc;

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowId};

use paintgrid::commands::{Cmd, Damage};
use paintgrid::config::GameConfig;
use paintgrid::input::{translate, Buttons, InputEvent};
use paintgrid::messages::Msg;
use paintgrid::model::{GameModel, Selection};
use paintgrid::render::{GlyphSet, Renderer};
use paintgrid::update::update;

use super::keys::key_to_msg;
use super::surface::WindowSurface;

const INITIAL_WIDTH: u32 = 800;
const INITIAL_HEIGHT: u32 = 600;

pub struct App {
    model: GameModel,
    renderer: Renderer,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    surface: Option<WindowSurface>,
    buttons: Buttons,
    cursor_position: Option<(f64, f64)>,
    /// Damage accumulated since the last presented frame
    pending: Damage,
    title: String,
}

impl App {
    pub fn new(config: &GameConfig) -> Result<Self> {
        let model = GameModel::from_config(config, (INITIAL_WIDTH, INITIAL_HEIGHT))?;

        let glyphs = match &config.font_path {
            Some(path) => GlyphSet::load(path).unwrap_or_else(|e| {
                tracing::warn!("{:#}, using built-in digits", e);
                GlyphSet::builtin()
            }),
            None => GlyphSet::builtin(),
        };
        let renderer = Renderer::new(
            INITIAL_WIDTH,
            INITIAL_HEIGHT,
            &model.palette,
            config.render_style(),
            glyphs,
        );

        Ok(Self {
            model,
            renderer,
            window: None,
            context: None,
            surface: None,
            buttons: Buttons::NONE,
            cursor_position: None,
            pending: Damage::Full,
            title: String::new(),
        })
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title("paintgrid")
            .with_inner_size(LogicalSize::new(INITIAL_WIDTH, INITIAL_HEIGHT));

        let window = Rc::new(event_loop.create_window(window_attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create context: {}", e))?;
        let surface = WindowSurface::new(&context, Rc::clone(&window))?;

        let size = window.inner_size();
        self.dispatch(Msg::resize(size.width, size.height));

        window.request_redraw();
        self.window = Some(window);
        self.refresh_title();
        self.context = Some(context);
        self.surface = Some(surface);
        Ok(())
    }

    fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(cmd);
        }
        if matches!(msg, Msg::Controls(_) | Msg::Toolbar(_) | Msg::Game(_)) {
            self.refresh_title();
        }
    }

    /// Show the size controls and selection in the window title
    fn refresh_title(&mut self) {
        let title = status_title(&self.model);
        if title != self.title {
            if let Some(window) = &self.window {
                window.set_title(&title);
            }
            self.title = title;
        }
    }

    fn dispatch_input(&mut self, event: InputEvent) {
        if let Some(msg) = translate(event) {
            self.dispatch(msg);
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        if cmd.changes_palette() {
            self.renderer.set_palette(&self.model.palette);
        }
        self.pending.merge(cmd.damage());

        if self.pending.needs_redraw() {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn render(&mut self) -> Result<()> {
        let Some(surface) = &mut self.surface else {
            return Ok(());
        };

        // The platform may ask for a redraw with nothing pending (expose)
        let damage = match std::mem::take(&mut self.pending) {
            Damage::None => Damage::Full,
            damage => damage,
        };
        self.renderer
            .render(&self.model.grid, &self.model.view, &damage, surface)
    }

    fn handle_event(&mut self, event: WindowEvent) {
        match event {
            WindowEvent::Resized(size) => {
                if let Some(surface) = &mut self.surface {
                    if let Err(e) = surface.resize(size.width, size.height) {
                        tracing::error!("{:#}", e);
                    }
                }
                self.dispatch_input(InputEvent::Resize {
                    width: size.width,
                    height: size.height,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = (position.x, position.y);
                let (dx, dy) = match self.cursor_position {
                    Some((last_x, last_y)) => (x - last_x, y - last_y),
                    None => (0.0, 0.0),
                };
                self.cursor_position = Some((x, y));
                self.dispatch_input(InputEvent::PointerMove {
                    dx,
                    dy,
                    buttons: self.buttons,
                    x,
                    y,
                });
            }

            WindowEvent::CursorLeft { .. } => {
                self.cursor_position = None;
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let pressed = state == ElementState::Pressed;
                let mask = match button {
                    MouseButton::Left => Buttons::PRIMARY,
                    MouseButton::Right => Buttons::SECONDARY,
                    _ => return,
                };
                self.buttons = self.buttons.with(mask, pressed);

                if pressed {
                    if let Some((x, y)) = self.cursor_position {
                        self.dispatch_input(InputEvent::PointerDown {
                            buttons: self.buttons,
                            x,
                            y,
                        });
                    }
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                // winit reports scrolling up as positive; zoom-in is negative
                let delta_y = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -(y as f64),
                    MouseScrollDelta::PixelDelta(pos) => -pos.y,
                };
                // Horizontal-only scrolling carries no zoom
                if delta_y != 0.0 {
                    self.dispatch_input(InputEvent::Wheel { delta_y });
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    if let Some(msg) = key_to_msg(&event.logical_key, &self.model.controls) {
                        self.dispatch(msg);
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render error: {:#}", e);
                }
            }

            _ => {}
        }
    }
}

fn status_title(model: &GameModel) -> String {
    let controls = &model.controls;
    let selection = match model.toolbar.selected() {
        Selection::Any => "any".to_string(),
        Selection::Index(index) => (index + 1).to_string(),
    };
    let mut title = format!(
        "paintgrid - next {}x{}, {} colors - painting {}",
        controls.rows(),
        controls.columns(),
        controls.palette_size(),
        selection
    );
    if let Some(entry) = controls.editing() {
        title.push_str(&format!(" - {}: {}_", entry.control.label(), entry.text));
    }
    if model.grid.all_colored() {
        title.push_str(" - solved");
    }
    title
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);

        if self.window.is_none() {
            if let Err(e) = self.init_window(event_loop) {
                tracing::error!("Failed to open window: {:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = &self.window else { return };
        if window.id() != window_id {
            return;
        }

        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        self.handle_event(event);
    }
}
