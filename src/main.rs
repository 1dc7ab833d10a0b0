//! Orbit4D - orbit viewer for 3D and 4D polytopes
//!
//! Drag to rotate, scroll to zoom, R to reset.

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use orbit4d::config::AppConfig;
use orbit4d::input::{InputAction, InputMapper};
use orbit4d::systems::{FrameTimer, RenderError, RenderSystem, ViewerKind, WindowSystem};

/// Main application state
struct App {
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    viewer: ViewerKind,
    timer: FrameTimer,
}

impl App {
    fn new(config: AppConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let aspect = config.window.width as f32 / config.window.height.max(1) as f32;
        let viewer = ViewerKind::from_config(&config, aspect)?;
        log::info!(
            "Viewing {} shapes in {}D",
            config.scene.shapes.len(),
            viewer.rank()
        );

        Ok(Self {
            config,
            window: None,
            render: None,
            viewer,
            timer: FrameTimer::new(),
        })
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let dt = self.timer.tick();

        if let Err(e) = self.viewer.draw(dt) {
            log::error!("Failed to draw scene: {}", e);
            event_loop.exit();
            return;
        }

        if let Some(render) = &mut self.render {
            match render.render_frame(self.viewer.frame_uniforms(), self.viewer.commands()) {
                Ok(()) => {}
                Err(RenderError::SurfaceLost) => render.reconfigure(),
                Err(RenderError::OutOfMemory) => {
                    log::error!("GPU out of memory");
                    event_loop.exit();
                    return;
                }
                Err(e) => log::warn!("{}", e),
            }
        }

        if let Some(window) = &self.window {
            if self.config.debug.show_fps {
                window.update_title(self.viewer.rank(), self.timer.fps());
            }
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let render = match RenderSystem::new(window.window().clone(), &self.config.rendering, self.config.window.vsync) {
            Ok(render) => render,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        self.viewer.set_aspect(render.aspect_ratio());
        window.update_title(self.viewer.rank(), None);
        window.request_redraw();

        self.window = Some(window);
        self.render = Some(render);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(render) = &mut self.render {
                    render.resize(size.width, size.height);
                    self.viewer.set_aspect(render.aspect_ratio());
                }
            }

            WindowEvent::Focused(false) => {
                self.viewer.controller_mut().release_all();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(key) = event.physical_key else {
                    return;
                };

                match InputMapper::map_keyboard(key, event.state) {
                    Some(InputAction::Exit) => {
                        event_loop.exit();
                        return;
                    }
                    Some(InputAction::ResetCamera) => {
                        self.viewer.controller_mut().request_reset();
                    }
                    Some(InputAction::ToggleFullscreen) => {
                        if let Some(window) = &self.window {
                            window.toggle_fullscreen();
                        }
                    }
                    None => {}
                }

                self.viewer.controller_mut().process_keyboard(key, event.state);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.viewer.controller_mut().process_mouse_button(button, state);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.viewer.controller_mut().process_scroll(delta);
            }

            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }

            _ => {}
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.viewer.controller_mut().process_mouse_motion(delta.0, delta.1);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::info!("Starting Orbit4D");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("{}. Using defaults.", e);
        AppConfig::default()
    });

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config)?;
    event_loop.run_app(&mut app)?;
    Ok(())
}
