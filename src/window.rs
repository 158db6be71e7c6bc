//! Window and frame loop.

use std::sync::Arc;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::config::DemoConfig;
use crate::error::DemoError;
use crate::gpu::{FrameScene, GpuState};
use crate::hud;
use crate::input::Input;
use crate::render::{collect_instances, HudStatus};
use crate::simulation::Simulation;
use crate::time::Time;

/// Open the window and run the demo until it is closed.
pub fn run(config: DemoConfig) -> Result<(), DemoError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    match app.fatal.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

struct App {
    config: DemoConfig,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    simulation: Simulation,
    input: Input,
    time: Time,
    instructions: Vec<String>,
    /// Error that ended the loop early, reported by [`run`].
    fatal: Option<DemoError>,
}

impl App {
    fn new(config: DemoConfig) -> Self {
        let simulation = Simulation::from_config(&config);
        let time = Time::new().with_target_fps(config.target_fps);
        let instructions = HudStatus::instructions(&config.controls);

        Self {
            config,
            window: None,
            gpu_state: None,
            simulation,
            input: Input::new(),
            time,
            instructions,
            fatal: None,
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), DemoError> {
        let window_attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(self.config.width, self.config.height))
            .with_resizable(false);

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        self.input.set_scale_factor(window.scale_factor());

        let gpu_state = pollster::block_on(GpuState::new(
            window.clone(),
            self.simulation.pool().capacity(),
            self.config.background,
        ))?;

        log::info!(
            "opened {}x{} window, target {} fps",
            self.config.width,
            self.config.height,
            self.config.target_fps
        );

        self.window = Some(window);
        self.gpu_state = Some(gpu_state);
        Ok(())
    }

    /// Simulate and draw one frame.
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(gpu_state)) = (&self.window, &mut self.gpu_state) else {
            return;
        };

        self.time.update();
        self.simulation.apply_input(&self.input, &self.config.controls);
        self.simulation.frame();

        let circles = collect_instances(self.simulation.pool());
        let scene = FrameScene {
            circles: &circles,
            logical_size: [self.config.width as f32, self.config.height as f32],
        };
        let status = HudStatus::capture(&self.simulation, self.time.fps());
        let show_hud = self.config.show_hud;
        let instructions = &self.instructions;

        let result = gpu_state.render(window, &scene, |ctx| {
            if show_hud {
                hud::draw(ctx, &status, instructions);
            }
        });

        match result {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("surface lost, reconfiguring");
                gpu_state.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }

        self.input.begin_frame();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(err) = self.create_window(event_loop) {
                log::error!("{err}");
                self.fatal = Some(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let (Some(window), Some(gpu_state)) = (&self.window, &mut self.gpu_state) {
            // The overlay never captures input; it only needs the events for layout
            gpu_state.on_window_event(window, &event);
        }
        self.input.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }
            WindowEvent::KeyboardInput { .. } => {
                if self.input.key_pressed(self.config.controls.quit) {
                    log::info!("quit key pressed");
                    event_loop.exit();
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else {
            return;
        };
        if self.time.frame_due(Instant::now()) {
            window.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.time.next_frame_at()));
    }
}
