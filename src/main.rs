//! Ricochet - bouncing ball physics demo

use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use ricochet::config::AppConfig;
use ricochet::input::{InputAction, InputMapper};
use ricochet::scene::demo_scene;
use ricochet::simulation::{FrameHooks, SimulationLoop};
use ricochet_math::Vec2;
use ricochet_render::{Canvas, RenderContext, ShapePipeline};

/// Main application state
struct App {
    config: AppConfig,
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    pipeline: Option<ShapePipeline>,
    simulation: SimulationLoop,
    canvas: Canvas,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let gravity = Vec2::new(config.physics.gravity[0], config.physics.gravity[1]);
        let simulation = SimulationLoop::new(demo_scene(gravity));

        Self {
            config,
            window: None,
            render_context: None,
            pipeline: None,
            simulation,
            canvas: Canvas::new(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attributes = Window::default_attributes()
                .with_title(&self.config.window.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                ));

            let window = Arc::new(
                event_loop
                    .create_window(window_attributes)
                    .expect("Failed to create window"),
            );

            let render_context = pollster::block_on(RenderContext::with_vsync(
                window.clone(),
                self.config.window.vsync,
            ));

            let pipeline = ShapePipeline::new(&render_context.device, render_context.config.format);

            self.window = Some(window);
            self.render_context = Some(render_context);
            self.pipeline = Some(pipeline);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(ctx) = &mut self.render_context {
                    ctx.resize(physical_size);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(InputAction::Exit) = InputMapper::map_keyboard(key, event.state) {
                        event_loop.exit();
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let pointer = InputMapper::map_mouse_button(button, state);
                self.simulation.on_pointer_event(pointer);
            }

            WindowEvent::RedrawRequested => {
                self.simulation.tick(self.config.physics.timestep);

                self.canvas.clear();
                self.simulation.render(&mut self.canvas);

                if let (Some(ctx), Some(pipeline)) =
                    (&mut self.render_context, &mut self.pipeline)
                {
                    let output = match ctx.surface.get_current_texture() {
                        Ok(output) => output,
                        Err(wgpu::SurfaceError::Lost) => {
                            ctx.resize(ctx.size);
                            if let Some(window) = &self.window {
                                window.request_redraw();
                            }
                            return;
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            event_loop.exit();
                            return;
                        }
                        Err(e) => {
                            log::warn!("Surface error: {:?}", e);
                            return;
                        }
                    };

                    let view = output
                        .texture
                        .create_view(&wgpu::TextureViewDescriptor::default());

                    let mut encoder =
                        ctx.device
                            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                                label: Some("Render Encoder"),
                            });

                    let (width, height) = ctx.size();
                    pipeline.set_viewport(&ctx.queue, width, height);

                    let bg = &self.config.rendering.background_color;
                    pipeline.draw(
                        &ctx.device,
                        &ctx.queue,
                        &mut encoder,
                        &view,
                        &self.canvas,
                        wgpu::Color {
                            r: bg[0] as f64,
                            g: bg[1] as f64,
                            b: bg[2] as f64,
                            a: bg[3] as f64,
                        },
                    );

                    ctx.queue.submit(std::iter::once(encoder.finish()));
                    output.present();
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() {
    // Load the config before the logger so it can supply the default
    // filter, but hold any load error until the logger can report it
    let (config, config_err) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // RUST_LOG still wins; the config only supplies the default filter
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&config.debug.log_level),
    )
    .init();
    if let Some(e) = config_err {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting Ricochet");

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}
