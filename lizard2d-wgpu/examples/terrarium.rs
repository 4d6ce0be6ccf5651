use lizard2d::{Bounds, Color, DrawList, LizardConfig, Pointer, Terrarium, Vec2};
use lizard2d_wgpu::LizardRenderer;
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

const FRAME: Duration = Duration::from_micros(16_667);

/// Space cycles through these.
fn presets() -> [LizardConfig; 3] {
    [
        LizardConfig::default(),
        LizardConfig {
            head_segments: 3,
            body_segments: 12,
            tail_segments: 16,
            feet_pairs: 3,
            scale: 0.8,
            chonk: 1.3,
            primary_color: Color::rgb(0xc8, 0x8b, 0x3a),
            secondary_color: Color::rgb(0x4a, 0x2c, 0x1d),
            ..LizardConfig::default()
        },
        LizardConfig {
            head_segments: 5,
            body_segments: 6,
            tail_segments: 8,
            feet_pairs: 1,
            scale: 1.4,
            chonk: 0.8,
            speed: 1.5,
            primary_color: Color::rgb(0x5b, 0x7f, 0xc4),
            secondary_color: Color::rgb(0xf2, 0xe0, 0x5c),
            ..LizardConfig::default()
        },
    ]
}

struct App {
    window: Option<Arc<Window>>,
    surface: Option<wgpu::Surface<'static>>,
    device: Option<wgpu::Device>,
    queue: Option<wgpu::Queue>,
    config: Option<wgpu::SurfaceConfiguration>,
    renderer: Option<LizardRenderer>,
    terrarium: Terrarium,
    pointer: Pointer,
    preset: usize,
    last_tick: Instant,
    draw_list: DrawList,
}

impl Default for App {
    fn default() -> Self {
        Self {
            window: None,
            surface: None,
            device: None,
            queue: None,
            config: None,
            renderer: None,
            terrarium: Terrarium::default(),
            pointer: Pointer::new(Vec2::ZERO),
            preset: 0,
            last_tick: Instant::now(),
            draw_list: DrawList::default(),
        }
    }
}

impl App {
    fn respawn(&mut self) {
        let config = presets()[self.preset % 3].clone();
        if let Err(err) = self.terrarium.spawn(config) {
            log::warn!("spawn failed: {err}");
        }
    }

    fn advance(&mut self) {
        let now = Instant::now();
        let mut ticks = 0;
        while now.duration_since(self.last_tick) >= FRAME && ticks < 4 {
            let target = self.pointer.target(self.last_tick + FRAME);
            self.terrarium.tick(&target);
            self.last_tick += FRAME;
            ticks += 1;
        }
        if ticks == 4 {
            self.last_tick = now;
        }

        self.draw_list.clear();
        for lizard in self.terrarium.lizards() {
            lizard2d::append_draw_list(&mut self.draw_list, lizard);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let window = Arc::new(
            event_loop
                .create_window(Window::default_attributes().with_title("lizard2d terrarium"))
                .unwrap(),
        );

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window.clone()).unwrap();

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            compatible_surface: Some(&surface),
            power_preference: wgpu::PowerPreference::HighPerformance,
            force_fallback_adapter: false,
        }))
        .unwrap();

        let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            label: Some("device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            experimental_features: Default::default(),
            memory_hints: wgpu::MemoryHints::Performance,
            trace: Default::default(),
        }))
        .unwrap();

        let size = window.inner_size().max(PhysicalSize::new(1, 1));
        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = LizardRenderer::new(&device, config.format);
        renderer.update_globals_screen(&queue, config.width as f32, config.height as f32);

        let bounds = Bounds::from_size(config.width as f32, config.height as f32);
        self.terrarium.set_bounds(Some(bounds));
        self.pointer = Pointer::new(bounds.center());
        self.respawn();
        self.last_tick = Instant::now();

        window.request_redraw();
        self.window = Some(window);
        self.surface = Some(surface);
        self.device = Some(device);
        self.queue = Some(queue);
        self.config = Some(config);
        self.renderer = Some(renderer);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(window) = self.window.clone() else {
            return;
        };
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer.move_to(
                    Vec2::new(position.x as f32, position.y as f32),
                    Instant::now(),
                );
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.logical_key == Key::Named(NamedKey::Space)
                {
                    self.preset += 1;
                    self.respawn();
                }
            }
            WindowEvent::Resized(size) => {
                let Some(surface) = self.surface.as_ref() else {
                    return;
                };
                let Some(device) = self.device.as_ref() else {
                    return;
                };
                let Some(queue) = self.queue.as_ref() else {
                    return;
                };
                let Some(config) = self.config.as_mut() else {
                    return;
                };
                config.width = size.width.max(1);
                config.height = size.height.max(1);
                surface.configure(device, config);
                if let Some(renderer) = self.renderer.as_ref() {
                    renderer.update_globals_screen(
                        queue,
                        config.width as f32,
                        config.height as f32,
                    );
                }
                self.terrarium.set_bounds(Some(Bounds::from_size(
                    config.width as f32,
                    config.height as f32,
                )));
                window.request_redraw();
            }
            WindowEvent::RedrawRequested => {
                self.advance();

                let Some(surface) = self.surface.as_ref() else {
                    return;
                };
                let Some(device) = self.device.as_ref() else {
                    return;
                };
                let Some(queue) = self.queue.as_ref() else {
                    return;
                };
                let Some(config) = self.config.as_ref() else {
                    return;
                };
                let Some(renderer) = self.renderer.as_mut() else {
                    return;
                };
                renderer.upload(device, queue, &self.draw_list);

                let frame = match surface.get_current_texture() {
                    Ok(frame) => frame,
                    Err(err) => {
                        log::warn!("surface lost ({err}); reconfiguring");
                        surface.configure(device, config);
                        window.request_redraw();
                        return;
                    }
                };
                let view = frame
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("encoder"),
                });
                {
                    let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                        label: Some("render pass"),
                        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            depth_slice: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(wgpu::Color {
                                    r: 0.93,
                                    g: 0.9,
                                    b: 0.82,
                                    a: 1.0,
                                }),
                                store: wgpu::StoreOp::Store,
                            },
                        })],
                        depth_stencil_attachment: None,
                        timestamp_writes: None,
                        occlusion_query_set: None,
                    });
                    renderer.render(&mut pass, &self.draw_list);
                }

                queue.submit(Some(encoder.finish()));
                frame.present();
                window.request_redraw();
            }
            _ => {}
        }
    }
}

fn main() {
    env_logger::init();
    let event_loop = EventLoop::new().unwrap();
    let mut app = App::default();
    event_loop.run_app(&mut app).unwrap();
}
