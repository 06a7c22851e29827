#[macro_use]
extern crate glium;
use std::rc::Rc;

use anyhow::Result;
use app::{App, AppBehaviour, Window};
use camera::{OrbitController, Projection};
use glium::Surface;
use input::InputState;
use light::PointLight;
use mesh::MeshRenderer;
use texture::MeshTexture;
use ui::{RenderSettings, ViewerStatus, ViewerUi};
use winit::{
    event::{DeviceEvent, ElementState, Event, KeyEvent, MouseButton, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

mod app;
mod camera;
mod cube;
mod input;
mod light;
mod mesh;
mod texture;
mod transform;
mod ui;

#[bon::builder]
struct ViewerOptions {
    title: String,
    width: u32,
    height: u32,
    texture_size: u32,
    detail_size: u32,
    noise_seed: u32,
}

struct ViewerApp {
    input: InputState,
    orbit: OrbitController,
    is_dragging: bool,

    projection: Projection,
    light: PointLight,
    renderer: MeshRenderer,

    ui: ViewerUi,
}

impl AppBehaviour for ViewerApp {
    fn process_events(&mut self, event: Event<()>) -> bool {
        match event {
            Event::WindowEvent { event, .. } => {
                if self.ui.process_events(&event) {
                    return true;
                }

                match event {
                    WindowEvent::KeyboardInput {
                        event:
                            KeyEvent {
                                state: ElementState::Pressed,
                                physical_key: PhysicalKey::Code(KeyCode::Escape),
                                ..
                            },
                        ..
                    } => false,
                    WindowEvent::Resized(window_size) => {
                        self.projection
                            .resize(window_size.width as f32, window_size.height as f32);
                        true
                    }
                    WindowEvent::KeyboardInput {
                        event:
                            KeyEvent {
                                physical_key: PhysicalKey::Code(key),
                                state,
                                ..
                            },
                        ..
                    } => {
                        self.input.process_key(key, state);
                        true
                    }
                    WindowEvent::MouseInput {
                        button: MouseButton::Left,
                        state,
                        ..
                    } => {
                        self.is_dragging = state == ElementState::Pressed;
                        true
                    }
                    WindowEvent::MouseWheel { delta, .. } => {
                        self.orbit.process_scroll(delta);
                        true
                    }
                    WindowEvent::Focused(false) => {
                        self.input.clear();
                        true
                    }
                    _ => true,
                }
            }
            Event::DeviceEvent {
                event: DeviceEvent::MouseMotion { delta },
                ..
            } => {
                if self.is_dragging {
                    self.orbit.process_mouse(delta.0 as f32, delta.1 as f32);
                }

                true
            }
            _ => true,
        }
    }

    fn update(&mut self, _delta_time: std::time::Duration) {
        self.light.advance(&self.input);
    }

    fn render(&mut self, frame: &mut glium::Frame) {
        frame.clear_color_and_depth((0.1, 0.1, 0.12, 1.0), 1.0);

        self.renderer.set_show_texture(self.ui.settings.show_texture);
        self.renderer
            .set_lighting_enabled(self.ui.settings.lighting_enabled);
        self.renderer
            .set_ambient_intensity(self.ui.settings.ambient_intensity);
        self.renderer.set_shininess(self.ui.settings.shininess);

        let mvp = self.orbit.transform().mvp_matrix(self.projection.matrix());
        self.renderer
            .draw(frame, mvp, self.light.shader_position())
            .expect("to draw mesh");

        let status = ViewerStatus {
            render_mode: self.renderer.render_mode(),
            triangle_count: self.renderer.triangle_count(),
            light_offset: self.light.offset,
        };
        self.ui.render(frame, &status);
    }
}

impl ViewerApp {
    fn new(
        options: ViewerOptions,
        window: Rc<Window>,
        event_loop: &winit::event_loop::EventLoop<()>,
    ) -> Result<Self> {
        let mut renderer = MeshRenderer::new(&window.display)?;
        renderer.set_mesh(&window.display, &cube::unit_cube())?;

        let checkerboard = texture::checkerboard(options.texture_size, 8);
        renderer.set_texture(MeshTexture::from_image(&window.display, &checkerboard)?);

        let noise = texture::perlin(options.detail_size, options.noise_seed, 4.0);
        renderer.set_secondary_texture(MeshTexture::from_image(&window.display, &noise)?);

        let projection = {
            let window_size = window.winit.inner_size();
            Projection::new(
                window_size.width as f32 / window_size.height as f32,
                45.0,
                0.1,
                100.0,
            )
        };

        let ui = ViewerUi::new(RenderSettings::default(), window, event_loop);

        Ok(Self {
            input: InputState::default(),
            orbit: OrbitController::new(3.0, 0.01),
            is_dragging: false,

            projection,
            light: PointLight::default(),
            renderer,

            ui,
        })
    }
}

fn main() -> Result<()> {
    let options = ViewerOptions::builder()
        .title("Mesh Viewer".to_string())
        .width(1280)
        .height(720)
        .texture_size(256)
        .detail_size(300)
        .noise_seed(1337)
        .build();

    let app = App::new(&options.title, options.width, options.height)?;
    let viewer_app = ViewerApp::new(options, app.window.clone(), &app.event_loop)?;

    app.run(viewer_app)
}
