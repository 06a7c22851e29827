use std::rc::Rc;

use winit::{event::WindowEvent, event_loop::EventLoop};

use crate::{app::Window, mesh::RenderMode};

pub struct RenderSettings {
    pub show_texture: bool,
    pub lighting_enabled: bool,
    pub ambient_intensity: f32,
    pub shininess: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            show_texture: true,
            lighting_enabled: true,
            ambient_intensity: 0.5,
            shininess: 32.0,
        }
    }
}

/// Read-only state echoed at the bottom of the panel.
pub struct ViewerStatus {
    pub render_mode: RenderMode,
    pub triangle_count: usize,
    pub light_offset: glam::Vec2,
}

pub struct ViewerUi {
    window: Rc<Window>,
    egui: egui_glium::EguiGlium,

    pub settings: RenderSettings,
}

impl ViewerUi {
    pub fn new(settings: RenderSettings, window: Rc<Window>, event_loop: &EventLoop<()>) -> Self {
        Self {
            egui: egui_glium::EguiGlium::new(
                egui::ViewportId::ROOT,
                &window.display,
                &window.winit,
                event_loop,
            ),
            window,

            settings,
        }
    }

    /// Returns true when the panel swallowed the event.
    pub fn process_events(&mut self, event: &WindowEvent) -> bool {
        self.egui.on_event(&self.window.winit, event).consumed
    }

    pub fn render(&mut self, frame: &mut glium::Frame, status: &ViewerStatus) {
        self.egui.run(&self.window.winit, |ctx| {
            egui::Window::new("Mesh Viewer").show(ctx, |ui| {
                ui.checkbox(&mut self.settings.show_texture, "Show Texture");
                ui.checkbox(&mut self.settings.lighting_enabled, "Enable Lighting");

                ui.add(
                    egui::Slider::new(&mut self.settings.ambient_intensity, 0.0..=1.0)
                        .text("Ambient Light"),
                );
                ui.add(
                    egui::Slider::new(&mut self.settings.shininess, 1.0..=128.0).text("Shininess"),
                );

                ui.separator();

                ui.label(format!("Mode: {:?}", status.render_mode));
                ui.label(format!("Triangles: {}", status.triangle_count));
                ui.label(format!(
                    "Light offset: ({:.0}, {:.0})",
                    status.light_offset.x, status.light_offset.y
                ));
                ui.label("Arrow keys move the light, drag rotates, scroll zooms.");
            });
        });

        self.egui.paint(&self.window.display, frame);
    }
}
