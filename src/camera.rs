use winit::event::MouseScrollDelta;

use crate::transform::Transform;

pub struct Projection {
    aspect: f32,
    fov: f32,
    near: f32,
    far: f32,
}

impl Projection {
    pub fn new(aspect: f32, fov: f32, near: f32, far: f32) -> Self {
        Self {
            aspect,
            fov,
            near,
            far,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.aspect = width / height;
    }

    pub fn matrix(&self) -> glam::Mat4 {
        glam::Mat4::perspective_rh(self.fov.to_radians(), self.aspect, self.near, self.far)
    }
}

const ZOOM_STEP: f32 = 0.5;
const MIN_DISTANCE: f32 = 1.0;

/// Spins the mesh in place and dollies the view distance: dragging rotates,
/// the wheel zooms.
pub struct OrbitController {
    rotation_x: f32,
    rotation_y: f32,
    distance: f32,
    sensitivity: f32,
}

impl OrbitController {
    pub fn new(distance: f32, sensitivity: f32) -> Self {
        Self {
            rotation_x: 0.0,
            rotation_y: 0.0,
            distance,
            sensitivity,
        }
    }

    pub fn process_mouse(&mut self, mouse_dx: f32, mouse_dy: f32) {
        self.rotation_y += mouse_dx * self.sensitivity;
        self.rotation_x += mouse_dy * self.sensitivity;
    }

    pub fn process_scroll(&mut self, delta: MouseScrollDelta) {
        let lines = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(position) => position.y as f32 / 20.0,
        };
        self.distance = (self.distance - lines * ZOOM_STEP).max(MIN_DISTANCE);
    }

    pub fn transform(&self) -> Transform {
        Transform {
            translation: glam::vec3(0.0, 0.0, -self.distance),
            rotation_x: self.rotation_x,
            rotation_y: self.rotation_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dragging_rotates_the_mesh() {
        let mut orbit = OrbitController::new(3.0, 0.01);
        orbit.process_mouse(10.0, -4.0);
        let transform = orbit.transform();
        assert!((transform.rotation_y - 0.1).abs() < 1e-6);
        assert!((transform.rotation_x + 0.04).abs() < 1e-6);
    }

    #[test]
    fn scrolling_zooms_and_stops_at_the_minimum() {
        let mut orbit = OrbitController::new(3.0, 0.01);
        orbit.process_scroll(MouseScrollDelta::LineDelta(0.0, 1.0));
        assert_eq!(orbit.transform().translation.z, -2.5);

        for _ in 0..20 {
            orbit.process_scroll(MouseScrollDelta::LineDelta(0.0, 1.0));
        }
        assert_eq!(orbit.transform().translation.z, -MIN_DISTANCE);
    }

    #[test]
    fn resize_changes_the_aspect_ratio() {
        let mut projection = Projection::new(16.0 / 9.0, 45.0, 0.1, 100.0);
        let wide = projection.matrix();
        projection.resize(800.0, 800.0);
        assert!(projection
            .matrix()
            .x_axis
            .abs_diff_eq(wide.x_axis * (16.0 / 9.0), 1e-5));
    }
}
