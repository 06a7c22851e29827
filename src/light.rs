use winit::keyboard::KeyCode;

use crate::input::InputState;

const STEP: f32 = 1.0;

/// Point light whose offset is steered by the arrow keys.
#[derive(Clone, Copy, Debug)]
pub struct PointLight {
    pub offset: glam::Vec2,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            offset: glam::vec2(1.0, 1.0),
        }
    }
}

impl PointLight {
    /// Applies one fixed step per held arrow key. Keys held together stack
    /// within a single call and the offset is never clamped.
    pub fn advance(&mut self, input: &InputState) {
        if input.is_down(KeyCode::ArrowUp) {
            self.offset.y -= STEP;
        }
        if input.is_down(KeyCode::ArrowDown) {
            self.offset.y += STEP;
        }
        if input.is_down(KeyCode::ArrowRight) {
            self.offset.x -= STEP;
        }
        if input.is_down(KeyCode::ArrowLeft) {
            self.offset.x += STEP;
        }
    }

    /// Position uploaded to the fragment stage: both axes negated, z fixed
    /// at zero.
    pub fn shader_position(&self) -> [f32; 3] {
        [-self.offset.x, -self.offset.y, 0.0]
    }
}
