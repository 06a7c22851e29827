#[derive(Clone, Copy, Debug, Default)]
pub struct Transform {
    pub translation: glam::Vec3,
    pub rotation_x: f32,
    pub rotation_y: f32,
}

impl Transform {
    pub fn model_matrix(&self) -> glam::Mat4 {
        // X rotation first, then Y, then translation.
        let rotation = glam::Mat4::from_rotation_y(self.rotation_y)
            * glam::Mat4::from_rotation_x(self.rotation_x);
        glam::Mat4::from_translation(self.translation) * rotation
    }

    pub fn mvp_matrix(&self, projection: glam::Mat4) -> glam::Mat4 {
        projection * self.model_matrix()
    }
}
