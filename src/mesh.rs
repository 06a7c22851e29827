use glium::{DrawParameters, Surface};

use crate::texture::MeshTexture;

/// Base color pushed with every draw, currently only tinting the specular
/// highlight.
pub const NEUTRAL_COLOR: [f32; 3] = [0.8, 0.8, 0.8];

#[derive(Debug, Clone, Copy)]
pub struct Position {
    pub position: [f32; 3],
}
implement_vertex!(Position, position);

#[derive(Debug, Clone, Copy)]
pub struct TexCoord {
    pub tex_coord: [f32; 2],
}
implement_vertex!(TexCoord, tex_coord);

#[derive(Debug, Clone, Copy)]
pub struct Normal {
    pub normal: [f32; 3],
}
implement_vertex!(Normal, normal);

/// Mesh geometry as three parallel flat arrays: three position floats, two
/// texture coordinate floats and three normal floats per vertex. Every three
/// consecutive vertices form one triangle.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub positions: Vec<f32>,
    pub tex_coords: Vec<f32>,
    pub normals: Vec<f32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.vertex_count() / 3
    }

    pub fn validate(&self) -> Result<(), MeshError> {
        if self.positions.len() % 3 != 0
            || self.tex_coords.len() % 2 != 0
            || self.normals.len() % 3 != 0
        {
            return Err(MeshError::UnevenAttributes {
                positions: self.positions.len(),
                tex_coords: self.tex_coords.len(),
                normals: self.normals.len(),
            });
        }

        let vertices = self.positions.len() / 3;
        if self.tex_coords.len() / 2 != vertices || self.normals.len() / 3 != vertices {
            return Err(MeshError::VertexCountMismatch {
                positions: vertices,
                tex_coords: self.tex_coords.len() / 2,
                normals: self.normals.len() / 3,
            });
        }

        Ok(())
    }

    fn position_vertices(&self) -> Vec<Position> {
        self.positions
            .chunks_exact(3)
            .map(|p| Position {
                position: [p[0], p[1], p[2]],
            })
            .collect()
    }

    fn tex_coord_vertices(&self) -> Vec<TexCoord> {
        self.tex_coords
            .chunks_exact(2)
            .map(|t| TexCoord {
                tex_coord: [t[0], t[1]],
            })
            .collect()
    }

    fn normal_vertices(&self) -> Vec<Normal> {
        self.normals
            .chunks_exact(3)
            .map(|n| Normal {
                normal: [n[0], n[1], n[2]],
            })
            .collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    #[error("attribute arrays do not divide into whole vertices ({positions}/{tex_coords}/{normals} components)")]
    UnevenAttributes {
        positions: usize,
        tex_coords: usize,
        normals: usize,
    },
    #[error("attribute arrays disagree on vertex count ({positions} positions, {tex_coords} texture coordinates, {normals} normals)")]
    VertexCountMismatch {
        positions: usize,
        tex_coords: usize,
        normals: usize,
    },
    #[error("failed to create vertex buffer: {0}")]
    Buffer(#[from] glium::vertex::BufferCreationError),
}

#[derive(Debug, thiserror::Error)]
pub enum RendererInitError {
    #[error("failed to compile mesh shaders: {0}")]
    Program(#[from] glium::ProgramCreationError),
    #[error("failed to allocate vertex buffers: {0}")]
    Buffer(#[from] glium::vertex::BufferCreationError),
    #[error("failed to create placeholder texture: {0}")]
    Texture(#[from] glium::texture::TextureCreationError),
}

/// Fragment branch selected by the texture/lighting toggles. Lighting never
/// applies without texturing; with texturing off the mesh falls back to a
/// flat color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    LitTexture,
    Texture,
    FlatColor,
}

impl RenderMode {
    pub fn from_toggles(show_texture: bool, lighting_enabled: bool) -> Self {
        if show_texture && lighting_enabled {
            RenderMode::LitTexture
        } else if show_texture {
            RenderMode::Texture
        } else {
            RenderMode::FlatColor
        }
    }
}

pub struct MeshRenderer {
    program: glium::Program,
    positions: glium::VertexBuffer<Position>,
    tex_coords: glium::VertexBuffer<TexCoord>,
    normals: glium::VertexBuffer<Normal>,
    vertex_count: usize,
    texture: MeshTexture,
    secondary_texture: MeshTexture,
    show_texture: bool,
    lighting_enabled: bool,
    ambient_intensity: f32,
    shininess: f32,
}

impl MeshRenderer {
    pub fn new(
        display: &glium::Display<glium::glutin::surface::WindowSurface>,
    ) -> Result<Self, RendererInitError> {
        let program = glium::Program::from_source(
            display,
            include_str!("shaders/mesh.vert"),
            include_str!("shaders/mesh.frag"),
            None,
        )?;
        log::debug!("Compiled mesh shaders");

        Ok(Self {
            program,
            positions: glium::VertexBuffer::empty(display, 0)?,
            tex_coords: glium::VertexBuffer::empty(display, 0)?,
            normals: glium::VertexBuffer::empty(display, 0)?,
            vertex_count: 0,
            texture: MeshTexture::placeholder(display)?,
            secondary_texture: MeshTexture::placeholder(display)?,
            show_texture: true,
            lighting_enabled: true,
            ambient_intensity: 0.5,
            shininess: 32.0,
        })
    }

    /// Replaces all three attribute buffers wholesale. The previous mesh
    /// stays bound if validation fails.
    pub fn set_mesh(
        &mut self,
        display: &glium::Display<glium::glutin::surface::WindowSurface>,
        mesh: &MeshData,
    ) -> Result<(), MeshError> {
        mesh.validate()?;

        self.positions = glium::VertexBuffer::new(display, &mesh.position_vertices())?;
        self.tex_coords = glium::VertexBuffer::new(display, &mesh.tex_coord_vertices())?;
        self.normals = glium::VertexBuffer::new(display, &mesh.normal_vertices())?;
        self.vertex_count = mesh.vertex_count();

        log::info!(
            "Uploaded mesh with {} vertices ({} triangles)",
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        Ok(())
    }

    /// Pushes the per-draw uniforms and issues one non-indexed
    /// triangle-list draw over the three attribute streams.
    pub fn draw(
        &self,
        frame: &mut glium::Frame,
        mvp: glam::Mat4,
        light_position: [f32; 3],
    ) -> Result<(), glium::DrawError> {
        frame.draw(
            (&self.positions, &self.tex_coords, &self.normals),
            &glium::index::NoIndices(glium::index::PrimitiveType::TrianglesList),
            &self.program,
            &uniform! {
                mvp: mvp.to_cols_array_2d(),
                mesh_color: NEUTRAL_COLOR,
                light_position: light_position,
                show_texture: self.show_texture,
                enable_lighting: self.lighting_enabled,
                ambient: self.ambient_intensity,
                shininess: self.shininess,
                tex: self.texture.sampled(),
                tex2: self.secondary_texture.sampled()
            },
            &DrawParameters {
                depth: glium::Depth {
                    test: glium::draw_parameters::DepthTest::IfLess,
                    write: true,
                    ..Default::default()
                },
                ..Default::default()
            },
        )
    }

    pub fn set_texture(&mut self, texture: MeshTexture) {
        log::info!("Bound primary texture with {:?} filtering", texture.filtering());
        self.texture = texture;
    }

    pub fn set_secondary_texture(&mut self, texture: MeshTexture) {
        log::info!("Bound secondary texture with {:?} filtering", texture.filtering());
        self.secondary_texture = texture;
    }

    pub fn set_show_texture(&mut self, show: bool) {
        self.show_texture = show;
    }

    pub fn set_lighting_enabled(&mut self, enabled: bool) {
        self.lighting_enabled = enabled;
    }

    pub fn set_ambient_intensity(&mut self, intensity: f32) {
        self.ambient_intensity = intensity;
    }

    /// The exponent is forwarded unvalidated; GLSL `pow` is
    /// implementation-defined for a non-positive exponent or zero base.
    pub fn set_shininess(&mut self, shininess: f32) {
        self.shininess = shininess;
    }

    pub fn triangle_count(&self) -> usize {
        self.vertex_count / 3
    }

    pub fn render_mode(&self) -> RenderMode {
        RenderMode::from_toggles(self.show_texture, self.lighting_enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_mesh(vertices: usize) -> MeshData {
        MeshData {
            positions: vec![0.0; vertices * 3],
            tex_coords: vec![0.0; vertices * 2],
            normals: vec![0.0; vertices * 3],
        }
    }

    #[test]
    fn three_vertices_make_one_triangle() {
        let mesh = flat_mesh(3);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn empty_mesh_is_valid_with_zero_triangles() {
        let mesh = MeshData::default();
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn triangle_count_scales_with_vertices() {
        assert_eq!(flat_mesh(36).triangle_count(), 12);
    }

    #[test]
    fn mismatched_vertex_counts_are_rejected() {
        let mut mesh = flat_mesh(3);
        mesh.tex_coords = vec![0.0; 4];
        assert!(matches!(
            mesh.validate(),
            Err(MeshError::VertexCountMismatch {
                positions: 3,
                tex_coords: 2,
                normals: 3,
            })
        ));
    }

    #[test]
    fn uneven_attribute_arrays_are_rejected() {
        let mut mesh = flat_mesh(3);
        mesh.positions.push(1.0);
        assert!(matches!(
            mesh.validate(),
            Err(MeshError::UnevenAttributes { positions: 10, .. })
        ));
    }

    #[test]
    fn render_mode_follows_the_branch_order() {
        assert_eq!(RenderMode::from_toggles(true, true), RenderMode::LitTexture);
        assert_eq!(RenderMode::from_toggles(true, false), RenderMode::Texture);
        assert_eq!(RenderMode::from_toggles(false, true), RenderMode::FlatColor);
        assert_eq!(RenderMode::from_toggles(false, false), RenderMode::FlatColor);
    }
}
