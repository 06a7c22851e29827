use crate::mesh::MeshData;

const HALF: f32 = 0.5;

/// Unit cube centered at the origin as a flat triangle list: six faces, two
/// triangles each, per-face normals, full [0, 1] texture coordinates on
/// every face.
pub fn unit_cube() -> MeshData {
    let mut mesh = MeshData::default();

    // Corners are listed counter-clockwise seen from outside the cube.
    add_face(
        &mut mesh,
        [0.0, 0.0, 1.0],
        [
            [-HALF, -HALF, HALF],
            [HALF, -HALF, HALF],
            [HALF, HALF, HALF],
            [-HALF, HALF, HALF],
        ],
    );
    add_face(
        &mut mesh,
        [0.0, 0.0, -1.0],
        [
            [HALF, -HALF, -HALF],
            [-HALF, -HALF, -HALF],
            [-HALF, HALF, -HALF],
            [HALF, HALF, -HALF],
        ],
    );
    add_face(
        &mut mesh,
        [1.0, 0.0, 0.0],
        [
            [HALF, -HALF, HALF],
            [HALF, -HALF, -HALF],
            [HALF, HALF, -HALF],
            [HALF, HALF, HALF],
        ],
    );
    add_face(
        &mut mesh,
        [-1.0, 0.0, 0.0],
        [
            [-HALF, -HALF, -HALF],
            [-HALF, -HALF, HALF],
            [-HALF, HALF, HALF],
            [-HALF, HALF, -HALF],
        ],
    );
    add_face(
        &mut mesh,
        [0.0, 1.0, 0.0],
        [
            [-HALF, HALF, HALF],
            [HALF, HALF, HALF],
            [HALF, HALF, -HALF],
            [-HALF, HALF, -HALF],
        ],
    );
    add_face(
        &mut mesh,
        [0.0, -1.0, 0.0],
        [
            [-HALF, -HALF, -HALF],
            [HALF, -HALF, -HALF],
            [HALF, -HALF, HALF],
            [-HALF, -HALF, HALF],
        ],
    );

    mesh
}

fn add_face(mesh: &mut MeshData, normal: [f32; 3], corners: [[f32; 3]; 4]) {
    const UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    for index in [0, 1, 2, 0, 2, 3] {
        mesh.positions.extend(corners[index]);
        mesh.tex_coords.extend(UVS[index]);
        mesh.normals.extend(normal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_twelve_triangles() {
        let cube = unit_cube();
        assert_eq!(cube.positions.len(), 108);
        assert_eq!(cube.tex_coords.len(), 72);
        assert_eq!(cube.normals.len(), 108);
        assert_eq!(cube.vertex_count(), 36);
        assert_eq!(cube.triangle_count(), 12);
        assert!(cube.validate().is_ok());
    }

    #[test]
    fn normals_are_unit_length() {
        let cube = unit_cube();
        for normal in cube.normals.chunks_exact(3) {
            let length = glam::vec3(normal[0], normal[1], normal[2]).length();
            assert!((length - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn positions_stay_within_the_unit_extent() {
        let cube = unit_cube();
        assert!(cube.positions.iter().all(|p| p.abs() <= HALF));
    }

    #[test]
    fn every_face_spans_the_full_texture() {
        let cube = unit_cube();
        assert!(cube.tex_coords.iter().all(|&t| t == 0.0 || t == 1.0));
    }

    #[test]
    fn triangles_wind_counter_clockwise_around_their_normals() {
        let cube = unit_cube();
        for triangle in 0..cube.triangle_count() {
            let corner = |v: usize| {
                let i = (triangle * 3 + v) * 3;
                glam::vec3(
                    cube.positions[i],
                    cube.positions[i + 1],
                    cube.positions[i + 2],
                )
            };
            let i = triangle * 9;
            let normal = glam::vec3(cube.normals[i], cube.normals[i + 1], cube.normals[i + 2]);
            let winding = (corner(1) - corner(0)).cross(corner(2) - corner(0));
            assert!(winding.dot(normal) > 0.0);
        }
    }
}
