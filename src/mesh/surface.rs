use crate::math::Vec3;

/// A vertex with position, normal, and UV
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: [f32; 2],
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position,
            normal,
            uv: [0.0, 0.0],
        }
    }

    pub fn with_uv(mut self, u: f32, v: f32) -> Self {
        self.uv = [u, v];
        self
    }

    /// Convert to flat array for host vertex buffers
    /// Layout: position(3) + normal(3) + uv(2) = 8 floats
    pub fn to_array(&self) -> [f32; 8] {
        [
            self.position.x, self.position.y, self.position.z,
            self.normal.x, self.normal.y, self.normal.z,
            self.uv[0], self.uv[1],
        ]
    }
}

/// A mesh composed of vertices and triangle indices
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add vertices and return the starting index
    pub fn add_vertices(&mut self, verts: impl IntoIterator<Item = Vertex>) -> u32 {
        let start = self.vertices.len() as u32;
        self.vertices.extend(verts);
        start
    }

    /// Add a triangle (indices are relative to the mesh's vertex buffer)
    pub fn add_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.push(a);
        self.indices.push(b);
        self.indices.push(c);
    }

    /// Add a quad as two triangles (CCW winding)
    pub fn add_quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.add_triangle(a, b, c);
        self.add_triangle(a, c, d);
    }

    /// Get vertex buffer data as flat f32 array
    pub fn vertex_data(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| v.to_array())
            .collect()
    }

    /// Get index data
    pub fn index_data(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Create a ring of vertices at a given position/direction/radius
pub fn create_ring(
    center: Vec3,
    direction: Vec3,
    radius: f32,
    segments: usize,
    v_coord: f32,
) -> Vec<Vertex> {
    let tangent = direction.perpendicular();
    let bitangent = direction.cross(&tangent).normalize();

    (0..segments)
        .map(|i| {
            let angle = (i as f32 / segments as f32) * std::f32::consts::TAU;
            let cos_a = angle.cos();
            let sin_a = angle.sin();

            let offset = tangent.scale(cos_a * radius) + bitangent.scale(sin_a * radius);
            let position = center + offset;
            let normal = if radius > 0.0 {
                offset.normalize()
            } else {
                // Degenerate ring (closed tip): point the normal along the sweep
                direction
            };
            let u = i as f32 / segments as f32;

            Vertex::new(position, normal).with_uv(u, v_coord)
        })
        .collect()
}

/// Connect two rings with triangles
pub fn connect_rings(mesh: &mut Mesh, ring1_start: u32, ring2_start: u32, segments: usize) {
    for i in 0..segments {
        let i_next = (i + 1) % segments;

        let a = ring1_start + i as u32;
        let b = ring1_start + i_next as u32;
        let c = ring2_start + i_next as u32;
        let d = ring2_start + i as u32;

        mesh.add_quad(a, d, c, b);
    }
}

/// Close a ring with a triangle fan around a fresh center vertex.
/// `flip` reverses the winding (used for caps facing against the sweep).
pub fn cap_ring(
    mesh: &mut Mesh,
    ring_start: u32,
    segments: usize,
    center: Vec3,
    normal: Vec3,
    flip: bool,
) {
    let center_vertex = Vertex::new(center, normal).with_uv(0.5, 0.5);
    let center_idx = mesh.add_vertices(std::iter::once(center_vertex));

    for i in 0..segments {
        let next = (i + 1) % segments;
        let a = ring_start + i as u32;
        let b = ring_start + next as u32;
        if flip {
            mesh.add_triangle(b, a, center_idx);
        } else {
            mesh.add_triangle(a, b, center_idx);
        }
    }
}
