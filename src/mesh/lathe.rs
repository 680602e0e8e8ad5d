//! Tessellation of swept profiles into host-uploadable buffers.
//!
//! The scene description carries geometry as compact specs (a path plus
//! per-point radii, or cylinder dimensions). Hosts with their own tube
//! builders consume the specs directly; hosts without one call the
//! tessellators here and upload the resulting vertex/index buffers.

use serde::Serialize;

use crate::math::Vec3;
use super::surface::{cap_ring, connect_rings, create_ring, Mesh};

/// How a swept tube is closed at its ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CapPolicy {
    None,
    Start,
    End,
    Both,
}

impl CapPolicy {
    fn caps_start(self) -> bool {
        matches!(self, CapPolicy::Start | CapPolicy::Both)
    }

    fn caps_end(self) -> bool {
        matches!(self, CapPolicy::End | CapPolicy::Both)
    }
}

/// A surface of revolution swept along a path with a per-point radius
#[derive(Debug, Clone, Serialize)]
pub struct TubeSpec {
    pub path: Vec<Vec3>,
    pub radii: Vec<f32>,
    pub tessellation: usize,
    pub cap: CapPolicy,
}

/// A right cylinder, centered on its own origin
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CylinderSpec {
    pub height: f32,
    pub diameter: f32,
    pub tessellation: usize,
    pub subdivisions: usize,
}

/// Sweep direction at a path point. Repeated points collapse the forward
/// difference to zero, so fall back to the backward one.
fn path_direction(path: &[Vec3], i: usize) -> Vec3 {
    if let Some(next) = path.get(i + 1) {
        let forward = *next - path[i];
        if forward.length() > 1e-6 {
            return forward.normalize();
        }
    }
    if i > 0 {
        let backward = path[i] - path[i - 1];
        if backward.length() > 1e-6 {
            return backward.normalize();
        }
        // Walk back past duplicated points
        return path_direction(path, i - 1);
    }
    Vec3::UP
}

/// Tessellate a swept tube: one ring per path point, rings stitched in
/// order. Duplicated path points become zero-height ring pairs whose
/// differing radii form flat annular walls (the tiered-skirt silhouette).
pub fn tessellate_tube(spec: &TubeSpec) -> Mesh {
    assert!(!spec.path.is_empty(), "tube path must not be empty");
    assert_eq!(
        spec.path.len(),
        spec.radii.len(),
        "tube path and radii must have equal length"
    );
    assert!(spec.tessellation >= 3, "tube tessellation must be >= 3");

    let mut mesh = Mesh::new();
    let n = spec.path.len();

    let mut ring_starts = Vec::with_capacity(n);
    for i in 0..n {
        let v = i as f32 / (n - 1).max(1) as f32;
        let ring = create_ring(
            spec.path[i],
            path_direction(&spec.path, i),
            spec.radii[i],
            spec.tessellation,
            v,
        );
        ring_starts.push(mesh.add_vertices(ring));
    }

    for i in 0..n.saturating_sub(1) {
        connect_rings(&mut mesh, ring_starts[i], ring_starts[i + 1], spec.tessellation);
    }

    if spec.cap.caps_start() {
        let dir = path_direction(&spec.path, 0);
        cap_ring(
            &mut mesh,
            ring_starts[0],
            spec.tessellation,
            spec.path[0],
            dir.scale(-1.0),
            true,
        );
    }
    if spec.cap.caps_end() {
        let last = n - 1;
        let dir = path_direction(&spec.path, last);
        cap_ring(
            &mut mesh,
            ring_starts[last],
            spec.tessellation,
            spec.path[last],
            dir,
            false,
        );
    }

    mesh
}

/// Tessellate a right cylinder with capped ends
pub fn tessellate_cylinder(spec: &CylinderSpec) -> Mesh {
    assert!(spec.height > 0.0, "cylinder height must be positive");
    assert!(spec.diameter > 0.0, "cylinder diameter must be positive");
    assert!(spec.tessellation >= 3, "cylinder tessellation must be >= 3");
    assert!(spec.subdivisions >= 1, "cylinder needs at least one subdivision");

    let mut mesh = Mesh::new();
    let radius = spec.diameter / 2.0;
    let half = spec.height / 2.0;
    let rings = spec.subdivisions + 1;

    let mut ring_starts = Vec::with_capacity(rings);
    for i in 0..rings {
        let t = i as f32 / spec.subdivisions as f32;
        let y = -half + spec.height * t;
        let ring = create_ring(
            Vec3::new(0.0, y, 0.0),
            Vec3::UP,
            radius,
            spec.tessellation,
            t,
        );
        ring_starts.push(mesh.add_vertices(ring));
    }

    for i in 0..spec.subdivisions {
        connect_rings(&mut mesh, ring_starts[i], ring_starts[i + 1], spec.tessellation);
    }

    cap_ring(
        &mut mesh,
        ring_starts[0],
        spec.tessellation,
        Vec3::new(0.0, -half, 0.0),
        Vec3::UP.scale(-1.0),
        true,
    );
    cap_ring(
        &mut mesh,
        ring_starts[rings - 1],
        spec.tessellation,
        Vec3::new(0.0, half, 0.0),
        Vec3::UP,
        false,
    );

    mesh
}
