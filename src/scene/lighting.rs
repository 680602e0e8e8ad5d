//! Light, camera and effect descriptors, plus the wiring passes that
//! spread shadows and reflection probes over a finished scene build.

use serde::Serialize;

use crate::math::Vec3;
use super::material::{Color, MaterialDesc};
use super::node::{NodeId, SceneDescription};

/// Arc-rotate orbit camera: yaw/pitch around a target at a distance
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OrbitCamera {
    /// Yaw in radians
    pub alpha: f32,
    /// Pitch in radians
    pub beta: f32,
    pub radius: f32,
    pub target: Vec3,
}

/// Distance fog
#[derive(Debug, Clone, Copy, Serialize)]
pub enum Fog {
    Linear { start: f32, end: f32 },
}

/// Sky/ground ambient fill light
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HemisphericLight {
    pub direction: Vec3,
    pub diffuse: Color,
    pub specular: Color,
    pub intensity: f32,
}

/// Sun-style directional light, the shadow caster
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DirectionalLight {
    pub direction: Vec3,
    pub position: Vec3,
    pub diffuse: Color,
    pub specular: Color,
    pub intensity: f32,
    pub enabled: bool,
}

/// Shadow map configuration for the directional light
#[derive(Debug, Clone, Serialize)]
pub struct ShadowSettings {
    pub map_size: usize,
    pub darkness: f32,
    pub contact_hardening: bool,
    pub blur_close_exponential: bool,
    pub shadow_min_z: f32,
    pub shadow_max_z: f32,
    pub casters: Vec<NodeId>,
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self {
            map_size: 1024,
            darkness: 0.1,
            contact_hardening: true,
            blur_close_exponential: true,
            shadow_min_z: 100.0,
            shadow_max_z: 1000.0,
            casters: Vec::new(),
        }
    }
}

/// Cube reflection probe attached to one node
#[derive(Debug, Clone, Serialize)]
pub struct ReflectionProbe {
    pub name: String,
    pub resolution: usize,
    pub attached_to: NodeId,
    pub render_list: Vec<NodeId>,
}

/// Probe cube map resolution
const PROBE_RESOLUTION: usize = 256;

/// Wire shadows over the build result: every renderable both casts into
/// the map and receives from it.
pub fn add_shadow(scene: &mut SceneDescription) {
    let renderables = scene.renderable_ids();
    for &id in &renderables {
        scene.node_mut(id).receive_shadows = true;
    }
    scene.shadows = Some(ShadowSettings {
        casters: renderables,
        ..Default::default()
    });
}

/// Wire reflection probes over the build result: every renderable except
/// the ground gets a probe seeing all the others, and a metallic material
/// fed by that probe. The ground keeps its mirror.
pub fn add_reflection(scene: &mut SceneDescription) {
    let renderables = scene.renderable_ids();

    for &id in &renderables {
        if scene.node(id).name == "ground" {
            continue;
        }

        let render_list: Vec<NodeId> =
            renderables.iter().copied().filter(|&other| other != id).collect();

        let probe_index = scene.probes.len();
        let probe_name = format!("probe_{}", scene.node(id).name);
        scene.probes.push(ReflectionProbe {
            name: probe_name,
            resolution: PROBE_RESOLUTION,
            attached_to: id,
            render_list,
        });

        scene.node_mut(id).material = Some(MaterialDesc::Pbr {
            base_color: Color::WHITE,
            metallic: 0.5,
            roughness: 0.5,
            environment_probe: Some(probe_index),
        });
    }
}
