use wasm_bindgen::prelude::*;
use js_sys::{Float32Array, Uint32Array};

pub mod compose;
pub mod config;
pub mod math;
pub mod mesh;
pub mod orbit;
pub mod particles;
pub mod scene;
pub mod tree;

pub use config::SceneTuning;
pub use orbit::OrbitAnimator;
pub use scene::SceneDescription;
pub use tree::{TreeAssembly, TreeShapeParams};

use mesh::lathe::{tessellate_cylinder, tessellate_tube};
use mesh::Mesh;
use particles::SnowfallSystem;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn log_build(name: &str, nodes: usize) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&format!("scene '{}' built with {} nodes", name, nodes).into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (name, nodes);
}

/// Orbiting mirror-spheres scene, exposed to the JavaScript host.
///
/// The host builds its scene from `scene_json()`, then calls `advance(dt)`
/// from its before-render callback and applies `body_matrices()` to the
/// nodes named by `body_node(i)`.
#[wasm_bindgen]
pub struct MirrorSpheres {
    scene: SceneDescription,
    animator: OrbitAnimator,
}

#[wasm_bindgen]
impl MirrorSpheres {
    /// Create with default tuning
    #[wasm_bindgen(constructor)]
    pub fn new() -> MirrorSpheres {
        Self::build(&SceneTuning::default())
    }

    /// Create with YAML tuning overrides
    pub fn with_tuning(yaml: &str) -> Result<MirrorSpheres, JsValue> {
        let tuning = SceneTuning::from_yaml(yaml).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self::build(&tuning))
    }

    fn build(tuning: &SceneTuning) -> MirrorSpheres {
        let (scene, animator) = compose::mirror_spheres(tuning);
        log_build("mirror_spheres", scene.nodes.len());
        MirrorSpheres { scene, animator }
    }

    /// Scene description as JSON
    pub fn scene_json(&self) -> Result<String, JsValue> {
        self.scene.to_json().map_err(|e| JsValue::from_str(&e))
    }

    /// Advance one frame
    pub fn advance(&mut self, dt: f32) {
        self.animator.advance(dt);
    }

    pub fn body_count(&self) -> usize {
        self.animator.len()
    }

    /// Scene node index of the orbiting body at `index`
    pub fn body_node(&self, index: usize) -> usize {
        assert!(index < self.animator.len(), "body index out of range");
        self.animator.bodies()[index].node.0
    }

    /// Column-major world matrices of all bodies, 16 floats each, in
    /// attach order
    pub fn body_matrices(&self) -> Float32Array {
        let mut data = Vec::with_capacity(self.animator.len() * 16);
        for body in self.animator.bodies() {
            data.extend_from_slice(body.world_matrix().as_slice());
        }
        Float32Array::from(&data[..])
    }
}

impl Default for MirrorSpheres {
    fn default() -> Self {
        Self::new()
    }
}

/// Snow-conifer scene, exposed to the JavaScript host.
///
/// Geometry comes both ways: the scene JSON carries the compact tube and
/// cylinder specs for hosts with their own builders, and the
/// `*_vertices`/`*_indices` accessors carry pre-tessellated buffers
/// (position 3 + normal 3 + uv 2 floats per vertex) for hosts without.
#[wasm_bindgen]
pub struct SnowyTree {
    scene: SceneDescription,
    snow: SnowfallSystem,
    foliage: Mesh,
    trunk: Mesh,
    time: f32,
}

#[wasm_bindgen]
impl SnowyTree {
    /// Create with default tuning
    #[wasm_bindgen(constructor)]
    pub fn new() -> SnowyTree {
        Self::build(&SceneTuning::default())
    }

    /// Create with YAML tuning overrides
    pub fn with_tuning(yaml: &str) -> Result<SnowyTree, JsValue> {
        let tuning = SceneTuning::from_yaml(yaml).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self::build(&tuning))
    }

    fn build(tuning: &SceneTuning) -> SnowyTree {
        let (scene, snow) = compose::snowy_tree(tuning);

        let assembly = TreeAssembly::generate(&tuning.tree_params());
        let foliage = tessellate_tube(&assembly.foliage);
        let trunk = tessellate_cylinder(&assembly.trunk);

        log_build("snowy_tree", scene.nodes.len());
        SnowyTree {
            scene,
            snow,
            foliage,
            trunk,
            time: 0.0,
        }
    }

    /// Scene description as JSON
    pub fn scene_json(&self) -> Result<String, JsValue> {
        self.scene.to_json().map_err(|e| JsValue::from_str(&e))
    }

    pub fn foliage_vertices(&self) -> Float32Array {
        Float32Array::from(&self.foliage.vertex_data()[..])
    }

    pub fn foliage_indices(&self) -> Uint32Array {
        Uint32Array::from(self.foliage.index_data())
    }

    pub fn trunk_vertices(&self) -> Float32Array {
        Float32Array::from(&self.trunk.vertex_data()[..])
    }

    pub fn trunk_indices(&self) -> Uint32Array {
        Uint32Array::from(self.trunk.index_data())
    }

    /// Advance one frame of snowfall
    pub fn advance(&mut self, dt: f32) {
        self.time += dt;
        self.snow.update(dt, self.time);
    }

    /// Live flake data: position(3) + size(1) + alpha(1) + color(3) per flake
    pub fn snow_particles(&self) -> Float32Array {
        Float32Array::from(&self.snow.particle_data()[..])
    }

    pub fn snow_count(&self) -> usize {
        self.snow.count()
    }
}

impl Default for SnowyTree {
    fn default() -> Self {
        Self::new()
    }
}
