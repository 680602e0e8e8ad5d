use serde::Serialize;

use crate::math::Vec3;
use crate::mesh::{CylinderSpec, TubeSpec};
use super::lighting::{DirectionalLight, Fog, HemisphericLight, OrbitCamera, ReflectionProbe, ShadowSettings};
use super::material::MaterialDesc;

/// Handle to a node in a scene's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NodeId(pub usize);

/// Geometry carried by a scene node, in the host's mesh-builder terms
#[derive(Debug, Clone, Serialize)]
pub enum GeometryDesc {
    /// Invisible grouping box; children move with it
    Anchor { size: f32 },
    Sphere {
        diameter: f32,
        segments: usize,
        double_sided: bool,
    },
    Plane { size: f32, backside: bool },
    Ground {
        width: f32,
        height: f32,
        subdivisions: usize,
    },
    Tube(TubeSpec),
    Cylinder(CylinderSpec),
}

impl GeometryDesc {
    /// Anchors group, they do not render
    pub fn is_renderable(&self) -> bool {
        !matches!(self, GeometryDesc::Anchor { .. })
    }
}

/// One node of the scene graph
#[derive(Debug, Clone, Serialize)]
pub struct SceneNode {
    pub name: String,
    pub geometry: GeometryDesc,
    pub material: Option<MaterialDesc>,
    pub position: Vec3,
    /// Euler rotation in radians
    pub rotation: Vec3,
    pub parent: Option<NodeId>,
    pub visible: bool,
    pub receive_shadows: bool,
}

impl SceneNode {
    pub fn new(name: &str, geometry: GeometryDesc) -> Self {
        Self {
            name: name.to_string(),
            geometry,
            material: None,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            parent: None,
            visible: true,
            receive_shadows: false,
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_material(mut self, material: MaterialDesc) -> Self {
        self.material = Some(material);
        self
    }

    pub fn child_of(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// The scene build result: everything a composition pass produced, as one
/// value. Downstream wiring (shadows, probes, export) consumes this
/// explicitly; nothing accumulates in module state.
#[derive(Debug, Clone, Serialize)]
pub struct SceneDescription {
    pub camera: OrbitCamera,
    pub fog: Option<Fog>,
    pub hemispheric: Option<HemisphericLight>,
    pub directional: Option<DirectionalLight>,
    pub nodes: Vec<SceneNode>,
    pub shadows: Option<ShadowSettings>,
    pub probes: Vec<ReflectionProbe>,
}

impl SceneDescription {
    pub fn new(camera: OrbitCamera) -> Self {
        Self {
            camera,
            fog: None,
            hemispheric: None,
            directional: None,
            nodes: Vec::new(),
            shadows: None,
            probes: Vec::new(),
        }
    }

    /// Insert a node and return its handle
    pub fn add_node(&mut self, node: SceneNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn node(&self, id: NodeId) -> &SceneNode {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut SceneNode {
        &mut self.nodes[id.0]
    }

    /// Find a node by name
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.name == name).map(NodeId)
    }

    /// Handles of every renderable node, in insertion order
    pub fn renderable_ids(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.geometry.is_renderable())
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    /// Export for the host engine
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("scene export error: {}", e))
    }
}
