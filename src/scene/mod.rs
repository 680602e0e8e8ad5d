pub mod node;
pub mod material;
pub mod lighting;

pub use node::{GeometryDesc, NodeId, SceneDescription, SceneNode};
pub use material::{Color, MaterialDesc, MirrorReflection};
pub use lighting::{
    add_reflection, add_shadow, DirectionalLight, Fog, HemisphericLight, OrbitCamera,
    ReflectionProbe, ShadowSettings,
};
