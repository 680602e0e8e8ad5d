pub mod surface;
pub mod lathe;

pub use surface::{Mesh, Vertex};
pub use lathe::{CapPolicy, CylinderSpec, TubeSpec};
