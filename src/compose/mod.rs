//! Scene composition: each builder assembles one complete demo scene and
//! returns it as an explicit value, together with whatever per-frame
//! system drives it.

pub mod mirror_spheres;
pub mod snowy_tree;

pub use mirror_spheres::mirror_spheres;
pub use snowy_tree::snowy_tree;
