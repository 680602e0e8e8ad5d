//! Procedural conifer generation.
//!
//! A stylized tree is built from three scalars: a tier count, a total
//! height, and the height of trunk left visible below the foliage. The
//! foliage is a surface of revolution swept along a vertical path whose
//! points are emitted in coincident pairs; the alternating radius profile
//! across those pairs produces the stepped, skirted silhouette.

use crate::math::Vec3;
use crate::mesh::{CapPolicy, CylinderSpec, TubeSpec};

/// Radial segments of the foliage sweep
pub const FOLIAGE_TESSELLATION: usize = 10;
/// Radial segments of the trunk cylinder
pub const TRUNK_TESSELLATION: usize = 12;

/// Shape parameters for one tree
#[derive(Debug, Clone, Copy)]
pub struct TreeShapeParams {
    /// Number of foliage tiers (>= 1)
    pub layer_count: u32,
    /// Total height, foliage tip included (> 0)
    pub tree_height: f32,
    /// Visible trunk height below the foliage (> 0, < tree_height)
    pub trunk_reveal_height: f32,
}

impl Default for TreeShapeParams {
    fn default() -> Self {
        Self {
            layer_count: 4,
            tree_height: 20.0,
            trunk_reveal_height: 4.0,
        }
    }
}

impl TreeShapeParams {
    pub fn new(layer_count: u32, tree_height: f32, trunk_reveal_height: f32) -> Self {
        let params = Self {
            layer_count,
            tree_height,
            trunk_reveal_height,
        };
        params.validate();
        params
    }

    /// Invariant checks. Violations are caller bugs, not runtime
    /// conditions, so they fail fast.
    pub fn validate(&self) {
        assert!(self.layer_count >= 1, "layer_count must be >= 1");
        assert!(self.tree_height > 0.0, "tree_height must be positive");
        assert!(
            self.trunk_reveal_height > 0.0,
            "trunk_reveal_height must be positive"
        );
        assert!(
            self.trunk_reveal_height < self.tree_height,
            "trunk_reveal_height must be less than tree_height"
        );
    }

    /// Height of the foliage cone above the visible trunk
    pub fn leaves_height(&self) -> f32 {
        self.tree_height - self.trunk_reveal_height
    }
}

/// Build the foliage sweep path: two coincident points per tier.
///
/// The pair structure is deliberate. Each duplicated height lets the radius
/// profile jump between the pair's indices, so the swept surface grows a
/// flat annular wall there instead of a smooth taper.
pub fn foliage_path(leaves_height: f32, tier_count: u32) -> Vec<Vec3> {
    assert!(leaves_height > 0.0, "leaves_height must be positive");
    assert!(tier_count >= 1, "tier_count must be >= 1");

    let step = leaves_height / tier_count as f32;
    let mut path = Vec::with_capacity(tier_count as usize * 2 + 2);
    let mut height = 0.0f32;
    while height < leaves_height {
        path.push(Vec3::new(0.0, height, 0.0));
        path.push(Vec3::new(0.0, height, 0.0));
        height += step;
    }
    path
}

/// Sweep radius for the point at `index` of a `point_count`-long foliage
/// path with `tier_count` tiers.
///
/// Even indices take half weight, odd indices full weight, so each
/// coincident pair flares out then pinches in; the broad trend shrinks
/// toward the apex.
pub fn radius_at(index: usize, point_count: usize, tier_count: u32) -> f32 {
    assert!(index < point_count, "radius index out of range");

    let nb_l = tier_count as f32 + 1.0;
    let factor = if index % 2 == 0 { 0.5 } else { 1.0 };
    let radius = (nb_l * 2.0 - index as f32 - 1.0) * factor;
    assert!(radius >= 0.0, "radius function went negative");
    radius
}

/// Control geometry for one tree: the foliage tube, the trunk cylinder,
/// the local offsets placing them, and the invisible grouping anchor.
/// External code moves the whole tree by transforming the anchor.
#[derive(Debug, Clone)]
pub struct TreeAssembly {
    pub foliage: TubeSpec,
    pub trunk: CylinderSpec,
    /// Edge length of the invisible anchor box
    pub anchor_size: f32,
    /// Foliage position relative to the anchor
    pub foliage_offset: Vec3,
    /// Trunk position relative to the anchor
    pub trunk_offset: Vec3,
}

impl TreeAssembly {
    /// Generate the control geometry. Pure: identical params yield
    /// identical geometry, and no state is shared between calls.
    pub fn generate(params: &TreeShapeParams) -> Self {
        params.validate();

        let path = foliage_path(params.leaves_height(), params.layer_count);
        let point_count = path.len();
        let radii = (0..point_count)
            .map(|i| radius_at(i, point_count, params.layer_count))
            .collect();

        let foliage = TubeSpec {
            path,
            radii,
            tessellation: FOLIAGE_TESSELLATION,
            cap: CapPolicy::Start,
        };

        let trunk = CylinderSpec {
            height: params.trunk_reveal_height,
            diameter: params.layer_count as f32,
            tessellation: TRUNK_TESSELLATION,
            subdivisions: 1,
        };

        Self {
            foliage,
            trunk,
            anchor_size: 1.0,
            foliage_offset: Vec3::new(0.0, params.trunk_reveal_height, 0.0),
            trunk_offset: Vec3::new(0.0, params.trunk_reveal_height / 2.0, 0.0),
        }
    }
}
