//! A procedural conifer on a fur-textured snow ground, under falling snow.

use crate::config::SceneTuning;
use crate::math::{to_radians, Vec3};
use crate::particles::SnowfallSystem;
use crate::scene::{
    Color, DirectionalLight, Fog, GeometryDesc, HemisphericLight, MaterialDesc, OrbitCamera,
    SceneDescription, SceneNode,
};
use crate::tree::TreeAssembly;

const GROUND_SIZE: f32 = 100.0;

/// Build the scene and the snowfall that plays over it
pub fn snowy_tree(tuning: &SceneTuning) -> (SceneDescription, SnowfallSystem) {
    let mut scene = SceneDescription::new(OrbitCamera {
        alpha: to_radians(-90.0),
        beta: to_radians(90.0),
        radius: 30.0,
        target: Vec3::new(0.0, 10.0, 0.0),
    });
    scene.fog = Some(Fog::Linear {
        start: tuning.fog.start,
        end: tuning.fog.end,
    });

    scene.hemispheric = Some(HemisphericLight {
        direction: Vec3::new(100.0, 100.0, 0.0),
        diffuse: Color::WHITE,
        specular: Color::WHITE,
        intensity: 0.5,
    });
    scene.directional = Some(DirectionalLight {
        direction: Vec3::new(-10.0, -10.0, 0.0),
        position: Vec3::new(100.0, 100.0, 0.0),
        diffuse: Color::WHITE,
        specular: Color::WHITE,
        intensity: 0.3,
        enabled: true,
    });

    scene.add_node(
        SceneNode::new(
            "ground",
            GeometryDesc::Ground {
                width: GROUND_SIZE,
                height: GROUND_SIZE,
                subdivisions: 20,
            },
        )
        .with_material(MaterialDesc::Fur {
            fur_length: 1.0,
            fur_angle: 0.0,
            fur_color: Color::WHITE,
            fur_spacing: 1.0,
            fur_density: 1.0,
            fur_speed: 10000.0,
            high_level: true,
            quality: 90,
        }),
    );

    let assembly = TreeAssembly::generate(&tuning.tree_params());
    let anchor = scene.add_node(
        SceneNode::new(
            "treeBox",
            GeometryDesc::Anchor {
                size: assembly.anchor_size,
            },
        )
        .hidden(),
    );
    scene.add_node(
        SceneNode::new("leaves", GeometryDesc::Tube(assembly.foliage.clone()))
            .at(assembly.foliage_offset)
            .child_of(anchor)
            .with_material(MaterialDesc::basic(tuning.foliage_color())),
    );
    scene.add_node(
        SceneNode::new("trunk", GeometryDesc::Cylinder(assembly.trunk))
            .at(assembly.trunk_offset)
            .child_of(anchor)
            .with_material(MaterialDesc::WoodGrain {
                amp_scale: 50.0,
                resolution: 512,
            }),
    );

    let snow = SnowfallSystem::new(tuning.snow.max_flakes, GROUND_SIZE, tuning.snow.ceiling);

    (scene, snow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::CapPolicy;

    fn build() -> (SceneDescription, SnowfallSystem) {
        snowy_tree(&SceneTuning::default())
    }

    #[test]
    fn test_tree_hangs_off_hidden_anchor() {
        let (scene, _) = build();

        let anchor = scene.find("treeBox").unwrap();
        assert!(!scene.node(anchor).visible);
        assert!(!scene.node(anchor).geometry.is_renderable());

        for name in ["leaves", "trunk"] {
            let id = scene.find(name).unwrap();
            assert_eq!(scene.node(id).parent, Some(anchor));
        }
    }

    #[test]
    fn test_foliage_sits_on_trunk() {
        let (scene, _) = build();

        let leaves = scene.find("leaves").unwrap();
        let trunk = scene.find("trunk").unwrap();
        assert!((scene.node(leaves).position.y - 4.0).abs() < 0.0001);
        assert!((scene.node(trunk).position.y - 2.0).abs() < 0.0001);

        match &scene.node(leaves).geometry {
            GeometryDesc::Tube(spec) => {
                assert_eq!(spec.cap, CapPolicy::Start);
                assert_eq!(spec.tessellation, 10);
            }
            other => panic!("leaves should be a tube, got {:?}", other),
        }
    }

    #[test]
    fn test_snow_ground_is_fur() {
        let (scene, _) = build();
        let ground = scene.find("ground").unwrap();

        match scene.node(ground).material.as_ref().unwrap() {
            MaterialDesc::Fur {
                fur_color,
                high_level,
                quality,
                ..
            } => {
                assert_eq!(*fur_color, Color::WHITE);
                assert!(*high_level);
                assert_eq!(*quality, 90);
            }
            other => panic!("ground should be fur, got {}", other.kind()),
        }
    }

    #[test]
    fn test_trunk_is_wood_grain() {
        let (scene, _) = build();
        let trunk = scene.find("trunk").unwrap();
        match scene.node(trunk).material.as_ref().unwrap() {
            MaterialDesc::WoodGrain { amp_scale, resolution } => {
                assert!((amp_scale - 50.0).abs() < 0.0001);
                assert_eq!(*resolution, 512);
            }
            other => panic!("trunk should be wood grain, got {}", other.kind()),
        }
    }

    #[test]
    fn test_snowfall_starts_empty_and_fills() {
        let (_, mut snow) = build();
        assert_eq!(snow.count(), 0);

        snow.update(1.0, 0.0);
        assert!(snow.count() > 0);
    }

    #[test]
    fn test_scene_exports() {
        let (scene, _) = build();
        let json = scene.to_json().unwrap();
        assert!(json.contains("treeBox"));
        assert!(json.contains("Fur"));
    }
}
