//! A ring of four reflective spheres orbiting a larger center sphere over
//! a mirrored floor.

use crate::config::SceneTuning;
use crate::math::{to_radians, Vec3};
use crate::orbit::OrbitAnimator;
use crate::scene::{
    add_reflection, add_shadow, Color, DirectionalLight, Fog, GeometryDesc, HemisphericLight,
    MaterialDesc, MirrorReflection, NodeId, OrbitCamera, SceneDescription, SceneNode,
};

const SATELLITE_COLORS: [(&str, Color); 4] = [
    ("sphere1", Color::RED),
    ("sphere2", Color::GREEN),
    ("sphere3", Color::BLUE),
    ("sphere4", Color::YELLOW),
];

fn sphere(name: &str, diameter: f32, position: Vec3) -> SceneNode {
    SceneNode::new(
        name,
        GeometryDesc::Sphere {
            diameter,
            segments: 16,
            double_sided: true,
        },
    )
    .at(position)
}

/// Build the scene and the animator that drives its satellites
pub fn mirror_spheres(tuning: &SceneTuning) -> (SceneDescription, OrbitAnimator) {
    let size = tuning.object_size;
    let half = size / 2.0;

    let mut scene = SceneDescription::new(OrbitCamera {
        alpha: to_radians(-90.0),
        beta: to_radians(72.0),
        radius: 20.0,
        target: Vec3::ZERO,
    });
    scene.fog = Some(Fog::Linear {
        start: tuning.fog.start,
        end: tuning.fog.end,
    });

    scene.hemispheric = Some(HemisphericLight {
        direction: Vec3::new(100.0, 100.0, 0.0),
        diffuse: Color::WHITE,
        specular: Color::new(1.0, 1.0, 0.8),
        intensity: 0.2,
    });
    scene.directional = Some(DirectionalLight {
        direction: Vec3::new(-10.0, -10.0, 0.0),
        position: Vec3::new(100.0, 100.0, 0.0),
        diffuse: Color::WHITE,
        specular: Color::new(1.0, 1.0, 0.8),
        intensity: 0.5,
        enabled: true,
    });

    let pivot = Vec3::new(0.0, half + 0.2, 0.0);
    let center = scene.add_node(sphere("centerSphere", size, pivot));

    let satellite_positions = [
        Vec3::new(-size, half, 0.0),
        Vec3::new(size, half, 0.0),
        Vec3::new(0.0, half, size),
        Vec3::new(0.0, half, -size),
    ];
    let satellites: Vec<NodeId> = SATELLITE_COLORS
        .iter()
        .zip(satellite_positions)
        .map(|(&(name, _), position)| scene.add_node(sphere(name, 2.0, position)))
        .collect();

    let mut mirror_list = satellites.clone();
    mirror_list.push(center);
    scene.add_node(
        SceneNode::new(
            "ground",
            GeometryDesc::Plane {
                size: 100.0,
                backside: true,
            },
        )
        .rotated(Vec3::new(to_radians(-90.0), 0.0, 0.0))
        .with_material(MaterialDesc::Basic {
            diffuse: Color::GRAY,
            mirror: Some(MirrorReflection {
                ratio: 0.5,
                plane: [0.0, -0.5, 0.0, 0.0],
                level: 0.8,
                adaptive_blur_kernel: 20.0,
                render_list: mirror_list,
            }),
        }),
    );

    add_shadow(&mut scene);
    add_reflection(&mut scene);

    // Probe materials start white; tint the satellites
    for &(name, color) in &SATELLITE_COLORS {
        if let Some(id) = scene.find(name) {
            if let Some(MaterialDesc::Pbr { base_color, .. }) = scene.node_mut(id).material.as_mut()
            {
                *base_color = color;
            }
        }
    }

    let mut animator = OrbitAnimator::new(tuning.orbit_params());
    for (&id, position) in satellites.iter().zip(satellite_positions) {
        animator.attach(id, position, pivot);
    }

    (scene, animator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build() -> (SceneDescription, OrbitAnimator) {
        mirror_spheres(&SceneTuning::default())
    }

    #[test]
    fn test_scene_layout() {
        let (scene, _) = build();

        let center = scene.find("centerSphere").unwrap();
        assert!((scene.node(center).position.y - 2.7).abs() < 0.0001);

        for name in ["sphere1", "sphere2", "sphere3", "sphere4", "ground"] {
            assert!(scene.find(name).is_some(), "missing node {}", name);
        }
        assert_eq!(scene.renderable_ids().len(), 6);
    }

    #[test]
    fn test_mirror_sees_all_spheres_but_not_itself() {
        let (scene, _) = build();
        let ground = scene.find("ground").unwrap();

        match scene.node(ground).material.as_ref().unwrap() {
            MaterialDesc::Basic { mirror, .. } => {
                let mirror = mirror.as_ref().unwrap();
                assert_eq!(mirror.render_list.len(), 5);
                assert!(!mirror.render_list.contains(&ground));
            }
            other => panic!("ground should stay basic, got {}", other.kind()),
        }
    }

    #[test]
    fn test_shadows_and_probes_wired() {
        let (scene, _) = build();

        let shadows = scene.shadows.as_ref().unwrap();
        assert_eq!(shadows.casters.len(), 6);

        // One probe per sphere, none for the mirrored ground
        assert_eq!(scene.probes.len(), 5);
    }

    #[test]
    fn test_satellites_are_tinted() {
        let (scene, _) = build();

        for (name, expected) in SATELLITE_COLORS {
            let id = scene.find(name).unwrap();
            match scene.node(id).material.as_ref().unwrap() {
                MaterialDesc::Pbr { base_color, .. } => assert_eq!(*base_color, expected),
                other => panic!("{} should be pbr, got {}", name, other.kind()),
            }
        }

        // The center sphere keeps the plain probe material
        let center = scene.find("centerSphere").unwrap();
        match scene.node(center).material.as_ref().unwrap() {
            MaterialDesc::Pbr { base_color, .. } => assert_eq!(*base_color, Color::WHITE),
            other => panic!("center should be pbr, got {}", other.kind()),
        }
    }

    #[test]
    fn test_animator_attached_in_ring_order() {
        let (scene, animator) = build();
        assert_eq!(animator.len(), 4);

        let first = &animator.bodies()[0];
        assert_eq!(first.node, scene.find("sphere1").unwrap());
        assert!((first.pivot_offset.x + 5.0).abs() < 0.0001);
        assert!((first.pivot_offset.y + 0.2).abs() < 0.0001);
    }

    #[test]
    fn test_scene_exports() {
        let (scene, _) = build();
        let json = scene.to_json().unwrap();
        assert!(json.contains("centerSphere"));
        assert!(json.contains("probe_sphere1"));
    }
}
