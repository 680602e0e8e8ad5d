//! Orbiting-satellite animation.
//!
//! N bodies revolve and bob around a shared pivot, driven by one phase
//! accumulator. Each body records a one-time pivot offset at setup so its
//! rotation center is the shared pivot rather than its own origin; per
//! frame, every body's spin angle advances and its vertical offset is
//! recomputed from the global phase, staggered a quarter turn per body.

use std::f32::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::math::{to_radians, Mat4, Vec3};
use crate::scene::NodeId;

/// How angular increments respond to elapsed time.
///
/// `FrameLocked` reproduces the observed behavior: a fixed increment per
/// `advance` call, so visual speed follows the host frame rate.
/// `TimeScaled` multiplies increments by `dt * reference_fps`, keeping
/// visual speed constant under variable frame rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pacing {
    FrameLocked,
    TimeScaled { reference_fps: f32 },
}

impl Default for Pacing {
    fn default() -> Self {
        Pacing::FrameLocked
    }
}

/// Tuning for the orbit update
#[derive(Debug, Clone, Copy)]
pub struct OrbitParams {
    /// Global phase advance per reference frame (radians)
    pub phase_step: f32,
    /// Per-body spin advance per reference frame (radians)
    pub spin_step: f32,
    /// Resting height the bob oscillates around
    pub base_height: f32,
    /// Per-body phase stagger (radians)
    pub stagger: f32,
    pub pacing: Pacing,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            phase_step: to_radians(2.0),
            spin_step: to_radians(0.5),
            base_height: 2.5,
            stagger: FRAC_PI_2,
            pacing: Pacing::default(),
        }
    }
}

/// The single monotonically increasing phase accumulator.
/// Reset only when the scene is rebuilt.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimationClock {
    phase: f32,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, delta: f32) {
        self.phase += delta;
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}

/// One orbiting body: a scene node handle, its fixed pivot offset, and its
/// mutable per-frame state. The renderable node itself belongs to the scene.
#[derive(Debug, Clone)]
pub struct OrbitBody {
    pub node: NodeId,
    /// Offset from the shared pivot, captured once at initial placement
    pub pivot_offset: Vec3,
    pub position: Vec3,
    pub rotation_y: f32,
}

impl OrbitBody {
    /// Displayed transform: pivot correction first, then spin, then the
    /// body's own translation.
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::translation_of(self.position)
            .mul(&Mat4::rotation_y(self.rotation_y))
            .mul(&Mat4::translation_of(self.pivot_offset))
    }
}

/// Vertical offset of the body at `index` for a given global phase
pub fn bob_height(params: &OrbitParams, phase: f32, index: usize) -> f32 {
    params.base_height + (phase + index as f32 * params.stagger).cos()
}

/// Drives all orbiting bodies from a single clock
#[derive(Debug, Clone)]
pub struct OrbitAnimator {
    params: OrbitParams,
    clock: AnimationClock,
    bodies: Vec<OrbitBody>,
}

impl OrbitAnimator {
    pub fn new(params: OrbitParams) -> Self {
        Self {
            params,
            clock: AnimationClock::new(),
            bodies: Vec::new(),
        }
    }

    /// Register a body at its initial placement. Attach order is the
    /// body's stagger index for the lifetime of the animator.
    pub fn attach(&mut self, node: NodeId, position: Vec3, pivot: Vec3) {
        self.bodies.push(OrbitBody {
            node,
            pivot_offset: position - pivot,
            position,
            rotation_y: 0.0,
        });
    }

    /// Advance one frame. Body updates are independent of each other
    /// within the frame; the stagger index is the original attach order.
    pub fn advance(&mut self, dt: f32) {
        let pace = match self.params.pacing {
            Pacing::FrameLocked => 1.0,
            Pacing::TimeScaled { reference_fps } => dt * reference_fps,
        };

        self.clock.advance(self.params.phase_step * pace);
        let phase = self.clock.phase();

        for (index, body) in self.bodies.iter_mut().enumerate() {
            body.rotation_y += self.params.spin_step * pace;
            body.position.y = bob_height(&self.params, phase, index);
        }
    }

    pub fn phase(&self) -> f32 {
        self.clock.phase()
    }

    pub fn bodies(&self) -> &[OrbitBody] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
