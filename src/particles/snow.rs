//! Falling-snow particle system.
//!
//! A fixed pool of flakes drifts down over the ground span. Flakes that
//! pass below the ground recycle to the emission ceiling instead of dying,
//! so the fall is continuous once the pool has filled.

use crate::math::Vec3;

/// A single snowflake
#[derive(Debug, Clone)]
struct Flake {
    position: Vec3,
    fall_speed: f32,
    drift_phase: f32,
    drift_amount: f32,
    size: f32,
}

/// System managing the snowfall over a scene
pub struct SnowfallSystem {
    flakes: Vec<Flake>,
    max_flakes: usize,
    spawn_rate: f32,
    spawn_accumulator: f32,
    /// Half extent of the covered ground square
    half_span: f32,
    /// Emission height
    ceiling: f32,
    seed: u32,
}

impl SnowfallSystem {
    pub fn new(max_flakes: usize, span: f32, ceiling: f32) -> Self {
        assert!(span > 0.0, "snow span must be positive");
        assert!(ceiling > 0.0, "snow ceiling must be positive");
        Self {
            flakes: Vec::with_capacity(max_flakes),
            max_flakes,
            spawn_rate: 60.0,
            spawn_accumulator: 0.0,
            half_span: span / 2.0,
            ceiling,
            seed: 42,
        }
    }

    /// Deterministic LCG step, mapped to 0..1
    fn next_unit(&mut self) -> f32 {
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
        (self.seed % 10000) as f32 / 10000.0
    }

    fn spawn_flake(&mut self) {
        let x = (self.next_unit() * 2.0 - 1.0) * self.half_span;
        let z = (self.next_unit() * 2.0 - 1.0) * self.half_span;
        // Stagger initial heights so the first pool fill is not one sheet
        let y = self.ceiling * (0.5 + 0.5 * self.next_unit());

        let fall_speed = 1.5 + self.next_unit() * 1.5;
        let drift_phase = self.next_unit() * std::f32::consts::TAU;
        let drift_amount = 0.3 + self.next_unit() * 0.5;
        let size = 2.0 + self.next_unit() * 3.0;

        self.flakes.push(Flake {
            position: Vec3::new(x, y, z),
            fall_speed,
            drift_phase,
            drift_amount,
            size,
        });
    }

    fn recycle_flake(half_span: f32, ceiling: f32, flake: &mut Flake, seed: &mut u32) {
        let mut next = || {
            *seed = seed.wrapping_mul(1664525).wrapping_add(1013904223);
            (*seed % 10000) as f32 / 10000.0
        };
        flake.position.x = (next() * 2.0 - 1.0) * half_span;
        flake.position.z = (next() * 2.0 - 1.0) * half_span;
        flake.position.y = ceiling;
    }

    /// Advance the snowfall
    pub fn update(&mut self, dt: f32, time: f32) {
        // Fill the pool gradually
        self.spawn_accumulator += dt * self.spawn_rate;
        while self.spawn_accumulator >= 1.0 && self.flakes.len() < self.max_flakes {
            self.spawn_flake();
            self.spawn_accumulator -= 1.0;
        }

        let half_span = self.half_span;
        let ceiling = self.ceiling;
        let seed = &mut self.seed;

        for flake in &mut self.flakes {
            flake.position.y -= flake.fall_speed * dt;

            // Sinusoidal lateral drift, per-flake phase
            let sway = time * 0.8 + flake.drift_phase;
            flake.position.x += sway.sin() * flake.drift_amount * dt;
            flake.position.z += (sway * 0.7).cos() * flake.drift_amount * 0.5 * dt;

            if flake.position.y < 0.0 {
                Self::recycle_flake(half_span, ceiling, flake, seed);
            }
        }
    }

    /// Get particle data for host upload
    /// Format: position(3) + size(1) + alpha(1) + color(3) = 8 floats per flake
    pub fn particle_data(&self) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.flakes.len() * 8);

        for flake in &self.flakes {
            // Fade out over the last stretch of the fall
            let alpha = (flake.position.y / 2.0).clamp(0.0, 1.0) * 0.9;

            data.push(flake.position.x);
            data.push(flake.position.y);
            data.push(flake.position.z);
            data.push(flake.size);
            data.push(alpha);
            data.push(1.0);
            data.push(1.0);
            data.push(1.0);
        }

        data
    }

    pub fn count(&self) -> usize {
        self.flakes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_fills_up_to_cap() {
        let mut snow = SnowfallSystem::new(50, 100.0, 30.0);
        assert_eq!(snow.count(), 0);

        for _ in 0..120 {
            snow.update(0.1, 0.0);
        }
        assert_eq!(snow.count(), 50);
    }

    #[test]
    fn test_flakes_spawn_within_span() {
        let mut snow = SnowfallSystem::new(100, 100.0, 30.0);
        for _ in 0..60 {
            snow.update(0.1, 0.0);
        }

        for flake in &snow.flakes {
            assert!(flake.position.x.abs() <= 50.0);
            assert!(flake.position.z.abs() <= 50.0);
            assert!(flake.position.y <= 30.0);
        }
    }

    #[test]
    fn test_flakes_fall_and_recycle() {
        let mut snow = SnowfallSystem::new(10, 20.0, 5.0);
        let mut t = 0.0;
        for _ in 0..600 {
            snow.update(0.1, t);
            t += 0.1;
        }

        // After many cycles every flake is still airborne over the span
        for flake in &snow.flakes {
            assert!(flake.position.y >= 0.0 - 0.5);
            assert!(flake.position.y <= 5.0);
        }
    }

    #[test]
    fn test_particle_data_stride() {
        let mut snow = SnowfallSystem::new(20, 50.0, 20.0);
        snow.update(0.5, 0.0);

        let data = snow.particle_data();
        assert!(!data.is_empty());
        assert_eq!(data.len() % 8, 0);
        assert_eq!(data.len(), snow.count() * 8);
    }

    #[test]
    fn test_deterministic_for_fixed_seed() {
        let run = || {
            let mut snow = SnowfallSystem::new(30, 40.0, 10.0);
            let mut t = 0.0;
            for _ in 0..50 {
                snow.update(0.05, t);
                t += 0.05;
            }
            snow.particle_data()
        };
        assert_eq!(run(), run());
    }
}
