use super::Vec3;

/// 4x4 transform matrix (column-major, host-engine convention)
#[derive(Debug, Clone, Copy)]
pub struct Mat4 {
    pub data: [f32; 16],
}

impl Mat4 {
    pub fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0,
                0.0, 1.0, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut m = Self::identity();
        m.data[12] = x;
        m.data[13] = y;
        m.data[14] = z;
        m
    }

    /// Translation by a vector, the pivot-correction form
    pub fn translation_of(v: Vec3) -> Self {
        Self::translation(v.x, v.y, v.z)
    }

    pub fn rotation_y(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self {
            data: [
                c, 0.0, -s, 0.0,
                0.0, 1.0, 0.0, 0.0,
                s, 0.0, c, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Matrix multiplication
    pub fn mul(&self, other: &Mat4) -> Self {
        let mut result = [0.0f32; 16];

        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.data[row + k * 4] * other.data[k + col * 4];
                }
                result[row + col * 4] = sum;
            }
        }

        Self { data: result }
    }

    /// Transform a point (applies translation)
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            self.data[0] * p.x + self.data[4] * p.y + self.data[8] * p.z + self.data[12],
            self.data[1] * p.x + self.data[5] * p.y + self.data[9] * p.z + self.data[13],
            self.data[2] * p.x + self.data[6] * p.y + self.data[10] * p.z + self.data[14],
        )
    }

    /// Get as slice for host upload
    pub fn as_slice(&self) -> &[f32; 16] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let m = Mat4::identity();
        assert_eq!(m.data[0], 1.0);
        assert_eq!(m.data[5], 1.0);
        assert_eq!(m.data[10], 1.0);
        assert_eq!(m.data[15], 1.0);
    }

    #[test]
    fn test_translation() {
        let m = Mat4::translation(1.0, 2.0, 3.0);
        let result = m.transform_point(Vec3::ZERO);
        assert!((result.x - 1.0).abs() < 0.0001);
        assert!((result.y - 2.0).abs() < 0.0001);
        assert!((result.z - 3.0).abs() < 0.0001);
    }

    #[test]
    fn test_rotation_y() {
        let m = Mat4::rotation_y(std::f32::consts::FRAC_PI_2);
        let result = m.transform_point(Vec3::new(1.0, 0.0, 0.0));
        assert!(result.x.abs() < 0.0001);
        assert!((result.z + 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_matrix_mul() {
        let t = Mat4::translation(1.0, 0.0, 0.0);
        let r = Mat4::rotation_y(std::f32::consts::PI);
        let combined = t.mul(&r);
        let result = combined.transform_point(Vec3::new(1.0, 0.0, 0.0));
        // Rotate first (to -1), then translate (+1) -> origin
        assert!(result.x.abs() < 0.0001);
        assert!(result.z.abs() < 0.0001);
    }

    #[test]
    fn test_pivot_offset_revolves_origin() {
        // A pivot-corrected body spun half a turn lands across the pivot
        let pivot = Mat4::translation_of(Vec3::new(-5.0, 0.0, 0.0));
        let spin = Mat4::rotation_y(std::f32::consts::PI);
        let world = spin.mul(&pivot);
        let p = world.transform_point(Vec3::ZERO);
        assert!((p.x - 5.0).abs() < 0.001);
        assert!(p.z.abs() < 0.001);
    }
}
