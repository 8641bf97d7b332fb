// core/easing.rs
//
// Interpolation helpers shared by the per-tick smoothing steps.

/// Linearly interpolate between two values.
/// Applied once per tick with a constant `t`, this is first-order exponential smoothing.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linearly interpolate between two Vec2 values.
#[inline]
pub fn lerp_vec2(a: glam::Vec2, b: glam::Vec2, t: f32) -> glam::Vec2 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 10.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 10.0, 1.0), 10.0);
    }

    #[test]
    fn repeated_lerp_decays_geometrically() {
        let mut v = 10.0;
        for _ in 0..40 {
            v = lerp(v, 0.0, 0.025);
        }
        let expected = 10.0 * 0.975f32.powi(40);
        assert!((v - expected).abs() < 1e-4);
    }

    #[test]
    fn lerp_vec2_midpoint() {
        let m = lerp_vec2(Vec2::ZERO, Vec2::new(4.0, -2.0), 0.5);
        assert_eq!(m, Vec2::new(2.0, -1.0));
    }
}
