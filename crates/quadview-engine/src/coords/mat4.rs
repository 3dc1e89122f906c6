use super::Viewport;

/// 4x4 matrix, column-major: `cols[c][r]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4 {
    pub cols: [[f32; 4]; 4],
}

impl Mat4 {
    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Orthographic projection.
    ///
    /// Eye-space `z = -near` maps to depth 0 and `z = -far` to depth 1. Passing
    /// `near > far` is allowed and flips the depth direction.
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let rl = right - left;
        let tb = top - bottom;
        let fnr = far - near;

        Self {
            cols: [
                [2.0 / rl, 0.0, 0.0, 0.0],
                [0.0, 2.0 / tb, 0.0, 0.0],
                [0.0, 0.0, -1.0 / fnr, 0.0],
                [-(right + left) / rl, -(top + bottom) / tb, -near / fnr, 1.0],
            ],
        }
    }

    /// Rotation of `angle` radians about the X axis.
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            cols: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, c, s, 0.0],
                [0.0, -s, c, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// `self * rhs`: `rhs` is applied first.
    pub fn mul(&self, rhs: &Mat4) -> Mat4 {
        let mut out = [[0.0f32; 4]; 4];
        for (c, col) in out.iter_mut().enumerate() {
            for (r, cell) in col.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.cols[k][r] * rhs.cols[c][k]).sum();
            }
        }
        Mat4 { cols: out }
    }

    pub fn transform_point(&self, p: [f32; 4]) -> [f32; 4] {
        let mut out = [0.0f32; 4];
        for (r, cell) in out.iter_mut().enumerate() {
            *cell = (0..4).map(|k| self.cols[k][r] * p[k]).sum();
        }
        out
    }

    #[inline]
    pub fn to_cols_array(&self) -> [[f32; 4]; 4] {
        self.cols
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Transform for the image quad.
///
/// The `[-1, 1]` quad keeps its square shape: the horizontal extent of the
/// projection is widened by the aspect ratio. `angle` spins it about X.
pub fn quad_projection(viewport: Viewport, angle: f32) -> Mat4 {
    let ratio = viewport.aspect_ratio();
    let projection = Mat4::orthographic(-ratio, ratio, -1.0, 1.0, 1.0, -1.0);
    projection.mul(&Mat4::rotation_x(angle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: [f32; 4], b: [f32; 4]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    // ── products ──────────────────────────────────────────────────────────

    #[test]
    fn identity_is_neutral() {
        let m = Mat4::orthographic(-2.0, 2.0, -1.0, 1.0, 1.0, -1.0);
        assert_eq!(Mat4::IDENTITY.mul(&m), m);
        assert_eq!(m.mul(&Mat4::IDENTITY), m);
    }

    #[test]
    fn rotations_compose() {
        let a = Mat4::rotation_x(0.3).mul(&Mat4::rotation_x(0.4));
        let b = Mat4::rotation_x(0.7);
        for c in 0..4 {
            assert!(approx(a.cols[c], b.cols[c]));
        }
    }

    // ── orthographic ──────────────────────────────────────────────────────

    #[test]
    fn ortho_maps_bounds_to_clip_edges() {
        let m = Mat4::orthographic(-4.0, 4.0, -2.0, 2.0, 1.0, -1.0);
        assert!(approx(m.transform_point([4.0, 2.0, 0.0, 1.0]), [1.0, 1.0, 0.5, 1.0]));
        assert!(approx(m.transform_point([-4.0, -2.0, 0.0, 1.0]), [-1.0, -1.0, 0.5, 1.0]));
    }

    #[test]
    fn ortho_depth_lands_in_unit_range() {
        let m = Mat4::orthographic(-1.0, 1.0, -1.0, 1.0, 1.0, -1.0);
        assert!((m.transform_point([0.0, 0.0, -1.0, 1.0])[2] - 0.0).abs() < 1e-6);
        assert!((m.transform_point([0.0, 0.0, 1.0, 1.0])[2] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn ortho_off_center_translates() {
        let m = Mat4::orthographic(0.0, 10.0, 0.0, 10.0, 1.0, -1.0);
        assert!(approx(m.transform_point([5.0, 5.0, 0.0, 1.0]), [0.0, 0.0, 0.5, 1.0]));
    }

    // ── rotation ──────────────────────────────────────────────────────────

    #[test]
    fn rotation_x_quarter_turn_moves_y_into_z() {
        let m = Mat4::rotation_x(std::f32::consts::FRAC_PI_2);
        assert!(approx(m.transform_point([0.0, 1.0, 0.0, 1.0]), [0.0, 0.0, 1.0, 1.0]));
        assert!(approx(m.transform_point([1.0, 0.0, 0.0, 1.0]), [1.0, 0.0, 0.0, 1.0]));
    }

    // ── quad projection ───────────────────────────────────────────────────

    #[test]
    fn quad_keeps_square_shape_on_wide_window() {
        let m = quad_projection(Viewport::from_physical(800, 600), 0.0);
        let top_right = m.transform_point([1.0, 1.0, 0.0, 1.0]);
        assert!((top_right[0] - 0.75).abs() < 1e-6);
        assert!((top_right[1] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn quad_fills_square_window() {
        let m = quad_projection(Viewport::from_physical(512, 512), 0.0);
        assert!(approx(m.transform_point([-1.0, -1.0, 0.0, 1.0]), [-1.0, -1.0, 0.5, 1.0]));
    }

    #[test]
    fn rotated_quad_stays_within_depth_range() {
        for step in 0..16 {
            let m = quad_projection(Viewport::from_physical(800, 600), step as f32 * 0.4);
            for (x, y) in [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)] {
                let z = m.transform_point([x, y, 0.0, 1.0])[2];
                assert!((0.0..=1.0).contains(&z), "depth {z} out of range");
            }
        }
    }

    #[test]
    fn minimized_window_does_not_produce_nan() {
        let m = quad_projection(Viewport::from_physical(0, 0), 0.0);
        assert!(m.cols.iter().flatten().all(|v| v.is_finite()));
    }
}
