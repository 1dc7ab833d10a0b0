//! Homogeneous affine transforms for 3D and 4D space
//!
//! A [`Transform<S>`] is an SxS matrix acting on (S-1)-dimensional points in
//! homogeneous form. Two sizes are used:
//! - [`Transform3D`] (4x4) for the 3D viewer
//! - [`Transform4D`] (5x5) for the 4D viewer
//!
//! # Convention
//! Storage is `m[row][col]` and vectors are columns: a point `p` maps to
//! `M * [p, 1]`. The translation lives in the last column and the last row stays
//! `[0, ..., 0, 1]` for every transform built through this API.
//!
//! `a.multiply(&b)` is `a * b`, so `b` is applied first:
//! `(a * b) * v == a * (b * v)`. Keep this order; swapping the operands silently
//! changes how rotations compose.

use crate::{RotationPlane, TransformError, Vec4};

/// (S-1)-dimensional homogeneous affine transform
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform<const S: usize> {
    m: [[f32; S]; S],
}

/// 4x4 transform for 3D homogeneous coordinates
pub type Transform3D = Transform<4>;

/// 5x5 transform for 4D homogeneous coordinates
pub type Transform4D = Transform<5>;

impl<const S: usize> Default for Transform<S> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<const S: usize> Transform<S> {
    /// Number of spatial dimensions (3 for a 4x4, 4 for a 5x5)
    pub const DIM: usize = S - 1;

    /// The multiplicative identity
    pub fn identity() -> Self {
        let mut m = [[0.0f32; S]; S];
        for (i, row) in m.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Self { m }
    }

    /// Build from explicit rows
    ///
    /// The caller is responsible for keeping the last row `[0, ..., 0, 1]`;
    /// see [`Transform::is_affine`].
    pub const fn from_rows(m: [[f32; S]; S]) -> Self {
        Self { m }
    }

    /// Row-major view of the matrix
    #[inline]
    pub fn rows(&self) -> &[[f32; S]; S] {
        &self.m
    }

    /// Element at (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.m[row][col]
    }

    /// Column-major copy of the matrix (WGSL/GL uniform layout)
    pub fn to_cols_array_2d(&self) -> [[f32; S]; S] {
        self.transpose().m
    }

    /// Transpose
    pub fn transpose(&self) -> Self {
        let mut m = [[0.0f32; S]; S];
        for (i, row) in self.m.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                m[j][i] = *value;
            }
        }
        Self { m }
    }

    /// Matrix product `self * other` (`other` is applied first)
    #[allow(clippy::needless_range_loop)]
    pub fn multiply(&self, other: &Self) -> Self {
        let mut m = [[0.0f32; S]; S];

        for i in 0..S {
            for j in 0..S {
                for k in 0..S {
                    m[i][j] += self.m[i][k] * other.m[k][j];
                }
            }
        }

        Self { m }
    }

    /// In-place form of [`Transform::multiply`]: `self = self * other`
    pub fn multiply_assign(&mut self, other: &Self) {
        *self = self.multiply(other);
    }

    /// Scale each spatial axis: `self * diag(factors, 1)`
    ///
    /// The homogeneous column is left untouched.
    pub fn scaled(&self, factors: &[f32]) -> Result<Self, TransformError> {
        Self::check_len(factors)?;

        let mut m = self.m;
        for row in m.iter_mut() {
            for (value, factor) in row.iter_mut().zip(factors) {
                *value *= factor;
            }
        }

        Ok(Self { m })
    }

    /// In-place form of [`Transform::scaled`]
    pub fn scale(&mut self, factors: &[f32]) -> Result<(), TransformError> {
        *self = self.scaled(factors)?;
        Ok(())
    }

    /// Scale every spatial axis by the same factor
    pub fn scaled_uniform(&self, factor: f32) -> Self {
        let mut m = self.m;
        for row in m.iter_mut() {
            for value in row.iter_mut().take(Self::DIM) {
                *value *= factor;
            }
        }
        Self { m }
    }

    /// Translate by `offset` expressed in this transform's frame: `self * T(offset)`
    ///
    /// The last column gains the linear columns weighted by the offset.
    pub fn translated(&self, offset: &[f32]) -> Result<Self, TransformError> {
        Self::check_len(offset)?;

        let mut m = self.m;
        let last = S - 1;
        for row in m.iter_mut() {
            let shift: f32 = row[..last].iter().zip(offset).map(|(a, t)| a * t).sum();
            row[last] += shift;
        }

        Ok(Self { m })
    }

    /// In-place form of [`Transform::translated`]; produces the same matrix
    pub fn translate(&mut self, offset: &[f32]) -> Result<(), TransformError> {
        *self = self.translated(offset)?;
        Ok(())
    }

    /// Rotation by `radians` in `plane`
    ///
    /// Identity everywhere except a `[[cos, -sin], [sin, cos]]` block at the
    /// plane's two axes. Planes that use an axis this transform does not have
    /// are rejected.
    pub fn rotation(plane: RotationPlane, radians: f32) -> Result<Self, TransformError> {
        let (a, b) = plane.indices();
        if b >= Self::DIM {
            return Err(TransformError::PlaneOutOfRank { plane, rank: Self::DIM });
        }

        let (sn, cs) = radians.sin_cos();
        let mut m = Self::identity().m;
        m[a][a] = cs;
        m[a][b] = -sn;
        m[b][a] = sn;
        m[b][b] = cs;

        Ok(Self { m })
    }

    /// Apply to a homogeneous column vector
    #[allow(clippy::needless_range_loop)]
    pub fn apply(&self, v: [f32; S]) -> [f32; S] {
        let mut out = [0.0f32; S];
        for i in 0..S {
            for j in 0..S {
                out[i] += self.m[i][j] * v[j];
            }
        }
        out
    }

    /// Whether the last row is exactly `[0, ..., 0, 1]`
    pub fn is_affine(&self) -> bool {
        let last = &self.m[S - 1];
        last[..S - 1].iter().all(|v| *v == 0.0) && last[S - 1] == 1.0
    }

    /// Element-wise comparison within `epsilon`
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// Pull the linear block back to an orthonormal basis
    ///
    /// Modified Gram-Schmidt over the spatial columns. Repeated incremental
    /// rotations drift away from orthogonality; this is a best-effort correction
    /// for rotation-only transforms. Translation is left alone.
    #[allow(clippy::needless_range_loop)]
    pub fn reorthonormalize(&mut self) {
        let n = Self::DIM;
        for c in 0..n {
            for k in 0..c {
                let mut dot = 0.0f32;
                for r in 0..n {
                    dot += self.m[r][c] * self.m[r][k];
                }
                for r in 0..n {
                    self.m[r][c] -= dot * self.m[r][k];
                }
            }

            let mut len_sq = 0.0f32;
            for r in 0..n {
                len_sq += self.m[r][c] * self.m[r][c];
            }
            let len = len_sq.sqrt();
            if len > f32::EPSILON {
                for r in 0..n {
                    self.m[r][c] /= len;
                }
            }
        }
    }

    fn check_len(v: &[f32]) -> Result<(), TransformError> {
        if v.len() == Self::DIM {
            Ok(())
        } else {
            Err(TransformError::DimensionMismatch {
                expected: Self::DIM,
                actual: v.len(),
            })
        }
    }
}

impl Transform<5> {
    /// Map a 4D point through the affine transform (homogeneous 1 dropped)
    pub fn transform_point(&self, p: Vec4) -> Vec4 {
        let out = self.apply(p.to_homogeneous());
        Vec4::new(out[0], out[1], out[2], out[3])
    }
}

impl Transform<4> {
    /// Map a 3D point through the affine transform (homogeneous 1 dropped)
    pub fn transform_point(&self, p: [f32; 3]) -> [f32; 3] {
        let out = self.apply([p[0], p[1], p[2], 1.0]);
        [out[0], out[1], out[2]]
    }
}

impl<const S: usize> std::ops::Mul for Transform<S> {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        self.multiply(&other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Small deterministic LCG so the angle sweep needs no extra crates
    fn angles() -> Vec<f32> {
        let mut state: u32 = 0x2545_f491;
        let mut out = vec![0.0, FRAC_PI_4, FRAC_PI_2, PI, -FRAC_PI_2, 7.5];
        for _ in 0..16 {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            out.push((state as f32 / u32::MAX as f32) * 4.0 * PI - 2.0 * PI);
        }
        out
    }

    #[test]
    fn test_identity() {
        let id = Transform4D::identity();
        let p = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(id.transform_point(p), p);
        assert!(id.is_affine());
        assert_eq!(Transform3D::default(), Transform3D::identity());
    }

    #[test]
    fn test_multiply_applies_right_operand_first() {
        let rot = Transform4D::rotation(RotationPlane::XY, FRAC_PI_2).unwrap();
        let shift = Transform4D::identity().translated(&[1.0, 0.0, 0.0, 0.0]).unwrap();

        // rot * shift: move along X first, then rotate X onto Y
        let p = rot.multiply(&shift).transform_point(Vec4::ZERO);
        assert!(approx_eq(p.x, 0.0) && approx_eq(p.y, 1.0), "got {:?}", p);

        // shift * rot: rotate the origin (no-op), then move along X
        let p = shift.multiply(&rot).transform_point(Vec4::ZERO);
        assert!(approx_eq(p.x, 1.0) && approx_eq(p.y, 0.0), "got {:?}", p);

        assert_eq!(rot * shift, rot.multiply(&shift));
    }

    #[test]
    fn test_multiply_assign_matches_multiply() {
        let a = Transform4D::rotation(RotationPlane::ZW, 0.3).unwrap();
        let b = Transform4D::rotation(RotationPlane::XZ, -1.1).unwrap();
        let mut c = a;
        c.multiply_assign(&b);
        assert_eq!(c, a.multiply(&b));
    }

    #[test]
    fn test_scale_leaves_homogeneous_column() {
        let base = Transform4D::identity().translated(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        let scaled = base.scaled(&[2.0, 3.0, 4.0, 5.0]).unwrap();

        for i in 0..4 {
            assert_eq!(scaled.get(i, 4), base.get(i, 4));
        }
        assert_eq!(scaled.get(0, 0), 2.0);
        assert_eq!(scaled.get(3, 3), 5.0);
        assert!(scaled.is_affine());

        let uniform = base.scaled_uniform(2.0);
        assert_eq!(uniform, base.scaled(&[2.0; 4]).unwrap());
    }

    #[test]
    fn test_translate_in_place_matches_pure() {
        let base = Transform4D::rotation(RotationPlane::YW, 0.7)
            .unwrap()
            .scaled(&[1.5, 0.5, 2.0, 1.0])
            .unwrap();
        let offset = [0.25, -1.0, 3.0, -5.0];

        let pure = base.translated(&offset).unwrap();
        let mut in_place = base;
        in_place.translate(&offset).unwrap();

        assert_eq!(pure, in_place, "aliased and non-aliased translate must agree");
        assert!(pure.is_affine());
    }

    #[test]
    fn test_translate_is_in_local_frame() {
        let rot = Transform3D::rotation(RotationPlane::XY, FRAC_PI_2).unwrap();
        let moved = rot.translated(&[1.0, 0.0, 0.0]).unwrap();
        let p = moved.transform_point([0.0, 0.0, 0.0]);
        // Local +X is world +Y after the rotation
        assert!(approx_eq(p[0], 0.0) && approx_eq(p[1], 1.0), "got {:?}", p);
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = Transform4D::identity().translated(&[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, TransformError::DimensionMismatch { expected: 4, actual: 3 });

        let err = Transform3D::identity().scaled(&[1.0; 4]).unwrap_err();
        assert_eq!(err, TransformError::DimensionMismatch { expected: 3, actual: 4 });
    }

    #[test]
    fn test_rotation_block_placement() {
        let m = Transform4D::rotation(RotationPlane::XW, FRAC_PI_2).unwrap();
        // Positive angle turns X toward W
        let p = m.transform_point(Vec4::new(1.0, 0.0, 0.0, 0.0));
        assert!(approx_eq(p.w, 1.0) && approx_eq(p.x, 0.0), "got {:?}", p);
        // Everything outside the block is identity
        assert_eq!(m.get(1, 1), 1.0);
        assert_eq!(m.get(2, 2), 1.0);
        assert_eq!(m.get(4, 4), 1.0);
        assert_eq!(m.get(1, 3), 0.0);
    }

    #[test]
    fn test_rotations_are_orthogonal() {
        for plane in RotationPlane::ALL {
            for theta in angles() {
                let r = Transform4D::rotation(plane, theta).unwrap();
                let rtr = r.transpose().multiply(&r);
                assert!(
                    rtr.approx_eq(&Transform4D::identity(), EPSILON),
                    "R^T R != I for {} at {}", plane, theta
                );
                assert!(r.is_affine());
            }
        }
    }

    #[test]
    fn test_3d_rotations_are_orthogonal() {
        for plane in RotationPlane::ALL.into_iter().filter(|p| !p.involves_w()) {
            for theta in angles() {
                let r = Transform3D::rotation(plane, theta).unwrap();
                let rtr = r.transpose().multiply(&r);
                assert!(rtr.approx_eq(&Transform3D::identity(), EPSILON));
            }
        }
    }

    #[test]
    fn test_w_planes_rejected_in_3d() {
        for plane in [RotationPlane::XW, RotationPlane::YW, RotationPlane::ZW] {
            let err = Transform3D::rotation(plane, 0.5).unwrap_err();
            assert_eq!(err, TransformError::PlaneOutOfRank { plane, rank: 3 });
        }
    }

    #[test]
    fn test_same_plane_angles_add() {
        for plane in RotationPlane::ALL {
            let a = Transform4D::rotation(plane, 0.4).unwrap();
            let b = Transform4D::rotation(plane, 0.9).unwrap();
            let direct = Transform4D::rotation(plane, 1.3).unwrap();
            assert!(a.multiply(&b).approx_eq(&direct, EPSILON), "{} should add angles", plane);
        }
    }

    #[test]
    fn test_different_planes_do_not_commute() {
        let a = Transform4D::rotation(RotationPlane::XY, FRAC_PI_2).unwrap();
        let b = Transform4D::rotation(RotationPlane::XZ, FRAC_PI_2).unwrap();
        assert!(!a.multiply(&b).approx_eq(&b.multiply(&a), EPSILON));
    }

    #[test]
    fn test_to_cols_array_2d_is_transpose() {
        let m = Transform3D::identity().translated(&[1.0, 2.0, 3.0]).unwrap();
        let cols = m.to_cols_array_2d();
        // Translation is the last column, so it becomes the last array
        assert_eq!(cols[3], [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn test_reorthonormalize_repairs_drift() {
        let mut drifted = Transform4D::identity();
        let step = Transform4D::rotation(RotationPlane::XW, 0.01).unwrap();
        let other = Transform4D::rotation(RotationPlane::YZ, 0.013).unwrap();
        for _ in 0..500 {
            drifted = step.multiply(&drifted);
            drifted = other.multiply(&drifted);
        }
        // Inject visible skew on top of the accumulated error
        let mut rows = *drifted.rows();
        rows[0][0] *= 1.01;
        rows[1][0] += 0.02;
        let mut skewed = Transform4D::from_rows(rows);

        skewed.reorthonormalize();
        let rtr = skewed.transpose().multiply(&skewed);
        assert!(rtr.approx_eq(&Transform4D::identity(), EPSILON));
    }

    #[test]
    fn test_reorthonormalize_keeps_rotation() {
        let r = Transform4D::rotation(RotationPlane::YW, 1.2).unwrap();
        let mut fixed = r;
        fixed.reorthonormalize();
        assert!(fixed.approx_eq(&r, EPSILON));
    }

    #[test]
    fn test_end_to_end_model_view() {
        let view = Transform4D::identity()
            .multiply(&Transform4D::rotation(RotationPlane::XY, FRAC_PI_2).unwrap());

        let model_view = Transform4D::identity()
            .translated(&[0.0, 0.0, 0.0, -5.0])
            .unwrap()
            .multiply(&view)
            .scaled(&[1.0, 1.0, 1.0, 1.0])
            .unwrap();

        assert!(approx_eq(model_view.get(0, 0), 0.0));
        assert!(approx_eq(model_view.get(0, 1), -1.0));
        assert!(approx_eq(model_view.get(1, 0), 1.0));
        assert!(approx_eq(model_view.get(1, 1), 0.0));
        assert_eq!(model_view.rows()[4], [0.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(model_view.get(3, 4), -5.0);
    }
}
