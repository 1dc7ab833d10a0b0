//! Packing a 5x5 model-view into a 4x4 and a 3x3 uniform
//!
//! With `src(r, c)` the 5x5 source:
//! - `upper` is the top-left 4x4 block, `upper[r][c] = src(r, c)` for r, c < 4
//! - `lower` holds the remaining nine entries in this order:
//!   `[src(0,4), src(1,4), src(2,4), src(3,4), src(4,4), src(4,3), src(4,2), src(4,1), src(4,0)]`
//!
//! The two blocks cover all 25 entries, so [`ProjectionSplit::reconstruct`]
//! returns the source bit-for-bit. The shader reads `lower` as a `mat3x3`
//! with slot `k` at column `k / 3`, row `k % 3`.

use orbit4d_math::{Transform4D, Vec4};

/// A 5x5 transform as the (4x4, 3x3) pair the GPU consumes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionSplit {
    /// Row-major upper-left 4x4 block
    pub upper: [[f32; 4]; 4],
    /// Translation column, homogeneous row and corner, in slot order
    pub lower: [f32; 9],
}

impl ProjectionSplit {
    pub fn split(source: &Transform4D) -> Self {
        let m = source.rows();

        let mut upper = [[0.0f32; 4]; 4];
        for (dst, src) in upper.iter_mut().zip(m.iter()) {
            dst.copy_from_slice(&src[..4]);
        }

        let lower = [
            m[0][4], m[1][4], m[2][4], m[3][4],
            m[4][4], m[4][3], m[4][2], m[4][1], m[4][0],
        ];

        Self { upper, lower }
    }

    /// Inverse of [`ProjectionSplit::split`]
    pub fn reconstruct(&self) -> Transform4D {
        let l = &self.lower;
        let mut m = [[0.0f32; 5]; 5];

        for (r, row) in self.upper.iter().enumerate() {
            m[r][..4].copy_from_slice(row);
            m[r][4] = l[r];
        }
        m[4] = [l[8], l[7], l[6], l[5], l[4]];

        Transform4D::from_rows(m)
    }

    /// Evaluate the 5x5 map on `(p, 1)` from the two blocks, as the shader does
    ///
    /// Returns the four spatial outputs followed by the homogeneous one.
    pub fn apply(&self, p: Vec4) -> [f32; 5] {
        let v = p.to_array();
        let l = &self.lower;
        let mut out = [0.0f32; 5];

        for (r, row) in self.upper.iter().enumerate() {
            out[r] = row[0] * v[0] + row[1] * v[1] + row[2] * v[2] + row[3] * v[3] + l[r];
        }
        out[4] = l[8] * v[0] + l[7] * v[1] + l[6] * v[2] + l[5] * v[3] + l[4];

        out
    }

    /// `upper` as a column-major WGSL `mat4x4<f32>`
    pub fn linear_columns(&self) -> [[f32; 4]; 4] {
        let u = &self.upper;
        let mut cols = [[0.0f32; 4]; 4];
        for (c, col) in cols.iter_mut().enumerate() {
            *col = [u[0][c], u[1][c], u[2][c], u[3][c]];
        }
        cols
    }

    /// `lower` as a WGSL `mat3x3<f32>`: three columns padded to `vec4`
    pub fn coupling_columns(&self) -> [[f32; 4]; 3] {
        let mut cols = [[0.0f32; 4]; 3];
        for (k, value) in self.lower.iter().enumerate() {
            cols[k / 3][k % 3] = *value;
        }
        cols
    }

    /// Read the pair back from its GPU layout
    pub fn from_columns(linear: &[[f32; 4]; 4], coupling: &[[f32; 4]; 3]) -> Self {
        let mut upper = [[0.0f32; 4]; 4];
        for (c, col) in linear.iter().enumerate() {
            for (r, value) in col.iter().enumerate() {
                upper[r][c] = *value;
            }
        }

        let mut lower = [0.0f32; 9];
        for (k, slot) in lower.iter_mut().enumerate() {
            *slot = coupling[k / 3][k % 3];
        }

        Self { upper, lower }
    }
}
