//! Polytope geometry
//!
//! Line, square, cube and tesseract are the hypercubes of dimension 1 to 4.
//! Vertices use binary counting: bit `k` of the vertex index picks the sign of
//! coordinate `k`. Two vertices share an edge when their indices differ in
//! exactly one bit. Unused coordinates stay at 0, so every polytope lives in
//! the same 4D vertex layout.

use orbit4d_math::Vec4;
use serde::{Serialize, Deserialize};

/// The drawable hypercubes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polytope {
    Line,
    Square,
    Cube,
    Tesseract,
}

impl Polytope {
    /// All polytopes in increasing dimension
    pub const ALL: [Polytope; 4] = [
        Polytope::Line,
        Polytope::Square,
        Polytope::Cube,
        Polytope::Tesseract,
    ];

    /// Number of spatial dimensions the shape spans
    pub const fn dimension(self) -> u32 {
        match self {
            Polytope::Line => 1,
            Polytope::Square => 2,
            Polytope::Cube => 3,
            Polytope::Tesseract => 4,
        }
    }

    /// Whether the shape needs the fourth axis (and so the W rotation planes)
    pub const fn is_4d(self) -> bool {
        matches!(self, Polytope::Tesseract)
    }

    /// 2^dimension
    pub const fn vertex_count(self) -> usize {
        1 << self.dimension()
    }

    /// dimension * 2^(dimension - 1)
    pub const fn edge_count(self) -> usize {
        let d = self.dimension() as usize;
        d << (d - 1)
    }

    /// Number of indices in the line list
    pub const fn index_count(self) -> u32 {
        (self.edge_count() * 2) as u32
    }

    /// Vertices of the shape with the given full side length, centred on the origin
    pub fn vertices(self, size: f32) -> Vec<Vec4> {
        let h = size * 0.5;
        let dim = self.dimension();

        (0..self.vertex_count())
            .map(|i| {
                let mut c = [0.0f32; 4];
                for (k, value) in c.iter_mut().enumerate().take(dim as usize) {
                    *value = if i & (1 << k) != 0 { h } else { -h };
                }
                Vec4::from_array(c)
            })
            .collect()
    }

    /// Edge list as pairs of vertex indices (line-list order)
    pub fn edges(self) -> Vec<[u16; 2]> {
        let n = self.vertex_count();
        let mut edges = Vec::with_capacity(self.edge_count());

        for i in 0..n {
            for k in 0..self.dimension() {
                let j = i | (1 << k);
                if j != i {
                    edges.push([i as u16, j as u16]);
                }
            }
        }

        edges
    }

    /// Flattened line-list indices
    pub fn indices(self) -> Vec<u16> {
        self.edges().into_iter().flatten().collect()
    }
}
