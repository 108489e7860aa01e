//! Procedural particle field.
//!
//! Positions fill an anisotropic box centred at the origin and colors are
//! drawn from a three-entry palette. The field is generated once and never
//! mutated; only the transform of the whole cloud changes per frame.

use crate::constants::{
    COLOR_CYAN, COLOR_LOWER_THRESHOLD, COLOR_PURPLE, COLOR_UPPER_THRESHOLD, COLOR_WHITE, SPAN_X,
    SPAN_Y, SPAN_Z,
};
use glam::Vec3;
use rand::prelude::*;

/// Three palette entries selected by fixed thresholds on a uniform sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Picked when `c > COLOR_UPPER_THRESHOLD`.
    pub upper: [f32; 3],
    /// Picked when `COLOR_LOWER_THRESHOLD < c <= COLOR_UPPER_THRESHOLD`.
    pub middle: [f32; 3],
    /// Picked otherwise.
    pub lower: [f32; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            upper: COLOR_WHITE,
            middle: COLOR_CYAN,
            lower: COLOR_PURPLE,
        }
    }
}

impl Palette {
    /// Map a sample in `[0, 1)` to a palette color.
    ///
    /// Yields roughly 40/30/30 for uniform input.
    #[inline]
    pub fn pick(&self, c: f32) -> [f32; 3] {
        if c > COLOR_UPPER_THRESHOLD {
            self.upper
        } else if c > COLOR_LOWER_THRESHOLD {
            self.middle
        } else {
            self.lower
        }
    }

    pub fn entries(&self) -> [[f32; 3]; 3] {
        [self.upper, self.middle, self.lower]
    }
}

/// Interleaved per-star record uploaded as an instance buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StarVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Immutable set of star positions and colors, stored as flat `xyz`/`rgb`
/// arrays of length `3 * len`.
#[derive(Clone, Debug)]
pub struct ParticleField {
    positions: Vec<f32>,
    colors: Vec<f32>,
}

impl ParticleField {
    pub fn generate<R: Rng + ?Sized>(count: usize, palette: &Palette, rng: &mut R) -> Self {
        let mut positions = Vec::with_capacity(count * 3);
        let mut colors = Vec::with_capacity(count * 3);
        let spans = [SPAN_X, SPAN_Y, SPAN_Z];
        for _ in 0..count {
            for span in spans {
                positions.push((rng.gen::<f32>() - 0.5) * span);
            }
            colors.extend_from_slice(&palette.pick(rng.gen::<f32>()));
        }
        Self { positions, colors }
    }

    /// Reproducible field for a given seed.
    pub fn from_seed(count: usize, palette: &Palette, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate(count, palette, &mut rng)
    }

    pub fn from_entropy(count: usize, palette: &Palette) -> Self {
        let mut rng = StdRng::from_entropy();
        Self::generate(count, palette, &mut rng)
    }

    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn position(&self, i: usize) -> Option<Vec3> {
        self.positions
            .get(i * 3..i * 3 + 3)
            .map(Vec3::from_slice)
    }

    pub fn color(&self, i: usize) -> Option<[f32; 3]> {
        self.colors
            .get(i * 3..i * 3 + 3)
            .map(|c| [c[0], c[1], c[2]])
    }

    pub fn vertices(&self) -> Vec<StarVertex> {
        self.positions
            .chunks_exact(3)
            .zip(self.colors.chunks_exact(3))
            .map(|(p, c)| StarVertex {
                position: [p[0], p[1], p[2]],
                color: [c[0], c[1], c[2]],
            })
            .collect()
    }
}
