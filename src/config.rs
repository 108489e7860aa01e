use crate::constants::{MAX_PIXEL_RATIO, PARTICLE_COUNT};
use crate::field::{ParticleField, Palette};

/// Runtime options for a mounted starfield.
#[derive(Clone, Debug, PartialEq)]
pub struct StarfieldConfig {
    pub particle_count: usize,
    /// Fixed seed for a reproducible field; `None` draws from entropy.
    pub seed: Option<u64>,
    pub max_pixel_ratio: f64,
    pub palette: Palette,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            seed: None,
            max_pixel_ratio: MAX_PIXEL_RATIO,
            palette: Palette::default(),
        }
    }
}

impl StarfieldConfig {
    pub fn with_particle_count(mut self, particle_count: usize) -> Self {
        self.particle_count = particle_count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_pixel_ratio(mut self, ratio: f64) -> Self {
        self.max_pixel_ratio = ratio;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    #[inline]
    pub fn pixel_ratio(&self, device_pixel_ratio: f64) -> f64 {
        device_pixel_ratio.min(self.max_pixel_ratio)
    }

    pub fn build_field(&self) -> ParticleField {
        match self.seed {
            Some(seed) => ParticleField::from_seed(self.particle_count, &self.palette, seed),
            None => ParticleField::from_entropy(self.particle_count, &self.palette),
        }
    }
}
