use fastnoise_lite::{FastNoiseLite, FractalType, NoiseType};

use crate::grid::VoxelGrid;

/// Scalar field sampled during regeneration.
pub trait NoiseSource {
    fn sample(&self, x: f64, y: f64) -> f64;
}

impl<F> NoiseSource for F
where
    F: Fn(f64, f64) -> f64,
{
    #[inline]
    fn sample(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

/// How a regenerated cell stores its value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FillMode {
    /// Keep the raw noise sample.
    Raw,
    /// `solid_value` for solid cells, 0 for air.
    Binary { solid_value: f64 },
}

impl Default for FillMode {
    fn default() -> Self {
        FillMode::Binary { solid_value: 0.8 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseParams {
    pub seed: i32,
    pub zoom: f64,
    pub octaves: i32,
    /// A cell is solid when its sample is below this.
    pub solid_below: f64,
    pub fill: FillMode,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            seed: 0,
            zoom: 20.0,
            octaves: 2,
            solid_below: 0.0,
            fill: FillMode::default(),
        }
    }
}

/// Perlin FBm noise, sampled in grid units divided by the zoom.
pub struct PerlinNoise {
    inner: FastNoiseLite,
    zoom: f64,
}

impl PerlinNoise {
    pub fn new(seed: i32, zoom: f64, octaves: i32) -> Self {
        let mut inner = FastNoiseLite::with_seed(seed);
        inner.set_noise_type(Some(NoiseType::Perlin));
        inner.set_fractal_type(Some(FractalType::FBm));
        inner.set_fractal_octaves(Some(octaves.max(1)));
        inner.set_frequency(Some(1.0));
        let zoom = if zoom > 0.0 { zoom } else { 1.0 };
        Self { inner, zoom }
    }

    pub fn from_params(params: &NoiseParams) -> Self {
        Self::new(params.seed, params.zoom, params.octaves)
    }
}

impl NoiseSource for PerlinNoise {
    fn sample(&self, x: f64, y: f64) -> f64 {
        let nx = (x / self.zoom) as f32;
        let ny = (y / self.zoom) as f32;
        f64::from(self.inner.get_noise_2d(nx, ny))
    }
}

/// Overwrite every cell from `noise`.
pub fn regenerate(grid: &mut VoxelGrid, noise: &impl NoiseSource, params: &NoiseParams) {
    for v in grid.iter_mut() {
        let sample = noise.sample(f64::from(v.x), f64::from(v.y));
        let solid = sample < params.solid_below;
        v.solid = solid;
        v.value = match params.fill {
            FillMode::Raw => sample,
            FillMode::Binary { solid_value } => {
                if solid {
                    solid_value
                } else {
                    0.0
                }
            }
        };
    }
    log::debug!(
        target: "field",
        "regenerated {}x{} seed={} zoom={} octaves={} solid={}",
        grid.width(),
        grid.height(),
        params.seed,
        params.zoom,
        params.octaves,
        grid.solid_count()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_noise_drives_solidity() {
        let mut g = VoxelGrid::new(4, 4).unwrap();
        let params = NoiseParams::default();
        regenerate(&mut g, &|x: f64, _y: f64| if x < 2.0 { -1.0 } else { 1.0 }, &params);
        for y in 0..4 {
            assert!(g.get(0, y).solid && g.get(1, y).solid);
            assert!(!g.get(2, y).solid && !g.get(3, y).solid);
            assert_eq!(g.get(0, y).value, 0.8);
            assert_eq!(g.get(3, y).value, 0.0);
        }
    }

    #[test]
    fn raw_fill_keeps_samples() {
        let mut g = VoxelGrid::new(3, 2).unwrap();
        let params = NoiseParams {
            fill: FillMode::Raw,
            solid_below: 0.5,
            ..NoiseParams::default()
        };
        regenerate(&mut g, &|x: f64, y: f64| x * 0.25 + y, &params);
        assert_eq!(g.get(2, 1).value, 1.5);
        assert!(g.get(1, 0).solid);
        assert!(!g.get(2, 0).solid);
    }

    #[test]
    fn perlin_is_deterministic_per_seed() {
        let a = PerlinNoise::new(7, 20.0, 2);
        let b = PerlinNoise::new(7, 20.0, 2);
        for i in 0..16 {
            let x = f64::from(i) * 3.0;
            assert_eq!(a.sample(x, x * 0.5), b.sample(x, x * 0.5));
        }
    }

    #[test]
    fn perlin_tolerates_zero_zoom() {
        let n = PerlinNoise::new(1, 0.0, 0);
        assert!(n.sample(3.0, 4.0).is_finite());
    }
}
