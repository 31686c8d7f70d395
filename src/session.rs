use std::error::Error;

use sculpt_brush::{BrushSet, BrushVariant, StrokeStats};
use sculpt_field::{
    AggregateOptions, GridError, NoiseParams, NoiseSource, PerlinNoise, Voxel, VoxelGrid,
};
use sculpt_geom::{GridMapping, Segment};
use sculpt_march::{ContourAlgorithm, ContourSettings};

use crate::config::SessionConfig;

/// What happens to cell values after an edit.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ValueMode {
    /// Values stay as the brush or the noise wrote them.
    #[default]
    Raw,
    /// Values are rebuilt from neighbourhood occupancy after every edit.
    Aggregated(AggregateOptions),
}

/// A grid being sculpted, with its contour kept in sync.
///
/// Every mutating call re-derives values (in aggregated mode) and rebuilds
/// the segment list before returning.
#[derive(Clone, Debug)]
pub struct EditSession {
    grid: VoxelGrid,
    mapping: GridMapping,
    noise: NoiseParams,
    brushes: BrushSet,
    active: BrushVariant,
    mode: ValueMode,
    contour: ContourSettings,
    segments: Vec<Segment>,
}

impl EditSession {
    /// Empty (all air) session with default noise, brushes and contour settings.
    pub fn new(width: i32, height: i32, block_size: i32) -> Result<Self, GridError> {
        let grid = VoxelGrid::new(width, height)?;
        Ok(Self {
            grid,
            mapping: GridMapping::new(block_size),
            noise: NoiseParams::default(),
            brushes: BrushSet::default(),
            active: BrushVariant::default(),
            mode: ValueMode::default(),
            contour: ContourSettings::default(),
            segments: Vec::new(),
        })
    }

    /// Build from a session file and fill the grid from its noise table.
    pub fn from_config(cfg: &SessionConfig) -> Result<Self, Box<dyn Error>> {
        let mut session = Self::new(cfg.grid.width, cfg.grid.height, cfg.grid.block_size)?;
        session.noise = cfg.noise.to_params();
        session.brushes = cfg.brushes.to_brush_set()?;
        session.mode = match cfg.field.to_options() {
            Some(opts) => ValueMode::Aggregated(opts),
            None => ValueMode::Raw,
        };
        session.contour = cfg.contour.to_settings();
        let noise = PerlinNoise::from_params(&session.noise);
        session.regenerate_with(&noise);
        Ok(session)
    }

    #[inline]
    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    #[inline]
    pub fn mapping(&self) -> &GridMapping {
        &self.mapping
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn noise_params(&self) -> &NoiseParams {
        &self.noise
    }

    #[inline]
    pub fn value_mode(&self) -> ValueMode {
        self.mode
    }

    #[inline]
    pub fn contour_settings(&self) -> &ContourSettings {
        &self.contour
    }

    pub fn brushes(&self) -> &BrushSet {
        &self.brushes
    }

    /// Brush parameters can be tuned between strokes.
    pub fn brushes_mut(&mut self) -> &mut BrushSet {
        &mut self.brushes
    }

    pub fn active_brush(&self) -> BrushVariant {
        self.active
    }

    pub fn select_brush(&mut self, variant: BrushVariant) {
        if self.active != variant {
            log::debug!(target: "session", "brush {:?} -> {:?}", self.active, variant);
        }
        self.active = variant;
    }

    pub fn get_voxel(&self, x: i32, y: i32) -> Voxel {
        self.grid.get(x, y)
    }

    /// Refill the grid from Perlin noise with new parameters.
    pub fn regenerate(&mut self, seed: i32, zoom: f64, octaves: i32) {
        self.noise.seed = seed;
        self.noise.zoom = zoom;
        self.noise.octaves = octaves;
        let noise = PerlinNoise::from_params(&self.noise);
        self.regenerate_with(&noise);
    }

    /// Refill the grid from any scalar source using the stored noise params.
    pub fn regenerate_with(&mut self, noise: &impl NoiseSource) {
        sculpt_field::regenerate(&mut self.grid, noise, &self.noise);
        log::info!(
            target: "session",
            "regenerated seed={} zoom={} octaves={} solid={}",
            self.noise.seed,
            self.noise.zoom,
            self.noise.octaves,
            self.grid.solid_count()
        );
        self.refresh();
    }

    /// Stroke `variant` centred on grid cell `(cx, cy)`.
    pub fn apply_brush(&mut self, variant: BrushVariant, cx: i32, cy: i32) -> StrokeStats {
        self.select_brush(variant);
        let stats = self.brushes.get(variant).apply(&mut self.grid, cx, cy);
        log::debug!(
            target: "session",
            "{} stroke at ({}, {}) touched={}",
            variant.name(),
            cx,
            cy,
            stats.touched
        );
        self.refresh();
        stats
    }

    /// Stroke at a world position, snapped to the cell containing it.
    pub fn apply_brush_world(&mut self, variant: BrushVariant, wx: f32, wy: f32) -> StrokeStats {
        let (cx, cy) = self.mapping.to_grid(wx, wy);
        self.apply_brush(variant, cx, cy)
    }

    /// Hard edit of the cell under a world position. Returns false when the
    /// position is outside the grid.
    pub fn set_block_world(&mut self, wx: f32, wy: f32, solid: bool) -> bool {
        let (x, y) = self.mapping.to_grid(wx, wy);
        if !self.grid.contains(x, y) {
            return false;
        }
        self.grid.set_block(x, y, solid);
        log::debug!(target: "session", "block ({}, {}) solid={}", x, y, solid);
        self.refresh();
        true
    }

    /// Switch the value mode and re-derive values and contour under it.
    pub fn recompute_values(&mut self, mode: ValueMode) {
        self.mode = mode;
        self.refresh();
    }

    /// Rebuild the contour with new settings. The interpolation method is
    /// left as configured.
    pub fn extract_contour(
        &mut self,
        algorithm: ContourAlgorithm,
        threshold: f64,
        interpolate: bool,
    ) -> &[Segment] {
        self.contour.algorithm = algorithm;
        self.contour.threshold = threshold;
        self.contour.interpolate = interpolate;
        self.rebuild_segments();
        &self.segments
    }

    pub fn set_contour_settings(&mut self, settings: ContourSettings) {
        self.contour = settings;
        self.rebuild_segments();
    }

    fn refresh(&mut self) {
        if let ValueMode::Aggregated(opts) = self.mode {
            sculpt_field::recompute_values(&mut self.grid, opts);
        }
        self.rebuild_segments();
    }

    fn rebuild_segments(&mut self) {
        self.segments = sculpt_march::extract_contour(&self.grid, &self.mapping, &self.contour);
    }
}
