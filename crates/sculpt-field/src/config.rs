//! `[grid]`, `[noise]` and `[field]` tables of a session file. The
//! session loader embeds these sections as they are.

use serde::Deserialize;

use crate::aggregate::{AggregateOptions, AggregationWindow};
use crate::noise::{FillMode, NoiseParams};

#[derive(Clone, Debug, Deserialize)]
pub struct GridSection {
    #[serde(default = "default_grid_dim")]
    pub width: i32,
    #[serde(default = "default_grid_dim")]
    pub height: i32,
    #[serde(default = "default_block_size")]
    pub block_size: i32,
}
fn default_grid_dim() -> i32 {
    165
}
fn default_block_size() -> i32 {
    25
}
impl Default for GridSection {
    fn default() -> Self {
        Self {
            width: default_grid_dim(),
            height: default_grid_dim(),
            block_size: default_block_size(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FillKind {
    Raw,
    Binary,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NoiseSection {
    #[serde(default)]
    pub seed: i32,
    #[serde(default = "default_zoom")]
    pub zoom: f64,
    #[serde(default = "default_octaves")]
    pub octaves: i32,
    #[serde(default)]
    pub solid_below: f64,
    #[serde(default = "default_fill")]
    pub fill: FillKind,
    #[serde(default = "default_solid_value")]
    pub solid_value: f64,
}
fn default_zoom() -> f64 {
    20.0
}
fn default_octaves() -> i32 {
    2
}
fn default_fill() -> FillKind {
    FillKind::Binary
}
fn default_solid_value() -> f64 {
    0.8
}
impl Default for NoiseSection {
    fn default() -> Self {
        Self {
            seed: 0,
            zoom: default_zoom(),
            octaves: default_octaves(),
            solid_below: 0.0,
            fill: default_fill(),
            solid_value: default_solid_value(),
        }
    }
}

impl NoiseSection {
    pub fn to_params(&self) -> NoiseParams {
        NoiseParams {
            seed: self.seed,
            zoom: self.zoom,
            octaves: self.octaves,
            solid_below: self.solid_below,
            fill: match self.fill {
                FillKind::Raw => FillMode::Raw,
                FillKind::Binary => FillMode::Binary {
                    solid_value: self.solid_value,
                },
            },
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueModeKind {
    /// Keep values exactly as brushes and regeneration wrote them.
    Raw,
    Full,
    Cheap,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FieldSection {
    #[serde(default = "default_value_mode")]
    pub mode: ValueModeKind,
    #[serde(default = "default_blending")]
    pub blending: i32,
    #[serde(default)]
    pub invert: bool,
}
fn default_value_mode() -> ValueModeKind {
    ValueModeKind::Raw
}
fn default_blending() -> i32 {
    1
}
impl Default for FieldSection {
    fn default() -> Self {
        Self {
            mode: default_value_mode(),
            blending: default_blending(),
            invert: false,
        }
    }
}

impl FieldSection {
    /// `None` for the raw mode.
    pub fn to_options(&self) -> Option<AggregateOptions> {
        let window = match self.mode {
            ValueModeKind::Raw => return None,
            ValueModeKind::Full => AggregationWindow::Full {
                radius: self.blending,
            },
            ValueModeKind::Cheap => AggregationWindow::Cheap,
        };
        Some(AggregateOptions {
            window,
            invert: self.invert,
        })
    }
}
