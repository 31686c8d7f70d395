use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

use sculpt_brush::{Brush, BrushError, BrushSet, BrushVariant};
use sculpt_field::{FieldSection, GridSection, NoiseSection};
use sculpt_march::{ContourAlgorithm, ContourSettings, InterpolationMethod};

/// Everything a session file can set. Missing tables fall back to the
/// defaults of the interactive editor.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub grid: GridSection,
    #[serde(default)]
    pub noise: NoiseSection,
    #[serde(default)]
    pub field: FieldSection,
    #[serde(default)]
    pub contour: ContourSection,
    #[serde(default)]
    pub brushes: BrushesSection,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmKind {
    Marching,
    Blocky,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlacementKind {
    Threshold,
    Solid,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ContourSection {
    #[serde(default = "default_algorithm")]
    pub algorithm: AlgorithmKind,
    #[serde(default)]
    pub threshold: f64,
    #[serde(default)]
    pub interpolate: bool,
    #[serde(default = "default_placement")]
    pub placement: PlacementKind,
}
fn default_algorithm() -> AlgorithmKind {
    AlgorithmKind::Marching
}
fn default_placement() -> PlacementKind {
    PlacementKind::Threshold
}
impl Default for ContourSection {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            threshold: 0.0,
            interpolate: false,
            placement: default_placement(),
        }
    }
}

impl ContourSection {
    pub fn to_settings(&self) -> ContourSettings {
        ContourSettings {
            algorithm: match self.algorithm {
                AlgorithmKind::Marching => ContourAlgorithm::MarchingSquares,
                AlgorithmKind::Blocky => ContourAlgorithm::Blocky,
            },
            threshold: self.threshold,
            interpolate: self.interpolate,
            method: match self.placement {
                PlacementKind::Threshold => InterpolationMethod::Threshold,
                PlacementKind::Solid => InterpolationMethod::SolidAnchored,
            },
        }
    }
}

/// Per-field overrides on top of a brush preset.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BrushOverride {
    pub size: Option<i32>,
    pub strength: Option<f64>,
    pub start_falloff: Option<f64>,
    pub falloff_percent: Option<f64>,
}

impl BrushOverride {
    pub fn apply_to(&self, variant: BrushVariant) -> Result<Brush, BrushError> {
        let preset = variant.preset();
        Brush::new(
            self.size.unwrap_or(preset.size()),
            self.strength.unwrap_or(preset.strength()),
            self.start_falloff.unwrap_or(preset.start_falloff()),
            self.falloff_percent.unwrap_or(preset.falloff_percent()),
            preset.policy(),
        )
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct BrushesSection {
    #[serde(default)]
    pub placing: BrushOverride,
    #[serde(default)]
    pub additive: BrushOverride,
    #[serde(default)]
    pub deleting: BrushOverride,
}

impl BrushesSection {
    pub fn get(&self, variant: BrushVariant) -> &BrushOverride {
        match variant {
            BrushVariant::Placing => &self.placing,
            BrushVariant::Additive => &self.additive,
            BrushVariant::Deleting => &self.deleting,
        }
    }

    pub fn to_brush_set(&self) -> Result<BrushSet, BrushError> {
        let mut set = BrushSet::default();
        for variant in BrushVariant::ALL {
            set.replace(variant, self.get(variant).apply_to(variant)?);
        }
        Ok(set)
    }
}

impl SessionConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: SessionConfig = toml::from_str(toml_str)?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}
