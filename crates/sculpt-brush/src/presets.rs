use std::str::FromStr;

use crate::{BlendPolicy, Brush, BrushError};

/// The three brushes an editing session keeps around.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BrushVariant {
    #[default]
    Placing,
    Additive,
    /// Overwrite with zero strength and no falloff ring.
    Deleting,
}

impl BrushVariant {
    pub const ALL: [BrushVariant; 3] = [
        BrushVariant::Placing,
        BrushVariant::Additive,
        BrushVariant::Deleting,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BrushVariant::Placing => "placing",
            BrushVariant::Additive => "additive",
            BrushVariant::Deleting => "deleting",
        }
    }

    pub fn policy(self) -> BlendPolicy {
        match self {
            BrushVariant::Additive => BlendPolicy::Additive,
            BrushVariant::Placing | BrushVariant::Deleting => BlendPolicy::Overwrite,
        }
    }

    /// Default brush for this variant.
    pub fn preset(self) -> Brush {
        let (size, strength, start_falloff, falloff_percent) = match self {
            BrushVariant::Placing => (4, 0.5, 0.5, 0.1),
            BrushVariant::Additive => (4, 0.12, 0.5, 0.1),
            BrushVariant::Deleting => (4, 0.0, 1.0, 0.0),
        };
        let mut brush = Brush {
            size,
            strength,
            start_falloff: 0.0,
            falloff_percent,
            inner_radius: 0,
            policy: self.policy(),
        };
        brush.set_start_falloff(start_falloff);
        brush
    }
}

impl FromStr for BrushVariant {
    type Err = BrushError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "placing" | "place" | "p" => Ok(BrushVariant::Placing),
            "additive" | "add" | "a" => Ok(BrushVariant::Additive),
            "deleting" | "delete" | "erase" | "e" => Ok(BrushVariant::Deleting),
            _ => Err(BrushError::UnknownVariant(s.to_string())),
        }
    }
}

/// One live brush per variant.
#[derive(Clone, Debug, PartialEq)]
pub struct BrushSet {
    placing: Brush,
    additive: Brush,
    deleting: Brush,
}

impl Default for BrushSet {
    fn default() -> Self {
        Self {
            placing: BrushVariant::Placing.preset(),
            additive: BrushVariant::Additive.preset(),
            deleting: BrushVariant::Deleting.preset(),
        }
    }
}

impl BrushSet {
    pub fn get(&self, variant: BrushVariant) -> &Brush {
        match variant {
            BrushVariant::Placing => &self.placing,
            BrushVariant::Additive => &self.additive,
            BrushVariant::Deleting => &self.deleting,
        }
    }

    pub fn get_mut(&mut self, variant: BrushVariant) -> &mut Brush {
        match variant {
            BrushVariant::Placing => &mut self.placing,
            BrushVariant::Additive => &mut self.additive,
            BrushVariant::Deleting => &mut self.deleting,
        }
    }

    /// Replace the brush of `variant`; the variant's blend policy wins.
    pub fn replace(&mut self, variant: BrushVariant, brush: Brush) {
        let mut brush = brush;
        brush.policy = variant.policy();
        *self.get_mut(variant) = brush;
    }
}
