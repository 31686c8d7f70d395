use std::fmt;
use std::str::FromStr;

use sculpt_brush::{BrushError, BrushVariant};

/// One brush application in grid cells, written `variant:x,y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stroke {
    pub variant: BrushVariant,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, PartialEq, Eq)]
pub enum StrokeParseError {
    MissingColon(String),
    BadCoordinates(String),
    Variant(BrushError),
}

impl fmt::Display for StrokeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrokeParseError::MissingColon(s) => {
                write!(f, "expected VARIANT:X,Y, got {:?}", s)
            }
            StrokeParseError::BadCoordinates(s) => write!(f, "bad stroke coordinates {:?}", s),
            StrokeParseError::Variant(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for StrokeParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StrokeParseError::Variant(e) => Some(e),
            _ => None,
        }
    }
}

impl FromStr for Stroke {
    type Err = StrokeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, coords) = s
            .split_once(':')
            .ok_or_else(|| StrokeParseError::MissingColon(s.to_string()))?;
        let variant = name.trim().parse().map_err(StrokeParseError::Variant)?;
        let bad = || StrokeParseError::BadCoordinates(coords.to_string());
        let (x, y) = coords.split_once(',').ok_or_else(bad)?;
        let x = x.trim().parse().map_err(|_| bad())?;
        let y = y.trim().parse().map_err(|_| bad())?;
        Ok(Stroke { variant, x, y })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_variant_and_cell() {
        assert_eq!(
            "placing:12,-3".parse::<Stroke>(),
            Ok(Stroke {
                variant: BrushVariant::Placing,
                x: 12,
                y: -3
            })
        );
        assert_eq!(
            "Erase: 4, 5".parse::<Stroke>().map(|s| (s.variant, s.x, s.y)),
            Ok((BrushVariant::Deleting, 4, 5))
        );
    }

    #[test]
    fn reports_what_went_wrong() {
        assert!(matches!(
            "placing 1,2".parse::<Stroke>(),
            Err(StrokeParseError::MissingColon(_))
        ));
        assert!(matches!(
            "add:1;2".parse::<Stroke>(),
            Err(StrokeParseError::BadCoordinates(_))
        ));
        assert!(matches!(
            "add:x,2".parse::<Stroke>(),
            Err(StrokeParseError::BadCoordinates(_))
        ));
        assert!(matches!(
            "smear:1,2".parse::<Stroke>(),
            Err(StrokeParseError::Variant(BrushError::UnknownVariant(_)))
        ));
    }
}
