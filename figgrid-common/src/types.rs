use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub const CM_PER_INCH: f64 = 2.54;
pub const POINTS_PER_INCH: f64 = 72.0;

/// Physical unit in which every length of a configuration is expressed.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Unit {
    #[default]
    Cm,
    In,
}

impl Unit {
    /// Convert `value` from `self` to `to`.
    ///
    /// A single multiply or divide by 2.54, so cm -> in -> cm round-trips
    /// up to floating-point rounding. Dimensionless values must not pass
    /// through here.
    pub fn convert(self, value: f64, to: Unit) -> f64 {
        match (self, to) {
            (Unit::Cm, Unit::In) => value / CM_PER_INCH,
            (Unit::In, Unit::Cm) => value * CM_PER_INCH,
            _ => value,
        }
    }
}

/// A rectangle in normalized [0,1] canvas coordinates, lower-left origin.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, bottom: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            bottom,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn top(&self) -> f64 {
        self.bottom + self.height
    }
}

/// Corner of a host cell a label anchors to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub fn is_top(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }

    pub fn is_left(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft)
    }
}

/// Horizontal text anchoring for corner labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HorizontalAlign {
    Left,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use std::str::FromStr;

    #[test]
    fn test_unit_conversion_round_trips() {
        let values = [0.0, 0.1, 1.1, 8.6, 21.0];
        for v in values {
            let there_and_back = Unit::In.convert(Unit::Cm.convert(v, Unit::In), Unit::Cm);
            assert_approx_eq!(f64, there_and_back, v, epsilon = 1e-12);
        }
        assert_approx_eq!(f64, Unit::In.convert(1.0, Unit::Cm), 2.54);
        assert_approx_eq!(f64, Unit::Cm.convert(5.08, Unit::In), 2.0);
        // Same-unit conversion is the identity
        assert_approx_eq!(f64, Unit::Cm.convert(3.3, Unit::Cm), 3.3);
    }

    #[test]
    fn test_unit_parsing() {
        assert_eq!(Unit::from_str("cm").unwrap(), Unit::Cm);
        assert_eq!(Unit::from_str("in").unwrap(), Unit::In);
        assert!(Unit::from_str("furlong").is_err());
    }

    #[test]
    fn test_corner_parsing_and_sides() {
        let corner = Corner::from_str("top_right").unwrap();
        assert!(corner.is_top());
        assert!(!corner.is_left());
        assert!(Corner::from_str("middle").is_err());
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(0.1, 0.2, 0.5, 0.25);
        assert_approx_eq!(f64, rect.right(), 0.6);
        assert_approx_eq!(f64, rect.top(), 0.45);
    }
}
