use std::str::FromStr;

use figgrid_common::types::{Corner, HorizontalAlign, Unit, POINTS_PER_INCH};
use figgrid_layout::layout::Layout;

use crate::error::FigGridGuidesError;

const DEFAULT_MARGIN_CM: f64 = 0.1;

/// Placement options for corner labels. Lengths are physical, in the
/// active unit.
#[derive(Debug, Clone, Default)]
pub struct LabelConfig {
    /// Inset from the cell edges; defaults to 0.1 cm.
    pub margin: Option<f64>,
}

/// Anchor point for a corner label in the host cell's local coordinate
/// space (cell width/height as 1 unit), plus the horizontal anchoring of
/// the text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    pub x: f64,
    pub y: f64,
    pub align: HorizontalAlign,
}

/// Anchor for a label in the `corner` of a cell of physical size
/// `cell_size` (width, height in `unit`).
///
/// The glyph height is estimated as `font_size / 72` inches re-expressed
/// in `unit`; the vertical inset is widened by half of it so the anchored
/// vertical center keeps the glyph edge clear of the margin. Left corners
/// are left-anchored, right corners right-anchored.
pub fn corner_label_position(
    cell_size: [f64; 2],
    corner: Corner,
    font_size: f64,
    unit: Unit,
    config: &LabelConfig,
) -> LabelPlacement {
    let margin = config
        .margin
        .unwrap_or_else(|| Unit::Cm.convert(DEFAULT_MARGIN_CM, unit));
    let glyph_height = Unit::In.convert(font_size / POINTS_PER_INCH, unit);
    let [cell_width, cell_height] = cell_size;

    let x_inset = margin / cell_width;
    let y_inset = (margin + glyph_height / 2.0) / cell_height;

    let (x, align) = if corner.is_left() {
        (x_inset, HorizontalAlign::Left)
    } else {
        (1.0 - x_inset, HorizontalAlign::Right)
    };
    let y = if corner.is_top() { 1.0 - y_inset } else { y_inset };

    LabelPlacement { x, y, align }
}

/// Anchor for a label in the `corner` of the cell at `(column, row)`.
pub fn corner_label_for_cell(
    layout: &Layout,
    column: usize,
    row: usize,
    corner: Corner,
    font_size: f64,
    config: &LabelConfig,
) -> Result<LabelPlacement, FigGridGuidesError> {
    let cell_size = layout.cell_size_physical(column, row)?;
    Ok(corner_label_position(
        cell_size,
        corner,
        font_size,
        layout.unit,
        config,
    ))
}

/// Parse a corner from its wire name (e.g. `"top_left"`).
pub fn parse_corner(name: &str) -> Result<Corner, FigGridGuidesError> {
    Ok(Corner::from_str(name)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figgrid_layout::GridConfig;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_four_corners_are_symmetric() {
        let cell = [5.0, 4.0];
        let config = LabelConfig { margin: Some(0.2) };
        let tl = corner_label_position(cell, Corner::TopLeft, 12.0, Unit::Cm, &config);
        let tr = corner_label_position(cell, Corner::TopRight, 12.0, Unit::Cm, &config);
        let bl = corner_label_position(cell, Corner::BottomLeft, 12.0, Unit::Cm, &config);
        let br = corner_label_position(cell, Corner::BottomRight, 12.0, Unit::Cm, &config);

        assert_eq!(tl.align, HorizontalAlign::Left);
        assert_eq!(bl.align, HorizontalAlign::Left);
        assert_eq!(tr.align, HorizontalAlign::Right);
        assert_eq!(br.align, HorizontalAlign::Right);

        assert_approx_eq!(f64, tl.x, 0.2 / 5.0, epsilon = 1e-12);
        assert_approx_eq!(f64, tr.x, 1.0 - 0.2 / 5.0, epsilon = 1e-12);
        assert_approx_eq!(f64, tl.y, tr.y, epsilon = 1e-12);
        assert_approx_eq!(f64, bl.y, br.y, epsilon = 1e-12);
        // Mirrored about the cell's horizontal midline
        assert_approx_eq!(f64, tl.y, 1.0 - bl.y, epsilon = 1e-12);
    }

    #[test]
    fn test_vertical_inset_accounts_for_glyph_height() {
        let cell = [4.0, 4.0];
        let config = LabelConfig { margin: Some(0.1) };
        let font_size = 10.0;
        let placement = corner_label_position(cell, Corner::TopLeft, font_size, Unit::Cm, &config);
        let glyph_cm = font_size / 72.0 * 2.54;
        assert_approx_eq!(
            f64,
            placement.y,
            1.0 - (0.1 + glyph_cm / 2.0) / 4.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_label_for_cell_uses_the_layout_unit() {
        let layout = GridConfig::default().compute_layout().unwrap();
        let placement =
            corner_label_for_cell(&layout, 1, 1, Corner::BottomLeft, 12.0, &LabelConfig::default())
                .unwrap();
        // Default 0.1 cm margin in a 7.4 cm wide cell
        assert_approx_eq!(f64, placement.x, 0.1 / 7.4, epsilon = 1e-9);
        assert!(placement.y > 0.0 && placement.y < 0.5);
    }

    #[test]
    fn test_label_for_cell_rejects_bad_address() {
        let layout = GridConfig::default()
            .with_grid(2, 2)
            .compute_layout()
            .unwrap();
        // Spanless overrun degrades inside the solver, but a genuinely
        // unrepresentable address (column 0) is an error
        assert!(matches!(
            corner_label_for_cell(&layout, 0, 1, Corner::TopLeft, 10.0, &LabelConfig::default()),
            Err(FigGridGuidesError::LayoutError(_))
        ));
    }

    #[test]
    fn test_parse_corner() {
        assert_eq!(parse_corner("bottom_right").unwrap(), Corner::BottomRight);
        assert!(matches!(
            parse_corner("center"),
            Err(FigGridGuidesError::InvalidCorner(_))
        ));
    }
}
