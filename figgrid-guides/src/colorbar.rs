use figgrid_common::types::{Rect, Unit};
use figgrid_layout::layout::Layout;

const DEFAULT_WIDTH_CM: f64 = 0.5;
const DEFAULT_PADDING_CM: f64 = 0.15;

/// Placement options for a colorbar hung off the right edge of a host
/// cell. Lengths are physical, in the layout's unit.
#[derive(Debug, Clone, Default)]
pub struct ColorbarConfig {
    /// Thickness of the colorbar; defaults to 0.5 cm.
    pub width: Option<f64>,
    /// Gap between the host rectangle and the colorbar; defaults to
    /// 0.15 cm.
    pub padding: Option<f64>,
}

/// Rectangle for a colorbar immediately to the right of `host`, sharing
/// its bottom and height. The physical width and padding are normalized
/// by the canvas width.
pub fn colorbar_rect(host: Rect, layout: &Layout, config: &ColorbarConfig) -> Rect {
    let width = config
        .width
        .unwrap_or_else(|| Unit::Cm.convert(DEFAULT_WIDTH_CM, layout.unit));
    let padding = config
        .padding
        .unwrap_or_else(|| Unit::Cm.convert(DEFAULT_PADDING_CM, layout.unit));
    Rect::new(
        host.right() + padding / layout.total_width,
        host.bottom,
        width / layout.total_width,
        host.height,
    )
}
