use std::str::FromStr;

use figgrid_common::types::Unit;
use figgrid_common::value::PaddingSpec;
use serde::{Deserialize, Serialize};

use crate::error::FigGridLayoutError;
use crate::layout::Layout;

/// Trim or pad a relative-weight vector to the target length.
///
/// Extra entries are dropped; missing entries get the neutral weight 1.
/// Unlike padding arrays, weight vectors are always reconciled to the
/// grid dimension rather than rejected.
pub fn resolve_weights(weights: &[f64], target_len: usize) -> Vec<f64> {
    let mut resolved: Vec<f64> = weights.iter().take(target_len).copied().collect();
    resolved.resize(target_len, 1.0);
    resolved
}

/// Immutable description of a figure grid: canvas size, outer margins,
/// internal paddings, grid dimensions, and relative weights, all physical
/// lengths expressed in [`unit`](GridConfig::unit).
///
/// Re-layout is caller-driven: build a new configuration, call
/// [`compute_layout`](GridConfig::compute_layout), then solve rectangles
/// for each tracked plot entry. The engine stores nothing between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Printable canvas width.
    pub total_width: f64,
    /// Printable canvas height.
    pub total_height: f64,

    /// Margins consumed once each, between the canvas edge and the grid.
    pub left_outer_padding: f64,
    pub right_outer_padding: f64,
    pub top_outer_padding: f64,
    pub bottom_outer_padding: f64,

    /// Internal paddings, one per column/row (or a uniform broadcast).
    pub left_padding: PaddingSpec,
    pub right_padding: PaddingSpec,
    pub top_padding: PaddingSpec,
    pub bottom_padding: PaddingSpec,

    pub num_columns: usize,
    pub num_rows: usize,

    /// Relative share of each column/row; reconciled to the grid
    /// dimension by [`resolve_weights`].
    pub col_weights: Vec<f64>,
    pub row_weights: Vec<f64>,

    pub unit: Unit,
}

impl Default for GridConfig {
    /// The one-column default figure: an 8.6 cm square canvas with print
    /// margins sized for axis tick labels on the left and bottom.
    fn default() -> Self {
        Self {
            total_width: 8.6,
            total_height: 8.6,
            left_outer_padding: 1.1,
            right_outer_padding: 0.1,
            top_outer_padding: 0.1,
            bottom_outer_padding: 1.0,
            left_padding: PaddingSpec::Uniform(0.0),
            right_padding: PaddingSpec::Uniform(0.0),
            top_padding: PaddingSpec::Uniform(0.0),
            bottom_padding: PaddingSpec::Uniform(0.0),
            num_columns: 1,
            num_rows: 1,
            col_weights: vec![1.0],
            row_weights: vec![1.0],
            unit: Unit::Cm,
        }
    }
}

impl GridConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_total_size(mut self, width: f64, height: f64) -> Self {
        self.total_width = width;
        self.total_height = height;
        self
    }

    pub fn with_grid(mut self, num_columns: usize, num_rows: usize) -> Self {
        self.num_columns = num_columns;
        self.num_rows = num_rows;
        self
    }

    /// Set all four outer margins at once (left, right, top, bottom).
    pub fn with_outer_padding(mut self, left: f64, right: f64, top: f64, bottom: f64) -> Self {
        self.left_outer_padding = left;
        self.right_outer_padding = right;
        self.top_outer_padding = top;
        self.bottom_outer_padding = bottom;
        self
    }

    pub fn with_left_padding(mut self, padding: impl Into<PaddingSpec>) -> Self {
        self.left_padding = padding.into();
        self
    }

    pub fn with_right_padding(mut self, padding: impl Into<PaddingSpec>) -> Self {
        self.right_padding = padding.into();
        self
    }

    pub fn with_top_padding(mut self, padding: impl Into<PaddingSpec>) -> Self {
        self.top_padding = padding.into();
        self
    }

    pub fn with_bottom_padding(mut self, padding: impl Into<PaddingSpec>) -> Self {
        self.bottom_padding = padding.into();
        self
    }

    pub fn with_col_weights(mut self, weights: Vec<f64>) -> Self {
        self.col_weights = weights;
        self
    }

    pub fn with_row_weights(mut self, weights: Vec<f64>) -> Self {
        self.row_weights = weights;
        self
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    /// Set the unit from its wire name (`"cm"` or `"in"`).
    pub fn with_unit_name(self, name: &str) -> Result<Self, FigGridLayoutError> {
        Ok(self.with_unit(Unit::from_str(name)?))
    }

    /// Re-express every physical length in `to`, scaling by the cm/in
    /// ratio. Weights, grid dimensions, and anything else dimensionless
    /// are untouched, so converting there and back reproduces the
    /// original configuration up to floating-point rounding.
    pub fn convert_unit(&self, to: Unit) -> GridConfig {
        let from = self.unit;
        let scale = |v: f64| from.convert(v, to);
        GridConfig {
            total_width: scale(self.total_width),
            total_height: scale(self.total_height),
            left_outer_padding: scale(self.left_outer_padding),
            right_outer_padding: scale(self.right_outer_padding),
            top_outer_padding: scale(self.top_outer_padding),
            bottom_outer_padding: scale(self.bottom_outer_padding),
            left_padding: self.left_padding.map(scale),
            right_padding: self.right_padding.map(scale),
            top_padding: self.top_padding.map(scale),
            bottom_padding: self.bottom_padding.map(scale),
            num_columns: self.num_columns,
            num_rows: self.num_rows,
            col_weights: self.col_weights.clone(),
            row_weights: self.row_weights.clone(),
            unit: to,
        }
    }

    /// Derive the normalized layout for this configuration.
    pub fn compute_layout(&self) -> Result<Layout, FigGridLayoutError> {
        Layout::compute(self)
    }
}
