use figgrid_common::types::{Rect, Unit};
use figgrid_common::value::PaddingSpec;

use crate::config::{resolve_weights, GridConfig};
use crate::error::FigGridLayoutError;

/// 1-based position, counted from the bottom of the grid, of the
/// bottommost row covered by a cell span.
///
/// Rows are addressed from the top (`row = 1` is the top row) but edge
/// positions accumulate upward from the bottom of the canvas; this is the
/// single place where the two numberings meet. Saturates to 1 when the
/// span reaches past the bottom row (degraded start-overrun path).
pub fn row_from_bottom(row: usize, row_span: usize, num_rows: usize) -> usize {
    num_rows.saturating_sub(row + row_span - 1) + 1
}

/// Sum of `weights` over the inclusive 1-based range `[from, to]`.
/// Indices past the end count as the neutral weight 1, so the degraded
/// start-overrun path stays finite.
fn weight_sum(weights: &[f64], from: usize, to: usize) -> f64 {
    if from > to {
        return 0.0;
    }
    (from..=to)
        .map(|i| weights.get(i - 1).copied().unwrap_or(1.0))
        .sum()
}

/// Normalized paddings and per-weight-unit cell size derived from a
/// [`GridConfig`]. All values are fractions of the canvas width/height.
///
/// For any valid configuration the width closes exactly:
/// `left_outer + right_outer + mean_gap * num_columns +
/// cell_width * sum(col_weights) == 1`, and symmetrically for the height,
/// where `mean_gap` is the average per-column gap consumption (the
/// representative left gap plus the representative right gap). A
/// non-uniform per-gap array is represented by its mean; see
/// [`PaddingSpec::representative`].
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Outer margins as fractions of the canvas.
    pub left_outer: f64,
    pub right_outer: f64,
    pub top_outer: f64,
    pub bottom_outer: f64,

    /// Internal gaps, normalized, one per column/row.
    pub left_gaps: PaddingSpec,
    pub right_gaps: PaddingSpec,
    pub top_gaps: PaddingSpec,
    pub bottom_gaps: PaddingSpec,

    /// Normalized width/height of one unit of weight.
    pub cell_width: f64,
    pub cell_height: f64,

    pub num_columns: usize,
    pub num_rows: usize,

    /// Weights resolved to the grid dimensions.
    pub col_weights: Vec<f64>,
    pub row_weights: Vec<f64>,

    /// Physical canvas size, carried through for placement rules that
    /// need to normalize physical lengths (colorbars, label margins).
    pub total_width: f64,
    pub total_height: f64,
    pub unit: Unit,
}

impl Layout {
    pub(crate) fn compute(config: &GridConfig) -> Result<Self, FigGridLayoutError> {
        if config.total_width <= 0.0 {
            return Err(FigGridLayoutError::ZeroCanvasDimension {
                axis: "width",
                value: config.total_width,
            });
        }
        if config.total_height <= 0.0 {
            return Err(FigGridLayoutError::ZeroCanvasDimension {
                axis: "height",
                value: config.total_height,
            });
        }
        if config.num_columns == 0 {
            return Err(FigGridLayoutError::ZeroGridDimension("column"));
        }
        if config.num_rows == 0 {
            return Err(FigGridLayoutError::ZeroGridDimension("row"));
        }
        check_padding_len("left", &config.left_padding, config.num_columns)?;
        check_padding_len("right", &config.right_padding, config.num_columns)?;
        check_padding_len("top", &config.top_padding, config.num_rows)?;
        check_padding_len("bottom", &config.bottom_padding, config.num_rows)?;

        let wnorm = |v: f64| v / config.total_width;
        let hnorm = |v: f64| v / config.total_height;

        let left_outer = wnorm(config.left_outer_padding);
        let right_outer = wnorm(config.right_outer_padding);
        let top_outer = hnorm(config.top_outer_padding);
        let bottom_outer = hnorm(config.bottom_outer_padding);

        let left_gaps = config.left_padding.map(wnorm);
        let right_gaps = config.right_padding.map(wnorm);
        let top_gaps = config.top_padding.map(hnorm);
        let bottom_gaps = config.bottom_padding.map(hnorm);

        let col_weights = resolve_weights(&config.col_weights, config.num_columns);
        let row_weights = resolve_weights(&config.row_weights, config.num_rows);

        // Each column consumes one left and one right gap on average; see
        // the Layout doc comment for the non-uniform caveat.
        let mean_col_gap = left_gaps.representative() + right_gaps.representative();
        let mean_row_gap = top_gaps.representative() + bottom_gaps.representative();

        let cell_width = (1.0 - left_outer - right_outer
            - mean_col_gap * config.num_columns as f64)
            / col_weights.iter().sum::<f64>();
        let cell_height = (1.0 - top_outer - bottom_outer
            - mean_row_gap * config.num_rows as f64)
            / row_weights.iter().sum::<f64>();

        if cell_width <= 0.0 {
            return Err(FigGridLayoutError::NonPositiveCellSize {
                axis: "width",
                value: cell_width,
            });
        }
        if cell_height <= 0.0 {
            return Err(FigGridLayoutError::NonPositiveCellSize {
                axis: "height",
                value: cell_height,
            });
        }

        Ok(Layout {
            left_outer,
            right_outer,
            top_outer,
            bottom_outer,
            left_gaps,
            right_gaps,
            top_gaps,
            bottom_gaps,
            cell_width,
            cell_height,
            num_columns: config.num_columns,
            num_rows: config.num_rows,
            col_weights,
            row_weights,
            total_width: config.total_width,
            total_height: config.total_height,
            unit: config.unit,
        })
    }

    /// Normalized rectangle of a single cell. `column` and `row` are
    /// 1-based; rows count from the top.
    pub fn cell_rect(&self, column: usize, row: usize) -> Result<Rect, FigGridLayoutError> {
        self.span_rect(column, row, 1, 1)
    }

    /// Normalized rectangle of a cell span starting at `(column, row)`
    /// and covering `col_span` columns and `row_span` rows.
    ///
    /// A span that reaches past the grid is rejected with
    /// [`FigGridLayoutError::OutOfBounds`]. A start cell past the grid
    /// with no span (both spans 1) degrades gracefully: a warning is
    /// logged and an extrapolated, likely meaningless rectangle is still
    /// returned.
    pub fn span_rect(
        &self,
        column: usize,
        row: usize,
        col_span: usize,
        row_span: usize,
    ) -> Result<Rect, FigGridLayoutError> {
        let out_of_bounds = || FigGridLayoutError::OutOfBounds {
            column,
            row,
            col_span,
            row_span,
            num_columns: self.num_columns,
            num_rows: self.num_rows,
        };

        if column == 0 || row == 0 || col_span == 0 || row_span == 0 {
            return Err(out_of_bounds());
        }

        let end_col = column + col_span - 1;
        let end_row = row + row_span - 1;
        if end_col > self.num_columns || end_row > self.num_rows {
            if col_span == 1 && row_span == 1 {
                log::warn!(
                    "cell ({}, {}) lies outside the {}x{} grid; returning an extrapolated rectangle",
                    column,
                    row,
                    self.num_columns,
                    self.num_rows
                );
            } else {
                return Err(out_of_bounds());
            }
        }

        // Column 1 starts right after the left outer margin and its own
        // left gap; later columns accumulate the weighted widths and both
        // gap arrays of everything to their left.
        let left = self.left_outer
            + self.cell_width * weight_sum(&self.col_weights, 1, column - 1)
            + self.left_gaps.sum_range(1, column)
            + self.right_gaps.sum_range(1, column - 1);

        // Mirrored vertically: the bottom edge accumulates everything
        // below the bottommost spanned row, re-expressed in from-the-top
        // indices. For the bottom row this reduces to
        // bottom_outer + bottom_gaps[last]. The degraded overrun path
        // clamps to the bottom row.
        let bottom_row = self.num_rows + 1 - row_from_bottom(row, row_span, self.num_rows);
        let bottom = self.bottom_outer
            + self.cell_height * weight_sum(&self.row_weights, bottom_row + 1, self.num_rows)
            + self.bottom_gaps.sum_range(bottom_row, self.num_rows)
            + self.top_gaps.sum_range(bottom_row + 1, self.num_rows);

        let width = self.cell_width * weight_sum(&self.col_weights, column, end_col)
            + self.right_gaps.sum_range(column, end_col - 1)
            + self.left_gaps.sum_range(column + 1, end_col);

        let height = self.cell_height * weight_sum(&self.row_weights, row, end_row)
            + self.bottom_gaps.sum_range(row, end_row - 1)
            + self.top_gaps.sum_range(row + 1, end_row);

        Ok(Rect::new(left, bottom, width, height))
    }

    /// Physical width/height of a single cell, in the layout's unit.
    /// Feeds placement rules that work in the cell's local coordinate
    /// space, like corner labels.
    pub fn cell_size_physical(
        &self,
        column: usize,
        row: usize,
    ) -> Result<[f64; 2], FigGridLayoutError> {
        let rect = self.cell_rect(column, row)?;
        Ok([rect.width * self.total_width, rect.height * self.total_height])
    }
}

fn check_padding_len(
    side: &'static str,
    padding: &PaddingSpec,
    expected: usize,
) -> Result<(), FigGridLayoutError> {
    match padding.per_gap_len() {
        Some(got) if got != expected => Err(FigGridLayoutError::PaddingLength {
            side,
            got,
            expected,
        }),
        _ => Ok(()),
    }
}
