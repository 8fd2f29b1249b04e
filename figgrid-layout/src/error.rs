use thiserror::Error;

#[derive(Error, Debug)]
pub enum FigGridLayoutError {
    #[error("canvas {axis} must be positive, got {value}")]
    ZeroCanvasDimension { axis: &'static str, value: f64 },

    #[error("grid must have at least one {0}")]
    ZeroGridDimension(&'static str),

    #[error("{side} padding array has {got} entries, expected {expected}")]
    PaddingLength {
        side: &'static str,
        got: usize,
        expected: usize,
    },

    #[error("paddings consume the full canvas {axis}: derived unit cell {axis} is {value}")]
    NonPositiveCellSize { axis: &'static str, value: f64 },

    #[error(
        "cell ({column}, {row}) spanning {col_span}x{row_span} exceeds \
         the {num_columns}x{num_rows} grid"
    )]
    OutOfBounds {
        column: usize,
        row: usize,
        col_span: usize,
        row_span: usize,
        num_columns: usize,
        num_rows: usize,
    },

    #[error("invalid unit: {0}")]
    InvalidUnit(#[from] strum::ParseError),
}
