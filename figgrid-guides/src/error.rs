use figgrid_layout::error::FigGridLayoutError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FigGridGuidesError {
    #[error("invalid corner: {0}")]
    InvalidCorner(#[from] strum::ParseError),

    #[error("layout error: {0}")]
    LayoutError(#[from] FigGridLayoutError),
}
