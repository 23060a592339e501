use thiserror::Error;

/// Errors raised by direct pixel-grid access.
///
/// The router and the fill engine check bounds before touching the grid, so
/// seeing one of these at runtime means a caller skipped that check.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("pixel ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
}

pub type Result<T> = std::result::Result<T, GridError>;
