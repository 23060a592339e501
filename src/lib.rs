//! Painter — a small mouse-driven pixel painter.
//!
//! Left button paints with the current pen, right button bucket-fills the
//! 4-connected region under the cursor, and a toolbar column picks pen size
//! and color.

pub mod app;
pub mod canvas;
pub mod cli;
pub mod components;
pub mod error;
pub mod input;
pub mod logger;
pub mod ops;
pub mod settings;

pub use canvas::{PixelGrid, to_grid_coord};
pub use error::GridError;
pub use input::{InputEvent, InputRouter, Routed};
pub use ops::fill::{FillOutcome, flood_fill};
