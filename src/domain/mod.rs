mod cell;
mod engine;
mod grid;
mod language;
mod patterns;

pub use cell::Cell;
pub use grid::Grid;
pub use language::Language;
pub use patterns::{Pattern, Preset, presets};
