// Domain layer - grid, stepping, pattern catalog
pub mod domain;

// Application layer - session, step clock, viewport
pub mod application;

pub mod config;
pub mod error;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, Language, Pattern, Preset, presets};
pub use application::{RunState, Session, StepClock, Viewport};
pub use config::Config;
pub use error::LifeError;
