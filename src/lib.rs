pub mod app;
pub mod core;
pub mod gameplay;
pub mod interaction;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use crate::app::game::GamePlugin;
pub use crate::core::components::{Ball, BallRadius, BallTier, PreviewBall};
pub use crate::core::config::GameConfig;
pub use crate::core::size_table::{SizeSpec, SizeTable};
