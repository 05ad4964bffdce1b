use bevy::prelude::*;

/// High-level run lifecycle.
/// Playing -> GameOver -> (restart) -> Playing
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    /// Active run; drops, merges and the loss check are live.
    #[default]
    Playing,
    /// Terminal state after a loss-line breach. Physics keeps simulating,
    /// gameplay stops reacting until an external restart.
    GameOver,
}
