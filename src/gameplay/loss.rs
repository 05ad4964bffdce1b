use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::config::GameConfig;
use crate::core::system::system_order::PostPhysicsAdjustSet;
use crate::gameplay::merge::resolve_merges;

/// Terminal signal: a colliding ball sat entirely above the loss line.
/// Not an error; the host reacts by freezing gameplay and showing the
/// end-of-run overlay.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameOver;

/// A ball breaches when its bottom edge clears the loss line, i.e. the whole
/// ball is above the line while touching another body.
pub fn breaches_loss_line(center_y: f32, radius: f32, loss_line_y: f32) -> bool {
    center_y - radius > loss_line_y
}

pub struct LossPlugin;

impl Plugin for LossPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<GameOver>()
            .add_systems(
                Update,
                trigger_game_over
                    .in_set(PostPhysicsAdjustSet)
                    .after(resolve_merges)
                    .run_if(in_state(AppState::Playing)),
            )
            .add_systems(Update, draw_loss_line);
    }
}

fn trigger_game_over(
    mut events: EventReader<GameOver>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if events.read().next().is_some() {
        info!(target: "loss", "loss line breached; run over");
        next_state.set(AppState::GameOver);
    }
}

fn draw_loss_line(cfg: Res<GameConfig>, mut gizmos: Gizmos) {
    if !cfg.loss.draw_line {
        return;
    }
    let y = cfg.loss_line_y();
    let half_w = cfg.arena.width * 0.5;
    gizmos.line_2d(
        Vec2::new(-half_w, y),
        Vec2::new(half_w, y),
        Color::srgba(0.85, 0.25, 0.2, 0.8),
    );
}
