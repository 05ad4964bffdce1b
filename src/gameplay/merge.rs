use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use std::collections::HashSet;

use crate::app::state::AppState;
use crate::core::components::{Ball, BallRadius, BallTier};
use crate::core::config::GameConfig;
use crate::core::size_table::SizeTable;
use crate::core::system::system_order::PostPhysicsAdjustSet;
use crate::gameplay::loss::{breaches_loss_line, GameOver};
use crate::gameplay::spawn::{dynamic_ball, TierImages};

pub struct MergePlugin;

impl Plugin for MergePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            resolve_merges
                .in_set(PostPhysicsAdjustSet)
                .run_if(in_state(AppState::Playing)),
        );
    }
}

/// Consumes the tick's collision-start pairs. For each pair, in arrival
/// order: check the loss line first (terminal, halts the batch), then fuse
/// equal-tier dynamic balls into one ball of the next tier at their midpoint.
///
/// A body can appear in several pairs of one batch; once consumed by a merge
/// it is skipped, and pairs naming entities despawned in an earlier tick
/// resolve to nothing. Both are silent no-ops, not errors.
pub fn resolve_merges(
    mut commands: Commands,
    mut collisions: EventReader<CollisionEvent>,
    cfg: Res<GameConfig>,
    table: Res<SizeTable>,
    images: Res<TierImages>,
    q_balls: Query<(&Transform, &BallTier, &BallRadius, &RigidBody), With<Ball>>,
    mut game_over: EventWriter<GameOver>,
) {
    let loss_y = cfg.loss_line_y();
    let mut consumed: HashSet<Entity> = HashSet::new();

    for ev in collisions.read() {
        let CollisionEvent::Started(e1, e2, _flags) = ev else {
            continue;
        };
        if consumed.contains(e1) || consumed.contains(e2) {
            continue;
        }
        let (Ok((tf_a, tier_a, radius_a, body_a)), Ok((tf_b, tier_b, radius_b, body_b))) =
            (q_balls.get(*e1), q_balls.get(*e2))
        else {
            continue; // wall, or an entity despawned in an earlier tick
        };
        // Walls and the aim preview are fixed bodies; only falling balls merge.
        if !matches!(body_a, RigidBody::Dynamic) || !matches!(body_b, RigidBody::Dynamic) {
            continue;
        }

        if breaches_loss_line(tf_a.translation.y, radius_a.0, loss_y)
            || breaches_loss_line(tf_b.translation.y, radius_b.0, loss_y)
        {
            game_over.write(GameOver);
            return; // terminal: the rest of the batch is moot
        }

        if tier_a.0 != tier_b.0 {
            continue;
        }
        let Some(next) = table.next_tier(tier_a.0) else {
            continue; // top tier: pairs stay as they are
        };

        let mid = (tf_a.translation.truncate() + tf_b.translation.truncate()) * 0.5;
        consumed.insert(*e1);
        consumed.insert(*e2);
        commands.entity(*e1).despawn();
        commands.entity(*e2).despawn();
        commands.spawn(dynamic_ball(&table, &images, next, mid, &cfg.physics));
        #[cfg(feature = "debug")]
        info!(
            target: "merge",
            "fused tier {} pair at ({:.1},{:.1}) -> tier {next}",
            tier_a.0, mid.x, mid.y
        );
    }
}
