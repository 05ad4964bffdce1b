use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::components::{Ball, PreviewBall};
use crate::core::config::GameConfig;
use crate::core::size_table::SizeTable;
use crate::core::system::system_order::PrePhysicsSet;
use crate::gameplay::sequence::draw_tier;
use crate::gameplay::spawn::{dynamic_ball, load_tier_images, preview_ball, TierImages};
use crate::interaction::pointer::{pointer_released, primary_pointer_world_pos};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropPhase {
    /// A preview ball is placed; the next release drops it.
    #[default]
    Ready,
    /// The cooldown window after a drop; releases are ignored.
    Dropping,
}

/// Drop-controller state. Mutated only by the systems in this module.
#[derive(Resource, Debug, Default)]
pub struct DropState {
    pub phase: DropPhase,
    /// Tier of the ball the next release will drop (and of the pending
    /// preview while the cooldown runs).
    pub current_tier: usize,
    /// Tier most recently drawn from the sequence generator.
    pub next_tier: usize,
    pub last_dropped: Option<Entity>,
}

/// Last known pointer x in world coordinates; the release and the re-arm
/// both read it.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct AimX(pub f32);

/// Cooldown between a drop and the next preview. Removing the resource is
/// the cancellation: a reset discards a pending re-arm by dropping it.
#[derive(Resource, Deref, DerefMut)]
pub struct RearmTimer(pub Timer);

pub struct DropPlugin;

impl Plugin for DropPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DropState>()
            .init_resource::<AimX>()
            .add_systems(Startup, load_tier_images)
            .add_systems(OnEnter(AppState::Playing), reset_run)
            .add_systems(
                Update,
                (track_aim, handle_release.after(track_aim))
                    .in_set(PrePhysicsSet)
                    .run_if(in_state(AppState::Playing)),
            )
            .add_systems(
                Update,
                rearm_after_cooldown.run_if(in_state(AppState::Playing)),
            );
    }
}

/// (Re)initialize a run: clear every ball, discard a pending cooldown, and
/// place the starting preview. Runs on entering `Playing`, which covers both
/// startup and a restart after a loss.
pub fn reset_run(
    mut commands: Commands,
    mut state: ResMut<DropState>,
    aim: Res<AimX>,
    cfg: Res<GameConfig>,
    table: Res<SizeTable>,
    images: Res<TierImages>,
    q_balls: Query<Entity, With<Ball>>,
) {
    for e in &q_balls {
        commands.entity(e).despawn();
    }
    commands.remove_resource::<RearmTimer>();
    *state = DropState::default();
    commands.spawn(preview_ball(
        &table,
        &images,
        state.current_tier,
        Vec2::new(aim.0, cfg.spawn_y()),
        &cfg.physics,
    ));
}

/// Track the pointer and keep the preview under it, pinned to the spawn
/// height. Runs in every phase; during the cooldown there is no preview and
/// only the aim is recorded.
pub fn track_aim(
    windows: Query<&Window>,
    touches: Res<Touches>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    cfg: Res<GameConfig>,
    mut aim: ResMut<AimX>,
    mut q_preview: Query<&mut Transform, With<PreviewBall>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(world_pos) = primary_pointer_world_pos(window, &touches, &camera_q) else {
        return;
    };
    aim.0 = world_pos.x;
    if let Ok(mut tf) = q_preview.single_mut() {
        tf.translation.x = aim.0;
        tf.translation.y = cfg.spawn_y();
    }
}

/// Pointer release: drop the previewed ball. Effective only in `Ready`;
/// releases during the cooldown are ignored, which debounces double-drops.
pub fn handle_release(
    mut commands: Commands,
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    aim: Res<AimX>,
    cfg: Res<GameConfig>,
    table: Res<SizeTable>,
    images: Res<TierImages>,
    mut state: ResMut<DropState>,
    q_preview: Query<Entity, With<PreviewBall>>,
) {
    if !pointer_released(&buttons, &touches) {
        return;
    }
    if state.phase != DropPhase::Ready {
        return;
    }
    state.phase = DropPhase::Dropping;

    for e in &q_preview {
        commands.entity(e).despawn();
    }
    let pos = Vec2::new(aim.0, cfg.spawn_y());
    let dropped = commands
        .spawn(dynamic_ball(&table, &images, state.current_tier, pos, &cfg.physics))
        .id();
    state.last_dropped = Some(dropped);

    // The tier just dropped was drawn on the previous release; this draw
    // decides the following preview.
    state.next_tier = draw_tier(&mut rand::thread_rng(), cfg.drop.easy_tiers);
    state.current_tier = state.next_tier;

    commands.insert_resource(RearmTimer(Timer::from_seconds(
        cfg.drop.cooldown_secs,
        TimerMode::Once,
    )));
    #[cfg(feature = "debug")]
    info!(target: "drop", "dropped at x={:.1}; next preview tier {}", pos.x, state.current_tier);
}

/// Tick the cooldown against wall-clock time. On expiry, place the pending
/// preview at the current aim and return to `Ready`. If the phase changed in
/// the meantime (external reset), the pending preview is discarded silently.
pub fn rearm_after_cooldown(
    mut commands: Commands,
    time: Res<Time<Real>>,
    timer: Option<ResMut<RearmTimer>>,
    mut state: ResMut<DropState>,
    aim: Res<AimX>,
    cfg: Res<GameConfig>,
    table: Res<SizeTable>,
    images: Res<TierImages>,
) {
    let Some(mut timer) = timer else {
        return;
    };
    timer.tick(time.delta());
    if !timer.finished() {
        return;
    }
    commands.remove_resource::<RearmTimer>();
    if state.phase != DropPhase::Dropping {
        return;
    }
    commands.spawn(preview_ball(
        &table,
        &images,
        state.current_tier,
        Vec2::new(aim.0, cfg.spawn_y()),
        &cfg.physics,
    ));
    state.phase = DropPhase::Ready;
}
