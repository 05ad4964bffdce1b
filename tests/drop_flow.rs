use std::time::Duration;

use ball_merger::core::components::{Ball, BallTier, PreviewBall};
use ball_merger::core::config::GameConfig;
use ball_merger::core::size_table::SizeTable;
use ball_merger::gameplay::drop::{
    handle_release, rearm_after_cooldown, AimX, DropPhase, DropState, RearmTimer,
};
use ball_merger::gameplay::spawn::{preview_ball, TierImages};
use bevy::prelude::*;
use bevy_rapier2d::prelude::RigidBody;

fn test_app() -> App {
    let cfg = GameConfig::default();
    let table = SizeTable::try_from_config(&cfg).unwrap();
    let images = TierImages(vec![Handle::default(); table.len()]);
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.init_resource::<ButtonInput<MouseButton>>();
    app.init_resource::<Touches>();
    app.init_resource::<AimX>();
    app.init_resource::<DropState>();
    app.insert_resource(cfg);
    app.insert_resource(table);
    app.insert_resource(images);
    app.add_systems(Update, (handle_release, rearm_after_cooldown).chain());
    app
}

fn spawn_preview(app: &mut App, tier: usize) -> Entity {
    let cfg = app.world().resource::<GameConfig>().clone();
    let table = app.world().resource::<SizeTable>().clone();
    let images = TierImages(vec![Handle::default(); table.len()]);
    let pos = Vec2::new(app.world().resource::<AimX>().0, cfg.spawn_y());
    app.world_mut()
        .spawn(preview_ball(&table, &images, tier, pos, &cfg.physics))
        .id()
}

fn release_pointer(app: &mut App) {
    let mut buttons = app.world_mut().resource_mut::<ButtonInput<MouseButton>>();
    buttons.press(MouseButton::Left);
    buttons.release(MouseButton::Left);
}

fn clear_pointer(app: &mut App) {
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .clear();
}

fn previews(app: &mut App) -> Vec<Entity> {
    app.world_mut()
        .query_filtered::<Entity, With<PreviewBall>>()
        .iter(app.world())
        .collect()
}

fn dynamic_balls(app: &mut App) -> Vec<(Entity, usize, Vec2)> {
    app.world_mut()
        .query_filtered::<(Entity, &BallTier, &Transform, &RigidBody), With<Ball>>()
        .iter(app.world())
        .filter(|(_, _, _, body)| matches!(body, RigidBody::Dynamic))
        .map(|(e, tier, tf, _)| (e, tier.0, tf.translation.truncate()))
        .collect()
}

#[test]
fn release_drops_current_tier_at_aim_and_arms_cooldown() {
    let mut app = test_app();
    app.world_mut().resource_mut::<AimX>().0 = 320.0;
    spawn_preview(&mut app, 0);
    release_pointer(&mut app);
    app.update();

    assert!(previews(&mut app).is_empty(), "preview must leave the world");
    let spawn_y = app.world().resource::<GameConfig>().spawn_y();
    let dropped = dynamic_balls(&mut app);
    assert_eq!(dropped.len(), 1);
    let (entity, tier, pos) = dropped[0];
    assert_eq!(tier, 0);
    assert_eq!(pos, Vec2::new(320.0, spawn_y));

    let state = app.world().resource::<DropState>();
    assert_eq!(state.phase, DropPhase::Dropping);
    assert_eq!(state.last_dropped, Some(entity));
    let easy = app.world().resource::<GameConfig>().drop.easy_tiers;
    assert!(state.next_tier < easy);
    assert_eq!(state.current_tier, state.next_tier);
    assert!(app.world().contains_resource::<RearmTimer>());
}

#[test]
fn release_while_dropping_is_a_no_op() {
    let mut app = test_app();
    app.world_mut().resource_mut::<DropState>().phase = DropPhase::Dropping;
    release_pointer(&mut app);
    app.update();

    assert!(dynamic_balls(&mut app).is_empty());
    assert_eq!(
        app.world().resource::<DropState>().phase,
        DropPhase::Dropping
    );
    assert!(!app.world().contains_resource::<RearmTimer>());
}

#[test]
fn cooldown_rearms_with_preview_at_current_aim() {
    let mut app = test_app();
    app.world_mut().resource_mut::<AimX>().0 = 320.0;
    spawn_preview(&mut app, 0);
    release_pointer(&mut app);
    app.update();
    clear_pointer(&mut app);

    // Aim moved while the cooldown ran; the pending preview follows it.
    app.world_mut().resource_mut::<AimX>().0 = -150.0;
    app.world_mut()
        .resource_mut::<RearmTimer>()
        .tick(Duration::from_secs(1));
    app.update();

    assert!(!app.world().contains_resource::<RearmTimer>());
    let state = app.world().resource::<DropState>();
    assert_eq!(state.phase, DropPhase::Ready);
    let expected_tier = state.current_tier;

    let preview_list = previews(&mut app);
    assert_eq!(preview_list.len(), 1);
    let preview = preview_list[0];
    let tf = app.world().get::<Transform>(preview).unwrap();
    assert_eq!(tf.translation.x, -150.0);
    assert_eq!(
        app.world().get::<BallTier>(preview),
        Some(&BallTier(expected_tier))
    );
    // The dropped ball is still around.
    assert_eq!(dynamic_balls(&mut app).len(), 1);
}

#[test]
fn reset_during_cooldown_discards_pending_preview() {
    let mut app = test_app();
    spawn_preview(&mut app, 0);
    release_pointer(&mut app);
    app.update();
    clear_pointer(&mut app);

    // External reset flipped the phase while the cooldown was pending.
    app.world_mut().resource_mut::<DropState>().phase = DropPhase::Ready;
    app.world_mut()
        .resource_mut::<RearmTimer>()
        .tick(Duration::from_secs(1));
    app.update();

    assert!(!app.world().contains_resource::<RearmTimer>());
    assert!(
        previews(&mut app).is_empty(),
        "pending preview must be discarded silently"
    );
}
