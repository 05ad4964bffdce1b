use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::config::GameConfig;

const WALL_COLOR: Color = Color::srgb(1.0, 0.773, 0.561);

pub struct ArenaPlugin; // Rapier setup + the walled container

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(100.0),
            RapierDebugRenderPlugin::default(),
        ))
        .add_systems(Startup, (configure_physics, spawn_walls));
    }
}

fn configure_physics(
    cfg: Res<GameConfig>,
    mut rapier_cfg: Query<&mut RapierConfiguration>,
    mut debug_ctx: ResMut<DebugRenderContext>,
) {
    for mut rc in &mut rapier_cfg {
        rc.gravity = Vect::new(0.0, cfg.physics.gravity_y);
    }
    debug_ctx.enabled = cfg.rapier_debug;
}

/// Three fixed walls (left, right, bottom) around the arena; the top stays
/// open for drops. Wall centers sit half a thickness outside the play area
/// so the inner faces line up with the arena bounds.
fn spawn_walls(mut commands: Commands, cfg: Res<GameConfig>) {
    let a = &cfg.arena;
    let t = a.wall_thickness;
    let half_w = a.width * 0.5;
    let half_h = a.height * 0.5;

    let walls = [
        ("WallLeft", Vec2::new(-half_w - t * 0.5, 0.0), Vec2::new(t, a.height + 2.0 * t)),
        ("WallRight", Vec2::new(half_w + t * 0.5, 0.0), Vec2::new(t, a.height + 2.0 * t)),
        ("WallBottom", Vec2::new(0.0, -half_h - t * 0.5), Vec2::new(a.width, t)),
    ];
    for (name, center, size) in walls {
        commands.spawn((
            Name::new(name),
            RigidBody::Fixed,
            Collider::cuboid(size.x * 0.5, size.y * 0.5),
            Friction::coefficient(cfg.physics.friction),
            Restitution::coefficient(cfg.physics.restitution),
            Sprite {
                color: WALL_COLOR,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(center.extend(0.0)),
        ));
    }
}
