use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::{Ball, BallRadius, BallTier, PreviewBall};
use crate::core::config::PhysicsTuning;
use crate::core::size_table::SizeTable;

/// Per-tier image handles, loaded once at startup in table order.
#[derive(Resource)]
pub struct TierImages(pub Vec<Handle<Image>>);

impl TierImages {
    pub fn handle(&self, tier: usize) -> Handle<Image> {
        self.0.get(tier).cloned().unwrap_or_default()
    }
}

pub fn load_tier_images(
    mut commands: Commands,
    table: Res<SizeTable>,
    asset_server: Res<AssetServer>,
) {
    let handles = table
        .iter()
        .map(|spec| asset_server.load(spec.asset.clone()))
        .collect();
    commands.insert_resource(TierImages(handles));
}

/// A falling (or freshly fused) ball. The caller spawns the returned bundle;
/// spawning is what adds the body to the world.
pub fn dynamic_ball(
    table: &SizeTable,
    images: &TierImages,
    tier: usize,
    pos: Vec2,
    tuning: &PhysicsTuning,
) -> impl Bundle {
    ball_bundle(table, images, tier, pos, RigidBody::Dynamic, tuning)
}

/// The static aim preview. Not mergeable: the merge resolver skips
/// non-dynamic bodies.
pub fn preview_ball(
    table: &SizeTable,
    images: &TierImages,
    tier: usize,
    pos: Vec2,
    tuning: &PhysicsTuning,
) -> impl Bundle {
    (
        ball_bundle(table, images, tier, pos, RigidBody::Fixed, tuning),
        PreviewBall,
    )
}

fn ball_bundle(
    table: &SizeTable,
    images: &TierImages,
    tier: usize,
    pos: Vec2,
    body: RigidBody,
    tuning: &PhysicsTuning,
) -> impl Bundle {
    // Out-of-range tiers panic here; the table is the source of valid indices.
    let radius = table.spec(tier).radius;
    (
        Ball,
        BallTier(tier),
        BallRadius(radius),
        body,
        Collider::ball(radius),
        Friction::coefficient(tuning.friction),
        Restitution::coefficient(tuning.restitution),
        Damping {
            linear_damping: 0.0,
            angular_damping: 0.0,
        },
        Velocity::zero(),
        ActiveEvents::COLLISION_EVENTS,
        Sprite {
            image: images.handle(tier),
            custom_size: Some(Vec2::splat(radius * 2.0)),
            ..default()
        },
        Transform::from_translation(pos.extend(0.0)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;

    fn fixtures() -> (SizeTable, TierImages, PhysicsTuning) {
        let table = SizeTable::try_from_config(&GameConfig::default()).unwrap();
        let images = TierImages(vec![Handle::default(); table.len()]);
        (table, images, PhysicsTuning::default())
    }

    #[test]
    fn dynamic_ball_carries_tier_and_collider() {
        let (table, images, tuning) = fixtures();
        let mut app = App::new();
        let e = app
            .world_mut()
            .spawn(dynamic_ball(&table, &images, 2, Vec2::new(10.0, -40.0), &tuning))
            .id();
        assert_eq!(app.world().get::<BallTier>(e), Some(&BallTier(2)));
        assert_eq!(app.world().get::<BallRadius>(e).map(|r| r.0), Some(54.0));
        assert!(matches!(
            app.world().get::<RigidBody>(e),
            Some(RigidBody::Dynamic)
        ));
        assert!(app.world().get::<PreviewBall>(e).is_none());
        let tf = app.world().get::<Transform>(e).unwrap();
        assert_eq!(tf.translation.truncate(), Vec2::new(10.0, -40.0));
    }

    #[test]
    fn preview_ball_is_fixed_and_marked() {
        let (table, images, tuning) = fixtures();
        let mut app = App::new();
        let e = app
            .world_mut()
            .spawn(preview_ball(&table, &images, 0, Vec2::ZERO, &tuning))
            .id();
        assert!(app.world().get::<PreviewBall>(e).is_some());
        assert!(matches!(
            app.world().get::<RigidBody>(e),
            Some(RigidBody::Fixed)
        ));
    }

    #[test]
    #[should_panic]
    fn out_of_range_tier_panics() {
        let (table, images, tuning) = fixtures();
        let mut app = App::new();
        app.world_mut()
            .spawn(dynamic_ball(&table, &images, 99, Vec2::ZERO, &tuning));
    }
}
