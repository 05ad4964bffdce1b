use bevy::prelude::*;

/// Marker component identifying a ball entity (falling, fused, or preview).
#[derive(Component)]
pub struct Ball;

/// Index into the [`SizeTable`](crate::core::size_table::SizeTable); assigned
/// at spawn and never mutated. Two touching dynamic balls fuse iff their
/// tiers are equal.
#[derive(Component, Debug, Deref, Copy, Clone, PartialEq, Eq)]
pub struct BallTier(pub usize);

/// Logical radius used both for the collider and the sprite scale.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone)]
pub struct BallRadius(pub f32);

/// Marker for the static aim preview ball shown at the spawn height.
#[derive(Component)]
pub struct PreviewBall;
