use bevy::prelude::*;

/// Entity kind tag. Fixed at spawn; the sole discriminator used when
/// classifying contact events (never sprite names or body handles).
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Fighter,
    Bullet,
    Ball,
    Border,
    Heart,
}

/// Marker for the player-controlled paddle. Exactly one exists while the
/// phase is Playing; removed on defeat.
#[derive(Component)]
pub struct Fighter;

#[derive(Component)]
pub struct Ball;

/// Logical ball diameter. Drives the sprite size, the collider radius
/// (half of it) and the split-threshold comparison.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone)]
pub struct BallSize(pub f32);

#[derive(Component)]
pub struct Bullet;

#[derive(Component)]
pub struct Heart;

/// Marker for the static boundary loop around the play area.
#[derive(Component)]
pub struct Border;

/// One-shot expiry for bullets that never hit anything.
#[derive(Component, Deref, DerefMut)]
pub struct BulletLifetime(pub Timer);
