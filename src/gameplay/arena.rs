//! Entity construction and the arena reset. Every spawn attaches the
//! `Category` tag plus the collision-group wiring; the contact-rule system
//! relies on those tags exclusively.
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::app::state::GamePhase;
use crate::core::components::{
    Ball, BallSize, Border, Bullet, BulletLifetime, Category, Fighter, Heart,
};
use crate::core::config::{BallConfig, BulletConfig, GameConfig, HeartConfig};
use crate::physics::categories;

const FIGHTER_COLOR: Color = Color::srgb(0.35, 0.75, 0.95);
const BALL_COLOR: Color = Color::srgb(0.95, 0.55, 0.15);
const BULLET_COLOR: Color = Color::srgb(0.9, 0.1, 0.1);
const HEART_COLOR: Color = Color::srgb(0.95, 0.3, 0.5);

/// Half-extents of the play area, taken from the configured surface
/// dimensions at construction time.
#[derive(Resource, Debug, Clone, Copy)]
pub struct Arena {
    pub half: Vec2,
}

impl Arena {
    pub fn from_config(cfg: &GameConfig) -> Self {
        Self {
            half: Vec2::new(cfg.window.width * 0.5, cfg.window.height * 0.5),
        }
    }

    /// Fighter rest position: horizontal center, `baseline` above the bottom.
    pub fn fighter_position(&self, cfg: &GameConfig) -> Vec2 {
        Vec2::new(0.0, -self.half.y + cfg.fighter.baseline)
    }

    /// Initial ball position: horizontal center, `spawn_drop` below the top.
    pub fn ball_spawn_position(&self, cfg: &GameConfig) -> Vec2 {
        Vec2::new(0.0, self.half.y - cfg.ball.spawn_drop)
    }
}

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_arena)
            .add_systems(OnEnter(GamePhase::Playing), reset_arena);
    }
}

fn setup_arena(mut commands: Commands, cfg: Res<GameConfig>) {
    commands.insert_resource(Arena::from_config(&cfg));
}

/// RestartGame: clear every categorized entity, then respawn border, fighter
/// and one initial ball. Runs on entering Playing, which covers both the
/// very first frame and every prompt acknowledgement.
fn reset_arena(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    arena: Res<Arena>,
    existing: Query<Entity, With<Category>>,
) {
    for entity in &existing {
        commands.entity(entity).despawn();
    }
    spawn_border(&mut commands, &arena);
    spawn_fighter(&mut commands, &cfg, &arena);
    spawn_ball(
        &mut commands,
        &cfg.ball,
        arena.ball_spawn_position(&cfg),
        cfg.ball.initial_size,
        Vec2::ZERO,
    );
    info!(target: "arena", "arena reset: one ball of size {}", cfg.ball.initial_size);
}

/// Static edge loop around the play area. Zero friction so balls do not lose
/// lateral energy to the walls.
pub fn spawn_border(commands: &mut Commands, arena: &Arena) {
    let Vec2 { x: hw, y: hh } = arena.half;
    let corners = vec![
        Vec2::new(-hw, hh),
        Vec2::new(hw, hh),
        Vec2::new(hw, -hh),
        Vec2::new(-hw, -hh),
    ];
    let segments = Some(vec![[0, 1], [1, 2], [2, 3], [3, 0]]);
    commands.spawn((
        Border,
        Category::Border,
        Transform::default(),
        RigidBody::Fixed,
        Collider::polyline(corners, segments),
        categories::border_groups(),
        Friction::coefficient(0.0),
    ));
}

/// The player paddle. A fixed body: balls bounce off it, nothing moves it.
pub fn spawn_fighter(commands: &mut Commands, cfg: &GameConfig, arena: &Arena) {
    let size = Vec2::new(cfg.fighter.width, cfg.fighter.height);
    commands.spawn((
        Fighter,
        Category::Fighter,
        Sprite::from_color(FIGHTER_COLOR, size),
        Transform::from_translation(arena.fighter_position(cfg).extend(0.0)),
        RigidBody::Fixed,
        Collider::cuboid(size.x * 0.5, size.y * 0.5),
        categories::fighter_groups(),
        ActiveEvents::COLLISION_EVENTS,
    ));
}

pub fn spawn_ball(
    commands: &mut Commands,
    ball: &BallConfig,
    position: Vec2,
    size: f32,
    velocity: Vec2,
) {
    commands.spawn((
        Ball,
        Category::Ball,
        BallSize(size),
        Sprite::from_color(BALL_COLOR, Vec2::splat(size)),
        Transform::from_translation(position.extend(0.0)),
        RigidBody::Dynamic,
        Collider::ball(size * 0.5),
        categories::ball_groups(),
        Restitution::coefficient(ball.restitution),
        Friction::coefficient(ball.friction),
        Damping {
            linear_damping: ball.linear_damping,
            angular_damping: ball.angular_damping,
        },
        Velocity::linear(velocity),
        ActiveEvents::COLLISION_EVENTS,
    ));
}

/// Contact-only pickup; falls under gravity but never pushes anything.
pub fn spawn_heart(commands: &mut Commands, heart: &HeartConfig, position: Vec2) {
    commands.spawn((
        Heart,
        Category::Heart,
        Sprite::from_color(HEART_COLOR, Vec2::splat(heart.size)),
        Transform::from_translation(position.extend(0.0)),
        RigidBody::Dynamic,
        Collider::ball(heart.size * 0.5),
        Sensor,
        categories::heart_groups(),
        ActiveEvents::COLLISION_EVENTS,
    ));
}

/// Short-lived projectile; expires via `BulletLifetime` if it hits nothing.
pub fn spawn_bullet(commands: &mut Commands, bullet: &BulletConfig, from: Vec2) {
    let size = Vec2::new(bullet.width, bullet.height);
    commands.spawn((
        Bullet,
        Category::Bullet,
        BulletLifetime(Timer::from_seconds(bullet.lifetime, TimerMode::Once)),
        Sprite::from_color(BULLET_COLOR, size),
        Transform::from_translation(from.extend(0.0)),
        RigidBody::Dynamic,
        Collider::cuboid(size.x * 0.5, size.y * 0.5),
        Sensor,
        categories::bullet_groups(),
        Velocity::linear(Vec2::new(0.0, bullet.speed)),
        ActiveEvents::COLLISION_EVENTS,
    ));
}
