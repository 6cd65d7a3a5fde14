//! Contact rule resolution. Rapier's begin-contact queue is drained once per
//! frame and every event is classified by the two entities' `Category` tags
//! into at most one rule, in precedence order:
//! 1. Bullet-Ball: remove both, split or drop a heart, then victory check.
//! 2. Heart-Fighter: defeat (the pickup is a hazard; intentional, see DESIGN.md).
//! 3. Ball-Fighter: defeat.
use bevy::prelude::*;
use bevy_rapier2d::prelude::CollisionEvent;
use rand::Rng;
use std::collections::HashSet;

use crate::app::state::GamePhase;
use crate::core::components::{Ball, BallSize, Category, Fighter};
use crate::core::config::{GameConfig, SpawnRange};
use crate::core::system::system_order::PostPhysicsAdjustSet;
use crate::gameplay::arena::{spawn_ball, spawn_heart};

/// Emitted whenever a bullet removes a ball, after any children are queued.
#[derive(Event, Debug, Clone)]
pub struct BallStruck {
    pub position: Vec2,
    pub size: f32,
    pub split: bool,
}

pub struct CollisionRulesPlugin;

impl Plugin for CollisionRulesPlugin {
    fn build(&self, app: &mut App) {
        // add_event is a no-op when the Rapier plugin already registered it;
        // headless test harnesses rely on this registration.
        app.add_event::<CollisionEvent>()
            .add_event::<BallStruck>()
            .add_systems(
                Update,
                apply_contact_rules
                    .in_set(PostPhysicsAdjustSet)
                    .run_if(in_state(GamePhase::Playing)),
            );
    }
}

/// Orders `(e1, e2)` as `(want_a, want_b)` if the categories match either way.
fn match_pair(
    e1: Entity,
    c1: Category,
    e2: Entity,
    c2: Category,
    want_a: Category,
    want_b: Category,
) -> Option<(Entity, Entity)> {
    if c1 == want_a && c2 == want_b {
        Some((e1, e2))
    } else if c2 == want_a && c1 == want_b {
        Some((e2, e1))
    } else {
        None
    }
}

fn sample(rng: &mut impl Rng, range: &SpawnRange<f32>) -> f32 {
    if range.max > range.min {
        rng.gen_range(range.min..range.max)
    } else {
        range.min
    }
}

fn apply_contact_rules(
    mut collisions: EventReader<CollisionEvent>,
    mut commands: Commands,
    cfg: Res<GameConfig>,
    categories: Query<&Category>,
    transforms: Query<&Transform>,
    sizes: Query<&BallSize>,
    balls: Query<(), With<Ball>>,
    fighters: Query<Entity, With<Fighter>>,
    mut struck: EventWriter<BallStruck>,
    mut next_phase: ResMut<NextState<GamePhase>>,
) {
    // Entities despawned earlier this frame; later events that still
    // reference them are stale and must be no-ops.
    let mut removed: HashSet<Entity> = HashSet::new();
    let mut balls_left = balls.iter().count();
    let mut rng = rand::thread_rng();

    for event in collisions.read() {
        let CollisionEvent::Started(e1, e2, _flags) = event else {
            continue;
        };
        if removed.contains(e1) || removed.contains(e2) {
            continue;
        }
        // Entities gone before this frame also classify as stale.
        let (Ok(&c1), Ok(&c2)) = (categories.get(*e1), categories.get(*e2)) else {
            continue;
        };

        if let Some((bullet, ball)) = match_pair(*e1, c1, *e2, c2, Category::Bullet, Category::Ball)
        {
            commands.entity(bullet).despawn();
            commands.entity(ball).despawn();
            removed.insert(bullet);
            removed.insert(ball);
            balls_left = balls_left.saturating_sub(1);

            let position = transforms
                .get(ball)
                .map(|t| t.translation.truncate())
                .unwrap_or_default();
            let size = sizes.get(ball).map(|s| s.0).unwrap_or_default();

            if size > cfg.ball.split_threshold {
                let child_size = size * 0.5;
                let offset = Vec2::new(cfg.ball.split_offset, 0.0);
                let left_vel = Vec2::new(
                    -sample(&mut rng, &cfg.ball.child_vel_x),
                    sample(&mut rng, &cfg.ball.child_vel_y),
                );
                let right_vel = Vec2::new(
                    sample(&mut rng, &cfg.ball.child_vel_x),
                    sample(&mut rng, &cfg.ball.child_vel_y),
                );
                spawn_ball(&mut commands, &cfg.ball, position - offset, child_size, left_vel);
                spawn_ball(&mut commands, &cfg.ball, position + offset, child_size, right_vel);
                balls_left += 2;
                struck.write(BallStruck {
                    position,
                    size,
                    split: true,
                });
            } else {
                if rng.gen_bool(f64::from(cfg.heart.drop_chance.clamp(0.0, 1.0))) {
                    spawn_heart(&mut commands, &cfg.heart, position);
                }
                struck.write(BallStruck {
                    position,
                    size,
                    split: false,
                });
            }

            // Victory check runs after every ball removal, never delayed.
            if balls_left == 0 {
                info!(target: "rules", "last ball destroyed; victory");
                next_phase.set(GamePhase::Victory);
                break;
            }
        } else if match_pair(*e1, c1, *e2, c2, Category::Heart, Category::Fighter).is_some()
            || match_pair(*e1, c1, *e2, c2, Category::Ball, Category::Fighter).is_some()
        {
            // Fighter is removed on defeat; the rest of this frame's queue
            // is dropped so the first terminal transition wins.
            for fighter in &fighters {
                commands.entity(fighter).despawn();
                removed.insert(fighter);
            }
            info!(target: "rules", "fighter touched by {:?}; defeat", if c1 == Category::Fighter { c2 } else { c1 });
            next_phase.set(GamePhase::Defeat);
            break;
        }
    }
}
