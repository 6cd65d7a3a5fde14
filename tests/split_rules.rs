//! Scenario tests for the contact rules running against a real arena.
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy_rapier2d::rapier::geometry::CollisionEventFlags;
use bevy_rapier2d::prelude::CollisionEvent;

use ball_blitz::core::components::{Ball, BallSize, Bullet, Category, Fighter};
use ball_blitz::gameplay::arena::ArenaPlugin;
use ball_blitz::gameplay::collision::CollisionRulesPlugin;
use ball_blitz::{GameConfig, GamePhase};

fn harness(cfg: GameConfig) -> App {
    let mut app = App::new();
    app.add_plugins(StatesPlugin);
    app.insert_resource(cfg);
    app.init_state::<GamePhase>();
    app.add_plugins((ArenaPlugin, CollisionRulesPlugin));
    app.update(); // startup + OnEnter(Playing) arena spawn
    app
}

fn contact(app: &mut App, a: Entity, b: Entity) {
    app.world_mut()
        .send_event(CollisionEvent::Started(a, b, CollisionEventFlags::empty()));
}

fn only_ball(app: &mut App) -> Entity {
    let world = app.world_mut();
    world
        .query_filtered::<Entity, With<Ball>>()
        .single(world)
        .expect("exactly one ball")
}

fn spawn_test_bullet(app: &mut App) -> Entity {
    app.world_mut()
        .spawn((Bullet, Category::Bullet, Transform::default()))
        .id()
}

#[test]
fn bullet_strike_splits_initial_ball() {
    let mut app = harness(GameConfig::default());
    let ball = only_ball(&mut app);
    let spawn_x = 0.0;
    let bullet = spawn_test_bullet(&mut app);
    contact(&mut app, bullet, ball);
    app.update();

    let world = app.world_mut();
    let children: Vec<(f32, f32)> = world
        .query::<(&BallSize, &Transform)>()
        .iter(world)
        .map(|(s, t)| (s.0, t.translation.x))
        .collect();
    // balls-set size goes from 1 to 2
    assert_eq!(children.len(), 2);
    let mut xs: Vec<f32> = children.iter().map(|(_, x)| *x).collect();
    xs.sort_by(f32::total_cmp);
    assert_eq!(xs, vec![spawn_x - 20.0, spawn_x + 20.0]);
    for (size, _) in children {
        assert_eq!(size, 40.0);
    }
}

#[test]
fn destroying_last_ball_is_victory() {
    let mut cfg = GameConfig::default();
    cfg.ball.initial_size = 20.0; // at threshold: first hit destroys it
    cfg.heart.drop_chance = 0.0;
    let mut app = harness(cfg);
    let ball = only_ball(&mut app);
    let bullet = spawn_test_bullet(&mut app);
    contact(&mut app, bullet, ball);
    app.update();
    app.update();

    assert_eq!(
        *app.world().resource::<State<GamePhase>>().get(),
        GamePhase::Victory
    );
    let world = app.world_mut();
    assert_eq!(world.query::<&Ball>().iter(world).count(), 0);
    // victory leaves the fighter alone
    assert_eq!(world.query::<&Fighter>().iter(world).count(), 1);
}

#[test]
fn ball_reaching_fighter_is_defeat() {
    let mut app = harness(GameConfig::default());
    let ball = only_ball(&mut app);
    let fighter = {
        let world = app.world_mut();
        world
            .query_filtered::<Entity, With<Fighter>>()
            .single(world)
            .expect("one fighter")
    };
    contact(&mut app, ball, fighter);
    app.update();
    app.update();

    assert_eq!(
        *app.world().resource::<State<GamePhase>>().get(),
        GamePhase::Defeat
    );
    assert!(app.world().get_entity(fighter).is_err());
    assert!(app.world().get_entity(ball).is_ok());
}
