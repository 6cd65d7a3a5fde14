use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::app::state::GamePhase;
use crate::core::config::GameConfig;

pub struct PhysicsSetupPlugin; // our wrapper to configure Rapier & pausing

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        let pixels_per_unit = app
            .world()
            .get_resource::<GameConfig>()
            .map(|cfg| cfg.physics.pixels_per_unit)
            .unwrap_or_else(|| GameConfig::default().physics.pixels_per_unit);
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(
            pixels_per_unit,
        ))
        .add_systems(Startup, configure_gravity)
        .add_systems(OnEnter(GamePhase::Playing), resume_simulation)
        .add_systems(OnEnter(GamePhase::Victory), pause_simulation)
        .add_systems(OnEnter(GamePhase::Defeat), pause_simulation);
    }
}

fn configure_gravity(cfg: Res<GameConfig>, mut rapier_cfg: Query<&mut RapierConfiguration>) {
    for mut rc in rapier_cfg.iter_mut() {
        rc.gravity = Vect::new(0.0, cfg.physics.gravity_pixels());
    }
}

/// Freezes simulation advancement without tearing entities down, so the
/// end-of-game prompt can restart from the same loop.
fn pause_simulation(mut rapier_cfg: Query<&mut RapierConfiguration>) {
    for mut rc in rapier_cfg.iter_mut() {
        rc.physics_pipeline_active = false;
    }
}

fn resume_simulation(mut rapier_cfg: Query<&mut RapierConfiguration>) {
    for mut rc in rapier_cfg.iter_mut() {
        rc.physics_pipeline_active = true;
    }
}
