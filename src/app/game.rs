use bevy::prelude::*;

use crate::app::prompt::PromptPlugin;
use crate::app::state::GamePhase;
use crate::core::config::GameConfig;
use crate::core::system::system_order::{PostPhysicsAdjustSet, PrePhysicsSet};
use crate::gameplay::arena::ArenaPlugin;
use crate::gameplay::bullet::BulletPlugin;
use crate::gameplay::collision::CollisionRulesPlugin;
use crate::interaction::input::InputPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::physics::rapier_physics::PhysicsSetupPlugin;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GamePhase>()
            .configure_sets(
                Update,
                (PrePhysicsSet, PostPhysicsAdjustSet.after(PrePhysicsSet)),
            )
            .add_plugins((
                PhysicsSetupPlugin,
                ArenaPlugin,
                BulletPlugin,
                CollisionRulesPlugin,
                InputPlugin,
                PromptPlugin,
                AutoClosePlugin,
            ))
            .add_systems(Startup, (setup_camera, log_config_warnings));
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn log_config_warnings(cfg: Res<GameConfig>) {
    for warning in cfg.validate() {
        warn!(target: "config", "{warning}");
    }
}
