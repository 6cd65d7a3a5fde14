use bevy::prelude::*;

use ball_blitz::app::game::GamePlugin;
use ball_blitz::core::config::GameConfig;

const CONFIG_PATH: &str = "assets/config/game.ron";

fn main() {
    // Load configuration (fall back to defaults if missing or malformed)
    let (cfg, load_err) = GameConfig::load_or_default(CONFIG_PATH);
    if let Some(err) = &load_err {
        // Logger is not up yet; this must still reach the user.
        eprintln!("config: {err}; using defaults");
    }

    App::new()
        .insert_resource(cfg.clone())
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(GamePlugin)
        .run();
}
