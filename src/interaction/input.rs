//! Pointer input: the fighter's x tracks the pointer while a release (mouse
//! button up or touch end) fires one bullet.
use bevy::prelude::*;

use crate::app::state::GamePhase;
use crate::core::components::Fighter;
use crate::core::config::GameConfig;
use crate::core::system::system_order::PrePhysicsSet;
use crate::gameplay::arena::spawn_bullet;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (steer_fighter, fire_on_release)
                .chain()
                .in_set(PrePhysicsSet)
                .run_if(in_state(GamePhase::Playing)),
        );
    }
}

fn cursor_world_pos(
    camera_q: &Query<(&Camera, &GlobalTransform)>,
    screen_pos: Vec2,
) -> Option<Vec2> {
    let (camera, cam_tf) = camera_q.iter().next()?;
    camera.viewport_to_world_2d(cam_tf, screen_pos).ok()
}

fn primary_pointer_world_pos(
    window: &Window,
    touches: &Touches,
    camera_q: &Query<(&Camera, &GlobalTransform)>,
) -> Option<Vec2> {
    if let Some(touch) = touches.iter().next() {
        return cursor_world_pos(camera_q, touch.position());
    }
    let cursor = window.cursor_position()?;
    cursor_world_pos(camera_q, cursor)
}

fn steer_fighter(
    touches: Res<Touches>,
    windows_q: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    mut fighter_q: Query<&mut Transform, With<Fighter>>,
) {
    let Ok(window) = windows_q.single() else {
        return;
    };
    let Some(world_pos) = primary_pointer_world_pos(window, &touches, &camera_q) else {
        return;
    };
    let Ok(mut tf) = fighter_q.single_mut() else {
        return;
    };
    // No explicit clamp: the border never physically constrains the fighter.
    tf.translation.x = world_pos.x;
}

fn fire_on_release(
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    mut commands: Commands,
    cfg: Res<GameConfig>,
    fighter_q: Query<&Transform, With<Fighter>>,
) {
    let released =
        buttons.just_released(MouseButton::Left) || touches.iter_just_released().next().is_some();
    if !released {
        return;
    }
    let Ok(tf) = fighter_q.single() else {
        return;
    };
    let muzzle = tf.translation.truncate() + Vec2::new(0.0, cfg.bullet.muzzle_offset);
    spawn_bullet(&mut commands, &cfg.bullet, muzzle);
}
