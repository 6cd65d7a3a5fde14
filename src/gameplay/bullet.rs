use bevy::prelude::*;

use crate::app::state::GamePhase;
use crate::core::components::BulletLifetime;

pub struct BulletPlugin;

impl Plugin for BulletPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            expire_bullets.run_if(in_state(GamePhase::Playing)),
        );
    }
}

/// Scheduled one-shot removal: a bullet that hit nothing disappears once its
/// timer runs out.
fn expire_bullets(
    time: Res<Time>,
    mut commands: Commands,
    mut bullets: Query<(Entity, &mut BulletLifetime)>,
) {
    for (entity, mut lifetime) in &mut bullets {
        lifetime.tick(time.delta());
        if lifetime.finished() {
            commands.entity(entity).despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;
    use std::time::Duration;

    #[test]
    fn bullet_expires_after_lifetime() {
        // No TimePlugin: the clock is advanced by hand so the test is
        // deterministic.
        let mut app = App::new();
        app.add_plugins(StatesPlugin);
        app.init_resource::<Time>();
        app.init_state::<GamePhase>();
        app.add_plugins(BulletPlugin);

        let bullet = app
            .world_mut()
            .spawn(BulletLifetime(Timer::from_seconds(2.0, TimerMode::Once)))
            .id();

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(1.0));
        app.update();
        assert!(app.world().get_entity(bullet).is_ok());

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(1.5));
        app.update();
        app.update();
        assert!(app.world().get_entity(bullet).is_err());
    }
}
