//! End-of-game prompts. Shown on entering Victory or Defeat; acknowledging
//! (click, tap or Enter/Space) returns to Playing, which restarts the arena.
use bevy::prelude::*;
use bevy::ui::{AlignItems, FlexDirection, JustifyContent};

use crate::app::state::GamePhase;

pub struct PromptPlugin;

impl Plugin for PromptPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GamePhase::Victory), show_victory_prompt)
            .add_systems(OnEnter(GamePhase::Defeat), show_defeat_prompt)
            .add_systems(OnExit(GamePhase::Victory), despawn_prompt)
            .add_systems(OnExit(GamePhase::Defeat), despawn_prompt)
            .add_systems(
                Update,
                acknowledge_prompt
                    .run_if(in_state(GamePhase::Victory).or(in_state(GamePhase::Defeat))),
            );
    }
}

#[derive(Component)]
struct PromptUiRoot;

fn show_victory_prompt(commands: Commands) {
    spawn_prompt(commands, "You won!", "Congratulations!\nClick or press Enter to play again.");
}

fn show_defeat_prompt(commands: Commands) {
    spawn_prompt(commands, "Game Over", "You lost!\nClick or press Enter to play again.");
}

fn spawn_prompt(mut commands: Commands, title: &str, message: &str) {
    info!(target: "prompt", "{title}");
    commands
        .spawn((
            PromptUiRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(12.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.02, 0.02, 0.05, 0.85)),
        ))
        .with_children(|p| {
            p.spawn((
                Text::new(title),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
            ));
            p.spawn(Text::new(message));
        });
}

fn despawn_prompt(mut commands: Commands, roots: Query<Entity, With<PromptUiRoot>>) {
    for entity in &roots {
        commands.entity(entity).despawn();
    }
}

fn acknowledge_prompt(
    buttons: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    touches: Res<Touches>,
    mut next_phase: ResMut<NextState<GamePhase>>,
) {
    let acknowledged = buttons.just_released(MouseButton::Left)
        || touches.iter_just_released().next().is_some()
        || keys.just_pressed(KeyCode::Enter)
        || keys.just_pressed(KeyCode::Space);
    if acknowledged {
        next_phase.set(GamePhase::Playing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    fn harness() -> App {
        let mut app = App::new();
        app.add_plugins(StatesPlugin);
        app.init_resource::<ButtonInput<MouseButton>>();
        app.init_resource::<ButtonInput<KeyCode>>();
        app.init_resource::<Touches>();
        app.init_state::<GamePhase>();
        app.add_plugins(PromptPlugin);
        app
    }

    fn prompt_count(app: &mut App) -> usize {
        let world = app.world_mut();
        world.query::<&PromptUiRoot>().iter(world).count()
    }

    #[test]
    fn prompt_appears_and_acknowledgement_restarts() {
        let mut app = harness();
        app.update();
        assert_eq!(prompt_count(&mut app), 0);

        app.world_mut()
            .resource_mut::<NextState<GamePhase>>()
            .set(GamePhase::Victory);
        app.update();
        assert_eq!(prompt_count(&mut app), 1);

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Enter);
        app.update(); // acknowledge, Playing queued
        app.update(); // transition applied, OnExit despawns the overlay
        assert_eq!(prompt_count(&mut app), 0);
        assert_eq!(
            *app.world().resource::<State<GamePhase>>().get(),
            GamePhase::Playing
        );
    }

    #[test]
    fn defeat_prompt_spawns_on_enter() {
        let mut app = harness();
        app.update();
        app.world_mut()
            .resource_mut::<NextState<GamePhase>>()
            .set(GamePhase::Defeat);
        app.update();
        assert_eq!(prompt_count(&mut app), 1);
    }
}
