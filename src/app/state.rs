use bevy::prelude::*;

/// Coarse game phase gating which rules are active.
/// Playing -> Victory (last ball removed) or Defeat (ball/heart touches the
/// fighter); both return to Playing through the end-of-game prompt.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Playing,
    Victory,
    Defeat,
}
