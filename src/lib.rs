pub mod app;
pub mod core;
pub mod gameplay;
pub mod interaction;
pub mod physics;

// Curated re-exports
pub use crate::app::game::GamePlugin;
pub use crate::app::state::GamePhase;
pub use crate::core::components::{Ball, BallSize, Bullet, Category, Fighter, Heart};
pub use crate::core::config::GameConfig;
