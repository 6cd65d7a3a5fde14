pub mod game;
pub mod prompt;
pub mod state;
