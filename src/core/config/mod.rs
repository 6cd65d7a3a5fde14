pub mod config;

pub use config::{
    BallConfig, BulletConfig, FighterConfig, GameConfig, HeartConfig, PhysicsConfig, SpawnRange,
    WindowConfig,
};
