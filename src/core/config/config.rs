use anyhow::Context;
use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 800.0,
            title: "Ball Blitz".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Gravity in physics units per second squared (downward is negative).
    pub gravity_y: f32,
    /// Pixels per physics length unit handed to Rapier.
    pub pixels_per_unit: f32,
}
impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity_y: -1.0,
            pixels_per_unit: 150.0,
        }
    }
}
impl PhysicsConfig {
    /// Gravity expressed in pixel space, as Rapier consumes it.
    pub fn gravity_pixels(&self) -> f32 {
        self.gravity_y * self.pixels_per_unit
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FighterConfig {
    pub width: f32,
    pub height: f32,
    /// Distance of the fighter center from the bottom edge.
    pub baseline: f32,
}
impl Default for FighterConfig {
    fn default() -> Self {
        Self {
            width: 50.0,
            height: 50.0,
            baseline: 100.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SpawnRange<T> {
    pub min: T,
    pub max: T,
}
impl<T: Default> Default for SpawnRange<T> {
    fn default() -> Self {
        Self {
            min: Default::default(),
            max: Default::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BallConfig {
    /// Diameter of the single ball spawned on restart.
    pub initial_size: f32,
    /// Distance of the initial ball below the top edge.
    pub spawn_drop: f32,
    /// Balls at or below this diameter are destroyed outright instead of split.
    pub split_threshold: f32,
    /// Horizontal offset of each child from the struck parent.
    pub split_offset: f32,
    pub restitution: f32,
    pub friction: f32,
    pub linear_damping: f32,
    pub angular_damping: f32,
    /// Lateral launch speed range for split children; the left child gets the
    /// negated range so the pair always flies apart.
    pub child_vel_x: SpawnRange<f32>,
    pub child_vel_y: SpawnRange<f32>,
}
impl Default for BallConfig {
    fn default() -> Self {
        Self {
            initial_size: 80.0,
            spawn_drop: 100.0,
            split_threshold: 20.0,
            split_offset: 20.0,
            restitution: 0.8,
            friction: 0.2,
            linear_damping: 0.1,
            angular_damping: 0.5,
            child_vel_x: SpawnRange {
                min: 100.0,
                max: 150.0,
            },
            child_vel_y: SpawnRange {
                min: 250.0,
                max: 350.0,
            },
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BulletConfig {
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    /// Seconds before a bullet that hit nothing self-expires.
    pub lifetime: f32,
    /// Spawn height above the fighter center.
    pub muzzle_offset: f32,
}
impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            width: 5.0,
            height: 15.0,
            speed: 500.0,
            lifetime: 2.0,
            muzzle_offset: 30.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct HeartConfig {
    pub size: f32,
    /// Probability that a destroyed small ball drops a heart.
    pub drop_chance: f32,
}
impl Default for HeartConfig {
    fn default() -> Self {
        Self {
            size: 30.0,
            drop_chance: 0.5,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub fighter: FighterConfig,
    pub ball: BallConfig,
    pub bullet: BulletConfig,
    pub heart: HeartConfig,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let cfg = ron::from_str(&data)
            .with_context(|| format!("parse RON config {}", path.display()))?;
        Ok(cfg)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(format!("{e:#}"))),
        }
    }

    /// Non-fatal sanity checks; each finding is logged by the caller.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.ball.initial_size <= self.ball.split_threshold {
            warnings.push(format!(
                "ball.initial_size ({}) not above split_threshold ({}); the first hit already destroys it",
                self.ball.initial_size, self.ball.split_threshold
            ));
        }
        if self.ball.split_threshold <= 0.0 {
            warnings.push("ball.split_threshold must be positive".into());
        }
        if !(0.0..=1.0).contains(&self.heart.drop_chance) {
            warnings.push(format!(
                "heart.drop_chance ({}) outside [0,1]",
                self.heart.drop_chance
            ));
        }
        if self.bullet.lifetime <= 0.0 {
            warnings.push("bullet.lifetime must be positive".into());
        }
        if self.bullet.speed <= 0.0 {
            warnings.push("bullet.speed must be positive".into());
        }
        if self.ball.child_vel_x.min > self.ball.child_vel_x.max
            || self.ball.child_vel_y.min > self.ball.child_vel_y.max
        {
            warnings.push("ball child velocity ranges are inverted".into());
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn defaults_carry_game_constants() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.ball.initial_size, 80.0);
        assert_eq!(cfg.ball.split_threshold, 20.0);
        assert_eq!(cfg.ball.split_offset, 20.0);
        assert_eq!(cfg.ball.restitution, 0.8);
        assert_eq!(cfg.bullet.speed, 500.0);
        assert_eq!(cfg.bullet.lifetime, 2.0);
        assert_eq!(cfg.heart.drop_chance, 0.5);
        assert!(cfg.validate().is_empty(), "defaults must validate cleanly");
    }

    #[test]
    fn partial_ron_overrides_merge_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"(
                window: (width: 320.0, height: 640.0),
                ball: (initial_size: 160.0),
            )"#
        )
        .expect("write temp ron");
        let cfg = GameConfig::load_from_file(file.path()).expect("load");
        assert_eq!(cfg.window.width, 320.0);
        assert_eq!(cfg.ball.initial_size, 160.0);
        // untouched sections keep defaults
        assert_eq!(cfg.ball.split_threshold, 20.0);
        assert_eq!(cfg.bullet.speed, 500.0);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let (cfg, err) = GameConfig::load_or_default("does/not/exist.ron");
        assert_eq!(cfg, GameConfig::default());
        assert!(err.is_some());
    }

    #[test]
    fn validate_flags_bad_values() {
        let mut cfg = GameConfig::default();
        cfg.heart.drop_chance = 1.5;
        cfg.bullet.lifetime = 0.0;
        let warnings = cfg.validate();
        assert_eq!(warnings.len(), 2);
    }
}
