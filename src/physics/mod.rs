pub mod categories;
pub mod rapier_physics;
