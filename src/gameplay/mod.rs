pub mod arena;
pub mod bullet;
pub mod collision;
