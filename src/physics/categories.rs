//! Collision-group wiring. Memberships/filters decide both which pairs the
//! solver pushes apart and which pairs reach the contact-rule system;
//! contact-only entities (bullets, hearts) are additionally spawned as
//! Rapier sensors so they never receive a physical response.
use bevy_rapier2d::prelude::{CollisionGroups, Group};

pub const FIGHTER: Group = Group::GROUP_1;
pub const BULLET: Group = Group::GROUP_2;
pub const BALL: Group = Group::GROUP_3;
pub const BORDER: Group = Group::GROUP_4;
pub const HEART: Group = Group::GROUP_5;

/// Fighter notices balls and hearts; being a fixed body it is never pushed.
pub fn fighter_groups() -> CollisionGroups {
    CollisionGroups::new(FIGHTER, BALL.union(HEART))
}

/// Balls bounce off the fighter, bullets and the border.
pub fn ball_groups() -> CollisionGroups {
    CollisionGroups::new(BALL, FIGHTER.union(BULLET).union(BORDER))
}

/// Bullets only ever meet balls.
pub fn bullet_groups() -> CollisionGroups {
    CollisionGroups::new(BULLET, BALL)
}

/// Hearts only ever meet the fighter.
pub fn heart_groups() -> CollisionGroups {
    CollisionGroups::new(HEART, FIGHTER)
}

/// The boundary loop only interacts with balls.
pub fn border_groups() -> CollisionGroups {
    CollisionGroups::new(BORDER, BALL)
}
