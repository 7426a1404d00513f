// Pattern 4: Structs Follow the Same Rules
//
// A struct parameter taken by value is a whole separate Player; changing its
// level changes nothing for the caller. Taking `&mut Player` aliases the caller's
// struct, and field access auto-dereferences (`player.level`, not `(*player).level`).

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A game character used as the demonstration payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub level: i32,
}

impl Player {
    pub fn new(name: impl Into<String>, level: i32) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new("Karl", 1)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (level {})", self.name, self.level)
    }
}

/// Levels up the callee's own Player. Pass `player.clone()` to keep using yours.
/// Levels wrap on overflow.
pub fn level_up_by_value(mut player: Player, delta: i32) {
    player.level = player.level.wrapping_add(delta);
    debug!("level_up_by_value: {}.level: {}", player.name, player.level);
}

/// Levels up the caller's Player in place.
/// Levels wrap on overflow.
pub fn level_up_by_reference(player: &mut Player, delta: i32) {
    player.level = player.level.wrapping_add(delta);
    debug!("level_up_by_reference: {}.level: {}", player.name, player.level);
}
