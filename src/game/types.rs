use super::constants::COORD_SCALE;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
  pub x: f64,
  pub y: f64,
}

impl Position {
  pub fn rounded(self) -> Position {
    Position {
      x: super::math::round_coord(self.x),
      y: super::math::round_coord(self.y),
    }
  }

  pub fn key(self) -> PositionKey {
    PositionKey {
      centi_x: (self.x * COORD_SCALE).round() as i64,
      centi_y: (self.y * COORD_SCALE).round() as i64,
    }
  }
}

// Canonical set key for a position: centi-unit integers, so structurally
// equal coordinates always collide regardless of arrival path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionKey {
  centi_x: i64,
  centi_y: i64,
}

impl PositionKey {
  pub fn position(self) -> Position {
    Position {
      x: self.centi_x as f64 / COORD_SCALE,
      y: self.centi_y as f64 / COORD_SCALE,
    }
  }
}

#[derive(Debug, Clone)]
pub struct Snake {
  pub body: VecDeque<Position>,
  pub velocity_x: f64,
  pub velocity_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrbSize {
  #[serde(rename = "SMALL")]
  Small,
  #[serde(rename = "LARGE")]
  Large,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Orb {
  pub position: Position,
  pub orb_size: OrbSize,
  pub color: String,
}

// The server treats two orbs at the same position as the same orb; the
// client's orb set follows that rule.
impl PartialEq for Orb {
  fn eq(&self, other: &Self) -> bool {
    self.position.key() == other.position.key()
  }
}

impl Eq for Orb {}

impl Hash for Orb {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.position.key().hash(state);
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
  pub username: String,
  pub score: i64,
}
