use super::leaderboard;
use super::motion::{self, MotionDelta};
use super::types::{LeaderboardEntry, Orb, Position, PositionKey, Snake};
use std::collections::{HashMap, HashSet};

// The one owner of everything the server tells us plus the local snake.
// The session applies events and ticks; rendering only ever sees the
// RenderFrame snapshots published after each mutation.
#[derive(Debug)]
pub struct GameState {
  snake: Snake,
  other_bodies: HashSet<PositionKey>,
  orbs: HashSet<Orb>,
  scores: HashMap<String, i64>,
  game_code: String,
}

#[derive(Debug, Clone, Default)]
pub struct RenderFrame {
  pub snake: Vec<Position>,
  pub other_bodies: Vec<Position>,
  pub orbs: Vec<Orb>,
  pub leaderboard: Vec<LeaderboardEntry>,
  pub game_code: String,
}

impl GameState {
  pub fn new() -> Self {
    Self {
      snake: motion::create_snake(),
      other_bodies: HashSet::new(),
      orbs: HashSet::new(),
      scores: HashMap::new(),
      game_code: String::new(),
    }
  }

  pub fn advance(&mut self, target: Position) -> MotionDelta {
    motion::advance(&mut self.snake, target)
  }

  pub fn grow_own(&mut self, new_body_parts: Vec<Position>) {
    motion::grow(&mut self.snake, new_body_parts);
  }

  // Remote motion is pure set arithmetic: the remove may already be gone
  // and the add may already be present, so replays are harmless.
  pub fn apply_remote_delta(&mut self, add: Position, remove: Position) {
    self.other_bodies.remove(&remove.key());
    self.other_bodies.insert(add.key());
  }

  pub fn apply_other_growth(&mut self, new_body_parts: &[Position]) {
    for position in new_body_parts {
      self.other_bodies.insert(position.key());
    }
  }

  pub fn apply_other_death(&mut self, remove_positions: &[Position]) {
    for position in remove_positions {
      self.other_bodies.remove(&position.key());
    }
  }

  // Orbs are replaced wholesale; there is no incremental orb protocol.
  pub fn replace_orbs(&mut self, orb_set: Vec<Orb>) {
    self.orbs = orb_set.into_iter().collect();
  }

  pub fn set_leaderboard(&mut self, entries: &[LeaderboardEntry]) {
    self.scores = leaderboard::project(entries);
  }

  pub fn set_game_code(&mut self, game_code: String) {
    self.game_code = game_code;
  }

  pub fn frame(&self) -> RenderFrame {
    RenderFrame {
      snake: self.snake.body.iter().copied().collect(),
      other_bodies: self
        .other_bodies
        .iter()
        .map(|key| key.position())
        .collect(),
      orbs: self.orbs.iter().cloned().collect(),
      leaderboard: leaderboard::ranked(&self.scores),
      game_code: self.game_code.clone(),
    }
  }
}
