use super::constants::{SEGMENT_SPACING, SNAKE_SPEED, SPAWN_X, SPAWN_Y, STARTING_LENGTH, TURN_RATE};
use super::math::{heading, heading_to, turn_toward};
use super::types::{Position, Snake};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionDelta {
  pub add: Position,
  pub remove: Position,
}

// One fixed tick of steering: the heading turns by exactly TURN_RATE toward
// the cursor target, the head advances by one velocity step, and the tail
// gives up one segment. Net chain length never changes here.
pub fn advance(snake: &mut Snake, target: Position) -> MotionDelta {
  let head = *snake
    .body
    .front()
    .expect("a live snake always has a body to move");
  let removed = snake
    .body
    .pop_back()
    .expect("a live snake always has a tail to drop");

  let desired = heading_to(head, target);
  let current = heading(snake.velocity_x, snake.velocity_y);
  let turned = turn_toward(current, desired, TURN_RATE);

  snake.velocity_x = SNAKE_SPEED * turned.cos();
  snake.velocity_y = SNAKE_SPEED * turned.sin();

  let next = Position {
    x: head.x + snake.velocity_x,
    y: head.y + snake.velocity_y,
  };
  snake.body.push_front(next);

  // The chain keeps full precision; only the wire delta is rounded.
  MotionDelta {
    add: next.rounded(),
    remove: removed.rounded(),
  }
}

// Growth comes only from the server; appended segments stay forever.
pub fn grow(snake: &mut Snake, new_segments: impl IntoIterator<Item = Position>) {
  for segment in new_segments {
    snake.body.push_back(segment);
  }
}

pub fn create_snake() -> Snake {
  let mut body = VecDeque::with_capacity(STARTING_LENGTH);
  for index in 0..STARTING_LENGTH {
    body.push_back(Position {
      x: SPAWN_X,
      y: SPAWN_Y + SEGMENT_SPACING * index as f64,
    });
  }
  Snake {
    body,
    velocity_x: 0.0,
    velocity_y: SNAKE_SPEED,
  }
}
