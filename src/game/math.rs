use super::constants::COORD_SCALE;
use super::types::Position;
use std::f64::consts::PI;

const TAU: f64 = PI * 2.0;

// Euclidean modulo, so negative angles land in [0, 2π).
pub fn mod_tau(angle: f64) -> f64 {
  ((angle % TAU) + TAU) % TAU
}

pub fn heading(velocity_x: f64, velocity_y: f64) -> f64 {
  velocity_y.atan2(velocity_x)
}

pub fn heading_to(from: Position, to: Position) -> f64 {
  (to.y - from.y).atan2(to.x - from.x)
}

// One bounded steering step: the heading moves by exactly `rate` toward
// `desired`, along the shorter way around the circle.
pub fn turn_toward(current: f64, desired: f64, rate: f64) -> f64 {
  if mod_tau(desired - current) < PI {
    current + rate
  } else {
    current - rate
  }
}

pub fn round_coord(value: f64) -> f64 {
  (value * COORD_SCALE).round() / COORD_SCALE
}

pub fn distance(a: Position, b: Position) -> f64 {
  ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
  value.min(max).max(min)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn mod_tau_wraps_negative_angles() {
    assert!((mod_tau(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-12);
    assert!((mod_tau(TAU + 0.25) - 0.25).abs() < 1e-12);
    assert_eq!(mod_tau(0.0), 0.0);
  }

  #[test]
  fn turn_toward_takes_the_short_way() {
    let turned = turn_toward(0.0, 0.5, 0.1);
    assert!((turned - 0.1).abs() < 1e-12);

    let turned = turn_toward(0.5, 0.0, 0.1);
    assert!((turned - 0.4).abs() < 1e-12);

    // A target half a turn behind resolves to a decrease.
    let turned = turn_toward(0.0, PI, 0.1);
    assert!((turned - (-0.1)).abs() < 1e-12);
  }

  #[test]
  fn turn_toward_crosses_the_wraparound() {
    let turned = turn_toward(0.1, TAU - 0.1, 0.1);
    assert!((turned - 0.0).abs() < 1e-12);
  }

  #[test]
  fn round_coord_keeps_two_decimals() {
    assert_eq!(round_coord(3.14159), 3.14);
    assert_eq!(round_coord(0.125), 0.13);
    assert_eq!(round_coord(-0.125), -0.13);
    assert_eq!(round_coord(12.0), 12.0);
  }

  #[test]
  fn distance_is_euclidean() {
    let a = Position { x: 0.0, y: 0.0 };
    let b = Position { x: 3.0, y: 4.0 };
    assert_eq!(distance(a, b), 5.0);
  }
}
