use std::env;
use std::time::Duration;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

mod error;
mod game;
mod protocol;
mod session;
mod shared;
mod transport;

use game::constants::{SPAWN_X, SPAWN_Y, WORLD_SIZE};
use game::math::{clamp, distance};
use game::state::RenderFrame;
use game::types::{Orb, Position};
use session::{ClientConfig, SessionOutcome};

const PILOT_INTERVAL_MS: u64 = 200;
const WANDER_DISTANCE: f64 = 400.0;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let server_url =
    env::var("SLITHER_SERVER").unwrap_or_else(|_| "ws://localhost:9000".to_string());
  let username = env::var("SLITHER_USERNAME").unwrap_or_else(|_| "Player".to_string());
  let game_code = env::var("SLITHER_GAME_CODE")
    .ok()
    .map(|value| value.trim().to_string())
    .filter(|value| !value.is_empty());

  let config = ClientConfig {
    server_url,
    username,
    game_code,
  };
  tracing::info!(server = %config.server_url, user = %config.username, "starting client");

  let (cursor_tx, cursor_rx) = watch::channel(Position {
    x: SPAWN_X,
    y: SPAWN_Y,
  });
  let (frame_tx, frame_rx) = watch::channel(RenderFrame::default());

  // Headless stand-in for the mouse: steer at whatever the latest frame
  // shows. Ends on its own once the session drops the frame sender.
  let pilot = tokio::spawn(autopilot(frame_rx, cursor_tx));

  let result = session::run(config, cursor_rx, frame_tx).await;
  pilot.abort();

  match result {
    Ok(SessionOutcome::Died) => {
      tracing::info!("you died");
      Ok(())
    }
    Ok(SessionOutcome::Disconnected) => {
      tracing::warn!("server closed the connection");
      Ok(())
    }
    Err(error) => {
      tracing::error!(%error, "session failed");
      Err(error.into())
    }
  }
}

async fn autopilot(frames: watch::Receiver<RenderFrame>, cursor: watch::Sender<Position>) {
  let mut interval = tokio::time::interval(Duration::from_millis(PILOT_INTERVAL_MS));
  loop {
    interval.tick().await;
    let (head, target) = {
      let frame = frames.borrow();
      let Some(head) = frame.snake.first().copied() else { continue };
      (head, nearest_orb(head, &frame.orbs))
    };
    let target = target.unwrap_or_else(|| wander_target(head));
    if cursor.send(target).is_err() {
      break;
    }
  }
}

fn nearest_orb(head: Position, orbs: &[Orb]) -> Option<Position> {
  let mut nearest: Option<(Position, f64)> = None;
  for orb in orbs {
    let dist = distance(head, orb.position);
    match nearest {
      Some((_, best)) if dist >= best => {}
      _ => nearest = Some((orb.position, dist)),
    }
  }
  nearest.map(|(position, _)| position)
}

fn wander_target(head: Position) -> Position {
  let angle = rand::random::<f64>() * std::f64::consts::PI * 2.0;
  let half = WORLD_SIZE / 2.0;
  Position {
    x: clamp(head.x + angle.cos() * WANDER_DISTANCE, -half, half),
    y: clamp(head.y + angle.sin() * WANDER_DISTANCE, -half, half),
  }
}
