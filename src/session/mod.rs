use crate::error::ClientError;
use crate::game::constants::TICK_MS;
use crate::game::state::{GameState, RenderFrame};
use crate::game::types::Position;
use crate::protocol::{ClientMessage, ServerMessage};
use crate::shared::names::validate_username;
use crate::transport::ws_client;
use std::time::Duration;
use tokio::sync::{mpsc, watch};

#[derive(Debug, Clone)]
pub struct ClientConfig {
  pub server_url: String,
  pub username: String,
  pub game_code: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
  Died,
  Disconnected,
}

enum Control {
  Continue,
  Died,
}

// One full game session: connect, join, then merge the 50 ms tick with the
// inbound stream on a single task. Handlers never interleave; a tick can
// only land between messages. Returning from here drops the ticker and the
// cursor receiver, and run() aborts the socket pumps, so nothing mutates
// state after the session ends.
pub async fn run(
  config: ClientConfig,
  cursor: watch::Receiver<Position>,
  frames: watch::Sender<RenderFrame>,
) -> Result<SessionOutcome, ClientError> {
  let username = validate_username(&config.username)?;
  let mut socket = ws_client::connect(&config.server_url).await?;

  // Exactly one join message, picked by whether a game code was supplied.
  let join = match config.game_code {
    Some(game_code) => ClientMessage::NewClientWithCode {
      username,
      game_code,
    },
    None => ClientMessage::NewClientNoCode { username },
  };
  if socket.outbound.send(join).is_err() {
    socket.shutdown();
    return Err(ClientError::ConnectionClosed);
  }

  let mut session = Session::new(socket.outbound.clone(), frames);
  let mut ticker = tokio::time::interval(Duration::from_millis(TICK_MS));
  let result = loop {
    tokio::select! {
      _ = ticker.tick() => {
        if !session.tick(*cursor.borrow()) {
          break Ok(SessionOutcome::Disconnected);
        }
      }
      inbound = socket.inbound.recv() => {
        let Some(message) = inbound else {
          break if session.joined {
            Ok(SessionOutcome::Disconnected)
          } else {
            Err(ClientError::ConnectionClosed)
          };
        };
        match session.handle_message(message) {
          Ok(Control::Continue) => {}
          Ok(Control::Died) => break Ok(SessionOutcome::Died),
          Err(error) => break Err(error),
        }
      }
    }
  };
  socket.shutdown();
  result
}

struct Session {
  game: GameState,
  joined: bool,
  outbound: mpsc::UnboundedSender<ClientMessage>,
  frames: watch::Sender<RenderFrame>,
}

impl Session {
  fn new(outbound: mpsc::UnboundedSender<ClientMessage>, frames: watch::Sender<RenderFrame>) -> Self {
    Self {
      game: GameState::new(),
      joined: false,
      outbound,
      frames,
    }
  }

  // One motion tick; false means the outbound channel is gone and the
  // session should end. Ticks before JOIN_SUCCESS are skipped.
  fn tick(&mut self, target: Position) -> bool {
    if !self.joined {
      return true;
    }
    let delta = self.game.advance(target);
    let update = ClientMessage::UpdatePosition {
      add: delta.add,
      remove: delta.remove,
    };
    if self.outbound.send(update).is_err() {
      return false;
    }
    self.publish();
    true
  }

  fn handle_message(&mut self, message: ServerMessage) -> Result<Control, ClientError> {
    match message {
      ServerMessage::JoinSuccess => {
        self.joined = true;
        tracing::info!("joined game");
        self.publish();
      }
      ServerMessage::JoinError => {
        tracing::warn!("join rejected by server");
        self.frames.send_replace(RenderFrame::default());
        return Err(ClientError::JoinRejected);
      }
      ServerMessage::UpdatePosition { add, remove } => {
        self.game.apply_remote_delta(add, remove);
        self.publish();
      }
      ServerMessage::YouDied => {
        tracing::info!("local snake died");
        self.frames.send_replace(RenderFrame::default());
        return Ok(Control::Died);
      }
      ServerMessage::OtherUserDied { remove_positions } => {
        self.game.apply_other_death(&remove_positions);
        self.publish();
      }
      ServerMessage::UpdateLeaderboard { leaderboard } => {
        self.game.set_leaderboard(&leaderboard);
        self.publish();
      }
      ServerMessage::SetGameCode { game_code } => {
        tracing::debug!(code = %game_code, "assigned game code");
        self.game.set_game_code(game_code);
        self.publish();
      }
      ServerMessage::SendOrbs { orb_set } => {
        self.game.replace_orbs(orb_set);
        self.publish();
      }
      ServerMessage::IncreaseOwnLength { new_body_parts } => {
        self.game.grow_own(new_body_parts);
        self.publish();
      }
      ServerMessage::IncreaseOtherLength { new_body_parts } => {
        self.game.apply_other_growth(&new_body_parts);
        self.publish();
      }
    }
    Ok(Control::Continue)
  }

  fn publish(&self) {
    self.frames.send_replace(self.game.frame());
  }
}
