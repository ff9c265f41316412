use crate::game::types::{LeaderboardEntry, Orb, Position};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const TYPE_NEW_CLIENT_NO_CODE: &str = "NEW_CLIENT_NO_CODE";
pub const TYPE_NEW_CLIENT_WITH_CODE: &str = "NEW_CLIENT_WITH_CODE";
pub const TYPE_UPDATE_POSITION: &str = "UPDATE_POSITION";

pub const TYPE_JOIN_SUCCESS: &str = "JOIN_SUCCESS";
pub const TYPE_JOIN_ERROR: &str = "JOIN_ERROR";
pub const TYPE_YOU_DIED: &str = "YOU_DIED";
// sic: the server spells the tag this way.
pub const TYPE_OTHER_USER_DIED: &str = "OTHER_USED_DIED";
pub const TYPE_UPDATE_LEADERBOARD: &str = "UPDATE_LEADERBOARD";
pub const TYPE_SET_GAME_CODE: &str = "SET_GAME_CODE";
pub const TYPE_SEND_ORBS: &str = "SEND_ORBS";
pub const TYPE_INCREASE_OWN_LENGTH: &str = "INCREASE_OWN_LENGTH";
pub const TYPE_INCREASE_OTHER_LENGTH: &str = "INCREASE_OTHER_LENGTH";

#[derive(Debug, Clone, PartialEq)]
pub enum ClientMessage {
  NewClientNoCode {
    username: String,
  },
  NewClientWithCode {
    username: String,
    game_code: String,
  },
  UpdatePosition {
    add: Position,
    remove: Position,
  },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ServerMessage {
  JoinSuccess,
  JoinError,
  UpdatePosition {
    add: Position,
    remove: Position,
  },
  YouDied,
  OtherUserDied {
    remove_positions: Vec<Position>,
  },
  UpdateLeaderboard {
    leaderboard: Vec<LeaderboardEntry>,
  },
  SetGameCode {
    game_code: String,
  },
  SendOrbs {
    orb_set: Vec<Orb>,
  },
  IncreaseOwnLength {
    new_body_parts: Vec<Position>,
  },
  IncreaseOtherLength {
    new_body_parts: Vec<Position>,
  },
}

#[derive(Debug, Deserialize)]
struct Envelope {
  #[serde(rename = "type")]
  kind: String,
  #[serde(default)]
  data: Value,
}

#[derive(Debug, Serialize)]
struct OutboundEnvelope<T: Serialize> {
  #[serde(rename = "type")]
  kind: &'static str,
  data: T,
}

#[derive(Debug, Serialize)]
struct JoinPayload<'a> {
  username: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JoinWithCodePayload<'a> {
  username: &'a str,
  game_code: &'a str,
}

#[derive(Debug, Serialize, Deserialize)]
struct DeltaPayload {
  add: Position,
  remove: Position,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemovePositionsPayload {
  remove_positions: Vec<Position>,
}

#[derive(Debug, Deserialize)]
struct LeaderboardPayload {
  leaderboard: Vec<LeaderboardEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GameCodePayload {
  game_code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrbSetPayload {
  orb_set: Vec<Orb>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BodyPartsPayload {
  new_body_parts: Vec<Position>,
}

pub fn encode_client_message(message: &ClientMessage) -> serde_json::Result<String> {
  match message {
    ClientMessage::NewClientNoCode { username } => serde_json::to_string(&OutboundEnvelope {
      kind: TYPE_NEW_CLIENT_NO_CODE,
      data: JoinPayload { username },
    }),
    ClientMessage::NewClientWithCode {
      username,
      game_code,
    } => serde_json::to_string(&OutboundEnvelope {
      kind: TYPE_NEW_CLIENT_WITH_CODE,
      data: JoinWithCodePayload {
        username,
        game_code,
      },
    }),
    ClientMessage::UpdatePosition { add, remove } => serde_json::to_string(&OutboundEnvelope {
      kind: TYPE_UPDATE_POSITION,
      data: DeltaPayload {
        add: *add,
        remove: *remove,
      },
    }),
  }
}

// Unknown tags and malformed payloads decode to None; the caller drops
// them without complaint so newer servers keep working against us.
pub fn decode_server_message(text: &str) -> Option<ServerMessage> {
  let envelope: Envelope = serde_json::from_str(text).ok()?;
  let message = match envelope.kind.as_str() {
    TYPE_JOIN_SUCCESS => ServerMessage::JoinSuccess,
    TYPE_JOIN_ERROR => ServerMessage::JoinError,
    TYPE_YOU_DIED => ServerMessage::YouDied,
    TYPE_UPDATE_POSITION => {
      let payload: DeltaPayload = serde_json::from_value(envelope.data).ok()?;
      ServerMessage::UpdatePosition {
        add: payload.add,
        remove: payload.remove,
      }
    }
    TYPE_OTHER_USER_DIED => {
      let payload: RemovePositionsPayload = serde_json::from_value(envelope.data).ok()?;
      ServerMessage::OtherUserDied {
        remove_positions: payload.remove_positions,
      }
    }
    TYPE_UPDATE_LEADERBOARD => {
      let payload: LeaderboardPayload = serde_json::from_value(envelope.data).ok()?;
      ServerMessage::UpdateLeaderboard {
        leaderboard: payload.leaderboard,
      }
    }
    TYPE_SET_GAME_CODE => {
      let payload: GameCodePayload = serde_json::from_value(envelope.data).ok()?;
      ServerMessage::SetGameCode {
        game_code: payload.game_code,
      }
    }
    TYPE_SEND_ORBS => {
      let payload: OrbSetPayload = serde_json::from_value(envelope.data).ok()?;
      ServerMessage::SendOrbs {
        orb_set: payload.orb_set,
      }
    }
    TYPE_INCREASE_OWN_LENGTH => {
      let payload: BodyPartsPayload = serde_json::from_value(envelope.data).ok()?;
      ServerMessage::IncreaseOwnLength {
        new_body_parts: payload.new_body_parts,
      }
    }
    TYPE_INCREASE_OTHER_LENGTH => {
      let payload: BodyPartsPayload = serde_json::from_value(envelope.data).ok()?;
      ServerMessage::IncreaseOtherLength {
        new_body_parts: payload.new_body_parts,
      }
    }
    _ => return None,
  };
  Some(message)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::game::types::OrbSize;
  use serde_json::json;

  #[test]
  fn encode_new_client_without_code() {
    let message = ClientMessage::NewClientNoCode {
      username: "ada".to_string(),
    };
    let encoded = encode_client_message(&message).expect("encode");
    let value: Value = serde_json::from_str(&encoded).expect("json");
    assert_eq!(
      value,
      json!({"type": "NEW_CLIENT_NO_CODE", "data": {"username": "ada"}})
    );
  }

  #[test]
  fn encode_new_client_with_code() {
    let message = ClientMessage::NewClientWithCode {
      username: "ada".to_string(),
      game_code: "QWERT".to_string(),
    };
    let encoded = encode_client_message(&message).expect("encode");
    let value: Value = serde_json::from_str(&encoded).expect("json");
    assert_eq!(
      value,
      json!({
        "type": "NEW_CLIENT_WITH_CODE",
        "data": {"username": "ada", "gameCode": "QWERT"}
      })
    );
  }

  #[test]
  fn encode_update_position_delta() {
    let message = ClientMessage::UpdatePosition {
      add: Position { x: 617.96, y: 100.8 },
      remove: Position { x: 600.0, y: 195.0 },
    };
    let encoded = encode_client_message(&message).expect("encode");
    let value: Value = serde_json::from_str(&encoded).expect("json");
    assert_eq!(
      value,
      json!({
        "type": "UPDATE_POSITION",
        "data": {
          "add": {"x": 617.96, "y": 100.8},
          "remove": {"x": 600.0, "y": 195.0}
        }
      })
    );
  }

  #[test]
  fn decode_join_outcomes() {
    assert_eq!(
      decode_server_message(r#"{"type":"JOIN_SUCCESS","data":{}}"#),
      Some(ServerMessage::JoinSuccess)
    );
    assert_eq!(
      decode_server_message(r#"{"type":"JOIN_ERROR","data":{}}"#),
      Some(ServerMessage::JoinError)
    );
    assert_eq!(
      decode_server_message(r#"{"type":"YOU_DIED","data":{}}"#),
      Some(ServerMessage::YouDied)
    );
  }

  #[test]
  fn decode_update_position() {
    let message = decode_server_message(
      r#"{"type":"UPDATE_POSITION","data":{"add":{"x":1.5,"y":2.0},"remove":{"x":0.0,"y":0.0}}}"#,
    )
    .expect("message");
    assert_eq!(
      message,
      ServerMessage::UpdatePosition {
        add: Position { x: 1.5, y: 2.0 },
        remove: Position { x: 0.0, y: 0.0 },
      }
    );
  }

  #[test]
  fn decode_other_user_died() {
    let message = decode_server_message(
      r#"{"type":"OTHER_USED_DIED","data":{"removePositions":[{"x":1.0,"y":1.0},{"x":2.0,"y":2.0}]}}"#,
    )
    .expect("message");
    match message {
      ServerMessage::OtherUserDied { remove_positions } => {
        assert_eq!(remove_positions.len(), 2);
        assert_eq!(remove_positions[1], Position { x: 2.0, y: 2.0 });
      }
      _ => panic!("unexpected message"),
    }
  }

  #[test]
  fn decode_leaderboard_and_game_code() {
    let message = decode_server_message(
      r#"{"type":"UPDATE_LEADERBOARD","data":{"leaderboard":[{"username":"ada","score":7}]}}"#,
    )
    .expect("message");
    match message {
      ServerMessage::UpdateLeaderboard { leaderboard } => {
        assert_eq!(leaderboard.len(), 1);
        assert_eq!(leaderboard[0].username, "ada");
        assert_eq!(leaderboard[0].score, 7);
      }
      _ => panic!("unexpected message"),
    }

    assert_eq!(
      decode_server_message(r#"{"type":"SET_GAME_CODE","data":{"gameCode":"ABCDE"}}"#),
      Some(ServerMessage::SetGameCode {
        game_code: "ABCDE".to_string(),
      })
    );
  }

  #[test]
  fn decode_orb_sync() {
    let message = decode_server_message(
      r##"{"type":"SEND_ORBS","data":{"orbSet":[
        {"position":{"x":10.0,"y":20.0},"orbSize":"SMALL","color":"#ff0000"},
        {"position":{"x":30.0,"y":40.0},"orbSize":"LARGE","color":"#24f51e"}
      ]}}"##,
    )
    .expect("message");
    match message {
      ServerMessage::SendOrbs { orb_set } => {
        assert_eq!(orb_set.len(), 2);
        assert_eq!(orb_set[0].orb_size, OrbSize::Small);
        assert_eq!(orb_set[1].orb_size, OrbSize::Large);
        assert_eq!(orb_set[1].color, "#24f51e");
      }
      _ => panic!("unexpected message"),
    }
  }

  #[test]
  fn decode_growth_messages() {
    let own = decode_server_message(
      r#"{"type":"INCREASE_OWN_LENGTH","data":{"newBodyParts":[{"x":5.0,"y":6.0}]}}"#,
    )
    .expect("message");
    assert_eq!(
      own,
      ServerMessage::IncreaseOwnLength {
        new_body_parts: vec![Position { x: 5.0, y: 6.0 }],
      }
    );

    let other = decode_server_message(
      r#"{"type":"INCREASE_OTHER_LENGTH","data":{"newBodyParts":[{"x":7.0,"y":8.0}]}}"#,
    )
    .expect("message");
    assert_eq!(
      other,
      ServerMessage::IncreaseOtherLength {
        new_body_parts: vec![Position { x: 7.0, y: 8.0 }],
      }
    );
  }

  #[test]
  fn unknown_tags_are_ignored() {
    assert_eq!(
      decode_server_message(r#"{"type":"REMOVE_ORB","data":{"position":{"x":1.0,"y":1.0}}}"#),
      None
    );
    assert_eq!(decode_server_message(r#"{"type":"SOMETHING_NEW","data":{}}"#), None);
  }

  #[test]
  fn malformed_frames_are_ignored() {
    assert_eq!(decode_server_message("not json at all"), None);
    assert_eq!(decode_server_message(r#"{"data":{}}"#), None);
    // Known tag, wrong payload shape.
    assert_eq!(
      decode_server_message(r#"{"type":"UPDATE_POSITION","data":{"add":true}}"#),
      None
    );
  }

  #[test]
  fn missing_data_field_still_decodes_tag_only_messages() {
    assert_eq!(
      decode_server_message(r#"{"type":"JOIN_SUCCESS"}"#),
      Some(ServerMessage::JoinSuccess)
    );
  }
}
