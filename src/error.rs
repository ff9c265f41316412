use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
  #[error("your username should be non-empty")]
  EmptyUsername,
  #[error("no server reachable at {url}: {source}")]
  Connect {
    url: String,
    #[source]
    source: tokio_tungstenite::tungstenite::Error,
  },
  #[error("the server rejected the join request")]
  JoinRejected,
  #[error("the connection closed before the game started")]
  ConnectionClosed,
}
