use crate::error::ClientError;
use crate::protocol::{self, ClientMessage, ServerMessage};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

// The socket bridged to typed channels: the session never touches frames,
// only ClientMessage out and ServerMessage in. Sends are fire-and-forget.
pub struct Socket {
  pub outbound: mpsc::UnboundedSender<ClientMessage>,
  pub inbound: mpsc::UnboundedReceiver<ServerMessage>,
  send_task: JoinHandle<()>,
  recv_task: JoinHandle<()>,
}

impl Socket {
  pub fn shutdown(&self) {
    self.send_task.abort();
    self.recv_task.abort();
  }
}

pub async fn connect(url: &str) -> Result<Socket, ClientError> {
  let (stream, _response) = connect_async(url).await.map_err(|source| ClientError::Connect {
    url: url.to_string(),
    source,
  })?;
  tracing::debug!(url, "websocket opened");

  let (mut sender, mut receiver) = stream.split();
  let (outbound, mut outbound_rx) = mpsc::unbounded_channel::<ClientMessage>();
  let (inbound_tx, inbound) = mpsc::unbounded_channel::<ServerMessage>();

  let send_task = tokio::spawn(async move {
    while let Some(message) = outbound_rx.recv().await {
      let Ok(payload) = protocol::encode_client_message(&message) else { continue };
      if sender.send(Message::Text(payload)).await.is_err() {
        break;
      }
    }
  });

  let recv_task = tokio::spawn(async move {
    while let Some(result) = receiver.next().await {
      let Ok(frame) = result else { break };
      match frame {
        Message::Text(text) => {
          // Frames that don't decode are dropped for forward compatibility.
          let Some(message) = protocol::decode_server_message(&text) else { continue };
          if inbound_tx.send(message).is_err() {
            break;
          }
        }
        Message::Close(_) => break,
        _ => {}
      }
    }
  });

  Ok(Socket {
    outbound,
    inbound,
    send_task,
    recv_task,
  })
}
