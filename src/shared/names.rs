use crate::error::ClientError;

pub const MAX_USERNAME_LENGTH: usize = 20;

// Rejected locally, before anything goes over the wire.
pub fn validate_username(name: &str) -> Result<String, ClientError> {
  let cleaned = name.split_whitespace().collect::<Vec<_>>().join(" ");
  if cleaned.is_empty() {
    return Err(ClientError::EmptyUsername);
  }
  Ok(cleaned.chars().take(MAX_USERNAME_LENGTH).collect())
}
