use super::types::LeaderboardEntry;
use std::collections::HashMap;

// Full rebuild on every update; for a username appearing more than once,
// the later entry wins.
pub fn project(entries: &[LeaderboardEntry]) -> HashMap<String, i64> {
  let mut scores = HashMap::new();
  for entry in entries {
    scores.insert(entry.username.clone(), entry.score);
  }
  scores
}

// Descending by score for display. The sort itself is stable, but map
// iteration order is unspecified, so equal scores land in no particular
// order.
pub fn ranked(scores: &HashMap<String, i64>) -> Vec<LeaderboardEntry> {
  let mut entries: Vec<LeaderboardEntry> = scores
    .iter()
    .map(|(username, score)| LeaderboardEntry {
      username: username.clone(),
      score: *score,
    })
    .collect();
  entries.sort_by(|a, b| b.score.cmp(&a.score));
  entries
}
