// Student-to-project matching.
// Scoring is pure; handlers snapshot the store, release the lock, then score.

pub mod handlers;
pub mod scorer;
