// Assignments and milestone tracking.
// A PM approving the last milestone completes the assignment and issues its certificate.

pub mod handlers;
pub mod service;
