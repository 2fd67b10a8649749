use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Completion certificate issued when every milestone of an assignment is approved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub id: Uuid,
    pub student_id: Uuid,
    pub project_id: Uuid,
    pub assignment_id: Uuid,
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    pub issued_at: DateTime<Utc>,
    pub verification_hash: String,
}
