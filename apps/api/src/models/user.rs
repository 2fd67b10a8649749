use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Student,
    Company,
    Pm,
    Admin,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    // Student specific
    #[serde(default)]
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub portfolio: Option<String>,
    // Company specific
    pub company_name: Option<String>,
    pub industry: Option<String>,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: UserRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            name: name.into(),
            role,
            created_at: Utc::now(),
            skills: Vec::new(),
            bio: None,
            portfolio: None,
            company_name: None,
            industry: None,
        }
    }

    pub fn is_student(&self) -> bool {
        self.role == UserRole::Student
    }

    /// Name shown on projects posted by this user.
    pub fn display_company_name(&self) -> &str {
        self.company_name.as_deref().unwrap_or(&self.name)
    }
}
