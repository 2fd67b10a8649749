use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::{User, UserRole};
use crate::store::Store;

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub portfolio: Option<String>,
    pub company_name: Option<String>,
    pub industry: Option<String>,
}

/// Registers a platform user. Credentials are handled elsewhere.
pub async fn register_user(store: &Store, req: RegisterRequest) -> Result<User, AppError> {
    let name = req.name.trim();
    let email = req.email.trim();
    if name.is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }
    if !is_plausible_email(email) {
        return Err(AppError::Validation(format!("'{email}' is not a valid email")));
    }

    let mut data = store.write().await;
    if data.user_by_email(email).is_some() {
        return Err(AppError::Conflict(
            "User with this email already exists".to_string(),
        ));
    }

    let mut user = User::new(name, email, req.role);
    match req.role {
        UserRole::Student => {
            user.skills = clean_skills(&req.skills);
            user.bio = req.bio;
            user.portfolio = req.portfolio;
        }
        UserRole::Company => {
            user.company_name = req.company_name;
            user.industry = req.industry;
        }
        UserRole::Pm | UserRole::Admin => {}
    }

    data.users.push(user.clone());
    info!(user_id = %user.id, role = ?user.role, "User registered");

    Ok(user)
}

pub async fn get_user(store: &Store, user_id: Uuid) -> Result<User, AppError> {
    store
        .read()
        .await
        .user(user_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))
}

/// Replaces a student's skill list.
pub async fn update_skills(
    store: &Store,
    user_id: Uuid,
    skills: &[String],
) -> Result<User, AppError> {
    let mut data = store.write().await;
    let user = data
        .user_mut(user_id)
        .ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))?;
    if !user.is_student() {
        return Err(AppError::Validation(format!(
            "User {user_id} is not a student"
        )));
    }

    user.skills = clean_skills(skills);
    info!(%user_id, skills = user.skills.len(), "Student skills updated");
    Ok(user.clone())
}

fn clean_skills(skills: &[String]) -> Vec<String> {
    skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !email.contains(' '),
        None => false,
    }
}
