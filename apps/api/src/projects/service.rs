use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::project::{Difficulty, Project, ProjectStatus};
use crate::models::user::UserRole;
use crate::store::Store;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectRequest {
    pub company_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub skills: Vec<String>,
    pub duration: String,
    pub difficulty: Difficulty,
    pub max_students: u32,
    pub deadline: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProjectFilter {
    pub status: Option<ProjectStatus>,
    pub company_id: Option<Uuid>,
}

/// Posts a new open project on behalf of a company.
pub async fn create_project(store: &Store, req: CreateProjectRequest) -> Result<Project, AppError> {
    if req.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    if req.duration.trim().is_empty() {
        return Err(AppError::Validation("duration cannot be empty".to_string()));
    }
    if req.max_students == 0 {
        return Err(AppError::Validation(
            "max_students must be at least 1".to_string(),
        ));
    }

    let skills: Vec<String> = req
        .skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if skills.is_empty() {
        return Err(AppError::Validation(
            "at least one required skill must be listed".to_string(),
        ));
    }

    let mut data = store.write().await;

    let company = data
        .user(req.company_id)
        .ok_or_else(|| AppError::NotFound(format!("Company {} not found", req.company_id)))?;
    if company.role != UserRole::Company {
        return Err(AppError::Validation(format!(
            "User {} is not a company",
            req.company_id
        )));
    }

    let project = Project {
        id: Uuid::new_v4(),
        title: req.title.trim().to_string(),
        description: req.description,
        company_id: company.id,
        company_name: company.display_company_name().to_string(),
        skills,
        duration: req.duration.trim().to_string(),
        difficulty: req.difficulty,
        status: ProjectStatus::Open,
        max_students: req.max_students,
        current_students: 0,
        created_at: Utc::now(),
        deadline: req.deadline,
    };

    data.projects.push(project.clone());
    info!(project_id = %project.id, company_id = %project.company_id, "Project created");

    Ok(project)
}

pub async fn list_projects(store: &Store, filter: &ProjectFilter) -> Vec<Project> {
    store
        .read()
        .await
        .projects
        .iter()
        .filter(|p| filter.status.map_or(true, |s| p.status == s))
        .filter(|p| filter.company_id.map_or(true, |c| p.company_id == c))
        .cloned()
        .collect()
}

pub async fn get_project(store: &Store, project_id: Uuid) -> Result<Project, AppError> {
    store
        .read()
        .await
        .project(project_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Project {project_id} not found")))
}

pub async fn update_status(
    store: &Store,
    project_id: Uuid,
    status: ProjectStatus,
) -> Result<Project, AppError> {
    let mut data = store.write().await;
    let project = data
        .project_mut(project_id)
        .ok_or_else(|| AppError::NotFound(format!("Project {project_id} not found")))?;

    let previous = project.status;
    project.status = status;
    info!(%project_id, ?previous, current = ?status, "Project status changed");

    Ok(project.clone())
}
