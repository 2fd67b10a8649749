use serde::{Deserialize, Serialize};

use crate::models::assignment::AssignmentStatus;
use crate::models::project::ProjectStatus;
use crate::models::user::UserRole;
use crate::store::PlatformData;

/// Platform-wide counters for the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Analytics {
    pub total_users: usize,
    pub total_students: usize,
    pub total_companies: usize,
    pub total_projects: usize,
    pub active_projects: usize,
    pub total_applications: usize,
    pub total_certifications: usize,
    pub completion_rate: f64, // 0.0 – 100.0
}

pub fn compute_analytics(data: &PlatformData) -> Analytics {
    let count_role = |role: UserRole| data.users.iter().filter(|u| u.role == role).count();

    let completed = data
        .assignments
        .iter()
        .filter(|a| a.status == AssignmentStatus::Completed)
        .count();
    let completion_rate = if data.assignments.is_empty() {
        0.0
    } else {
        completed as f64 / data.assignments.len() as f64 * 100.0
    };

    Analytics {
        total_users: data.users.len(),
        total_students: count_role(UserRole::Student),
        total_companies: count_role(UserRole::Company),
        total_projects: data.projects.len(),
        active_projects: data
            .projects
            .iter()
            .filter(|p| p.status == ProjectStatus::InProgress)
            .count(),
        total_applications: data.applications.len(),
        total_certifications: data.certifications.len(),
        completion_rate,
    }
}
