//! In-memory platform store.
//!
//! A single `RwLock` guards every collection, so a handler that takes the
//! write guard once sees and mutates a consistent snapshot for the whole
//! operation.

pub mod analytics;
pub mod seed;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use crate::models::application::Application;
use crate::models::assignment::Assignment;
use crate::models::certification::Certification;
use crate::models::project::Project;
use crate::models::user::User;

/// All platform records, in insertion order.
#[derive(Debug, Default, Clone)]
pub struct PlatformData {
    pub users: Vec<User>,
    pub projects: Vec<Project>,
    pub applications: Vec<Application>,
    pub assignments: Vec<Assignment>,
    pub certifications: Vec<Certification>,
}

impl PlatformData {
    // User lookups

    pub fn user(&self, id: Uuid) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn user_mut(&mut self, id: Uuid) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id == id)
    }

    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email.trim()))
    }

    // Project lookups

    pub fn project(&self, id: Uuid) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn project_mut(&mut self, id: Uuid) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id == id)
    }

    pub fn open_projects(&self) -> Vec<Project> {
        self.projects.iter().filter(|p| p.is_open()).cloned().collect()
    }

    // Application lookups

    pub fn application_mut(&mut self, id: Uuid) -> Option<&mut Application> {
        self.applications.iter_mut().find(|a| a.id == id)
    }

    pub fn application(&self, id: Uuid) -> Option<&Application> {
        self.applications.iter().find(|a| a.id == id)
    }

    // Assignment lookups

    /// Index of the assignment owning `milestone_id`, and the milestone's index within it.
    pub fn locate_milestone(&self, milestone_id: Uuid) -> Option<(usize, usize)> {
        self.assignments.iter().enumerate().find_map(|(ai, a)| {
            a.milestones
                .iter()
                .position(|m| m.id == milestone_id)
                .map(|mi| (ai, mi))
        })
    }

    // Certification lookups

    pub fn certification_by_hash(&self, hash: &str) -> Option<&Certification> {
        self.certifications
            .iter()
            .find(|c| c.verification_hash == hash)
    }
}

/// Process-wide store shared through `AppState`.
#[derive(Debug, Default)]
pub struct Store {
    data: RwLock<PlatformData>,
}

impl Store {
    pub fn new(data: PlatformData) -> Self {
        Self {
            data: RwLock::new(data),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, PlatformData> {
        self.data.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, PlatformData> {
        self.data.write().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::UserRole;

    #[tokio::test]
    async fn test_user_by_email_is_case_insensitive() {
        let mut data = PlatformData::default();
        data.users
            .push(User::new("Alex", "Alex@Example.com", UserRole::Student));
        let store = Store::new(data);

        let guard = store.read().await;
        assert!(guard.user_by_email("alex@example.COM").is_some());
        assert!(guard.user_by_email("nobody@example.com").is_none());
    }

    #[tokio::test]
    async fn test_locate_milestone_in_seed_data() {
        let store = Store::new(seed::demo_data());
        let guard = store.read().await;
        let milestone_id = guard.assignments[0].milestones[1].id;
        assert_eq!(guard.locate_milestone(milestone_id), Some((0, 1)));
        assert_eq!(guard.locate_milestone(Uuid::new_v4()), None);
    }

    #[tokio::test]
    async fn test_open_projects_filters_status() {
        let store = Store::new(seed::demo_data());
        let guard = store.read().await;
        let open = guard.open_projects();
        assert_eq!(open.len(), 2);
        assert!(open.iter().all(|p| p.is_open()));
    }
}
