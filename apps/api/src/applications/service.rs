use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::application::{Application, ApplicationStatus};
use crate::store::Store;

pub const DEFAULT_COVER_LETTER: &str =
    "I am interested in this project and believe my skills are a great match.";

#[derive(Debug, Clone, Deserialize)]
pub struct ApplyRequest {
    pub student_id: Uuid,
    pub project_id: Uuid,
    #[serde(default)]
    pub cover_letter: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReviewAction {
    Accept,
    Reject,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApplicationFilter {
    pub student_id: Option<Uuid>,
    pub project_id: Option<Uuid>,
}

/// Files a pending application from a student to an open project.
///
/// A student holds at most one live (pending or accepted) application per project.
pub async fn apply(store: &Store, req: ApplyRequest) -> Result<Application, AppError> {
    let mut data = store.write().await;

    let student = data
        .user(req.student_id)
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", req.student_id)))?;
    if !student.is_student() {
        return Err(AppError::Validation(format!(
            "User {} is not a student",
            req.student_id
        )));
    }

    let project = data
        .project(req.project_id)
        .ok_or_else(|| AppError::NotFound(format!("Project {} not found", req.project_id)))?;
    if !project.is_open() {
        return Err(AppError::Validation(format!(
            "Project {} is not open for applications",
            req.project_id
        )));
    }

    let duplicate = data.applications.iter().any(|a| {
        a.student_id == req.student_id
            && a.project_id == req.project_id
            && a.status != ApplicationStatus::Rejected
    });
    if duplicate {
        return Err(AppError::Conflict(format!(
            "Student {} already applied to project {}",
            req.student_id, req.project_id
        )));
    }

    let cover_letter = req
        .cover_letter
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| DEFAULT_COVER_LETTER.to_string());

    let application = Application {
        id: Uuid::new_v4(),
        student_id: req.student_id,
        project_id: req.project_id,
        status: ApplicationStatus::Pending,
        cover_letter,
        applied_at: Utc::now(),
        reviewed_at: None,
    };

    data.applications.push(application.clone());
    info!(
        application_id = %application.id,
        student_id = %application.student_id,
        project_id = %application.project_id,
        "Application submitted"
    );

    Ok(application)
}

pub async fn list_applications(store: &Store, filter: &ApplicationFilter) -> Vec<Application> {
    store
        .read()
        .await
        .applications
        .iter()
        .filter(|a| filter.student_id.map_or(true, |s| a.student_id == s))
        .filter(|a| filter.project_id.map_or(true, |p| a.project_id == p))
        .cloned()
        .collect()
}

/// Accepts or rejects a pending application.
///
/// Accepting takes a seat on the project while seats remain; a full project
/// still records the acceptance.
pub async fn review_application(
    store: &Store,
    application_id: Uuid,
    action: ReviewAction,
) -> Result<Application, AppError> {
    let mut data = store.write().await;

    let application = data
        .application_mut(application_id)
        .ok_or_else(|| AppError::NotFound(format!("Application {application_id} not found")))?;
    if application.status != ApplicationStatus::Pending {
        return Err(AppError::Conflict(format!(
            "Application {application_id} has already been reviewed"
        )));
    }

    application.status = match action {
        ReviewAction::Accept => ApplicationStatus::Accepted,
        ReviewAction::Reject => ApplicationStatus::Rejected,
    };
    application.reviewed_at = Some(Utc::now());
    let reviewed = application.clone();

    if action == ReviewAction::Accept {
        if let Some(project) = data.project_mut(reviewed.project_id) {
            if project.has_capacity() {
                project.current_students += 1;
            }
        }
    }

    info!(%application_id, status = ?reviewed.status, "Application reviewed");
    Ok(reviewed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::{demo_data, DEMO_COMPANY_EMAIL, DEMO_DESIGNER_EMAIL, DEMO_STUDENT_EMAIL};

    async fn id_of(store: &Store, email: &str) -> Uuid {
        store.read().await.user_by_email(email).unwrap().id
    }

    /// The open "API Development & Documentation" project (capacity 1).
    async fn api_project(store: &Store) -> Uuid {
        store.read().await.projects[2].id
    }

    fn request(student_id: Uuid, project_id: Uuid) -> ApplyRequest {
        ApplyRequest {
            student_id,
            project_id,
            cover_letter: None,
        }
    }

    #[tokio::test]
    async fn test_apply_creates_pending_with_default_letter() {
        let store = Store::new(demo_data());
        let student = id_of(&store, DEMO_STUDENT_EMAIL).await;
        let project = api_project(&store).await;

        let app = apply(&store, request(student, project)).await.unwrap();
        assert_eq!(app.status, ApplicationStatus::Pending);
        assert_eq!(app.cover_letter, DEFAULT_COVER_LETTER);
        assert!(app.reviewed_at.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_application_conflicts() {
        let store = Store::new(demo_data());
        let student = id_of(&store, DEMO_STUDENT_EMAIL).await;
        let project = api_project(&store).await;

        apply(&store, request(student, project)).await.unwrap();
        let err = apply(&store, request(student, project)).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_reapply_after_rejection_allowed() {
        let store = Store::new(demo_data());
        let student = id_of(&store, DEMO_STUDENT_EMAIL).await;
        let project = api_project(&store).await;

        let first = apply(&store, request(student, project)).await.unwrap();
        review_application(&store, first.id, ReviewAction::Reject)
            .await
            .unwrap();
        assert!(apply(&store, request(student, project)).await.is_ok());
    }

    #[tokio::test]
    async fn test_apply_to_closed_project_rejected() {
        let store = Store::new(demo_data());
        let student = id_of(&store, DEMO_STUDENT_EMAIL).await;
        let in_progress = store.read().await.projects[1].id;

        let err = apply(&store, request(student, in_progress)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_company_cannot_apply() {
        let store = Store::new(demo_data());
        let company = id_of(&store, DEMO_COMPANY_EMAIL).await;
        let project = api_project(&store).await;

        let err = apply(&store, request(company, project)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_accept_never_exceeds_capacity() {
        let store = Store::new(demo_data());
        let alex = id_of(&store, DEMO_STUDENT_EMAIL).await;
        let sarah = id_of(&store, DEMO_DESIGNER_EMAIL).await;
        let project = api_project(&store).await;

        let a = apply(&store, request(alex, project)).await.unwrap();
        let b = apply(&store, request(sarah, project)).await.unwrap();
        review_application(&store, a.id, ReviewAction::Accept)
            .await
            .unwrap();
        review_application(&store, b.id, ReviewAction::Accept)
            .await
            .unwrap();

        let data = store.read().await;
        let project = data.project(project).unwrap();
        assert_eq!(project.current_students, 1);
        assert_eq!(project.max_students, 1);
    }

    #[tokio::test]
    async fn test_review_twice_conflicts() {
        let store = Store::new(demo_data());
        let student = id_of(&store, DEMO_STUDENT_EMAIL).await;
        let project = api_project(&store).await;

        let app = apply(&store, request(student, project)).await.unwrap();
        review_application(&store, app.id, ReviewAction::Reject)
            .await
            .unwrap();
        let err = review_application(&store, app.id, ReviewAction::Accept)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_list_by_student() {
        let store = Store::new(demo_data());
        let sarah = id_of(&store, DEMO_DESIGNER_EMAIL).await;

        let apps = list_applications(
            &store,
            &ApplicationFilter {
                student_id: Some(sarah),
                project_id: None,
            },
        )
        .await;
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].status, ApplicationStatus::Accepted);
    }
}
