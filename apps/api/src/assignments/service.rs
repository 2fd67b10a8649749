use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::certification::issuer::issue_certificate;
use crate::errors::AppError;
use crate::models::application::ApplicationStatus;
use crate::models::assignment::{
    Assignment, AssignmentStatus, Milestone, MilestoneStatus, Submission,
};
use crate::models::certification::Certification;
use crate::models::user::UserRole;
use crate::store::Store;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct MilestonePlan {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssignmentRequest {
    pub application_id: Uuid,
    pub pm_id: Uuid,
    pub milestones: Vec<MilestonePlan>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AssignmentFilter {
    pub student_id: Option<Uuid>,
    pub pm_id: Option<Uuid>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneAction {
    Approve,
    RequestRevision,
}

#[derive(Debug, Serialize)]
pub struct MilestoneReviewOutcome {
    pub milestone: Milestone,
    pub assignment_status: AssignmentStatus,
    /// Present only when this review completed the assignment.
    pub certification: Option<Certification>,
}

// ────────────────────────────────────────────────────────────────────────────
// Assignments
// ────────────────────────────────────────────────────────────────────────────

/// Starts an active assignment for an accepted application, supervised by a PM.
pub async fn create_assignment(
    store: &Store,
    req: CreateAssignmentRequest,
) -> Result<Assignment, AppError> {
    if req.milestones.is_empty() {
        return Err(AppError::Validation(
            "an assignment needs at least one milestone".to_string(),
        ));
    }
    if req.milestones.iter().any(|m| m.title.trim().is_empty()) {
        return Err(AppError::Validation(
            "milestone title cannot be empty".to_string(),
        ));
    }

    let mut data = store.write().await;

    let application = data
        .application(req.application_id)
        .ok_or_else(|| {
            AppError::NotFound(format!("Application {} not found", req.application_id))
        })?
        .clone();
    if application.status != ApplicationStatus::Accepted {
        return Err(AppError::Validation(format!(
            "Application {} has not been accepted",
            req.application_id
        )));
    }

    let pm = data
        .user(req.pm_id)
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", req.pm_id)))?;
    if pm.role != UserRole::Pm {
        return Err(AppError::Validation(format!(
            "User {} is not a project manager",
            req.pm_id
        )));
    }

    let already_assigned = data.assignments.iter().any(|a| {
        a.student_id == application.student_id
            && a.project_id == application.project_id
            && a.status != AssignmentStatus::Cancelled
    });
    if already_assigned {
        return Err(AppError::Conflict(format!(
            "Student {} already has an assignment on project {}",
            application.student_id, application.project_id
        )));
    }

    let assignment_id = Uuid::new_v4();
    let milestones = req
        .milestones
        .into_iter()
        .map(|plan| Milestone {
            id: Uuid::new_v4(),
            assignment_id,
            title: plan.title.trim().to_string(),
            description: plan.description,
            due_date: plan.due_date,
            status: MilestoneStatus::Pending,
            submission: None,
        })
        .collect();

    let assignment = Assignment {
        id: assignment_id,
        student_id: application.student_id,
        project_id: application.project_id,
        pm_id: req.pm_id,
        status: AssignmentStatus::Active,
        start_date: Utc::now(),
        end_date: None,
        milestones,
    };

    data.assignments.push(assignment.clone());
    info!(
        %assignment_id,
        student_id = %assignment.student_id,
        pm_id = %assignment.pm_id,
        milestones = assignment.milestones.len(),
        "Assignment created"
    );

    Ok(assignment)
}

pub async fn list_assignments(store: &Store, filter: &AssignmentFilter) -> Vec<Assignment> {
    store
        .read()
        .await
        .assignments
        .iter()
        .filter(|a| filter.student_id.map_or(true, |s| a.student_id == s))
        .filter(|a| filter.pm_id.map_or(true, |p| a.pm_id == p))
        .cloned()
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Milestones
// ────────────────────────────────────────────────────────────────────────────

/// Records a student's work against a pending (or sent-back) milestone.
pub async fn submit_milestone(
    store: &Store,
    milestone_id: Uuid,
    content: &str,
) -> Result<Milestone, AppError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(AppError::Validation(
            "submission content cannot be empty".to_string(),
        ));
    }

    let mut data = store.write().await;
    let (ai, mi) = data
        .locate_milestone(milestone_id)
        .ok_or_else(|| AppError::NotFound(format!("Milestone {milestone_id} not found")))?;

    let assignment = &mut data.assignments[ai];
    if assignment.status != AssignmentStatus::Active {
        return Err(AppError::Conflict(format!(
            "Assignment {} is no longer active",
            assignment.id
        )));
    }

    let milestone = &mut assignment.milestones[mi];
    if !matches!(
        milestone.status,
        MilestoneStatus::Pending | MilestoneStatus::NeedsRevision
    ) {
        return Err(AppError::Conflict(format!(
            "Milestone {milestone_id} is not awaiting a submission"
        )));
    }

    milestone.status = MilestoneStatus::Submitted;
    milestone.submission = Some(Submission {
        content: content.to_string(),
        submitted_at: Utc::now(),
        feedback: None,
    });

    info!(%milestone_id, "Milestone submitted");
    Ok(milestone.clone())
}

/// Approves or sends back a submitted milestone.
///
/// Approving the last outstanding milestone of an active assignment completes
/// it and issues the completion certificate, all under one write lock.
pub async fn review_milestone(
    store: &Store,
    milestone_id: Uuid,
    action: MilestoneAction,
    feedback: Option<String>,
) -> Result<MilestoneReviewOutcome, AppError> {
    let mut data = store.write().await;
    let (ai, mi) = data
        .locate_milestone(milestone_id)
        .ok_or_else(|| AppError::NotFound(format!("Milestone {milestone_id} not found")))?;

    let assignment = &mut data.assignments[ai];
    if assignment.status != AssignmentStatus::Active {
        return Err(AppError::Conflict(format!(
            "Assignment {} is no longer active",
            assignment.id
        )));
    }

    let milestone = &mut assignment.milestones[mi];
    if milestone.status != MilestoneStatus::Submitted {
        return Err(AppError::Conflict(format!(
            "Milestone {milestone_id} has no submission awaiting review"
        )));
    }
    let submission = milestone.submission.as_mut().ok_or_else(|| {
        AppError::Conflict(format!("Milestone {milestone_id} has no submission"))
    })?;

    submission.feedback = feedback
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty());
    milestone.status = match action {
        MilestoneAction::Approve => MilestoneStatus::Approved,
        MilestoneAction::RequestRevision => MilestoneStatus::NeedsRevision,
    };
    let reviewed = milestone.clone();

    let completed = assignment.all_milestones_approved();
    if completed {
        assignment.status = AssignmentStatus::Completed;
        assignment.end_date = Some(Utc::now());
    }
    let assignment = assignment.clone();

    info!(%milestone_id, status = ?reviewed.status, "Milestone reviewed");

    let mut certification = None;
    if completed {
        info!(
            assignment_id = %assignment.id,
            approved = assignment.approved_count(),
            "Assignment completed"
        );
        let issued = data
            .project(assignment.project_id)
            .map(|project| issue_certificate(&assignment, project));
        if let Some(cert) = issued {
            info!(certification_id = %cert.id, student_id = %cert.student_id, "Certificate issued");
            data.certifications.push(cert.clone());
            certification = Some(cert);
        }
    }

    Ok(MilestoneReviewOutcome {
        milestone: reviewed,
        assignment_status: assignment.status,
        certification,
    })
}
