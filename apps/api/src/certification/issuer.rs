use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};
use uuid::Uuid;

use crate::models::assignment::Assignment;
use crate::models::certification::Certification;
use crate::models::project::Project;

pub const VERIFICATION_HASH_LEN: usize = 24;

/// Builds the completion certificate for a finished assignment.
pub fn issue_certificate(assignment: &Assignment, project: &Project) -> Certification {
    let skills = project.skills.clone();
    Certification {
        id: Uuid::new_v4(),
        student_id: assignment.student_id,
        project_id: project.id,
        assignment_id: assignment.id,
        title: format!("{} Completion Certificate", project.title),
        description: format!(
            "Successfully completed the {} micro-internship project, demonstrating proficiency in {}.",
            project.title,
            skills.join(", ")
        ),
        skills,
        issued_at: Utc::now(),
        verification_hash: generate_verification_hash(),
    }
}

/// Random lowercase alphanumeric token used to verify a certificate publicly.
pub fn generate_verification_hash() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(VERIFICATION_HASH_LEN)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::demo_data;

    #[test]
    fn test_hash_shape() {
        let hash = generate_verification_hash();
        assert_eq!(hash.len(), VERIFICATION_HASH_LEN);
        assert!(hash
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_hashes_differ() {
        assert_ne!(generate_verification_hash(), generate_verification_hash());
    }

    #[test]
    fn test_certificate_text() {
        let data = demo_data();
        let assignment = &data.assignments[0];
        let project = data.project(assignment.project_id).unwrap();

        let cert = issue_certificate(assignment, project);
        assert_eq!(cert.title, "Mobile App UI/UX Design Completion Certificate");
        assert!(cert
            .description
            .ends_with("proficiency in UI/UX Design, Figma, Prototyping, Design Systems."));
        assert_eq!(cert.student_id, assignment.student_id);
        assert_eq!(cert.assignment_id, assignment.id);
        assert_eq!(cert.skills, project.skills);
    }
}
