//! Demo data loaded at startup when `SEED_DEMO_DATA` is enabled.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::models::application::{Application, ApplicationStatus};
use crate::models::assignment::{
    Assignment, AssignmentStatus, Milestone, MilestoneStatus, Submission,
};
use crate::models::project::{Difficulty, Project, ProjectStatus};
use crate::models::user::{User, UserRole};
use crate::store::PlatformData;

pub const DEMO_STUDENT_EMAIL: &str = "student@demo.com";
pub const DEMO_DESIGNER_EMAIL: &str = "sarah@demo.com";
pub const DEMO_COMPANY_EMAIL: &str = "company@demo.com";
pub const DEMO_PM_EMAIL: &str = "pm@demo.com";
pub const DEMO_ADMIN_EMAIL: &str = "admin@demo.com";

fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_else(Utc::now)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn demo_data() -> PlatformData {
    let mut alex = User::new("Alex Chen", DEMO_STUDENT_EMAIL, UserRole::Student);
    alex.skills = strings(&["React", "TypeScript", "Node.js", "Python"]);
    alex.bio = Some("Computer Science student passionate about full-stack development".into());
    alex.portfolio = Some("https://alexchen.dev".into());
    alex.created_at = date(2024, 1, 15);

    let mut sarah = User::new("Sarah Johnson", DEMO_DESIGNER_EMAIL, UserRole::Student);
    sarah.skills = strings(&["UI/UX Design", "Figma", "React", "CSS"]);
    sarah.bio =
        Some("Design student with a focus on user experience and frontend development".into());
    sarah.created_at = date(2024, 2, 1);

    let mut company = User::new("Tech Innovations Inc", DEMO_COMPANY_EMAIL, UserRole::Company);
    company.company_name = Some("Tech Innovations Inc".into());
    company.industry = Some("Software Development".into());
    company.created_at = date(2024, 1, 1);

    let mut pm = User::new("Michael Rodriguez", DEMO_PM_EMAIL, UserRole::Pm);
    pm.created_at = date(2024, 1, 10);

    let mut admin = User::new("Admin User", DEMO_ADMIN_EMAIL, UserRole::Admin);
    admin.created_at = date(2024, 1, 1);

    let project = |title: &str,
                   description: &str,
                   skills: &[&str],
                   duration: &str,
                   difficulty: Difficulty,
                   status: ProjectStatus,
                   (max_students, current_students): (u32, u32),
                   created_at: DateTime<Utc>,
                   deadline: DateTime<Utc>| Project {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: description.to_string(),
        company_id: company.id,
        company_name: company.display_company_name().to_string(),
        skills: strings(skills),
        duration: duration.to_string(),
        difficulty,
        status,
        max_students,
        current_students,
        created_at,
        deadline: Some(deadline),
    };

    let dashboard = project(
        "E-commerce Dashboard Development",
        "Build a responsive admin dashboard for an e-commerce platform using React and \
         TypeScript. Features include order management, inventory tracking, and analytics \
         visualization.",
        &["React", "TypeScript", "Tailwind CSS", "Chart.js"],
        "4 weeks",
        Difficulty::Intermediate,
        ProjectStatus::Open,
        (2, 0),
        date(2024, 3, 1),
        date(2024, 4, 1),
    );
    let mobile_design = project(
        "Mobile App UI/UX Design",
        "Design a complete user interface for a fitness tracking mobile application. Create \
         wireframes, prototypes, and design system components.",
        &["UI/UX Design", "Figma", "Prototyping", "Design Systems"],
        "3 weeks",
        Difficulty::Beginner,
        ProjectStatus::InProgress,
        (1, 1),
        date(2024, 2, 15),
        date(2024, 3, 15),
    );
    let api_docs = project(
        "API Development & Documentation",
        "Develop RESTful APIs for a social media platform and create comprehensive \
         documentation. Includes user authentication, post management, and real-time features.",
        &["Node.js", "Express", "MongoDB", "API Documentation"],
        "5 weeks",
        Difficulty::Advanced,
        ProjectStatus::Open,
        (1, 0),
        date(2024, 3, 5),
        date(2024, 4, 10),
    );

    let applications = vec![
        Application {
            id: Uuid::new_v4(),
            student_id: alex.id,
            project_id: dashboard.id,
            status: ApplicationStatus::Pending,
            cover_letter: "I am excited to work on this e-commerce dashboard project. My \
                           experience with React and TypeScript makes me a great fit for this \
                           role."
                .into(),
            applied_at: date(2024, 3, 2),
            reviewed_at: None,
        },
        Application {
            id: Uuid::new_v4(),
            student_id: sarah.id,
            project_id: mobile_design.id,
            status: ApplicationStatus::Accepted,
            cover_letter: "As a design student with strong Figma skills, I would love to \
                           contribute to this mobile app UI/UX project."
                .into(),
            applied_at: date(2024, 2, 16),
            reviewed_at: Some(date(2024, 2, 17)),
        },
    ];

    let assignment_id = Uuid::new_v4();
    let milestones = vec![
        Milestone {
            id: Uuid::new_v4(),
            assignment_id,
            title: "User Research & Wireframes".into(),
            description: "Conduct user research and create initial wireframes for the fitness app"
                .into(),
            due_date: date(2024, 2, 25),
            status: MilestoneStatus::Approved,
            submission: Some(Submission {
                content: "Completed user research with 15 participants and created wireframes \
                          for 8 key screens."
                    .into(),
                submitted_at: date(2024, 2, 24),
                feedback: Some(
                    "Excellent work on the user research. Wireframes are clean and \
                     well-thought-out."
                        .into(),
                ),
            }),
        },
        Milestone {
            id: Uuid::new_v4(),
            assignment_id,
            title: "High-Fidelity Prototypes".into(),
            description: "Create high-fidelity prototypes and interactive mockups".into(),
            due_date: date(2024, 3, 4),
            status: MilestoneStatus::Submitted,
            submission: Some(Submission {
                content: "Created interactive prototypes for all main user flows using Figma."
                    .into(),
                submitted_at: date(2024, 3, 3),
                feedback: None,
            }),
        },
        Milestone {
            id: Uuid::new_v4(),
            assignment_id,
            title: "Design System Documentation".into(),
            description: "Document the complete design system including components and guidelines"
                .into(),
            due_date: date(2024, 3, 11),
            status: MilestoneStatus::Pending,
            submission: None,
        },
    ];

    let assignment = Assignment {
        id: assignment_id,
        student_id: sarah.id,
        project_id: mobile_design.id,
        pm_id: pm.id,
        status: AssignmentStatus::Active,
        start_date: date(2024, 2, 18),
        end_date: None,
        milestones,
    };

    PlatformData {
        users: vec![alex, sarah, company, pm, admin],
        projects: vec![dashboard, mobile_design, api_docs],
        applications,
        assignments: vec![assignment],
        certifications: Vec::new(),
    }
}
