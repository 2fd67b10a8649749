pub mod analytics;
pub mod health;

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::applications::handlers as applications;
use crate::assignments::handlers as assignments;
use crate::certification::handlers as certification;
use crate::matching::handlers as matching;
use crate::projects::handlers as projects;
use crate::state::AppState;
use crate::users::handlers as users;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Users
        .route("/api/v1/users", post(users::handle_register))
        .route("/api/v1/users/:id", get(users::handle_get_user))
        .route("/api/v1/users/:id/skills", put(users::handle_update_skills))
        // Matching
        .route(
            "/api/v1/students/:id/matches",
            get(matching::handle_get_matches),
        )
        // Projects
        .route(
            "/api/v1/projects",
            get(projects::handle_list_projects).post(projects::handle_create_project),
        )
        .route("/api/v1/projects/:id", get(projects::handle_get_project))
        .route(
            "/api/v1/projects/:id/status",
            patch(projects::handle_update_status),
        )
        // Applications
        .route(
            "/api/v1/applications",
            get(applications::handle_list_applications).post(applications::handle_apply),
        )
        .route(
            "/api/v1/applications/:id/review",
            post(applications::handle_review_application),
        )
        // Assignments & milestones
        .route(
            "/api/v1/assignments",
            get(assignments::handle_list_assignments).post(assignments::handle_create_assignment),
        )
        .route(
            "/api/v1/milestones/:id/submit",
            post(assignments::handle_submit_milestone),
        )
        .route(
            "/api/v1/milestones/:id/review",
            post(assignments::handle_review_milestone),
        )
        // Certifications
        .route(
            "/api/v1/certifications",
            get(certification::handle_list_certifications),
        )
        .route(
            "/api/v1/certifications/verify/:hash",
            get(certification::handle_verify_certification),
        )
        // Admin
        .route("/api/v1/analytics", get(analytics::analytics_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::store::seed::{demo_data, DEMO_COMPANY_EMAIL, DEMO_PM_EMAIL, DEMO_STUDENT_EMAIL};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_state() -> AppState {
        let config = Config {
            match_jitter: false,
            ..Config::default()
        };
        AppState::new(config, demo_data())
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let resp = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn demo_id(state: &AppState, email: &str) -> String {
        state
            .store
            .read()
            .await
            .user_by_email(email)
            .unwrap()
            .id
            .to_string()
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(test_state());
        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_matches_endpoint_sorted_and_bounded() {
        let state = test_state();
        let student = demo_id(&state, DEMO_STUDENT_EMAIL).await;
        let app = build_router(state);

        let (status, body) = send(
            &app,
            "GET",
            &format!("/api/v1/students/{student}/matches"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["scorer_backend"], "skill_overlap");

        let scores: Vec<u64> = body["matches"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["score"].as_u64().unwrap())
            .collect();
        assert_eq!(scores, vec![50, 25]);
        assert_eq!(body["projects"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_matches_limit_query() {
        let state = test_state();
        let student = demo_id(&state, DEMO_STUDENT_EMAIL).await;
        let app = build_router(state);

        let (_, body) = send(
            &app,
            "GET",
            &format!("/api/v1/students/{student}/matches?limit=1"),
            None,
        )
        .await;
        assert_eq!(body["matches"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_student_without_skills_gets_empty_matches() {
        let app = build_router(test_state());
        let (status, user) = send(
            &app,
            "POST",
            "/api/v1/users",
            Some(json!({"name": "New Student", "email": "new@uni.edu", "role": "student"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(
            &app,
            "GET",
            &format!("/api/v1/students/{}/matches", user["id"].as_str().unwrap()),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["matches"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_user_returns_error_body() {
        let app = build_router(test_state());
        let (status, body) = send(
            &app,
            "GET",
            &format!("/api/v1/students/{}/matches", uuid::Uuid::new_v4()),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_full_internship_lifecycle() {
        let state = test_state();
        let company = demo_id(&state, DEMO_COMPANY_EMAIL).await;
        let pm = demo_id(&state, DEMO_PM_EMAIL).await;
        let app = build_router(state);

        // Student registers with skills
        let (_, student) = send(
            &app,
            "POST",
            "/api/v1/users",
            Some(json!({
                "name": "Jordan Lee",
                "email": "jordan@uni.edu",
                "role": "student",
                "skills": ["Rust", "SQL"]
            })),
        )
        .await;
        let student_id = student["id"].as_str().unwrap().to_string();

        // Company posts a matching project
        let (status, project) = send(
            &app,
            "POST",
            "/api/v1/projects",
            Some(json!({
                "company_id": company,
                "title": "Telemetry Service",
                "skills": ["Rust", "Tokio"],
                "duration": "2 weeks",
                "difficulty": "advanced",
                "max_students": 1
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let project_id = project["id"].as_str().unwrap().to_string();

        let (_, matches) = send(
            &app,
            "GET",
            &format!("/api/v1/students/{student_id}/matches"),
            None,
        )
        .await;
        assert_eq!(matches["matches"][0]["project_id"], project_id.as_str());
        assert_eq!(matches["matches"][0]["score"], 50);

        // Apply and get accepted
        let (status, application) = send(
            &app,
            "POST",
            "/api/v1/applications",
            Some(json!({"student_id": student_id, "project_id": project_id})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let application_id = application["id"].as_str().unwrap().to_string();

        let (status, reviewed) = send(
            &app,
            "POST",
            &format!("/api/v1/applications/{application_id}/review"),
            Some(json!({"action": "accept"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(reviewed["status"], "accepted");

        // PM opens an assignment with one milestone
        let (status, assignment) = send(
            &app,
            "POST",
            "/api/v1/assignments",
            Some(json!({
                "application_id": application_id,
                "pm_id": pm,
                "milestones": [
                    {"title": "Ship it", "due_date": "2030-01-01T00:00:00Z"}
                ]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let milestone_id = assignment["milestones"][0]["id"]
            .as_str()
            .unwrap()
            .to_string();

        let (status, submitted) = send(
            &app,
            "POST",
            &format!("/api/v1/milestones/{milestone_id}/submit"),
            Some(json!({"content": "Service deployed"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(submitted["status"], "submitted");

        let (status, outcome) = send(
            &app,
            "POST",
            &format!("/api/v1/milestones/{milestone_id}/review"),
            Some(json!({"action": "approve", "feedback": "Nice"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(outcome["assignment_status"], "completed");
        let hash = outcome["certification"]["verification_hash"]
            .as_str()
            .unwrap()
            .to_string();

        let (status, cert) = send(
            &app,
            "GET",
            &format!("/api/v1/certifications/verify/{hash}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(cert["title"], "Telemetry Service Completion Certificate");

        let (_, certs) = send(
            &app,
            "GET",
            &format!("/api/v1/certifications?student_id={student_id}"),
            None,
        )
        .await;
        assert_eq!(certs.as_array().unwrap().len(), 1);

        let (_, analytics) = send(&app, "GET", "/api/v1/analytics", None).await;
        assert_eq!(analytics["total_certifications"], 1);
        assert_eq!(analytics["total_students"], 3);
        assert_eq!(analytics["completion_rate"], 50.0);
    }

    #[tokio::test]
    async fn test_unknown_certificate_hash_is_404() {
        let app = build_router(test_state());
        let (status, _) = send(&app, "GET", "/api/v1/certifications/verify/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_open_projects_query() {
        let app = build_router(test_state());
        let (status, body) = send(&app, "GET", "/api/v1/projects?status=open", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 2);
    }
}
