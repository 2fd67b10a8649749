//! Match Scoring — pluggable, trait-based scorer that ranks open projects for a student.
//!
//! Default: `SkillOverlapScorer` (case-insensitive substring overlap between the
//! student's skills and each project's required skills, scaled by a jitter factor).
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`, chosen at startup via config.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::project::Project;
use crate::models::user::User;

/// Upper bound on any match score.
pub const MAX_SCORE: u32 = 95;
pub const JITTER_MIN: f64 = 0.8;
pub const JITTER_MAX: f64 = 1.2;

const STRONG_THRESHOLD: u32 = 80;
const GOOD_THRESHOLD: u32 = 60;

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// A scored association between one student and one project.
/// Derived on every request; never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Match {
    pub student_id: Uuid,
    pub project_id: Uuid,
    pub score: u32, // 0 – 95
    pub reasons: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Jitter sources
// ────────────────────────────────────────────────────────────────────────────

/// Multiplicative noise applied to each raw overlap score.
pub trait Jitter: Send + Sync {
    fn factor(&self) -> f64;
}

/// Uniform factor in `[JITTER_MIN, JITTER_MAX]`, drawn per project.
pub struct RandomJitter;

impl Jitter for RandomJitter {
    fn factor(&self) -> f64 {
        rand::thread_rng().gen_range(JITTER_MIN..=JITTER_MAX)
    }
}

/// Constant factor. `FixedJitter(1.0)` makes scoring deterministic.
pub struct FixedJitter(pub f64);

impl Jitter for FixedJitter {
    fn factor(&self) -> f64 {
        self.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The match scorer trait. Implement this to swap backends without touching
/// the endpoint or handler code.
///
/// Carried in `AppState` as `Arc<dyn MatchScorer>`.
#[async_trait]
pub trait MatchScorer: Send + Sync {
    /// Ranks `projects` for `student`, best first. Non-open projects are ignored.
    async fn score(&self, student: &User, projects: &[Project]) -> Result<Vec<Match>, AppError>;

    /// Short label reported alongside results ("skill_overlap", ...).
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// SkillOverlapScorer — default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Pure-Rust skill overlap scorer. No I/O, single pass over the project set.
///
/// Algorithm, per open project:
/// 1. common = student skills that are a substring of, or contain, any
///    required skill (case-insensitive)
/// 2. skip the project when common is empty
/// 3. score = round(min(|common| / |required| × jitter × 100, 95))
/// 4. attach justification strings
///
/// Results are stably sorted by score descending, so ties keep project order.
pub struct SkillOverlapScorer {
    jitter: Arc<dyn Jitter>,
}

impl SkillOverlapScorer {
    pub fn new(jitter: Arc<dyn Jitter>) -> Self {
        Self { jitter }
    }

    /// Random jitter when `jitter_enabled`, otherwise a fixed factor of 1.0.
    pub fn from_config(jitter_enabled: bool) -> Self {
        if jitter_enabled {
            Self::new(Arc::new(RandomJitter))
        } else {
            Self::new(Arc::new(FixedJitter(1.0)))
        }
    }
}

#[async_trait]
impl MatchScorer for SkillOverlapScorer {
    async fn score(&self, student: &User, projects: &[Project]) -> Result<Vec<Match>, AppError> {
        Ok(compute_matches(
            student.id,
            &student.skills,
            projects,
            self.jitter.as_ref(),
        ))
    }

    fn backend(&self) -> &'static str {
        "skill_overlap"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core overlap algorithm
// ────────────────────────────────────────────────────────────────────────────

pub fn compute_matches(
    student_id: Uuid,
    student_skills: &[String],
    projects: &[Project],
    jitter: &dyn Jitter,
) -> Vec<Match> {
    let skills = normalize_skills(student_skills);
    if skills.is_empty() {
        return Vec::new();
    }

    let mut matches = Vec::new();

    for project in projects.iter().filter(|p| p.is_open()) {
        let required: Vec<String> = project
            .skills
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        if required.is_empty() {
            continue;
        }

        let common: Vec<&str> = skills
            .iter()
            .filter(|(_, lower)| required.iter().any(|req| skills_overlap(lower, req)))
            .map(|(original, _)| original.as_str())
            .collect();

        if common.is_empty() {
            continue;
        }

        let ratio = common.len() as f64 / required.len() as f64;
        let score = overlap_score(ratio, jitter.factor());
        let reasons = build_reasons(&common, project, score);

        matches.push(Match {
            student_id,
            project_id: project.id,
            score,
            reasons,
        });
    }

    // Vec::sort_by is stable: equal scores keep project order.
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}

/// Two skills overlap when either lowercase name contains the other.
fn skills_overlap(student_skill: &str, required_skill: &str) -> bool {
    required_skill.contains(student_skill) || student_skill.contains(required_skill)
}

/// Trims, drops blanks, and dedups case-insensitively keeping first spelling.
/// Returns `(original, lowercase)` pairs in input order.
fn normalize_skills(skills: &[String]) -> Vec<(String, String)> {
    let mut seen = HashSet::new();
    skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .filter_map(|s| {
            let lower = s.to_lowercase();
            seen.insert(lower.clone()).then(|| (s.to_string(), lower))
        })
        .collect()
}

fn overlap_score(ratio: f64, jitter: f64) -> u32 {
    (ratio * jitter * 100.0)
        .clamp(0.0, MAX_SCORE as f64)
        .round() as u32
}

fn build_reasons(common: &[&str], project: &Project, score: u32) -> Vec<String> {
    let mut reasons = vec![
        format!("{} matching skills: {}", common.len(), common.join(", ")),
        format!("Difficulty level: {}", project.difficulty),
        format!("Project duration: {}", project.duration),
    ];

    if score > STRONG_THRESHOLD {
        reasons.push("Strong skill alignment with project requirements".to_string());
    } else if score > GOOD_THRESHOLD {
        reasons.push("Good foundation with room for skill development".to_string());
    }

    reasons
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
