use serde::{Deserialize, Serialize};

use crate::{EmployeeProfile, EmployerProfile, JobPosting};

/// Threshold policy selected by the caller on the feed endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// Primary feed: high cutoff, cluster peers only.
    #[default]
    Strict,
    /// Related view: relaxed cutoff, seeds re-included ahead of their
    /// peers.
    Related,
}

impl PolicyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::Strict => "strict",
            PolicyKind::Related => "related",
        }
    }
}

/// Body of `POST /api/recommendations/jobs`.
///
/// The caller ships the seeker profile together with the job snapshot
/// to rank; the service holds no storage of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendJobsRequest {
    pub employee: EmployeeProfile,
    #[serde(default)]
    pub jobs: Vec<JobPosting>,
    #[serde(default)]
    pub policy: PolicyKind,
}

/// Body of `POST /api/recommendations/workers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendWorkersRequest {
    pub employer: EmployerProfile,
    #[serde(default)]
    pub workers: Vec<EmployeeProfile>,
    #[serde(default)]
    pub policy: PolicyKind,
}

/// Body of `POST /api/recommendations/jobs/top`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopJobsRequest {
    pub employee: EmployeeProfile,
    #[serde(default)]
    pub jobs: Vec<JobPosting>,
    /// Maximum items to return; the server default applies when absent.
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Body of `POST /api/recommendations/workers/top`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopWorkersRequest {
    pub employer: EmployerProfile,
    #[serde(default)]
    pub workers: Vec<EmployeeProfile>,
    #[serde(default)]
    pub limit: Option<usize>,
}
