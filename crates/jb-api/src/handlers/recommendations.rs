use axum::{extract::State, Json};
use jb_common::api::recommend_request::{
    RecommendJobsRequest, RecommendWorkersRequest, TopJobsRequest, TopWorkersRequest,
};
use jb_common::api::recommend_response::{
    RecommendationResponse, RecommendedListing, ScoreBreakdown,
};
use jb_common::api::MatchConfig;
use jb_common::matching::scoring::MatchScore;
use jb_common::{EmployeeProfile, JobPosting};

use crate::error::ApiError;
use crate::SharedState;

const TOP_POLICY_LABEL: &str = "top";

fn ensure_snapshot_cap(count: usize, cap: usize) -> Result<(), ApiError> {
    if count > cap {
        return Err(ApiError::PayloadTooLarge(format!(
            "request carries {count} listings, cap is {cap}"
        )));
    }
    Ok(())
}

fn effective_limit(requested: Option<usize>, config: &MatchConfig) -> Result<usize, ApiError> {
    match requested {
        Some(0) => Err(ApiError::BadRequest("limit must be at least 1".into())),
        Some(limit) => Ok(limit.min(config.max_listings)),
        None => Ok(config.default_top_limit),
    }
}

fn annotate<L>(listing: L, score: MatchScore) -> RecommendedListing<L> {
    RecommendedListing {
        score: score.total,
        breakdown: ScoreBreakdown::from(score),
        listing,
    }
}

/// `POST /api/recommendations/jobs`: cluster-expanded job feed for an
/// employee profile.
pub async fn recommend_jobs(
    State(state): State<SharedState>,
    Json(request): Json<RecommendJobsRequest>,
) -> Result<Json<RecommendationResponse<JobPosting>>, ApiError> {
    ensure_snapshot_cap(request.jobs.len(), state.match_config.max_listings)?;

    let policy = state.match_config.policy(request.policy);
    let feed = state
        .engine
        .recommend_jobs(&request.employee, &request.jobs, &policy);

    let matches = feed
        .into_iter()
        .map(|job| {
            let score = state.engine.score_job(&request.employee, &job);
            annotate(job, score)
        })
        .collect();

    Ok(Json(RecommendationResponse::new(
        matches,
        request.policy.as_str(),
    )))
}

/// `POST /api/recommendations/jobs/top`: flat bounded job ranking, no
/// cluster expansion.
pub async fn top_jobs(
    State(state): State<SharedState>,
    Json(request): Json<TopJobsRequest>,
) -> Result<Json<RecommendationResponse<JobPosting>>, ApiError> {
    ensure_snapshot_cap(request.jobs.len(), state.match_config.max_listings)?;
    let limit = effective_limit(request.limit, &state.match_config)?;

    let ranked = state
        .engine
        .top_jobs(&request.employee, &request.jobs, limit);

    let matches = ranked
        .into_iter()
        .map(|job| {
            let score = state.engine.score_job(&request.employee, &job);
            annotate(job, score)
        })
        .collect();

    Ok(Json(RecommendationResponse::new(matches, TOP_POLICY_LABEL)))
}

/// `POST /api/recommendations/workers`: cluster-expanded worker feed
/// for an employer profile.
pub async fn recommend_workers(
    State(state): State<SharedState>,
    Json(request): Json<RecommendWorkersRequest>,
) -> Result<Json<RecommendationResponse<EmployeeProfile>>, ApiError> {
    ensure_snapshot_cap(request.workers.len(), state.match_config.max_listings)?;

    let policy = state.match_config.policy(request.policy);
    let feed = state
        .engine
        .recommend_workers(&request.employer, &request.workers, &policy);

    let matches = feed
        .into_iter()
        .map(|worker| {
            let score = state.engine.score_worker(&request.employer, &worker);
            annotate(worker, score)
        })
        .collect();

    Ok(Json(RecommendationResponse::new(
        matches,
        request.policy.as_str(),
    )))
}

/// `POST /api/recommendations/workers/top`: flat bounded worker
/// ranking, no cluster expansion.
pub async fn top_workers(
    State(state): State<SharedState>,
    Json(request): Json<TopWorkersRequest>,
) -> Result<Json<RecommendationResponse<EmployeeProfile>>, ApiError> {
    ensure_snapshot_cap(request.workers.len(), state.match_config.max_listings)?;
    let limit = effective_limit(request.limit, &state.match_config)?;

    let ranked = state
        .engine
        .top_workers(&request.employer, &request.workers, limit);

    let matches = ranked
        .into_iter()
        .map(|worker| {
            let score = state.engine.score_worker(&request.employer, &worker);
            annotate(worker, score)
        })
        .collect();

    Ok(Json(RecommendationResponse::new(matches, TOP_POLICY_LABEL)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_cap_allows_exact_fit() {
        assert!(ensure_snapshot_cap(5, 5).is_ok());
        assert!(ensure_snapshot_cap(6, 5).is_err());
    }

    #[test]
    fn effective_limit_defaults_and_clamps() {
        let config = MatchConfig {
            default_top_limit: 7,
            max_listings: 10,
            ..MatchConfig::default()
        };

        assert_eq!(effective_limit(None, &config).unwrap(), 7);
        assert_eq!(effective_limit(Some(3), &config).unwrap(), 3);
        assert_eq!(effective_limit(Some(500), &config).unwrap(), 10);
        assert!(effective_limit(Some(0), &config).is_err());
    }
}
