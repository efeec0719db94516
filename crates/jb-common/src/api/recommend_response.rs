use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matching::scoring::MatchScore;

/// Raw component scores echoed alongside each recommended listing for
/// the match detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skill: f64,
    pub location: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_field: Option<f64>,
}

impl From<MatchScore> for ScoreBreakdown {
    fn from(score: MatchScore) -> Self {
        Self {
            skill: score.skill,
            location: score.location,
            work_field: score.work_field,
        }
    }
}

/// One listing in a recommendation response.
///
/// `score` is recomputed for display on every entry, including cluster
/// peers that never cleared the threshold themselves. Response order
/// comes from the recommendation pipeline and is not a sort over this
/// field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedListing<L> {
    #[serde(flatten)]
    pub listing: L,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Envelope returned by every recommendation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse<L> {
    pub matches: Vec<RecommendedListing<L>>,
    /// Policy that produced the ordering: "strict", "related" or "top".
    pub policy: String,
    pub computed_at: DateTime<Utc>,
}

impl<L> RecommendationResponse<L> {
    pub fn new(matches: Vec<RecommendedListing<L>>, policy: impl Into<String>) -> Self {
        Self {
            matches,
            policy: policy.into(),
            computed_at: Utc::now(),
        }
    }
}
