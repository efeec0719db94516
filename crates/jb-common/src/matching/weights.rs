//! Scoring weights for the two ranking directions.

/// Weighted terms of the composite match score.
///
/// The terms are additive and intentionally not normalized: with the
/// work-field bonus present a perfect match totals 1.3, not 1.0. The
/// 0.7 and 0.5 recommendation cutoffs were tuned against these raw
/// sums, so normalizing here would silently move every cutoff. The
/// total is a ranking value, not a probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchWeights {
    /// Weight on the skill-overlap term.
    pub skill: f64,
    /// Weight on the location match term.
    pub location: f64,
    /// Weight on the work-field match term; `None` drops the term.
    pub work_field: Option<f64>,
}

impl MatchWeights {
    /// Largest total these weights can produce (every term at 1.0).
    pub fn max_total(&self) -> f64 {
        self.skill + self.location + self.work_field.unwrap_or(0.0)
    }
}

/// Ranking job posts for an employee: skill overlap dominates, location
/// and work-field matches each add a fixed bonus.
pub const JOB_RANKING_WEIGHTS: MatchWeights = MatchWeights {
    skill: 0.7,
    location: 0.3,
    work_field: Some(0.3),
};

/// Ranking workers for an employer. The shipped product never scored
/// the work-field tag in this direction, so the term is absent.
pub const WORKER_RANKING_WEIGHTS: MatchWeights = MatchWeights {
    skill: 0.7,
    location: 0.3,
    work_field: None,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_ranking_max_total_exceeds_one() {
        assert!((JOB_RANKING_WEIGHTS.max_total() - 1.3).abs() < 1e-9);
    }

    #[test]
    fn worker_ranking_max_total_is_one() {
        assert!((WORKER_RANKING_WEIGHTS.max_total() - 1.0).abs() < 1e-9);
    }
}
