use super::similarity::{exact_match_score, token_set_similarity};
use super::weights::MatchWeights;
use super::MatchFields;

/// Composite score for one seeker/listing pair.
///
/// The component fields hold the raw 0.0..=1.0 primitive scores before
/// weighting; `total` is the weighted sum and follows the raw-scale
/// rules described on [`MatchWeights`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchScore {
    pub total: f64,
    pub skill: f64,
    pub location: f64,
    /// Raw work-field score; `None` when the direction drops the term.
    pub work_field: Option<f64>,
}

/// Score one listing against a seeker profile.
///
/// Pure and total: no I/O, no shared state, and every input produces a
/// score. Empty fields contribute zero, except that two empty values of
/// an exact-match field compare equal and contribute the full term.
pub fn score_listing<P, L>(seeker: &P, listing: &L, weights: &MatchWeights) -> MatchScore
where
    P: MatchFields,
    L: MatchFields,
{
    let skill = token_set_similarity(seeker.skill_text(), listing.skill_text());
    let location = exact_match_score(seeker.location(), listing.location());
    let work_field = weights
        .work_field
        .map(|_| exact_match_score(seeker.work_field(), listing.work_field()));

    let mut total = skill * weights.skill + location * weights.location;
    if let (Some(raw), Some(weight)) = (work_field, weights.work_field) {
        total += raw * weight;
    }

    MatchScore {
        total,
        skill,
        location,
        work_field,
    }
}

/// Total of [`score_listing`] for callers that only need the ranking
/// value.
pub fn compute_match_score<P, L>(seeker: &P, listing: &L, weights: &MatchWeights) -> f64
where
    P: MatchFields,
    L: MatchFields,
{
    score_listing(seeker, listing, weights).total
}
