use std::cmp::Ordering;

use super::cluster::ClusterIndex;
use super::scoring::{compute_match_score, score_listing, MatchScore};
use super::weights::{MatchWeights, JOB_RANKING_WEIGHTS, WORKER_RANKING_WEIGHTS};
use super::MatchFields;
use crate::{EmployeeProfile, EmployerProfile, JobPosting};

/// Seed cutoff for the primary recommendation feed.
pub const STRICT_THRESHOLD: f64 = 0.7;

/// Seed cutoff for the related-items view and the flat top-N rankings.
pub const RELATED_THRESHOLD: f64 = 0.5;

/// Filter and expansion policy for one recommendation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendPolicy {
    /// Minimum composite score for a listing to become a seed.
    pub threshold: f64,
    /// Whether each surviving seed is emitted ahead of its cluster
    /// peers. The primary feed historically emits peers only and
    /// downstream screens rely on that shape.
    pub include_seed: bool,
}

impl RecommendPolicy {
    /// Primary feed: high cutoff, cluster peers only.
    pub const fn strict() -> Self {
        Self {
            threshold: STRICT_THRESHOLD,
            include_seed: false,
        }
    }

    /// Related view: lower cutoff, each seed re-included ahead of its
    /// peers.
    pub const fn related() -> Self {
        Self {
            threshold: RELATED_THRESHOLD,
            include_seed: true,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}

/// Structural dedup preserving first occurrences. Listings carry float
/// fields and are not `Hash`, so membership checks stay linear.
fn dedup_keeping_first<L: PartialEq>(items: Vec<L>) -> Vec<L> {
    let mut unique: Vec<L> = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}

/// One full recommendation run: score, filter, rank, expand, dedup.
///
/// Every listing is scored against `seeker`; listings at or above
/// `policy.threshold` survive as seeds, ranked by descending score with
/// ties keeping their snapshot order. Clusters are built over the full
/// input snapshot, not just the survivors, so seeds pull in same-field
/// peers that never cleared the cutoff themselves. Each seed then
/// contributes itself (when the policy says so) followed by its cluster
/// peers, and the concatenation is deduplicated keeping first
/// occurrences.
pub fn recommend<P, L>(
    seeker: &P,
    listings: &[L],
    weights: &MatchWeights,
    policy: &RecommendPolicy,
) -> Vec<L>
where
    P: MatchFields,
    L: MatchFields + Clone + PartialEq,
{
    let mut seeds: Vec<(&L, f64)> = listings
        .iter()
        .map(|listing| (listing, compute_match_score(seeker, listing, weights)))
        .filter(|(_, score)| *score >= policy.threshold)
        .collect();

    // Vec::sort_by is stable, so equal scores keep snapshot order.
    seeds.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let clusters = ClusterIndex::build(listings);

    let mut expanded: Vec<L> = Vec::new();
    for (seed, _) in seeds {
        if policy.include_seed {
            expanded.push(seed.clone());
        }
        expanded.extend(clusters.peers_of(seed));
    }

    dedup_keeping_first(expanded)
}

/// Flat bounded ranking with no cluster expansion: the qualifying
/// listings themselves come back, best first, truncated to `limit`.
/// Scores below [`RELATED_THRESHOLD`] never qualify.
pub fn top_related<P, L>(seeker: &P, listings: &[L], weights: &MatchWeights, limit: usize) -> Vec<L>
where
    P: MatchFields,
    L: MatchFields + Clone,
{
    let mut ranked: Vec<(&L, f64)> = listings
        .iter()
        .map(|listing| (listing, compute_match_score(seeker, listing, weights)))
        .filter(|(_, score)| *score >= RELATED_THRESHOLD)
        .collect();

    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked.truncate(limit);

    ranked.into_iter().map(|(listing, _)| listing.clone()).collect()
}

/// Direction-aware front door over the generic pipeline. Stateless; the
/// weights for each direction are fixed by the product.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine;

impl RecommendationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Job feed for an employee profile.
    pub fn recommend_jobs(
        &self,
        employee: &EmployeeProfile,
        jobs: &[JobPosting],
        policy: &RecommendPolicy,
    ) -> Vec<JobPosting> {
        recommend(employee, jobs, &JOB_RANKING_WEIGHTS, policy)
    }

    /// Worker feed for an employer profile. The work-field term is
    /// absent in this direction.
    pub fn recommend_workers(
        &self,
        employer: &EmployerProfile,
        workers: &[EmployeeProfile],
        policy: &RecommendPolicy,
    ) -> Vec<EmployeeProfile> {
        recommend(employer, workers, &WORKER_RANKING_WEIGHTS, policy)
    }

    /// Best job posts for an employee, at most `limit` of them.
    pub fn top_jobs(
        &self,
        employee: &EmployeeProfile,
        jobs: &[JobPosting],
        limit: usize,
    ) -> Vec<JobPosting> {
        top_related(employee, jobs, &JOB_RANKING_WEIGHTS, limit)
    }

    /// Best workers for an employer, at most `limit` of them.
    pub fn top_workers(
        &self,
        employer: &EmployerProfile,
        workers: &[EmployeeProfile],
        limit: usize,
    ) -> Vec<EmployeeProfile> {
        top_related(employer, workers, &WORKER_RANKING_WEIGHTS, limit)
    }

    /// Display breakdown for one employee/job pair.
    pub fn score_job(&self, employee: &EmployeeProfile, job: &JobPosting) -> MatchScore {
        score_listing(employee, job, &JOB_RANKING_WEIGHTS)
    }

    /// Display breakdown for one employer/worker pair.
    pub fn score_worker(&self, employer: &EmployerProfile, worker: &EmployeeProfile) -> MatchScore {
        score_listing(employer, worker, &WORKER_RANKING_WEIGHTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(skills: &str, location: &str, work_field: &str) -> EmployeeProfile {
        EmployeeProfile {
            skills: skills.into(),
            location: location.into(),
            work_field: work_field.into(),
            ..EmployeeProfile::default()
        }
    }

    fn job(id: &str, description: &str, location: &str, work_field: &str) -> JobPosting {
        JobPosting {
            id: Some(id.into()),
            description: description.into(),
            location: location.into(),
            work_field: work_field.into(),
            ..JobPosting::default()
        }
    }

    fn ids(jobs: &[JobPosting]) -> Vec<&str> {
        jobs.iter()
            .map(|job| job.id.as_deref().unwrap_or(""))
            .collect()
    }

    #[test]
    fn strict_feed_returns_cluster_peers_without_the_seed() {
        let seeker = employee("Java, SQL, Firebase", "Manila", "IT");
        let listings = vec![
            job("seed", "Java, SQL, Firebase", "Manila", "IT"),
            job("peer", "Cobol", "Cebu", "it"),
            job("offside", "Welding", "Davao", "Construction"),
        ];

        let feed = recommend(
            &seeker,
            &listings,
            &JOB_RANKING_WEIGHTS,
            &RecommendPolicy::strict(),
        );

        assert_eq!(ids(&feed), ["peer"]);
    }

    #[test]
    fn related_view_reincludes_the_seed_first() {
        let seeker = employee("Java, SQL, Firebase", "Manila", "IT");
        let listings = vec![
            job("seed", "Java, SQL, Firebase", "Manila", "IT"),
            job("peer", "Cobol", "Cebu", "it"),
        ];

        let feed = recommend(
            &seeker,
            &listings,
            &JOB_RANKING_WEIGHTS,
            &RecommendPolicy::related(),
        );

        assert_eq!(ids(&feed), ["seed", "peer"]);
    }

    #[test]
    fn seeds_are_ranked_by_descending_score() {
        let seeker = employee("Java, SQL", "Manila", "");
        let listings = vec![
            // 0.7 * 1.0 = 0.7: qualifies second.
            job("low-seed", "Java, SQL", "Cebu", "beta"),
            job("beta-peer", "Welding", "Davao", "Beta"),
            // 0.7 + 0.3 = 1.0: qualifies first despite later position.
            job("high-seed", "Java, SQL", "Manila", "alpha"),
            job("alpha-peer", "Carpentry", "Davao", "Alpha"),
        ];

        let feed = recommend(
            &seeker,
            &listings,
            &JOB_RANKING_WEIGHTS,
            &RecommendPolicy::strict(),
        );

        assert_eq!(ids(&feed), ["alpha-peer", "beta-peer"]);
    }

    #[test]
    fn tied_seeds_keep_snapshot_order() {
        let seeker = employee("Java, SQL", "Manila", "");
        let listings = vec![
            job("first-seed", "Java, SQL", "Cebu", "x"),
            job("second-seed", "Java, SQL", "Cebu", "y"),
            job("x-peer", "Welding", "Davao", "X"),
            job("y-peer", "Welding", "Davao", "Y"),
        ];

        let feed = recommend(
            &seeker,
            &listings,
            &JOB_RANKING_WEIGHTS,
            &RecommendPolicy::strict(),
        );

        assert_eq!(ids(&feed), ["x-peer", "y-peer"]);
    }

    #[test]
    fn overlapping_clusters_dedup_keeping_first_occurrence() {
        let seeker = employee("Java, SQL", "Manila", "IT");
        let listings = vec![
            job("seed-a", "Java, SQL", "Manila", "IT"),
            job("seed-b", "Java, SQL", "Manila", "it"),
            job("peer", "Cobol", "Cebu", "It"),
        ];

        let feed = recommend(
            &seeker,
            &listings,
            &JOB_RANKING_WEIGHTS,
            &RecommendPolicy::strict(),
        );

        // seed-a expands to [seed-b, peer]; seed-b expands to
        // [seed-a, peer], whose duplicate peer is dropped. A seed can
        // still surface as another seed's cluster peer.
        assert_eq!(ids(&feed), ["seed-b", "peer", "seed-a"]);
    }

    #[test]
    fn seed_exactly_at_threshold_qualifies() {
        let seeker = employee("Java, SQL", "Manila", "");
        let listings = vec![
            // Full skill overlap and nothing else: exactly 0.7.
            job("edge-seed", "Java, SQL", "Cebu", "alpha"),
            job("alpha-peer", "Welding", "Davao", "Alpha"),
        ];

        let feed = recommend(
            &seeker,
            &listings,
            &JOB_RANKING_WEIGHTS,
            &RecommendPolicy::strict(),
        );

        assert_eq!(ids(&feed), ["alpha-peer"]);
    }

    #[test]
    fn lowering_the_threshold_never_shrinks_the_result_set() {
        let seeker = employee("Java, SQL, Firebase", "Manila", "IT");
        let listings = vec![
            job("a", "Java, SQL, Firebase", "Manila", "IT"),
            job("b", "Java, Firebase", "Manila", "IT"),
            job("c", "Java", "Cebu", "Retail"),
            job("d", "Java", "Manila", "Retail"),
            job("e", "Welding", "Davao", "Construction"),
        ];

        let strict = recommend(
            &seeker,
            &listings,
            &JOB_RANKING_WEIGHTS,
            &RecommendPolicy::strict(),
        );
        let relaxed = recommend(
            &seeker,
            &listings,
            &JOB_RANKING_WEIGHTS,
            &RecommendPolicy::strict().with_threshold(RELATED_THRESHOLD),
        );

        for listing in &strict {
            assert!(relaxed.contains(listing), "missing {:?}", listing.id);
        }
    }

    #[test]
    fn empty_snapshot_yields_empty_feed() {
        let seeker = employee("Java", "Manila", "IT");

        let feed = recommend(
            &seeker,
            &[],
            &JOB_RANKING_WEIGHTS,
            &RecommendPolicy::strict(),
        );

        assert!(feed.is_empty());
    }

    #[test]
    fn no_qualifying_seed_yields_empty_feed() {
        let seeker = employee("Java", "Manila", "IT");
        let listings = vec![job("far", "Welding", "Davao", "Construction")];

        let feed = recommend(
            &seeker,
            &listings,
            &JOB_RANKING_WEIGHTS,
            &RecommendPolicy::strict(),
        );

        assert!(feed.is_empty());
    }

    #[test]
    fn top_related_ranks_and_truncates() {
        let seeker = employee("Java, SQL", "Manila", "IT");
        let listings = vec![
            job("third", "Java", "Manila", "IT"),
            job("first", "Java, SQL", "Manila", "IT"),
            job("second", "Java, SQL", "Cebu", "IT"),
            job("excluded", "Welding", "Davao", "Construction"),
        ];

        let all = top_related(&seeker, &listings, &JOB_RANKING_WEIGHTS, 10);
        assert_eq!(ids(&all), ["first", "second", "third"]);

        let capped = top_related(&seeker, &listings, &JOB_RANKING_WEIGHTS, 2);
        assert_eq!(ids(&capped), ["first", "second"]);
    }

    #[test]
    fn top_related_keeps_snapshot_order_on_ties() {
        let seeker = employee("Java, SQL", "Manila", "");
        let listings = vec![
            job("early", "Java, SQL", "Cebu", "x"),
            job("late", "Java, SQL", "Cebu", "y"),
        ];

        let ranked = top_related(&seeker, &listings, &JOB_RANKING_WEIGHTS, 10);

        assert_eq!(ids(&ranked), ["early", "late"]);
    }

    #[test]
    fn top_related_with_zero_limit_is_empty() {
        let seeker = employee("Java", "Manila", "IT");
        let listings = vec![job("a", "Java", "Manila", "IT")];

        assert!(top_related(&seeker, &listings, &JOB_RANKING_WEIGHTS, 0).is_empty());
    }

    #[test]
    fn worker_feed_ignores_work_field_for_scoring_but_not_clustering() {
        let employer = EmployerProfile {
            requirements: "Java, SQL".into(),
            location: "Manila".into(),
            work_field: "IT".into(),
            ..EmployerProfile::default()
        };
        let workers = vec![
            // Full requirements and location match: seed at 1.0.
            employee("Java, SQL", "Manila", "IT"),
            // Matching field adds nothing in this direction, so this one
            // only surfaces through the seed's cluster.
            employee("Cooking", "Davao", "it"),
        ];

        let engine = RecommendationEngine::new();

        let strict = engine.recommend_workers(&employer, &workers, &RecommendPolicy::strict());
        assert_eq!(strict, vec![workers[1].clone()]);

        let related = engine.recommend_workers(&employer, &workers, &RecommendPolicy::related());
        assert_eq!(related, vec![workers[0].clone(), workers[1].clone()]);
    }

    #[test]
    fn engine_scores_mirror_the_direction_weights() {
        let engine = RecommendationEngine::new();
        let seeker = employee("Java, SQL, Firebase", "Manila", "IT");
        let listing = job("a", "Java, SQL, Firebase", "Manila", "IT");

        let score = engine.score_job(&seeker, &listing);
        assert!((score.total - 1.3).abs() < 1e-9);

        let employer = EmployerProfile {
            requirements: "Java".into(),
            location: "Manila".into(),
            work_field: "IT".into(),
            ..EmployerProfile::default()
        };
        let worker = employee("Java", "Manila", "IT");

        let worker_score = engine.score_worker(&employer, &worker);
        assert_eq!(worker_score.work_field, None);
        assert!((worker_score.total - 1.0).abs() < 1e-9);
    }
}
