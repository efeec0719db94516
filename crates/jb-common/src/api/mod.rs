pub mod recommend_request;
pub mod recommend_response;

use crate::matching::pipeline::{RecommendPolicy, RELATED_THRESHOLD, STRICT_THRESHOLD};
use recommend_request::PolicyKind;

/// Service-level tuning for the recommendation endpoints.
///
/// Every knob defaults to the engine's shipped constants and can be
/// overridden through `JB_*` environment variables. The flat top-N
/// endpoints always use the shipped relaxed cutoff.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchConfig {
    /// Seed cutoff for the primary feed.
    pub strict_threshold: f64,
    /// Seed cutoff for the related feed view.
    pub related_threshold: f64,
    /// Items returned by the top-N endpoints when the caller sends no
    /// limit.
    pub default_top_limit: usize,
    /// Hard cap on listings accepted in one request body.
    pub max_listings: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            strict_threshold: STRICT_THRESHOLD,
            related_threshold: RELATED_THRESHOLD,
            default_top_limit: 20,
            max_listings: 2_000,
        }
    }
}

impl MatchConfig {
    fn parse_env_f64(name: &str) -> Option<f64> {
        std::env::var(name)
            .ok()
            .and_then(|value| value.parse::<f64>().ok())
            .filter(|value| value.is_finite() && *value >= 0.0)
    }

    fn parse_env_usize(name: &str) -> Option<usize> {
        std::env::var(name)
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|value| *value > 0)
    }

    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            strict_threshold: Self::parse_env_f64("JB_STRICT_THRESHOLD")
                .unwrap_or(defaults.strict_threshold),
            related_threshold: Self::parse_env_f64("JB_RELATED_THRESHOLD")
                .unwrap_or(defaults.related_threshold),
            default_top_limit: Self::parse_env_usize("JB_DEFAULT_TOP_LIMIT")
                .unwrap_or(defaults.default_top_limit),
            max_listings: Self::parse_env_usize("JB_MAX_LISTINGS")
                .unwrap_or(defaults.max_listings),
        }
    }

    /// Pipeline policy for a request, with threshold overrides applied.
    pub fn policy(&self, kind: PolicyKind) -> RecommendPolicy {
        match kind {
            PolicyKind::Strict => RecommendPolicy::strict().with_threshold(self.strict_threshold),
            PolicyKind::Related => {
                RecommendPolicy::related().with_threshold(self.related_threshold)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    static ENV_GUARD: Mutex<()> = Mutex::new(());

    fn with_envs(vars: &[(&str, Option<&str>)], f: impl FnOnce()) {
        let _guard = ENV_GUARD.lock().unwrap();

        let previous: Vec<(&str, Option<String>)> = vars
            .iter()
            .map(|(name, _)| (*name, std::env::var(name).ok()))
            .collect();

        for (name, value) in vars {
            match value {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
        }

        f();

        for (name, value) in previous {
            match value {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
        }
    }

    #[test]
    fn from_env_reads_overrides() {
        with_envs(
            &[
                ("JB_STRICT_THRESHOLD", Some("0.8")),
                ("JB_RELATED_THRESHOLD", Some("0.4")),
                ("JB_DEFAULT_TOP_LIMIT", Some("5")),
                ("JB_MAX_LISTINGS", Some("100")),
            ],
            || {
                let config = MatchConfig::from_env();
                assert_eq!(
                    config,
                    MatchConfig {
                        strict_threshold: 0.8,
                        related_threshold: 0.4,
                        default_top_limit: 5,
                        max_listings: 100,
                    }
                );
            },
        );
    }

    #[test]
    fn from_env_falls_back_on_invalid_values() {
        with_envs(
            &[
                ("JB_STRICT_THRESHOLD", Some("NaN")),
                ("JB_RELATED_THRESHOLD", Some("-1")),
                ("JB_DEFAULT_TOP_LIMIT", Some("0")),
                ("JB_MAX_LISTINGS", Some("plenty")),
            ],
            || {
                assert_eq!(MatchConfig::from_env(), MatchConfig::default());
            },
        );
    }

    #[test]
    fn from_env_defaults_when_unset() {
        with_envs(
            &[
                ("JB_STRICT_THRESHOLD", None),
                ("JB_RELATED_THRESHOLD", None),
                ("JB_DEFAULT_TOP_LIMIT", None),
                ("JB_MAX_LISTINGS", None),
            ],
            || {
                assert_eq!(MatchConfig::from_env(), MatchConfig::default());
            },
        );
    }

    #[test]
    fn policy_applies_configured_thresholds() {
        let config = MatchConfig {
            strict_threshold: 0.9,
            related_threshold: 0.2,
            ..MatchConfig::default()
        };

        let strict = config.policy(PolicyKind::Strict);
        assert!((strict.threshold - 0.9).abs() < f64::EPSILON);
        assert!(!strict.include_seed);

        let related = config.policy(PolicyKind::Related);
        assert!((related.threshold - 0.2).abs() < f64::EPSILON);
        assert!(related.include_seed);
    }
}
