use std::collections::HashSet;

/// Split a comma separated list into a token set: trim surrounding
/// whitespace, lowercase, drop empty segments, deduplicate.
fn token_set(input: &str) -> HashSet<String> {
    input
        .split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Jaccard similarity over two comma separated token lists.
///
/// "Java, SQL, Firebase" against "Java, Firebase, Android" shares two
/// of four distinct tokens and scores 0.5. When both sides tokenize to
/// nothing the union is empty and the score is 0.0 rather than a
/// division by zero.
pub fn token_set_similarity(a: &str, b: &str) -> f64 {
    let left = token_set(a);
    let right = token_set(b);

    let union = left.union(&right).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = left.intersection(&right).count();
    intersection as f64 / union as f64
}

/// Case-insensitive equality as a score: 1.0 on match, 0.0 otherwise.
/// Two empty strings compare equal and score 1.0.
pub fn exact_match_score(a: &str, b: &str) -> f64 {
    if a.to_lowercase() == b.to_lowercase() {
        1.0
    } else {
        0.0
    }
}
