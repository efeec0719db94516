use std::collections::HashMap;

use super::MatchFields;

fn cluster_key(work_field: &str) -> String {
    work_field.to_lowercase()
}

/// Listings grouped by lowercased work-field tag.
///
/// Rebuilt from the current snapshot on every recommendation run and
/// never persisted, so it can never drift from the listings it was
/// built over.
#[derive(Debug, Clone)]
pub struct ClusterIndex<L> {
    groups: HashMap<String, Vec<L>>,
}

impl<L> ClusterIndex<L>
where
    L: MatchFields + Clone + PartialEq,
{
    /// Group `listings` by lowercased work-field. An empty tag forms a
    /// regular group of its own; relative input order is preserved
    /// within each group.
    pub fn build(listings: &[L]) -> Self {
        let mut groups: HashMap<String, Vec<L>> = HashMap::new();
        for listing in listings {
            groups
                .entry(cluster_key(listing.work_field()))
                .or_default()
                .push(listing.clone());
        }

        Self { groups }
    }

    /// Other members of the cluster containing `listing`, in input
    /// order.
    ///
    /// Only the first structurally equal occurrence counts as the
    /// listing itself; further duplicates are legitimate peers. Returns
    /// nothing when `listing` was not part of the indexed snapshot.
    pub fn peers_of(&self, listing: &L) -> Vec<L> {
        let Some(members) = self.groups.get(&cluster_key(listing.work_field())) else {
            return Vec::new();
        };
        if !members.contains(listing) {
            return Vec::new();
        }

        let mut seen_self = false;
        members
            .iter()
            .filter(|member| {
                if !seen_self && *member == listing {
                    seen_self = true;
                    false
                } else {
                    true
                }
            })
            .cloned()
            .collect()
    }

    /// Members of the cluster stored under `key`, if any. The key side
    /// is already lowercased at build time.
    pub fn get(&self, key: &str) -> Option<&[L]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Consume the index, yielding the raw group mapping.
    pub fn into_groups(self) -> HashMap<String, Vec<L>> {
        self.groups
    }
}

/// Raw cluster mapping from lowercased work-field tag to member
/// listings, in input order.
pub fn build_clusters<L>(listings: &[L]) -> HashMap<String, Vec<L>>
where
    L: MatchFields + Clone + PartialEq,
{
    ClusterIndex::build(listings).into_groups()
}
