//! Sport activities that can be attached to a spot.
//!
//! Identifiers are the canonical tokens stored alongside pages; labels are
//! what the UI shows. The same table backs the `allActivities` group of the
//! built-in `en` catalog.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub id: &'static str,
    pub label: &'static str,
}

const fn activity(id: &'static str, label: &'static str) -> Activity {
    Activity { id, label }
}

pub const ALL_ACTIVITIES: &[Activity] = &[
    activity("acrosport", "acrosport"),
    activity("alpinisme", "alpinisme"),
    activity("apnée", "apnée"),
    activity("badminton", "badminton"),
    activity("basejump", "basejump"),
    activity("basketball", "basketball"),
    activity("bmx", "bmx"),
    activity("canoëkayak", "canoë-kayak"),
    activity("canyoning", "canyoning"),
    activity("course", "course"),
    activity("coursedorientation", "course d'orientation"),
    activity("crosse", "crosse"),
    activity("cyclisme", "cyclisme"),
    activity("danse", "danse"),
    activity("équitation", "équitation"),
    activity("escalade", "escalade"),
    activity("football", "football"),
    activity("golf", "golf"),
    activity("handball", "handball"),
    activity("hiking", "hiking"),
    activity("kitesurfing", "kitesurfing"),
    activity("marathon", "marathon"),
    activity("paddle", "paddle"),
    activity("pêche", "pêche"),
    activity("rafting", "rafting"),
    activity("roller", "roller"),
    activity("skateboard", "skateboard"),
    activity("skialpin", "ski alpin"),
    activity("skidefond", "ski de fond"),
    activity("skinautique", "ski nautique"),
    activity("skinordique", "ski nordique"),
    activity("snowboard", "snowboard"),
    activity("surf", "surf"),
    activity("tennis", "tennis"),
    activity("tiràlarc", "tir à l'arc"),
    activity("ulm", "ulm"),
    activity("wakeboard", "wakeboard"),
    activity("yoga", "yoga"),
];

pub fn all() -> &'static [Activity] {
    ALL_ACTIVITIES
}

pub fn label(id: &str) -> Option<&'static str> {
    ALL_ACTIVITIES.iter().find(|a| a.id == id).map(|a| a.label)
}

/// Case-insensitive substring search over ids and labels, in table order.
pub fn find(query: &str) -> Vec<Activity> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return ALL_ACTIVITIES.to_vec();
    }
    ALL_ACTIVITIES
        .iter()
        .filter(|a| a.id.contains(&needle) || a.label.to_lowercase().contains(&needle))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = ALL_ACTIVITIES.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), ALL_ACTIVITIES.len());
        assert_eq!(ALL_ACTIVITIES.len(), 38);
    }

    #[test]
    fn accented_labels() {
        assert_eq!(label("canoëkayak"), Some("canoë-kayak"));
        assert_eq!(label("tiràlarc"), Some("tir à l'arc"));
        assert_eq!(label("curling"), None);
    }

    #[test]
    fn find_matches_ids_and_labels() {
        let ski: Vec<_> = find("ski").iter().map(|a| a.id).collect();
        assert_eq!(ski, vec!["skialpin", "skidefond", "skinautique", "skinordique"]);

        // "de fond" only appears in the label
        assert_eq!(find("DE FOND")[0].id, "skidefond");
        assert_eq!(find("  ").len(), ALL_ACTIVITIES.len());
        assert!(find("curling").is_empty());
    }
}
