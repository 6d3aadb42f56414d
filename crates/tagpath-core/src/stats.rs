//! Tag statistics over a catalog
//!
//! Frequency shares feed word-cloud style renderers; per-tag average
//! acceptance feeds the easiest/hardest tag charts. Rendering happens elsewhere.

use std::collections::HashMap;

use serde::Serialize;

use crate::catalog::Catalog;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagFrequency {
    pub tag: String,
    pub count: usize,
    /// Fraction of all tag occurrences in the catalog
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagAcceptance {
    pub tag: String,
    pub problems: usize,
    pub average_acceptance: f64,
}

/// Both ends of the per-tag acceptance ranking, each in ascending order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TagAcceptanceReport {
    pub lowest: Vec<TagAcceptance>,
    pub highest: Vec<TagAcceptance>,
}

/// Tag occurrence counts, most frequent first (ties by tag name)
pub fn tag_frequencies(catalog: &Catalog) -> Vec<TagFrequency> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for item in catalog {
        for tag in item.tags() {
            *counts.entry(tag.as_str()).or_default() += 1;
        }
    }

    let total: usize = counts.values().sum();
    let mut frequencies: Vec<TagFrequency> = counts
        .into_iter()
        .map(|(tag, count)| TagFrequency {
            tag: tag.to_string(),
            count,
            share: count as f64 / total as f64,
        })
        .collect();

    frequencies.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));
    frequencies
}

/// Average acceptance rate per tag, ascending (ties by tag name)
pub fn tag_acceptance(catalog: &Catalog) -> Vec<TagAcceptance> {
    let mut sums: HashMap<&str, (f64, usize)> = HashMap::new();
    for item in catalog {
        for tag in item.tags() {
            let entry = sums.entry(tag.as_str()).or_insert((0.0, 0));
            entry.0 += item.acceptance_rate();
            entry.1 += 1;
        }
    }

    let mut averages: Vec<TagAcceptance> = sums
        .into_iter()
        .map(|(tag, (sum, problems))| TagAcceptance {
            tag: tag.to_string(),
            problems,
            average_acceptance: sum / problems as f64,
        })
        .collect();

    averages.sort_by(|a, b| {
        a.average_acceptance
            .total_cmp(&b.average_acceptance)
            .then_with(|| a.tag.cmp(&b.tag))
    });
    averages
}

/// The `top` lowest- and highest-acceptance tags.
///
/// With fewer than `2 * top` tags the two lists overlap.
pub fn tag_acceptance_report(catalog: &Catalog, top: usize) -> TagAcceptanceReport {
    let ranked = tag_acceptance(catalog);
    let lowest = ranked.iter().take(top).cloned().collect();
    let highest = ranked[ranked.len().saturating_sub(top)..].to_vec();
    TagAcceptanceReport { lowest, highest }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemRecord;

    fn catalog() -> Catalog {
        Catalog::from_records(vec![
            ItemRecord::new(1, "One", None, 80.0, ["Array", "Hash Table"]).unwrap(),
            ItemRecord::new(2, "Two", None, 40.0, ["Array", "Math"]).unwrap(),
            ItemRecord::new(3, "Three", None, 20.0, ["Array", "Graph"]).unwrap(),
            ItemRecord::new(4, "Four", None, 60.0, ["Math"]).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_frequencies_sorted_with_shares() {
        let freqs = tag_frequencies(&catalog());
        let order: Vec<(&str, usize)> = freqs.iter().map(|f| (f.tag.as_str(), f.count)).collect();
        assert_eq!(
            order,
            vec![("Array", 3), ("Math", 2), ("Graph", 1), ("Hash Table", 1)]
        );
        assert_eq!(freqs[0].share, 3.0 / 7.0);
        let total: f64 = freqs.iter().map(|f| f.share).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_acceptance_averages_ascending() {
        let ranked = tag_acceptance(&catalog());
        let order: Vec<&str> = ranked.iter().map(|t| t.tag.as_str()).collect();
        // Graph 20, Array 46.67, Math 50, Hash Table 80
        assert_eq!(order, vec!["Graph", "Array", "Math", "Hash Table"]);
        assert_eq!(ranked[1].problems, 3);
        assert!((ranked[1].average_acceptance - 140.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_acceptance_report_ends() {
        let report = tag_acceptance_report(&catalog(), 1);
        assert_eq!(report.lowest.len(), 1);
        assert_eq!(report.lowest[0].tag, "Graph");
        assert_eq!(report.highest.len(), 1);
        assert_eq!(report.highest[0].tag, "Hash Table");
    }

    #[test]
    fn test_acceptance_report_top_larger_than_tags() {
        let report = tag_acceptance_report(&catalog(), 10);
        assert_eq!(report.lowest.len(), 4);
        assert_eq!(report.highest.len(), 4);
    }

    #[test]
    fn test_empty_catalog() {
        let empty = Catalog::new();
        assert!(tag_frequencies(&empty).is_empty());
        assert_eq!(tag_acceptance_report(&empty, 10), TagAcceptanceReport::default());
    }
}
