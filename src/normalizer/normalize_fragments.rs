use std::collections::HashMap;

use crate::models::normalized_card_record::NormalizedCardRecord;
use crate::models::raw_card_fragment::RawCardFragment;
use crate::normalizer::normalize_fragment::{normalize_fragment, NormalizeContext};

/// Normalizes every fragment of the set, in page order, keeping at most
/// `limit` records, then groups them with [`group_by_code`].
pub fn normalize_fragments(
    fragments: &[RawCardFragment],
    context: &NormalizeContext,
    limit: Option<usize>,
) -> Vec<NormalizedCardRecord> {
    let records = fragments
        .iter()
        .filter_map(|fragment| normalize_fragment(fragment, context))
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    group_by_code(records)
}

/// Groups records sharing a code. Groups keep the order their code was first
/// seen in; inside a group the base printing comes first, then the other
/// variants sorted by name.
pub fn group_by_code(records: Vec<NormalizedCardRecord>) -> Vec<NormalizedCardRecord> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Vec<NormalizedCardRecord>> = Vec::new();

    for record in records {
        match positions.get(&record.code) {
            Some(&index) => groups[index].push(record),
            None => {
                positions.insert(record.code.clone(), groups.len());
                groups.push(vec![record]);
            }
        }
    }

    groups
        .into_iter()
        .flat_map(|mut group| {
            group.sort_by(|a, b| {
                (!a.is_base(), &a.variant).cmp(&(!b.is_base(), &b.variant))
            });
            group
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::labels::LabelConfig;

    fn fragment(identifier: &str) -> RawCardFragment {
        RawCardFragment {
            identifier: identifier.to_string(),
            ..Default::default()
        }
    }

    fn keys(records: &[NormalizedCardRecord]) -> Vec<(String, String)> {
        records
            .iter()
            .map(|record| (record.code.clone(), record.variant.clone()))
            .collect()
    }

    fn key(code: &str, variant: &str) -> (String, String) {
        (code.to_string(), variant.to_string())
    }

    fn run(identifiers: &[&str], limit: Option<usize>) -> Vec<NormalizedCardRecord> {
        let labels = LabelConfig::default();
        let context = NormalizeContext {
            set_code: "OP-09",
            set_prefix: "OP09",
            base_url: "https://fr.onepiece-cardgame.com",
            labels: &labels,
        };
        let fragments: Vec<_> = identifiers.iter().map(|id| fragment(id)).collect();

        normalize_fragments(&fragments, &context, limit)
    }

    #[test]
    fn base_comes_before_variants() {
        let records = run(&["OP09-001_p2", "OP09-001_p1", "OP09-001"], None);

        assert_eq!(
            keys(&records),
            vec![
                key("OP09-001", "base"),
                key("OP09-001", "p1"),
                key("OP09-001", "p2"),
            ]
        );
    }

    #[test]
    fn groups_follow_first_seen_order() {
        let records = run(
            &["OP09-002", "OP09-001", "OP09-002_p1", "OP09-001_p1"],
            None,
        );

        assert_eq!(
            keys(&records),
            vec![
                key("OP09-002", "base"),
                key("OP09-002", "p1"),
                key("OP09-001", "base"),
                key("OP09-001", "p1"),
            ]
        );
    }

    #[test]
    fn drops_other_sets() {
        let records = run(&["ST01-001", "OP09-001", "OP10-001_p1"], None);

        assert_eq!(keys(&records), vec![key("OP09-001", "base")]);
    }

    #[test]
    fn limit_counts_kept_records_only() {
        let records = run(&["ST01-001", "OP09-001", "OP09-001_p1", "OP09-002"], Some(2));

        assert_eq!(
            keys(&records),
            vec![key("OP09-001", "base"), key("OP09-001", "p1")]
        );
    }

    #[test]
    fn no_fragments_no_records() {
        assert!(run(&[], None).is_empty());
    }
}
