use tracing::warn;

use crate::models::{Direction, RawTargets, Target, TargetStatus};

/// Normalize the stored `targets` field into labeled price levels ordered the
/// way the trade walks through them: ascending for a buy, descending for a
/// sell, then labeled `T1..Tn`. `T1` is always the level nearest the entry in
/// the favorable direction.
pub fn parse_targets(raw: &RawTargets, direction: Direction) -> Vec<Target> {
    let mut targets: Vec<Target> = match raw {
        RawTargets::Mapping(entries) => entries
            .iter()
            .map(|(price, status)| target_at(price, TargetStatus::from_wire(status)))
            .collect(),
        RawTargets::DelimitedList(prices) => prices
            .iter()
            .map(|price| target_at(price, TargetStatus::Pending))
            .collect(),
        RawTargets::Scalar(price) => vec![target_at(price, TargetStatus::Pending)],
        RawTargets::Absent => Vec::new(),
    };

    match direction {
        Direction::Buy => targets.sort_by(|a, b| a.numeric_price.total_cmp(&b.numeric_price)),
        Direction::Sell => targets.sort_by(|a, b| b.numeric_price.total_cmp(&a.numeric_price)),
    }
    for (position, target) in targets.iter_mut().enumerate() {
        target.label = format!("T{}", position + 1);
    }
    targets
}

// Labels are assigned after the sort, so the label starts out empty here.
// A price that fails to parse keeps its text and gets numeric 0, so one bad
// entry never discards the rest of the list.
fn target_at(price: &str, status: TargetStatus) -> Target {
    let price = price.trim();
    let numeric_price = price.parse::<f64>().unwrap_or_else(|_| {
        warn!("Unparseable target price {:?}, defaulting to 0", price);
        0_f64
    });
    Target {
        label: String::new(),
        price: price.to_string(),
        status,
        numeric_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(targets: &[Target]) -> Vec<&str> {
        targets.iter().map(|t| t.label.as_str()).collect()
    }

    #[test]
    fn test_comma_list_yields_pending_targets_in_order() {
        let raw = RawTargets::from_text("45000,47000,49000");
        let targets = parse_targets(&raw, Direction::Buy);

        assert_eq!(targets.len(), 3, "one target per comma token");
        assert_eq!(labels(&targets), vec!["T1", "T2", "T3"]);
        assert_eq!(targets[0].numeric_price, 45000.0);
        assert_eq!(targets[1].numeric_price, 47000.0);
        assert_eq!(targets[2].numeric_price, 49000.0);
        assert!(targets.iter().all(|t| t.status == TargetStatus::Pending));
    }

    #[test]
    fn test_mapping_sorts_ascending_for_buy() {
        let raw = RawTargets::from_text(r#"{"47000":"hit","45000":"pending"}"#);
        let targets = parse_targets(&raw, Direction::Buy);

        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].label, "T1");
        assert_eq!(targets[0].numeric_price, 45000.0);
        assert_eq!(targets[0].status, TargetStatus::Pending);
        assert_eq!(targets[1].label, "T2");
        assert_eq!(targets[1].numeric_price, 47000.0);
        assert_eq!(targets[1].status, TargetStatus::Hit);
    }

    #[test]
    fn test_mapping_sorts_descending_for_sell() {
        let raw = RawTargets::from_text(r#"{"2500":"pending","2650":"hit","2400":"pending"}"#);
        let targets = parse_targets(&raw, Direction::Sell);

        let prices: Vec<f64> = targets.iter().map(|t| t.numeric_price).collect();
        assert_eq!(prices, vec![2650.0, 2500.0, 2400.0], "nearest level first for a short");
        assert_eq!(labels(&targets), vec!["T1", "T2", "T3"]);
    }

    #[test]
    fn test_scalar_yields_single_target() {
        let targets = parse_targets(&RawTargets::from_text("45000"), Direction::Buy);
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].label, "T1");
        assert_eq!(targets[0].price, "45000");
        assert_eq!(targets[0].status, TargetStatus::Pending);
    }

    #[test]
    fn test_absent_and_unparseable_yield_empty_list() {
        assert!(parse_targets(&RawTargets::Absent, Direction::Buy).is_empty());
        assert!(parse_targets(&RawTargets::from_text("not-json-not-csv"), Direction::Buy).is_empty());
    }

    #[test]
    fn test_bad_price_defaults_to_zero_and_keeps_the_rest() {
        let raw = RawTargets::from_text("45000,abc,49000");
        let targets = parse_targets(&raw, Direction::Buy);

        assert_eq!(targets.len(), 3, "bad token must not discard the list");
        // Zero sorts first on a buy, so the bad entry lands at T1.
        assert_eq!(targets[0].numeric_price, 0.0);
        assert_eq!(targets[0].price, "abc");
        assert_eq!(targets[1].numeric_price, 45000.0);
    }

    #[test]
    fn test_labels_are_reassigned_after_sorting() {
        let raw = RawTargets::DelimitedList(vec!["49000".to_string(), "45000".to_string()]);
        let targets = parse_targets(&raw, Direction::Buy);

        assert_eq!(targets[0].price, "45000", "insertion order is discarded");
        assert_eq!(targets[0].label, "T1");
        assert_eq!(targets[1].price, "49000");
        assert_eq!(targets[1].label, "T2");
    }

    #[test]
    fn test_mapping_roundtrip_preserves_price_status_pairs() {
        let encoded =
            serde_json::json!({"49000": "fail", "45000": "hit", "47000": "pending"}).to_string();

        let targets = parse_targets(&RawTargets::from_text(&encoded), Direction::Buy);
        let mut pairs: Vec<(String, TargetStatus)> =
            targets.iter().map(|t| (t.price.clone(), t.status)).collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));

        assert_eq!(
            pairs,
            vec![
                ("45000".to_string(), TargetStatus::Hit),
                ("47000".to_string(), TargetStatus::Pending),
                ("49000".to_string(), TargetStatus::Fail),
            ]
        );
    }
}
