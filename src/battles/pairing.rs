use super::ranking::rank_by_points;
use crate::domain::{BattlePair, Record};

/// Adjacent-rank battles of one team, formatted as `higher:lower`
pub fn compute_battles(members: &[Record]) -> Vec<String> {
    battle_pairs(members)
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Pair each driver with the teammate ranked directly below.
///
/// Only consecutive ranks are compared, so a team of `n` drivers yields at
/// most `n - 1` pairs. A pair where neither driver scored is dropped.
pub fn battle_pairs(members: &[Record]) -> Vec<BattlePair> {
    let ranked = rank_by_points(members);

    ranked
        .windows(2)
        .filter(|pair| is_contested(pair[0], pair[1]))
        .map(|pair| BattlePair {
            higher: pair[0].name.clone(),
            lower: pair[1].name.clone(),
        })
        .collect()
}

fn is_contested(higher: &Record, lower: &Record) -> bool {
    higher.has_scored() || lower.has_scored()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(members: &[(&str, f64)]) -> Vec<Record> {
        members
            .iter()
            .map(|(name, points)| Record::new(*name, "Team1", *points))
            .collect()
    }

    #[test]
    fn test_empty_and_single_member_teams() {
        assert!(compute_battles(&[]).is_empty());
        assert!(compute_battles(&team(&[("A", 12.0)])).is_empty());
    }

    #[test]
    fn test_trailing_zero_pair_is_skipped() {
        let members = team(&[("A", 10.0), ("B", 0.0), ("C", 0.0)]);
        assert_eq!(compute_battles(&members), vec!["A:B"]);
    }

    #[test]
    fn test_both_zero_yields_nothing() {
        let members = team(&[("A", 0.0), ("B", 0.0)]);
        assert!(compute_battles(&members).is_empty());
    }

    #[test]
    fn test_three_drivers_only_adjacent_ranks() {
        let members = team(&[("C", 5.0), ("A", 20.0), ("B", 15.0)]);
        assert_eq!(compute_battles(&members), vec!["A:B", "B:C"]);
    }

    #[test]
    fn test_one_zero_pair_is_kept() {
        let members = team(&[("B", 0.0), ("A", 0.5)]);
        assert_eq!(compute_battles(&members), vec!["A:B"]);
    }

    #[test]
    fn test_numeric_ordering() {
        let members = team(&[("Nine", 9.0), ("Hundred", 100.0), ("Ten", 10.0)]);
        assert_eq!(compute_battles(&members), vec!["Hundred:Ten", "Ten:Nine"]);
    }

    #[test]
    fn test_idempotent_and_input_untouched() {
        let members = team(&[("B", 1.0), ("D", 0.0), ("A", 7.0), ("C", 1.0), ("E", 0.0)]);
        let snapshot = members.clone();

        let first = compute_battles(&members);
        let second = compute_battles(&members);

        assert_eq!(first, second);
        assert_eq!(members, snapshot);
        assert_eq!(first, vec!["A:B", "B:C", "C:D"]);
    }

    #[test]
    fn test_pair_count_bound_and_ordering() {
        let members = team(&[
            ("A", 3.0),
            ("B", 0.0),
            ("C", 18.0),
            ("D", 0.0),
            ("E", 3.0),
            ("F", 42.0),
        ]);
        let pairs = battle_pairs(&members);
        assert!(pairs.len() <= members.len() - 1);

        let points = |name: &str| members.iter().find(|r| r.name == name).unwrap().points;
        for pair in &pairs {
            assert!(points(&pair.higher) >= points(&pair.lower));
        }
    }
}
