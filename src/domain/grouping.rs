use super::models::{Record, TeamGroup};
use std::collections::HashMap;

/// Groups under construction, indexed by team label
struct SeasonTeams {
    groups: Vec<TeamGroup>,
    index: HashMap<String, usize>,
}

impl SeasonTeams {
    fn new() -> Self {
        Self {
            groups: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn add(&mut self, record: Record) {
        let slot = match self.index.get(&record.team) {
            Some(&slot) => slot,
            None => {
                let slot = self.groups.len();
                self.index.insert(record.team.clone(), slot);
                self.groups.push(TeamGroup::new(record.team.clone()));
                slot
            }
        };
        self.groups[slot].push(record);
    }
}

/// Partition a season's records by team label.
///
/// Teams come out in order of first appearance, members in input order.
pub fn group_by_team(records: Vec<Record>) -> Vec<TeamGroup> {
    let mut teams = SeasonTeams::new();
    for record in records {
        teams.add(record);
    }
    teams.groups
}
