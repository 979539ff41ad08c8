use std::fmt;

/// One driver's result for a single season
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub name: String,
    pub team: String,
    pub points: f64,
}

impl Record {
    pub fn new(name: impl Into<String>, team: impl Into<String>, points: f64) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
            points,
        }
    }

    pub fn has_scored(&self) -> bool {
        self.points != 0.0
    }
}

/// A team's drivers within one season
#[derive(Debug, Clone, PartialEq)]
pub struct TeamGroup {
    pub name: String,
    pub members: Vec<Record>,
}

impl TeamGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn push(&mut self, record: Record) {
        self.members.push(record);
    }
}

/// Adjacent-rank matchup between two teammates, higher ranked first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattlePair {
    pub higher: String,
    pub lower: String,
}

impl fmt::Display for BattlePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.higher, self.lower)
    }
}
