use crate::domain::Record;

/// Order teammates by points, highest first.
///
/// The sort is stable: drivers tied on points keep the order they had on the
/// results page.
pub fn rank_by_points(members: &[Record]) -> Vec<&Record> {
    let mut ranked: Vec<&Record> = members.iter().collect();
    ranked.sort_by(|a, b| b.points.total_cmp(&a.points));
    ranked
}
