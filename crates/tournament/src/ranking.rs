//! Total orders over a results table.
//!
//! Both orders use a stable sort, so agents tied on both keys keep their
//! roster order.

use std::cmp::Reverse;

use crate::results::{ResultsTable, Standing};

/// Points descending, then episode wins descending
pub fn by_points(table: &ResultsTable) -> Vec<&Standing> {
    let mut order: Vec<&Standing> = table.standings().iter().collect();
    order.sort_by_key(|s| (Reverse(s.points), Reverse(s.episodes_sum)));
    order
}

/// Episode wins descending, then points descending
pub fn by_episodes(table: &ResultsTable) -> Vec<&Standing> {
    let mut order: Vec<&Standing> = table.standings().iter().collect();
    order.sort_by_key(|s| (Reverse(s.episodes_sum), Reverse(s.points)));
    order
}
