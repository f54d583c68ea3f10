use super::*;
use std::collections::HashSet;

#[test]
fn round_robin_enumerates_each_pair_once() {
    for k in 0..12 {
        let pairs = schedule::round_robin(k);
        assert_eq!(pairs.len(), schedule::match_count(k));
        assert_eq!(pairs.len(), k * k.saturating_sub(1) / 2);
        let unique: HashSet<_> = pairs.iter().collect();
        assert_eq!(unique.len(), pairs.len());
        assert!(pairs.iter().all(|&(i, j)| i < j && j < k));
    }
}

#[test]
fn round_robin_order_is_lexicographic() {
    assert_eq!(
        schedule::round_robin(4),
        vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
    );
}

#[test]
fn rounds_cover_the_same_pairs() {
    for k in 2..12 {
        let mut from_rounds: Vec<(usize, usize)> =
            schedule::rounds(k).into_iter().flatten().collect();
        from_rounds.sort();
        assert_eq!(from_rounds, schedule::round_robin(k), "roster of {k}");
    }
}

#[test]
fn no_agent_plays_twice_in_a_round() {
    for k in 2..12 {
        for round in schedule::rounds(k) {
            let mut seen = HashSet::new();
            for (i, j) in round {
                assert!(seen.insert(i), "{i} twice with {k} agents");
                assert!(seen.insert(j), "{j} twice with {k} agents");
            }
        }
    }
}

#[test]
fn round_counts() {
    assert_eq!(schedule::rounds(4).len(), 3);
    assert_eq!(schedule::rounds(5).len(), 5);
    assert!(schedule::rounds(1).is_empty());
    assert!(schedule::rounds(0).is_empty());
}
