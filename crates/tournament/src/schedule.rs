//! Round-robin pairings.

/// Every unordered pair `(i, j)` with `i < j`, in lexicographic order.
pub fn round_robin(agents: usize) -> Vec<(usize, usize)> {
    (0..agents)
        .flat_map(|i| (i + 1..agents).map(move |j| (i, j)))
        .collect()
}

/// Number of matches a full round robin over `agents` plays.
pub fn match_count(agents: usize) -> usize {
    agents * agents.saturating_sub(1) / 2
}

/// The same pairs as [`round_robin`], grouped into rounds in which no
/// agent appears twice (circle method).
///
/// With an odd roster one agent sits out each round.
pub fn rounds(agents: usize) -> Vec<Vec<(usize, usize)>> {
    if agents < 2 {
        return Vec::new();
    }
    // pad to an even count; the padding slot is the bye
    let slots = agents + agents % 2;
    let mut circle: Vec<usize> = (0..slots).collect();
    let mut schedule = Vec::with_capacity(slots - 1);

    for _ in 0..slots - 1 {
        let round: Vec<(usize, usize)> = (0..slots / 2)
            .map(|k| (circle[k], circle[slots - 1 - k]))
            .filter(|&(a, b)| a < agents && b < agents)
            .map(|(a, b)| (a.min(b), a.max(b)))
            .collect();
        schedule.push(round);
        circle[1..].rotate_right(1);
    }

    schedule
}
