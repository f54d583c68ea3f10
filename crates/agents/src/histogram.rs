use rps_core::Sign;

/// Counts of observed opponent signs, kept in first-seen order.
///
/// Order matters: when several signs share the highest count, the one
/// observed first wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    counts: Vec<(Sign, u32)>,
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, sign: Sign) {
        match self.counts.iter_mut().find(|(s, _)| *s == sign) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((sign, 1)),
        }
    }

    pub fn count(&self, sign: Sign) -> u32 {
        self.counts
            .iter()
            .find(|(s, _)| *s == sign)
            .map_or(0, |&(_, count)| count)
    }

    /// Most frequent sign, ties going to the earliest observed.
    pub fn mode(&self) -> Option<Sign> {
        let mut best: Option<(Sign, u32)> = None;
        for &(sign, count) in &self.counts {
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((sign, count));
            }
        }
        best.map(|(sign, _)| sign)
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&(_, count)| count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }
}
