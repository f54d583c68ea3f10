//! The closed set of strategies and their decision rules.

use rand::Rng;
use rps_core::{AgentError, Configuration, Observation, Sign, DEFAULT_SIGNS};

use crate::histogram::Histogram;

/// Every `PERIODIC_RANDOM_INTERVAL`-th step the periodic-random strategy
/// ignores the opponent and plays at random.
pub const PERIODIC_RANDOM_INTERVAL: u32 = 5;

/// A decision rule together with the memory it owns.
///
/// Memory lives in the variant and survives across matches. Only the
/// variants for which [`Strategy::resets_on_first_step`] is true clear it,
/// and they do so themselves when they see step 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// Always the same sign, even when the game has too few signs for it.
    Constant(Sign),
    /// A fresh uniform draw every call.
    UniformRandom,
    /// Repeats the opponent's last move.
    Mirror,
    /// Plays the sign that beats the opponent's last move.
    Counter,
    /// Advances a running value by two every call, whatever the opponent did.
    AntiCounter { value: Sign },
    /// Plays `step % signs`.
    CyclicByStep,
    /// Beats the opponent's most frequent move so far.
    FrequencyCounter { histogram: Histogram },
    /// Cycles through the signs one call at a time.
    Alternator { counter: Sign },
    /// Plays each sign twice in a row, then moves on.
    StreakBreaker { last: Sign, toggle: bool },
    /// Flips a coin each call and advances on heads, always within the
    /// three classic signs.
    RandomSwitch { last: Sign },
    /// Opponent's last move shifted by a random 0, 1 or 2.
    RandomizedCounter,
    /// Holds one sign for a third of the episode, then advances.
    BatchShift { action: Sign, held: u32 },
    /// Alternates counter and frequency responses every third of the episode.
    BatchCombo {
        held: u32,
        counter_phase: bool,
        histogram: Histogram,
    },
    /// Counter-responds, except every fifth step which is random.
    PeriodicRandom,
}

impl Strategy {
    pub fn anti_counter() -> Self {
        Strategy::AntiCounter { value: 0 }
    }

    pub fn frequency_counter() -> Self {
        Strategy::FrequencyCounter {
            histogram: Histogram::new(),
        }
    }

    pub fn alternator() -> Self {
        Strategy::Alternator { counter: 0 }
    }

    pub fn streak_breaker() -> Self {
        Strategy::StreakBreaker {
            last: 0,
            toggle: false,
        }
    }

    /// The starting sign is drawn here, at construction, from the classic
    /// three-sign range.
    pub fn random_switch<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Strategy::RandomSwitch {
            last: rng.gen_range(0..DEFAULT_SIGNS),
        }
    }

    pub fn batch_shift() -> Self {
        Strategy::BatchShift { action: 0, held: 0 }
    }

    pub fn batch_combo() -> Self {
        Strategy::BatchCombo {
            held: 0,
            counter_phase: true,
            histogram: Histogram::new(),
        }
    }

    /// Short family label used in listings.
    pub fn family(&self) -> &'static str {
        match self {
            Strategy::Constant(_) => "constant",
            Strategy::UniformRandom => "uniform-random",
            Strategy::Mirror => "mirror",
            Strategy::Counter => "counter",
            Strategy::AntiCounter { .. } => "anti-counter",
            Strategy::CyclicByStep => "cyclic-by-step",
            Strategy::FrequencyCounter { .. } => "frequency-counter",
            Strategy::Alternator { .. } => "alternator",
            Strategy::StreakBreaker { .. } => "streak-breaker",
            Strategy::RandomSwitch { .. } => "random-switch",
            Strategy::RandomizedCounter => "randomized-counter",
            Strategy::BatchShift { .. } => "batch-shift",
            Strategy::BatchCombo { .. } => "batch-combo",
            Strategy::PeriodicRandom => "periodic-random",
        }
    }

    /// Whether this strategy clears its memory when an episode starts.
    ///
    /// Anti-counter, alternator and random-switch keep their memory for the
    /// whole tournament, and streak-breaker keeps its toggle.
    pub fn resets_on_first_step(&self) -> bool {
        matches!(
            self,
            Strategy::FrequencyCounter { .. }
                | Strategy::BatchShift { .. }
                | Strategy::BatchCombo { .. }
        )
    }

    /// Return memory to its freshly constructed state.
    ///
    /// `decide` only calls this for variants that reset on step 0; for the
    /// others it is available to callers that want a clean slate.
    /// Random-switch keeps its drawn sign.
    pub fn reset_memory(&mut self) {
        match self {
            Strategy::FrequencyCounter { histogram } => histogram.clear(),
            Strategy::BatchShift { action, held } => {
                *action = 0;
                *held = 0;
            }
            Strategy::BatchCombo {
                held,
                counter_phase,
                histogram,
            } => {
                *held = 0;
                *counter_phase = true;
                histogram.clear();
            }
            Strategy::AntiCounter { value } => *value = 0,
            Strategy::Alternator { counter } => *counter = 0,
            Strategy::StreakBreaker { last, toggle } => {
                *last = 0;
                *toggle = false;
            }
            _ => {}
        }
    }

    /// Pick a sign for this step, updating memory.
    ///
    /// `rng` is consulted only on the branches the strategy defines as random.
    pub fn decide<R: Rng + ?Sized>(
        &mut self,
        obs: &Observation,
        config: &Configuration,
        rng: &mut R,
    ) -> Result<Sign, AgentError> {
        let signs = config.signs;
        if !obs.is_first() {
            obs.opponent_action()?;
        }

        if obs.is_first() && self.resets_on_first_step() {
            self.reset_memory();
        }

        let sign = match self {
            Strategy::Constant(sign) => *sign,

            Strategy::UniformRandom => random_sign(rng, signs),

            Strategy::Mirror => {
                if obs.is_first() {
                    random_sign(rng, signs)
                } else {
                    obs.opponent_action()?
                }
            }

            Strategy::Counter => {
                if obs.is_first() {
                    random_sign(rng, signs)
                } else {
                    beats(obs.opponent_action()?, signs)
                }
            }

            Strategy::AntiCounter { value } => {
                *value = (*value + 2) % signs;
                *value
            }

            Strategy::CyclicByStep => {
                if obs.is_first() {
                    random_sign(rng, signs)
                } else {
                    obs.step % signs
                }
            }

            Strategy::FrequencyCounter { histogram } => {
                if obs.is_first() {
                    random_sign(rng, signs)
                } else {
                    let last = obs.opponent_action()?;
                    histogram.record(last);
                    beats(histogram.mode().unwrap_or(last), signs)
                }
            }

            Strategy::Alternator { counter } => {
                *counter = (*counter + 1) % signs;
                *counter
            }

            Strategy::StreakBreaker { last, toggle } => {
                if obs.is_first() {
                    *last = random_sign(rng, signs);
                } else if *toggle {
                    *last = (*last + 1) % signs;
                    *toggle = false;
                } else {
                    *toggle = true;
                }
                *last
            }

            Strategy::RandomSwitch { last } => {
                if rng.gen_bool(0.5) {
                    *last = (*last + 1) % DEFAULT_SIGNS;
                }
                *last
            }

            Strategy::RandomizedCounter => {
                if obs.is_first() {
                    random_sign(rng, signs)
                } else {
                    (obs.opponent_action()? + rng.gen_range(0..=2)) % signs
                }
            }

            Strategy::BatchShift { action, held } => {
                if obs.is_first() {
                    *action = random_sign(rng, signs);
                } else if *held >= block_len(config) {
                    *action = (*action + 1) % signs;
                    *held = 0;
                }
                *held += 1;
                *action
            }

            Strategy::BatchCombo {
                held,
                counter_phase,
                histogram,
            } => {
                if *held >= block_len(config) {
                    *counter_phase = !*counter_phase;
                    *held = 0;
                }
                *held += 1;

                if obs.is_first() {
                    random_sign(rng, signs)
                } else {
                    let last = obs.opponent_action()?;
                    histogram.record(last);
                    if *counter_phase {
                        beats(last, signs)
                    } else {
                        beats(histogram.mode().unwrap_or(last), signs)
                    }
                }
            }

            Strategy::PeriodicRandom => {
                if obs.step % PERIODIC_RANDOM_INTERVAL == 0 {
                    random_sign(rng, signs)
                } else {
                    beats(obs.opponent_action()?, signs)
                }
            }
        };

        Ok(sign)
    }
}

/// Number of consecutive calls a batch strategy spends in one block.
pub fn block_len(config: &Configuration) -> u32 {
    (config.episode_steps / 3).max(1)
}

/// The sign that beats `sign`.
#[inline]
pub fn beats(sign: Sign, signs: u32) -> Sign {
    (sign + 1) % signs
}

#[inline]
fn random_sign<R: Rng + ?Sized>(rng: &mut R, signs: u32) -> Sign {
    rng.gen_range(0..signs)
}
