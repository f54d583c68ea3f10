//! Scoring policy: raw match wins into tournament points

use crate::error::TournamentError;
use crate::match_runner::{MatchOutcome, MatchResult};
use crate::results::ResultsTable;

/// Points for taking a match
pub const WIN_POINTS: u32 = 2;
/// Points each side gets for a drawn match
pub const DRAW_POINTS: u32 = 1;

/// Fold one match into the table.
///
/// Win counts go to each side's `episodes_sum`; the side with more step
/// wins takes [`WIN_POINTS`], equal counts give both [`DRAW_POINTS`].
/// Totals only ever grow.
pub fn apply_result(
    table: &mut ResultsTable,
    left: &str,
    right: &str,
    result: &MatchResult,
) -> Result<(), TournamentError> {
    // look both up before touching either so a bad name leaves the table as it was
    table.get_mut(left)?;
    table.get_mut(right)?;

    let outcome = result.outcome();
    {
        let standing = table.get_mut(left)?;
        standing.episodes_sum += u64::from(result.left_wins);
        standing.points += match outcome {
            MatchOutcome::Left => WIN_POINTS,
            MatchOutcome::Draw => DRAW_POINTS,
            MatchOutcome::Right => 0,
        };
    }
    {
        let standing = table.get_mut(right)?;
        standing.episodes_sum += u64::from(result.right_wins);
        standing.points += match outcome {
            MatchOutcome::Right => WIN_POINTS,
            MatchOutcome::Draw => DRAW_POINTS,
            MatchOutcome::Left => 0,
        };
    }
    Ok(())
}
